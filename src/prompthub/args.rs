use clap::{Parser, Subcommand};
use prompthub::api::SortMode;
use prompthub::model::{PromptKind, ToolType};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "prompthub", version)]
#[command(about = "Browse, filter and share AI-generated works and their prompts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Gallery data directory (defaults to $PROMPTHUB_HOME, then the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List works, filtered and sorted
    #[command(alias = "ls")]
    List {
        /// Tool to filter by (e.g. midjourney, stable-diffusion) or "all"
        #[arg(short, long, default_value = "all")]
        tool: String,

        /// Case-insensitive search over title, prompt and tags
        #[arg(short, long, default_value = "")]
        search: String,

        /// Sort order: latest or popular (defaults to the configured order)
        #[arg(long)]
        sort: Option<SortMode>,

        /// Lay the results out in masonry columns
        #[arg(short, long)]
        grid: bool,

        /// Column count for --grid (defaults to the configured count)
        #[arg(short, long, requires = "grid")]
        columns: Option<usize>,
    },

    /// Show a work with its prompt segments
    #[command(alias = "v")]
    View {
        /// Work id (e.g. work-001)
        id: String,

        /// Copy one segment to the clipboard (e.g. positive-2)
        #[arg(long, conflicts_with = "copy_all")]
        copy: Option<String>,

        /// Copy a whole prompt to the clipboard
        #[arg(long, value_name = "KIND")]
        copy_all: Option<PromptKind>,
    },

    /// Like a work, or remove your like
    Like {
        /// Work id
        id: String,
    },

    /// Publish a new work
    Upload {
        /// Title of the work
        #[arg(long)]
        title: String,

        /// Image reference; repeat for several (at most 9)
        #[arg(long = "image", num_args = 1..)]
        images: Vec<String>,

        /// Tool the images were generated with
        #[arg(long)]
        tool: Option<ToolType>,

        /// Positive prompt
        #[arg(long)]
        prompt: String,

        /// Negative prompt
        #[arg(long)]
        negative: Option<String>,

        /// Comma-separated tags
        #[arg(long, default_value = "")]
        tags: String,
    },

    /// Delete a work
    #[command(alias = "rm")]
    Delete {
        /// Work id
        id: String,
    },

    /// Works you have liked
    Favorites {
        #[arg(long)]
        sort: Option<SortMode>,
    },

    /// Works you have published
    Uploads {
        #[arg(long)]
        sort: Option<SortMode>,
    },

    /// Recommended AI platforms
    Platforms,

    /// Supported generation tools
    Tools,

    /// Split a prompt into its segments
    Segments {
        /// Prompt text
        text: String,

        /// Label segments as negative
        #[arg(long)]
        negative: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (sort, columns, viewer)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Fill an empty gallery with sample works
    Init {
        /// Replace existing works
        #[arg(long)]
        force: bool,
    },
}
