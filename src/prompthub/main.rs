use clap::Parser;
use directories::ProjectDirs;
use prompthub::api::{ConfigAction, GalleryApi, SortMode, ToolSelector, WorkDraft, WorkFilter};
use prompthub::clipboard::copy_to_clipboard;
use prompthub::config::GalleryConfig;
use prompthub::error::{HubError, Result};
use prompthub::layout::{check_columns, distribute};
use prompthub::model::{PromptKind, ToolType};
use prompthub::prompt::segment;
use prompthub::store::fs::FileStore;
use std::path::PathBuf;
use tracing::Level;

mod args;
mod print;
use args::{Cli, Commands};
use print::{
    print_config, print_detail, print_grid, print_messages, print_platforms, print_segments,
    print_tools, print_works,
};

const HOME_ENV: &str = "PROMPTHUB_HOME";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: GalleryApi<FileStore>,
    config: GalleryConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Pure text operation, no gallery needed
    if let Some(Commands::Segments { text, negative }) = &cli.command {
        return handle_segments(text, *negative);
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List {
            tool,
            search,
            sort,
            grid,
            columns,
        }) => handle_list(&mut ctx, tool, search, sort, grid, columns),
        Some(Commands::View { id, copy, copy_all }) => handle_view(&mut ctx, id, copy, copy_all),
        Some(Commands::Like { id }) => handle_like(&mut ctx, id),
        Some(Commands::Upload {
            title,
            images,
            tool,
            prompt,
            negative,
            tags,
        }) => handle_upload(&mut ctx, title, images, tool, prompt, negative, tags),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, id),
        Some(Commands::Favorites { sort }) => handle_favorites(&mut ctx, sort),
        Some(Commands::Uploads { sort }) => handle_uploads(&mut ctx, sort),
        Some(Commands::Platforms) => handle_platforms(&ctx),
        Some(Commands::Tools) => handle_tools(&ctx),
        Some(Commands::Segments { text, negative }) => handle_segments(&text, negative),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::Init { force }) => handle_init(&mut ctx, force),
        None => handle_list(&mut ctx, "all".to_string(), String::new(), None, false, None),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "prompthub", "prompthub")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            HubError::Store(format!(
                "Could not determine a data directory; pass --data-dir or set {}",
                HOME_ENV
            ))
        })
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    tracing::debug!(path = %data_dir.display(), "using data directory");

    let config = GalleryConfig::load(&data_dir)?;
    let store = FileStore::new(data_dir.clone());
    let api = GalleryApi::new(store, data_dir);

    Ok(AppContext { api, config })
}

fn handle_list(
    ctx: &mut AppContext,
    tool: String,
    search: String,
    sort: Option<SortMode>,
    grid: bool,
    columns: Option<usize>,
) -> Result<()> {
    let selector: ToolSelector = tool.parse().unwrap_or_default();
    let filter = WorkFilter::new(selector, search, sort.unwrap_or(ctx.config.sort));
    let result = ctx.api.list_works(&filter)?;

    if grid {
        let count = check_columns(columns.unwrap_or(ctx.config.columns))?;
        let layout = distribute(result.listed_works, count)?;
        print_grid(&layout);
    } else {
        print_works(&result.listed_works);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(
    ctx: &mut AppContext,
    id: String,
    copy: Option<String>,
    copy_all: Option<PromptKind>,
) -> Result<()> {
    let result = ctx.api.view_work(&id)?;
    let detail = result
        .detail
        .ok_or_else(|| HubError::WorkNotFound(id.clone()))?;

    let copied = match (copy, copy_all) {
        (Some(segment_id), _) => Some(detail.find_segment(&segment_id)?.text.clone()),
        (None, Some(kind)) => Some(detail.full_prompt(kind)?.to_string()),
        (None, None) => None,
    };

    print_detail(&detail);
    if let Some(text) = copied {
        match copy_to_clipboard(&text) {
            Ok(()) => println!("\nCopied to clipboard: {}", text),
            Err(e) => eprintln!("Warning: Failed to copy to clipboard: {}", e),
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_like(ctx: &mut AppContext, id: String) -> Result<()> {
    let result = ctx.api.toggle_like(&id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_upload(
    ctx: &mut AppContext,
    title: String,
    images: Vec<String>,
    tool: Option<ToolType>,
    prompt: String,
    negative: Option<String>,
    tags: String,
) -> Result<()> {
    let draft = WorkDraft {
        title,
        images,
        tool,
        positive_prompt: prompt,
        negative_prompt: negative,
        tags,
    };
    let result = ctx.api.upload_work(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: String) -> Result<()> {
    let result = ctx.api.delete_work(&id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_favorites(ctx: &mut AppContext, sort: Option<SortMode>) -> Result<()> {
    let result = ctx.api.favorites(sort.unwrap_or(ctx.config.sort))?;
    print_works(&result.listed_works);
    print_messages(&result.messages);
    Ok(())
}

fn handle_uploads(ctx: &mut AppContext, sort: Option<SortMode>) -> Result<()> {
    let result = ctx.api.uploads(sort.unwrap_or(ctx.config.sort))?;
    print_works(&result.listed_works);
    print_messages(&result.messages);
    Ok(())
}

fn handle_platforms(ctx: &AppContext) -> Result<()> {
    print_platforms(&ctx.api.platforms().platforms);
    Ok(())
}

fn handle_tools(ctx: &AppContext) -> Result<()> {
    print_tools(&ctx.api.tools().tools);
    Ok(())
}

fn handle_segments(text: &str, negative: bool) -> Result<()> {
    let kind = if negative {
        PromptKind::Negative
    } else {
        PromptKind::Positive
    };
    let heading = if negative {
        "Negative prompt"
    } else {
        "Positive prompt"
    };
    print_segments(heading, &segment(text, kind));
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let show_all = matches!(action, ConfigAction::ShowAll);
    let result = ctx.api.config(action)?;
    if let (true, Some(config)) = (show_all, &result.config) {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &mut AppContext, force: bool) -> Result<()> {
    let result = ctx.api.init(force)?;
    print_messages(&result.messages);
    Ok(())
}
