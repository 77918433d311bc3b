use chrono::{DateTime, Utc};
use colored::Colorize;
use prompthub::api::{CmdMessage, MessageLevel, WorkDetail};
use prompthub::config::GalleryConfig;
use prompthub::model::{Platform, Work};
use prompthub::prompt::PromptSegment;
use prompthub::tools::{tool_info, ToolInfo};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const TOOL_WIDTH: usize = 4;
const LIKES_WIDTH: usize = 8;
const COLUMN_GAP: usize = 2;
const LIKED_MARKER: &str = "♥";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_works(works: &[Work]) {
    if works.is_empty() {
        println!("No works found.");
        return;
    }

    for work in works {
        let id_str = format!("{:<9}", work.id);
        let tool = pad_to_width(tool_info(work.tool).short_name, TOOL_WIDTH);
        let likes = format_likes(work);
        let time_ago = format_time_ago(work.created_at);

        let fixed = id_str.width() + 1 + TOOL_WIDTH + 1 + LIKES_WIDTH + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let title = pad_to_width(&truncate_to_width(&summary(work), available), available);

        println!(
            "{} {} {}{}{}",
            id_str.yellow(),
            tool.cyan(),
            title,
            likes,
            time_ago.dimmed()
        );
    }
    println!("\n{} works", works.len());
}

/// Prints works dealt into masonry columns, one card row per line.
pub(super) fn print_grid(columns: &[Vec<Work>]) {
    if columns.iter().all(|c| c.is_empty()) {
        println!("No works found.");
        return;
    }

    let count = columns.len();
    let width = (LINE_WIDTH.saturating_sub(COLUMN_GAP * count.saturating_sub(1)) / count).max(8);
    let rows = columns.iter().map(Vec::len).max().unwrap_or(0);

    for row in 0..rows {
        let mut titles = Vec::with_capacity(count);
        let mut metas = Vec::with_capacity(count);
        for column in columns {
            match column.get(row) {
                Some(work) => {
                    titles.push(pad_to_width(&truncate_to_width(&work.title, width), width));
                    let meta = format!(
                        "{} {} {}",
                        work.id,
                        tool_info(work.tool).short_name,
                        format_likes(work).trim()
                    );
                    metas.push(pad_to_width(&truncate_to_width(&meta, width), width));
                }
                None => {
                    titles.push(" ".repeat(width));
                    metas.push(" ".repeat(width));
                }
            }
        }
        let gap = " ".repeat(COLUMN_GAP);
        println!("{}", titles.join(&gap).bold());
        println!("{}", metas.join(&gap).dimmed());
        println!();
    }
}

pub(super) fn print_detail(detail: &WorkDetail) {
    let work = &detail.work;
    println!("{} {}", work.id.yellow(), work.title.bold());
    println!("--------------------------------");
    println!(
        "{} {} · {}",
        detail.tool.icon,
        detail.tool.name.cyan(),
        work.created_at.format("%Y-%m-%d")
    );
    match &work.author.department {
        Some(department) => println!("by {} ({})", work.author.name, department),
        None => println!("by {}", work.author.name),
    }
    println!("{}", format_likes(work).trim());

    if !work.tags.is_empty() {
        let tags: Vec<String> = work.tags.iter().map(|t| format!("#{}", t)).collect();
        println!("{}", tags.join(" ").magenta());
    }

    println!("\nImages:");
    for (i, image) in work.images.iter().enumerate() {
        println!("  {}. {}", i + 1, image);
    }

    print_segments("Positive prompt", &detail.positive);
    if !detail.negative.is_empty() {
        print_segments("Negative prompt", &detail.negative);
    }
}

pub(super) fn print_segments(heading: &str, segments: &[PromptSegment]) {
    println!("\n{}:", heading);
    if segments.is_empty() {
        println!("  {}", "(empty)".dimmed());
        return;
    }
    let id_width = segments.iter().map(|s| s.id.width()).max().unwrap_or(0);
    for segment in segments {
        println!(
            "  {}  {}",
            pad_to_width(&segment.id, id_width).dimmed(),
            segment.text
        );
    }
}

pub(super) fn print_platforms(platforms: &[Platform]) {
    for (i, platform) in platforms.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} {}", platform.icon, platform.name.bold());
        println!("  {}", platform.description);
        println!("  {}", platform.url.underline());
        if !platform.tags.is_empty() {
            println!("  {}", platform.tags.join(", ").dimmed());
        }
    }
}

pub(super) fn print_tools(tools: &[&ToolInfo]) {
    for tool in tools {
        println!(
            "{} {} {}  {}",
            tool.icon,
            pad_to_width(tool.short_name, TOOL_WIDTH).cyan(),
            pad_to_width(&tool.id.to_string(), 18),
            tool.name
        );
    }
}

pub(super) fn print_config(config: &GalleryConfig) {
    println!("sort = {}", config.sort);
    println!("columns = {}", config.columns);
    println!("viewer = {}", config.viewer);
}

fn summary(work: &Work) -> String {
    if work.tags.is_empty() {
        work.title.clone()
    } else {
        let tags: Vec<String> = work.tags.iter().map(|t| format!("#{}", t)).collect();
        format!("{} {}", work.title, tags.join(" "))
    }
}

fn format_likes(work: &Work) -> String {
    let marker = if work.is_liked { LIKED_MARKER } else { " " };
    format!("{:>width$} {} ", work.likes, marker, width = LIKES_WIDTH - 3)
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
