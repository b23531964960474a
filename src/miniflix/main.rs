use chrono::{DateTime, Local};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use miniflix::api::MiniflixApi;
use miniflix::commands::{CmdMessage, DisplayItem, MessageLevel};
use miniflix::config::MiniflixConfig;
use miniflix::error::{MiniflixError, Result};
use miniflix::model::FeedbackEntry;
use miniflix::store::fs::FileStore;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: MiniflixApi<FileStore>,
    featured_count: usize,
    trending_count: usize,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Home) => handle_home(&mut ctx),
        Some(Commands::Library) => handle_library(&mut ctx),
        Some(Commands::Trending) => handle_trending(&mut ctx),
        Some(Commands::Upload { path }) => handle_upload(&mut ctx, &path),
        Some(Commands::Browse) | None => handle_browse(&mut ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let poster_dir = resolve_poster_dir(cli)?;
    let config = MiniflixConfig::load(&poster_dir).unwrap_or_default();

    let store = FileStore::new(poster_dir);
    let api = match cli.seed {
        Some(seed) => MiniflixApi::with_seed(store, seed),
        None => MiniflixApi::new(store),
    };

    Ok(AppContext {
        api,
        featured_count: config.featured_count,
        trending_count: config.trending_count,
    })
}

fn resolve_poster_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.dir {
        return Ok(dir.clone());
    }
    if !cli.global {
        return Ok(PathBuf::from("images"));
    }
    let proj_dirs = ProjectDirs::from("com", "miniflix", "miniflix")
        .ok_or_else(|| MiniflixError::Api("Could not determine the data directory".into()))?;
    Ok(proj_dirs.data_dir().join("posters"))
}

// ---------------------------------------------------------------------------
// One-shot view handlers
// ---------------------------------------------------------------------------

fn handle_home(ctx: &mut AppContext) -> Result<()> {
    print_banner();
    let result = ctx.api.home(ctx.featured_count)?;
    if !result.listed_items.is_empty() {
        println!("{}", "Featured Movies".bold());
        print_items(&result.listed_items, false);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_library(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.library()?;
    if !result.listed_items.is_empty() {
        println!("{}", "My Library".bold());
        print_items(&result.listed_items, false);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_trending(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.trending(ctx.trending_count)?;
    if !result.listed_items.is_empty() {
        println!("{}", "Trending Now".bold());
        print_items(&result.listed_items, true);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_upload(ctx: &mut AppContext, path: &PathBuf) -> Result<()> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| MiniflixError::Api(format!("Not a file path: {}", path.display())))?
        .to_string();
    let bytes = std::fs::read(path)
        .map_err(|e| MiniflixError::Api(format!("Could not read {}: {}", path.display(), e)))?;

    let result = ctx.api.upload(&name, &bytes)?;
    print_messages(&result.messages);
    Ok(())
}

// ---------------------------------------------------------------------------
// Interactive browse session
// ---------------------------------------------------------------------------

const BROWSE_HELP: &str = "\
Views:    home | library | trending | watchlist | feedback
Actions:  add <n> | remove <n> | upload <path> | rate <1-5> <comment...>
Other:    help | quit";

fn handle_browse(ctx: &mut AppContext) -> Result<()> {
    print_banner();
    println!("{}", BROWSE_HELP.dimmed());
    println!();

    let mut last_listing: Vec<DisplayItem> = Vec::new();
    browse_home(ctx, &mut last_listing)?;

    let stdin = io::stdin();
    loop {
        print!("{} ", ">".cyan());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF ends the session
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        let outcome = match cmd {
            "home" | "h" => browse_home(ctx, &mut last_listing),
            "library" | "ls" => browse_library(ctx, &mut last_listing),
            "trending" | "t" => browse_trending(ctx, &mut last_listing),
            "watchlist" | "w" => browse_watchlist(ctx, &mut last_listing),
            "feedback" | "f" => browse_feedback(ctx),
            "add" => browse_add(ctx, &last_listing, rest),
            "remove" | "rm" => browse_remove(ctx, &last_listing, rest),
            "upload" | "up" => browse_upload(ctx, rest),
            "rate" => browse_rate(ctx, rest),
            "help" | "?" => {
                println!("{}", BROWSE_HELP);
                Ok(())
            }
            "quit" | "q" | "exit" => break,
            other => {
                println!("{}", format!("Unknown command: {} (try 'help')", other).red());
                Ok(())
            }
        };

        // errors inside a session are recoverable: report and keep going
        if let Err(e) = outcome {
            println!("{}", e.to_string().red());
        }
    }

    println!("{}", "Session over - watchlist and feedback are not kept.".dimmed());
    Ok(())
}

fn browse_home(ctx: &mut AppContext, listing: &mut Vec<DisplayItem>) -> Result<()> {
    let result = ctx.api.home(ctx.featured_count)?;
    if !result.listed_items.is_empty() {
        println!("{}", "Featured Movies".bold());
        print_items(&result.listed_items, false);
    }
    print_messages(&result.messages);
    *listing = result.listed_items;
    Ok(())
}

fn browse_library(ctx: &mut AppContext, listing: &mut Vec<DisplayItem>) -> Result<()> {
    let result = ctx.api.library()?;
    if !result.listed_items.is_empty() {
        println!("{}", "My Library".bold());
        print_items(&result.listed_items, false);
    }
    print_messages(&result.messages);
    *listing = result.listed_items;
    Ok(())
}

fn browse_trending(ctx: &mut AppContext, listing: &mut Vec<DisplayItem>) -> Result<()> {
    let result = ctx.api.trending(ctx.trending_count)?;
    if !result.listed_items.is_empty() {
        println!("{}", "Trending Now".bold());
        print_items(&result.listed_items, true);
    }
    print_messages(&result.messages);
    *listing = result.listed_items;
    Ok(())
}

fn browse_watchlist(ctx: &mut AppContext, listing: &mut Vec<DisplayItem>) -> Result<()> {
    let result = ctx.api.watchlist()?;
    if !result.listed_items.is_empty() {
        println!("{}", "My Watchlist".bold());
        print_items(&result.listed_items, false);
    }
    print_messages(&result.messages);
    *listing = result.listed_items;
    Ok(())
}

fn browse_feedback(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.feedback()?;
    if !result.feedback_entries.is_empty() {
        println!("{}", "Recent Feedback".bold());
        print_feedback(&result.feedback_entries);
    }
    print_messages(&result.messages);
    Ok(())
}

fn browse_add(ctx: &mut AppContext, listing: &[DisplayItem], arg: &str) -> Result<()> {
    let id = select_item(listing, arg)?.item.id.clone();
    let result = ctx.api.watchlist_add(&id)?;
    print_messages(&result.messages);
    Ok(())
}

fn browse_remove(ctx: &mut AppContext, listing: &[DisplayItem], arg: &str) -> Result<()> {
    let id = select_item(listing, arg)?.item.id.clone();
    let result = ctx.api.watchlist_remove(&id)?;
    print_messages(&result.messages);
    Ok(())
}

fn browse_upload(ctx: &mut AppContext, arg: &str) -> Result<()> {
    if arg.is_empty() {
        return Err(MiniflixError::Api("Usage: upload <path>".into()));
    }
    handle_upload(ctx, &PathBuf::from(arg))
}

fn browse_rate(ctx: &mut AppContext, rest: &str) -> Result<()> {
    let (rating_str, comment) = match rest.split_once(char::is_whitespace) {
        Some((rating, comment)) => (rating, comment.trim()),
        None => (rest, ""),
    };
    let rating: u8 = rating_str
        .parse()
        .map_err(|_| MiniflixError::Validation("rating must be a number between 1 and 5".into()))?;

    print!("Your name: ");
    io::stdout().flush()?;
    let mut author = String::new();
    io::stdin().lock().read_line(&mut author)?;

    let result = ctx.api.submit_feedback(author.trim(), rating, comment)?;
    print_messages(&result.messages);
    Ok(())
}

fn select_item<'a>(listing: &'a [DisplayItem], arg: &str) -> Result<&'a DisplayItem> {
    let index: usize = arg
        .parse()
        .map_err(|_| MiniflixError::Api(format!("Expected a listing number, got '{}'", arg)))?;
    listing
        .iter()
        .find(|di| di.index == index)
        .ok_or_else(|| MiniflixError::Api(format!("No item {} in the current listing", index)))
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

const NAME_WIDTH: usize = 40;
const WATCHLIST_MARKER: &str = "✓";

fn print_banner() {
    println!();
    println!("{}", "  Welcome to MiniFlix  ".bold().white().on_red());
    println!("{}", "  Your personal movie hub".dimmed());
    println!();
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_items(items: &[DisplayItem], ranked: bool) {
    for di in items {
        let idx_str = if ranked {
            format!("{:<4}", format!("#{}", di.index))
        } else {
            format!("{:<4}", format!("{}.", di.index))
        };

        let name = truncate_to_width(&di.item.display_name, NAME_WIDTH);
        let padding = NAME_WIDTH.saturating_sub(name.width());

        let marker = if !di.in_catalog {
            "missing".red().to_string()
        } else if di.in_watchlist {
            format!("{} In Watchlist", WATCHLIST_MARKER).green().to_string()
        } else {
            String::new()
        };

        println!("  {}{}{} {}", idx_str.yellow(), name, " ".repeat(padding), marker);
    }
}

fn print_feedback(entries: &[FeedbackEntry]) {
    for fb in entries {
        let stars = "★".repeat(fb.rating as usize);
        println!("{} {}", fb.author.bold(), stars.yellow());
        println!("  {}", fb.comment);
        println!(
            "  {} {}",
            fb.submitted_at.format("%H:%M:%S").to_string().dimmed(),
            format!("({})", format_time_ago(fb.submitted_at)).dimmed()
        );
        println!();
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

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

fn format_time_ago(timestamp: DateTime<Local>) -> String {
    let now = Local::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}
