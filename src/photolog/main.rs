use chrono::{Datelike, NaiveDate};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use photolog::api::{CmdMessage, ConfigAction, JournalApi, MessageLevel, MonthSheet};
use photolog::calendar::{month_title, weekday_labels, WeekStart};
use photolog::config::JournalConfig;
use photolog::error::{JournalError, Result};
use photolog::model::{DayKey, Entry, EntryDraft};
use photolog::store::fs::FileStore;
use photolog::upload::Uploader;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;
use uuid::Uuid;

mod args;
use args::{Cli, Commands};

// Shown in place of an empty image URL; render-time only, never stored.
const FALLBACK_IMAGE: &str = "/fallback.png";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: JournalApi<FileStore>,
    config: JournalConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add {
            date,
            image,
            image_url,
            rating,
            categories,
            description,
        }) => handle_add(&mut ctx, date, image, image_url, rating, categories, description),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, id),
        Some(Commands::View { date }) => handle_view(&ctx, date),
        Some(Commands::Month { month, monday }) => handle_month(&ctx, month, monday),
        Some(Commands::Seed) => handle_seed(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_month(&ctx, None, false),
    }
}

fn init_context() -> Result<AppContext> {
    let data_dir = match std::env::var_os("PHOTOLOG_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let proj_dirs = ProjectDirs::from("com", "photolog", "photolog")
                .expect("Could not determine data dir");
            proj_dirs.data_dir().to_path_buf()
        }
    };

    let config = JournalConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(data_dir.clone());
    let api = JournalApi::new(store, data_dir);

    Ok(AppContext { api, config })
}

#[allow(clippy::too_many_arguments)]
fn handle_add(
    ctx: &mut AppContext,
    date: String,
    image: Option<PathBuf>,
    image_url: Option<String>,
    rating: f32,
    categories: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let day: DayKey = date.parse()?;

    let image_url = match (image, image_url) {
        (Some(path), _) => {
            if ctx.config.upload_key.is_empty() {
                return Err(JournalError::Api(
                    "No upload key configured; run `photolog config upload-key <KEY>`".into(),
                ));
            }
            println!("{}", format!("Uploading {}...", path.display()).dimmed());
            let uploader = Uploader::new(
                ctx.config.upload_endpoint.as_str(),
                ctx.config.upload_key.as_str(),
            )?;
            uploader.upload(&path)?
        }
        (None, Some(url)) => url,
        (None, None) => String::new(),
    };

    let categories = categories
        .map(|s| s.split(',').map(|c| c.trim().to_string()).collect())
        .unwrap_or_default();

    let draft = EntryDraft {
        day,
        image_url,
        rating,
        categories,
        description: description.unwrap_or_default(),
    };

    let result = ctx.api.add_entry(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: String) -> Result<()> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| JournalError::Api(format!("Invalid entry id: {}", id)))?;
    let result = ctx.api.delete_entry(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, date: String) -> Result<()> {
    let day: DayKey = date.parse()?;
    let result = ctx.api.view_day(day)?;
    for de in &result.days {
        print_entries(de.day, &de.entries);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_month(ctx: &AppContext, month: Option<String>, monday: bool) -> Result<()> {
    let date = match month {
        Some(m) => parse_year_month(&m)?,
        None => DayKey::today().date(),
    };
    let week_start = if monday {
        WeekStart::Monday
    } else {
        ctx.config.week_start
    };

    let result = ctx.api.month_sheet(date, week_start)?;
    if let Some(sheet) = &result.sheet {
        print_sheet(sheet);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_seed(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.seed()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    print_messages(&result.messages);
    Ok(())
}

fn parse_year_month(s: &str) -> Result<NaiveDate> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() == 2 {
        if let (Ok(year), Ok(month)) = (parts[0].parse(), parts[1].parse()) {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, 1) {
                return Ok(date);
            }
        }
    }
    Err(JournalError::Api(format!("Invalid month: {} (want YYYY-MM)", s)))
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

const DESC_WIDTH: usize = 60;

fn print_entries(day: DayKey, entries: &[Entry]) {
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let image = if entry.image_url.is_empty() {
            FALLBACK_IMAGE
        } else {
            &entry.image_url
        };
        println!(
            "{} {}",
            day.to_string().yellow(),
            format!("({})", entry.id).dimmed()
        );
        println!("  image:      {}", image);
        println!("  rating:     {}", entry.rating);
        if !entry.categories.is_empty() {
            println!("  categories: {}", entry.categories.join(", "));
        }
        if !entry.description.is_empty() {
            println!(
                "  {}",
                truncate_to_width(&entry.description, DESC_WIDTH)
            );
        }
    }
}

// 7 columns of "ddm " minus the trailing gap.
const GRID_WIDTH: usize = 7 * 4 - 1;

fn print_sheet(sheet: &MonthSheet) {
    let title = month_title(sheet.anchor);
    let padding = GRID_WIDTH.saturating_sub(title.width()) / 2;
    println!("{}{}", " ".repeat(padding), title.bold());

    let labels = weekday_labels(sheet.week_start);
    println!("{}", labels.join(" ").dimmed());

    let today = DayKey::today().date();
    for week in &sheet.weeks {
        let mut row = String::new();
        for cell in week {
            match cell {
                None => row.push_str("    "),
                Some(day) => {
                    let count = sheet.counts.get(&DayKey::new(*day)).copied().unwrap_or(0);
                    let marker = if count > 0 { "*" } else { " " };
                    let text = format!("{:>3}", day.day());
                    let cell_str = if *day == today {
                        format!("{}{}", text.reversed(), marker)
                    } else if count > 0 {
                        format!("{}{}", text.green().bold(), marker)
                    } else {
                        format!("{}{}", text.normal(), marker)
                    };
                    row.push_str(&cell_str);
                }
            }
        }
        println!("{}", row);
    }

    for (day, count) in &sheet.counts {
        let noun = if *count == 1 { "entry" } else { "entries" };
        println!("{}", format!("  {} {} {}", day, count, noun).dimmed());
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
