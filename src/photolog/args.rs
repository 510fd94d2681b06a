use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "photolog")]
#[command(about = "A photo journal on an infinite calendar", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a journal entry to a day
    #[command(alias = "a")]
    Add {
        /// Day the entry is filed under (YYYY-MM-DD)
        date: String,

        /// Image file to upload to the configured host
        #[arg(long, conflicts_with = "image_url")]
        image: Option<PathBuf>,

        /// Already-hosted image URL (skips the upload)
        #[arg(long)]
        image_url: Option<String>,

        /// Rating from 0 to 5, decimals allowed
        #[arg(short, long)]
        rating: f32,

        /// Comma-separated category labels
        #[arg(short, long)]
        categories: Option<String>,

        /// Freeform description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete an entry by id
    #[command(alias = "rm")]
    Delete {
        /// Entry id, as printed by add and view
        id: String,
    },

    /// View the entries of a day
    #[command(alias = "v")]
    View {
        /// Day to view (YYYY-MM-DD)
        date: String,
    },

    /// Render a month grid with entry markers
    #[command(alias = "m")]
    Month {
        /// Month to render (YYYY-MM); defaults to the current month
        month: Option<String>,

        /// Start week rows on Monday regardless of configuration
        #[arg(long)]
        monday: bool,
    },

    /// Populate an empty journal with the bundled sample entries
    Seed,

    /// Get or set configuration
    Config {
        /// Configuration key (week-start, upload-endpoint, upload-key)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
