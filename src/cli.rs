use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "palette-studio", about = "Generate, save, and export harmonious color palettes")]
pub struct Cli {
    /// Number of colors per palette (1-10)
    #[arg(long, short = 'n', global = true, value_parser = clap::value_parser!(u64).range(1..=10))]
    pub count: Option<u64>,

    /// Export format: hex, css, scss or json
    #[arg(long, short = 'f', global = true)]
    pub format: Option<String>,

    /// Seed for reproducible palettes
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Override the pause before a generated palette is shown
    #[arg(long)]
    pub delay_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a freshly generated palette in the selected format
    Generate,
    /// Show the name, values and brightness of a color (random when omitted)
    Inspect {
        /// Color as #rrggbb, rrggbb or #rgb
        hex: Option<String>,
    },
    /// Manage saved palettes
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Manage favorite colors
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List saved palettes, most recent first
    List,
    /// Print one saved palette in the selected format
    Show {
        /// 1-based position in the history
        position: usize,
    },
    /// Delete every saved palette
    Clear,
}

#[derive(Subcommand)]
pub enum FavoritesAction {
    /// List favorite colors, most recent first
    List,
}
