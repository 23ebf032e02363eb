use std::path::PathBuf;

use clap::Parser;

/// Extract a 16-color terminal scheme from an image.
#[derive(Parser, Debug)]
#[command(name = "imgscheme", version, about)]
pub struct Args {
    /// Path to the input image
    pub image: PathBuf,

    /// Minimum color distance (sum of channel differences, 0-255) for two
    /// palette entries to count as distinct
    #[arg(short, long, default_value_t = 50)]
    pub threshold: u8,

    /// Reject colors closer than this to pure black (0-255)
    #[arg(long, default_value_t = 50)]
    pub min_brightness: u8,

    /// Reject colors closer than this to pure white (0-255)
    #[arg(long, default_value_t = 200)]
    pub max_brightness: u8,

    /// Output format: default, xresources, shell, kitty, alacritty
    #[arg(short, long, default_value = "default")]
    pub format: String,

    /// Write the formatted palette to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show the palette as colored swatches in the terminal
    #[arg(long)]
    pub preview: bool,

    /// Enforce distinctness across relaxation rounds, not only within them
    #[arg(long)]
    pub dedup: bool,

    /// Print sampling and relaxation details to stderr
    #[arg(long)]
    pub verbose: bool,
}
