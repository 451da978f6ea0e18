//! Command-line argument parsing for the headless layout driver
//!
//! Supports:
//! - Choosing the container width, state file and config file
//! - An external active-tab reference (`--open`)
//! - One layout action per run (toggle, reorder, move, resize, reset)

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Compute and edit the dashboard panel strip
#[derive(Parser, Debug)]
#[command(name = "feedboard", version, about = "Adaptive panel layout for the feed dashboard")]
pub struct CliArgs {
    /// Container width in pixels
    #[arg(long, value_name = "PX", default_value_t = 1920.0)]
    pub width: f32,

    /// Layout state file (defaults to ~/.config/feedboard/layout.json)
    #[arg(long, value_name = "PATH")]
    pub state: Option<PathBuf>,

    /// Config file (defaults to ~/.config/feedboard/config.yaml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Active tabs to open with, e.g. `posts,search` or `?tabs=posts,search`
    #[arg(long, value_name = "REFERENCE")]
    pub open: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the current strip
    Show,
    /// Show or hide a panel
    Toggle { name: String },
    /// Reorder panels; unnamed panels keep their relative order at the end
    Reorder {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Move a panel left (negative) or right (positive)
    Move {
        name: String,
        #[arg(allow_hyphen_values = true)]
        offset: isize,
    },
    /// Drag a panel's resize handle by DELTA pixels
    Resize {
        name: String,
        #[arg(allow_hyphen_values = true)]
        delta: f64,
    },
    /// Drop one panel's manual width
    ResetPanel { name: String },
    /// Drop every manual width
    Reset,
}

/// Parse an external active-tab reference
///
/// Accepts a bare list (`posts,search`), a fragment (`#posts,search`) or a
/// query string containing `tabs=` (`?view=x&tabs=posts,search`).
pub fn parse_tab_reference(reference: &str) -> Vec<String> {
    let reference = reference.trim();
    let list = if let Some(start) = reference.find("tabs=") {
        let rest = &reference[start + "tabs=".len()..];
        rest.split('&').next().unwrap_or("")
    } else {
        reference.trim_start_matches(['#', '?'])
    };

    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
