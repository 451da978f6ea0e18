//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging layout
//! passes, resize gestures and tab state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=layout=debug,message=debug` - scoped filtering
//! - `RUST_LOG=feedboard::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/feedboard/logs/feedboard.log` with daily
//! rotation. File logging uses debug level by default.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::BoardModel;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes
/// to `~/.config/feedboard/logs/feedboard.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "feedboard.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {:#}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of layout state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    pub order: Vec<String>,
    pub active: Vec<String>,
    pub pinned: Vec<(String, f32)>,
    pub widths: Vec<(String, f32)>,
    pub dragging: Option<String>,
}

impl LayoutSnapshot {
    pub fn from_model(model: &BoardModel) -> Self {
        Self {
            order: model.layout.order.clone(),
            active: model.layout.active_tabs.clone(),
            pinned: model
                .layout
                .widths
                .iter()
                .map(|(name, width)| (name.clone(), *width))
                .collect(),
            widths: model
                .projection
                .widths
                .iter()
                .map(|w| (w.name.clone(), w.width))
                .collect(),
            dragging: model.drag.as_ref().map(|d| d.panel.clone()),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.order != other.order {
            changes.push(format!("order: {:?} → {:?}", self.order, other.order));
        }
        if self.active != other.active {
            changes.push(format!("active: {:?} → {:?}", self.active, other.active));
        }
        if self.pinned != other.pinned {
            changes.push(format!("pinned: {:?} → {:?}", self.pinned, other.pinned));
        }
        for (name, width) in &other.widths {
            let previous = self.widths.iter().find(|(n, _)| n == name).map(|(_, w)| *w);
            match previous {
                Some(prev) if prev == *width => {}
                Some(prev) => changes.push(format!("{}: {} → {}", name, prev, width)),
                None => changes.push(format!("{}: shown at {}", name, width)),
            }
        }
        for (name, _) in &self.widths {
            if !other.widths.iter().any(|(n, _)| n == name) {
                changes.push(format!("{}: hidden", name));
            }
        }
        if self.dragging != other.dragging {
            changes.push(format!("drag: {:?} → {:?}", self.dragging, other.dragging));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
