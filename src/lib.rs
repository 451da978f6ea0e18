//! Feedboard - adaptive multi-panel layout engine
//!
//! This crate provides the layout core of a social-feed dashboard: a
//! horizontally scrollable strip of panels whose widths are auto-fitted to
//! whole card columns, manually resizable, and persisted across sessions.
//! State changes follow the Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod engine;
pub mod events;
pub mod messages;
pub mod model;
pub mod panel;
pub mod store;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::BoardConfig;
pub use engine::LayoutEngine;
pub use events::{LayoutEvent, VisibilityChanged};
pub use messages::Msg;
pub use model::BoardModel;
pub use panel::PanelRegistry;
pub use store::{JsonFileStore, LayoutStateStore, MemoryStore};
