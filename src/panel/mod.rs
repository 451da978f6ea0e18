//! Panel system - the horizontally scrollable strip of dashboard panels
//!
//! ## Architecture
//!
//! - `PanelKind`: card-based (column grid) or generic content
//! - `PanelDescriptor`: static declaration of one panel (name, title, chrome)
//! - `PanelRegistry`: ordered set of every declared panel
//! - `snap`: column-snap calculator turning a candidate width into a
//!   visually exact one
//! - `autofit`: round-robin distributor that sizes every unpinned panel
//!
//! ## Integration
//!
//! The registry is handed to [`crate::engine::LayoutEngine`] at boot. Width
//! math in this module is pure; state changes go through `update`.

pub mod autofit;
mod registry;
pub mod snap;

pub use autofit::{auto_fit, Distribution};
pub use registry::{PanelDescriptor, PanelKind, PanelRegistry};
pub use snap::{column_count, snap_width};
