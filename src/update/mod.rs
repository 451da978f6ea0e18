//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod resize;
mod tabs;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::BoardModel;

#[cfg(debug_assertions)]
use crate::tracing::LayoutSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use resize::update_resize;
pub use tabs::update_tabs;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut BoardModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut BoardModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Tabs(m) => update_tabs(model, m),
        Msg::Resize(m) => update_resize(model, m),
        Msg::App(m) => update_app(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after layout state and logs diffs for debugging.
/// Pointer moves are frequent, so they are not logged unless they change
/// something.
#[cfg(debug_assertions)]
fn update_traced(model: &mut BoardModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::ResizeMsg;

    let is_noisy = matches!(&msg, Msg::Resize(ResizeMsg::Move { .. }));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = LayoutSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = LayoutSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "layout", msg = %msg_name, %diff, "state changed");
    }

    model.assert_invariants_with_context(&msg_name);

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Tabs::Toggle("posts")`
/// - `App::ContainerResized(Some(1200.0))`
#[cfg(debug_assertions)]
pub fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Tabs(m) => format!("Tabs::{:?}", m),
        Msg::Resize(m) => format!("Resize::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
