//! Message types for the Elm-style architecture
//!
//! Every input to the layout engine is one of these messages.

/// Tab bar messages (active set and strip order)
#[derive(Debug, Clone, PartialEq)]
pub enum TabMsg {
    /// Flip a panel's active state (never deactivates the last active tab)
    Toggle(String),
    /// Drag-to-reorder result; missing names are appended
    Reorder(Vec<String>),
    /// Nudge a panel left (negative) or right (positive) in the strip
    Move { name: String, offset: isize },
}

/// Drag-to-resize gesture messages
#[derive(Debug, Clone, PartialEq)]
pub enum ResizeMsg {
    /// Pointer pressed on a panel's resize handle
    Start { panel: String, pointer_x: f64 },
    /// Pointer moved while the handle is captured
    Move { pointer_x: f64 },
    /// Pointer released
    End,
    /// Double-activation on a handle: drop that panel's manual width
    ResetPanel(String),
}

/// Application-level messages
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// The strip's container changed size (`None` = not measurable yet)
    ContainerResized(Option<f32>),
    /// Deferred relayout fired for the next frame
    RelayoutFrame { generation: u64 },
    /// Reset-layout command: clear every manual width
    ResetLayout,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Tabs(TabMsg),
    Resize(ResizeMsg),
    App(AppMsg),
}

impl Msg {
    /// Direct user interactions, as opposed to geometry or timer signals
    pub fn is_user_interaction(&self) -> bool {
        match self {
            Msg::Tabs(_) | Msg::Resize(_) => true,
            Msg::App(AppMsg::ResetLayout) => true,
            Msg::App(_) => false,
        }
    }
}
