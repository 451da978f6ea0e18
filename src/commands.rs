//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the engine performs after an update:
//! persisting state, notifying observers, scheduling the next relayout.

use crate::events::VisibilityChanged;
use crate::store::PersistedLayout;

/// Side effects returned by the update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Push the current width projection to the presentation layer
    ApplyWidths,
    /// Write the given keys to the layout store
    Persist(PersistedLayout),
    /// Delete `panel_widths` from the layout store
    ClearStoredWidths,
    /// Broadcast a visibility change to observers
    EmitVisibility(VisibilityChanged),
    /// Run a relayout on the next frame unless a newer one supersedes it
    ScheduleRelayout { generation: u64 },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch command, optimizing for empty/single cases
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut cmds: Vec<Cmd> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Cmd::None)
    }

    /// Flatten nested batches into a list of leaf commands
    pub fn into_vec(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::into_vec).collect(),
            other => vec![other],
        }
    }
}
