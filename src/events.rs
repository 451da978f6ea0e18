//! Events the layout engine broadcasts to its observers
//!
//! Observers register on [`crate::engine::LayoutEngine`]; there is no global
//! bus. Content-mounting code listens for `VisibilityChanged`, the
//! presentation layer for `WidthsApplied`.

use crate::panel::Distribution;

/// Active-tab membership or strip order changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityChanged {
    /// Active panels in registry declaration order
    pub active: Vec<String>,
    /// Active panels in current strip order
    pub visible: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutEvent {
    VisibilityChanged(VisibilityChanged),
    /// A new width projection should be written to the presentation layer
    WidthsApplied(Distribution),
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

pub type Listener = Box<dyn FnMut(&LayoutEvent)>;

/// Registered observers, notified in subscription order
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn emit(&mut self, event: &LayoutEvent) {
        for (_, listener) in self.entries.iter_mut() {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
