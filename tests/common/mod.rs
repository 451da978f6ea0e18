//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use feedboard::panel::{PanelDescriptor, PanelKind, PanelRegistry};
use feedboard::store::{LayoutStateStore, MemoryStore, PersistedLayout};
use feedboard::{BoardConfig, LayoutEngine, LayoutEvent};

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// posts, search, connections (card-based, 40px chrome) and a trailing cache
pub fn strip_registry() -> PanelRegistry {
    PanelRegistry::new(vec![
        PanelDescriptor::new("posts", "Posts", PanelKind::CardBased).with_padding(24.0),
        PanelDescriptor::new("search", "Search", PanelKind::CardBased).with_padding(24.0),
        PanelDescriptor::new("connections", "Connections", PanelKind::CardBased)
            .with_padding(24.0),
        PanelDescriptor::new("cache", "Cache", PanelKind::Generic)
            .hidden_from_tabs()
            .pinned_last(),
    ])
    .unwrap()
}

/// Engine over `strip_registry` booted from the given store
pub fn engine_with_store<S: LayoutStateStore>(store: S) -> LayoutEngine<S> {
    LayoutEngine::boot(strip_registry(), BoardConfig::default(), store, None)
}

/// Engine with no persisted state and no geometry yet
pub fn test_engine() -> LayoutEngine<MemoryStore> {
    engine_with_store(MemoryStore::new())
}

/// Engine with `active` panels open and the container measured at `width`
pub fn sized_engine(width: f32, active: &[&str]) -> LayoutEngine<MemoryStore> {
    let store = MemoryStore::with_state(PersistedLayout {
        active_tabs: Some(names(active)),
        ..Default::default()
    });
    let mut engine = engine_with_store(store);
    engine.container_resized(Some(width));
    engine.frame();
    engine
}

/// Record every event the engine emits from now on
pub fn record_events<S: LayoutStateStore>(
    engine: &mut LayoutEngine<S>,
) -> Rc<RefCell<Vec<LayoutEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    engine.subscribe(move |event| sink.borrow_mut().push(event.clone()));
    events
}

/// Drag `panel`'s handle so its raw candidate width becomes `target`
pub fn drag_panel_to<S: LayoutStateStore>(engine: &mut LayoutEngine<S>, panel: &str, target: f32) {
    let start = engine.width_of(panel).expect("panel must be visible");
    engine.start_drag(panel, 100.0);
    engine.drag_to(100.0 + (target - start) as f64);
    engine.end_drag();
}
