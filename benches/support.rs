//! Shared helpers for benchmarks

use feedboard::panel::{PanelDescriptor, PanelKind, PanelRegistry};
use feedboard::store::{MemoryStore, PersistedLayout};
use feedboard::{BoardConfig, LayoutEngine};

/// Registry with `panels` card-based panels plus a trailing generic one
#[allow(dead_code)]
pub fn make_registry(panels: usize) -> PanelRegistry {
    let mut descriptors: Vec<PanelDescriptor> = (0..panels)
        .map(|i| {
            let name = format!("panel-{}", i);
            PanelDescriptor::new(name.clone(), name, PanelKind::CardBased)
        })
        .collect();
    descriptors.push(
        PanelDescriptor::new("cache", "Cache", PanelKind::Generic)
            .hidden_from_tabs()
            .pinned_last(),
    );
    PanelRegistry::new(descriptors).expect("benchmark registry is valid")
}

/// Engine with every panel of `make_registry(panels)` open at `width`
#[allow(dead_code)]
pub fn make_engine(panels: usize, width: f32) -> LayoutEngine<MemoryStore> {
    let registry = make_registry(panels);
    let store = MemoryStore::with_state(PersistedLayout {
        active_tabs: Some(registry.names()),
        ..Default::default()
    });
    let mut engine = LayoutEngine::boot(registry, BoardConfig::default(), store, None);
    engine.container_resized(Some(width));
    engine.frame();
    engine
}
