//! Tests for tab toggling, reordering and visibility events

mod common;

use common::{names, record_events, sized_engine, test_engine};
use feedboard::events::{LayoutEvent, VisibilityChanged};
use feedboard::messages::{Msg, TabMsg};

// ============================================================================
// Toggle
// ============================================================================

#[test]
fn test_toggle_only_active_tab_is_noop() {
    let mut engine = test_engine();
    let events = record_events(&mut engine);
    let writes_before = engine.store().writes();

    engine.toggle("posts");

    assert_eq!(engine.active_tabs(), names(&["posts"]).as_slice());
    assert_eq!(engine.store().writes(), writes_before);
    assert!(events.borrow().is_empty());
}

#[test]
fn test_toggle_on_then_off() {
    let mut engine = test_engine();
    engine.toggle("connections");
    assert_eq!(engine.active_tabs(), names(&["posts", "connections"]).as_slice());

    engine.toggle("posts");
    assert_eq!(engine.active_tabs(), names(&["connections"]).as_slice());

    // connections is now the last one standing
    engine.toggle("connections");
    assert_eq!(engine.active_tabs(), names(&["connections"]).as_slice());
}

#[test]
fn test_toggle_persists_active_tabs() {
    let mut engine = test_engine();
    engine.toggle("search");
    assert_eq!(
        engine.store().state().active_tabs,
        Some(names(&["posts", "search"]))
    );
}

#[test]
fn test_toggle_never_empties_active_set() {
    let mut engine = test_engine();
    let all = ["posts", "search", "connections", "cache"];
    // Deterministic pseudo-random walk over toggles
    let mut seed: u32 = 7;
    for _ in 0..500 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let name = all[(seed >> 16) as usize % all.len()];
        engine.toggle(name);
        assert!(!engine.active_tabs().is_empty());
    }
}

#[test]
fn test_toggle_emits_visibility_changed() {
    let mut engine = sized_engine(1600.0, &["posts"]);
    let events = record_events(&mut engine);

    engine.toggle("search");

    let events = events.borrow();
    let visibility: Vec<&VisibilityChanged> = events
        .iter()
        .filter_map(|e| match e {
            LayoutEvent::VisibilityChanged(v) => Some(v),
            _ => None,
        })
        .collect();
    assert_eq!(visibility.len(), 1);
    assert_eq!(visibility[0].active, names(&["posts", "search"]));
    assert_eq!(visibility[0].visible, names(&["posts", "search"]));

    // Widths were recomputed before the next interaction
    assert!(matches!(events.last(), Some(LayoutEvent::WidthsApplied(_))));
}

#[test]
fn test_toggled_off_panel_loses_its_width() {
    let mut engine = sized_engine(1600.0, &["posts", "search"]);
    assert!(engine.width_of("search").is_some());
    engine.toggle("search");
    assert_eq!(engine.width_of("search"), None);
}

#[test]
fn test_toggle_without_geometry_drops_stale_width() {
    let mut engine = sized_engine(1600.0, &["posts", "search"]);
    engine.container_resized(None);
    engine.toggle("search");

    assert_eq!(engine.width_of("search"), None);
    assert!(engine.widths().get("search").is_none());
    assert_eq!(engine.width_of("posts"), Some(752.0));
}

// ============================================================================
// Reorder
// ============================================================================

#[test]
fn test_reorder_incomplete_list() {
    let mut engine = test_engine();
    engine.reorder(names(&["search"]));
    assert_eq!(
        engine.order(),
        names(&["search", "posts", "connections", "cache"]).as_slice()
    );
    assert_eq!(
        engine.store().state().tab_order,
        Some(names(&["search", "posts", "connections", "cache"]))
    );
}

#[test]
fn test_reorder_forces_cache_last() {
    let mut engine = test_engine();
    engine.reorder(names(&["cache", "connections", "posts", "search"]));
    assert_eq!(
        engine.order(),
        names(&["connections", "posts", "search", "cache"]).as_slice()
    );
}

#[test]
fn test_reorder_keeps_permutation() {
    let mut engine = test_engine();
    let inputs = [
        names(&[]),
        names(&["bogus"]),
        names(&["connections", "connections"]),
        names(&["cache"]),
        names(&["search", "posts", "search", "ghost", "connections"]),
    ];
    for input in inputs {
        engine.reorder(input);
        let mut sorted = engine.order().to_vec();
        sorted.sort();
        assert_eq!(sorted, names(&["cache", "connections", "posts", "search"]));
        assert_eq!(engine.order().last().map(String::as_str), Some("cache"));
    }
}

#[test]
fn test_reorder_moves_visible_strip() {
    let mut engine = sized_engine(1200.0, &["posts", "search"]);
    assert_eq!(engine.width_of("posts"), Some(752.0));
    let events = record_events(&mut engine);

    engine.reorder(names(&["search", "posts"]));

    assert_eq!(engine.visibility().visible, names(&["search", "posts"]));
    // Registry order for `active`, strip order for `visible`
    assert_eq!(engine.visibility().active, names(&["posts", "search"]));
    // The earlier panel in the strip now wins the spare column
    assert_eq!(engine.width_of("search"), Some(752.0));
    assert_eq!(engine.width_of("posts"), Some(390.0));
    assert!(events
        .borrow()
        .iter()
        .any(|e| matches!(e, LayoutEvent::VisibilityChanged(_))));
}

#[test]
fn test_reorder_to_same_order_is_noop() {
    let mut engine = test_engine();
    let events = record_events(&mut engine);
    let current = engine.order().to_vec();
    engine.reorder(current);
    assert!(events.borrow().is_empty());
}

#[test]
fn test_move_tab() {
    let mut engine = test_engine();
    engine.move_tab("connections", -1);
    assert_eq!(
        engine.order(),
        names(&["posts", "connections", "search", "cache"]).as_slice()
    );
    engine.move_tab("posts", 99);
    assert_eq!(
        engine.order(),
        names(&["connections", "search", "posts", "cache"]).as_slice()
    );
    // The reserved panel does not move
    engine.move_tab("cache", -3);
    assert_eq!(engine.order().last().map(String::as_str), Some("cache"));
}

#[test]
fn test_dispatch_message_directly() {
    let mut engine = test_engine();
    engine.dispatch(Msg::Tabs(TabMsg::Toggle("search".into())));
    assert!(engine.active_tabs().contains(&"search".to_string()));
}

#[test]
fn test_announce_reports_current_visibility() {
    let mut engine = sized_engine(1600.0, &["search", "posts"]);
    let events = record_events(&mut engine);
    engine.announce();
    assert_eq!(
        *events.borrow(),
        vec![LayoutEvent::VisibilityChanged(VisibilityChanged {
            active: names(&["posts", "search"]),
            visible: names(&["posts", "search"]),
        })]
    );
}

#[test]
fn test_tab_bar_reflects_state() {
    let mut engine = test_engine();
    engine.toggle("connections");
    let tabs = engine.tab_bar();
    let summary: Vec<(String, bool)> = tabs.into_iter().map(|t| (t.name, t.active)).collect();
    assert_eq!(
        summary,
        vec![
            ("posts".to_string(), true),
            ("search".to_string(), false),
            ("connections".to_string(), true),
        ]
    );
}
