//! Tab bar update handlers
//!
//! Maintains `active_tabs` and `order`. Every accepted mutation relayouts
//! synchronously, persists, and emits a visibility change.

use crate::commands::Cmd;
use crate::messages::TabMsg;
use crate::model::{normalize_order, BoardModel};
use crate::store::PersistedLayout;

/// Update function for tab bar messages
pub fn update_tabs(model: &mut BoardModel, msg: TabMsg) -> Option<Cmd> {
    match msg {
        TabMsg::Toggle(name) => toggle(model, &name),
        TabMsg::Reorder(names) => reorder(model, &names),
        TabMsg::Move { name, offset } => {
            let sequence = moved_sequence(model, &name, offset)?;
            reorder(model, &sequence)
        }
    }
}

fn toggle(model: &mut BoardModel, name: &str) -> Option<Cmd> {
    if !model.registry.contains(name) {
        tracing::debug!(name, "toggle ignored, unknown panel");
        return None;
    }

    if model.layout.is_active(name) {
        if model.layout.active_tabs.len() == 1 {
            tracing::debug!(name, "toggle ignored, last active tab");
            return None;
        }
        model.layout.active_tabs.retain(|n| n != name);
        // A hidden panel cannot keep being dragged
        if model.drag.as_ref().is_some_and(|d| d.panel == name) {
            model.drag = None;
        }
    } else {
        model.layout.active_tabs.push(name.to_string());
    }
    model.layout.sort_active();

    Some(after_visibility_change(
        model,
        PersistedLayout {
            active_tabs: Some(model.layout.active_tabs.clone()),
            ..Default::default()
        },
    ))
}

fn reorder(model: &mut BoardModel, names: &[String]) -> Option<Cmd> {
    let order = normalize_order(&model.registry, names, &model.layout.order);
    if order == model.layout.order {
        return None;
    }
    model.layout.order = order;
    model.layout.sort_active();

    Some(after_visibility_change(
        model,
        PersistedLayout {
            tab_order: Some(model.layout.order.clone()),
            active_tabs: Some(model.layout.active_tabs.clone()),
            ..Default::default()
        },
    ))
}

/// Strip order with `name` shifted by `offset` places, trailing panel excluded
fn moved_sequence(model: &BoardModel, name: &str, offset: isize) -> Option<Vec<String>> {
    let trailing = model.registry.trailing();
    if Some(name) == trailing {
        return None;
    }
    let mut sequence: Vec<String> = model
        .layout
        .order
        .iter()
        .filter(|n| Some(n.as_str()) != trailing)
        .cloned()
        .collect();
    let from = sequence.iter().position(|n| n == name)?;
    let to = (from as isize + offset).clamp(0, sequence.len() as isize - 1) as usize;
    if to == from {
        return None;
    }
    let moved = sequence.remove(from);
    sequence.insert(to, moved);
    Some(sequence)
}

fn after_visibility_change(model: &mut BoardModel, persist: PersistedLayout) -> Cmd {
    let applied = model.relayout();
    Cmd::batch(vec![
        Cmd::Persist(persist),
        Cmd::EmitVisibility(model.visibility_event()),
        if applied { Cmd::ApplyWidths } else { Cmd::None },
    ])
}
