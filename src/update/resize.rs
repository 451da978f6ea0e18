//! Manual resize update handlers
//!
//! A drag gesture goes `idle -> dragging -> idle`. Moves are cheap and
//! idempotent: the candidate width is derived from the gesture start, never
//! from the previous move, and is persisted on every change.

use crate::commands::Cmd;
use crate::messages::ResizeMsg;
use crate::model::{BoardModel, DragState};
use crate::panel::snap_width;
use crate::store::PersistedLayout;

/// Update function for resize gesture messages
pub fn update_resize(model: &mut BoardModel, msg: ResizeMsg) -> Option<Cmd> {
    match msg {
        ResizeMsg::Start { panel, pointer_x } => {
            let Some(start_width) = model.width_of(&panel) else {
                tracing::debug!(%panel, "resize start ignored, panel has no rendered width");
                return None;
            };
            model.drag = Some(DragState {
                panel,
                start_x: pointer_x,
                start_width,
            });
            None
        }

        ResizeMsg::Move { pointer_x } => drag_to(model, pointer_x),

        ResizeMsg::End => {
            model.drag = None;
            None
        }

        ResizeMsg::ResetPanel(name) => {
            if model.drag.as_ref().is_some_and(|d| d.panel == name) {
                model.drag = None;
            }
            model.layout.widths.remove(&name)?;
            let applied = model.relayout();
            Some(Cmd::batch(vec![
                persist_widths(model),
                if applied { Cmd::ApplyWidths } else { Cmd::None },
            ]))
        }
    }
}

fn drag_to(model: &mut BoardModel, pointer_x: f64) -> Option<Cmd> {
    let drag = model.drag.as_ref()?;
    let panel = model.registry.get(&drag.panel)?;

    // Geometry not measurable yet: retry on the next move
    let Some(max_allowed) = model.max_width_for(&drag.panel) else {
        tracing::debug!(panel = %drag.panel, "resize move ignored, no container geometry");
        return None;
    };

    let raw = drag.start_width + (pointer_x - drag.start_x) as f32;
    let snapped = snap_width(panel, &model.config, raw.min(max_allowed));

    let name = drag.panel.clone();
    if model.layout.widths.get(&name) == Some(&snapped) {
        return None;
    }
    model.layout.widths.insert(name, snapped);
    let applied = model.relayout();

    Some(Cmd::batch(vec![
        persist_widths(model),
        if applied { Cmd::ApplyWidths } else { Cmd::None },
    ]))
}

fn persist_widths(model: &BoardModel) -> Cmd {
    Cmd::Persist(PersistedLayout {
        panel_widths: Some(model.layout.widths.clone()),
        ..Default::default()
    })
}
