//! Application-level update handlers: container geometry and layout reset

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::BoardModel;

/// Update function for application messages
pub fn update_app(model: &mut BoardModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::ContainerResized(width) => {
            model.container_width = width.filter(|w| w.is_finite() && *w > 0.0);
            model.relayout_generation += 1;
            Some(Cmd::ScheduleRelayout {
                generation: model.relayout_generation,
            })
        }

        AppMsg::RelayoutFrame { generation } => {
            if generation != model.relayout_generation {
                tracing::debug!(
                    generation,
                    current = model.relayout_generation,
                    "stale relayout dropped"
                );
                return None;
            }
            model.relayout().then_some(Cmd::ApplyWidths)
        }

        AppMsg::ResetLayout => {
            model.layout.widths.clear();
            model.drag = None;
            let applied = model.relayout();
            Some(Cmd::batch(vec![
                Cmd::ClearStoredWidths,
                if applied { Cmd::ApplyWidths } else { Cmd::None },
            ]))
        }
    }
}
