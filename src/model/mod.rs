//! Model module - the application state for the panel strip
//!
//! - `layout_state`: persisted order, active tabs and manual widths
//! - `BoardModel`: everything `update` reads and writes

pub mod layout_state;

pub use layout_state::{normalize_order, LayoutState};

use crate::config::BoardConfig;
use crate::events::VisibilityChanged;
use crate::panel::autofit::inter_panel_gaps;
use crate::panel::{auto_fit, Distribution, PanelDescriptor, PanelRegistry};

/// State of an in-progress drag on a resize handle
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    /// Panel whose right edge is being dragged
    pub panel: String,
    /// Pointer X when the drag started
    pub start_x: f64,
    /// Panel width when the drag started
    pub start_width: f32,
}

/// One button of the tab bar
#[derive(Debug, Clone, PartialEq)]
pub struct TabButton {
    pub name: String,
    pub title: String,
    pub active: bool,
}

/// The complete layout engine state
#[derive(Debug, Clone)]
pub struct BoardModel {
    pub registry: PanelRegistry,
    pub config: BoardConfig,
    pub layout: LayoutState,
    /// Measured container width; `None` until the strip has been laid out
    pub container_width: Option<f32>,
    /// Active drag gesture, if any
    pub drag: Option<DragState>,
    /// Widths from the last auto-fit pass
    pub projection: Distribution,
    /// Bumped on every layout-affecting signal; stale relayouts are dropped
    pub relayout_generation: u64,
}

impl BoardModel {
    pub fn new(registry: PanelRegistry, config: BoardConfig, layout: LayoutState) -> Self {
        let sanitized = config.clone().sanitized();
        if sanitized != config {
            tracing::warn!("Board config had unusable metrics, defaults substituted");
        }
        Self {
            registry,
            config: sanitized,
            layout,
            container_width: None,
            drag: None,
            projection: Distribution::default(),
            relayout_generation: 0,
        }
    }

    /// Descriptors of the visible panels, in strip order
    pub fn visible_panels(&self) -> Vec<&PanelDescriptor> {
        self.layout
            .visible()
            .iter()
            .filter_map(|name| self.registry.get(name))
            .collect()
    }

    /// Recompute the width projection
    ///
    /// Returns false while the container has not been measured. The previous
    /// projection is kept then, minus panels that are no longer visible.
    pub fn relayout(&mut self) -> bool {
        let Some(container_width) = self.container_width else {
            tracing::debug!("relayout skipped, container not measured yet");
            let visible = self.layout.visible();
            self.projection.widths.retain(|w| visible.contains(&w.name));
            return false;
        };
        let distribution = auto_fit(
            container_width,
            &self.visible_panels(),
            &self.layout.widths,
            &self.config,
        );
        if distribution.degraded {
            tracing::warn!(
                container_width,
                overflow = -distribution.remaining,
                "panels do not fit, strip will scroll"
            );
        }
        self.projection = distribution;
        true
    }

    /// Effective width of a visible panel
    pub fn width_of(&self, name: &str) -> Option<f32> {
        self.projection.width_of(name)
    }

    /// Largest width `name` may take while every other visible panel keeps
    /// its minimum. `None` while geometry is unavailable.
    pub fn max_width_for(&self, name: &str) -> Option<f32> {
        let container_width = self.container_width?;
        let visible = self.visible_panels();
        let siblings_min: f32 = visible
            .iter()
            .filter(|p| p.name != name)
            .map(|p| p.min_width(&self.config))
            .sum();
        Some(container_width - inter_panel_gaps(visible.len(), &self.config) - siblings_min)
    }

    pub fn visibility_event(&self) -> VisibilityChanged {
        let mut active = self.layout.active_tabs.clone();
        active.sort_by_key(|name| self.registry.position(name));
        VisibilityChanged {
            active,
            visible: self.layout.visible(),
        }
    }

    /// Tab buttons in strip order (panels hidden from tabs are skipped)
    pub fn tab_bar(&self) -> Vec<TabButton> {
        self.layout
            .order
            .iter()
            .filter_map(|name| self.registry.get(name))
            .filter(|panel| panel.show_in_tabs)
            .map(|panel| TabButton {
                name: panel.name.clone(),
                title: panel.title.clone(),
                active: self.layout.is_active(&panel.name),
            })
            .collect()
    }

    /// Panic with context if the model is inconsistent (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants_with_context(&self, context: &str) {
        if let Err(problem) = self.layout.check_invariants(&self.registry) {
            panic!("layout invariant violated after {}: {}", context, problem);
        }
        for panel in self.visible_panels() {
            if let Some(width) = self.width_of(&panel.name) {
                assert!(
                    width >= panel.min_width(&self.config),
                    "panel '{}' below its minimum after {}: {}",
                    panel.name,
                    context,
                    width
                );
            }
        }
    }
}
