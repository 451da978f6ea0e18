//! Layout engine - the composition layer's handle on the panel strip
//!
//! Owns the model, the injected [`LayoutStateStore`] and the observer list.
//! Messages go through [`crate::update::update`]; the returned commands are
//! executed here, which is the only place side effects happen.
//!
//! Scheduling is cooperative and single-threaded. Container resizes are
//! deferred to the next [`LayoutEngine::frame`] and coalesced (newest
//! request wins). A pending relayout is flushed before any user interaction
//! is processed, so an interaction never observes a stale projection.

use crate::commands::Cmd;
use crate::config::BoardConfig;
use crate::events::{LayoutEvent, ListenerId, Listeners, VisibilityChanged};
use crate::messages::{AppMsg, Msg, ResizeMsg, TabMsg};
use crate::model::{BoardModel, LayoutState, TabButton};
use crate::panel::{Distribution, PanelRegistry};
use crate::store::{LayoutStateStore, StateKey};
use crate::update::update;

pub struct LayoutEngine<S: LayoutStateStore> {
    model: BoardModel,
    store: S,
    listeners: Listeners,
    pending_relayout: Option<u64>,
}

impl<S: LayoutStateStore> LayoutEngine<S> {
    /// Restore layout state from `store` and build the engine
    ///
    /// `override_tabs` is an external active-tab reference (e.g. from a link)
    /// and wins over the persisted active set when it names known panels.
    pub fn boot(
        registry: PanelRegistry,
        config: BoardConfig,
        store: S,
        override_tabs: Option<&[String]>,
    ) -> Self {
        let persisted = store.load();
        let layout = LayoutState::restore(&registry, &persisted, override_tabs);
        tracing::info!(
            order = ?layout.order,
            active = ?layout.active_tabs,
            pinned = layout.widths.len(),
            "layout state restored"
        );
        Self {
            model: BoardModel::new(registry, config, layout),
            store,
            listeners: Listeners::new(),
            pending_relayout: None,
        }
    }

    /// Process one message and execute the resulting commands
    pub fn dispatch(&mut self, msg: Msg) {
        if msg.is_user_interaction() {
            self.frame();
        }
        if let Some(cmd) = update(&mut self.model, msg) {
            self.execute(cmd);
        }
    }

    /// Run the pending deferred relayout, if any. Returns true if one ran.
    pub fn frame(&mut self) -> bool {
        let Some(generation) = self.pending_relayout.take() else {
            return false;
        };
        if let Some(cmd) = update(&mut self.model, Msg::App(AppMsg::RelayoutFrame { generation })) {
            self.execute(cmd);
        }
        true
    }

    fn execute(&mut self, cmd: Cmd) {
        for cmd in cmd.into_vec() {
            match cmd {
                Cmd::None | Cmd::Batch(_) => {}
                Cmd::ApplyWidths => {
                    let event = LayoutEvent::WidthsApplied(self.model.projection.clone());
                    self.listeners.emit(&event);
                }
                Cmd::Persist(patch) => {
                    if let Err(e) = self.store.save(&patch) {
                        tracing::warn!("Failed to persist layout state: {:#}", e);
                    }
                }
                Cmd::ClearStoredWidths => {
                    if let Err(e) = self.store.remove(StateKey::PanelWidths) {
                        tracing::warn!("Failed to clear stored panel widths: {:#}", e);
                    }
                }
                Cmd::EmitVisibility(event) => {
                    self.listeners.emit(&LayoutEvent::VisibilityChanged(event));
                }
                Cmd::ScheduleRelayout { generation } => {
                    if let Some(superseded) = self.pending_relayout.replace(generation) {
                        tracing::trace!(superseded, generation, "relayout superseded");
                    }
                }
            }
        }
    }

    // === Observers ===

    pub fn subscribe(&mut self, listener: impl FnMut(&LayoutEvent) + 'static) -> ListenerId {
        self.listeners.subscribe(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Emit the current visibility to observers (e.g. right after boot)
    pub fn announce(&mut self) {
        let event = LayoutEvent::VisibilityChanged(self.model.visibility_event());
        self.listeners.emit(&event);
    }

    // === Convenience entry points ===

    pub fn toggle(&mut self, name: &str) {
        self.dispatch(Msg::Tabs(TabMsg::Toggle(name.to_string())));
    }

    pub fn reorder(&mut self, names: Vec<String>) {
        self.dispatch(Msg::Tabs(TabMsg::Reorder(names)));
    }

    pub fn move_tab(&mut self, name: &str, offset: isize) {
        self.dispatch(Msg::Tabs(TabMsg::Move {
            name: name.to_string(),
            offset,
        }));
    }

    pub fn container_resized(&mut self, width: Option<f32>) {
        self.dispatch(Msg::App(AppMsg::ContainerResized(width)));
    }

    pub fn start_drag(&mut self, panel: &str, pointer_x: f64) {
        self.dispatch(Msg::Resize(ResizeMsg::Start {
            panel: panel.to_string(),
            pointer_x,
        }));
    }

    pub fn drag_to(&mut self, pointer_x: f64) {
        self.dispatch(Msg::Resize(ResizeMsg::Move { pointer_x }));
    }

    pub fn end_drag(&mut self) {
        self.dispatch(Msg::Resize(ResizeMsg::End));
    }

    pub fn reset_panel(&mut self, name: &str) {
        self.dispatch(Msg::Resize(ResizeMsg::ResetPanel(name.to_string())));
    }

    pub fn reset(&mut self) {
        self.dispatch(Msg::App(AppMsg::ResetLayout));
    }

    // === Queries ===

    pub fn model(&self) -> &BoardModel {
        &self.model
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn widths(&self) -> &Distribution {
        &self.model.projection
    }

    pub fn width_of(&self, name: &str) -> Option<f32> {
        self.model.width_of(name)
    }

    pub fn order(&self) -> &[String] {
        &self.model.layout.order
    }

    pub fn active_tabs(&self) -> &[String] {
        &self.model.layout.active_tabs
    }

    pub fn visibility(&self) -> VisibilityChanged {
        self.model.visibility_event()
    }

    pub fn tab_bar(&self) -> Vec<TabButton> {
        self.model.tab_bar()
    }

    pub fn is_dragging(&self) -> bool {
        self.model.drag.is_some()
    }

    pub fn has_pending_relayout(&self) -> bool {
        self.pending_relayout.is_some()
    }
}

impl<S: LayoutStateStore + std::fmt::Debug> std::fmt::Debug for LayoutEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutEngine")
            .field("model", &self.model)
            .field("store", &self.store)
            .field("listeners", &self.listeners)
            .field("pending_relayout", &self.pending_relayout)
            .finish()
    }
}
