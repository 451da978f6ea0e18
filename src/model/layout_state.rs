//! Persisted layout state: strip order, active tabs, manual widths
//!
//! `LayoutState` is the single source of truth for the strip. Pixel widths
//! are a projection of it (see [`crate::panel::auto_fit`]) and are never read
//! back into it.

use std::collections::BTreeMap;

use crate::panel::PanelRegistry;
use crate::store::PersistedLayout;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutState {
    /// Every registered panel name in display order, trailing panel last
    pub order: Vec<String>,
    /// Active (visible) panels in strip order; never empty
    pub active_tabs: Vec<String>,
    /// Manual width overrides; absence means auto-fit
    pub widths: BTreeMap<String, f32>,
}

impl LayoutState {
    /// Fresh state: registry order, first panel active, no manual widths
    pub fn defaults(registry: &PanelRegistry) -> Self {
        Self {
            order: normalize_order(registry, &[], &[]),
            active_tabs: vec![registry.first().name.clone()],
            widths: BTreeMap::new(),
        }
    }

    /// Rebuild state from whatever the store returned
    ///
    /// Active set resolution: external override, then persisted
    /// `active_tabs`, then the first registered panel.
    pub fn restore(
        registry: &PanelRegistry,
        persisted: &PersistedLayout,
        override_tabs: Option<&[String]>,
    ) -> Self {
        let order = normalize_order(
            registry,
            persisted.tab_order.as_deref().unwrap_or(&[]),
            &[],
        );

        let from_override = override_tabs
            .map(|names| known_unique(registry, names))
            .filter(|names| !names.is_empty());
        let from_store = persisted
            .active_tabs
            .as_deref()
            .map(|names| known_unique(registry, names))
            .filter(|names| !names.is_empty());

        let active = match (from_override, from_store) {
            (Some(names), _) => {
                tracing::debug!(?names, "active tabs from external reference");
                names
            }
            (None, Some(names)) => names,
            (None, None) => vec![registry.first().name.clone()],
        };

        let widths = persisted
            .panel_widths
            .as_ref()
            .map(|widths| sanitize_widths(registry, widths))
            .unwrap_or_default();

        let mut state = Self {
            order,
            active_tabs: active,
            widths,
        };
        state.sort_active();
        state
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active_tabs.iter().any(|n| n == name)
    }

    /// Active panels in strip order
    pub fn visible(&self) -> Vec<String> {
        self.order
            .iter()
            .filter(|name| self.is_active(name))
            .cloned()
            .collect()
    }

    /// Re-derive `active_tabs` so it follows `order`
    pub fn sort_active(&mut self) {
        self.active_tabs = self.visible();
    }

    /// Describe the first broken invariant, if any
    pub fn check_invariants(&self, registry: &PanelRegistry) -> Result<(), String> {
        if self.active_tabs.is_empty() {
            return Err("active_tabs is empty".to_string());
        }
        if let Some(unknown) = self.active_tabs.iter().find(|n| !registry.contains(n)) {
            return Err(format!("active tab '{}' is not registered", unknown));
        }
        if self.order.len() != registry.len() || registry.iter().any(|p| !self.order.contains(&p.name)) {
            return Err(format!("order {:?} is not a permutation of the registry", self.order));
        }
        if let Some(trailing) = registry.trailing() {
            if self.order.last().map(String::as_str) != Some(trailing) {
                return Err(format!("reserved panel '{}' is not last", trailing));
            }
        }
        Ok(())
    }
}

/// Turn a user-supplied sequence into a full permutation of the registry
///
/// Unknown names and duplicates are dropped. Names missing from `candidate`
/// are appended in their `previous` relative order, then in registry order.
/// The reserved trailing panel always ends up last.
pub fn normalize_order(
    registry: &PanelRegistry,
    candidate: &[String],
    previous: &[String],
) -> Vec<String> {
    let trailing = registry.trailing();
    let mut order: Vec<String> = Vec::with_capacity(registry.len());

    let fallback = registry.iter().map(|p| &p.name);
    for name in candidate.iter().chain(previous).chain(fallback) {
        if Some(name.as_str()) == trailing || !registry.contains(name) || order.contains(name) {
            continue;
        }
        order.push(name.clone());
    }

    if let Some(trailing) = trailing {
        order.push(trailing.to_string());
    }
    order
}

fn known_unique(registry: &PanelRegistry, names: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for name in names {
        if registry.contains(name) && !out.contains(name) {
            out.push(name.clone());
        }
    }
    out
}

fn sanitize_widths(registry: &PanelRegistry, widths: &BTreeMap<String, f32>) -> BTreeMap<String, f32> {
    widths
        .iter()
        .filter(|(name, width)| registry.contains(name) && width.is_finite() && **width > 0.0)
        .map(|(name, width)| (name.clone(), *width))
        .collect()
}
