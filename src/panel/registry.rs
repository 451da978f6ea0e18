//! Static panel registry
//!
//! Panels are declared once at boot. Their existence never changes at
//! runtime; only order, visibility and manual width do, and those live in
//! [`crate::model::LayoutState`].

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::config::BoardConfig;

/// How a panel lays out its content, which decides its snap rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelKind {
    /// Content is a grid of fixed-width card columns
    CardBased,
    /// Free-form content, snapped to a coarse step
    Generic,
}

/// One entry of the registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelDescriptor {
    /// Stable unique identifier (used as the persistence key)
    pub name: String,
    /// Label shown on the tab button
    pub title: String,
    pub kind: PanelKind,
    /// Sum of the panel's internal horizontal padding
    pub padding_px: f32,
    /// Whether the tab bar lists a button for this panel
    pub show_in_tabs: bool,
    /// Reserved trailing panel: always last, never reordered
    pub pinned_last: bool,
}

impl PanelDescriptor {
    pub fn new(name: impl Into<String>, title: impl Into<String>, kind: PanelKind) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            kind,
            padding_px: 24.0,
            show_in_tabs: true,
            pinned_last: false,
        }
    }

    pub fn with_padding(mut self, padding_px: f32) -> Self {
        self.padding_px = padding_px;
        self
    }

    pub fn hidden_from_tabs(mut self) -> Self {
        self.show_in_tabs = false;
        self
    }

    pub fn pinned_last(mut self) -> Self {
        self.pinned_last = true;
        self
    }

    /// Structural chrome: padding plus wrap-border and scrollbar allowances
    pub fn extra(&self, config: &BoardConfig) -> f32 {
        self.padding_px + config.wrap_border + config.scrollbar
    }

    /// Narrowest width this panel may ever take
    pub fn min_width(&self, config: &BoardConfig) -> f32 {
        match self.kind {
            PanelKind::CardBased => self.extra(config) + config.card_width,
            PanelKind::Generic => config.generic_min,
        }
    }
}

/// Ordered list of every panel the dashboard knows about
#[derive(Debug, Clone, PartialEq)]
pub struct PanelRegistry {
    panels: Vec<PanelDescriptor>,
}

impl PanelRegistry {
    /// Build a registry, rejecting duplicate names and multiple trailing panels
    pub fn new(panels: Vec<PanelDescriptor>) -> Result<Self> {
        if panels.is_empty() {
            bail!("Panel registry must declare at least one panel");
        }
        for (i, panel) in panels.iter().enumerate() {
            if panel.name.is_empty() {
                bail!("Panel at index {} has an empty name", i);
            }
            if panels[..i].iter().any(|p| p.name == panel.name) {
                bail!("Duplicate panel name '{}'", panel.name);
            }
        }
        let pinned = panels.iter().filter(|p| p.pinned_last).count();
        if pinned > 1 {
            bail!("At most one panel can be pinned last, found {}", pinned);
        }
        Ok(Self { panels })
    }

    /// The built-in social-feed dashboard panels
    pub fn social_feed() -> Self {
        Self {
            panels: vec![
                PanelDescriptor::new("posts", "Posts", PanelKind::CardBased),
                PanelDescriptor::new("connections", "Connections", PanelKind::CardBased),
                PanelDescriptor::new("search", "Search", PanelKind::CardBased),
                PanelDescriptor::new("content", "Content", PanelKind::CardBased),
                PanelDescriptor::new("notifications", "Notifications", PanelKind::Generic),
                PanelDescriptor::new("cache", "Cache", PanelKind::Generic)
                    .hidden_from_tabs()
                    .pinned_last(),
            ],
        }
    }

    pub fn get(&self, name: &str) -> Option<&PanelDescriptor> {
        self.panels.iter().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Panels in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &PanelDescriptor> {
        self.panels.iter()
    }

    /// Panel names in declaration order
    pub fn names(&self) -> Vec<String> {
        self.panels.iter().map(|p| p.name.clone()).collect()
    }

    /// Name of the reserved trailing panel, if one is declared
    pub fn trailing(&self) -> Option<&str> {
        self.panels
            .iter()
            .find(|p| p.pinned_last)
            .map(|p| p.name.as_str())
    }

    /// Declaration index, used to sort names into registry order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.panels.iter().position(|p| p.name == name)
    }

    /// First declared panel; the fallback active tab
    pub fn first(&self) -> &PanelDescriptor {
        &self.panels[0]
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}
