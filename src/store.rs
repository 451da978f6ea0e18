//! Durable key/value store for layout state
//!
//! Three keys are persisted independently: `tab_order`, `active_tabs` and
//! `panel_widths`. Each one may be missing or garbled on its own; the
//! engine then falls back to defaults for that key only.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Persisted state keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKey {
    TabOrder,
    ActiveTabs,
    PanelWidths,
}

impl StateKey {
    pub const ALL: [StateKey; 3] = [StateKey::TabOrder, StateKey::ActiveTabs, StateKey::PanelWidths];

    pub fn as_str(&self) -> &'static str {
        match self {
            StateKey::TabOrder => "tab_order",
            StateKey::ActiveTabs => "active_tabs",
            StateKey::PanelWidths => "panel_widths",
        }
    }
}

/// Partial layout state; `None` means "absent" on load and "leave alone" on save
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedLayout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_order: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_tabs: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel_widths: Option<BTreeMap<String, f32>>,
}

impl PersistedLayout {
    pub fn is_empty(&self) -> bool {
        self.tab_order.is_none() && self.active_tabs.is_none() && self.panel_widths.is_none()
    }

    /// Overlay the keys present in `patch` onto `self`
    pub fn merge(&mut self, patch: &PersistedLayout) {
        if let Some(order) = &patch.tab_order {
            self.tab_order = Some(order.clone());
        }
        if let Some(active) = &patch.active_tabs {
            self.active_tabs = Some(active.clone());
        }
        if let Some(widths) = &patch.panel_widths {
            self.panel_widths = Some(widths.clone());
        }
    }

    pub fn clear(&mut self, key: StateKey) {
        match key {
            StateKey::TabOrder => self.tab_order = None,
            StateKey::ActiveTabs => self.active_tabs = None,
            StateKey::PanelWidths => self.panel_widths = None,
        }
    }
}

/// Storage backend injected into the layout engine
pub trait LayoutStateStore {
    /// Read every key; unreadable keys come back as `None`
    fn load(&self) -> PersistedLayout;

    /// Write the keys that are `Some` in `patch`, leaving the others untouched
    fn save(&mut self, patch: &PersistedLayout) -> Result<()>;

    /// Delete one key entirely
    fn remove(&mut self, key: StateKey) -> Result<()>;
}

/// In-process store, for tests and embedders that persist elsewhere
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: PersistedLayout,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: PersistedLayout) -> Self {
        Self { state, writes: 0 }
    }

    /// Current stored state
    pub fn state(&self) -> &PersistedLayout {
        &self.state
    }

    /// Number of save/remove calls seen so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl LayoutStateStore for MemoryStore {
    fn load(&self) -> PersistedLayout {
        self.state.clone()
    }

    fn save(&mut self, patch: &PersistedLayout) -> Result<()> {
        self.state.merge(patch);
        self.writes += 1;
        Ok(())
    }

    fn remove(&mut self, key: StateKey) -> Result<()> {
        self.state.clear(key);
        self.writes += 1;
        Ok(())
    }
}

/// JSON file store: one object whose top-level fields are the state keys
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.config/feedboard/layout.json`
    pub fn default_location() -> Option<Self> {
        crate::config_paths::layout_state_file().map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_object(&self) -> Map<String, Value> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::debug!("No layout state at {}: {}", self.path.display(), e);
                return Map::new();
            }
        };
        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                tracing::warn!(
                    "Layout state at {} is not a JSON object, ignoring it",
                    self.path.display()
                );
                Map::new()
            }
        }
    }

    fn write_object(&self, map: Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                crate::config_paths::ensure_dir(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(&Value::Object(map))
            .context("Failed to serialize layout state")?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write layout state to {}", self.path.display()))
    }
}

/// Decode one key, treating a malformed value as absent
fn decode_key<T: serde::de::DeserializeOwned>(map: &Map<String, Value>, key: StateKey) -> Option<T> {
    let value = map.get(key.as_str())?;
    match serde_json::from_value(value.clone()) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            tracing::warn!("Ignoring malformed '{}' in layout state: {}", key.as_str(), e);
            None
        }
    }
}

impl LayoutStateStore for JsonFileStore {
    fn load(&self) -> PersistedLayout {
        let map = self.read_object();
        PersistedLayout {
            tab_order: decode_key(&map, StateKey::TabOrder),
            active_tabs: decode_key(&map, StateKey::ActiveTabs),
            panel_widths: decode_key(&map, StateKey::PanelWidths),
        }
    }

    fn save(&mut self, patch: &PersistedLayout) -> Result<()> {
        if patch.is_empty() {
            return Ok(());
        }
        let mut map = self.read_object();
        if let Some(order) = &patch.tab_order {
            map.insert(StateKey::TabOrder.as_str().to_string(), serde_json::to_value(order)?);
        }
        if let Some(active) = &patch.active_tabs {
            map.insert(StateKey::ActiveTabs.as_str().to_string(), serde_json::to_value(active)?);
        }
        if let Some(widths) = &patch.panel_widths {
            map.insert(StateKey::PanelWidths.as_str().to_string(), serde_json::to_value(widths)?);
        }
        self.write_object(map)
    }

    fn remove(&mut self, key: StateKey) -> Result<()> {
        let mut map = self.read_object();
        if map.remove(key.as_str()).is_some() {
            self.write_object(map)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widths(pairs: &[(&str, f32)]) -> BTreeMap<String, f32> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_memory_store_merges_partial_saves() {
        let mut store = MemoryStore::new();
        store
            .save(&PersistedLayout {
                tab_order: Some(vec!["posts".into(), "cache".into()]),
                ..Default::default()
            })
            .unwrap();
        store
            .save(&PersistedLayout {
                panel_widths: Some(widths(&[("posts", 752.0)])),
                ..Default::default()
            })
            .unwrap();

        let loaded = store.load();
        assert_eq!(loaded.tab_order, Some(vec!["posts".to_string(), "cache".to_string()]));
        assert_eq!(loaded.panel_widths, Some(widths(&[("posts", 752.0)])));
        assert_eq!(loaded.active_tabs, None);
        assert_eq!(store.writes(), 2);
    }

    #[test]
    fn test_memory_store_remove() {
        let mut store = MemoryStore::with_state(PersistedLayout {
            panel_widths: Some(widths(&[("posts", 752.0)])),
            active_tabs: Some(vec!["posts".into()]),
            ..Default::default()
        });
        store.remove(StateKey::PanelWidths).unwrap();
        assert_eq!(store.load().panel_widths, None);
        assert!(store.load().active_tabs.is_some());
    }

    #[test]
    fn test_json_store_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("layout.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_json_store_writes_keys_independently() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("layout.json");
        let mut store = JsonFileStore::new(&path);

        store
            .save(&PersistedLayout {
                active_tabs: Some(vec!["search".into()]),
                ..Default::default()
            })
            .unwrap();
        store
            .save(&PersistedLayout {
                panel_widths: Some(widths(&[("search", 1114.0)])),
                ..Default::default()
            })
            .unwrap();

        let reopened = JsonFileStore::new(&path).load();
        assert_eq!(reopened.active_tabs, Some(vec!["search".to_string()]));
        assert_eq!(reopened.panel_widths, Some(widths(&[("search", 1114.0)])));

        store.remove(StateKey::PanelWidths).unwrap();
        let reopened = JsonFileStore::new(&path).load();
        assert_eq!(reopened.panel_widths, None);
        assert_eq!(reopened.active_tabs, Some(vec!["search".to_string()]));
    }

    #[test]
    fn test_json_store_one_bad_key_does_not_poison_others() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(
            &path,
            r#"{"tab_order": 42, "active_tabs": ["posts"], "panel_widths": {"posts": "wide"}}"#,
        )
        .unwrap();

        let loaded = JsonFileStore::new(&path).load();
        assert_eq!(loaded.tab_order, None);
        assert_eq!(loaded.active_tabs, Some(vec!["posts".to_string()]));
        assert_eq!(loaded.panel_widths, None);
    }

    #[test]
    fn test_json_store_garbage_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(&path, "not json at all {").unwrap();
        assert!(JsonFileStore::new(&path).load().is_empty());

        std::fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(JsonFileStore::new(&path).load().is_empty());
    }

    #[test]
    fn test_state_key_names() {
        let names: Vec<&str> = StateKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["tab_order", "active_tabs", "panel_widths"]);
    }
}
