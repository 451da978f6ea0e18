//! Auto-fit distributor
//!
//! Sizes every visible panel that has no manual width. Pinned panels take
//! their snapped stored width first; unpinned panels start at one column
//! and then grow one column at a time, round-robin in strip order, while
//! the remaining space covers the next column. Growing by whole columns
//! keeps every auto width snap-exact; earlier panels in the strip win
//! when the leftover space cannot give every panel another column.

use std::collections::BTreeMap;

use crate::config::BoardConfig;
use crate::panel::snap::{snap_width, width_for_columns};
use crate::panel::{PanelDescriptor, PanelKind};

/// Computed width of one visible panel
#[derive(Debug, Clone, PartialEq)]
pub struct PanelWidth {
    pub name: String,
    pub width: f32,
    /// Card columns the width holds (1 for generic panels)
    pub columns: u32,
    /// Width comes from a manual override rather than auto-fit
    pub pinned: bool,
}

/// Result of one auto-fit pass, in strip order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Distribution {
    pub widths: Vec<PanelWidth>,
    /// Space left over after the last grow; negative when the strip overflows
    pub remaining: f32,
    /// Minimums alone did not fit: auto panels stay at their minimum and the
    /// container scrolls
    pub degraded: bool,
}

impl Distribution {
    pub fn width_of(&self, name: &str) -> Option<f32> {
        self.widths.iter().find(|w| w.name == name).map(|w| w.width)
    }

    pub fn get(&self, name: &str) -> Option<&PanelWidth> {
        self.widths.iter().find(|w| w.name == name)
    }

    /// Sum of panel widths plus the gaps between them
    pub fn total_width(&self, config: &BoardConfig) -> f32 {
        let panels: f32 = self.widths.iter().map(|w| w.width).sum();
        panels + inter_panel_gaps(self.widths.len(), config)
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

/// Total gap width between `count` adjacent panels
pub fn inter_panel_gaps(count: usize, config: &BoardConfig) -> f32 {
    count.saturating_sub(1) as f32 * config.panel_gap
}

struct Slot<'a> {
    panel: &'a PanelDescriptor,
    width: f32,
    columns: u32,
    pinned: bool,
}

/// Compute widths for every visible panel
///
/// `visible` is in strip order; `manual` holds the user-pinned widths keyed
/// by panel name (entries for panels not in `visible` are ignored).
pub fn auto_fit(
    container_width: f32,
    visible: &[&PanelDescriptor],
    manual: &BTreeMap<String, f32>,
    config: &BoardConfig,
) -> Distribution {
    let mut remaining = container_width - inter_panel_gaps(visible.len(), config);

    let mut slots: Vec<Slot> = visible
        .iter()
        .map(|&panel| match manual.get(&panel.name) {
            Some(&stored) => {
                let width = snap_width(panel, config, stored);
                Slot {
                    panel,
                    width,
                    columns: crate::panel::column_count(panel, config, width),
                    pinned: true,
                }
            }
            None => Slot {
                panel,
                width: panel.min_width(config),
                columns: 1,
                pinned: false,
            },
        })
        .collect();

    for slot in slots.iter().filter(|s| s.pinned) {
        remaining -= slot.width;
    }

    let auto_minimums: f32 = slots.iter().filter(|s| !s.pinned).map(|s| s.width).sum();
    let degraded = auto_minimums > remaining;
    remaining -= auto_minimums;

    if degraded {
        tracing::debug!(
            container_width,
            overflow = -remaining,
            "panel minimums exceed container, falling back to scroll"
        );
    } else {
        grow_round_robin(&mut slots, &mut remaining, config);
    }

    Distribution {
        widths: slots
            .into_iter()
            .map(|s| PanelWidth {
                name: s.panel.name.clone(),
                width: s.width,
                columns: s.columns,
                pinned: s.pinned,
            })
            .collect(),
        remaining,
        degraded,
    }
}

fn grow_round_robin(slots: &mut [Slot], remaining: &mut f32, config: &BoardConfig) {
    let max_cols = config.max_cols.max(1);
    loop {
        let mut progress = false;
        for slot in slots.iter_mut() {
            if slot.pinned || slot.panel.kind != PanelKind::CardBased || slot.columns >= max_cols {
                continue;
            }
            let extra = slot.panel.extra(config);
            let grown = width_for_columns(extra, slot.columns + 1, config);
            let delta = grown - slot.width;
            if delta <= *remaining {
                slot.columns += 1;
                slot.width = grown;
                *remaining -= delta;
                progress = true;
            }
        }
        if !progress {
            break;
        }
    }
}
