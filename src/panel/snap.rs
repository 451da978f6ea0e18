//! Column-snap calculator
//!
//! Card-based panels are only ever as wide as an exact number of card
//! columns plus their chrome. Rounding is always down: a width that claims
//! N columns must really fit N columns, otherwise the grid renders N-1
//! columns with a ragged gap.

use crate::config::BoardConfig;
use crate::panel::{PanelDescriptor, PanelKind};

/// Slack in pixels when testing whether a column fits, so a width built by
/// `width_for_columns` still counts all of its columns after f32 rounding
const FIT_EPSILON_PX: f64 = 0.01;

/// Width of a card-based panel holding exactly `cols` columns
pub fn width_for_columns(extra: f32, cols: u32, config: &BoardConfig) -> f32 {
    let cols = cols.max(1);
    extra + cols as f32 * config.card_width + (cols - 1) as f32 * config.card_gap
}

/// Widest width a card-based panel may take
pub fn max_card_width(extra: f32, config: &BoardConfig) -> f32 {
    width_for_columns(extra, config.max_cols, config)
}

/// Number of whole card columns that fit in `width`, clamped to `[1, max_cols]`
pub fn column_count(panel: &PanelDescriptor, config: &BoardConfig, width: f32) -> u32 {
    if panel.kind == PanelKind::Generic {
        return 1;
    }
    let cols = fitting_columns(width - panel.extra(config), config);
    if cols.is_nan() || cols < 1.0 {
        1
    } else {
        (cols as u32).min(config.max_cols.max(1))
    }
}

/// Whole columns that fit in `avail` content pixels (unclamped, may be NaN)
fn fitting_columns(avail: f32, config: &BoardConfig) -> f64 {
    let per_col = config.card_width as f64 + config.card_gap as f64;
    ((avail as f64 + config.card_gap as f64 + FIT_EPSILON_PX) / per_col).floor()
}

/// Snap a candidate width to the nearest visually exact width at or below it
///
/// Total over every input: NaN and anything below the minimum yield the
/// minimum, anything above the maximum yields the maximum.
pub fn snap_width(panel: &PanelDescriptor, config: &BoardConfig, candidate: f32) -> f32 {
    match panel.kind {
        PanelKind::CardBased => snap_card(panel.extra(config), config, candidate),
        PanelKind::Generic => snap_generic(config, candidate),
    }
}

fn snap_card(extra: f32, config: &BoardConfig, candidate: f32) -> f32 {
    let min_px = width_for_columns(extra, 1, config);
    let max_px = max_card_width(extra, config);
    if candidate.is_nan() {
        return min_px;
    }

    // Bounds can be inverted in a hand-built config, so no clamp()
    let clamped = candidate.max(min_px).min(max_px);
    let cols = fitting_columns(clamped - extra, config);
    let cols = if cols.is_finite() && cols >= 1.0 { cols as u32 } else { 1 };
    width_for_columns(extra, cols.min(config.max_cols.max(1)), config)
}

fn snap_generic(config: &BoardConfig, candidate: f32) -> f32 {
    if candidate.is_nan() {
        return config.generic_min;
    }
    let step = config.generic_step;
    let stepped = if step.is_finite() && step > 0.0 {
        (candidate / step).floor() * step
    } else {
        candidate
    };
    let upper = config.generic_max.max(config.generic_min);
    stepped.max(config.generic_min).min(upper)
}
