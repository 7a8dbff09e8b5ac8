use serde::{Deserialize, Serialize};

pub const MIN_PANEL_WIDTH: u32 = 320;
pub const MIN_PANEL_HEIGHT: u32 = 240;
/// Space kept free between the panel and each viewport edge.
pub const VIEWPORT_MARGIN: u32 = 40;

const GRID_PADDING: u32 = 16;
const BUTTON_WIDTH: u32 = 96;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSize {
    pub width: u32,
    pub height: u32,
}

impl Default for PanelSize {
    fn default() -> Self {
        Self {
            width: 360,
            height: 420,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Clamp `value` into `[min, max]`. If the range is inverted, `min` wins.
pub fn clamp_dimension(value: u32, min: u32, max: u32) -> u32 {
    if max < min {
        min
    } else {
        value.clamp(min, max)
    }
}

/// Largest panel that fits the viewport, never below the minimum size.
pub fn max_panel_size(viewport: Viewport) -> PanelSize {
    PanelSize {
        width: viewport
            .width
            .saturating_sub(2 * VIEWPORT_MARGIN)
            .max(MIN_PANEL_WIDTH),
        height: viewport
            .height
            .saturating_sub(2 * VIEWPORT_MARGIN)
            .max(MIN_PANEL_HEIGHT),
    }
}

pub fn clamp_panel(size: PanelSize, viewport: Viewport) -> PanelSize {
    let max = max_panel_size(viewport);
    PanelSize {
        width: clamp_dimension(size.width, MIN_PANEL_WIDTH, max.width),
        height: clamp_dimension(size.height, MIN_PANEL_HEIGHT, max.height),
    }
}

/// How many shot buttons fit on one row of a panel this wide.
pub fn grid_columns(panel_width: u32) -> usize {
    let usable = panel_width.saturating_sub(2 * GRID_PADDING);
    ((usable / BUTTON_WIDTH) as usize).max(1)
}
