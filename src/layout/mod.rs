//
// Deterministic thought-cloud layout.
//
// Goals:
// - Deterministic: no randomness, no clocks inside the layout pass
// - Stable: an item keeps its position for the lifetime of the cache,
//   regardless of refetch order or filtering around it
// - No overlap: distinct cells are spaced further apart than the dot
//   diameter, including hover/glow growth
// - Never panics: degenerate geometry degrades to zero-safe values
//
// Submodules:
// - cache: write-once position cache keyed by thought id
// - allocator: sequential-with-fallback cell allocation
// - orchestrator: the full layout pass over a fetched item list

use serde::{Deserialize, Serialize};

mod allocator;
mod cache;
mod orchestrator;

pub use allocator::{allocate, OccupiedCells};
pub use cache::{CachedPlacement, PositionCache};
pub use orchestrator::{filter_recent, layout_cloud, RECENT_WINDOW_DAYS};

/// Viewport class, selected by width against the configured breakpoint.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Viewport {
    Mobile,
    Desktop,
}

impl Viewport {
    pub fn from_width(viewport_width_px: f64, breakpoint_px: f64) -> Self {
        if viewport_width_px < breakpoint_px {
            Viewport::Mobile
        } else {
            Viewport::Desktop
        }
    }
}

/// Presentation policy for the cloud grid. All knobs the frontend may tune;
/// none are hard-coded in the geometry itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    /// Column count under the mobile breakpoint.
    pub mobile_columns: u32,
    /// Column count at or above the mobile breakpoint.
    pub desktop_columns: u32,
    /// Viewport width threshold separating mobile from desktop, in px.
    pub mobile_breakpoint_px: f64,
    /// Margin reserved on each side of the container, in percent.
    pub edge_padding_pct: f64,
    /// Growth headroom for hover/pulse effects; dots are sized so that even
    /// grown by this factor they stay inside their cell.
    pub visual_scale: f64,
    /// Extra slack applied after the visual-scale division.
    pub safety_factor: f64,
    /// Containers shorter than this are laid out as if they had this height
    /// (the canvas itself enforces the same minimum).
    pub min_container_height_px: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            mobile_columns: 3,
            desktop_columns: 5,
            mobile_breakpoint_px: 640.0,
            edge_padding_pct: 5.0,
            visual_scale: 1.35,
            safety_factor: 0.85,
            min_container_height_px: 600.0,
        }
    }
}

/// One layout pass's grid geometry. Recomputed on every pass; only the
/// position cache persists between passes.
///
/// The edge padding lives here once and feeds both the pixel-space cell
/// sizing and the percent-space cell centers, so the two can't drift.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPlan {
    pub columns: u32,
    pub rows: u32,
    pub edge_padding_pct: f64,
    pub cell_width_pct: f64,
    pub cell_height_pct: f64,
    pub cell_width_px: f64,
    pub cell_height_px: f64,
    pub item_diameter_px: f64,
}

impl GridPlan {
    /// Total cell capacity of this plan.
    pub fn total_cells(&self) -> u32 {
        self.columns * self.rows
    }

    /// Center of a cell, in percent of the full container, inside the padded
    /// area. Indices convert as `column = cell % columns`,
    /// `row = cell / columns`.
    pub fn cell_center(&self, cell: u32) -> (f64, f64) {
        let col = cell % self.columns.max(1);
        let row = cell / self.columns.max(1);
        let x = self.edge_padding_pct + (col as f64 + 0.5) * self.cell_width_pct;
        let y = self.edge_padding_pct + (row as f64 + 0.5) * self.cell_height_pct;
        (x, y)
    }
}

/// Compute the grid geometry for one layout pass.
///
/// Capacity always covers the item count: columns come from the viewport
/// class, rows grow as `ceil(item_count / columns)` with no upper bound, so
/// no item is ever dropped. More items simply yield smaller dots.
///
/// Degenerate inputs never panic: zero items produce an unused 1x1 plan, and
/// non-positive container dimensions produce zero cell sizes and a zero
/// diameter instead of dividing by zero.
pub fn compute_grid_plan(
    item_count: usize,
    viewport_width_px: f64,
    container_width_px: f64,
    container_height_px: f64,
    cfg: &GridConfig,
) -> GridPlan {
    let viewport = Viewport::from_width(viewport_width_px, cfg.mobile_breakpoint_px);
    let columns = if item_count == 0 {
        // Degenerate 1x1 plan; nothing will be placed in it.
        1
    } else {
        match viewport {
            Viewport::Mobile => cfg.mobile_columns,
            Viewport::Desktop => cfg.desktop_columns,
        }
        .max(1)
    };
    let rows = (item_count as u32).div_ceil(columns).max(1);

    let padding = cfg.edge_padding_pct.clamp(0.0, 50.0);
    let usable = (100.0 - 2.0 * padding) / 100.0;

    let width_px = container_width_px.max(0.0);
    let height_px = if container_height_px > 0.0 {
        container_height_px.max(cfg.min_container_height_px)
    } else {
        0.0
    };

    let cell_width_pct = (100.0 - 2.0 * padding) / columns as f64;
    let cell_height_pct = (100.0 - 2.0 * padding) / rows as f64;
    let cell_width_px = width_px * usable / columns as f64;
    let cell_height_px = height_px * usable / rows as f64;

    // Avoid division blowup on nonsense configs; the defaults are sane.
    let scale = cfg.visual_scale.max(0.01);
    let item_diameter_px = (cell_width_px.min(cell_height_px) / scale * cfg.safety_factor).max(0.0);

    GridPlan {
        columns,
        rows,
        edge_padding_pct: padding,
        cell_width_pct,
        cell_height_pct,
        cell_width_px,
        cell_height_px,
        item_diameter_px,
    }
}
