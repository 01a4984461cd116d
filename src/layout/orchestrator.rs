// The layout pass.
//
// Walks the filtered item list in order, reusing cached placements verbatim
// and allocating grid cells for items seen for the first time. Two rules make
// the output stable across refetches:
// - a cached placement is never recomputed, so an item never moves once shown
// - cells owned by cached items are marked occupied before any new item is
//   placed, so a newcomer can't land on top of an existing dot
//
// The pass is pure apart from cache writes: same cache state + same list =>
// identical output. Never panics for any input list.

use chrono::{DateTime, Duration, Utc};

use super::allocator::{allocate, OccupiedCells};
use super::cache::{CachedPlacement, PositionCache};
use super::GridPlan;
use crate::model::ThoughtItem;
use crate::output::PositionedThought;

/// Window of the "recent only" toggle, in days.
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Keep only items created within the recency window ending at `now`.
/// Order is preserved. `now` is explicit so the filter is deterministic.
pub fn filter_recent(items: Vec<ThoughtItem>, now: DateTime<Utc>) -> Vec<ThoughtItem> {
    let cutoff = now - Duration::days(RECENT_WINDOW_DAYS);
    items.into_iter().filter(|t| t.created_at >= cutoff).collect()
}

/// Assign every item a placement and emit the positioned list in input order.
///
/// Cache misses are allocated starting from the item's index in the list,
/// placed at the padded cell center with the plan's uniform diameter and zero
/// rotation, and written to the cache exactly once. An empty list yields an
/// empty output.
pub fn layout_cloud(
    items: &[ThoughtItem],
    cache: &mut PositionCache,
    plan: &GridPlan,
) -> Vec<PositionedThought> {
    let total_cells = plan.total_cells();
    let mut occupied = OccupiedCells::new();

    // Claim cells owned by already-placed items first, including items not in
    // this pass's list: a dot hidden by a filter keeps its cell, so a
    // newcomer can't take it and collide once the filter shows it again.
    // Entries from a larger grid (before a resize) can point past the current
    // capacity; those keep their position but can't reserve a cell here.
    for (_, placement) in cache.placements() {
        if placement.cell < total_cells {
            occupied.claim(placement.cell);
        }
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let placement = match cache.get(item.id) {
                Some(cached) => cached,
                None => {
                    let cell = allocate(index as u32, &mut occupied, total_cells);
                    let (x, y) = plan.cell_center(cell);
                    let placement = CachedPlacement {
                        x,
                        y,
                        size: plan.item_diameter_px,
                        rotation: 0.0,
                        cell,
                    };
                    cache.insert(item.id, placement);
                    placement
                }
            };
            PositionedThought::new(item.clone(), placement)
        })
        .collect()
}
