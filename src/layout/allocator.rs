// Cell allocation for one layout pass.
//
// Each pass rebuilds an OccupiedCells set from scratch (only the position
// cache persists between passes). New items ask for their list index as the
// preferred cell and take the next free index after it.

use std::collections::HashSet;

/// Cell indices already claimed during the current layout pass.
#[derive(Debug, Clone, Default)]
pub struct OccupiedCells {
    cells: HashSet<u32>,
}

impl OccupiedCells {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a cell. Returns false if it was already claimed.
    pub fn claim(&mut self, cell: u32) -> bool {
        self.cells.insert(cell)
    }

    pub fn is_claimed(&self, cell: u32) -> bool {
        self.cells.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Find and claim the first free cell at or after `start`.
///
/// Capacity is guaranteed by the grid plan (rows grow with item count), so
/// the forward scan always finds a free cell in correct usage. If it ever
/// doesn't — or `start` is already past `total_cells` — the fallback claims
/// and returns `start` unclamped, trading a possible visual overlap for not
/// crashing.
pub fn allocate(start: u32, occupied: &mut OccupiedCells, total_cells: u32) -> u32 {
    for cell in start..total_cells {
        if occupied.claim(cell) {
            return cell;
        }
    }
    occupied.claim(start);
    start
}
