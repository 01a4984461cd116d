// Write-once position cache.
//
// One cache per mounted cloud view. Positions are assigned the first time a
// thought id is seen and never change while the cache lives, which is what
// keeps dots from teleporting when the backend refetches or reorders the
// list. Cleared only by the explicit user-facing Refresh action (or by the
// view unmounting and dropping the cache).

use std::collections::HashMap;

use serde::Serialize;

/// A resolved placement, remembered per thought id.
///
/// `x`/`y` are percent of the container, `size` is the dot diameter in px.
/// `rotation` is carried for the renderer but is always 0 in the current
/// product. `cell` is the claimed grid index, kept so later passes can mark
/// this cell occupied before placing new items.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedPlacement {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub rotation: f64,
    #[serde(skip)]
    pub cell: u32,
}

/// Map from thought id to its placement. Insert is write-once: an existing
/// entry is never overwritten, and a double insert for the same id is a
/// contract bug in the caller (asserted in debug builds).
#[derive(Debug, Clone, Default)]
pub struct PositionCache {
    entries: HashMap<i64, CachedPlacement>,
}

impl PositionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: i64) -> Option<CachedPlacement> {
        self.entries.get(&id).copied()
    }

    pub fn insert(&mut self, id: i64, placement: CachedPlacement) {
        debug_assert!(
            !self.entries.contains_key(&id),
            "placement for thought {id} assigned twice"
        );
        self.entries.entry(id).or_insert(placement);
    }

    pub fn contains(&self, id: i64) -> bool {
        self.entries.contains_key(&id)
    }

    /// Iterate all cached placements, in no particular order.
    pub fn placements(&self) -> impl Iterator<Item = (i64, CachedPlacement)> + '_ {
        self.entries.iter().map(|(&id, &placement)| (id, placement))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget every placement. The next layout pass re-rolls the cloud.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement(x: f64) -> CachedPlacement {
        CachedPlacement { x, y: 10.0, size: 80.0, rotation: 0.0, cell: 0 }
    }

    #[test]
    fn get_returns_what_was_inserted() {
        let mut cache = PositionCache::new();
        assert!(cache.get(1).is_none());
        cache.insert(1, placement(25.0));
        assert_eq!(cache.get(1).unwrap().x, 25.0);
        assert!(cache.contains(1));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    #[should_panic(expected = "assigned twice")]
    fn double_insert_is_a_contract_bug() {
        let mut cache = PositionCache::new();
        cache.insert(1, placement(25.0));
        cache.insert(1, placement(75.0));
    }

    #[test]
    fn placements_iterates_all_entries() {
        let mut cache = PositionCache::new();
        cache.insert(1, placement(25.0));
        cache.insert(2, placement(50.0));
        let mut ids: Vec<i64> = cache.placements().map(|(id, _)| id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn clear_forgets_everything() {
        let mut cache = PositionCache::new();
        cache.insert(1, placement(25.0));
        cache.insert(2, placement(50.0));
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get(1).is_none());
    }
}
