//! # Region Search
//!
//! Bounded breadth-first flood fill over the hex grid.
//!
//! Connectivity is whatever the caller's `accept(from, to)` predicate says it
//! is; the grouping pass uses "the neighbor tile holds a matching entity".
//! The visit budget caps the cost of a single search on dense fields.

use std::collections::VecDeque;

use bevy::platform::collections::HashSet;
use qrz::Qrz;

/// Default cap on tiles admitted by one search.
pub const DEFAULT_MAX_VISITS: usize = 100;

/// Tiles reached by one [`explore`] call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Region {
    hexes: Vec<Qrz>,
    truncated: bool,
}

impl Region {
    /// Admitted tiles in breadth-first order. Only the layering is meaningful.
    pub fn hexes(&self) -> &[Qrz] {
        &self.hexes
    }

    pub fn iter(&self) -> impl Iterator<Item = Qrz> + '_ {
        self.hexes.iter().copied()
    }

    pub fn contains(&self, qrz: Qrz) -> bool {
        self.hexes.contains(&qrz)
    }

    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    /// True when the budget ran out while acceptable tiles were still reachable.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

/// Explore outward from `start`, admitting a neighbor `to` of an admitted tile
/// `from` whenever `accept(from, to)` holds.
///
/// `start` is always admitted. At most `max_visits` tiles are admitted (a budget
/// of zero still admits `start`). An admitted tile is never enqueued twice; a
/// rejected tile may be offered again from a different `from`.
pub fn explore(start: Qrz, max_visits: usize, mut accept: impl FnMut(Qrz, Qrz) -> bool) -> Region {
    let budget = max_visits.max(1);
    let mut hexes = vec![start];
    let mut admitted: HashSet<Qrz> = HashSet::default();
    admitted.insert(start);
    let mut frontier = VecDeque::from([start]);
    let mut truncated = false;

    'search: while let Some(from) = frontier.pop_front() {
        for to in from.neighbors() {
            if admitted.contains(&to) || !accept(from, to) { continue; }
            if hexes.len() >= budget {
                truncated = true;
                break 'search;
            }
            admitted.insert(to);
            hexes.push(to);
            frontier.push_back(to);
        }
    }

    Region { hexes, truncated }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disc(radius: i16) -> HashSet<Qrz> {
        let mut hexes: HashSet<Qrz> = HashSet::default();
        for q in -radius..=radius {
            for r in -radius..=radius {
                let qrz = Qrz { q, r, z: 0 };
                if qrz.flat_distance(&Qrz::ZERO) <= radius {
                    hexes.insert(qrz);
                }
            }
        }
        hexes
    }

    #[test]
    fn test_isolated_start_is_admitted() {
        let region = explore(Qrz::ZERO, DEFAULT_MAX_VISITS, |_, _| false);
        assert_eq!(region.hexes(), &[Qrz::ZERO]);
        assert!(!region.is_truncated());
    }

    #[test]
    fn test_start_admitted_even_if_unacceptable() {
        let blocked = Qrz { q: 4, r: 4, z: 0 };
        let region = explore(blocked, 10, |_, to| to != blocked);
        assert!(region.contains(blocked));
    }

    #[test]
    fn test_follows_connected_tiles_only() {
        let field: HashSet<Qrz> = [
            Qrz { q: 0, r: 0, z: 0 },
            Qrz { q: 1, r: 0, z: 0 },
            Qrz { q: 2, r: 0, z: 0 },
            Qrz { q: 2, r: 1, z: 0 },
            // gap at q=3
            Qrz { q: 4, r: 0, z: 0 },
        ].into_iter().collect();

        let region = explore(Qrz::ZERO, DEFAULT_MAX_VISITS, |_, to| field.contains(&to));

        assert_eq!(region.len(), 4);
        assert!(!region.contains(Qrz { q: 4, r: 0, z: 0 }), "Disconnected tile must not be reached");
    }

    #[test]
    fn test_does_not_cross_layers() {
        let field: HashSet<Qrz> = [
            Qrz { q: 0, r: 0, z: 0 },
            Qrz { q: 1, r: 0, z: 1 },
        ].into_iter().collect();

        let region = explore(Qrz::ZERO, DEFAULT_MAX_VISITS, |_, to| field.contains(&to));
        assert_eq!(region.len(), 1);
    }

    #[test]
    fn test_budget_caps_admitted_tiles() {
        let field = disc(10);
        let region = explore(Qrz::ZERO, 25, |_, to| field.contains(&to));

        assert_eq!(region.len(), 25);
        assert!(region.is_truncated());
    }

    #[test]
    fn test_exact_fit_is_not_truncated() {
        let field = disc(1);
        let region = explore(Qrz::ZERO, 7, |_, to| field.contains(&to));

        assert_eq!(region.len(), 7);
        assert!(!region.is_truncated(), "Nothing was left out");
    }

    #[test]
    fn test_zero_budget_still_admits_start() {
        let field = disc(2);
        let region = explore(Qrz::ZERO, 0, |_, to| field.contains(&to));

        assert_eq!(region.hexes(), &[Qrz::ZERO]);
        assert!(region.is_truncated());
    }

    #[test]
    fn test_whole_disc_without_duplicates() {
        let field = disc(4);
        let region = explore(Qrz::ZERO, 1_000, |_, to| field.contains(&to));

        assert_eq!(region.len(), field.len());
        let unique: HashSet<Qrz> = region.iter().collect();
        assert_eq!(unique.len(), region.len(), "Tiles must not repeat");
    }

    #[test]
    fn test_breadth_first_layering() {
        let field = disc(3);
        let region = explore(Qrz::ZERO, 1_000, |_, to| field.contains(&to));

        let distances: Vec<i16> = region.iter().map(|h| h.flat_distance(&Qrz::ZERO)).collect();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]), "Layers out of order: {:?}", distances);
    }

    #[test]
    fn test_truncated_search_keeps_nearest_layers() {
        let field = disc(5);
        let region = explore(Qrz::ZERO, 7, |_, to| field.contains(&to));

        assert!(region.iter().all(|h| h.flat_distance(&Qrz::ZERO) <= 1));
    }

    #[test]
    fn test_accept_sees_edge_origin() {
        // Only eastward steps are allowed
        let east = qrz::DIRECTIONS[3];
        let region = explore(Qrz::ZERO, 5, |from, to| to - from == east);

        let expected: Vec<Qrz> = (0..5).map(|i| east * i).collect();
        assert_eq!(region.hexes(), expected.as_slice());
        assert!(region.is_truncated());
    }

    #[test]
    fn test_rejected_tile_can_be_reached_from_another_side() {
        // (1,0) is only acceptable when approached from (1,-1)
        let target = Qrz { q: 1, r: 0, z: 0 };
        let gate = Qrz { q: 1, r: -1, z: 0 };
        let field: HashSet<Qrz> = [Qrz::ZERO, gate, target].into_iter().collect();

        let region = explore(Qrz::ZERO, 10, |from, to| {
            field.contains(&to) && (to != target || from == gate)
        });

        assert!(region.contains(target));
        assert_eq!(region.len(), 3);
    }

    #[test]
    fn test_search_at_coordinate_edge_does_not_wrap() {
        let edge = Qrz { q: i16::MAX, r: 0, z: 0 };
        let far_side = Qrz { q: i16::MIN, r: 0, z: 0 };
        let field: HashSet<Qrz> = [edge, far_side, Qrz { q: i16::MAX, r: 1, z: 0 }].into_iter().collect();

        let region = explore(edge, 10, |_, to| field.contains(&to));

        assert!(!region.contains(far_side));
        assert_eq!(region.len(), 2);
        assert!(!region.is_truncated());
    }
}
