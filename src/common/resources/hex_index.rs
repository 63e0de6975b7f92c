//! # Hex Index
//!
//! Occupancy lookup for the hex grid: which entities stand on a given tile.
//!
//! Entities at one tile are kept in insertion order, so "first matching"
//! queries always pick the same representative for the same placement history.
//! Placement and removal go through [`HexIndexPlugin`](crate::common::plugins::hex_index::HexIndexPlugin);
//! readers treat the index as immutable for the duration of a tick.

use bevy::platform::collections::HashMap;
use bevy::prelude::*;
use qrz::Qrz;

#[derive(Debug, Default, Resource)]
pub struct HexIndex {
    hexes: HashMap<Qrz, Vec<Entity>>,
    len: usize,
}

impl HexIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entities at `qrz`, oldest first. Empty if the tile is unoccupied.
    pub fn entities_at(&self, qrz: Qrz) -> &[Entity] {
        self.hexes.get(&qrz).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First entity at `qrz` (in insertion order) accepted by `predicate`.
    pub fn first_matching(&self, qrz: Qrz, mut predicate: impl FnMut(Entity) -> bool) -> Option<Entity> {
        self.entities_at(qrz).iter().copied().find(|&ent| predicate(ent))
    }

    pub fn contains(&self, qrz: Qrz, ent: Entity) -> bool {
        self.entities_at(qrz).contains(&ent)
    }

    /// Append `ent` to the tile at `qrz`. Re-inserting an entity already there is a no-op.
    pub fn insert(&mut self, qrz: Qrz, ent: Entity) {
        let bucket = self.hexes.entry(qrz).or_default();
        if bucket.contains(&ent) { return; }
        bucket.push(ent);
        self.len += 1;
    }

    /// Remove `ent` from `qrz`, preserving the order of the remaining occupants.
    /// Returns false if it was not there.
    pub fn remove(&mut self, qrz: Qrz, ent: Entity) -> bool {
        let Some(bucket) = self.hexes.get_mut(&qrz) else { return false };
        let Some(pos) = bucket.iter().position(|&it| it == ent) else { return false };
        bucket.remove(pos);
        if bucket.is_empty() {
            self.hexes.remove(&qrz);
        }
        self.len -= 1;
        true
    }

    /// Move `ent` from `from` to `to`; the entity becomes the newest occupant of `to`.
    pub fn relocate(&mut self, from: Qrz, to: Qrz, ent: Entity) {
        if from == to && self.contains(to, ent) { return; }
        self.remove(from, ent);
        self.insert(to, ent);
    }

    /// Total number of (tile, entity) entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Tiles with at least one occupant, in no particular order.
    pub fn occupied(&self) -> impl Iterator<Item = Qrz> + '_ {
        self.hexes.keys().copied()
    }
}
