//! # Bush Grouping
//!
//! Incrementally partitions interactables of one kind (bushes by default) into
//! groups of touching tiles, stamping every member with a shared [`GroupId`].
//!
//! Each run receives the batch of freshly placed entities. A seed whose tile was
//! already swallowed by an earlier seed's group in the same run is skipped, so a
//! physical clump is searched once and receives exactly one id per run. Ids come
//! from a counter that lives as long as the [`GroupAssigner`], so groups from
//! different runs never collide. When a new seed connects to tiles grouped in an
//! earlier run, those tiles are restamped with the new id (groups merge forward).

use bevy::platform::collections::{HashMap, HashSet};
use bevy::prelude::*;
use qrz::Qrz;

use crate::common::{
    components::{group::GroupId, interactable::InteractableId},
    region::{self, DEFAULT_MAX_VISITS},
    resources::hex_index::HexIndex,
};

/// Entity attribute access used by a grouping run.
pub trait GroupStore {
    fn kind(&self, ent: Entity) -> Option<InteractableId>;
    fn loc(&self, ent: Entity) -> Option<Qrz>;
    /// Create or overwrite the entity's group.
    fn set_group(&mut self, ent: Entity, group: GroupId);
}

#[derive(Clone, Debug, Resource)]
pub struct GroupingSettings {
    /// Kind that seeds and joins groups
    pub target: InteractableId,
    /// Maximum tiles a single group search may admit
    pub max_visits: usize,
}

impl Default for GroupingSettings {
    fn default() -> Self {
        Self {
            target: InteractableId::Bush,
            max_visits: DEFAULT_MAX_VISITS,
        }
    }
}

/// One group stamped during a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssignedGroup {
    pub id: GroupId,
    pub seed: Entity,
    /// Tiles claimed by the search
    pub hexes: usize,
    /// Entities stamped with `id`
    pub members: usize,
    /// The search hit its budget; the group may be a fragment
    pub truncated: bool,
}

/// What happened to each seed of a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub seeds: usize,
    /// Not of the target kind
    pub other_kind: usize,
    /// No Loc to search from
    pub unplaced: usize,
    /// Tile already claimed by an earlier seed this run
    pub claimed: usize,
    /// Search found nothing to stamp
    pub empty: usize,
    /// Every group id has been handed out
    pub exhausted: usize,
    pub groups: Vec<AssignedGroup>,
}

impl RunReport {
    pub fn truncated(&self) -> usize {
        self.groups.iter().filter(|g| g.truncated).count()
    }
}

/// Owns the group id counter. Must not be shared between concurrent runs.
#[derive(Debug, Resource)]
pub struct GroupAssigner {
    /// `None` once `u32::MAX` has been handed out
    next_group_id: Option<u32>,
    claimed: HashSet<Qrz>,
}

impl Default for GroupAssigner {
    fn default() -> Self {
        Self::starting_at(0)
    }
}

impl GroupAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume allocation from `next`, e.g. after restoring persisted groups.
    /// Ids are never reused; once `u32::MAX` is spent further seeds are left ungrouped.
    pub fn starting_at(next: u32) -> Self {
        Self { next_group_id: Some(next), claimed: HashSet::default() }
    }

    /// Id the next accepted seed will receive, if any remain
    pub fn next_group_id(&self) -> Option<GroupId> {
        self.next_group_id.map(GroupId)
    }

    /// Whether `qrz` was claimed by the most recent run
    pub fn is_claimed(&self, qrz: Qrz) -> bool {
        self.claimed.contains(&qrz)
    }

    /// Group the clumps reachable from `seeds`, processed in order.
    pub fn run_once<S: GroupStore>(
        &mut self,
        seeds: &[Entity],
        index: &HexIndex,
        store: &mut S,
        settings: &GroupingSettings,
    ) -> RunReport {
        self.claimed.clear();
        let target = settings.target;
        let mut report = RunReport { seeds: seeds.len(), ..default() };

        for &seed in seeds {
            if store.kind(seed) != Some(target) {
                report.other_kind += 1;
                continue;
            }
            let Some(start) = store.loc(seed) else {
                report.unplaced += 1;
                continue;
            };
            if self.claimed.contains(&start) {
                report.claimed += 1;
                continue;
            }

            let (members, truncated): (Vec<(Qrz, Option<Entity>)>, bool) = {
                let store = &*store;
                let is_member = |ent: Entity| store.kind(ent) == Some(target);
                let region = region::explore(start, settings.max_visits, |_, to| {
                    index.first_matching(to, is_member).is_some()
                });
                let members = region.iter().map(|qrz| (qrz, index.first_matching(qrz, is_member))).collect();
                (members, region.is_truncated())
            };

            // only reachable when the seed's own tile lost its occupant
            if members.iter().all(|(_, rep)| rep.is_none()) {
                report.empty += 1;
                continue;
            }

            let Some(next) = self.next_group_id else {
                warn!("group ids exhausted, {} left ungrouped", seed);
                report.exhausted += 1;
                continue;
            };
            let id = GroupId(next);
            let mut stamped = 0;
            for &(qrz, rep) in &members {
                self.claimed.insert(qrz);
                let Some(ent) = rep else { continue };
                store.set_group(ent, id);
                stamped += 1;
            }
            self.next_group_id = next.checked_add(1);

            if truncated {
                debug!("group {} from {:?} hit its budget of {} tiles", id, start, settings.max_visits);
            }
            debug!("group {} seeded by {} spans {} tiles", id, seed, members.len());
            report.groups.push(AssignedGroup {
                id,
                seed,
                hexes: members.len(),
                members: stamped,
                truncated,
            });
        }

        report
    }
}

/// Stats from the most recent grouping run that had seeds.
#[derive(Debug, Default, Deref, DerefMut, Resource)]
pub struct LastRun(pub RunReport);

/// Current membership of every group, rebuilt when group stamps change.
#[derive(Debug, Default, Resource)]
pub struct Groups {
    members: HashMap<GroupId, Vec<Entity>>,
}

impl Groups {
    pub fn rebuild(&mut self, stamped: impl IntoIterator<Item = (Entity, GroupId)>) {
        self.members.clear();
        for (ent, id) in stamped {
            self.members.entry(id).or_default().push(ent);
        }
        for members in self.members.values_mut() {
            members.sort_by_key(|ent| ent.index_u32());
        }
    }

    pub fn members(&self, id: GroupId) -> &[Entity] {
        self.members.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of groups that still have members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Largest group by member count; ties go to the newest id.
    pub fn largest(&self) -> Option<(GroupId, usize)> {
        self.members.iter()
            .map(|(&id, members)| (id, members.len()))
            .max_by_key(|&(id, len)| (len, id))
    }
}
