use bevy::prelude::*;

use crate::{
    common::resources::hex_index::HexIndex,
    server::resources::grouping::{Groups, LastRun},
};

#[derive(Resource)]
pub struct GroupTracker {
    ticks: u32,
    limit: Option<u32>,
    last_group_count: usize,
}

impl Default for GroupTracker {
    fn default() -> Self {
        Self {
            ticks: 0,
            limit: None,
            last_group_count: 0,
        }
    }
}

impl GroupTracker {
    /// Stop the app after `ticks` fixed ticks.
    pub fn with_limit(ticks: u32) -> Self {
        Self { limit: Some(ticks), ..default() }
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }
}

/// Log how the grouping evolves each fixed tick and exit once the tick limit is hit
pub fn report_groups(
    mut tracker: ResMut<GroupTracker>,
    groups: Res<Groups>,
    last_run: Res<LastRun>,
    index: Res<HexIndex>,
    mut exit: MessageWriter<AppExit>,
) {
    tracker.ticks += 1;

    // Only log when the grouping changed
    if groups.is_changed() || groups.len() != tracker.last_group_count {
        let (largest_id, largest) = groups.largest().map_or((None, 0), |(id, n)| (Some(id), n));
        info!(
            "tick {}: {} occupied tiles, {} groups (largest {:?} with {} members), last run: {} seeds, {} new groups, {} skipped as claimed, {} truncated",
            tracker.ticks,
            index.occupied().count(),
            groups.len(),
            largest_id,
            largest,
            last_run.seeds,
            last_run.groups.len(),
            last_run.claimed,
            last_run.truncated(),
        );
        tracker.last_group_count = groups.len();
    }

    if tracker.limit.is_some_and(|limit| tracker.ticks >= limit) {
        info!("tick limit {} reached, {} groups stamped", tracker.ticks, groups.len());
        exit.write(AppExit::Success);
    }
}
