use bevy::prelude::*;

use crate::{
    common::plugins::hex_index::HexIndexPlugin,
    server::{
        resources::grouping::*,
        systems::grouping::{assign_groups, clear_new, collect_groups},
    },
};

/// Systems that stamp bush groups on freshly placed interactables.
#[derive(Clone, Debug, Eq, Hash, PartialEq, SystemSet)]
pub struct GroupingSet;

/// Plugin that groups touching interactables of one kind
///
/// Each fixed tick:
/// - assign_groups: search from every `New` entity and stamp `GroupId`s
/// - clear_new: retire the `New` marker so entities are offered only once
/// - collect_groups: refresh the `Groups` membership view
///
/// Pulls in `HexIndexPlugin` if it was not added yet. Insert a
/// `GroupingSettings` resource to change the target kind or search budget.
pub struct GroupingPlugin;

impl Plugin for GroupingPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<HexIndexPlugin>() {
            app.add_plugins(HexIndexPlugin);
        }

        app.init_resource::<GroupingSettings>()
            .init_resource::<GroupAssigner>()
            .init_resource::<LastRun>()
            .init_resource::<Groups>()
            .add_systems(
                FixedUpdate,
                (assign_groups, clear_new, collect_groups).chain().in_set(GroupingSet),
            );
    }
}
