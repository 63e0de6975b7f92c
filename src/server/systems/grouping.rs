use bevy::{ecs::system::SystemParam, prelude::*};
use qrz::Qrz;

use crate::{
    common::{
        components::{Loc, New, group::GroupId, interactable::InteractableId},
        resources::hex_index::HexIndex,
    },
    server::resources::grouping::*,
};

/// ECS-backed [`GroupStore`]: reads kind and location from components, stamps groups via commands.
#[derive(SystemParam)]
pub struct Interactables<'w, 's> {
    query: Query<'w, 's, (Option<&'static InteractableId>, Option<&'static Loc>)>,
    commands: Commands<'w, 's>,
}

impl GroupStore for Interactables<'_, '_> {
    fn kind(&self, ent: Entity) -> Option<InteractableId> {
        self.query.get(ent).ok().and_then(|(id, _)| id.copied())
    }

    fn loc(&self, ent: Entity) -> Option<Qrz> {
        self.query.get(ent).ok().and_then(|(_, loc)| loc.map(|&loc| *loc))
    }

    fn set_group(&mut self, ent: Entity, group: GroupId) {
        match self.commands.get_entity(ent) {
            Ok(mut entity) => { entity.try_insert(group); }
            Err(_) => warn!("cannot stamp group {} on missing entity {}", group, ent),
        }
    }
}

/// System: group every entity still carrying [`New`], in query order.
pub fn assign_groups(
    mut assigner: ResMut<GroupAssigner>,
    mut last_run: ResMut<LastRun>,
    settings: Res<GroupingSettings>,
    index: Res<HexIndex>,
    seeds: Query<Entity, With<New>>,
    mut store: Interactables,
) {
    let seeds: Vec<Entity> = seeds.iter().collect();
    if seeds.is_empty() { return; }

    let report = assigner.run_once(&seeds, &index, &mut store, &settings);
    if report.truncated() > 0 {
        debug!("{} group searches truncated at {} tiles", report.truncated(), settings.max_visits);
    }
    **last_run = report;
}

/// System: entities are offered to [`assign_groups`] once; drop the marker afterwards.
pub fn clear_new(
    mut commands: Commands,
    query: Query<Entity, With<New>>,
) {
    for ent in &query {
        commands.entity(ent).remove::<New>();
    }
}

/// System: refresh [`Groups`] whenever a stamp was added, changed, or removed.
pub fn collect_groups(
    mut groups: ResMut<Groups>,
    changed: Query<(), Changed<GroupId>>,
    mut removed: RemovedComponents<GroupId>,
    stamped: Query<(Entity, &GroupId)>,
) {
    let removed_any = removed.read().count() > 0;
    if changed.is_empty() && !removed_any { return; }

    groups.rebuild(stamped.iter().map(|(ent, &id)| (ent, id)));
}
