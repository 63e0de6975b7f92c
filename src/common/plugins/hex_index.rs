// common/plugins/hex_index.rs:
// HexIndexPlugin keeps the HexIndex resource in step with entity placement
// - adds a HexIndex Resource for "who stands on this tile" lookups
// - Occupant hooks index an entity when it is inserted and drop it when replaced or despawned
// - relocates indexed entities whose Loc changed during the tick

use bevy::{
    ecs::{
        lifecycle::HookContext,
        world::DeferredWorld,
    },
    prelude::*
};
use qrz::Qrz;

use crate::common::{
    components::Loc,
    resources::hex_index::HexIndex,
};

pub struct HexIndexPlugin;

impl Plugin for HexIndexPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HexIndex>()
            .add_systems(FixedPostUpdate, update);
    }
}

/// Opts an entity into the [`HexIndex`]. Holds the tile it is currently indexed under.
#[derive(Clone, Component, Copy, Debug, Default, Deref)]
#[component(on_insert = on_insert)]
#[component(on_replace = on_replace)]
pub struct Occupant(Option<Qrz>);

pub fn on_insert(mut world: DeferredWorld, context: HookContext) {
    let Some(&loc) = world.get::<Loc>(context.entity) else {
        warn!("Occupant added to {} without a Loc; indexing deferred", context.entity);
        return;
    };
    if let Some(mut occupant) = world.get_mut::<Occupant>(context.entity) {
        occupant.0 = Some(*loc);
    }
    if let Some(mut index) = world.get_resource_mut::<HexIndex>() {
        index.insert(*loc, context.entity);
    }
}

// runs before the value is overwritten or removed, so the recorded tile is still the old one
pub fn on_replace(mut world: DeferredWorld, context: HookContext) {
    let Some(&Occupant(Some(qrz))) = world.get::<Occupant>(context.entity) else { return };
    if let Some(mut index) = world.get_resource_mut::<HexIndex>() {
        index.remove(qrz, context.entity);
    }
}

pub fn update(
    mut query: Query<(Entity, &Loc, &mut Occupant), Changed<Loc>>,
    mut index: ResMut<HexIndex>,
) {
    for (ent, &loc, mut occupant) in &mut query {
        if occupant.0 == Some(*loc) { continue; }
        match occupant.0 {
            Some(from) => index.relocate(from, *loc, ent),
            None => index.insert(*loc, ent),
        }
        occupant.0 = Some(*loc);
    }
}
