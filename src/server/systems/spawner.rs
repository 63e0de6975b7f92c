use bevy::prelude::*;
use qrz::Qrz;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::common::{
    components::{Loc, New, interactable::InteractableId},
    plugins::hex_index::Occupant,
};

/// Shape of the randomly scattered field of interactables.
#[derive(Clone, Debug, Resource)]
pub struct FieldSettings {
    /// Objects are placed within this flat distance of the origin
    pub radius: u8,
    /// Objects placed per fixed tick
    pub per_tick: usize,
    /// Chance that a placed object is a bush (0.0 - 1.0)
    pub bush_ratio: f64,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            radius: 20,
            per_tick: 12,
            bush_ratio: 0.6,
        }
    }
}

/// Seeded generator so a field can be replayed.
#[derive(Deref, DerefMut, Resource)]
pub struct FieldRng(StdRng);

impl FieldRng {
    pub fn seeded(seed: u64) -> Self {
        FieldRng(StdRng::seed_from_u64(seed))
    }
}

/// System that places `per_tick` random interactables, each offered to grouping once via [`New`].
pub fn scatter_interactables(
    mut commands: Commands,
    settings: Res<FieldSettings>,
    mut rng: ResMut<FieldRng>,
) {
    let bush_ratio = settings.bush_ratio.clamp(0., 1.);
    for _ in 0..settings.per_tick {
        let qrz = random_hex_within_radius(&mut **rng, Qrz::ZERO, settings.radius);
        let kind = if rng.random_bool(bush_ratio) {
            InteractableId::Bush
        } else {
            // ALL[0] is Bush
            InteractableId::ALL[rng.random_range(1..InteractableId::ALL.len())]
        };
        commands.spawn((Loc::new(qrz), kind, Occupant::default(), New));
    }
}

pub fn random_hex_within_radius(rng: &mut impl Rng, center: Qrz, radius: u8) -> Qrz {
    if radius == 0 {
        return center;
    }

    let radius = radius as i16;

    loop {
        let q_offset = rng.random_range(-radius..=radius);
        let r_offset = rng.random_range(-radius..=radius);

        // Flat distance = max(|q|, |r|, |q+r|)
        let dist = q_offset.abs().max(r_offset.abs()).max((q_offset + r_offset).abs());
        if dist <= radius {
            return Qrz {
                q: center.q + q_offset,
                r: center.r + r_offset,
                z: center.z,
            };
        }
    }
}
