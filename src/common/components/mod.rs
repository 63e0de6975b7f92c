pub mod group;
pub mod interactable;

use bevy::prelude::*;
use qrz::Qrz;
use serde::{Deserialize, Serialize};

#[derive(Clone, Component, Copy, Debug, Default, Deref, DerefMut, Deserialize, Eq, PartialEq, Serialize)]
pub struct Loc(Qrz);

impl Loc {
    pub fn from_qrz(q: i16, r: i16, z: i16) -> Self {
        Loc(Qrz { q, r, z })
    }

    pub fn new(qrz: Qrz) -> Self {
        Loc(qrz)
    }
}

/// Marks an entity that has not been evaluated for grouping yet.
///
/// Cleared by the scheduler once the grouping pass has seen it.
#[derive(Clone, Component, Copy, Debug, Default)]
pub struct New;
