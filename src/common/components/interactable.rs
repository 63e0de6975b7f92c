use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Kind of world object a player can interact with.
#[derive(Clone, Component, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum InteractableId {
    Bush,
    Tree,
    Rock,
    Chest,
}

impl InteractableId {
    pub const ALL: [InteractableId; 4] = [
        InteractableId::Bush,
        InteractableId::Tree,
        InteractableId::Rock,
        InteractableId::Chest,
    ];
}
