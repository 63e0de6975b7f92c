use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Shared identifier stamped on every member of a discovered bush group.
///
/// Ids are handed out by `GroupAssigner` in increasing order and never reused.
/// An entity may be restamped with a newer id when its group merges with another.
#[derive(Clone, Component, Copy, Debug, Deref, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct GroupId(pub u32);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
