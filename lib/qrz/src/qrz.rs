use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Unit steps to the six flat neighbors, in ring order.
pub const DIRECTIONS: [Qrz; 6] = [
        Qrz { q: -1, r: 0, z: 0 }, // west
        Qrz { q: -1, r: 1, z: 0 }, // south-west
        Qrz { q: 0, r: 1, z: 0 }, // south-east
        Qrz { q: 1, r: 0, z: 0 }, // east
        Qrz { q: 1, r: -1, z: 0 }, // north-east
        Qrz { q: 0, r: -1, z: 0 }, // north-west
];

/// Axial hex coordinate (`q`, `r`) with an elevation layer `z`.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Qrz {
    pub q: i16,
    pub r: i16,
    pub z: i16,
}

impl Qrz {
    pub const ZERO: Qrz = Qrz { q: 0, r: 0, z: 0 };

    pub fn flat_distance(&self, other: &Qrz) -> i16 {
        (self.q - other.q).abs()
            .max((self.r - other.r).abs())
            .max((-self.q-self.r - (-other.q-other.r)).abs())
    }

    /// The hexes one step away on the same layer, in `DIRECTIONS` order.
    /// Steps that would leave the `i16` range are left out.
    pub fn neighbors(&self) -> impl Iterator<Item = Qrz> {
        let this = *self;
        DIRECTIONS.into_iter().filter_map(move |dir| this.checked_add(dir))
    }

    pub fn checked_add(self, rhs: Qrz) -> Option<Qrz> {
        Some(Qrz {
            q: self.q.checked_add(rhs.q)?,
            r: self.r.checked_add(rhs.r)?,
            z: self.z.checked_add(rhs.z)?,
        })
    }

    pub fn is_adjacent(&self, other: &Qrz) -> bool {
        self.z == other.z && self.flat_distance(other) == 1
    }
}

impl Mul<i16> for Qrz {
    type Output = Qrz;
    fn mul(self, rhs: i16) -> Self::Output {
        Qrz { q: self.q * rhs, r: self.r * rhs, z: self.z * rhs }
    }
}

impl Add<Qrz> for Qrz {
    type Output = Qrz;
    fn add(self, rhs: Qrz) -> Self::Output {
        Qrz { q: self.q + rhs.q, r: self.r + rhs.r, z: self.z + rhs.z }
    }
}

impl Sub<Qrz> for Qrz {
    type Output = Qrz;
    fn sub(self, rhs: Qrz) -> Self::Output {
        Qrz { q: self.q - rhs.q, r: self.r - rhs.r, z: self.z - rhs.z }
    }
}
