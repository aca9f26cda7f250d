//! Directions between neighboring hexes.

use crate::{error::HexError, hex::Hex};
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Unit vectors from a hex to each of its 6 edge-adjacent neighbors, indexed
/// by [NeighborDirection::index]
pub const HEX_DIRECTIONS: [Hex; 6] = [
    Hex::new_xy(0, 1),
    Hex::new_xy(1, 0),
    Hex::new_xy(1, -1),
    Hex::new_xy(0, -1),
    Hex::new_xy(-1, 0),
    Hex::new_xy(-1, 1),
];

/// Offsets from a hex to each of its 6 corner-adjacent (diagonal) neighbors,
/// indexed by [DiagonalDirection::index]
pub const HEX_DIAGONALS: [Hex; 6] = [
    Hex::new_xy(-1, 2),
    Hex::new_xy(1, 1),
    Hex::new_xy(2, -1),
    Hex::new_xy(1, -2),
    Hex::new_xy(-1, -1),
    Hex::new_xy(-2, 1),
];

/// A class of directions in a hex grid. There are two classes, which are
/// used independently of each other: [NeighborDirection] (through a side)
/// and [DiagonalDirection] (through a corner). Each class has exactly 6
/// directions, and every direction's opposite is in the same class.
pub trait HexDirection: 'static + Copy + Eq + Sized {
    /// Every direction in this class, in table order
    const ALL: &'static [Self];

    /// Position of this direction within [Self::ALL]
    fn index(self) -> usize;

    /// Get the offset that moves a hex one step in this direction
    fn to_vector(self) -> Hex;

    /// Look up a direction by its table index. Returns an error for anything
    /// outside `[0, 6)`.
    fn from_index(index: usize) -> Result<Self, HexError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(HexError::DirectionIndex { index })
    }

    /// Get the direction pointing directly away from this one
    fn opposite(self) -> Self {
        let all = Self::ALL;
        all[(self.index() + all.len() / 2) % all.len()]
    }
}

/// The 6 directions in which hexes line up side-to-side
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum NeighborDirection {
    /// Northwest
    NW,
    /// Northeast
    NE,
    /// East
    E,
    /// Southeast
    SE,
    /// Southwest
    SW,
    /// West
    W,
}

impl HexDirection for NeighborDirection {
    const ALL: &'static [Self] =
        &[Self::NW, Self::NE, Self::E, Self::SE, Self::SW, Self::W];

    fn index(self) -> usize {
        self as usize
    }

    fn to_vector(self) -> Hex {
        HEX_DIRECTIONS[self.index()]
    }
}

/// The 6 directions in which hexes line up corner-to-corner. A diagonal
/// neighbor is two steps away, but doesn't share a side with the origin hex.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DiagonalDirection {
    /// Northwest
    NW,
    /// North
    N,
    /// Northeast
    NE,
    /// Southeast
    SE,
    /// South
    S,
    /// Southwest
    SW,
}

impl HexDirection for DiagonalDirection {
    const ALL: &'static [Self] =
        &[Self::NW, Self::N, Self::NE, Self::SE, Self::S, Self::SW];

    fn index(self) -> usize {
        self as usize
    }

    fn to_vector(self) -> Hex {
        HEX_DIAGONALS[self.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_tables() {
        for (i, dir) in NeighborDirection::iter().enumerate() {
            let v = dir.to_vector();
            assert_eq!(dir.index(), i);
            assert_eq!(v.magnitude(), 1, "{:?} isn't a unit step", dir);
            assert_eq!(v.x() + v.y() + v.z(), 0);
        }
        for (i, dir) in DiagonalDirection::iter().enumerate() {
            let v = dir.to_vector();
            assert_eq!(dir.index(), i);
            assert_eq!(v.magnitude(), 2, "{:?} isn't two steps", dir);
            assert_eq!(v.x() + v.y() + v.z(), 0);
        }

        assert_eq!(HEX_DIRECTIONS[0], Hex::new(0, 1, -1).unwrap());
        assert_eq!(HEX_DIRECTIONS[3], Hex::new(0, -1, 1).unwrap());
        assert_eq!(HEX_DIAGONALS[1], Hex::new(1, 1, -2).unwrap());
        assert_eq!(HEX_DIAGONALS[5], Hex::new(-2, 1, 1).unwrap());
    }

    #[test]
    fn test_from_index() {
        assert_eq!(NeighborDirection::from_index(2), Ok(NeighborDirection::E));
        assert_eq!(DiagonalDirection::from_index(4), Ok(DiagonalDirection::S));
        assert_eq!(
            NeighborDirection::from_index(6),
            Err(HexError::DirectionIndex { index: 6 })
        );
    }

    #[test]
    fn test_opposite() {
        assert_eq!(NeighborDirection::NW.opposite(), NeighborDirection::SE);
        assert_eq!(NeighborDirection::E.opposite(), NeighborDirection::W);
        assert_eq!(DiagonalDirection::N.opposite(), DiagonalDirection::S);
        for dir in NeighborDirection::iter() {
            let sum = dir.to_vector() + dir.opposite().to_vector();
            assert_eq!(sum, Hex::ORIGIN, "{:?}", dir);
        }
        for dir in DiagonalDirection::iter() {
            let sum = dir.to_vector() + dir.opposite().to_vector();
            assert_eq!(sum, Hex::ORIGIN, "{:?}", dir);
        }
    }

    #[test]
    fn test_neighbor() {
        let h = Hex::new(1, -2, 1).unwrap();
        assert_eq!(
            h.neighbor(NeighborDirection::E),
            Hex::new(2, -3, 1).unwrap()
        );
        assert_eq!(
            h.neighbor(NeighborDirection::NW),
            Hex::new(1, -1, 0).unwrap()
        );

        let neighbors: HashSet<Hex> = h.neighbors().collect();
        assert_eq!(neighbors.len(), 6);
        assert!(neighbors.iter().all(|n| n.distance(h) == 1));
    }

    #[test]
    fn test_diagonal() {
        let h = Hex::new(1, -2, 1).unwrap();
        assert_eq!(
            h.diagonal(DiagonalDirection::SE),
            Hex::new(2, -4, 2).unwrap()
        );
        for dir in DiagonalDirection::iter() {
            let diagonal = h.diagonal(dir);
            assert_eq!(diagonal.distance(h), 2);
            // Diagonals are never edge-adjacent to the hex itself
            assert!(h.neighbors().all(|n| n != diagonal));
        }
    }
}
