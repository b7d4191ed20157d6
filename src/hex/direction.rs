use super::{Component, HexCoord};

/// One of the six unit steps from a hex cell to an adjacent cell.
///
/// Variants are named for the cubic axes they move along: `PlusXMinusZ` has
/// vector `(1, 0, -1)`. Which compass heading that is depends on how the grid is
/// drawn; only the cyclic order of the variants is fixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    PlusXMinusZ,
    PlusXMinusY,
    PlusZMinusY,
    PlusZMinusX,
    PlusYMinusX,
    PlusYMinusZ,
}

impl Direction {
    /// The basis direction table, in cyclic order.
    ///
    /// Each entry is [`HexCoord::rotate_next`] of the one before it.
    pub const ALL: [Direction; 6] = [
        Direction::PlusXMinusZ,
        Direction::PlusXMinusY,
        Direction::PlusZMinusY,
        Direction::PlusZMinusX,
        Direction::PlusYMinusX,
        Direction::PlusYMinusZ,
    ];

    /// Iterate through all `Direction`s in table order, starting from `PlusXMinusZ`.
    pub fn iter() -> impl Iterator<Item = Direction> {
        std::iter::successors(Some(Direction::PlusXMinusZ), |direction| {
            use Direction::*;

            match direction {
                PlusXMinusZ => Some(PlusXMinusY),
                PlusXMinusY => Some(PlusZMinusY),
                PlusZMinusY => Some(PlusZMinusX),
                PlusZMinusX => Some(PlusYMinusX),
                PlusYMinusX => Some(PlusYMinusZ),
                PlusYMinusZ => None,
            }
        })
    }

    fn index(self) -> usize {
        self as usize
    }

    /// The next direction in table order, wrapping around.
    ///
    /// Matches [`HexCoord::rotate_next`] applied to [`Direction::vector`].
    pub fn next(self) -> Direction {
        Self::ALL[(self.index() + 1) % 6]
    }

    /// The previous direction in table order, wrapping around.
    ///
    /// Matches [`HexCoord::rotate_back`] applied to [`Direction::vector`].
    pub fn back(self) -> Direction {
        Self::ALL[(self.index() + 5) % 6]
    }

    pub fn reverse(self) -> Direction {
        Self::ALL[(self.index() + 3) % 6]
    }

    /// The displacement this direction represents.
    pub fn vector<T: Component>(self) -> HexCoord<T> {
        use Direction::*;

        let (one, zero) = (T::one(), T::zero());
        match self {
            PlusXMinusZ => HexCoord::new(one, zero),
            PlusXMinusY => HexCoord::new(one, -one),
            PlusZMinusY => HexCoord::new(zero, -one),
            PlusZMinusX => HexCoord::new(-one, zero),
            PlusYMinusX => HexCoord::new(-one, one),
            PlusYMinusZ => HexCoord::new(zero, one),
        }
    }
}
