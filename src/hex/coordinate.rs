use super::{Component, CoordMode, Direction, ModeFamily};
use std::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
    str::FromStr,
};

/// Cubic hex coordinates.
///
/// See [reference](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
///
/// Constraint: `x + y + z == 0`
///
/// Only `x` and `y` are stored; `z` is always derived from them, so no
/// `HexCoord` can violate the constraint. Equality, ordering, and hashing
/// consider `(x, y)` alone.
///
/// A `HexCoord` can name a cell or a displacement between cells. Integer
/// components identify cells; float components are handy for scaling and
/// interpolation, after which [`HexCoord::round`] snaps back to a cell.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexCoord<T = i32> {
    x: T,
    y: T,
}

impl<T> HexCoord<T> {
    /// Construct a coordinate from `x` and `y`; `z` is derived.
    pub const fn new(x: T, y: T) -> Self {
        HexCoord { x, y }
    }
}

impl<T: Component> HexCoord<T> {
    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Construct a coordinate from all three cubic components.
    ///
    /// Fails unless `x + y + z == 0`. `z` is only checked, never stored.
    pub fn try_new(x: T, y: T, z: T) -> Result<Self, Error> {
        if (x + y + z).is_zero() {
            Ok(Self::new(x, y))
        } else {
            log::debug!("rejected cubic coordinate ({}, {}, {})", x, y, z);
            Err(Error::InvalidCoordinate(format!("({}, {}, {})", x, y, z)))
        }
    }

    /// Construct a coordinate from an offset `(col, row)` pair.
    ///
    /// Only accepts modes in [`ModeFamily::Offset`].
    pub fn from_offset(mode: CoordMode, col: T, row: T) -> Result<Self, Error> {
        use CoordMode::*;

        match mode {
            OddRow => Ok(Self::new(col + (row - row.parity()).halve(), row)),
            EvenRow => Ok(Self::new(col + (row + row.parity()).halve(), row)),
            OddCol => Ok(Self::new(col, row + (col - col.parity()).halve())),
            EvenCol => Ok(Self::new(col, row + (col + col.parity()).halve())),
            DoubleRow | DoubleCol => Err(mode.family_error(ModeFamily::Offset)),
        }
    }

    /// Construct a coordinate from a doubled `(col, row)` pair.
    ///
    /// Only accepts modes in [`ModeFamily::Double`].
    ///
    /// In `DoubleRow`, `col` and `row` must share a parity; in `DoubleCol` likewise.
    /// Other pairs name no cell; with integer components they are floored onto one.
    pub fn from_double(mode: CoordMode, col: T, row: T) -> Result<Self, Error> {
        use CoordMode::*;

        match mode {
            DoubleRow => Ok(Self::new(col, (row - col).halve())),
            DoubleCol => Ok(Self::new((col - row).halve(), row)),
            OddRow | EvenRow | OddCol | EvenCol => Err(mode.family_error(ModeFamily::Double)),
        }
    }

    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    #[inline]
    pub fn y(&self) -> T {
        self.y
    }

    #[inline]
    pub fn z(&self) -> T {
        -self.x - self.y
    }

    pub fn as_cubic(&self) -> (T, T, T) {
        (self.x, self.y, self.z())
    }

    /// `[x, y, z]`, for numeric code that wants a plain vector.
    pub fn as_vector(&self) -> [T; 3] {
        [self.x, self.y, self.z()]
    }

    /// Convert to an offset `(col, row)` pair.
    ///
    /// Exact inverse of [`HexCoord::from_offset`] for the same `mode`.
    pub fn as_offset(&self, mode: CoordMode) -> Result<(T, T), Error> {
        use CoordMode::*;

        let HexCoord { x, y } = *self;
        match mode {
            OddRow => Ok((x - (y - y.parity()).halve(), y)),
            EvenRow => Ok((x - (y + y.parity()).halve(), y)),
            OddCol => Ok((x, y - (x - x.parity()).halve())),
            EvenCol => Ok((x, y - (x + x.parity()).halve())),
            DoubleRow | DoubleCol => Err(mode.family_error(ModeFamily::Offset)),
        }
    }

    /// Convert to a doubled `(col, row)` pair.
    ///
    /// Exact inverse of [`HexCoord::from_double`] for the same `mode`.
    pub fn as_double(&self, mode: CoordMode) -> Result<(T, T), Error> {
        use CoordMode::*;

        let HexCoord { x, y } = *self;
        match mode {
            DoubleRow => Ok((x, T::two() * y + x)),
            DoubleCol => Ok((T::two() * x + y, y)),
            OddRow | EvenRow | OddCol | EvenCol => Err(mode.family_error(ModeFamily::Double)),
        }
    }

    /// Convert each component to another numeric type.
    ///
    /// Float to integer conversion truncates; [`round`][HexCoord::round] first to
    /// get the containing cell. Fails if a component is out of range for `U` or is `NaN`.
    pub fn cast<U: Component>(self) -> Result<HexCoord<U>, Error> {
        let convert = |value: T| {
            num::cast::<T, U>(value).ok_or_else(|| Error::TypeMismatch {
                value: value.to_string(),
                target: std::any::type_name::<U>(),
            })
        };
        Ok(HexCoord::new(convert(self.x)?, convert(self.y)?))
    }

    /// Iterate over `x`, `y`, `z` in that order.
    pub fn iter(&self) -> std::array::IntoIter<T, 3> {
        self.as_vector().into_iter()
    }

    /// `true` when `x` and `y` are both nonzero.
    ///
    /// This is not an origin test: `(3, 0)` and `(0, 0)` both yield `false`.
    pub fn both_axes_nonzero(&self) -> bool {
        !self.x.is_zero() && !self.y.is_zero()
    }

    /// The cell this coordinate lies in.
    ///
    /// Each axis rounds independently (exact halves to even), then the axis which moved
    /// furthest is recomputed from the other two so the result stays on the grid.
    /// Ties prefer keeping `x`: it is only recomputed when its error is strictly the largest;
    /// otherwise `y` is recomputed if its error exceeds `z`'s.
    pub fn round(self) -> Self {
        let z = self.z();
        let (rx, ry, rz) = (
            self.x.round_half_even(),
            self.y.round_half_even(),
            z.round_half_even(),
        );
        let (dx, dy, dz) = ((rx - self.x).abs(), (ry - self.y).abs(), (rz - z).abs());

        if dx > dy && dx > dz {
            Self::new(-ry - rz, ry)
        } else if dy > dz {
            Self::new(rx, -rx - rz)
        } else {
            Self::new(rx, ry)
        }
    }

    /// Number of single-cell steps between `self` and `other`.
    pub fn distance_to(self, other: HexCoord<T>) -> T {
        (self - other)
            .iter()
            .map(|component| component.abs())
            .fold(T::zero(), |max, component| {
                if component > max {
                    component
                } else {
                    max
                }
            })
    }

    pub fn distance_from_origin(self) -> T {
        self.distance_to(Self::origin())
    }

    /// The six cells adjacent to the cell this coordinate lies in.
    ///
    /// Neighbors are listed in the cyclic order of [`Direction::ALL`].
    pub fn neighbors(self) -> [HexCoord<T>; 6] {
        let cell = self.round();
        Direction::ALL.map(|direction| cell + direction)
    }

    /// Rotate this vector by 60° in the order of [`Direction::ALL`].
    ///
    /// Whether that is clockwise depends on how the grid is drawn.
    pub fn rotate_next(self) -> Self {
        Self::new(self.x + self.y, -self.x)
    }

    /// Rotate this vector by 60° against the order of [`Direction::ALL`].
    ///
    /// Inverse of [`HexCoord::rotate_next`].
    pub fn rotate_back(self) -> Self {
        Self::new(-self.y, self.x + self.y)
    }
}

impl<T: Component> fmt::Display for HexCoord<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z())
    }
}

impl<T: fmt::Debug> fmt::Debug for HexCoord<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HexCoord")
            .field(&self.x)
            .field(&self.y)
            .finish()
    }
}

impl<T: Component> IntoIterator for HexCoord<T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Component> Add for HexCoord<T> {
    type Output = HexCoord<T>;

    fn add(self, rhs: HexCoord<T>) -> Self::Output {
        HexCoord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Component> Sub for HexCoord<T> {
    type Output = HexCoord<T>;

    fn sub(self, rhs: HexCoord<T>) -> Self::Output {
        HexCoord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Component> Neg for HexCoord<T> {
    type Output = HexCoord<T>;

    fn neg(self) -> Self::Output {
        HexCoord::new(-self.x, -self.y)
    }
}

impl<T: Component> Add<Direction> for HexCoord<T> {
    type Output = HexCoord<T>;

    fn add(self, rhs: Direction) -> Self::Output {
        self + rhs.vector::<T>()
    }
}

impl<T: Component> Mul<T> for HexCoord<T> {
    type Output = HexCoord<T>;

    fn mul(self, scale: T) -> Self::Output {
        HexCoord::new(self.x * scale, self.y * scale)
    }
}

// `scale * coord` can't be written generically over `T`, so spell out each component type.
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<HexCoord<$t>> for $t {
                type Output = HexCoord<$t>;

                fn mul(self, coord: HexCoord<$t>) -> Self::Output {
                    coord * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(i8, i16, i32, i64, i128, isize, f32, f64);

/// Parses `"(x, y)"` or `"(x, y, z)"`.
///
/// Whitespace around each component is ignored. When `z` is present it must
/// satisfy the cubic constraint.
impl<T> FromStr for HexCoord<T>
where
    T: Component + FromStr,
    <T as FromStr>::Err: fmt::Display,
{
    type Err = ParseHexCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseHexCoordError::Malformed(s.to_owned());

        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|inner| inner.strip_suffix(')'))
            .ok_or_else(malformed)?;

        let components = inner
            .split(',')
            .map(str::trim)
            .map(|component| {
                component
                    .parse::<T>()
                    .map_err(|err| ParseHexCoordError::Component {
                        component: component.to_owned(),
                        reason: err.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        match components.as_slice() {
            [x, y] => Ok(HexCoord::new(*x, *y)),
            [x, y, z] => HexCoord::try_new(*x, *y, *z).map_err(Into::into),
            _ => Err(malformed()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid cubic coordinate {0}: components must sum to zero")]
    InvalidCoordinate(String),
    #[error("coordinate mode {mode} is not in the {expected} family")]
    InvalidMode {
        mode: CoordMode,
        expected: ModeFamily,
    },
    #[error("{value} cannot be represented as {target}")]
    TypeMismatch { value: String, target: &'static str },
}

/// Parsing failed for a textual hex coordinate
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseHexCoordError {
    #[error("expected \"(x, y)\" or \"(x, y, z)\", got {0:?}")]
    Malformed(String),
    #[error("bad component {component:?}: {reason}")]
    Component { component: String, reason: String },
    #[error(transparent)]
    Invalid(#[from] Error),
}
