//! Hexagonal coordinate support.
//!
//! Uses techniques from [this reference](https://www.redblobgames.com/grids/hexagons/)
//!
//! [`HexCoord`] is the cubic coordinate value. [`CoordMode`] selects an offset or
//! doubled row/column layout for conversion, and [`Direction`] is the table of six
//! unit steps between adjacent cells.

mod component;
pub mod coordinate;
pub mod direction;
pub mod mode;

pub use component::Component;
pub use coordinate::{Error, HexCoord, ParseHexCoordError};
pub use direction::Direction;
pub use mode::{CoordMode, ModeFamily};
