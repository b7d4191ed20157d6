pub mod hex;

pub use hex::{CoordMode, Direction, Error, HexCoord};
