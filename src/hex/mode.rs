use super::Error;

/// Row/column layout convention for translating to and from cubic coordinates.
///
/// The offset layouts shift every other row or column by half a cell; `Odd`/`Even`
/// names which parity is shifted. The doubled layouts double one axis so that both
/// parities share plain integer math.
///
/// Parses from and displays as `snake_case`: `odd_row`, `even_col`, `double_row`, etc.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
)]
#[display(style = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CoordMode {
    OddRow,
    EvenRow,
    OddCol,
    EvenCol,
    DoubleRow,
    DoubleCol,
}

/// The family of conversions a [`CoordMode`] belongs to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
)]
#[display(style = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ModeFamily {
    /// Handled by [`HexCoord::from_offset`][super::HexCoord::from_offset] and
    /// [`HexCoord::as_offset`][super::HexCoord::as_offset].
    Offset,
    /// Handled by [`HexCoord::from_double`][super::HexCoord::from_double] and
    /// [`HexCoord::as_double`][super::HexCoord::as_double].
    Double,
}

impl CoordMode {
    pub const ALL: [CoordMode; 6] = [
        CoordMode::OddRow,
        CoordMode::EvenRow,
        CoordMode::OddCol,
        CoordMode::EvenCol,
        CoordMode::DoubleRow,
        CoordMode::DoubleCol,
    ];

    /// Iterate through all `CoordMode`s in declaration order.
    pub fn iter() -> impl Iterator<Item = CoordMode> {
        Self::ALL.into_iter()
    }

    pub fn family(self) -> ModeFamily {
        use CoordMode::*;

        match self {
            OddRow | EvenRow | OddCol | EvenCol => ModeFamily::Offset,
            DoubleRow | DoubleCol => ModeFamily::Double,
        }
    }

    /// The error for passing this mode where one of the `expected` family is needed.
    pub(crate) fn family_error(self, expected: ModeFamily) -> Error {
        log::debug!("{} is a {} mode, not {}", self, self.family(), expected);
        Error::InvalidMode {
            mode: self,
            expected,
        }
    }
}
