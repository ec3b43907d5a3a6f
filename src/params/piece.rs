use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// One of the four mating comb pieces.
///
/// `PegEnd` and `HoleEnd` terminate a chain, `Center` couples any two
/// neighbours, and `TwoRowSolid` is the unclipped two-column blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Piece {
    PegEnd,
    Center,
    HoleEnd,
    #[default]
    TwoRowSolid,
}

impl Piece {
    /// Every variant, in chain order.
    pub const ALL: [Piece; 4] = [
        Piece::PegEnd,
        Piece::Center,
        Piece::HoleEnd,
        Piece::TwoRowSolid,
    ];

    /// Returns the canonical textual tag for this variant.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Piece::PegEnd => "peg-end",
            Piece::Center => "center",
            Piece::HoleEnd => "hole-end",
            Piece::TwoRowSolid => "two-row-solid",
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Piece {
    type Err = ConfigurationError;

    /// Parses a variant tag. Case is ignored and `_`, `-` and spaces are
    /// interchangeable, so `"Peg End"` and `"peg_end"` both yield `PegEnd`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '_' | ' ' => '-',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        Piece::ALL
            .into_iter()
            .find(|piece| piece.tag() == normalized)
            .ok_or_else(|| ConfigurationError::UnknownPiece(s.to_owned()))
    }
}

impl TryFrom<String> for Piece {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Piece> for String {
    fn from(piece: Piece) -> Self {
        piece.tag().to_owned()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_tags() {
        for piece in Piece::ALL {
            assert_eq!(piece.tag().parse::<Piece>().unwrap(), piece);
        }
    }

    #[test]
    fn parses_loose_spellings() {
        assert_eq!("Peg End".parse::<Piece>().unwrap(), Piece::PegEnd);
        assert_eq!("hole_end".parse::<Piece>().unwrap(), Piece::HoleEnd);
        assert_eq!(" CENTER ".parse::<Piece>().unwrap(), Piece::Center);
        assert_eq!("two-row_solid".parse::<Piece>().unwrap(), Piece::TwoRowSolid);
    }

    #[test]
    fn unknown_tag_is_configuration_error() {
        let err = "three-row".parse::<Piece>().unwrap_err();
        assert!(matches!(err, ConfigurationError::UnknownPiece(ref tag) if tag == "three-row"));
    }

    #[test]
    fn display_matches_tag() {
        assert_eq!(Piece::HoleEnd.to_string(), "hole-end");
    }
}
