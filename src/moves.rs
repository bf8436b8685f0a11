//! Move notation: single face turns and ordered move sequences.
//!
//! Moves are structured tokens rather than strings, so sequences compose and
//! invert without any text manipulation.

use std::fmt;
use std::str::FromStr;

use crate::error::F2lError;
use crate::geometry::Face;

/// Amount of a face turn, clockwise as seen looking at the face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    Clockwise,
    Half,
    CounterClockwise,
}

impl Turn {
    /// Number of clockwise quarter turns (1, 2 or 3).
    pub const fn quarters(self) -> u8 {
        match self {
            Turn::Clockwise => 1,
            Turn::Half => 2,
            Turn::CounterClockwise => 3,
        }
    }

    /// Normalizes a quarter-turn count; `None` for a whole number of rotations.
    pub const fn from_quarters(quarters: u8) -> Option<Turn> {
        match quarters % 4 {
            1 => Some(Turn::Clockwise),
            2 => Some(Turn::Half),
            3 => Some(Turn::CounterClockwise),
            _ => None,
        }
    }

    pub const fn inverse(self) -> Turn {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::Half => Turn::Half,
            Turn::CounterClockwise => Turn::Clockwise,
        }
    }
}

/// A turn of a single outer layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub turn: Turn,
}

impl Move {
    pub const fn new(face: Face, turn: Turn) -> Self {
        Self { face, turn }
    }

    pub const fn inverse(self) -> Move {
        Move::new(self.face, self.turn.inverse())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.turn {
            Turn::Clockwise => "",
            Turn::Half => "2",
            Turn::CounterClockwise => "'",
        };
        write!(f, "{}{}", self.face, suffix)
    }
}

impl FromStr for Move {
    type Err = F2lError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || F2lError::ParseMove(token.to_string());
        let mut chars = token.chars();
        let face = chars.next().and_then(Face::from_letter).ok_or_else(invalid)?;
        let turn = match chars.as_str() {
            "" => Turn::Clockwise,
            "'" => Turn::CounterClockwise,
            // a half turn is its own inverse, so the prime is accepted and ignored
            "2" | "2'" => Turn::Half,
            _ => return Err(invalid()),
        };
        Ok(Move::new(face, turn))
    }
}

/// An ordered sequence of moves.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Algorithm(Vec<Move>);

impl Algorithm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn moves(&self) -> &[Move] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.0.iter()
    }

    pub fn push(&mut self, mv: Move) {
        self.0.push(mv);
    }

    pub fn extend_from(&mut self, other: &Algorithm) {
        self.0.extend_from_slice(&other.0);
    }

    /// The inverse sequence: reversed order, each move inverted.
    pub fn reversed(&self) -> Algorithm {
        self.0.iter().rev().map(|mv| mv.inverse()).collect()
    }
}

impl From<Vec<Move>> for Algorithm {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

impl FromIterator<Move> for Algorithm {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Algorithm {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mv) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}

impl FromStr for Algorithm {
    type Err = F2lError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        text.split_whitespace().map(str::parse::<Move>).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_move() -> impl Strategy<Value = Move> {
        (0..6usize, 1..4u8).prop_map(|(face, quarters)| {
            let turn = Turn::from_quarters(quarters).unwrap();
            Move::new(Face::ALL[face], turn)
        })
    }

    #[test]
    fn test_parse_standard_notation() {
        let alg: Algorithm = "R U R' U2 D2' F".parse().unwrap();
        assert_eq!(alg.len(), 6);
        assert_eq!(alg.moves()[2], Move::new(Face::Right, Turn::CounterClockwise));
        assert_eq!(alg.moves()[4], Move::new(Face::Down, Turn::Half));
        assert_eq!(alg.to_string(), "R U R' U2 D2 F");
    }

    #[test]
    fn test_parse_rejects_unknown_tokens() {
        for text in ["X", "R3", "r", "R''", "RU"] {
            let result = text.parse::<Algorithm>();
            assert!(
                matches!(result, Err(F2lError::ParseMove(_))),
                "{text:?} should not parse"
            );
        }
    }

    #[test]
    fn test_empty_text_is_empty_algorithm() {
        let alg: Algorithm = "   ".parse().unwrap();
        assert!(alg.is_empty());
        assert_eq!(alg.to_string(), "");
    }

    #[test]
    fn test_reversed_inverts_each_move() {
        let alg: Algorithm = "F D' F' D2".parse().unwrap();
        assert_eq!(alg.reversed().to_string(), "D2 F D F'");
    }

    #[test]
    fn test_turn_quarters_round_trip() {
        for turn in [Turn::Clockwise, Turn::Half, Turn::CounterClockwise] {
            assert_eq!(Turn::from_quarters(turn.quarters()), Some(turn));
            assert_eq!((turn.quarters() + turn.inverse().quarters()) % 4, 0);
        }
        assert_eq!(Turn::from_quarters(0), None);
        assert_eq!(Turn::from_quarters(4), None);
    }

    proptest! {
        #[test]
        fn reversed_is_an_involution(moves in proptest::collection::vec(any_move(), 0..24)) {
            let alg = Algorithm::from(moves);
            prop_assert_eq!(alg.reversed().reversed(), alg);
        }

        #[test]
        fn display_reparses(moves in proptest::collection::vec(any_move(), 0..24)) {
            let alg = Algorithm::from(moves);
            let reparsed: Algorithm = alg.to_string().parse().unwrap();
            prop_assert_eq!(reparsed, alg);
        }
    }
}
