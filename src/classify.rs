//! Case classification for a pair waiting in the working layer.
//!
//! The decision tree has three groups:
//! - the corner's cross sticker faces the working face (cases 1-4);
//! - the edge's side colour equals the corner's other colour (cases 5-7);
//! - the two colours differ (cases 8-10).

use std::fmt;

use crate::error::F2lError;
use crate::geometry::{Direction, Face};
use crate::pair::{is_pair_matched, is_pair_separated, PairView};

/// The ten recognised configurations of a pair in the working layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Case {
    /// Cross sticker down, pieces joined on a side face with equal colours.
    CrossDownMatched,
    /// Cross sticker down, pieces joined on a side face with different colours.
    CrossDownMismatched,
    /// Cross sticker down, pieces apart, corner's right-hand colour equals the edge's side colour.
    CrossDownApartAligned,
    /// Cross sticker down, pieces apart, the other way round.
    CrossDownApartMisaligned,
    /// Pieces joined on a side face, colours matching on both shared faces.
    Matched,
    /// Same colour on the sides, pieces touching but not matched.
    SameColorAdjacent,
    /// Same colour on the sides, the edge away from the corner.
    SameColorApart,
    /// Corner ready for insertion, edge flipped on the opposite side.
    Separated,
    /// Different colours on the sides, pieces touching.
    SplitAdjacent,
    /// Different colours on the sides, the edge away from the corner.
    SplitApart,
}

impl Case {
    pub const COUNT: usize = 10;

    pub const ALL: [Case; Case::COUNT] = [
        Case::CrossDownMatched,
        Case::CrossDownMismatched,
        Case::CrossDownApartAligned,
        Case::CrossDownApartMisaligned,
        Case::Matched,
        Case::SameColorAdjacent,
        Case::SameColorApart,
        Case::Separated,
        Case::SplitAdjacent,
        Case::SplitApart,
    ];

    /// Conventional case number, 1 through 10.
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_number(number: u8) -> Option<Case> {
        Case::ALL.get(usize::from(number).checked_sub(1)?).copied()
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "case {}", self.number())
    }
}

/// Classifies the pair seen by `view`.
///
/// Pure: reads the cube and nothing else. Both pieces must be in the
/// working layer.
pub fn classify(view: &PairView<'_>) -> Result<Case, F2lError> {
    if !view.in_working_layer() {
        return Err(F2lError::PairNotInWorkingLayer {
            slot: view.pair().slot,
        });
    }

    let case = if view.cross_on_working_face()? {
        classify_cross_down(view)?
    } else if view.edge_primary()? == view.corner_other()? {
        classify_same_color(view)?
    } else {
        classify_split(view)?
    };

    tracing::debug!(slot = %view.pair().slot, case = case.number(), "classified pair");
    Ok(case)
}

fn classify_cross_down(view: &PairView<'_>) -> Result<Case, F2lError> {
    let corner = view.corner();
    if let Some(shared) = view.shared_side_face() {
        return Ok(if corner.color_on(shared) == view.edge().color_on(shared) {
            Case::CrossDownMatched
        } else {
            Case::CrossDownMismatched
        });
    }

    let frame = view.frame();
    let working = frame.working_face();
    let mut sides = corner.faces().filter(|&face| face != working);
    let (Some(a), Some(b)) = (sides.next(), sides.next()) else {
        return Err(F2lError::MissingFace { face: working });
    };
    let right: Face = if frame.direction_between(a, b) == Some(Direction::Right) {
        b
    } else {
        a
    };

    Ok(if corner.color_on(right) == Some(view.edge_primary()?) {
        Case::CrossDownApartAligned
    } else {
        Case::CrossDownApartMisaligned
    })
}

fn classify_same_color(view: &PairView<'_>) -> Result<Case, F2lError> {
    if is_pair_matched(view)? {
        return Ok(Case::Matched);
    }
    Ok(if edge_touches_corner(view)? {
        Case::SameColorAdjacent
    } else {
        Case::SameColorApart
    })
}

fn classify_split(view: &PairView<'_>) -> Result<Case, F2lError> {
    if is_pair_separated(view)? {
        return Ok(Case::Separated);
    }
    Ok(if edge_touches_corner(view)? {
        Case::SplitAdjacent
    } else {
        Case::SplitApart
    })
}

/// True if the corner occupies the face the edge's side colour is on.
fn edge_touches_corner(view: &PairView<'_>) -> Result<bool, F2lError> {
    let side = view.edge_face(view.edge_primary()?)?;
    Ok(view.corner().occupies(side))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::Cube;
    use crate::geometry::Frame;
    use crate::moves::Algorithm;
    use crate::pair::{Pair, Slot};

    fn classify_setup(setup: &str, slot: Slot) -> Result<Case, F2lError> {
        let mut cube = Cube::solved();
        cube.apply(&setup.parse::<Algorithm>().unwrap());
        let pair = Pair::for_slot(&cube, slot).unwrap();
        classify(&PairView::new(&cube, pair, Frame::STANDARD))
    }

    #[test]
    fn test_case_numbers_round_trip() {
        for (i, case) in Case::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(case.number()), i + 1);
            assert_eq!(Case::from_number(case.number()), Some(case));
        }
        assert_eq!(Case::from_number(0), None);
        assert_eq!(Case::from_number(11), None);
        assert_eq!(Case::SplitApart.to_string(), "case 10");
    }

    #[test]
    fn test_representative_setups() {
        let expected = [
            ("F D' F' R' D2 R F D' F'", Case::CrossDownMatched),
            ("F D' F' D F D2 F'", Case::CrossDownMismatched),
            ("F D' F' R' D R", Case::CrossDownApartAligned),
            ("R' D R F D' F'", Case::CrossDownApartMisaligned),
            ("F D F'", Case::Matched),
            ("F D' F' D2 R' D' R", Case::SameColorAdjacent),
            ("F D F' D2 F D2 F'", Case::SameColorApart),
            ("F D' F'", Case::Separated),
            ("F D' F' D R' D2 R", Case::SplitAdjacent),
            ("F D' F' D F D F'", Case::SplitApart),
        ];
        for (setup, case) in expected {
            assert_eq!(
                classify_setup(setup, Slot::FRONT_RIGHT).unwrap(),
                case,
                "Setup {setup:?} should be {case}"
            );
        }
    }

    #[test]
    fn test_pair_outside_working_layer_is_rejected() {
        let result = classify_setup("", Slot::FRONT_RIGHT);
        assert!(matches!(result, Err(F2lError::PairNotInWorkingLayer { .. })));
        // corner dropped to the working layer, edge lifted to the top
        let result = classify_setup("R U R'", Slot::FRONT_RIGHT);
        assert!(matches!(result, Err(F2lError::PairNotInWorkingLayer { .. })));
    }
}
