//! Slots, pairs and the two terminal insertion primitives.
//!
//! A slot is the space between two adjacent side faces: an up-layer corner
//! position and the middle-layer edge beneath it. The pair that belongs there
//! waits in the working layer until a case handler brings it into one of two
//! terminal shapes, which the primitives here insert.

use std::fmt;
use std::str::FromStr;

use crate::cube::{Cube, Piece, PieceId};
use crate::error::F2lError;
use crate::geometry::{add, dot, turn_by, Color, Direction, Face, Frame};
use crate::moves::{Move, Turn};
use crate::session::Session;

/// Two adjacent side faces, ordered so that the second is right of the first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Slot {
    first: Face,
    second: Face,
}

impl Slot {
    pub const FRONT_RIGHT: Slot = Slot::ordered(Face::Front, Face::Right);
    pub const RIGHT_BACK: Slot = Slot::ordered(Face::Right, Face::Back);
    pub const BACK_LEFT: Slot = Slot::ordered(Face::Back, Face::Left);
    pub const LEFT_FRONT: Slot = Slot::ordered(Face::Left, Face::Front);

    pub const ALL: [Slot; 4] = [
        Slot::FRONT_RIGHT,
        Slot::RIGHT_BACK,
        Slot::BACK_LEFT,
        Slot::LEFT_FRONT,
    ];

    const fn ordered(first: Face, second: Face) -> Self {
        Self { first, second }
    }

    /// Builds the slot between two neighbouring side faces, in either order.
    pub fn new(a: Face, b: Face) -> Result<Slot, F2lError> {
        match Frame::STANDARD.direction_between(a, b) {
            Some(Direction::Right) => Ok(Slot::ordered(a, b)),
            Some(Direction::Left) => Ok(Slot::ordered(b, a)),
            None => Err(F2lError::ParseSlot(format!("{a}{b}"))),
        }
    }

    pub const fn faces(self) -> [Face; 2] {
        [self.first, self.second]
    }

    pub fn contains(self, face: Face) -> bool {
        face == self.first || face == self.second
    }

    /// The slot face that is not `face`.
    pub fn other(self, face: Face) -> Result<Face, F2lError> {
        if face == self.first {
            Ok(self.second)
        } else if face == self.second {
            Ok(self.first)
        } else {
            Err(F2lError::FaceNotInSlot { face, slot: self })
        }
    }

    pub const fn corner_colors(self) -> [Color; 3] {
        [
            Color::CROSS,
            Color::with_home(self.first),
            Color::with_home(self.second),
        ]
    }

    pub const fn edge_colors(self) -> [Color; 2] {
        [Color::with_home(self.first), Color::with_home(self.second)]
    }

    /// The quarter turn of `face` that carries this slot's edge position down
    /// into the working layer.
    pub fn opener(self, face: Face, frame: Frame) -> Result<Move, F2lError> {
        let other = self.other(face)?;
        let edge_position = add(face.normal(), other.normal());
        let working = frame.working_face().normal();
        [Turn::Clockwise, Turn::CounterClockwise]
            .into_iter()
            .map(|turn| Move::new(face, turn))
            .find(|mv| {
                dot(turn_by(face.normal(), edge_position, mv.turn.quarters()), working) == 1
            })
            .ok_or(F2lError::FaceNotInSlot { face, slot: self })
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

impl FromStr for Slot {
    type Err = F2lError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || F2lError::ParseSlot(text.to_string());
        let mut letters = text.trim().chars().map(Face::from_letter);
        match (letters.next(), letters.next(), letters.next()) {
            (Some(Some(a)), Some(Some(b)), None) => Slot::new(a, b).map_err(|_| invalid()),
            _ => Err(invalid()),
        }
    }
}

/// The corner and edge that belong in one slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pair {
    pub slot: Slot,
    pub corner: PieceId,
    pub edge: PieceId,
}

impl Pair {
    /// Locates the slot's corner and edge on `cube`.
    pub fn for_slot(cube: &Cube, slot: Slot) -> Result<Pair, F2lError> {
        Ok(Pair {
            slot,
            corner: cube.find(&slot.corner_colors())?,
            edge: cube.find(&slot.edge_colors())?,
        })
    }
}

/// Read-only geometry of a pair on a cube, seen in a frame.
///
/// Cheap to build; take a fresh view after every move instead of holding one.
#[derive(Clone, Copy)]
pub struct PairView<'a> {
    cube: &'a Cube,
    pair: Pair,
    frame: Frame,
}

impl<'a> PairView<'a> {
    pub fn new(cube: &'a Cube, pair: Pair, frame: Frame) -> Self {
        Self { cube, pair, frame }
    }

    pub fn pair(&self) -> Pair {
        self.pair
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn corner(&self) -> &'a Piece {
        self.cube.piece(self.pair.corner)
    }

    pub fn edge(&self) -> &'a Piece {
        self.cube.piece(self.pair.edge)
    }

    /// True if both pieces touch the working face.
    pub fn in_working_layer(&self) -> bool {
        let working = self.frame.working_face();
        self.corner().occupies(working) && self.edge().occupies(working)
    }

    pub fn corner_face(&self, color: Color) -> Result<Face, F2lError> {
        self.cube.face_of_color(self.pair.corner, color)
    }

    pub fn edge_face(&self, color: Color) -> Result<Face, F2lError> {
        self.cube.face_of_color(self.pair.edge, color)
    }

    /// True if the corner's cross sticker faces the working face.
    pub fn cross_on_working_face(&self) -> Result<bool, F2lError> {
        Ok(self.corner_face(Color::CROSS)? == self.frame.working_face())
    }

    /// The edge colour on the working face.
    pub fn edge_secondary(&self) -> Result<Color, F2lError> {
        self.cube
            .color_of_face(self.pair.edge, self.frame.working_face())
    }

    /// The edge colour on its side face.
    pub fn edge_primary(&self) -> Result<Color, F2lError> {
        let secondary = self.edge_secondary()?;
        self.edge()
            .colors()
            .find(|&color| color != secondary)
            .ok_or(F2lError::MissingColor { color: secondary })
    }

    /// The corner colour that is neither the cross colour nor on the working face.
    ///
    /// Only unambiguous while the cross sticker is off the working face.
    pub fn corner_other(&self) -> Result<Color, F2lError> {
        let working = self.frame.working_face();
        self.corner()
            .stickers()
            .iter()
            .find(|&&(face, color)| color != Color::CROSS && face != working)
            .map(|&(_, color)| color)
            .ok_or(F2lError::MissingFace { face: working })
    }

    /// A side face occupied by both pieces, if any.
    pub fn shared_side_face(&self) -> Option<Face> {
        let working = self.frame.working_face();
        let corner = self.corner();
        self.edge()
            .faces()
            .find(|&face| face != working && corner.occupies(face))
    }
}

/// Corner and edge stand side by side in the working layer, with the same
/// colour on their shared side face and on the working face.
pub fn is_pair_matched(view: &PairView<'_>) -> Result<bool, F2lError> {
    if view.cross_on_working_face()? {
        return Ok(false);
    }
    let Some(shared) = view.shared_side_face() else {
        return Ok(false);
    };
    let working = view.frame().working_face();
    let (corner, edge) = (view.corner(), view.edge());
    Ok(corner.color_on(shared) == edge.color_on(shared)
        && corner.color_on(working) == edge.color_on(working))
}

/// The corner is oriented for a direct insertion and the edge waits on the
/// opposite side of the working layer, flipped to meet it.
pub fn is_pair_separated(view: &PairView<'_>) -> Result<bool, F2lError> {
    if view.cross_on_working_face()? {
        return Ok(false);
    }
    let other = view.corner_other()?;
    let primary = view.edge_primary()?;
    let working = view.frame().working_face();
    if view.edge_secondary()? != other || view.corner().color_on(working) != Some(primary) {
        return Ok(false);
    }
    Ok(view.edge_face(primary)? == view.corner_face(other)?.opposite())
}

/// Inserts a matched pair.
///
/// The edge is turned under its secondary colour's centre first. That turn
/// drags the corner along, so the insertion turn is read from the corner's
/// new position.
///
/// A cross-down pair already joined on a side face is lifted into a matched
/// pair first.
pub fn solve_matched_pair(session: &mut Session<'_>) -> Result<(), F2lError> {
    let frame = session.frame();
    if session.view().cross_on_working_face()? {
        lift_joined_pair(session)?;
    }

    let view = session.view();
    let primary = view.edge_primary()?;
    let secondary = view.edge_secondary()?;
    let edge_face = view.edge_face(primary)?;
    session.turn_working_layer(edge_face, frame.home_face(secondary))?;

    let target = frame.home_face(primary);
    let corner_face = session.view().corner_face(primary)?;
    let quarters = session.working_turns(corner_face, target)?;
    session.insert(target, quarters)
}

/// Inserts a separated pair.
///
/// The corner is turned under its other colour's centre, then the edge is
/// brought round to meet it during the insertion.
///
/// A cross-down pair touching on a side face with mismatched colours is split
/// into a separated pair first.
pub fn solve_separated_pair(session: &mut Session<'_>) -> Result<(), F2lError> {
    let frame = session.frame();
    if session.view().cross_on_working_face()? {
        split_touching_pair(session)?;
    }

    let view = session.view();
    let other = view.corner_other()?;
    let other_face = view.corner_face(other)?;
    session.turn_working_layer(other_face, frame.home_face(other))?;

    let view = session.view();
    let primary = view.edge_primary()?;
    let edge_face = view.edge_face(primary)?;
    let target = frame.home_face(primary);
    let quarters = session.working_turns(edge_face, target)?;
    session.insert(target, quarters)
}

/// Turns the corner's cross sticker under the edge's primary centre, then
/// lifts the corner out so it comes back down beside the edge.
///
/// Leaves a matched pair.
pub(crate) fn join_on_corner(session: &mut Session<'_>) -> Result<(), F2lError> {
    let frame = session.frame();
    let view = session.view();
    let primary = view.edge_primary()?;
    let cross_face = view.corner_face(Color::CROSS)?;
    let target = frame.home_face(primary);
    session.turn_working_layer(cross_face, target)?;

    let view = session.view();
    let edge_face = view.edge_face(primary)?;
    let corner_face = view.corner_face(primary)?;
    let quarters = session.working_turns(edge_face, corner_face)?;
    session.insert(target, quarters)
}

fn lift_joined_pair(session: &mut Session<'_>) -> Result<(), F2lError> {
    let frame = session.frame();
    let view = session.view();
    let primary = view.edge_primary()?;
    let target = frame.home_face(view.edge_secondary()?);
    let edge_face = view.edge_face(primary)?;
    session.turn_working_layer(edge_face, target)?;
    session.insert(target, 2)?;
    join_on_corner(session)
}

fn split_touching_pair(session: &mut Session<'_>) -> Result<(), F2lError> {
    let frame = session.frame();
    let view = session.view();
    let primary = view.edge_primary()?;
    let edge_face = view.edge_face(primary)?;
    let target = frame.home_face(primary);
    session.turn_working_layer(edge_face, target)?;
    session.insert(target, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Algorithm;
    use crate::session::SolveOptions;

    fn setup(text: &str) -> Cube {
        let mut cube = Cube::solved();
        cube.apply(&text.parse::<Algorithm>().unwrap());
        cube
    }

    fn view(cube: &Cube) -> PairView<'_> {
        let pair = Pair::for_slot(cube, Slot::FRONT_RIGHT).unwrap();
        PairView::new(cube, pair, Frame::STANDARD)
    }

    #[test]
    fn test_slot_parsing_normalizes_order() {
        assert_eq!("FR".parse::<Slot>().unwrap(), Slot::FRONT_RIGHT);
        assert_eq!("RF".parse::<Slot>().unwrap(), Slot::FRONT_RIGHT);
        assert_eq!("FL".parse::<Slot>().unwrap(), Slot::LEFT_FRONT);
        for text in ["FB", "UF", "F", "FRB", "XY"] {
            assert!(text.parse::<Slot>().is_err(), "{text:?} is not a slot");
        }
        for slot in Slot::ALL {
            assert_eq!(slot.to_string().parse::<Slot>().unwrap(), slot);
        }
    }

    #[test]
    fn test_openers_drop_the_slot_edge() {
        let frame = Frame::STANDARD;
        let slot = Slot::FRONT_RIGHT;
        assert_eq!(slot.opener(Face::Front, frame).unwrap().to_string(), "F");
        assert_eq!(slot.opener(Face::Right, frame).unwrap().to_string(), "R'");
        assert!(slot.opener(Face::Back, frame).is_err());
        for slot in Slot::ALL {
            for face in slot.faces() {
                let mut cube = Cube::solved();
                let edge = cube.find(&slot.edge_colors()).unwrap();
                cube.apply_move(slot.opener(face, frame).unwrap());
                assert!(
                    cube.piece(edge).occupies(Face::Down),
                    "Opening {slot} with {face} should drop its edge"
                );
            }
        }
    }

    #[test]
    fn test_matched_pair_is_recognized() {
        let cube = setup("F D F'");
        let view = view(&cube);
        assert!(view.in_working_layer());
        assert!(is_pair_matched(&view).unwrap());
        assert!(!is_pair_separated(&view).unwrap());
    }

    #[test]
    fn test_separated_pair_is_recognized() {
        let cube = setup("F D' F'");
        let view = view(&cube);
        assert!(view.in_working_layer());
        assert!(is_pair_separated(&view).unwrap());
        assert!(!is_pair_matched(&view).unwrap());
    }

    #[test]
    fn test_color_roles() {
        let cube = setup("F D' F'");
        let view = view(&cube);
        assert!(!view.cross_on_working_face().unwrap());
        let primary = view.edge_primary().unwrap();
        let secondary = view.edge_secondary().unwrap();
        assert_ne!(primary, secondary);
        assert_eq!(view.edge_face(secondary).unwrap(), Face::Down);
        assert_ne!(view.corner_face(view.corner_other().unwrap()).unwrap(), Face::Down);
    }

    #[test]
    fn test_solve_matched_pair_inserts() {
        let mut cube = setup("F D F'");
        let options = SolveOptions::default();
        let mut session =
            Session::for_slot(&mut cube, Slot::FRONT_RIGHT, Frame::STANDARD, options).unwrap();
        solve_matched_pair(&mut session).unwrap();
        assert_eq!(session.log().to_string(), "F D' F'");
        assert!(cube.is_solved());
    }

    #[test]
    fn test_solve_separated_pair_inserts() {
        let mut cube = setup("R' D R");
        let options = SolveOptions::default();
        let mut session =
            Session::for_slot(&mut cube, Slot::FRONT_RIGHT, Frame::STANDARD, options).unwrap();
        solve_separated_pair(&mut session).unwrap();
        assert_eq!(session.log().to_string(), "R' D' R");
        assert!(cube.is_solved());
    }
}
