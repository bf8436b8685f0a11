//! Face, colour and direction geometry for a 3x3x3 cube.
//!
//! Faces are identified with their outward unit normals. A clockwise quarter
//! turn about a face with normal `n` maps a vector `v` to `n(n·v) - n×v`,
//! which is all the rotation maths the facelet model and the slot helpers
//! need: sticker faces, cubie positions and slot edges all turn the same way.

use std::fmt;

use crate::error::F2lError;
use crate::moves::{Algorithm, Move, Turn};

/// A 3D integer vector: a face normal or a cubie position.
pub type Coord = (i32, i32, i32);

/// One of the six faces of the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    Up,
    Down,
    Front,
    Back,
    Right,
    Left,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Down,
        Face::Front,
        Face::Back,
        Face::Right,
        Face::Left,
    ];

    /// Outward unit normal of this face.
    pub const fn normal(self) -> Coord {
        match self {
            Face::Up => (0, 1, 0),
            Face::Down => (0, -1, 0),
            Face::Front => (0, 0, 1),
            Face::Back => (0, 0, -1),
            Face::Right => (1, 0, 0),
            Face::Left => (-1, 0, 0),
        }
    }

    /// Returns the face whose outward normal is `v`, if `v` is a unit axis vector.
    pub fn from_normal(v: Coord) -> Option<Face> {
        Face::ALL.into_iter().find(|face| face.normal() == v)
    }

    pub const fn opposite(self) -> Face {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Right => Face::Left,
            Face::Left => Face::Right,
        }
    }

    /// Single-letter notation used in move sequences.
    pub const fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Right => 'R',
            Face::Left => 'L',
        }
    }

    pub fn from_letter(letter: char) -> Option<Face> {
        Face::ALL.into_iter().find(|face| face.letter() == letter)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A sticker colour. Each colour is named after its home face on a solved cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Red,
    Orange,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Red,
        Color::Orange,
    ];

    /// Colour of the solved cross, which sits on the up face.
    pub const CROSS: Color = Color::White;

    /// The face this colour's centre sits on.
    pub const fn home_face(self) -> Face {
        match self {
            Color::White => Face::Up,
            Color::Yellow => Face::Down,
            Color::Green => Face::Front,
            Color::Blue => Face::Back,
            Color::Red => Face::Right,
            Color::Orange => Face::Left,
        }
    }

    /// Inverse of [`Color::home_face`].
    pub const fn with_home(face: Face) -> Color {
        match face {
            Face::Up => Color::White,
            Face::Down => Color::Yellow,
            Face::Front => Color::Green,
            Face::Back => Color::Blue,
            Face::Right => Color::Red,
            Face::Left => Color::Orange,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Red => 'R',
            Color::Orange => 'O',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Relative direction between two side faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

#[inline]
pub const fn dot(a: Coord, b: Coord) -> i32 {
    a.0 * b.0 + a.1 * b.1 + a.2 * b.2
}

#[inline]
pub const fn cross(a: Coord, b: Coord) -> Coord {
    (
        a.1 * b.2 - a.2 * b.1,
        a.2 * b.0 - a.0 * b.2,
        a.0 * b.1 - a.1 * b.0,
    )
}

#[inline]
pub const fn add(a: Coord, b: Coord) -> Coord {
    (a.0 + b.0, a.1 + b.1, a.2 + b.2)
}

/// One clockwise quarter turn of `v` about the outward normal `axis`.
#[inline]
pub const fn quarter_turn(axis: Coord, v: Coord) -> Coord {
    let d = dot(axis, v);
    let c = cross(axis, v);
    (axis.0 * d - c.0, axis.1 * d - c.1, axis.2 * d - c.2)
}

/// Applies `quarters` clockwise quarter turns of `v` about `axis`.
pub fn turn_by(axis: Coord, v: Coord, quarters: u8) -> Coord {
    (0..quarters % 4).fold(v, |acc, _| quarter_turn(axis, acc))
}

/// The reference frame the pair geometry is read in.
///
/// Stateless: it only fixes which face is "up". The working layer is the
/// opposite face, and left/right are judged looking at a side face from
/// outside the cube with the up face on top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    up: Face,
}

impl Default for Frame {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Frame {
    /// Cross on the up face, pairs worked up from the down layer.
    pub const STANDARD: Frame = Frame { up: Face::Up };

    pub const fn up(self) -> Face {
        self.up
    }

    /// The layer pair pieces wait in before insertion.
    pub const fn working_face(self) -> Face {
        self.up.opposite()
    }

    /// True if `face` lies around the vertical axis of this frame.
    pub const fn is_side(self, face: Face) -> bool {
        dot(face.normal(), self.up.normal()) == 0
    }

    pub const fn move_for_face(self, face: Face) -> Move {
        Move::new(face, Turn::Clockwise)
    }

    pub const fn home_face(self, color: Color) -> Face {
        color.home_face()
    }

    /// Number of clockwise quarter turns of `axis` that carry `from` onto `to`.
    pub fn quarter_turns(self, axis: Face, from: Face, to: Face) -> Result<u8, F2lError> {
        (0..4)
            .find(|&quarters| turn_by(axis.normal(), from.normal(), quarters) == to.normal())
            .ok_or(F2lError::NoRotation { axis, from, to })
    }

    /// The shortest single-layer turn of `axis` that carries `from` onto `to`.
    ///
    /// Empty when the two faces already coincide.
    pub fn rotation_from_to(self, axis: Face, from: Face, to: Face) -> Result<Algorithm, F2lError> {
        let quarters = self.quarter_turns(axis, from, to)?;
        Ok(Turn::from_quarters(quarters)
            .map(|turn| Move::new(axis, turn))
            .into_iter()
            .collect())
    }

    /// The side face next to `face` in `direction`.
    ///
    /// Faces on the vertical axis have no neighbours and map to themselves.
    pub fn face_in_direction(self, face: Face, direction: Direction) -> Face {
        let axis = match direction {
            Direction::Right => self.working_face(),
            Direction::Left => self.up,
        };
        Face::from_normal(quarter_turn(axis.normal(), face.normal())).unwrap_or(face)
    }

    /// Where `b` sits relative to `a`, if the two are neighbouring side faces.
    pub fn direction_between(self, a: Face, b: Face) -> Option<Direction> {
        if !self.is_side(a) || !self.is_side(b) {
            return None;
        }
        if self.face_in_direction(a, Direction::Right) == b {
            Some(Direction::Right)
        } else if self.face_in_direction(a, Direction::Left) == b {
            Some(Direction::Left)
        } else {
            None
        }
    }
}
