//! Cubie-level facelet model.
//!
//! The cube is stored as its 26 visible cubies. Each cubie keeps a short
//! list of `(face, colour)` stickers; its position is the sum of the normals
//! of the faces it occupies, so turning a layer only has to rotate sticker
//! faces.

use crate::error::F2lError;
use crate::geometry::{turn_by, Color, Face, Frame};
use crate::moves::{Algorithm, Move};

/// Maximum number of stickers on any cubie (corners have three).
pub const MAX_STICKERS: usize = 3;

/// Index of a cubie inside a [`Cube`]. Stable for the cube's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(usize);

/// A single cubie: a centre, an edge or a corner.
///
/// Uses a fixed-size array so pieces are `Copy` and can be hashed cheaply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    stickers: [(Face, Color); MAX_STICKERS],
    sticker_count: u8,
}

impl Piece {
    fn from_stickers(stickers: &[(Face, Color)]) -> Self {
        let mut piece = Self {
            stickers: [(Face::Up, Color::White); MAX_STICKERS],
            sticker_count: stickers.len() as u8,
        };
        piece.stickers[..stickers.len()].copy_from_slice(stickers);
        piece
    }

    /// Returns the valid stickers for this piece.
    #[inline]
    pub fn stickers(&self) -> &[(Face, Color)] {
        &self.stickers[..self.sticker_count as usize]
    }

    pub fn faces(&self) -> impl Iterator<Item = Face> + '_ {
        self.stickers().iter().map(|&(face, _)| face)
    }

    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.stickers().iter().map(|&(_, color)| color)
    }

    pub fn occupies(&self, face: Face) -> bool {
        self.faces().any(|f| f == face)
    }

    /// The face currently showing `color`, if this piece carries it.
    pub fn face_of(&self, color: Color) -> Option<Face> {
        self.stickers()
            .iter()
            .find(|&&(_, c)| c == color)
            .map(|&(face, _)| face)
    }

    /// The colour currently showing on `face`, if this piece occupies it.
    pub fn color_on(&self, face: Face) -> Option<Color> {
        self.stickers()
            .iter()
            .find(|&&(f, _)| f == face)
            .map(|&(_, color)| color)
    }

    /// True if the piece carries exactly these colours, in any order.
    pub fn has_colors(&self, colors: &[Color]) -> bool {
        colors.len() == self.sticker_count as usize
            && colors.iter().all(|&color| self.face_of(color).is_some())
    }

    /// True if every sticker sits on its colour's home face.
    pub fn is_home(&self) -> bool {
        self.stickers()
            .iter()
            .all(|&(face, color)| face == color.home_face())
    }

    fn turn(&mut self, mv: Move) {
        let axis = mv.face.normal();
        let quarters = mv.turn.quarters();
        for (face, _) in &mut self.stickers[..self.sticker_count as usize] {
            let turned = turn_by(axis, face.normal(), quarters);
            // a quarter turn maps unit axis vectors onto unit axis vectors
            if let Some(next) = Face::from_normal(turned) {
                *face = next;
            }
        }
    }
}

/// A 3x3x3 cube as a list of cubies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cube {
    pieces: Vec<Piece>,
}

impl Default for Cube {
    fn default() -> Self {
        Self::solved()
    }
}

impl Cube {
    /// Builds a solved cube: every sticker on its colour's home face.
    pub fn solved() -> Self {
        let mut pieces = Vec::with_capacity(26);
        for x in -1..=1 {
            for y in -1..=1 {
                for z in -1..=1 {
                    if (x, y, z) == (0, 0, 0) {
                        continue;
                    }
                    let stickers: Vec<(Face, Color)> = Face::ALL
                        .into_iter()
                        .filter(|face| {
                            let (nx, ny, nz) = face.normal();
                            (nx != 0 && nx == x) || (ny != 0 && ny == y) || (nz != 0 && nz == z)
                        })
                        .map(|face| (face, Color::with_home(face)))
                        .collect();
                    pieces.push(Piece::from_stickers(&stickers));
                }
            }
        }
        Self { pieces }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.0]
    }

    /// Locates the piece carrying exactly `colors`.
    pub fn find(&self, colors: &[Color]) -> Result<PieceId, F2lError> {
        self.pieces
            .iter()
            .position(|piece| piece.has_colors(colors))
            .map(PieceId)
            .ok_or_else(|| F2lError::PieceNotFound(colors.to_vec()))
    }

    pub fn occupied_faces(&self, id: PieceId) -> impl Iterator<Item = Face> + '_ {
        self.piece(id).faces()
    }

    pub fn colors(&self, id: PieceId) -> impl Iterator<Item = Color> + '_ {
        self.piece(id).colors()
    }

    pub fn face_of_color(&self, id: PieceId, color: Color) -> Result<Face, F2lError> {
        self.piece(id)
            .face_of(color)
            .ok_or(F2lError::MissingColor { color })
    }

    pub fn color_of_face(&self, id: PieceId, face: Face) -> Result<Color, F2lError> {
        self.piece(id)
            .color_on(face)
            .ok_or(F2lError::MissingFace { face })
    }

    /// Colour of the centre on `face`. Centres never move under face turns.
    pub fn center_color(&self, face: Face) -> Option<Color> {
        self.pieces
            .iter()
            .find(|piece| piece.sticker_count == 1 && piece.occupies(face))
            .and_then(|piece| piece.color_on(face))
    }

    pub fn is_piece_home(&self, id: PieceId) -> bool {
        self.piece(id).is_home()
    }

    pub fn is_solved(&self) -> bool {
        self.pieces.iter().all(Piece::is_home)
    }

    /// True if every piece outside the working layer is home.
    pub fn first_two_layers_solved(&self, frame: Frame) -> bool {
        let working = frame.working_face();
        self.pieces
            .iter()
            .filter(|piece| !piece.occupies(working))
            .all(Piece::is_home)
    }

    /// Turns one layer: every piece on `mv.face` rotates about its normal.
    pub fn apply_move(&mut self, mv: Move) {
        for piece in self.pieces.iter_mut().filter(|piece| piece.occupies(mv.face)) {
            piece.turn(mv);
        }
    }

    pub fn apply(&mut self, algorithm: &Algorithm) {
        for &mv in algorithm {
            self.apply_move(mv);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Algorithm {
        text.parse().unwrap()
    }

    #[test]
    fn test_solved_cube_piece_counts() {
        let cube = Cube::solved();
        let count = |n: u8| cube.pieces().iter().filter(|p| p.sticker_count == n).count();
        assert_eq!(count(1), 6, "Expected six centres");
        assert_eq!(count(2), 12, "Expected twelve edges");
        assert_eq!(count(3), 8, "Expected eight corners");
        assert!(cube.is_solved());
    }

    #[test]
    fn test_face_color_queries_are_inverse() {
        let mut cube = Cube::solved();
        cube.apply(&parse("R U F' D2 L B'"));
        for index in 0..cube.pieces().len() {
            let id = PieceId(index);
            let colors: Vec<Color> = cube.colors(id).collect();
            for color in colors {
                let face = cube.face_of_color(id, color).unwrap();
                assert_eq!(
                    cube.color_of_face(id, face).unwrap(),
                    color,
                    "Piece {index} should map {face} back to {color}"
                );
            }
        }
    }

    #[test]
    fn test_missing_color_is_reported() {
        let cube = Cube::solved();
        let edge = cube.find(&[Color::Green, Color::Red]).unwrap();
        assert!(matches!(
            cube.face_of_color(edge, Color::White),
            Err(F2lError::MissingColor { color: Color::White })
        ));
        assert!(matches!(
            cube.color_of_face(edge, Face::Up),
            Err(F2lError::MissingFace { face: Face::Up })
        ));
        assert!(cube.find(&[Color::Green, Color::Blue]).is_err());
    }

    #[test]
    fn test_down_turn_moves_front_right_corner_to_back_right() {
        let mut cube = Cube::solved();
        let corner = cube.find(&[Color::Yellow, Color::Green, Color::Red]).unwrap();
        cube.apply_move("D".parse().unwrap());
        let mut faces: Vec<Face> = cube.occupied_faces(corner).collect();
        faces.sort();
        assert_eq!(faces, vec![Face::Down, Face::Back, Face::Right]);
        assert_eq!(cube.face_of_color(corner, Color::Green).unwrap(), Face::Right);
        assert_eq!(cube.face_of_color(corner, Color::Yellow).unwrap(), Face::Down);
    }

    #[test]
    fn test_algorithm_then_reverse_restores_cube() {
        let alg = parse("R U R' U' F2 D L' B");
        let mut cube = Cube::solved();
        cube.apply(&alg);
        assert!(!cube.is_solved());
        cube.apply(&alg.reversed());
        assert!(cube.is_solved());
    }

    #[test]
    fn test_four_quarter_turns_are_identity() {
        for face in Face::ALL {
            let mut cube = Cube::solved();
            let mv = Frame::STANDARD.move_for_face(face);
            for _ in 0..4 {
                cube.apply_move(mv);
            }
            assert!(cube.is_solved(), "Four turns of {face} should restore the cube");
        }
    }

    #[test]
    fn test_centers_never_move() {
        let mut cube = Cube::solved();
        cube.apply(&parse("R U2 F' L D B2"));
        for face in Face::ALL {
            assert_eq!(cube.center_color(face), Some(Color::with_home(face)));
        }
    }

    #[test]
    fn test_first_two_layers_ignore_working_layer() {
        let mut cube = Cube::solved();
        cube.apply(&parse("D"));
        assert!(!cube.is_solved());
        assert!(cube.first_two_layers_solved(Frame::STANDARD));
        cube.apply(&parse("R"));
        assert!(!cube.first_two_layers_solved(Frame::STANDARD));
    }
}
