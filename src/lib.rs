//! F2L Pair Insertion Library
//!
//! Solves the first-two-layers step of a Rubik's cube one pair at a time:
//! given a cube with a solved cross on the up face and a slot whose corner
//! and edge wait in the down layer, classifies the pair into one of ten
//! configurations and inserts it without disturbing any other solved piece.

pub mod cases;
pub mod classify;
pub mod cube;
pub mod error;
pub mod geometry;
pub mod moves;
pub mod pair;
pub mod session;
pub mod survey;

pub use cases::classify_and_solve;
pub use classify::{classify, Case};
pub use cube::{Cube, PieceId};
pub use error::F2lError;
pub use geometry::{Color, Direction, Face, Frame};
pub use moves::{Algorithm, Move, Turn};
pub use pair::{Pair, PairView, Slot};
pub use session::{Session, SolveOptions};

/// The outcome of solving one pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// The configuration the pair was found in.
    pub case: Case,
    /// Every move applied to the cube, in order.
    pub moves: Algorithm,
}

/// Classifies the pair belonging to `slot` without touching the cube.
pub fn classify_pair(cube: &Cube, slot: Slot) -> Result<Case, F2lError> {
    let pair = Pair::for_slot(cube, slot)?;
    classify(&PairView::new(cube, pair, Frame::STANDARD))
}

/// Solves the pair belonging to `slot` in place.
pub fn solve_pair(
    cube: &mut Cube,
    slot: Slot,
    options: SolveOptions,
) -> Result<Solution, F2lError> {
    let mut session = Session::for_slot(cube, slot, Frame::STANDARD, options)?;
    let case = classify_and_solve(&mut session)?;
    Ok(Solution {
        case,
        moves: session.into_log(),
    })
}
