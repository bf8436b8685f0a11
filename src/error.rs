//! Error type for the F2L pair solver.

use crate::classify::Case;
use crate::geometry::{Color, Face};
use crate::moves::Move;
use crate::pair::Slot;

#[derive(Debug, thiserror::Error)]
pub enum F2lError {
    #[error("invalid move token: {0:?}")]
    ParseMove(String),

    #[error("invalid slot: {0:?} (expected two adjacent side faces, e.g. FR)")]
    ParseSlot(String),

    #[error("no piece carries exactly the colours {0:?}")]
    PieceNotFound(Vec<Color>),

    #[error("piece has no {color} sticker")]
    MissingColor { color: Color },

    #[error("piece does not occupy face {face}")]
    MissingFace { face: Face },

    #[error("no {axis} turn carries {from} onto {to}")]
    NoRotation { axis: Face, from: Face, to: Face },

    #[error("face {face} is not part of slot {slot}")]
    FaceNotInSlot { face: Face, slot: Slot },

    #[error("pair for slot {slot} is not in the working layer")]
    PairNotInWorkingLayer { slot: Slot },

    #[error("move {mv} would disturb pieces outside slot {slot}")]
    IllegalMove { mv: Move, slot: Slot },

    #[error("{case} left slot {slot} unsolved")]
    Unsolved { slot: Slot, case: Case },
}
