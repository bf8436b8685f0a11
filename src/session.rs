//! The solve context threaded through classification and case handlers.
//!
//! A session owns the only mutable borrow of the cube while a pair is being
//! solved. Every move goes through [`Session::apply`], which checks it
//! against the slot, turns the cube and appends to the move log.

use crate::cube::Cube;
use crate::error::F2lError;
use crate::geometry::{Face, Frame};
use crate::moves::{Algorithm, Move, Turn};
use crate::pair::{Pair, PairView, Slot};

/// Knobs for a single pair solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolveOptions {
    /// Reject any move outside the working face and the slot's two faces.
    pub validate_moves: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            validate_moves: cfg!(debug_assertions),
        }
    }
}

pub struct Session<'a> {
    cube: &'a mut Cube,
    pair: Pair,
    frame: Frame,
    options: SolveOptions,
    log: Algorithm,
}

impl<'a> Session<'a> {
    pub fn new(cube: &'a mut Cube, pair: Pair, frame: Frame, options: SolveOptions) -> Self {
        Self {
            cube,
            pair,
            frame,
            options,
            log: Algorithm::new(),
        }
    }

    /// Opens a session for the pair belonging to `slot`.
    pub fn for_slot(
        cube: &'a mut Cube,
        slot: Slot,
        frame: Frame,
        options: SolveOptions,
    ) -> Result<Self, F2lError> {
        let pair = Pair::for_slot(&*cube, slot)?;
        Ok(Self::new(cube, pair, frame, options))
    }

    pub fn pair(&self) -> Pair {
        self.pair
    }

    pub fn slot(&self) -> Slot {
        self.pair.slot
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Every move applied so far, in order.
    pub fn log(&self) -> &Algorithm {
        &self.log
    }

    pub fn into_log(self) -> Algorithm {
        self.log
    }

    /// Current geometry of the pair. Reflects every move applied so far.
    pub fn view(&self) -> PairView<'_> {
        PairView::new(&*self.cube, self.pair, self.frame)
    }

    /// Checks that `mv` only turns the working face or one of the slot's faces.
    pub fn check_move(&self, mv: Move) -> Result<(), F2lError> {
        if mv.face == self.frame.working_face() || self.pair.slot.contains(mv.face) {
            Ok(())
        } else {
            Err(F2lError::IllegalMove {
                mv,
                slot: self.pair.slot,
            })
        }
    }

    /// Applies a sequence to the cube and records it.
    ///
    /// With validation on, the whole sequence is checked before the cube is
    /// touched.
    pub fn apply(&mut self, algorithm: &Algorithm) -> Result<(), F2lError> {
        if self.options.validate_moves {
            for &mv in algorithm {
                self.check_move(mv)?;
            }
        }
        tracing::trace!(slot = %self.pair.slot, moves = %algorithm, "apply");
        self.cube.apply(algorithm);
        self.log.extend_from(algorithm);
        Ok(())
    }

    /// Quarter turns of the working layer that carry side face `from` onto `to`.
    pub fn working_turns(&self, from: Face, to: Face) -> Result<u8, F2lError> {
        self.frame.quarter_turns(self.frame.working_face(), from, to)
    }

    /// Turns the working layer so whatever sits on `from` ends up on `to`.
    pub fn turn_working_layer(&mut self, from: Face, to: Face) -> Result<(), F2lError> {
        let rotation = self
            .frame
            .rotation_from_to(self.frame.working_face(), from, to)?;
        self.apply(&rotation)
    }

    /// Runs one insertion trigger on `face`: open the slot, turn the working
    /// layer `quarters` times, close the slot.
    pub fn insert(&mut self, face: Face, quarters: u8) -> Result<(), F2lError> {
        let open = self.pair.slot.opener(face, self.frame)?;
        let mut trigger = Algorithm::new();
        trigger.push(open);
        if let Some(turn) = Turn::from_quarters(quarters) {
            trigger.push(Move::new(self.frame.working_face(), turn));
        }
        trigger.push(open.inverse());
        self.apply(&trigger)
    }
}
