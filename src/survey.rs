//! Exhaustive survey of working-layer pair configurations.
//!
//! Starting from a solved cube, a slot's pair is shuffled with sequences that
//! only ever touch the working layer and the slot itself: working-layer turns
//! and `open, turn, close` triggers on either slot face. A breadth-first
//! search over those units reaches every configuration the pair can be in,
//! and each one with both pieces in the working layer is a solver input.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::classify::Case;
use crate::cube::{Cube, Piece};
use crate::error::F2lError;
use crate::geometry::Frame;
use crate::moves::{Algorithm, Move, Turn};
use crate::pair::{Pair, PairView, Slot};
use crate::session::SolveOptions;
use crate::solve_pair;

const TURNS: [Turn; 3] = [Turn::Clockwise, Turn::Half, Turn::CounterClockwise];

/// Sticker state of the pair: everything the classifier looks at.
type PairKey = (Piece, Piece);

/// Sequences that move a slot's pair around without touching anything
/// outside the slot and the working layer.
fn shuffling_units(slot: Slot, frame: Frame) -> Result<Vec<Algorithm>, F2lError> {
    let working = frame.working_face();
    let mut units: Vec<Algorithm> = TURNS
        .iter()
        .map(|&turn| Algorithm::from(vec![Move::new(working, turn)]))
        .collect();

    for face in slot.faces() {
        let open = slot.opener(face, frame)?;
        for turn in TURNS {
            units.push(Algorithm::from(vec![
                open,
                Move::new(working, turn),
                open.inverse(),
            ]));
        }
    }
    Ok(units)
}

/// Every distinct configuration of the slot's pair with both pieces in the
/// working layer, each on an otherwise solved cube.
pub fn configurations(slot: Slot, frame: Frame) -> Result<Vec<Cube>, F2lError> {
    let units = shuffling_units(slot, frame)?;
    let start = Cube::solved();
    let pair = Pair::for_slot(&start, slot)?;
    let key = |cube: &Cube| -> PairKey { (*cube.piece(pair.corner), *cube.piece(pair.edge)) };

    let mut seen: FxHashSet<PairKey> = FxHashSet::default();
    seen.insert(key(&start));
    let mut queue = VecDeque::from([start]);
    let mut found = Vec::new();

    while let Some(cube) = queue.pop_front() {
        for unit in &units {
            let mut next = cube.clone();
            next.apply(unit);
            if seen.insert(key(&next)) {
                queue.push_back(next);
            }
        }
        if PairView::new(&cube, pair, frame).in_working_layer() {
            found.push(cube);
        }
    }

    tracing::debug!(%slot, reachable = seen.len(), configurations = found.len(), "enumerated slot");
    Ok(found)
}

/// Per-case totals gathered by a survey.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CaseStats {
    pub configurations: usize,
    pub min_moves: usize,
    pub max_moves: usize,
}

impl CaseStats {
    fn record(&mut self, moves: usize) {
        if self.configurations == 0 {
            self.min_moves = moves;
            self.max_moves = moves;
        } else {
            self.min_moves = self.min_moves.min(moves);
            self.max_moves = self.max_moves.max(moves);
        }
        self.configurations += 1;
    }
}

/// Outcome of solving every configuration of one or more slots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Survey {
    stats: [CaseStats; Case::COUNT],
}

impl Survey {
    pub fn stats(&self, case: Case) -> CaseStats {
        self.stats[usize::from(case.number() - 1)]
    }

    pub fn total(&self) -> usize {
        self.stats.iter().map(|stats| stats.configurations).sum()
    }

    fn record(&mut self, case: Case, moves: usize) {
        self.stats[usize::from(case.number() - 1)].record(moves);
    }

    /// Formats the survey as a fixed-width table, one row per case.
    pub fn table(&self) -> String {
        let mut output = format!(
            "{:>4}  {:>14}  {:>9}  {:>9}\n",
            "case", "configurations", "min moves", "max moves"
        );
        for case in Case::ALL {
            let stats = self.stats(case);
            output.push_str(&format!(
                "{:>4}  {:>14}  {:>9}  {:>9}\n",
                case.number(),
                stats.configurations,
                stats.min_moves,
                stats.max_moves
            ));
        }
        output.push_str(&format!("{:>4}  {:>14}\n", "all", self.total()));
        output
    }
}

/// Solves every configuration of each slot and checks the result.
///
/// Fails on the first configuration that is left with a disturbed first two
/// layers.
pub fn run(slots: &[Slot], options: SolveOptions) -> Result<Survey, F2lError> {
    let frame = Frame::STANDARD;
    let mut survey = Survey::default();

    for &slot in slots {
        let configurations = configurations(slot, frame)?;
        let count = configurations.len();
        for mut cube in configurations {
            let solution = solve_pair(&mut cube, slot, options)?;
            if !cube.first_two_layers_solved(frame) {
                return Err(F2lError::Unsolved {
                    slot,
                    case: solution.case,
                });
            }
            survey.record(solution.case, solution.moves.len());
        }
        tracing::info!(%slot, configurations = count, "surveyed slot");
    }

    Ok(survey)
}
