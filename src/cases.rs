//! Per-case solvers and dispatch.
//!
//! Each handler turns the working layer to line a reference piece up with a
//! centre, runs one or two insertion triggers on a slot face, and hands the
//! resulting matched or separated pair to a terminal primitive. Geometry is
//! re-read from the session after every move that can change it.

use crate::classify::{classify, Case};
use crate::error::F2lError;
use crate::geometry::{Color, Direction, Face};
use crate::moves::{Algorithm, Move, Turn};
use crate::pair::{join_on_corner, solve_matched_pair, solve_separated_pair};
use crate::session::Session;

/// Classifies the session's pair, solves it and returns the case it was in.
pub fn classify_and_solve(session: &mut Session<'_>) -> Result<Case, F2lError> {
    let case = classify(&session.view())?;
    solve_case(session, case)?;
    tracing::debug!(
        slot = %session.slot(),
        case = case.number(),
        moves = %session.log(),
        "solved pair"
    );
    Ok(case)
}

/// Runs the handler for `case`. The pair must actually be in that case.
pub fn solve_case(session: &mut Session<'_>, case: Case) -> Result<(), F2lError> {
    match case {
        Case::CrossDownMatched => solve_matched_pair(session),
        Case::CrossDownMismatched => solve_separated_pair(session),
        Case::CrossDownApartAligned => solve_cross_down_aligned(session),
        Case::CrossDownApartMisaligned => solve_cross_down_misaligned(session),
        Case::Matched => solve_matched_pair(session),
        Case::SameColorAdjacent => solve_same_color_adjacent(session),
        Case::SameColorApart => solve_same_color_apart(session),
        Case::Separated => solve_separated_pair(session),
        Case::SplitAdjacent => solve_split_adjacent(session),
        Case::SplitApart => solve_split_apart(session),
    }
}

/// Puts the edge under its side colour's centre and drops the corner in
/// beside it. Returns the face the trigger was run on.
fn drop_corner_beside_edge(session: &mut Session<'_>) -> Result<Face, F2lError> {
    let frame = session.frame();
    let view = session.view();
    let primary = view.edge_primary()?;
    let edge_face = view.edge_face(primary)?;
    let target = frame.home_face(primary);
    session.turn_working_layer(edge_face, target)?;

    let view = session.view();
    let corner_face = view.corner_face(primary)?;
    let edge_face = view.edge_face(primary)?;
    let quarters = session.working_turns(corner_face, edge_face)?;
    session.insert(target, quarters)?;
    Ok(target)
}

fn solve_cross_down_aligned(session: &mut Session<'_>) -> Result<(), F2lError> {
    let face = drop_corner_beside_edge(session)?;
    let working = session.frame().working_face();
    let half_turn = Algorithm::from(vec![Move::new(working, Turn::Half)]);
    session.apply(&half_turn)?;
    session.insert(face, 2)
}

fn solve_cross_down_misaligned(session: &mut Session<'_>) -> Result<(), F2lError> {
    drop_corner_beside_edge(session)?;
    solve_matched_pair(session)
}

fn solve_same_color_adjacent(session: &mut Session<'_>) -> Result<(), F2lError> {
    let frame = session.frame();
    let view = session.view();
    let primary = view.edge_primary()?;
    let target = frame.home_face(view.edge_secondary()?);
    let edge_face = view.edge_face(primary)?;
    session.turn_working_layer(edge_face, target)?;

    let view = session.view();
    let corner_face = view.corner_face(primary)?;
    let edge_face = view.edge_face(primary)?;
    let quarters = match frame.direction_between(corner_face, edge_face) {
        Some(Direction::Right) => 1,
        _ => 3,
    };
    session.insert(target, quarters)?;
    solve_separated_pair(session)
}

fn solve_same_color_apart(session: &mut Session<'_>) -> Result<(), F2lError> {
    join_on_corner(session)?;
    solve_matched_pair(session)
}

fn solve_split_adjacent(session: &mut Session<'_>) -> Result<(), F2lError> {
    let frame = session.frame();
    let view = session.view();
    let primary = view.edge_primary()?;
    let secondary = view.edge_secondary()?;
    let cross_face = view.corner_face(Color::CROSS)?;
    let shares_cross_face = view.edge_face(primary)? == cross_face;
    let (primary_home, secondary_home) = (frame.home_face(primary), frame.home_face(secondary));

    if shares_cross_face {
        session.turn_working_layer(cross_face, secondary_home.opposite())?;
        let quarters = session.working_turns(secondary_home, primary_home)?;
        session.insert(primary_home, quarters)?;
    } else {
        session.turn_working_layer(cross_face, secondary_home)?;
        session.insert(secondary_home, 2)?;
    }
    solve_separated_pair(session)
}

fn solve_split_apart(session: &mut Session<'_>) -> Result<(), F2lError> {
    let frame = session.frame();
    let view = session.view();
    let primary = view.edge_primary()?;
    let secondary = view.edge_secondary()?;
    let edge_face = view.edge_face(primary)?;
    let target = frame.home_face(primary);
    session.turn_working_layer(edge_face, target)?;

    let quarters = match frame.direction_between(target, frame.home_face(secondary)) {
        Some(Direction::Right) => 3,
        _ => 1,
    };
    session.insert(target, quarters)?;
    solve_separated_pair(session)
}
