//! Stack-move legality.
//!
//! Pure checks run before any mutation. Rules are tested in a fixed order
//! and the first failure is reported, so a given bad command always yields
//! the same reason.

use crate::board::{Board, Color, Coord};

use super::config::DistanceRule;
use super::outcome::RejectReason;

/// Validates moving the top `distance` tokens from `source` to `dest` for the
/// player whose tokens are `mover`.
///
/// Order of checks: bounds, orthogonality, distance against displacement,
/// stack height, control of the stack.
pub fn check_move(
    board: &Board,
    mover: Color,
    source: Coord,
    dest: Coord,
    distance: usize,
    rule: DistanceRule,
) -> Result<(), RejectReason> {
    if !source.in_bounds() || !dest.in_bounds() {
        return Err(RejectReason::OutOfBounds);
    }

    let (dr, dc) = source.displacement(dest);
    // Exactly one axis may change.
    if (dr == 0) == (dc == 0) {
        return Err(RejectReason::DiagonalOrNullMove);
    }

    let travelled = dr.max(dc) as usize;
    match rule {
        DistanceRule::AtLeast if travelled > distance => {
            return Err(RejectReason::DistanceTooShort);
        }
        DistanceRule::Exact if travelled != distance => {
            return Err(RejectReason::DistanceMismatch);
        }
        _ => {}
    }

    let cell = board.cell_at(source)?;
    if distance > cell.height() {
        return Err(RejectReason::InsufficientPieces);
    }

    if cell.top() != Some(mover) {
        return Err(RejectReason::NotMoverOnTop);
    }

    Ok(())
}
