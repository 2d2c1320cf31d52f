//! Legal move enumeration.
//!
//! Lists every command that would currently succeed for a player. This is a
//! query for presentation layers and tests; it does not rank or choose moves.

use crate::board::{ALL_COORDS, BOARD_SIZE};
use crate::game::Game;
use crate::player::PlayerId;
use crate::rules::{DistanceRule, Move};

const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Returns all legal commands for `player`: stack moves first, in row-major
/// source order, then reserve placements.
///
/// Empty when the player may not act.
pub fn legal_moves(game: &Game, player: PlayerId) -> Vec<Move> {
    if game.check_can_act(player).is_err() {
        return Vec::new();
    }

    let mut moves = stack_moves(game, player);
    if game.player(player).reserve() > 0 {
        moves.extend(ALL_COORDS.iter().map(|&to| Move::Reserve { to }));
    }
    moves
}

fn stack_moves(game: &Game, player: PlayerId) -> Vec<Move> {
    let color = game.player(player).color();
    let rule = game.config().distance_rule;
    let mut moves = Vec::new();

    for cell in game.board().cells() {
        if cell.top() != Some(color) {
            continue;
        }
        let from = cell.coord();
        for count in 1..=cell.height() {
            let steps = match rule {
                DistanceRule::AtLeast => 1..=count,
                DistanceRule::Exact => count..=count,
            };
            for step in steps {
                let step = step as i32;
                if step >= BOARD_SIZE {
                    break;
                }
                for (dr, dc) in DIRECTIONS {
                    let to = from.offset(dr * step, dc * step);
                    if to.in_bounds() {
                        moves.push(Move::Stack { from, to, count });
                    }
                }
            }
        }
    }

    moves
}
