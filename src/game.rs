//! Game aggregate and command API.
//!
//! A `Game` owns the board, both players, whose turn it is, and whether
//! someone has won. All mutation goes through `move_piece`, `reserved_move`
//! or `apply`; each command is fully validated before anything changes, so a
//! rejected command leaves the game exactly as it was.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{Board, Cell, Color, Coord, BOARD_SIZE};
use crate::player::{Player, PlayerId, ALL_PLAYERS};
use crate::rules::{
    check_move, resolve_overflow, Move, Outcome, RejectReason, RulesConfig,
    WIN_CAPTURE_THRESHOLD,
};

/// Who may issue the next command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    /// Nobody has moved yet; either player may start.
    Unset,
    Player(PlayerId),
}

impl Turn {
    pub fn allows(self, id: PlayerId) -> bool {
        match self {
            Turn::Unset => true,
            Turn::Player(p) => p == id,
        }
    }
}

/// Whether a player has reached the capture threshold.
///
/// Kept apart from per-command `Outcome`s. Unless `RulesConfig::lock_on_win`
/// is set, a won game still accepts commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(PlayerId),
}

/// Errors constructing a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("both players use color '{0}'")]
    SameColor(Color),

    #[error("both players are named '{0}'")]
    SameName(String),

    #[error("'{0}' is not usable as a token color")]
    InvalidColor(Color),
}

/// Serializable view of a whole game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Rows of stacks, each stack bottom to top.
    pub board: Vec<Vec<Vec<Color>>>,
    pub players: Vec<Player>,
    pub turn: Turn,
    pub status: GameStatus,
    pub config: RulesConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    turn: Turn,
    status: GameStatus,
    config: RulesConfig,
}

impl Game {
    /// Starts a game with the default rules. `a` is seated first and owns the
    /// corner pairs of rows 0, 2 and 4.
    pub fn new(
        a: (impl Into<String>, Color),
        b: (impl Into<String>, Color),
    ) -> Result<Self, SetupError> {
        Self::with_config(a, b, RulesConfig::default())
    }

    pub fn with_config(
        a: (impl Into<String>, Color),
        b: (impl Into<String>, Color),
        config: RulesConfig,
    ) -> Result<Self, SetupError> {
        let first = Player::new(a.0, a.1);
        let second = Player::new(b.0, b.1);
        for color in [first.color(), second.color()] {
            if !color.is_token() {
                return Err(SetupError::InvalidColor(color));
            }
        }
        if first.color() == second.color() {
            return Err(SetupError::SameColor(first.color()));
        }
        if first.name() == second.name() {
            return Err(SetupError::SameName(first.name().to_string()));
        }

        Ok(Game {
            board: Board::with_layout(first.color(), second.color()),
            players: [first, second],
            turn: Turn::Unset,
            status: GameStatus::InProgress,
            config,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player_id(&self, name: &str) -> Option<PlayerId> {
        ALL_PLAYERS
            .into_iter()
            .find(|id| self.players[id.index()].name() == name)
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn config(&self) -> RulesConfig {
        self.config
    }

    /// Stack at `coord`, bottom to top. Empty for empty or off-board cells.
    pub fn piece_stack(&self, coord: Coord) -> &[Color] {
        self.board.cell_at(coord).map(Cell::tokens).unwrap_or(&[])
    }

    pub fn reserve_count(&self, name: &str) -> Option<u32> {
        self.player_id(name).map(|id| self.player(id).reserve())
    }

    pub fn capture_count(&self, name: &str) -> Option<u32> {
        self.player_id(name).map(|id| self.player(id).captured())
    }

    /// Tokens on the board plus every reserve and capture. Constant over a game.
    pub fn token_total(&self) -> usize {
        let off_board: u32 = self.players.iter().map(|p| p.reserve() + p.captured()).sum();
        self.board.token_count() + off_board as usize
    }

    /// Checks the win lock and turn order for `id`.
    pub fn check_can_act(&self, id: PlayerId) -> Result<(), RejectReason> {
        if self.config.lock_on_win && matches!(self.status, GameStatus::Won(_)) {
            return Err(RejectReason::GameOver);
        }
        if !self.turn.allows(id) {
            return Err(RejectReason::OutOfTurn);
        }
        Ok(())
    }

    /// Moves the top `distance` tokens at `source` onto `dest`.
    pub fn move_piece(&mut self, name: &str, source: Coord, dest: Coord, distance: usize) -> Outcome {
        let result = self.try_move(name, source, dest, distance);
        self.report(name, result)
    }

    /// Places one of `name`'s reserve tokens on `dest`.
    pub fn reserved_move(&mut self, name: &str, dest: Coord) -> Outcome {
        let result = self.try_reserve(name, dest);
        self.report(name, result)
    }

    /// Dispatches a `Move` value to the matching command.
    pub fn apply(&mut self, name: &str, mv: Move) -> Outcome {
        match mv {
            Move::Stack { from, to, count } => self.move_piece(name, from, to, count),
            Move::Reserve { to } => self.reserved_move(name, to),
        }
    }

    fn try_move(
        &mut self,
        name: &str,
        source: Coord,
        dest: Coord,
        distance: usize,
    ) -> Result<Outcome, RejectReason> {
        let id = self.player_id(name).ok_or(RejectReason::UnknownPlayer)?;
        self.check_can_act(id)?;
        let color = self.player(id).color();
        check_move(&self.board, color, source, dest, distance, self.config.distance_rule)?;

        let run = self.board.remove_top_run(source, distance)?;
        self.board.append_tokens(dest, &run)?;
        self.finish(id, dest)
    }

    fn try_reserve(&mut self, name: &str, dest: Coord) -> Result<Outcome, RejectReason> {
        let id = self.player_id(name).ok_or(RejectReason::UnknownPlayer)?;
        self.check_can_act(id)?;
        if self.player(id).reserve() < 1 {
            return Err(RejectReason::NoReserve);
        }
        if !dest.in_bounds() {
            return Err(RejectReason::OutOfBounds);
        }

        let player = &mut self.players[id.index()];
        player.take_reserve();
        let color = player.color();
        self.board.append_tokens(dest, &[color])?;
        self.finish(id, dest)
    }

    /// Overflow resolution, turn hand-off and win detection for a command
    /// that has already landed its tokens on `dest`.
    fn finish(&mut self, id: PlayerId, dest: Coord) -> Result<Outcome, RejectReason> {
        let player = &mut self.players[id.index()];
        let report = resolve_overflow(&mut self.board, player, dest)?;
        if report.removed() > 0 {
            debug!(
                player = player.name(),
                %dest,
                reserved = report.reserved,
                captured = report.captured,
                "overflow resolved"
            );
        }

        self.turn = Turn::Player(id.opponent());

        if player.captured() > WIN_CAPTURE_THRESHOLD {
            self.status = GameStatus::Won(id);
            info!(player = player.name(), captured = player.captured(), "game won");
            return Ok(Outcome::Win(player.name().to_string()));
        }
        Ok(Outcome::Success)
    }

    fn report(&self, name: &str, result: Result<Outcome, RejectReason>) -> Outcome {
        match result {
            Ok(outcome) => outcome,
            Err(reason) => {
                debug!(player = name, %reason, "command rejected");
                Outcome::Rejected(reason)
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let board = (0..BOARD_SIZE)
            .map(|row| {
                (0..BOARD_SIZE)
                    .map(|col| self.piece_stack(Coord::new(row, col)).to_vec())
                    .collect()
            })
            .collect();
        Snapshot {
            board,
            players: self.players.to_vec(),
            turn: self.turn,
            status: self.status,
            config: self.config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::DistanceRule;

    const R: Color = Color('R');
    const G: Color = Color('G');

    fn game() -> Game {
        Game::new(("A", R), ("B", G)).unwrap()
    }

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn setup_rejects_shared_color_or_name() {
        assert_eq!(
            Game::new(("A", R), ("B", R)).unwrap_err(),
            SetupError::SameColor(R)
        );
        assert_eq!(
            Game::new(("A", R), ("A", G)).unwrap_err(),
            SetupError::SameName("A".into())
        );
        assert_eq!(
            Game::new(("A", Color('.')), ("B", G)).unwrap_err(),
            SetupError::InvalidColor(Color('.'))
        );
        assert_eq!(
            Game::new(("A", R), ("B", Color('-'))).unwrap_err(),
            SetupError::InvalidColor(Color('-'))
        );
    }

    #[test]
    fn fresh_game_state() {
        let g = game();
        assert_eq!(g.turn(), Turn::Unset);
        assert_eq!(g.status(), GameStatus::InProgress);
        assert_eq!(g.reserve_count("A"), Some(0));
        assert_eq!(g.capture_count("B"), Some(0));
        assert_eq!(g.reserve_count("nobody"), None);
        assert_eq!(g.token_total(), 36);
        assert_eq!(g.piece_stack(c(0, 0)), &[R]);
        assert_eq!(g.piece_stack(c(0, 2)), &[G]);
        assert!(g.piece_stack(c(9, 9)).is_empty());
    }

    #[test]
    fn first_move_then_turn_passes() {
        let mut g = game();
        assert_eq!(g.move_piece("A", c(0, 0), c(0, 1), 1), Outcome::Success);
        assert_eq!(g.piece_stack(c(0, 1)), &[R, R]);
        assert!(g.piece_stack(c(0, 0)).is_empty());
        assert_eq!(g.turn(), Turn::Player(PlayerId::B));

        assert_eq!(
            g.move_piece("A", c(2, 0), c(2, 1), 1),
            Outcome::Rejected(RejectReason::OutOfTurn)
        );
        assert_eq!(
            g.move_piece("B", c(0, 0), c(0, 1), 1),
            Outcome::Rejected(RejectReason::InsufficientPieces)
        );
        assert_eq!(g.turn(), Turn::Player(PlayerId::B));
    }

    #[test]
    fn second_player_may_open() {
        let mut g = game();
        assert_eq!(g.move_piece("B", c(0, 2), c(0, 1), 1), Outcome::Success);
        assert_eq!(g.turn(), Turn::Player(PlayerId::A));
        assert_eq!(g.piece_stack(c(0, 1)), &[R, G]);
    }

    #[test]
    fn unknown_player_rejected() {
        let mut g = game();
        assert_eq!(
            g.move_piece("C", c(0, 0), c(0, 1), 1),
            Outcome::Rejected(RejectReason::UnknownPlayer)
        );
        assert_eq!(
            g.reserved_move("C", c(0, 0)),
            Outcome::Rejected(RejectReason::UnknownPlayer)
        );
    }

    #[test]
    fn reserve_requires_tokens_then_bounds() {
        let mut g = game();
        let before = g.clone();
        assert_eq!(
            g.reserved_move("A", c(9, 9)),
            Outcome::Rejected(RejectReason::NoReserve)
        );
        assert_eq!(g, before);

        g.players[0].add_reserve(1);
        let before = g.clone();
        for _ in 0..2 {
            assert_eq!(
                g.reserved_move("A", c(9, 9)),
                Outcome::Rejected(RejectReason::OutOfBounds)
            );
        }
        assert_eq!(g, before);
        assert_eq!(g.reserve_count("A"), Some(1));
        assert_eq!(g.reserved_move("A", c(0, 2)), Outcome::Success);
        assert_eq!(g.piece_stack(c(0, 2)), &[G, R]);
        assert_eq!(g.reserve_count("A"), Some(0));
        assert_eq!(g.turn(), Turn::Player(PlayerId::B));

        g.players[0].add_reserve(1);
        let before = g.clone();
        assert_eq!(
            g.reserved_move("A", c(0, 0)),
            Outcome::Rejected(RejectReason::OutOfTurn)
        );
        assert_eq!(g, before);
    }

    #[test]
    fn rejection_leaves_game_unchanged() {
        let mut g = game();
        g.move_piece("A", c(0, 0), c(0, 1), 1);
        let before = g.clone();
        for _ in 0..2 {
            assert_eq!(
                g.move_piece("B", c(0, 2), c(1, 3), 1),
                Outcome::Rejected(RejectReason::DiagonalOrNullMove)
            );
        }
        assert_eq!(g, before);
    }

    #[test]
    fn overflow_credits_mover_and_flips_turn() {
        let mut g = game();
        g.board.append_tokens(c(3, 3), &[G, R, G, R]).unwrap();
        g.board.append_tokens(c(3, 2), &[R]).unwrap();
        // (3,3) holds R G R G R; dropping two more overflows by two.
        assert_eq!(g.move_piece("A", c(3, 2), c(3, 3), 2), Outcome::Success);
        assert_eq!(g.piece_stack(c(3, 3)).len(), 5);
        assert_eq!(g.reserve_count("A"), Some(1));
        assert_eq!(g.capture_count("A"), Some(1));
        assert_eq!(g.token_total(), 41);
    }

    #[test]
    fn win_is_reported_but_game_stays_open() {
        let mut g = game();
        g.players[0].add_captured(5);
        g.board.append_tokens(c(4, 3), &[G, G, G, G]).unwrap();
        assert_eq!(g.move_piece("A", c(4, 4), c(4, 3), 1), Outcome::Win("A".into()));
        assert_eq!(g.status(), GameStatus::Won(PlayerId::A));
        assert_eq!(g.turn(), Turn::Player(PlayerId::B));
        assert_eq!(g.move_piece("B", c(5, 0), c(4, 0), 1), Outcome::Success);
    }

    #[test]
    fn lock_on_win_rejects_later_commands() {
        let cfg = RulesConfig::new().with_lock_on_win(true);
        let mut g = Game::with_config(("A", R), ("B", G), cfg).unwrap();
        g.players[0].add_captured(5);
        g.board.append_tokens(c(4, 3), &[G, G, G, G]).unwrap();
        assert_eq!(g.move_piece("A", c(4, 4), c(4, 3), 1), Outcome::Win("A".into()));
        assert_eq!(
            g.move_piece("B", c(5, 0), c(4, 0), 1),
            Outcome::Rejected(RejectReason::GameOver)
        );
    }

    #[test]
    fn exact_distance_rule_is_honoured() {
        let cfg = RulesConfig::new().with_distance_rule(DistanceRule::Exact);
        let mut g = Game::with_config(("A", R), ("B", G), cfg).unwrap();
        assert_eq!(
            g.move_piece("A", c(0, 0), c(0, 1), 2),
            Outcome::Rejected(RejectReason::DistanceMismatch)
        );
        assert_eq!(g.move_piece("A", c(0, 0), c(0, 1), 1), Outcome::Success);
    }

    #[test]
    fn apply_dispatches() {
        let mut g = game();
        let mv = Move::Stack { from: c(1, 2), to: c(1, 1), count: 1 };
        assert_eq!(g.apply("A", mv), Outcome::Success);
        assert_eq!(g.piece_stack(c(1, 1)), &[G, R]);
    }

    #[test]
    fn snapshot_serializes() {
        let g = game();
        let snap = g.snapshot();
        assert_eq!(snap.board.len(), 6);
        assert_eq!(snap.board[1][0], vec![G]);
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains(r#""turn":"Unset""#));
        assert!(json.contains(r#""status":"InProgress""#));
    }
}
