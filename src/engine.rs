//! Protocol session state.
//!
//! Holds the current game (if any) and the rule options that will apply to
//! the next `newgame`, and answers protocol commands by writing response
//! lines to the given output.

use std::io::{self, Write};

use tracing::{info, warn};

use crate::board::{Color, Coord};
use crate::game::Game;
use crate::movegen::legal_moves;
use crate::protocol::{format_board, format_outcome, format_stack, Command};
use crate::rules::{DistanceRule, Move, RulesConfig};

/// Whether the main loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Holds the mutable state of a protocol session between commands.
#[derive(Debug, Default)]
pub struct Engine {
    pub game: Option<Game>,
    pub options: RulesConfig,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one parsed command, writing its response to `out`.
    pub fn dispatch<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<Flow> {
        match cmd {
            Command::IsReady => writeln!(out, "readyok")?,
            Command::NewGame { first, second } => self.handle_newgame(first, second, out)?,
            Command::SetOption { name, value } => self.set_option(&name, value.as_deref()),
            Command::Play { player, mv } => self.handle_play(&player, mv, out)?,
            Command::ShowStack { coord } => self.handle_stack(coord, out)?,
            Command::ShowReserve { player } => {
                self.handle_count(&player, out, |g, name| g.reserve_count(name))?
            }
            Command::ShowCaptured { player } => {
                self.handle_count(&player, out, |g, name| g.capture_count(name))?
            }
            Command::ShowBoard => self.handle_board(out)?,
            Command::Json => self.handle_json(out)?,
            Command::ListMoves { player } => self.handle_moves(&player, out)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        out.flush()?;
        Ok(Flow::Continue)
    }

    /// Applies `setoption`. Unknown names and bad values are logged and
    /// ignored.
    pub fn set_option(&mut self, name: &str, value: Option<&str>) {
        match (name, value) {
            ("DistanceRule", Some(v)) => match DistanceRule::from_option(v) {
                Some(rule) => self.options.distance_rule = rule,
                None => warn!("invalid DistanceRule value: '{}'", v),
            },
            ("LockOnWin", None) => self.options.lock_on_win = true,
            ("LockOnWin", Some(v)) => match v.parse::<bool>() {
                Ok(lock) => self.options.lock_on_win = lock,
                Err(_) => warn!("invalid LockOnWin value: '{}'", v),
            },
            _ => warn!("unknown option: '{}'", name),
        }
    }

    fn handle_newgame<W: Write>(
        &mut self,
        first: (String, Color),
        second: (String, Color),
        out: &mut W,
    ) -> io::Result<()> {
        match Game::with_config(first, second, self.options) {
            Ok(game) => {
                info!(config = ?self.options, "new game");
                self.game = Some(game);
                writeln!(out, "ok")
            }
            Err(e) => writeln!(out, "error {}", e),
        }
    }

    fn handle_play<W: Write>(&mut self, player: &str, mv: Move, out: &mut W) -> io::Result<()> {
        let Some(game) = self.game.as_mut() else {
            return writeln!(out, "error no game");
        };
        let outcome = game.apply(player, mv);
        writeln!(out, "{}", format_outcome(&outcome))
    }

    fn handle_stack<W: Write>(&self, coord: Coord, out: &mut W) -> io::Result<()> {
        let Some(game) = self.game.as_ref() else {
            return writeln!(out, "error no game");
        };
        writeln!(out, "{}", format_stack(game.piece_stack(coord)))
    }

    fn handle_count<W: Write>(
        &self,
        player: &str,
        out: &mut W,
        count: impl Fn(&Game, &str) -> Option<u32>,
    ) -> io::Result<()> {
        let Some(game) = self.game.as_ref() else {
            return writeln!(out, "error no game");
        };
        match count(game, player) {
            Some(n) => writeln!(out, "{}", n),
            None => writeln!(out, "error unknown player {}", player),
        }
    }

    fn handle_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let Some(game) = self.game.as_ref() else {
            return writeln!(out, "error no game");
        };
        for line in format_board(game) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    fn handle_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let Some(game) = self.game.as_ref() else {
            return writeln!(out, "error no game");
        };
        let json = serde_json::to_string(&game.snapshot()).map_err(io::Error::other)?;
        writeln!(out, "{}", json)
    }

    fn handle_moves<W: Write>(&self, player: &str, out: &mut W) -> io::Result<()> {
        let Some(game) = self.game.as_ref() else {
            return writeln!(out, "error no game");
        };
        let Some(id) = game.player_id(player) else {
            return writeln!(out, "error unknown player {}", player);
        };
        for mv in legal_moves(game, id) {
            match mv {
                Move::Stack { from, to, count } => {
                    writeln!(out, "move {} {} {} {}", player, from, to, count)?
                }
                Move::Reserve { to } => writeln!(out, "reserve {} {}", player, to)?,
            }
        }
        writeln!(out, "end")
    }
}
