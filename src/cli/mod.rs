//! Interactive command shell over a [`Game`].
//!
//! The shell reads one command per line and writes human-readable output.
//! It is generic over its input and output so it can run against stdin and
//! stdout or against in-memory buffers.

use std::io::{self, BufRead, Write};

use crate::board::Color;
use crate::game::{Game, GameStatus, PlayerKind};
use crate::player::RandomMover;

pub mod command;

pub use command::{parse_shell_command, AiSides, ShellCommand};

const HELP: &str = "\
Commands:
  help
  startpos
  board
  fen
  setfen <fen...>
  moves
  play <uci>
  undo
  status
  perft <depth>
  divide <depth>
  ai <white|black|both|none>
  quit";

/// Whether the read loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    game: Game,
    seed: u64,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(0x5eed)
    }

    /// Seed used for the computer players, so sessions can be replayed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Shell {
            game: Game::new(),
            seed,
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the read loop until `quit` or end of input.
    ///
    /// With `interactive` set, a banner, the board and a `> ` prompt are
    /// printed as a terminal user expects.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
        interactive: bool,
    ) -> io::Result<()> {
        if interactive {
            writeln!(out, "Chess CLI (type 'help')")?;
            self.print_position(out)?;
            write!(out, "> ")?;
            out.flush()?;
        }

        for line in input.lines() {
            let line = line?;
            if let Some(cmd) = parse_shell_command(&line) {
                if self.execute(&cmd, out)? == Flow::Quit {
                    break;
                }
            }
            if interactive {
                write!(out, "> ")?;
            }
            out.flush()?;
        }

        Ok(())
    }

    /// Execute one command.
    pub fn execute<W: Write>(&mut self, cmd: &ShellCommand, out: &mut W) -> io::Result<Flow> {
        match cmd {
            ShellCommand::Help => writeln!(out, "{HELP}")?,
            ShellCommand::Quit => return Ok(Flow::Quit),
            ShellCommand::StartPos => {
                self.game.reset();
                self.print_position(out)?;
                self.step_computers(out)?;
            }
            ShellCommand::Board => self.print_position(out)?,
            ShellCommand::Fen => writeln!(out, "{}", self.game.fen())?,
            ShellCommand::SetFen(fen) => match self.game.set_fen(fen) {
                Ok(()) => {
                    self.print_position(out)?;
                    self.step_computers(out)?;
                }
                Err(err) => {
                    log_debug!("rejected FEN {fen:?}: {err}");
                    writeln!(out, "Invalid FEN: {err}")?;
                }
            },
            ShellCommand::Moves => {
                let moves = self.game.legal_moves();
                let listed: Vec<String> = moves.iter().map(ToString::to_string).collect();
                writeln!(out, "Legal moves ({}):", moves.len())?;
                writeln!(out, "{}", listed.join(" "))?;
            }
            ShellCommand::Play(uci) => {
                if self.game.status().is_over() {
                    writeln!(out, "Game is over.")?;
                } else if self.game.play_uci(uci).is_ok() {
                    self.print_position(out)?;
                    self.step_computers(out)?;
                } else {
                    writeln!(out, "Illegal move: {uci}")?;
                }
            }
            ShellCommand::Undo => {
                if self.game.undo().is_some() {
                    self.print_position(out)?;
                } else {
                    writeln!(out, "Nothing to undo")?;
                }
            }
            ShellCommand::Status => {
                if self.game.status() == GameStatus::Ongoing {
                    writeln!(out, "Ongoing.")?;
                }
                self.print_status(out)?;
            }
            ShellCommand::Perft(depth) => {
                let nodes = self.game.board().clone().perft(*depth);
                writeln!(out, "perft({depth}) = {nodes}")?;
            }
            ShellCommand::Divide(depth) => {
                let counts = self.game.board().clone().perft_divide(*depth);
                let mut total = 0;
                for (m, nodes) in &counts {
                    writeln!(out, "{m}: {nodes}")?;
                    total += nodes;
                }
                writeln!(out, "Total: {total}")?;
            }
            ShellCommand::Ai(sides) => {
                self.configure_computers(*sides);
                writeln!(out, "Computer plays: {}", describe(*sides))?;
                self.step_computers(out)?;
            }
            ShellCommand::Usage(usage) => writeln!(out, "Usage: {usage}")?,
            ShellCommand::Unknown(_) => writeln!(out, "Unknown command. Type 'help'.")?,
        }

        Ok(Flow::Continue)
    }

    fn configure_computers(&mut self, sides: AiSides) {
        let (white, black) = sides.sides();
        for (color, computer, offset) in [(Color::White, white, 0), (Color::Black, black, 1)] {
            if computer {
                self.game.set_player(color, PlayerKind::Computer);
                let mover = RandomMover::new(self.seed.wrapping_add(offset));
                self.game.set_supplier(color, Box::new(mover));
            } else {
                self.game.set_player(color, PlayerKind::Human);
                self.game.clear_supplier(color);
            }
        }
    }

    /// Let computer sides move until a human is to move or the game ends.
    fn step_computers<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        while !self.game.status().is_over() {
            match self.game.step_ai() {
                Ok(Some(m)) => {
                    writeln!(out, "Computer plays {m}")?;
                    self.print_position(out)?;
                }
                Ok(None) => break,
                Err(err) => {
                    writeln!(out, "Computer move rejected: {err}")?;
                    break;
                }
            }
        }
        Ok(())
    }

    fn print_position<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.game.board())?;
        self.print_status(out)
    }

    fn print_status<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let board = self.game.board();
        match self.game.status() {
            GameStatus::Checkmate => {
                writeln!(out, "Checkmate! {} is checkmated.", board.side_to_move())
            }
            GameStatus::Stalemate => writeln!(out, "Stalemate."),
            GameStatus::DrawRepetition => writeln!(out, "Draw by repetition."),
            GameStatus::DrawFiftyMove => writeln!(out, "Draw by fifty-move rule."),
            GameStatus::Ongoing if board.in_check(board.side_to_move()) => {
                writeln!(out, "Check.")
            }
            GameStatus::Ongoing => Ok(()),
        }
    }
}

fn describe(sides: AiSides) -> &'static str {
    match sides {
        AiSides::White => "white",
        AiSides::Black => "black",
        AiSides::Both => "both",
        AiSides::None => "none",
    }
}
