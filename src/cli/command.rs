//! Shell command parsing.

/// Which sides the computer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiSides {
    White,
    Black,
    Both,
    None,
}

impl AiSides {
    fn parse(word: &str) -> Option<Self> {
        match word {
            "white" => Some(AiSides::White),
            "black" => Some(AiSides::Black),
            "both" => Some(AiSides::Both),
            "none" => Some(AiSides::None),
            _ => None,
        }
    }

    /// (white is computer, black is computer)
    #[must_use]
    pub const fn sides(self) -> (bool, bool) {
        match self {
            AiSides::White => (true, false),
            AiSides::Black => (false, true),
            AiSides::Both => (true, true),
            AiSides::None => (false, false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Help,
    StartPos,
    Board,
    Fen,
    SetFen(String),
    Moves,
    Play(String),
    Undo,
    Status,
    Perft(usize),
    Divide(usize),
    Ai(AiSides),
    Quit,
    /// Known command with missing or malformed arguments
    Usage(&'static str),
    Unknown(String),
}

pub fn parse_shell_command(line: &str) -> Option<ShellCommand> {
    let trimmed = line.trim();
    let mut parts = trimmed.split_whitespace();
    let name = parts.next()?;
    let arg = parts.next();

    let cmd = match name {
        "help" => ShellCommand::Help,
        "startpos" => ShellCommand::StartPos,
        "board" => ShellCommand::Board,
        "fen" => ShellCommand::Fen,
        "setfen" => {
            let fen = trimmed[name.len()..].trim();
            if fen.is_empty() {
                ShellCommand::Usage("setfen <fen>")
            } else {
                ShellCommand::SetFen(fen.to_string())
            }
        }
        "moves" => ShellCommand::Moves,
        "play" => match arg {
            Some(uci) => ShellCommand::Play(uci.to_string()),
            None => ShellCommand::Usage("play <uci>"),
        },
        "undo" => ShellCommand::Undo,
        "status" => ShellCommand::Status,
        "perft" => match arg.and_then(|v| v.parse::<usize>().ok()) {
            Some(depth) => ShellCommand::Perft(depth),
            None => ShellCommand::Usage("perft <depth>"),
        },
        "divide" => match arg.and_then(|v| v.parse::<usize>().ok()) {
            Some(depth) if depth > 0 => ShellCommand::Divide(depth),
            _ => ShellCommand::Usage("divide <depth>"),
        },
        "ai" => match arg.and_then(AiSides::parse) {
            Some(sides) => ShellCommand::Ai(sides),
            None => ShellCommand::Usage("ai <white|black|both|none>"),
        },
        "quit" | "exit" => ShellCommand::Quit,
        _ => ShellCommand::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}
