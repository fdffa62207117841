use std::io::{self, Write};

use chess_rules::cli::{parse_shell_command, Shell};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut shell = Shell::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.is_empty() {
        let stdin = io::stdin();
        shell.run(stdin.lock(), &mut out, true)?;
    } else if let Some(cmd) = parse_shell_command(&args.join(" ")) {
        shell.execute(&cmd, &mut out)?;
    }

    out.flush()
}
