//! Interactive piece-supply simulator (default binary).
//!
//! Menu-driven loop over the session: render both containers, read a
//! choice from stdin, apply it, show the outcome, repeat. All game
//! logic lives in the library; this file only does terminal I/O.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::{
    cursor,
    terminal::{Clear, ClearType},
};

use tetris_stack::term::{format_outcome, format_queue, format_stack, MENU};
use tetris_stack::types::Command;
use tetris_stack::{Outcome, Session};

fn main() -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(1);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    run(&mut input, &mut out, seed)
}

fn run(input: &mut impl BufRead, out: &mut impl Write, seed: u32) -> Result<()> {
    let mut session = Session::new(seed);

    loop {
        crossterm::execute!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

        writeln!(out, "--- Tetris Stack Control ---")?;
        write!(out, "{}", format_queue(session.queue()))?;
        write!(out, "{}", format_stack(session.stack()))?;
        write!(out, "{}", MENU)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // stdin closed; treat like quitting.
            return Ok(());
        }

        let outcome = session.apply(Command::from_menu_choice(&line));
        writeln!(out, "\n{}", format_outcome(&outcome))?;

        if outcome == Outcome::Quit {
            return Ok(());
        }

        write!(out, "\nPress Enter to continue...")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
    }
}
