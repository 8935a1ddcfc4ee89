//! Plain text front end
//!
//! Reads keys from any `BufRead` and writes the narration to any `Write`.
//! Every non-blank character on an input line is one command, so `eed`
//! walks left, left, then right. Text after an `s` on the same line is taken
//! as the accused name, so `s Mordomo` stops and accuses in one go.

use crate::game::{Command, Game, TurnOutcome, Verdict};
use crate::Result;
use std::io::{BufRead, Write};

/// Play `game` to the end. Returns the verdict, or `None` if the input ran
/// out before an accusation was made.
pub fn run<R: BufRead, W: Write>(game: &mut Game, mut input: R, out: &mut W) -> Result<Option<Verdict>> {
    writeln!(out, "=== {} ===", game.title.to_uppercase())?;
    writeln!(out, "{}", game.synopsis)?;
    writeln!(out, "Use 'e' for left, 'd' for right, 'v' to go back, 's' to stop exploring.")?;

    let opening = game.last_outcome().clone();
    describe(game, &opening, out)?;

    let mut line = String::new();
    let mut typed_ahead = None;
    'explore: while game.is_exploring() {
        write_prompt(game, out)?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            // Out of input; stop exploring as if 's' was pressed
            game.command(Command::Quit);
            break;
        }

        for (at, key) in line.char_indices().filter(|(_, c)| !c.is_whitespace()) {
            let outcome = game.command(Command::from_key(key));
            describe(game, &outcome, out)?;
            if outcome.finished {
                let rest = line[at + key.len_utf8()..].trim();
                if !rest.is_empty() {
                    typed_ahead = Some(rest.to_string());
                }
                break 'explore;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "Exploration finished!")?;
    write_clues(game, out)?;

    let suspects = game.suspects().join(", ");
    writeln!(out)?;
    writeln!(out, "Suspects: {suspects}")?;
    write!(out, "Who is the culprit? ")?;
    out.flush()?;

    let accused = match typed_ahead {
        Some(name) => {
            writeln!(out, "{name}")?;
            name
        }
        None => {
            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return Ok(None);
            }
            line.trim_end_matches(['\n', '\r']).to_string()
        }
    };
    let verdict = game.accuse(&accused)?;

    writeln!(out)?;
    writeln!(out, "{verdict}")?;
    writeln!(out, "Thanks for playing Detective Quest!")?;
    Ok(Some(verdict))
}

fn describe<W: Write>(game: &Game, outcome: &TurnOutcome, out: &mut W) -> Result<()> {
    if let Some(rejection) = outcome.rejection {
        writeln!(out, "{rejection}")?;
        return Ok(());
    }
    if outcome.finished {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "You are in: {}", outcome.room_name)?;
    match &outcome.collected {
        Some(clue) => writeln!(out, "You found a clue: \"{clue}\"")?,
        None => writeln!(out, "No clue here.")?,
    }
    if game.paths().is_empty() {
        writeln!(out, "This room is a dead end.")?;
    }
    Ok(())
}

fn write_prompt<W: Write>(game: &Game, out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Choose a path:")?;
    for (direction, room) in game.paths() {
        writeln!(out, "  ({}) {:<5} -> {}", direction.key(), direction, room)?;
    }
    if game.depth() > 0 {
        writeln!(out, "  (v) back")?;
    }
    writeln!(out, "  (s) stop exploring")?;
    write!(out, "Your choice: ")?;
    out.flush()?;
    Ok(())
}

fn write_clues<W: Write>(game: &Game, out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "=== COLLECTED CLUES ===")?;
    if game.clues().is_empty() {
        writeln!(out, "No clues were collected.")?;
    }
    for clue in game.clues() {
        writeln!(out, "- {clue}")?;
    }
    Ok(())
}
