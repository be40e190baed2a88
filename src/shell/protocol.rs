//! Shell protocol implementation

use std::io::Write;

use anyhow::{ensure, Result};
use indoc::indoc;
use tracing::debug;

use crate::core::{Loc, Outcome, Side, BOARD_LEN};
use crate::engine::Engine;

use super::command::Command;

pub const HELP: &str = indoc! {"
    NEW              start a new game
    MOVE row col     place a tile; rows and columns count from 1 at the top left
    LEVEL i          set the search depth, 1 is the easiest and 5 the hardest
    SWITCH           hand the first move to the other side and start a new game
    PRINT            show the board
    HELP             show this help
    QUIT             leave the program
"};

/// Whether the shell keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Handle a shell command, writing replies to `out`
pub fn handle_command<W: Write>(cmd: &Command, engine: &mut Engine, out: &mut W) -> Result<Flow> {
    match *cmd {
        Command::New => {
            engine.new_game()?;
        }
        Command::Move { row, col } => {
            play_round(row, col, engine, out)?;
        }
        Command::Level(level) => {
            engine.set_level(level)?;
        }
        Command::Switch => {
            engine.switch_sides()?;
        }
        Command::Print => {
            write!(out, "{}", engine.state.board)?;
        }
        Command::Help => {
            write!(out, "{}", HELP)?;
        }
        Command::Quit => {
            return Ok(Flow::Quit);
        }
    }

    Ok(Flow::Continue)
}

/// One human move followed by the machine's reply, with passes resolved
fn play_round<W: Write>(row: i64, col: i64, engine: &mut Engine, out: &mut W) -> Result<()> {
    if engine.game_over() {
        return write_results(engine, out);
    }

    let len = BOARD_LEN as i64;
    ensure!(
        (1..=len).contains(&row) && (1..=len).contains(&col),
        "Row and column indices must be in the range between 1 and {}", len
    );
    let loc = Loc::new((row - 1) as i32, (col - 1) as i32);

    if engine.next() != Some(Side::Human) {
        writeln!(out, "You have to miss a turn")?;
        engine.machine_move()?;
        return write_results(engine, out);
    }

    ensure!(engine.play(loc)?, "This is not a valid move");

    match engine.next() {
        Some(Side::Machine) => {
            engine.machine_move()?;
        }
        Some(Side::Human) => {
            debug!("machine passes");
            writeln!(out, "The bot has to miss a turn")?;
        }
        None => {}
    }

    write_results(engine, out)
}

/// Announce the result once the game has ended
fn write_results<W: Write>(engine: &Engine, out: &mut W) -> Result<()> {
    match engine.winner() {
        Some(Outcome::Winner(Side::Human)) => writeln!(out, "You have won")?,
        Some(Outcome::Winner(Side::Machine)) => writeln!(out, "Machine has won")?,
        Some(Outcome::Draw) => writeln!(out, "Draw")?,
        None => {}
    }
    Ok(())
}
