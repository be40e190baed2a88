use std::fmt;
use colored::Colorize;

use super::{
    board::Board,
    game::Outcome,
    loc::{Loc, BOARD_LEN},
    side::Side,
};

/// Row-major grid, `.` for empty cells, cells separated by single spaces
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_LEN as i32 {
            for col in 0..BOARD_LEN as i32 {
                if col > 0 {
                    write!(f, " ")?;
                }
                let glyph = self.get(Loc::new(row, col)).map_or('.', Side::glyph);
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Human => write!(f, "{}", "Human".bright_blue()),
            Side::Machine => write!(f, "{}", "Machine".bright_red()),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(side) => write!(f, "{} wins", side),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_board_display() {
        let expected = indoc! {"
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . O X . . .
            . . . X O . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
        "};
        assert_eq!(Board::start(Side::Human).to_string(), expected);
    }

    #[test]
    fn test_side_and_outcome() {
        // The colour override is process-wide; every check stays in this test
        colored::control::set_override(false);
        assert_eq!(Side::Machine.to_string(), "Machine");
        assert_eq!(Outcome::Winner(Side::Human).to_string(), "Human wins");
        assert_eq!(Outcome::Draw.to_string(), "Draw");

        let fault = crate::core::MoveFault::NotYourTurn { side: Side::Human };
        assert_eq!(fault.to_string(), "Wait for your enemy's turn: Human is not to move");

        colored::control::set_override(true);
        assert_eq!(Side::Human.to_string(), "Human".bright_blue().to_string());
        assert_ne!(Side::Machine.to_string(), "Machine");

        colored::control::unset_override();
    }
}
