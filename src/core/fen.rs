use crate::core::{Board, GameState, Side};
use anyhow::{ensure, Context, Result};

impl GameState {
    /// Convert state to FEN notation
    /// <board_fen> <side_to_move> <first_side>
    /// - Sides are written as their lowercase glyph, `x` or `o`.
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {}",
            self.board.to_fen(),
            self.side_to_move.glyph().to_ascii_lowercase(),
            self.first_side.glyph().to_ascii_lowercase(),
        )
    }

    /// Parse state from FEN notation
    /// <board_fen> [<side_to_move> [<first_side>]]
    /// - Missing sides default to the human.
    pub fn from_fen(fen: &str) -> Result<Self> {
        let mut parts = fen.split_whitespace();

        let board = Board::from_fen(parts.next().context("Missing board")?)?;

        let side_to_move = match parts.next() {
            Some(s) => s.parse::<Side>().context("Invalid side to move")?,
            None => Side::Human,
        };

        let first_side = match parts.next() {
            Some(s) => s.parse::<Side>().context("Invalid first side")?,
            None => Side::Human,
        };

        ensure!(parts.next().is_none(), "Trailing fields in FEN: {}", fen);

        Ok(GameState::from_parts(board, first_side, side_to_move))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_fen() {
        assert_eq!(GameState::new(Side::Human).to_fen(), "8/8/8/3OX3/3XO3/8/8/8 x x");
        assert_eq!(GameState::new(Side::Machine).to_fen(), "8/8/8/3XO3/3OX3/8/8/8 o o");
    }

    #[test]
    fn test_parse_fen() {
        let state = GameState::from_fen("8/8/8/3XO3/3OX3/8/8/8 o o").unwrap();
        assert_eq!(state, GameState::new(Side::Machine));

        let defaults = GameState::from_fen("8/8/8/3OX3/3XO3/8/8/8").unwrap();
        assert_eq!(defaults, GameState::new(Side::Human));

        assert!(GameState::from_fen("8/8/8/3OX3/3XO3/8/8/8 q").is_err());
        assert!(GameState::from_fen("8/8/8/3OX3/3XO3/8/8/8 x x x").is_err());
        assert!(GameState::from_fen("").is_err());
    }
}
