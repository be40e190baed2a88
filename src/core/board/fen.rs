use anyhow::{bail, ensure, Context, Result};

use crate::core::{
    loc::{Loc, BOARD_LEN},
    side::Side,
};

use super::Board;

impl Board {
    /// Convert board to FEN-like notation: eight `/`-separated rows, digits
    /// for runs of empty cells, `X`/`O` for tiles
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for row in 0..BOARD_LEN as i32 {
            let mut empty_cells = 0;
            for col in 0..BOARD_LEN as i32 {
                if let Some(side) = self.get(Loc::new(row, col)) {
                    if empty_cells > 0 {
                        fen.push_str(&empty_cells.to_string());
                        empty_cells = 0;
                    }
                    fen.push(side.glyph());
                } else {
                    empty_cells += 1;
                }
            }
            if empty_cells > 0 {
                fen.push_str(&empty_cells.to_string());
            }
            if row < (BOARD_LEN - 1) as i32 {
                fen.push('/');
            }
        }
        fen
    }

    /// Create a board from FEN-like notation
    pub fn from_fen(fen: &str) -> Result<Self> {
        let rows: Vec<_> = fen.split('/').collect();
        ensure!(rows.len() == BOARD_LEN, "Expected {} rows, got {}", BOARD_LEN, rows.len());

        let mut board = Board::empty();
        for (row, row_fen) in rows.into_iter().enumerate() {
            let mut col = 0;
            for c in row_fen.chars() {
                if let Some(digit) = c.to_digit(10) {
                    ensure!(digit >= 1, "Invalid empty run in row {}", row);
                    col += digit as usize;
                } else {
                    let side = Side::from_glyph(c)
                        .with_context(|| format!("Invalid FEN char: {}", c))?;
                    ensure!(col < BOARD_LEN, "Row {} is too long", row);
                    board.place(Loc::new(row as i32, col as i32), side);
                    col += 1;
                }
            }
            if col != BOARD_LEN {
                bail!("Row {} has {} cells", row, col);
            }
        }
        Ok(board)
    }
}
