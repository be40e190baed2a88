//! Core game representations and rules

pub mod board;
pub mod convert;
pub mod display;
pub mod error;
pub mod fen;
pub mod game;
pub mod loc;
pub mod side;

pub use board::{Bitboard, BitboardOps, Board};
pub use convert::{FromIndex, ToIndex};
pub use error::{ConfigFault, MoveFault};
pub use game::{GameConfig, GameState, GameStatus, Outcome};
pub use loc::{Dir, Loc, BOARD_LEN, BOARD_SIZE, DIRS};
pub use side::{Side, SideArray};
