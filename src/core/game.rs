//! Game state and turn control

use super::{
    board::Board,
    error::{ConfigFault, MoveFault},
    loc::Loc,
    side::Side,
};

/// Static game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Search depth in plies, always within `MIN_LEVEL..=MAX_LEVEL`
    level: usize,
    /// Side that opens new games
    pub first_side: Side,
}

impl GameConfig {
    pub const DEFAULT_LEVEL: usize = 3;
    pub const MIN_LEVEL: usize = 1;
    pub const MAX_LEVEL: usize = 5;

    pub fn new(level: usize, first_side: Side) -> Result<Self, ConfigFault> {
        let mut config = Self { first_side, ..Self::default() };
        config.set_level(level as i64)?;
        Ok(config)
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn set_level(&mut self, level: i64) -> Result<(), ConfigFault> {
        if level < Self::MIN_LEVEL as i64 || level > Self::MAX_LEVEL as i64 {
            return Err(ConfigFault::LevelOutOfRange {
                level,
                min: Self::MIN_LEVEL,
                max: Self::MAX_LEVEL,
            });
        }

        self.level = level as usize;
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            level: Self::DEFAULT_LEVEL,
            first_side: Side::Human,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Running,
    Over,
}

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Side),
    Draw,
}

/// State of a Reversi game.
///
/// A value type: moves return a new state and never touch `self`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    pub first_side: Side,
    /// The side whose turn it is by alternation; `next` resolves passes
    pub side_to_move: Side,
    pub status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Side::Human)
    }
}

impl GameState {
    /// Fresh game with the four seed tiles
    pub fn new(first_side: Side) -> Self {
        Self::from_parts(Board::start(first_side), first_side, first_side)
    }

    /// Assemble a state from its parts, deriving the status
    pub fn from_parts(board: Board, first_side: Side, side_to_move: Side) -> Self {
        let status = if board.has_move(Side::Human) || board.has_move(Side::Machine) {
            GameStatus::Running
        } else {
            GameStatus::Over
        };

        Self {
            board,
            first_side,
            side_to_move,
            status,
        }
    }

    /// State reached after `mover` produced `board`
    pub fn after(&self, board: Board, mover: Side) -> Self {
        Self::from_parts(board, self.first_side, !mover)
    }

    /// Same board, turn handed to `side`
    pub fn with_turn(&self, side: Side) -> Self {
        Self {
            side_to_move: side,
            ..*self
        }
    }

    /// The side that must move now, or `None` once nobody can.
    ///
    /// Priority: the opening position always belongs to the first side;
    /// then the side whose turn it is if it can play; then the other side
    /// if it can play.
    pub fn next(&self) -> Option<Side> {
        if self.status == GameStatus::Over {
            return None;
        }

        if self.board.occupied() == 4 {
            return Some(self.first_side);
        }

        let configured = self.side_to_move;
        let other = !configured;

        if self.board.has_move(configured) {
            Some(configured)
        } else if self.board.has_move(other) {
            Some(other)
        } else {
            None
        }
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    /// Winner by tile count, `None` while the game is running
    pub fn winner(&self) -> Option<Outcome> {
        if !self.game_over() {
            return None;
        }

        let human = self.tile_count(Side::Human);
        let machine = self.tile_count(Side::Machine);

        Some(match human.cmp(&machine) {
            std::cmp::Ordering::Greater => Outcome::Winner(Side::Human),
            std::cmp::Ordering::Less => Outcome::Winner(Side::Machine),
            std::cmp::Ordering::Equal => Outcome::Draw,
        })
    }

    pub fn tile_count(&self, side: Side) -> usize {
        self.board.tile_count(side)
    }

    pub fn slot_owner(&self, loc: Loc) -> Option<Side> {
        self.board.get(loc)
    }

    pub fn legal_move(&self, loc: Loc, side: Side) -> bool {
        self.board.legal_move(loc, side)
    }

    /// Fails unless `side` is the one that must move now
    pub fn ensure_turn(&self, side: Side) -> Result<(), MoveFault> {
        match self.next() {
            None => Err(MoveFault::GameOver),
            Some(to_move) if to_move != side => Err(MoveFault::NotYourTurn { side }),
            Some(_) => Ok(()),
        }
    }

    /// Fails unless the machine may be asked for a move: it is the machine's
    /// turn by alternation, or the human is forced to pass. A machine with no
    /// placement on its own turn is not a fault; it passes.
    pub fn ensure_machine_turn(&self) -> Result<(), MoveFault> {
        if self.game_over() {
            return Err(MoveFault::GameOver);
        }

        if self.side_to_move != Side::Machine && self.next() != Some(Side::Machine) {
            return Err(MoveFault::NotYourTurn { side: Side::Machine });
        }

        Ok(())
    }

    /// Human move on `loc`.
    ///
    /// Out of turn or after the game is over this is a fault. A cell that
    /// is off the board, occupied or captures nothing yields `Ok(None)`.
    pub fn play(&self, loc: Loc) -> Result<Option<GameState>, MoveFault> {
        self.ensure_turn(Side::Human)?;

        Ok(self.board
            .try_move(loc, Side::Human)
            .map(|board| self.after(board, Side::Human)))
    }
}
