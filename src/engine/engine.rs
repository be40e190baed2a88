use crate::ai::{apply_result, SearchResult};
use crate::core::{GameConfig, GameState, Loc, Outcome, Side};
use crate::heuristics::{PositionalHeuristic, RandomHeuristic};

use super::options::{EngineOptions, HeuristicType};
use super::search::timed_search;

use anyhow::Result;
use tracing::{debug, info};

/// Engine owns the configuration and the current game, and plays the machine side
pub struct Engine {
    pub config: GameConfig,
    pub state: GameState,
    pub options: EngineOptions,
    random: RandomHeuristic,
}

impl Engine {
    /// Create an engine with a fresh game under `config`
    pub fn new(config: &GameConfig) -> Self {
        Self {
            config: *config,
            state: GameState::new(config.first_side),
            options: EngineOptions::default(),
            random: RandomHeuristic::new(),
        }
    }

    /// Replace the current game, e.g. with a position loaded from a FEN
    pub fn set_game(&mut self, state: GameState) {
        self.config.first_side = state.first_side;
        self.state = state;
    }

    /// Restart with the configured first side. When the machine opens, its
    /// first move is played right away.
    pub fn new_game(&mut self) -> Result<Option<SearchResult>> {
        self.state = GameState::new(self.config.first_side);
        info!(first = ?self.config.first_side, level = self.config.level(), "new game");

        if self.state.next() == Some(Side::Machine) {
            return self.machine_move().map(Some);
        }
        Ok(None)
    }

    /// Hand the opening move to the other side and restart
    pub fn switch_sides(&mut self) -> Result<Option<SearchResult>> {
        self.config.first_side = !self.config.first_side;
        self.new_game()
    }

    pub fn set_level(&mut self, level: i64) -> Result<()> {
        self.config.set_level(level)?;
        debug!(level, "level set");
        Ok(())
    }

    /// Set an engine option; `level` is routed to the game configuration
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        if name.eq_ignore_ascii_case("level") {
            return self.set_level(value.parse()?);
        }
        self.options.set_option(name, value)
    }

    pub fn next(&self) -> Option<Side> {
        self.state.next()
    }

    pub fn game_over(&self) -> bool {
        self.state.game_over()
    }

    pub fn winner(&self) -> Option<Outcome> {
        self.state.winner()
    }

    /// Human move. `Ok(false)` when the cell cannot be played; the game is
    /// left untouched in that case.
    pub fn play(&mut self, loc: Loc) -> Result<bool> {
        match self.state.play(loc)? {
            Some(state) => {
                debug!(%loc, "human move");
                self.state = state;
                self.log_outcome();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Search and play the machine's move. A machine without a placement
    /// passes: the result has no move and the turn goes to the human.
    pub fn machine_move(&mut self) -> Result<SearchResult> {
        self.state.ensure_machine_turn()?;

        let level = self.config.level();
        let (result, _) = match self.options.heuristic {
            HeuristicType::Positional => timed_search(&self.state, level, &mut PositionalHeuristic),
            HeuristicType::Random => timed_search(&self.state, level, &mut self.random),
        };

        self.state = apply_result(&self.state, &result);
        if result.best_move.is_none() {
            debug!("machine passes");
        }
        self.log_outcome();
        Ok(result)
    }

    fn log_outcome(&self) {
        if let Some(outcome) = self.winner() {
            info!(
                %outcome,
                human = self.state.tile_count(Side::Human),
                machine = self.state.tile_count(Side::Machine),
                "game over"
            );
        }
    }

    pub fn get_fen(&self) -> String {
        self.state.to_fen()
    }
}
