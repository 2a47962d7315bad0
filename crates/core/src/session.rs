//! Session module - one player's game around the pure engine
//!
//! The session owns the current grid, the cumulative score, the best score and
//! the lifecycle phase. It feeds every move through [`apply_move`] and keeps
//! the returned grid, so the engine itself never holds state.

use crate::engine::{apply_move, has_available_move, initialize};
use crate::grid::{validate_winning_value, Grid, GridError, Tile};
use crate::rng::TileRng;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction, GamePhase, DEFAULT_GRID_SIZE, DEFAULT_WINNING_VALUE};

/// Board size and winning threshold, validated together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rules {
    size: usize,
    winning_value: Tile,
}

impl Rules {
    pub fn new(size: usize, winning_value: Tile) -> Result<Self, GridError> {
        Grid::new(size)?;
        validate_winning_value(winning_value)?;
        Ok(Self {
            size,
            winning_value,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn winning_value(&self) -> Tile {
        self.winning_value
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            winning_value: DEFAULT_WINNING_VALUE,
        }
    }
}

/// What a successful move did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSummary {
    pub direction: Direction,
    pub score_delta: u64,
    pub reached_winning_value: bool,
    pub game_over: bool,
    /// The move pushed the score past the previous best
    pub new_high_score: bool,
}

/// Result of [`GameSession::apply_action`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Action does not apply in the current state
    Ignored,
    Started,
    Restarted,
    Moved(MoveSummary),
    /// A move was requested but nothing could slide or merge
    NoMove,
    /// Win banner dismissed
    Continued,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameSession<R: TileRng> {
    rules: Rules,
    rng: R,
    grid: Grid,
    phase: GamePhase,
    score: u64,
    high_score: u64,
    /// Best score when the current game began (to report a new record once).
    high_score_at_start: u64,
    /// Win banner is covering the board
    win_pending: bool,
    moves: u32,
    /// Increments on every restart
    episode_id: u32,
}

impl<R: TileRng> GameSession<R> {
    /// Create a session in the Ready phase with a freshly seeded board
    pub fn new(rules: Rules, mut rng: R, high_score: u64) -> Result<Self, GridError> {
        let grid = initialize(rules.size, rules.winning_value, &mut rng)?;
        Ok(Self {
            rules,
            rng,
            grid,
            phase: GamePhase::Ready,
            score: 0,
            high_score,
            high_score_at_start: high_score,
            win_pending: false,
            moves: 0,
            episode_id: 0,
        })
    }

    /// Enter Playing from Ready. Returns false in any other phase.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Ready {
            return false;
        }
        self.phase = GamePhase::Playing;
        log::info!("game {} started", self.episode_id);
        true
    }

    /// Discard the current board and play a new one immediately
    pub fn restart(&mut self) {
        match initialize(self.rules.size, self.rules.winning_value, &mut self.rng) {
            Ok(grid) => self.grid = grid,
            // Unreachable for rules accepted by `Rules::new`.
            Err(e) => {
                log::error!("cannot seed a new board: {}", e);
                return;
            }
        }
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.high_score_at_start = self.high_score;
        self.win_pending = false;
        self.moves = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        log::info!("game {} started (restart)", self.episode_id);
    }

    /// Dismiss the win banner. Returns false if none was shown.
    pub fn dismiss_win(&mut self) -> bool {
        std::mem::replace(&mut self.win_pending, false)
    }

    /// Slide toward `direction`. Returns `None` if the move is not accepted
    /// (wrong phase, win banner up) or did not change the board.
    pub fn apply_direction(&mut self, direction: Direction) -> Option<MoveSummary> {
        if self.phase != GamePhase::Playing || self.win_pending {
            return None;
        }

        let result = apply_move(&self.grid, direction, self.rules.winning_value, &mut self.rng);
        if !result.did_move {
            log::debug!("move {} changed nothing", direction.as_str());
            return None;
        }

        self.grid = result.grid;
        self.score += result.score;
        self.moves += 1;

        let new_high_score = self.score > self.high_score;
        if new_high_score {
            self.high_score = self.score;
        }

        if result.reached_winning_value {
            self.win_pending = true;
            log::info!(
                "reached {} after {} moves (score {})",
                self.rules.winning_value,
                self.moves,
                self.score
            );
        }

        let game_over = !has_available_move(&self.grid);
        if game_over {
            self.phase = GamePhase::GameOver;
            // The banner would hide the final board.
            self.win_pending = false;
            log::info!(
                "game {} over: score {}, best tile {}, {} moves",
                self.episode_id,
                self.score,
                self.grid.max_tile(),
                self.moves
            );
        }

        log::debug!(
            "move {} +{} score={} spawned={:?}",
            direction.as_str(),
            result.score,
            self.score,
            result.spawned
        );

        Some(MoveSummary {
            direction,
            score_delta: result.score,
            reached_winning_value: result.reached_winning_value,
            game_over,
            new_high_score,
        })
    }

    /// Apply a high-level action
    pub fn apply_action(&mut self, action: GameAction) -> ActionOutcome {
        match action {
            GameAction::Move(direction) => {
                if self.phase != GamePhase::Playing || self.win_pending {
                    return ActionOutcome::Ignored;
                }
                match self.apply_direction(direction) {
                    Some(summary) => ActionOutcome::Moved(summary),
                    None => ActionOutcome::NoMove,
                }
            }
            GameAction::Confirm => {
                if self.win_pending {
                    self.dismiss_win();
                    return ActionOutcome::Continued;
                }
                match self.phase {
                    GamePhase::Ready => {
                        self.start();
                        ActionOutcome::Started
                    }
                    GamePhase::GameOver => {
                        self.restart();
                        ActionOutcome::Restarted
                    }
                    GamePhase::Playing => ActionOutcome::Ignored,
                }
            }
            GameAction::Restart => {
                self.restart();
                ActionOutcome::Restarted
            }
            GameAction::Continue => {
                if self.dismiss_win() {
                    ActionOutcome::Continued
                } else {
                    ActionOutcome::Ignored
                }
            }
        }
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    /// The current game has beaten the best score it started against
    pub fn is_new_high_score(&self) -> bool {
        self.score > 0 && self.score > self.high_score_at_start
    }

    pub fn win_pending(&self) -> bool {
        self.win_pending
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Copy the view-facing state into `out`, reusing its allocation
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.size = self.grid.size();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.phase = self.phase;
        out.score = self.score;
        out.high_score = self.high_score;
        out.new_high_score = self.is_new_high_score();
        out.win_pending = self.win_pending;
        out.winning_value = self.rules.winning_value;
        out.moves = self.moves;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
