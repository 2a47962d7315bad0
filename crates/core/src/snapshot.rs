use crate::grid::Tile;
use crate::types::{GamePhase, DEFAULT_GRID_SIZE, DEFAULT_WINNING_VALUE};

/// View-facing copy of a session
///
/// Renderers read this instead of the live session so they can be tested
/// against hand-built states.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub size: usize,
    /// Row-major tile values, `size * size` long
    pub cells: Vec<Tile>,
    pub phase: GamePhase,
    pub score: u64,
    pub high_score: u64,
    pub new_high_score: bool,
    pub win_pending: bool,
    pub winning_value: Tile,
    pub moves: u32,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.size = DEFAULT_GRID_SIZE;
        self.cells.clear();
        self.cells.resize(DEFAULT_GRID_SIZE * DEFAULT_GRID_SIZE, 0);
        self.phase = GamePhase::Ready;
        self.score = 0;
        self.high_score = 0;
        self.new_high_score = false;
        self.win_pending = false;
        self.winning_value = DEFAULT_WINNING_VALUE;
        self.moves = 0;
        self.episode_id = 0;
    }

    /// Tile at (row, col), 0 when out of range
    pub fn tile(&self, row: usize, col: usize) -> Tile {
        if row >= self.size || col >= self.size {
            return 0;
        }
        self.cells.get(row * self.size + col).copied().unwrap_or(0)
    }

    pub fn set_tile(&mut self, row: usize, col: usize, value: Tile) {
        if row < self.size && col < self.size {
            if let Some(cell) = self.cells.get_mut(row * self.size + col) {
                *cell = value;
            }
        }
    }

    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Playing && !self.win_pending
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            size: 0,
            cells: Vec::new(),
            phase: GamePhase::Ready,
            score: 0,
            high_score: 0,
            new_high_score: false,
            win_pending: false,
            winning_value: 0,
            moves: 0,
            episode_id: 0,
        };
        s.clear();
        s
    }
}
