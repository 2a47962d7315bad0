//! Grid module - the N×N tile matrix
//!
//! The grid is a square matrix of tile values stored in a flat vector,
//! row-major order (row * size + col). `0` is an empty cell; every other value
//! is a power of two ≥ 2.
//! Coordinates: (row, col) where rows go top-to-bottom and columns left-to-right.

use thiserror::Error;

use crate::types::MIN_GRID_SIZE;

/// Value of a single cell. `0` means empty.
pub type Tile = u32;

/// Reasons a grid or rule set is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid size {size} is too small (minimum {min})", min = MIN_GRID_SIZE)]
    TooSmall { size: usize },
    #[error("row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("cell ({row}, {col}) holds {value}, which is neither empty nor a power of two >= 2")]
    InvalidTile { row: usize, col: usize, value: Tile },
    #[error("winning value {0} must be a power of two >= 4")]
    InvalidWinningValue(Tile),
}

/// Is `value` a legal tile (empty, or a power of two ≥ 2)?
#[inline]
pub fn is_valid_tile(value: Tile) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// Check that a winning threshold can actually be produced by a merge.
pub fn validate_winning_value(value: Tile) -> Result<(), GridError> {
    if value >= 4 && value.is_power_of_two() {
        Ok(())
    } else {
        Err(GridError::InvalidWinningValue(value))
    }
}

/// The game grid - `size` columns x `size` rows using flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<Tile>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size < MIN_GRID_SIZE {
            return Err(GridError::TooSmall { size });
        }
        Ok(Self {
            size,
            cells: vec![0; size * size],
        })
    }

    /// Build a grid from explicit rows, validating shape and tile values.
    ///
    /// ```
    /// use tui_2048_core::Grid;
    ///
    /// let grid = Grid::from_rows(vec![vec![2, 0], vec![0, 4]]).unwrap();
    /// assert_eq!(grid.get(1, 1), Some(4));
    ///
    /// assert!(Grid::from_rows(vec![vec![3, 0], vec![0, 0]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, GridError> {
        let size = rows.len();
        let mut grid = Self::new(size)?;

        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(GridError::InvalidTile { row, col, value });
                }
                grid.cells[row * size + col] = value;
            }
        }

        Ok(grid)
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get tile at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Set tile at (row, col). Returns false if out of bounds.
    ///
    /// No value check is done here; the engine only ever writes legal tiles.
    pub fn set(&mut self, row: usize, col: usize, value: Tile) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Flat row-major view of all cells
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Iterate rows top-to-bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.cells.chunks_exact(self.size)
    }

    /// Copy into nested vectors (row-major)
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(|r| r.to_vec()).collect()
    }

    /// Coordinates of every empty cell, row-major order
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    pub fn has_empty_cell(&self) -> bool {
        self.cells.contains(&0)
    }

    /// Number of non-empty cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// Sum of all tile values
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&v| v as u64).sum()
    }

    /// Largest tile on the board (0 for an empty board)
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }
}
