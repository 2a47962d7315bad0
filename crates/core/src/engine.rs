//! Engine module - the pure grid transition functions
//!
//! Every function borrows its input grid and returns a brand-new grid. The
//! only side effect is consuming decisions from the supplied [`TileRng`].
//!
//! A move is computed line by line. Each line is read starting at the edge the
//! tiles slide toward (row order for Left, reversed row for Right, column
//! top-to-bottom for Up, bottom-to-top for Down), compacted and merged toward
//! index 0 by [`slide_line`], then written back in the same order. This is the
//! same as transposing/reversing the grid, applying Left and undoing the
//! transform, without materializing the intermediate grids.

use arrayvec::ArrayVec;

use crate::grid::{validate_winning_value, Grid, GridError, Tile};
use crate::rng::TileRng;
use crate::types::{Direction, SPAWN_HIGH_VALUE, SPAWN_LOW_VALUE};

/// A tile placed by [`spawn_tile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// Outcome of [`apply_move`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Grid after sliding, merging and (if anything moved) spawning
    pub grid: Grid,
    /// Did any tile slide or merge?
    pub did_move: bool,
    /// Sum of all tiles created by merges in this move
    pub score: u64,
    /// A merge produced a tile at or above the winning value
    pub reached_winning_value: bool,
    /// The tile spawned after the move, if any
    pub spawned: Option<Spawn>,
}

/// Outcome of sliding one line toward index 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineOutcome {
    /// Line differs from its input
    pub moved: bool,
    /// Sum of merged tiles
    pub score: u64,
    /// Largest tile created by a merge (0 if none)
    pub max_merged: Tile,
}

/// Create a `size`×`size` grid with two spawned tiles.
///
/// The winning value is validated here so a bad rule set fails before play
/// starts rather than silently never signalling a win.
pub fn initialize<R: TileRng>(
    size: usize,
    winning_value: Tile,
    rng: &mut R,
) -> Result<Grid, GridError> {
    validate_winning_value(winning_value)?;
    let grid = Grid::new(size)?;
    let (grid, _) = spawn_tile(&grid, rng);
    let (grid, _) = spawn_tile(&grid, rng);
    Ok(grid)
}

/// Place a 2 (or, rarely, a 4) in a uniformly chosen empty cell.
///
/// Returns the grid unchanged and `None` when there is no empty cell.
pub fn spawn_tile<R: TileRng>(grid: &Grid, rng: &mut R) -> (Grid, Option<Spawn>) {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return (grid.clone(), None);
    }

    let (row, col) = empty[rng.pick_index(empty.len()).min(empty.len() - 1)];
    let value = if rng.spawn_four() {
        SPAWN_HIGH_VALUE
    } else {
        SPAWN_LOW_VALUE
    };

    let mut next = grid.clone();
    next.set(row, col, value);
    (next, Some(Spawn { row, col, value }))
}

/// Compact and merge `line` toward index 0, in place.
///
/// Each tile merges at most once per move: `[2, 2, 2, 2]` becomes
/// `[4, 4, 0, 0]`, never `[8, 0, 0, 0]`.
///
/// ```
/// use tui_2048_core::slide_line;
///
/// let mut line = [2, 0, 2, 4];
/// let out = slide_line(&mut line);
/// assert_eq!(line, [4, 4, 0, 0]);
/// assert_eq!(out.score, 4);
/// assert!(out.moved);
/// ```
pub fn slide_line(line: &mut [Tile]) -> LineOutcome {
    let mut out = LineOutcome::default();
    let mut write = 0usize;
    // Last tile written that may still absorb an equal neighbor.
    let mut open: Option<Tile> = None;

    for read in 0..line.len() {
        let value = line[read];
        if value == 0 {
            continue;
        }
        line[read] = 0;

        if open == Some(value) {
            if let Some(merged) = value.checked_mul(2) {
                line[write - 1] = merged;
                out.score += merged as u64;
                out.max_merged = out.max_merged.max(merged);
                open = None;
                continue;
            }
        }

        line[write] = value;
        if write != read {
            out.moved = true;
        }
        write += 1;
        open = Some(value);
    }

    if out.score > 0 {
        out.moved = true;
    }
    out
}

/// Cell coordinates of line `index`, ordered from the edge tiles slide toward.
fn line_coords(size: usize, direction: Direction, index: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..size).map(move |k| match direction {
        Direction::Left => (index, k),
        Direction::Right => (index, size - 1 - k),
        Direction::Up => (k, index),
        Direction::Down => (size - 1 - k, index),
    })
}

/// Slide and merge every line, without spawning.
///
/// Returns the compacted grid and the combined line outcome.
pub fn slide_grid(grid: &Grid, direction: Direction) -> (Grid, LineOutcome) {
    let size = grid.size();
    let mut next = grid.clone();
    let mut total = LineOutcome::default();
    let mut line: Vec<Tile> = vec![0; size];

    for index in 0..size {
        for (k, (row, col)) in line_coords(size, direction, index).enumerate() {
            line[k] = grid.get(row, col).unwrap_or(0);
        }

        let out = slide_line(&mut line);
        if !out.moved {
            continue;
        }

        total.moved = true;
        total.score += out.score;
        total.max_merged = total.max_merged.max(out.max_merged);
        for (k, (row, col)) in line_coords(size, direction, index).enumerate() {
            next.set(row, col, line[k]);
        }
    }

    (next, total)
}

/// Apply a move: slide, merge, then spawn exactly one tile if anything moved.
///
/// A move that changes nothing returns the original grid, zero score and no
/// spawn.
pub fn apply_move<R: TileRng>(
    grid: &Grid,
    direction: Direction,
    winning_value: Tile,
    rng: &mut R,
) -> MoveResult {
    let (slid, outcome) = slide_grid(grid, direction);

    if !outcome.moved {
        return MoveResult {
            grid: grid.clone(),
            did_move: false,
            score: 0,
            reached_winning_value: false,
            spawned: None,
        };
    }

    let (next, spawned) = spawn_tile(&slid, rng);
    MoveResult {
        grid: next,
        did_move: true,
        score: outcome.score,
        reached_winning_value: outcome.max_merged != 0 && outcome.max_merged >= winning_value,
        spawned,
    }
}

/// Would `direction` change the grid?
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    let size = grid.size();
    (0..size).any(|index| {
        let mut prev: Tile = 0;
        let mut seen_gap = false;
        for (row, col) in line_coords(size, direction, index) {
            let value = grid.get(row, col).unwrap_or(0);
            if value == 0 {
                seen_gap = true;
                continue;
            }
            if seen_gap || (value == prev && value.checked_mul(2).is_some()) {
                return true;
            }
            prev = value;
        }
        false
    })
}

/// Directions that would change the grid, in [`Direction::ALL`] order.
pub fn available_moves(grid: &Grid) -> ArrayVec<Direction, 4> {
    Direction::ALL
        .into_iter()
        .filter(|&d| can_move(grid, d))
        .collect()
}

/// Is there an empty cell or a horizontally/vertically adjacent equal pair
/// that can merge?
///
/// When this is false the game is over. Agrees with [`available_moves`]:
/// a pair whose merge would overflow [`Tile`] does not count.
pub fn has_available_move(grid: &Grid) -> bool {
    if grid.has_empty_cell() {
        return true;
    }

    let size = grid.size();
    for row in 0..size {
        for col in 0..size {
            let value = grid.get(row, col).unwrap_or(0);
            if value.checked_mul(2).is_none() {
                continue;
            }
            if grid.get(row, col + 1) == Some(value) || grid.get(row + 1, col) == Some(value) {
                return true;
            }
        }
    }
    false
}
