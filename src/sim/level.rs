//! Level layouts and the level data source
//!
//! A level is a rows × columns boolean grid; filled cells become blocks at
//! the start of the level. Layout tables are plain JSON keyed `"level1"`,
//! `"level2"`, ... so hosts can ship their own level files; the crate also
//! carries a built-in set so it runs without any files at all.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors loading or validating a level table
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level table is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("level key {0:?} is not of the form \"levelN\"")]
    BadKey(String),
    #[error("level {level} has no rows")]
    EmptyGrid { level: u32 },
    #[error("level {level} is ragged: row {row} has {got} cells, expected {expected}")]
    RaggedGrid {
        level: u32,
        row: usize,
        got: usize,
        expected: usize,
    },
    #[error("level {level} grid is {rows}x{cols}, expected {expected_rows}x{expected_cols}")]
    Shape {
        level: u32,
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },
    #[error("level {0} is not defined")]
    Undefined(u32),
}

/// A level's block grid. `true` cells hold a block when the level begins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelLayout {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl LevelLayout {
    /// An all-empty rows × cols grid
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the cell at (row, col) holds a block
    pub fn filled(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }

    /// Put a block in the cell at (row, col)
    pub fn fill(&mut self, row: usize, col: usize) {
        self.cells[row * self.cols + col] = true;
    }

    /// Number of filled cells
    pub fn block_count(&self) -> usize {
        self.cells.iter().filter(|cell| **cell).count()
    }
}

/// Provides the block grid for each level of a run.
///
/// `None` means the level is past the end of the defined set, which the
/// state machine treats as winning the game rather than as an error.
pub trait LevelSource {
    fn layout(&self, level: u32) -> Option<LevelLayout>;
}

/// A finite, numbered set of level layouts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSet {
    levels: BTreeMap<u32, LevelLayout>,
}

impl LevelSource for LevelSet {
    fn layout(&self, level: u32) -> Option<LevelLayout> {
        self.levels.get(&level).cloned()
    }
}

impl LevelSet {
    /// Add or replace a level
    pub fn insert(&mut self, level: u32, layout: LevelLayout) {
        self.levels.insert(level, layout);
    }

    /// Number of defined levels
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Parse a level table: a JSON object mapping `"levelN"` to a grid of
    /// rows, each an array of 0/1 cells (any non-zero cell holds a block).
    pub fn from_json_str(json: &str) -> Result<Self, LevelError> {
        let table: BTreeMap<String, Vec<Vec<u8>>> = serde_json::from_str(json)?;
        let mut set = Self::default();
        for (key, grid) in table {
            let number = key
                .strip_prefix("level")
                .and_then(|n| n.parse::<u32>().ok())
                .ok_or_else(|| LevelError::BadKey(key.clone()))?;
            if grid.is_empty() || grid[0].is_empty() {
                return Err(LevelError::EmptyGrid { level: number });
            }
            let cols = grid[0].len();
            let mut layout = LevelLayout::empty(grid.len(), cols);
            for (row, cells) in grid.iter().enumerate() {
                if cells.len() != cols {
                    return Err(LevelError::RaggedGrid {
                        level: number,
                        row,
                        got: cells.len(),
                        expected: cols,
                    });
                }
                for (col, cell) in cells.iter().enumerate() {
                    if *cell != 0 {
                        layout.fill(row, col);
                    }
                }
            }
            set.levels.insert(number, layout);
        }
        log::debug!("parsed level table with {} levels", set.len());
        Ok(set)
    }

    /// Check that every level matches the configured grid shape
    pub fn validate_shape(&self, rows: usize, cols: usize) -> Result<(), LevelError> {
        for (&level, layout) in &self.levels {
            if layout.rows() != rows || layout.cols() != cols {
                return Err(LevelError::Shape {
                    level,
                    rows: layout.rows(),
                    cols: layout.cols(),
                    expected_rows: rows,
                    expected_cols: cols,
                });
            }
        }
        Ok(())
    }

    /// The two stock levels: a solid band, then a lattice with gaps
    pub fn builtin() -> Self {
        use crate::consts::{GRID_COLS, GRID_ROWS};
        let mut set = Self::default();

        // Level 1: a solid band across the top half of the grid.
        let mut level1 = LevelLayout::empty(GRID_ROWS, GRID_COLS);
        for row in 0..6 {
            for col in 0..GRID_COLS {
                level1.fill(row, col);
            }
        }
        set.insert(1, level1);

        // Level 2: a lattice, one gap between any two neighbors.
        let mut level2 = LevelLayout::empty(GRID_ROWS, GRID_COLS);
        for row in 0..8 {
            for col in 0..GRID_COLS {
                if (row + col) % 2 == 0 {
                    level2.fill(row, col);
                }
            }
        }
        set.insert(2, level2);

        set
    }
}
