//! Sizing constants for the sketchpad grid.

/// Fewest cells per side a sketchpad will hold
pub const MIN_GRID_SIZE: usize = 1;

/// Most cells per side a sketchpad will hold
pub const MAX_GRID_SIZE: usize = 100;

/// Cells per side of a default sketchpad
pub const DEFAULT_GRID_SIZE: usize = 50;
