//! The sketchpad — a square grid of paintable cells plus stroke handling.
//!
//! Rendering and hit testing stay with the embedding UI; it forwards
//! pointer gestures here as cell coordinates. A stroke spans pointer-down
//! to pointer-up: [`Sketchpad::begin_stroke`], any number of
//! [`Sketchpad::paint`] calls, [`Sketchpad::end_stroke`]. Outside a
//! stroke, `paint` does nothing, which is what lets a UI forward every
//! pointer-move event without tracking button state itself.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};

use crate::brush::{Brush, BrushMode};
use crate::color::{Hsl, Rgb};
use crate::constants::{DEFAULT_GRID_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE};

/// A square grid of cells, each either unpainted or holding a color.
///
/// Unpainted cells render as the brush's background color. The grid
/// remembers only colors; coordinates are `(row, column)` with the
/// origin at the top left.
#[derive(Debug)]
pub struct Sketchpad {
    size: usize,
    cells: Vec<Option<Rgb>>,
    brush: Brush,
    stroke: Option<Stroke>,
    rng: StdRng,
}

/// In-flight stroke state: the last cell painted, so an idle pointer
/// resting inside one cell does not re-apply a non-idempotent mode.
#[derive(Debug)]
struct Stroke {
    last: Option<(usize, usize)>,
}

impl Default for Sketchpad {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }
}

impl Sketchpad {
    /// Create a `size` × `size` grid of unpainted cells.
    ///
    /// `size` is clamped to `MIN_GRID_SIZE..=MAX_GRID_SIZE`.
    pub fn new(size: usize) -> Self {
        let size = size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE);
        Self {
            size,
            cells: vec![None; size * size],
            brush: Brush::default(),
            stroke: None,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Like [`Sketchpad::new`], but rainbow mode draws a deterministic
    /// color sequence for the given seed.
    pub fn seeded(size: usize, seed: u64) -> Self {
        let mut pad = Self::new(size);
        pad.rng = StdRng::seed_from_u64(seed);
        pad
    }

    /// Cells per side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The painted color of a cell, when in bounds and painted.
    pub fn cell(&self, row: usize, col: usize) -> Option<Rgb> {
        self.index(row, col).and_then(|idx| self.cells[idx])
    }

    /// Row-major iteration over every cell.
    pub fn cells(&self) -> impl Iterator<Item = Option<Rgb>> + '_ {
        self.cells.iter().copied()
    }

    /// The color a UI should fill a cell with: its painted color, or the
    /// background when unpainted.
    pub fn fill_of(&self, row: usize, col: usize) -> Rgb {
        self.cell(row, col).unwrap_or_else(|| self.brush.background())
    }

    /// The drawing state.
    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    /// Mutable drawing state, for mode toggles and color changes.
    pub fn brush_mut(&mut self) -> &mut Brush {
        &mut self.brush
    }

    /// Start a stroke (pointer down). Every stroke may revisit cells the
    /// previous stroke painted.
    pub fn begin_stroke(&mut self) {
        self.stroke = Some(Stroke { last: None });
        trace!("stroke started");
    }

    /// Finish the stroke (pointer up). `paint` becomes a no-op again.
    pub fn end_stroke(&mut self) {
        self.stroke = None;
        trace!("stroke ended");
    }

    /// Apply the brush to a cell.
    ///
    /// Does nothing outside a stroke, for coordinates off the grid, or
    /// when the cell is the one the stroke painted last. Re-entering a
    /// cell after leaving it paints again.
    pub fn paint(&mut self, row: usize, col: usize) {
        let Some(idx) = self.index(row, col) else {
            return;
        };
        let Some(stroke) = self.stroke.as_mut() else {
            return;
        };
        if stroke.last == Some((row, col)) {
            return;
        }
        stroke.last = Some((row, col));

        let current = self.cells[idx];
        let painted = match self.brush.mode() {
            BrushMode::Pen => Some(self.brush.color()),
            BrushMode::Eraser => None,
            BrushMode::Rainbow => Some(Rgb::random(&mut self.rng)),
            BrushMode::Lighten => Some(self.shade(current).lighten().to_rgb()),
            BrushMode::Darken => Some(self.shade(current).darken().to_rgb()),
        };
        self.cells[idx] = painted;
        trace!(row, col, ?painted, "cell painted");
    }

    /// Return every cell to unpainted. Size and brush state survive.
    pub fn clear(&mut self) {
        self.cells.fill(None);
        debug!(size = self.size, "sketchpad cleared");
    }

    /// Replace the grid with a fresh one of `size` cells per side.
    ///
    /// All cells come back unpainted; brush state survives. `size` is
    /// clamped like in [`Sketchpad::new`]. A stroke in flight stays in
    /// flight, with its last-cell marker reset since the old cells are
    /// gone.
    pub fn resize(&mut self, size: usize) {
        let size = size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE);
        self.size = size;
        self.cells = vec![None; size * size];
        if let Some(stroke) = self.stroke.as_mut() {
            stroke.last = None;
        }
        debug!(size, "sketchpad resized");
    }

    /// The HSL shade a cell currently shows, falling back to the
    /// background for unpainted cells.
    fn shade(&self, current: Option<Rgb>) -> Hsl {
        current.unwrap_or_else(|| self.brush.background()).to_hsl()
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }
}
