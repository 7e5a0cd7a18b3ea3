//! Brush state — the active painting mode and its colors.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::Rgb;
use crate::error::MalformedColorString;

/// What a stroke does to the cells it passes over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BrushMode {
    /// Paint the brush color.
    #[default]
    Pen,
    /// Return cells to unpainted.
    Eraser,
    /// Paint each cell a freshly drawn random color.
    Rainbow,
    /// Raise the lightness of whatever the cell shows.
    Lighten,
    /// Lower the lightness of whatever the cell shows.
    Darken,
}

/// Pen color, background color and the selected mode.
///
/// Modes are mutually exclusive. [`Brush::toggle`] models one button per
/// mode: selecting a mode switches to it and deselects the previous one,
/// selecting the active mode again drops back to the plain pen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Brush {
    color: Rgb,
    background: Rgb,
    mode: BrushMode,
}

impl Default for Brush {
    /// Black pen on a white background.
    fn default() -> Self {
        Self {
            color: Rgb::BLACK,
            background: Rgb::WHITE,
            mode: BrushMode::Pen,
        }
    }
}

impl Brush {
    /// The selected mode.
    pub fn mode(&self) -> BrushMode {
        self.mode
    }

    /// The pen color.
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// The background color unpainted cells show.
    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Select `mode`, or drop back to [`BrushMode::Pen`] when `mode` is
    /// already selected.
    pub fn toggle(&mut self, mode: BrushMode) {
        self.mode = if self.mode == mode {
            BrushMode::Pen
        } else {
            mode
        };
        debug!(mode = ?self.mode, "brush mode changed");
    }

    /// Set the pen color.
    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Set the pen color from a hex string, as a color input produces it.
    pub fn set_color_hex(&mut self, hex: &str) -> Result<(), MalformedColorString> {
        self.color = Rgb::from_hex(hex)?;
        Ok(())
    }

    /// Set the background color.
    pub fn set_background(&mut self, color: Rgb) {
        self.background = color;
    }

    /// Set the background color from a hex string.
    pub fn set_background_hex(&mut self, hex: &str) -> Result<(), MalformedColorString> {
        self.background = Rgb::from_hex(hex)?;
        Ok(())
    }
}
