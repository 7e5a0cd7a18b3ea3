//! # etchgrid
//!
//! Color math and a headless sketch-grid model for pixel-drawing toys.
//!
//! Two halves:
//!
//! - [`Rgb`] and [`Hsl`] with the string conversions a drawing UI passes
//!   around: [`hex_to_rgb`], [`rgb_to_hsl`], [`lighten`], [`darken`].
//!   The scanners accept any string carrying the right numeric groups,
//!   so values coming off a color input, a rendered fill, or a previous
//!   conversion all feed straight back in.
//! - [`Sketchpad`], a toolkit-agnostic grid of paintable cells with a
//!   [`Brush`] of modes (pen, eraser, rainbow, lighten, darken) and
//!   drag-stroke painting. The embedding UI renders cells and forwards
//!   pointer gestures as cell coordinates; nothing here touches a widget
//!   tree.
//!
//! ## Usage
//!
//! ```rust
//! use etchgrid::{BrushMode, Sketchpad};
//!
//! let mut pad = Sketchpad::new(16);
//! pad.brush_mut().set_color_hex("#3B82F6").unwrap();
//! pad.begin_stroke();
//! pad.paint(0, 0);
//! pad.paint(0, 1);
//! pad.end_stroke();
//!
//! pad.brush_mut().toggle(BrushMode::Lighten);
//! pad.begin_stroke();
//! pad.paint(0, 0);
//! pad.end_stroke();
//! assert_ne!(pad.cell(0, 0), pad.cell(0, 1));
//! ```

mod brush;
mod color;
mod constants;
mod error;
mod math;
mod sketchpad;

pub use brush::{Brush, BrushMode};
pub use color::{darken, hex_to_rgb, lighten, rgb_to_hsl, Hsl, Rgb};
pub use constants::{DEFAULT_GRID_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE};
pub use error::MalformedColorString;
pub use sketchpad::Sketchpad;
