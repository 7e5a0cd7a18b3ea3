//! Standalone demo: paints a small sketch and prints it to the terminal.

use etchgrid::{BrushMode, Sketchpad};

fn main() {
    let mut pad = Sketchpad::seeded(12, 7);
    pad.brush_mut().set_color_hex("#3B82F6").unwrap();

    // Pen diagonal.
    pad.begin_stroke();
    for i in 0..12 {
        pad.paint(i, i);
    }
    pad.end_stroke();

    // Rainbow top row.
    pad.brush_mut().toggle(BrushMode::Rainbow);
    pad.begin_stroke();
    for col in 0..12 {
        pad.paint(0, col);
    }
    pad.end_stroke();

    // Darken one column a few strokes over; it crosses the diagonal.
    pad.brush_mut().toggle(BrushMode::Darken);
    for _ in 0..4 {
        pad.begin_stroke();
        for row in 0..12 {
            pad.paint(row, 3);
        }
        pad.end_stroke();
    }

    for row in 0..pad.size() {
        for col in 0..pad.size() {
            let fill = pad.fill_of(row, col);
            print!("\x1b[48;2;{};{};{}m  \x1b[0m", fill.r(), fill.g(), fill.b());
        }
        println!();
    }
}
