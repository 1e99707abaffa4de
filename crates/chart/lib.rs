pub mod bar;
pub mod error;
pub mod line;
pub mod pie;

use std::path::PathBuf;

pub use bar::render_bar;
pub use error::RenderError;
pub use line::render_line;
pub use pie::render_pie;

use plotters::style::RGBColor;

pub const FONT: &str = "sans-serif";

/// Series colours, in draw order.
pub const PALETTE: [RGBColor; 6] = [
    RGBColor(135, 206, 235), // skyblue
    RGBColor(255, 165, 0),   // orange
    RGBColor(60, 179, 113),
    RGBColor(220, 20, 60),
    RGBColor(147, 112, 219),
    RGBColor(128, 128, 128),
];

pub fn color(idx: usize) -> RGBColor {
    PALETTE[idx % PALETTE.len()]
}

/// Where and how big one chart is drawn.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub path: PathBuf,
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl ChartSpec {
    pub fn new<P: Into<PathBuf>>(path: P, title: &str, width: u32, height: u32) -> Self {
        ChartSpec {
            path: path.into(),
            title: title.to_string(),
            width,
            height,
        }
    }
}

/// Upper bound for a count axis, leaving a little head room above the tallest value.
pub(crate) fn count_axis_max(max: u64) -> u64 {
    max + (max / 20).max(1)
}
