use crate::{count_axis_max, ChartSpec, RenderError, FONT};
use log::info;
use plotters::prelude::*;
use std::error::Error;
use std::path::PathBuf;

const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);
const BAR_HALF_WIDTH: f64 = 0.4;

/// Smallest and largest score, padded by one on each side so edge bars are whole.
pub fn score_bounds(bins: &[(i64, u64)]) -> Option<(f64, f64)> {
    let min = bins.iter().map(|(score, _)| *score).min()?;
    let max = bins.iter().map(|(score, _)| *score).max()?;
    Some(((min - 1) as f64, (max + 1) as f64))
}

/// 柱状图: one bar per `(score, count)` bin. Single series, so no legend.
pub fn render_bar(spec: &ChartSpec, bins: &[(i64, u64)]) -> Result<PathBuf, RenderError> {
    let (start, end) = score_bounds(bins).ok_or(RenderError::NoData { chart: "bar" })?;
    draw(spec, bins, start..end).map_err(|e| RenderError::draw(&spec.path, e))?;
    info!("bar chart written: {}", spec.path.display());
    Ok(spec.path.clone())
}

fn draw(spec: &ChartSpec, bins: &[(i64, u64)], scores: std::ops::Range<f64>) -> Result<(), Box<dyn Error>> {
    let max = bins.iter().map(|(_, count)| *count).max().unwrap_or(0);

    let root = BitMapBackend::new(&spec.path, (spec.width, spec.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.title, (FONT, 20))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(scores, 0u64..count_axis_max(max))?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("IMDB Rating")
        .y_desc("No of Movies/shows")
        .draw()?;

    chart.draw_series(bins.iter().map(|(score, count)| {
        let x = *score as f64;
        Rectangle::new(
            [(x - BAR_HALF_WIDTH, 0), (x + BAR_HALF_WIDTH, *count)],
            BAR_COLOR.filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}
