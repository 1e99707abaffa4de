use crate::{color, count_axis_max, ChartSpec, RenderError, FONT};
use log::info;
use plotters::prelude::*;
use std::collections::BTreeMap;
use std::error::Error;
use std::path::PathBuf;

/// X range of the line chart: exactly the observed years. A single year is widened
/// by one so the axis is not degenerate.
pub fn year_bounds(rows: &[(i64, BTreeMap<String, u64>)]) -> Option<(i64, i64)> {
    let min = rows.iter().map(|(year, _)| *year).min()?;
    let max = rows.iter().map(|(year, _)| *year).max()?;
    if min == max {
        Some((min, max + 1))
    } else {
        Some((min, max))
    }
}

/// 折线图: one line per entry of `series`, years on the x axis. The legend shows
/// the raw type values.
pub fn render_line(
    spec: &ChartSpec,
    rows: &[(i64, BTreeMap<String, u64>)],
    series: &[String],
) -> Result<PathBuf, RenderError> {
    let (start, end) = year_bounds(rows).ok_or(RenderError::NoData { chart: "line" })?;
    draw(spec, rows, series, start..end).map_err(|e| RenderError::draw(&spec.path, e))?;
    info!("line chart written: {}", spec.path.display());
    Ok(spec.path.clone())
}

fn draw(
    spec: &ChartSpec,
    rows: &[(i64, BTreeMap<String, u64>)],
    series: &[String],
    years: std::ops::Range<i64>,
) -> Result<(), Box<dyn Error>> {
    let max = rows
        .iter()
        .flat_map(|(_, counts)| counts.values().copied())
        .max()
        .unwrap_or(0);

    let root = BitMapBackend::new(&spec.path, (spec.width, spec.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.title, (FONT, 30))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(years, 0u64..count_axis_max(max))?;
    chart
        .configure_mesh()
        .x_desc("Release Year")
        .y_desc("No of Releases")
        .draw()?;

    for (idx, kind) in series.iter().enumerate() {
        let c = color(idx);
        let points: Vec<(i64, u64)> = rows
            .iter()
            .map(|(year, counts)| (*year, counts.get(kind).copied().unwrap_or(0)))
            .collect();
        chart
            .draw_series(LineSeries::new(points, c.stroke_width(2)))?
            .label(kind.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], c.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}
