use crate::{color, ChartSpec, RenderError, FONT};
use log::info;
use plotters::prelude::*;
use std::error::Error;
use std::path::PathBuf;

const START_ANGLE: f64 = 140.0;

/// 饼图: one wedge per `(type, percentage)` slice, labelled with its share.
pub fn render_pie<F>(spec: &ChartSpec, slices: &[(String, f64)], label: F) -> Result<PathBuf, RenderError>
where
    F: Fn(&str) -> String,
{
    if slices.is_empty() {
        return Err(RenderError::NoData { chart: "pie" });
    }
    draw(spec, slices, label).map_err(|e| RenderError::draw(&spec.path, e))?;
    info!("pie chart written: {}", spec.path.display());
    Ok(spec.path.clone())
}

fn draw<F>(spec: &ChartSpec, slices: &[(String, f64)], label: F) -> Result<(), Box<dyn Error>>
where
    F: Fn(&str) -> String,
{
    let root = BitMapBackend::new(&spec.path, (spec.width, spec.height)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(&spec.title, (FONT, 24))?;

    let (w, h) = root.dim_in_pixel();
    let center = ((w / 2) as i32, (h / 2) as i32);
    let radius = w.min(h) as f64 * 0.35;

    let sizes: Vec<f64> = slices.iter().map(|(_, share)| *share).collect();
    let colors: Vec<RGBColor> = (0..slices.len()).map(color).collect();
    let labels: Vec<String> = slices.iter().map(|(kind, _)| label(kind.as_str())).collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(START_ANGLE);
    pie.label_style((FONT, 16).into_font().color(&BLACK));
    pie.percentages((FONT, 14).into_font().color(&BLACK));
    root.draw(&pie)?;

    // legend, top right
    let x = w as i32 - 130;
    for (idx, text) in labels.iter().enumerate() {
        let y = 10 + idx as i32 * 22;
        root.draw(&Rectangle::new([(x, y), (x + 14, y + 14)], colors[idx].filled()))?;
        root.draw(&Text::new(text.as_str(), (x + 20, y), (FONT, 14).into_font()))?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_pie_without_slices() {
        let spec = ChartSpec::new("pieplot.png", "empty", 100, 100);
        let err = render_pie(&spec, &[], |kind| kind.to_string()).unwrap_err();
        assert!(matches!(err, RenderError::NoData { chart: "pie" }));
        assert_eq!(err.to_string(), "nothing to draw for pie chart");
    }
}
