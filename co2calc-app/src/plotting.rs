//! Renders the building-vs-transport pie chart.

use anyhow::Result;
use co2calc_schemas::result::EmissionResult;
use log::{info, warn};
use plotters::element::Pie;
use plotters::prelude::*;
use std::path::Path;

const SLICE_COLORS: [RGBColor; 2] = [RGBColor(0x00, 0x88, 0xFE), RGBColor(0x00, 0xC4, 0x9F)];

/// Slice sizes as drawn, or `None` when there is nothing to draw.
///
/// Negative and NaN group totals are drawn as empty slices.
fn drawable_sizes(result: &EmissionResult) -> Option<[f64; 2]> {
    let sizes = result.chart_slices().map(|s| if s.value > 0.0 { s.value } else { 0.0 });
    let sum: f64 = sizes.iter().sum();
    if sum > 0.0 && sum.is_finite() {
        Some(sizes)
    } else {
        None
    }
}

/// Draws the two-slice pie chart for `result` and saves it as a PNG at `path`.
pub fn plot_emissions_pie(path: &Path, result: &EmissionResult) -> Result<()> {
    info!("[Plotting] Rendering emissions chart...");

    let root = BitMapBackend::new(path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(
        &format!("Total CO2 Emissions: {:.2} kg CO2e", result.total()),
        ("sans-serif", 36),
    )?;

    let (width, height) = root.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);

    match drawable_sizes(result) {
        Some(sizes) => {
            let labels: Vec<String> = result
                .chart_slices()
                .iter()
                .map(|s| format!("{}: {:.2} kg CO2e", s.name, s.value))
                .collect();
            let radius = f64::from(width.min(height)) * 0.3;

            let mut pie = Pie::new(&center, &radius, &sizes, &SLICE_COLORS, &labels);
            pie.start_angle(-90.0);
            pie.label_style(("sans-serif", 24).into_font().color(&BLACK));
            pie.percentages(("sans-serif", 22).into_font().color(&WHITE));
            root.draw(&pie)?;
        }
        None => {
            warn!("[Plotting] No positive emissions to chart.");
            let style = TextStyle::from(("sans-serif", 30).into_font()).color(&BLACK);
            root.draw_text("No emissions to display", &style, (center.0 - 160, center.1))?;
        }
    }

    root.present()?;
    info!("[Plotting] Chart saved to '{}'.", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_totals_are_drawn_as_is() {
        let result = EmissionResult { building: 28625.0, transport: 9300.0 };
        assert_eq!(drawable_sizes(&result), Some([28625.0, 9300.0]));
    }

    #[test]
    fn negative_slice_is_clamped() {
        let result = EmissionResult { building: -5.0, transport: 10.0 };
        assert_eq!(drawable_sizes(&result), Some([0.0, 10.0]));
    }

    #[test]
    fn nothing_to_draw() {
        assert_eq!(drawable_sizes(&EmissionResult::default()), None);
        assert_eq!(drawable_sizes(&EmissionResult { building: -1.0, transport: 0.0 }), None);
        assert_eq!(drawable_sizes(&EmissionResult { building: f64::INFINITY, transport: 1.0 }), None);
        assert_eq!(drawable_sizes(&EmissionResult { building: f64::NAN, transport: 0.0 }), None);
    }
}
