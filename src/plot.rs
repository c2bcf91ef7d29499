//! SVG chart of a simulated concentration-time curve

use plotters::prelude::*;
use std::path::Path;

use crate::data::series::{ConcentrationSeries, CSV_HEADERS};
use crate::error::PkError;

const CURVE_COLOR: RGBColor = RGBColor(128, 0, 128);

/// Chart appearance
#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: "Pharmacokinetic Curve".to_string(),
            width: 800,
            height: 500,
        }
    }
}

fn plot_error(e: impl std::fmt::Display) -> PkError {
    PkError::Plot(e.to_string())
}

/// Draw `series` as a line chart and write it to `path` as SVG
pub fn plot_series(
    series: &ConcentrationSeries,
    path: &Path,
    config: &PlotConfig,
) -> Result<(), PkError> {
    let x_max = series.times().last().copied().unwrap_or(0.0);
    let x_max = if x_max > 0.0 { x_max } else { 1.0 };
    let y_max = series
        .concentrations()
        .iter()
        .copied()
        .fold(0.0_f64, f64::max);
    let y_max = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };

    let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .x_desc(CSV_HEADERS[0])
        .y_desc(CSV_HEADERS[1])
        .draw()
        .map_err(plot_error)?;

    chart
        .draw_series(LineSeries::new(series.iter(), &CURVE_COLOR))
        .map_err(plot_error)?
        .label("Drug Concentration")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], CURVE_COLOR));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::regimen::{DosingRegimen, Route};

    #[test]
    fn writes_svg_with_axis_labels() {
        let regimen = DosingRegimen::builder(Route::Oral { ka: 1.0 }, 500.0, 50.0, 0.2)
            .multiple(8.0, 3)
            .build()
            .unwrap();
        let simulation = regimen.simulate();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curve.svg");
        plot_series(&simulation.series, &path, &PlotConfig::default()).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Time (hr)"));
        assert!(svg.contains("Concentration (mg/L)"));
        assert!(svg.contains("<polyline"));
    }

    #[test]
    fn all_zero_series_still_plots() {
        let regimen = DosingRegimen::builder(Route::Oral { ka: 0.2 }, 500.0, 50.0, 0.2)
            .build()
            .unwrap();
        let simulation = regimen.simulate();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flat.svg");
        plot_series(&simulation.series, &path, &PlotConfig::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("curve.svg");
        let regimen = DosingRegimen::builder(Route::IVBolus, 500.0, 50.0, 0.2)
            .build()
            .unwrap();
        let result = plot_series(&regimen.simulate().series, &path, &PlotConfig::default());
        assert!(matches!(result, Err(PkError::Plot(_))));
    }
}
