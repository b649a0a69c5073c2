use plotters::prelude::*;
use thiserror::Error;

use crate::services::visualization::{DistributionData, DurationCurveData};

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("failed to render chart: {0}")]
    Render(String),
    #[error("nothing to plot: {0}")]
    Empty(&'static str),
}

fn render_error<E: std::fmt::Display>(error: E) -> ChartError {
    ChartError::Render(error.to_string())
}

pub fn write_distribution_png(output_path: &str, data: &DistributionData) -> Result<(), ChartError> {
    let (first, last) = match (data.points.first(), data.points.last()) {
        (Some(first), Some(last)) if data.sigma > 0.0 => (first.x, last.x),
        _ => return Err(ChartError::Empty("portfolio has no spread")),
    };
    let max_y = data
        .points
        .iter()
        .map(|point| point.y)
        .fold(0.0_f64, f64::max)
        * 1.1;

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Effort Distribution", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(first..last, 0.0..max_y)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Effort in hours")
        .y_desc("Density")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .y_label_formatter(&|value| format!("{value:.4}"))
        .draw()
        .map_err(render_error)?;

    let curve_color = RGBColor(30, 122, 204);
    chart
        .draw_series(AreaSeries::new(
            data.points.iter().map(|point| (point.x, point.y)),
            0.0,
            curve_color.mix(0.2).filled(),
        )
        .border_style(curve_color.stroke_width(2)))
        .map_err(render_error)?;

    for marker in &data.markers {
        chart
            .draw_series(LineSeries::new(
                vec![(marker.hours, 0.0), (marker.hours, max_y)],
                RED.stroke_width(1),
            ))
            .map_err(render_error)?
            .label(format!(
                "{} {:.0} h ({:.0}%)",
                marker.label,
                marker.hours,
                marker.confidence * 100.0
            ));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_error)?;

    root.present().map_err(render_error)?;
    Ok(())
}

pub fn write_duration_png(output_path: &str, data: &DurationCurveData) -> Result<(), ChartError> {
    if data.points.is_empty() {
        return Err(ChartError::Empty("portfolio has no effort"));
    }
    let max_x = data.current.effort.max(1.0);
    let max_y = data
        .points
        .iter()
        .map(|point| point.duration)
        .fold(f64::from(data.current.duration_ceiled), f64::max)
        .max(1.0)
        * 1.1;

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Duration vs. Effort", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0.0..max_x, 0.0..max_y)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Effort in staff-weeks")
        .y_desc("Duration in weeks")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .draw()
        .map_err(render_error)?;

    chart
        .draw_series(LineSeries::new(
            data.points.iter().map(|point| (point.effort, point.duration)),
            RGBColor(30, 122, 204).stroke_width(2),
        ))
        .map_err(render_error)?;

    chart
        .draw_series(std::iter::once(Circle::new(
            (data.current.effort, data.current.duration),
            5,
            RED.filled(),
        )))
        .map_err(render_error)?;

    root.present().map_err(render_error)?;
    Ok(())
}
