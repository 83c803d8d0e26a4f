//! Visual comparison of original and smoothed signals.
//!
//! Renders an SVG with two panels: the original series overlaid with the
//! smoothed one, and the residuals around a zero line. This is a pure
//! side-effecting consumer of (original, smoothed) pairs; the tuner invokes
//! it at most once, on the final result, and all rendering configuration is
//! passed explicitly at call time.

// External dependencies
use num_traits::Float;
use plotters::prelude::*;
use std::path::Path;

// Internal dependencies
use crate::primitives::errors::SmoothError;
use crate::primitives::signal::Signal;

/// Canvas size in pixels; the upper panel gets a 3:2 height ratio.
const CANVAS: (u32, u32) = (640, 600);
const SPLIT_Y: i32 = 360;

fn render_error<E: std::error::Error>(e: E) -> SmoothError {
    SmoothError::Render(e.to_string())
}

/// Collect the present (key, value) pairs of a signal as f64.
fn dense_points<T: Float>(signal: &Signal<T>) -> Vec<(f64, f64)> {
    signal
        .index()
        .iter()
        .zip(signal.values().iter())
        .filter_map(|(&k, v)| {
            v.map(|v| {
                (
                    k.to_f64().unwrap_or(f64::NAN),
                    v.to_f64().unwrap_or(f64::NAN),
                )
            })
        })
        .collect()
}

fn bounds(points: &[(f64, f64)]) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &(x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    let x_pad = ((x_max - x_min) * 0.02).max(1e-9);
    let y_pad = ((y_max - y_min) * 0.05).max(1e-9);
    (
        (x_min - x_pad)..(x_max + x_pad),
        (y_min - y_pad)..(y_max + y_pad),
    )
}

/// Render the original-vs-smoothed comparison and the residual panel.
pub fn render_comparison<T: Float>(
    original: &Signal<T>,
    smoothed: &Signal<T>,
    path: &Path,
) -> Result<(), SmoothError> {
    let orig = dense_points(original);
    let smooth = dense_points(smoothed);
    let residuals: Vec<(f64, f64)> = orig
        .iter()
        .zip(smooth.iter())
        .map(|(&(x, y), &(_, ys))| (x, y - ys))
        .collect();

    let root = SVGBackend::new(path, CANVAS).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;
    let (upper, lower) = root.split_vertically(SPLIT_Y);

    // Upper panel: original vs. smoothed
    let mut all = orig.clone();
    all.extend_from_slice(&smooth);
    let (x_range, y_range) = bounds(&all);

    let mut chart = ChartBuilder::on(&upper)
        .caption("Original vs. Smooth", ("sans-serif", 16).into_font())
        .margin(10)
        .x_label_area_size(24)
        .y_label_area_size(44)
        .build_cartesian_2d(x_range.clone(), y_range)
        .map_err(render_error)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .draw()
        .map_err(render_error)?;

    chart
        .draw_series(LineSeries::new(orig.iter().copied(), &BLUE.mix(0.7)))
        .map_err(render_error)?
        .label("Original")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], &BLUE));
    chart
        .draw_series(LineSeries::new(
            smooth.iter().copied(),
            RED.stroke_width(2),
        ))
        .map_err(render_error)?
        .label("Smooth")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], &RED));
    chart
        .configure_series_labels()
        .border_style(BLACK.mix(0.3).stroke_width(1))
        .draw()
        .map_err(render_error)?;

    // Lower panel: residuals around zero
    let (_, r_range) = bounds(&residuals);
    let mut residual_chart = ChartBuilder::on(&lower)
        .caption("Residuals", ("sans-serif", 16).into_font())
        .margin(10)
        .x_label_area_size(24)
        .y_label_area_size(44)
        .build_cartesian_2d(x_range.clone(), r_range)
        .map_err(render_error)?;
    residual_chart
        .configure_mesh()
        .disable_x_mesh()
        .draw()
        .map_err(render_error)?;

    residual_chart
        .draw_series(
            residuals
                .iter()
                .map(|&(x, r)| Circle::new((x, r), 2, BLUE.mix(0.7).filled())),
        )
        .map_err(render_error)?;
    residual_chart
        .draw_series(LineSeries::new(
            [(x_range.start, 0.0), (x_range.end, 0.0)],
            BLACK.stroke_width(2),
        ))
        .map_err(render_error)?;

    root.present().map_err(render_error)?;
    Ok(())
}
