//! Comparison chart: numeric samples against the closed-form curve.

use plotters::prelude::*;

use crate::{Float, core::trajectory::Trajectory};

/// Render a numeric trajectory against the closed-form solution.
///
/// The numeric run is drawn as a blue line with point markers; the closed
/// form `reference` (with integration constant `c`) is sampled at evenly
/// spaced abscissas over `[a, b]` and drawn as a red curve over it. The
/// backend comes from the file extension: `.svg` gives vector output,
/// anything else a bitmap. Non-finite reference samples are dropped so a
/// pole inside the interval does not abort the chart.
pub fn render_comparison<R>(
    path: &str,
    title: &str,
    trajectory: &Trajectory,
    reference: R,
    c: Float,
    a: Float,
    b: Float,
) -> Result<(), Box<dyn std::error::Error>>
where
    R: Fn(Float, Float) -> Float,
{
    let step = (b - a) / (REFERENCE_SAMPLES - 1) as Float;
    let curve: Vec<(Float, Float)> = (0..REFERENCE_SAMPLES)
        .map(|i| {
            let x = a + i as Float * step;
            (x, reference(x, c))
        })
        .filter(|(_, y)| y.is_finite())
        .collect();

    let ext = std::path::Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(path, (WIDTH, HEIGHT));
            render_impl(backend, title, trajectory, &curve)
        }
        _ => {
            let backend = BitMapBackend::new(path, (WIDTH, HEIGHT));
            render_impl(backend, title, trajectory, &curve)
        }
    }
}

/// Draw both series with the given drawing backend.
fn render_impl<DB: DrawingBackend>(
    backend: DB,
    title: &str,
    trajectory: &Trajectory,
    curve: &[(Float, Float)],
) -> Result<(), Box<dyn std::error::Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let (x_min, x_max) =
        spread(trajectory.x.iter().copied().chain(curve.iter().map(|&(x, _)| x)));
    let (y_min, y_max) =
        spread(trajectory.y.iter().copied().chain(curve.iter().map(|&(_, y)| y)));

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart.configure_mesh().x_desc("x").y_desc("y").draw()?;

    chart
        .draw_series(LineSeries::new(trajectory.iter(), &BLUE))?
        .label("numerical solution")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));
    chart.draw_series(
        trajectory.iter().map(|(x, y)| Circle::new((x, y), 3, BLUE.filled())),
    )?;

    chart
        .draw_series(LineSeries::new(curve.iter().copied(), &RED))?
        .label("exact solution")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Padded axis range covering every sample; degenerates gracefully when the
/// data is flat or empty.
fn spread(values: impl Iterator<Item = Float>) -> (Float, Float) {
    let mut lo = Float::INFINITY;
    let mut hi = Float::NEG_INFINITY;
    for v in values {
        if v < lo {
            lo = v;
        }
        if v > hi {
            hi = v;
        }
    }
    if lo > hi {
        (0.0, 1.0)
    } else if lo == hi {
        (lo - 0.5, hi + 0.5)
    } else {
        let pad = (hi - lo) * 0.05;
        (lo - pad, hi + pad)
    }
}

// Canvas size for every backend
const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
/// Closed-form curve resolution over [a, b].
const REFERENCE_SAMPLES: usize = 100;
