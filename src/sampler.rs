//! Curve sampling and summary extraction
//!
//! The only place where solver output leaves SI units: deflection samples
//! are converted to millimeters and slope samples to degrees.

use crate::beam::NormalizedBeam;
use crate::deflection::{deflection_at, slope_at};
use crate::results::{CurveSummary, ResultPoint};

/// Millimeters per meter
pub const MM_PER_M: f64 = 1_000.0;

/// Sample an evaluator at `n + 1` equally spaced points over `[0, length]`
///
/// `scale` converts the evaluator's SI output to display units.
pub fn sample_curve<F>(beam: &NormalizedBeam, evaluator: F, n: usize, scale: f64) -> Vec<ResultPoint>
where
    F: Fn(&NormalizedBeam, f64) -> f64,
{
    (0..=n)
        .map(|i| {
            let x = beam.length * (i as f64) / (n as f64);
            ResultPoint::new(x, evaluator(beam, x) * scale)
        })
        .collect()
}

/// Deflection curve in mm
pub fn sample_deflection(beam: &NormalizedBeam, n: usize) -> Vec<ResultPoint> {
    sample_curve(beam, deflection_at, n, MM_PER_M)
}

/// Slope curve in degrees
pub fn sample_slope(beam: &NormalizedBeam, n: usize) -> Vec<ResultPoint> {
    sample_curve(beam, slope_at, n, 180.0 / std::f64::consts::PI)
}

/// Summarize a sampled curve
///
/// Ends and midspan come from direct evaluation; the extremum is the
/// sample of greatest magnitude over the fixed grid, so a peak between
/// samples is reported at the nearest grid point.
pub fn summarize<F>(beam: &NormalizedBeam, evaluator: F, points: &[ResultPoint], scale: f64) -> CurveSummary
where
    F: Fn(&NormalizedBeam, f64) -> f64,
{
    let mut max_value: f64 = 0.0;
    let mut max_position = 0.0;
    for point in points {
        if point.y.abs() > max_value.abs() {
            max_value = point.y;
            max_position = point.x;
        }
    }
    CurveSummary {
        left_end: evaluator(beam, 0.0) * scale,
        right_end: evaluator(beam, beam.length) * scale,
        midspan: evaluator(beam, beam.length / 2.0) * scale,
        max_value,
        max_position,
    }
}
