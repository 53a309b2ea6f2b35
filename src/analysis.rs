//! Analysis pipeline and options

use serde::{Deserialize, Serialize};

use crate::beam::BeamDescription;
use crate::deflection::{deflection_at, slope_at};
use crate::error::BeamResult;
use crate::reactions::total_reactions;
use crate::results::AnalysisResult;
use crate::sampler::{sample_deflection, sample_slope, summarize, MM_PER_M};
use crate::steps::generate_steps;

/// Options for a beam analysis run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Number of equal subdivisions of `[0, length]` used for curve
    /// sampling and extremum search (the curves get `resolution + 1`
    /// points). Extrema between grid points are reported at the nearest
    /// sample.
    pub resolution: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self { resolution: 100 }
    }
}

impl AnalysisOptions {
    /// Set the sampling resolution
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }
}

/// Run the full analysis pipeline with default options
///
/// Validates the description, normalizes units, solves reactions, samples
/// the deflection and slope curves, and assembles the derivation trace.
/// Pure: identical input yields an identical result.
pub fn analyze(beam: &BeamDescription) -> BeamResult<AnalysisResult> {
    analyze_with(beam, &AnalysisOptions::default())
}

/// Run the full analysis pipeline
pub fn analyze_with(beam: &BeamDescription, options: &AnalysisOptions) -> BeamResult<AnalysisResult> {
    beam.validate()?;
    let normalized = beam.normalize();

    let reactions = total_reactions(&normalized);
    log::debug!(
        "reactions: R1 = {:.1} N, R2 = {:.1} N, M1 = {:?}, M2 = {:?}",
        reactions.r1,
        reactions.r2,
        reactions.m1,
        reactions.m2
    );

    let deflection_points = sample_deflection(&normalized, options.resolution);
    let slope_points = sample_slope(&normalized, options.resolution);
    let deflection = summarize(&normalized, deflection_at, &deflection_points, MM_PER_M);
    let slope = summarize(
        &normalized,
        slope_at,
        &slope_points,
        180.0 / std::f64::consts::PI,
    );
    log::debug!(
        "extreme deflection {:.4} mm at x = {:.3} m",
        deflection.max_value,
        deflection.max_position
    );

    let steps = generate_steps(beam, &reactions, &deflection, &slope);

    Ok(AnalysisResult {
        reactions,
        deflection,
        slope,
        deflection_points,
        slope_points,
        steps,
    })
}
