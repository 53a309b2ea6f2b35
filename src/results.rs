//! Result types for beam analysis

use serde::{Deserialize, Serialize};

use crate::reactions::Reactions;

/// A sample of a response curve
///
/// `x` in meters; `y` in the curve's output unit (mm for deflection,
/// degrees for slope).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultPoint {
    /// Position along the beam (m)
    pub x: f64,
    /// Sampled value
    pub y: f64,
}

impl ResultPoint {
    /// Create a sample point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Summary statistics of a response curve, in output units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveSummary {
    /// Value at x = 0
    pub left_end: f64,
    /// Value at x = length
    pub right_end: f64,
    /// Value at x = length / 2
    pub midspan: f64,
    /// Signed value of greatest magnitude over the sample grid
    pub max_value: f64,
    /// Position of that sample (m)
    pub max_position: f64,
}

/// One entry of the derivation trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Short heading
    pub title: String,
    /// Prose explanation of what was done
    pub description: String,
    /// Governing formula, when a single template applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    /// Numeric outcome in display units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl Step {
    /// Create a step with neither formula nor result
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            formula: None,
            result: None,
        }
    }

    /// Attach a formula
    pub fn with_formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = Some(formula.into());
        self
    }

    /// Attach a numeric result
    pub fn with_result(mut self, result: impl Into<String>) -> Self {
        self.result = Some(result.into());
        self
    }
}

/// Complete output of one analysis call
///
/// Produced fresh by [`crate::analysis::analyze`]; nothing is cached
/// across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Total support reactions (N, N m)
    pub reactions: Reactions,
    /// Deflection summary (mm)
    pub deflection: CurveSummary,
    /// Slope summary (degrees)
    pub slope: CurveSummary,
    /// Deflection curve samples (mm)
    pub deflection_points: Vec<ResultPoint>,
    /// Slope curve samples (degrees)
    pub slope_points: Vec<ResultPoint>,
    /// Human-readable derivation trace
    pub steps: Vec<Step>,
}
