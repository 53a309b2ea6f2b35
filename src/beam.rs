//! Beam description and unit normalization

use serde::{Deserialize, Serialize};

use crate::error::{BeamError, BeamResult};
use crate::loads::Load;

/// Support condition of the beam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BeamType {
    /// Pinned at the left support, roller at the right support
    SimplySupported,
    /// Fixed at the left support, free at the right end
    Cantilever,
    /// Fixed at both supports
    Fixed,
}

/// A single-span beam with its loads, in user-facing units
///
/// Lengths in m, elastic modulus in MPa, moment of inertia in mm^4, load
/// magnitudes in kN or kN/m. Call [`BeamDescription::normalize`] before
/// handing the beam to the solver functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeamDescription {
    /// Beam length (m)
    pub length: f64,
    /// Elastic modulus (MPa)
    pub elastic_modulus: f64,
    /// Second moment of area (mm^4)
    pub moment_of_inertia: f64,
    /// Support condition
    pub beam_type: BeamType,
    /// Applied loads (kN, kN/m)
    pub loads: Vec<Load>,
    /// Left support position (m), defaults to 0
    #[serde(default)]
    pub left_support: Option<f64>,
    /// Right support position (m), defaults to the beam length
    ///
    /// Not meaningful for a cantilever, whose fixed end sits at the left
    /// support and whose free end is the beam tip.
    #[serde(default)]
    pub right_support: Option<f64>,
}

impl BeamDescription {
    /// Create a beam with no loads and default support positions
    pub fn new(length: f64, elastic_modulus: f64, moment_of_inertia: f64, beam_type: BeamType) -> Self {
        Self {
            length,
            elastic_modulus,
            moment_of_inertia,
            beam_type,
            loads: Vec::new(),
            left_support: None,
            right_support: None,
        }
    }

    /// Add a load
    pub fn with_load(mut self, load: Load) -> Self {
        self.loads.push(load);
        self
    }

    /// Set explicit support positions
    pub fn with_supports(mut self, left: f64, right: f64) -> Self {
        self.left_support = Some(left);
        self.right_support = Some(right);
        self
    }

    /// Resolved left support position
    pub fn left_support_position(&self) -> f64 {
        self.left_support.unwrap_or(0.0)
    }

    /// Resolved right support position
    pub fn right_support_position(&self) -> f64 {
        self.right_support.unwrap_or(self.length)
    }

    /// Check the invariants the solver assumes
    ///
    /// The solver functions themselves never validate; they are total over
    /// well-formed input and unspecified otherwise. [`crate::analysis::analyze`]
    /// runs this check at the boundary.
    pub fn validate(&self) -> BeamResult<()> {
        if self.length <= 0.0 {
            return Err(BeamError::NonPositiveLength(self.length));
        }
        if self.elastic_modulus <= 0.0 {
            return Err(BeamError::NonPositiveModulus(self.elastic_modulus));
        }
        if self.moment_of_inertia <= 0.0 {
            return Err(BeamError::NonPositiveInertia(self.moment_of_inertia));
        }
        if self.loads.is_empty() {
            return Err(BeamError::NoLoads);
        }
        for load in &self.loads {
            let (start, end) = load.extent();
            match *load {
                Load::Point { magnitude, .. } => {
                    if magnitude <= 0.0 {
                        return Err(BeamError::NonPositiveLoadMagnitude(magnitude));
                    }
                }
                Load::Uniform { magnitude, .. } | Load::Triangular { magnitude, .. } => {
                    if magnitude <= 0.0 {
                        return Err(BeamError::NonPositiveLoadMagnitude(magnitude));
                    }
                    if start >= end {
                        return Err(BeamError::InvalidLoadExtent { start, end });
                    }
                }
            }
            for position in [start, end] {
                if position < 0.0 || position > self.length {
                    return Err(BeamError::LoadOutOfBounds {
                        position,
                        length: self.length,
                    });
                }
            }
        }
        let left = self.left_support_position();
        let right = self.right_support_position();
        for position in [left, right] {
            if position < 0.0 || position > self.length {
                return Err(BeamError::SupportOutOfBounds {
                    position,
                    length: self.length,
                });
            }
        }
        if left >= right {
            return Err(BeamError::InvalidSupports { left, right });
        }
        Ok(())
    }

    /// Convert to SI base units for analysis
    pub fn normalize(&self) -> NormalizedBeam {
        NormalizedBeam {
            length: self.length,
            elastic_modulus: self.elastic_modulus * 1e6,
            moment_of_inertia: self.moment_of_inertia * 1e-12,
            beam_type: self.beam_type,
            loads: self.loads.iter().map(|l| l.scaled(1e3)).collect(),
            left_support: self.left_support_position(),
            right_support: self.right_support_position(),
        }
    }
}

/// A beam description in SI base units (N, Pa, m^4)
///
/// Derived on demand from [`BeamDescription`]; all solver functions operate
/// on this form. Output back-conversion (m to mm, rad to degrees) happens
/// only at the sampling boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedBeam {
    /// Beam length (m)
    pub length: f64,
    /// Elastic modulus (Pa)
    pub elastic_modulus: f64,
    /// Second moment of area (m^4)
    pub moment_of_inertia: f64,
    /// Support condition
    pub beam_type: BeamType,
    /// Applied loads (N, N/m)
    pub loads: Vec<Load>,
    /// Left support position (m)
    pub left_support: f64,
    /// Right support position (m)
    pub right_support: f64,
}

impl NormalizedBeam {
    /// Flexural rigidity EI (N m^2)
    pub fn ei(&self) -> f64 {
        self.elastic_modulus * self.moment_of_inertia
    }

    /// Distance between the supports
    ///
    /// For a cantilever: distance from the fixed end to the beam tip.
    pub fn span(&self) -> f64 {
        match self.beam_type {
            BeamType::Cantilever => self.length - self.left_support,
            _ => self.right_support - self.left_support,
        }
    }

    /// Right edge of the supported region
    pub fn span_end(&self) -> f64 {
        match self.beam_type {
            BeamType::Cantilever => self.length,
            _ => self.right_support,
        }
    }
}
