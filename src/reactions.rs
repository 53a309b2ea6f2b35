//! Support reactions
//!
//! Reactions are computed per load from statics and summed by linear
//! superposition. A load whose extent does not intersect the supported
//! span contributes zero reaction; it is ignored, not an error.

use serde::{Deserialize, Serialize};

use crate::beam::{BeamType, NormalizedBeam};
use crate::loads::Load;

/// Reaction forces and end moments at the supports (N, N m)
///
/// `r2` is zero for a cantilever. End moments are present only where the
/// support condition develops them: `m1` for cantilever and fixed beams,
/// `m2` for fixed beams. Fixed-end moments follow the convention `m1 <= 0`,
/// `m2 >= 0` for downward loads; the cantilever `m1` is the (positive)
/// restraining moment magnitude about the fixed end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reactions {
    /// Vertical reaction at the left support
    pub r1: f64,
    /// Vertical reaction at the right support
    pub r2: f64,
    /// End moment at the left support, where the support is fixed
    pub m1: Option<f64>,
    /// End moment at the right support, where the support is fixed
    pub m2: Option<f64>,
}

impl Reactions {
    /// Zero reactions with the moment slots appropriate for the beam type
    pub fn zero(beam_type: BeamType) -> Self {
        let (m1, m2) = match beam_type {
            BeamType::SimplySupported => (None, None),
            BeamType::Cantilever => (Some(0.0), None),
            BeamType::Fixed => (Some(0.0), Some(0.0)),
        };
        Self {
            r1: 0.0,
            r2: 0.0,
            m1,
            m2,
        }
    }

    /// Superpose another set of reactions onto this one
    pub fn combine(self, other: Self) -> Self {
        let add = |a: Option<f64>, b: Option<f64>| match (a, b) {
            (Some(x), Some(y)) => Some(x + y),
            (Some(x), None) | (None, Some(x)) => Some(x),
            (None, None) => None,
        };
        Self {
            r1: self.r1 + other.r1,
            r2: self.r2 + other.r2,
            m1: add(self.m1, other.m1),
            m2: add(self.m2, other.m2),
        }
    }

    /// Total vertical force carried by the supports
    pub fn total_force(&self) -> f64 {
        self.r1 + self.r2
    }
}

/// Reactions produced by a single load
pub fn reactions_for_load(beam: &NormalizedBeam, load: &Load) -> Reactions {
    let s1 = beam.left_support;
    let span = beam.span();
    let force = load.resultant_between(s1, beam.span_end());
    if force == 0.0 {
        return Reactions::zero(beam.beam_type);
    }
    // distance of the clipped resultant from the left support
    let a = load
        .centroid_between(s1, beam.span_end())
        .map(|c| c - s1)
        .unwrap_or(0.0);

    match beam.beam_type {
        BeamType::SimplySupported => {
            // lever rule about the left support
            let r2 = force * a / span;
            Reactions {
                r1: force - r2,
                r2,
                m1: None,
                m2: None,
            }
        }
        BeamType::Cantilever => Reactions {
            r1: force,
            r2: 0.0,
            m1: Some(force * a),
            m2: None,
        },
        BeamType::Fixed => fixed_reactions(beam, load, force, a, span),
    }
}

/// Fixed-fixed reactions: exact table values for a point load and for a
/// uniform load covering the whole span; otherwise the load is replaced by
/// its resultant at its centroid (an approximation carried over from the
/// reference behavior, not exact elasticity).
fn fixed_reactions(beam: &NormalizedBeam, load: &Load, force: f64, a: f64, span: f64) -> Reactions {
    if let Load::Uniform { start, end, .. } = *load {
        let full = (start - beam.left_support).abs() < 1e-9
            && (end - beam.right_support).abs() < 1e-9;
        if full {
            let w = force / span;
            return Reactions {
                r1: force / 2.0,
                r2: force / 2.0,
                m1: Some(-w * span * span / 12.0),
                m2: Some(w * span * span / 12.0),
            };
        }
    }
    let b = span - a;
    let l3 = span.powi(3);
    let r1 = force * b * b * (span + 2.0 * a) / l3;
    Reactions {
        r1,
        r2: force - r1,
        m1: Some(-force * a * b * b / (span * span)),
        m2: Some(force * a * a * b / (span * span)),
    }
}

/// Total reactions for all loads on the beam
pub fn total_reactions(beam: &NormalizedBeam) -> Reactions {
    beam.loads
        .iter()
        .map(|load| reactions_for_load(beam, load))
        .fold(Reactions::zero(beam.beam_type), Reactions::combine)
}
