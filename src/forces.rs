//! Internal force evaluation
//!
//! Bending moment M(x) and shear V(x) by superposition of reaction and
//! load contributions, sagging-positive convention. The moment a load part
//! exerts about a section is its clipped resultant times its lever arm,
//! which reproduces the standard branches directly: a point load steps, a
//! uniform load ramps quadratically while the section is inside it, a
//! triangular load ramps cubically.
//!
//! These functions are total over `x` in `[0, length]`; behavior outside
//! that range is the caller's problem.

use crate::beam::{BeamType, NormalizedBeam};
use crate::loads::Load;
use crate::reactions::reactions_for_load;

/// Bending moment at `x` due to a single load (N m)
pub fn load_bending_moment(beam: &NormalizedBeam, load: &Load, x: f64) -> f64 {
    match beam.beam_type {
        BeamType::Cantilever => {
            if x < beam.left_support {
                return 0.0;
            }
            // a cantilever section carries everything to its right
            let window_lo = x.max(beam.left_support);
            let force = load.resultant_between(window_lo, beam.length);
            match load.centroid_between(window_lo, beam.length) {
                Some(centroid) => -force * (centroid - x),
                None => 0.0,
            }
        }
        BeamType::SimplySupported | BeamType::Fixed => {
            let r = reactions_for_load(beam, load);
            let mut m = 0.0;
            if x >= beam.left_support {
                m += r.r1 * (x - beam.left_support);
            }
            if x >= beam.right_support {
                m += r.r2 * (x - beam.right_support);
            }
            if beam.beam_type == BeamType::Fixed && x >= beam.left_support {
                m += r.m1.unwrap_or(0.0);
            }
            // moment of the supported load part left of the section
            let hi = x.min(beam.right_support);
            let force = load.resultant_between(beam.left_support, hi);
            if let Some(centroid) = load.centroid_between(beam.left_support, hi) {
                m -= force * (x - centroid);
            }
            m
        }
    }
}

/// Shear force at `x` due to a single load (N)
pub fn load_shear(beam: &NormalizedBeam, load: &Load, x: f64) -> f64 {
    match beam.beam_type {
        BeamType::Cantilever => {
            if x < beam.left_support {
                return 0.0;
            }
            load.resultant_between(x.max(beam.left_support), beam.length)
        }
        BeamType::SimplySupported | BeamType::Fixed => {
            let r = reactions_for_load(beam, load);
            let mut v = 0.0;
            if x >= beam.left_support {
                v += r.r1;
            }
            if x >= beam.right_support {
                v += r.r2;
            }
            v - load.resultant_between(beam.left_support, x.min(beam.right_support))
        }
    }
}

/// Bending moment at `x` for all loads (N m), sagging positive
pub fn bending_moment_at(beam: &NormalizedBeam, x: f64) -> f64 {
    beam.loads
        .iter()
        .map(|load| load_bending_moment(beam, load, x))
        .sum()
}

/// Shear force at `x` for all loads (N)
pub fn shear_at(beam: &NormalizedBeam, x: f64) -> f64 {
    beam.loads.iter().map(|load| load_shear(beam, load, x)).sum()
}
