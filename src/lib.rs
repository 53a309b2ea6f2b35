//! Beam Solver - closed-form structural analysis for single-span beams
//!
//! This library computes reactions, internal forces, and the deflected
//! shape of a single-span prismatic beam under combined point, uniform,
//! and triangular loads, for three support conditions:
//! - simply supported
//! - cantilever (fixed at the left support)
//! - fixed at both ends
//!
//! The solver is deliberately a closed-form, superposition-based
//! analytical engine: per load type and support condition it applies the
//! double-integration (conjugate beam) results from the beam tables, and
//! sums contributions over loads. There is no stiffness matrix, no
//! multi-span continuity, and no dynamic loading.
//!
//! ## Example
//! ```rust
//! use beam_solver::prelude::*;
//!
//! // 5 m simply supported beam, E = 200000 MPa, I = 4e7 mm^4,
//! // 10 kN point load at midspan
//! let beam = BeamDescription::new(5.0, 200_000.0, 4e7, BeamType::SimplySupported)
//!     .with_load(Load::point(10.0, 2.5));
//!
//! let result = analyze(&beam).unwrap();
//!
//! // R1 = R2 = 5 kN, max deflection P L^3 / 48 EI at midspan
//! assert!((result.reactions.r1 - 5_000.0).abs() < 1e-9);
//! assert!((result.deflection.max_position - 2.5).abs() < 1e-9);
//! ```
//!
//! Units at the boundary are user-facing (m, MPa, mm^4, kN); the solver
//! works in SI internally and reports deflection in mm and slope in
//! degrees. Positive load magnitudes act downward and deflection is
//! positive downward.

pub mod analysis;
pub mod beam;
pub mod deflection;
pub mod error;
pub mod forces;
pub mod loads;
pub mod reactions;
pub mod results;
pub mod sampler;
pub mod steps;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{analyze, analyze_with, AnalysisOptions};
    pub use crate::beam::{BeamDescription, BeamType, NormalizedBeam};
    pub use crate::deflection::{deflection_at, slope_at};
    pub use crate::error::{BeamError, BeamResult};
    pub use crate::forces::{bending_moment_at, shear_at};
    pub use crate::loads::Load;
    pub use crate::reactions::{reactions_for_load, total_reactions, Reactions};
    pub use crate::results::{AnalysisResult, CurveSummary, ResultPoint, Step};
}
