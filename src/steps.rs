//! Narrative derivation trace
//!
//! Assembles the human-readable solution walkthrough: reactions, moment
//! diagram, conjugate-beam reasoning, then the interpreted slope and
//! deflection numbers. The formula template mirrors the branch the solver
//! actually took, which is why this lives in the core rather than the UI.

use crate::beam::{BeamDescription, BeamType};
use crate::loads::Load;
use crate::reactions::Reactions;
use crate::results::{CurveSummary, Step};

/// Build the derivation trace for an analyzed beam
///
/// `reactions` in N and N m; `deflection` in mm and `slope` in degrees,
/// as produced by the sampler.
pub fn generate_steps(
    beam: &BeamDescription,
    reactions: &Reactions,
    deflection: &CurveSummary,
    slope: &CurveSummary,
) -> Vec<Step> {
    vec![
        reaction_step(beam, reactions),
        moment_step(beam),
        conjugate_step(beam),
        Step::new(
            "Slope results",
            "Slope at each station equals the shear in the conjugate beam, \
             converted to degrees for reporting.",
        )
        .with_result(format!(
            "theta(0) = {:.4} deg, theta(L) = {:.4} deg, extreme {:.4} deg at x = {:.2} m",
            slope.left_end, slope.right_end, slope.max_value, slope.max_position
        )),
        Step::new(
            "Deflection results",
            "Deflection at each station equals the bending moment in the \
             conjugate beam, reported in millimeters.",
        )
        .with_result(format!(
            "delta(L/2) = {:.4} mm, extreme {:.4} mm at x = {:.2} m",
            deflection.midspan, deflection.max_value, deflection.max_position
        )),
    ]
}

fn reaction_step(beam: &BeamDescription, reactions: &Reactions) -> Step {
    let description = match beam.beam_type {
        BeamType::SimplySupported => {
            "Sum moments about the left support to find R2, then vertical \
             equilibrium for R1. Each load is clipped to the supported span."
        }
        BeamType::Cantilever => {
            "The fixed end carries the full resultant and its moment about \
             the fixed end. Loads left of the fixed end are unsupported and \
             contribute nothing."
        }
        BeamType::Fixed => {
            "Fixed-end moments from the beam tables, then vertical \
             equilibrium splits the resultant between the supports."
        }
    };

    let mut step = Step::new("Support reactions", description);
    if let Some(formula) = reaction_formula(beam) {
        step = step.with_formula(formula);
    }

    let mut result = format!(
        "R1 = {:.3} kN, R2 = {:.3} kN",
        reactions.r1 / 1e3,
        reactions.r2 / 1e3
    );
    if let Some(m1) = reactions.m1 {
        result.push_str(&format!(", M1 = {:.3} kN·m", m1 / 1e3));
    }
    if let Some(m2) = reactions.m2 {
        result.push_str(&format!(", M2 = {:.3} kN·m", m2 / 1e3));
    }
    step.with_result(result)
}

/// Formula template for the reaction step; per-load-type text only when a
/// single load makes one template meaningful
fn reaction_formula(beam: &BeamDescription) -> Option<String> {
    if beam.loads.len() != 1 {
        return Some("Superposition: sum the reactions of each load taken alone".to_string());
    }
    let text = match (beam.beam_type, &beam.loads[0]) {
        (BeamType::SimplySupported, Load::Point { .. }) => "R2 = P·a/L, R1 = P − R2",
        (BeamType::SimplySupported, Load::Uniform { .. }) => {
            "F = w·(x2 − x1) at the segment midpoint; R2 = F·a/L, R1 = F − R2"
        }
        (BeamType::SimplySupported, Load::Triangular { .. }) => {
            "F = w·(x2 − x1)/2 at x2 − (x2 − x1)/3; R2 = F·a/L, R1 = F − R2"
        }
        (BeamType::Cantilever, Load::Point { .. }) => "R1 = P, M1 = P·a",
        (BeamType::Cantilever, Load::Uniform { .. }) => "R1 = w·(x2 − x1), M1 = R1·x̄",
        (BeamType::Cantilever, Load::Triangular { .. }) => "R1 = w·(x2 − x1)/2, M1 = R1·x̄",
        (BeamType::Fixed, Load::Point { .. }) => {
            "M1 = −P·a·b²/L², M2 = P·a²·b/L²; R1 = P·b²·(L + 2a)/L³"
        }
        (BeamType::Fixed, Load::Uniform { .. }) => {
            "Full span: M1 = −w·L²/12, M2 = +w·L²/12, R1 = R2 = w·L/2; \
             partial spans use the resultant at its centroid"
        }
        (BeamType::Fixed, Load::Triangular { .. }) => {
            "Equivalent point load: F = w·(x2 − x1)/2 at the centroid in the \
             point-load fixed-end formulas (approximation)"
        }
    };
    Some(text.to_string())
}

fn moment_step(beam: &BeamDescription) -> Step {
    let (description, formula) = match beam.beam_type {
        BeamType::SimplySupported => (
            "Cut the beam at x and sum moments of everything to the left, \
             sagging positive.",
            "M(x) = R1·x − Σ F_i·(x − x̄_i) for loads crossed by x",
        ),
        BeamType::Cantilever => (
            "Cut the beam at x; only loads beyond the cut bend a cantilever \
             section, hogging the beam.",
            "M(x) = −Σ F_i·(x̄_i − x) for loads beyond x",
        ),
        BeamType::Fixed => (
            "Same statics as the simple span, offset by the fixed-end moment \
             at the left support.",
            "M(x) = M1 + R1·x − Σ F_i·(x − x̄_i)",
        ),
    };
    Step::new("Bending moment diagram", description).with_formula(formula)
}

fn conjugate_step(beam: &BeamDescription) -> Step {
    let description = match beam.beam_type {
        BeamType::SimplySupported => {
            "Load a conjugate beam with the same supports with M(x)/EI. Its \
             shear is the real slope, its bending moment the real deflection."
        }
        BeamType::Cantilever => {
            "The conjugate of a cantilever swaps the fixed and free ends. \
             Loading it with M(x)/EI gives zero slope and deflection at the \
             real fixed end by construction."
        }
        BeamType::Fixed => {
            "The conjugate of a fixed-fixed beam is free at both ends; the \
             M(x)/EI loading, including the end-moment offsets, must \
             self-balance, enforcing zero end slopes and deflections."
        }
    };
    Step::new("Conjugate beam", description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::beam::BeamDescription;

    fn reference_beam() -> BeamDescription {
        BeamDescription::new(5.0, 200_000.0, 4e7, BeamType::SimplySupported)
            .with_load(Load::point(10.0, 2.5))
    }

    #[test]
    fn test_step_skeleton_is_fixed() {
        let result = analyze(&reference_beam()).unwrap();
        let titles: Vec<&str> = result.steps.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Support reactions",
                "Bending moment diagram",
                "Conjugate beam",
                "Slope results",
                "Deflection results"
            ]
        );
    }

    #[test]
    fn test_single_point_load_selects_point_template() {
        let result = analyze(&reference_beam()).unwrap();
        let formula = result.steps[0].formula.as_deref().unwrap();
        assert!(formula.contains("R2 = P·a/L"));
        assert!(result.steps[0].result.as_deref().unwrap().contains("R1 = 5.000 kN"));
    }

    #[test]
    fn test_multiple_loads_fall_back_to_superposition() {
        let beam = reference_beam().with_load(Load::uniform(2.0, 0.0, 5.0));
        let result = analyze(&beam).unwrap();
        let formula = result.steps[0].formula.as_deref().unwrap();
        assert!(formula.contains("Superposition"));
    }
}
