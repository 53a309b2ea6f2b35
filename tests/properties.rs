//! Structural properties the solver must satisfy for any well-formed beam

use approx::assert_relative_eq;
use beam_solver::prelude::*;

const E: f64 = 200_000.0; // MPa
const I: f64 = 4e7; // mm^4

fn mixed_loads() -> Vec<Load> {
    vec![
        Load::point(10.0, 1.0),
        Load::uniform(3.0, 0.5, 3.5),
        Load::triangular(5.0, 2.0, 4.5),
    ]
}

#[test]
fn equilibrium_two_support_beams() {
    for beam_type in [BeamType::SimplySupported, BeamType::Fixed] {
        let mut beam = BeamDescription::new(5.0, E, I, beam_type);
        beam.loads = mixed_loads();
        let normalized = beam.normalize();

        let total: f64 = normalized.loads.iter().map(|l| l.resultant()).sum();
        let reactions = total_reactions(&normalized);
        assert_relative_eq!(reactions.total_force(), total, max_relative = 1e-9);
    }
}

#[test]
fn equilibrium_cantilever() {
    let mut beam = BeamDescription::new(5.0, E, I, BeamType::Cantilever);
    beam.loads = mixed_loads();
    let normalized = beam.normalize();

    let total: f64 = normalized.loads.iter().map(|l| l.resultant()).sum();
    let reactions = total_reactions(&normalized);
    assert_relative_eq!(reactions.r1, total, max_relative = 1e-9);
    assert_relative_eq!(reactions.r2, 0.0);
}

#[test]
fn boundary_conditions_all_beam_types() {
    for beam_type in [
        BeamType::SimplySupported,
        BeamType::Cantilever,
        BeamType::Fixed,
    ] {
        let mut beam = BeamDescription::new(5.0, E, I, beam_type);
        beam.loads = mixed_loads();
        let normalized = beam.normalize();

        assert_relative_eq!(deflection_at(&normalized, 0.0), 0.0, epsilon = 1e-12);
        match beam_type {
            BeamType::Cantilever => {
                // fixed end: zero slope as well
                assert_relative_eq!(slope_at(&normalized, 0.0), 0.0, epsilon = 1e-12);
            }
            _ => {
                assert_relative_eq!(deflection_at(&normalized, 5.0), 0.0, epsilon = 1e-12);
            }
        }
    }
}

#[test]
fn superposition_of_disjoint_load_sets() {
    let base = BeamDescription::new(6.0, E, I, BeamType::SimplySupported);

    let a = base.clone().with_load(Load::point(8.0, 2.0));
    let b = base
        .clone()
        .with_load(Load::uniform(2.0, 3.0, 5.0))
        .with_load(Load::triangular(4.0, 0.5, 2.5));
    let mut combined = base;
    combined.loads = a.loads.iter().chain(b.loads.iter()).copied().collect();

    let (a, b, combined) = (a.normalize(), b.normalize(), combined.normalize());
    for i in 0..=20 {
        let x = 6.0 * (i as f64) / 20.0;
        assert_relative_eq!(
            deflection_at(&combined, x),
            deflection_at(&a, x) + deflection_at(&b, x),
            max_relative = 1e-9,
            epsilon = 1e-15
        );
        assert_relative_eq!(
            slope_at(&combined, x),
            slope_at(&a, x) + slope_at(&b, x),
            max_relative = 1e-9,
            epsilon = 1e-15
        );
    }
}

#[test]
fn symmetry_of_midspan_point_load() {
    let beam = BeamDescription::new(5.0, E, I, BeamType::SimplySupported)
        .with_load(Load::point(10.0, 2.5))
        .normalize();
    for i in 0..=50 {
        let x = 5.0 * (i as f64) / 50.0;
        assert_relative_eq!(
            deflection_at(&beam, x),
            deflection_at(&beam, 5.0 - x),
            max_relative = 1e-9,
            epsilon = 1e-15
        );
    }
}

#[test]
fn analysis_is_idempotent() {
    let mut beam = BeamDescription::new(5.0, E, I, BeamType::Fixed);
    beam.loads = mixed_loads();

    let first = analyze(&beam).unwrap();
    let second = analyze(&beam).unwrap();
    assert_eq!(first, second);
}

#[test]
fn out_of_span_point_load_contributes_nothing() {
    let beam = BeamDescription::new(6.0, E, I, BeamType::SimplySupported)
        .with_load(Load::point(10.0, 5.5))
        .with_supports(0.0, 5.0)
        .normalize();

    let reactions = total_reactions(&beam);
    assert_relative_eq!(reactions.r1, 0.0);
    assert_relative_eq!(reactions.r2, 0.0);
    assert_relative_eq!(deflection_at(&beam, 2.5), 0.0);
}

#[test]
fn partially_overlapping_load_reacts_with_clipped_resultant() {
    // uniform load running past the right support: only the supported
    // part produces reactions
    let beam = BeamDescription::new(6.0, E, I, BeamType::SimplySupported)
        .with_load(Load::uniform(2.0, 4.0, 6.0))
        .with_supports(0.0, 5.0)
        .normalize();

    let reactions = total_reactions(&beam);
    // clipped part: 2 kN/m over [4, 5], resultant 2 kN at 4.5 m
    assert_relative_eq!(reactions.total_force(), 2_000.0, max_relative = 1e-9);
    assert_relative_eq!(reactions.r2, 2_000.0 * 4.5 / 5.0, max_relative = 1e-9);
}

#[test]
fn moment_vanishes_at_simple_supports() {
    let mut beam = BeamDescription::new(5.0, E, I, BeamType::SimplySupported);
    beam.loads = mixed_loads();
    let normalized = beam.normalize();

    assert_relative_eq!(bending_moment_at(&normalized, 0.0), 0.0, epsilon = 1e-9);
    assert_relative_eq!(bending_moment_at(&normalized, 5.0), 0.0, epsilon = 1e-9);
}

#[test]
fn fixed_end_moment_offsets_moment_diagram() {
    let beam = BeamDescription::new(4.0, E, I, BeamType::Fixed)
        .with_load(Load::point(8.0, 1.5))
        .normalize();
    let reactions = total_reactions(&beam);

    assert_relative_eq!(
        bending_moment_at(&beam, 0.0),
        reactions.m1.unwrap(),
        max_relative = 1e-9
    );
}
