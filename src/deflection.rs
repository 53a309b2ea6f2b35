//! Closed-form slope and deflection evaluation
//!
//! Double-integration (conjugate beam) results per support and load type,
//! superposed over loads. Positive load magnitudes act downward and
//! deflection is reported positive downward; slope is the derivative of
//! deflection with respect to x (radians).
//!
//! Point-load responses are coded directly from the beam tables. For
//! distributed loads the point-load kernel is expressed as a polynomial in
//! the load position `u` and integrated exactly against the intensity
//! profile, so the triangular branch inside the load span is the exact
//! integral of the linearly varying intensity, not an equivalent-point
//! shortcut. Where the reference behavior calls for the equivalent-point
//! approximation (partial uniform loads on simple spans, anything but a
//! point or full uniform load on a fixed-fixed beam) that approximation is
//! kept deliberately.

use crate::beam::{BeamType, NormalizedBeam};
use crate::loads::Load;

/// Positional tolerance when deciding whether a load covers the full span
const SPAN_EPS: f64 = 1e-9;

/// Which response curve to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Response {
    Deflection,
    Slope,
}

/// Deflection at `x` (m, positive downward), all loads superposed
pub fn deflection_at(beam: &NormalizedBeam, x: f64) -> f64 {
    beam.loads
        .iter()
        .map(|load| load_response(beam, load, x, Response::Deflection))
        .sum()
}

/// Slope at `x` (radians), all loads superposed
pub fn slope_at(beam: &NormalizedBeam, x: f64) -> f64 {
    beam.loads
        .iter()
        .map(|load| load_response(beam, load, x, Response::Slope))
        .sum()
}

/// Deflection at `x` due to a single load (m)
pub fn load_deflection(beam: &NormalizedBeam, load: &Load, x: f64) -> f64 {
    load_response(beam, load, x, Response::Deflection)
}

/// Slope at `x` due to a single load (radians)
pub fn load_slope(beam: &NormalizedBeam, load: &Load, x: f64) -> f64 {
    load_response(beam, load, x, Response::Slope)
}

fn load_response(beam: &NormalizedBeam, load: &Load, x: f64, response: Response) -> f64 {
    let value = match beam.beam_type {
        BeamType::SimplySupported => simply_supported(beam, load, x, response),
        BeamType::Cantilever => cantilever(beam, load, x, response),
        BeamType::Fixed => fixed(beam, load, x, response),
    };
    value / beam.ei()
}

// ---------------------------------------------------------------------------
// Simply supported span
// ---------------------------------------------------------------------------

/// EI-scaled response of a simply supported span, coordinates measured from
/// the left support. Outside the supported span the response is zero.
fn simply_supported(beam: &NormalizedBeam, load: &Load, x: f64, response: Response) -> f64 {
    let span = beam.span();
    let xi = x - beam.left_support;
    if xi < 0.0 || xi > span {
        return 0.0;
    }
    match *load {
        Load::Point {
            magnitude,
            position,
        } => {
            let a = position - beam.left_support;
            if a < 0.0 || a > span {
                return 0.0;
            }
            ss_point(magnitude, a, span, xi, response)
        }
        Load::Uniform {
            magnitude,
            start,
            end,
        } => {
            let full = (start - beam.left_support).abs() < SPAN_EPS
                && (end - beam.right_support).abs() < SPAN_EPS;
            if full {
                ss_full_uniform(magnitude, span, xi, response)
            } else {
                ss_equivalent_point(beam, load, span, xi, response)
            }
        }
        Load::Triangular {
            magnitude,
            start,
            end,
        } => {
            if load.within(beam.left_support, beam.right_support) {
                let c = start - beam.left_support;
                let d = end - beam.left_support;
                if xi >= c && xi <= d {
                    // exact integral of the linear intensity over [c, d]
                    let k = magnitude / (d - c);
                    let (left, right) = match response {
                        Response::Deflection => {
                            (ss_delta_kernel_left(xi, span), ss_delta_kernel_right(xi, span))
                        }
                        Response::Slope => {
                            (ss_theta_kernel_left(xi, span), ss_theta_kernel_right(xi, span))
                        }
                    };
                    return distributed_response(left, right, -k * c, k, c, d, xi);
                }
            }
            ss_equivalent_point(beam, load, span, xi, response)
        }
    }
}

/// Point load on a simply supported span: piecewise cubic in x, from the
/// standard table. `a` is the load position, `xi` the section, both from
/// the left support.
fn ss_point(p: f64, a: f64, span: f64, xi: f64, response: Response) -> f64 {
    let b = span - a;
    match response {
        Response::Deflection => {
            if xi <= a {
                p * b * xi * (span * span - b * b - xi * xi) / (6.0 * span)
            } else {
                p * a * (span - xi) * (2.0 * span * xi - a * a - xi * xi) / (6.0 * span)
            }
        }
        Response::Slope => {
            if xi <= a {
                p * b * (span * span - b * b - 3.0 * xi * xi) / (6.0 * span)
            } else {
                p * a * (a * a + 3.0 * xi * xi - 6.0 * span * xi + 2.0 * span * span) / (6.0 * span)
            }
        }
    }
}

/// Uniform load over the whole span: the classic quartic
fn ss_full_uniform(w: f64, span: f64, xi: f64, response: Response) -> f64 {
    match response {
        Response::Deflection => {
            w * xi * (span.powi(3) - 2.0 * span * xi * xi + xi.powi(3)) / 24.0
        }
        Response::Slope => {
            w * (span.powi(3) - 6.0 * span * xi * xi + 4.0 * xi.powi(3)) / 24.0
        }
    }
}

/// Replace the supported part of a distributed load by its resultant at its
/// centroid and apply the point-load formula
fn ss_equivalent_point(
    beam: &NormalizedBeam,
    load: &Load,
    span: f64,
    xi: f64,
    response: Response,
) -> f64 {
    let force = load.resultant_between(beam.left_support, beam.right_support);
    match load.centroid_between(beam.left_support, beam.right_support) {
        Some(centroid) => ss_point(force, centroid - beam.left_support, span, xi, response),
        None => 0.0,
    }
}

// ---------------------------------------------------------------------------
// Cantilever (fixed at the left support, free at the beam tip)
// ---------------------------------------------------------------------------

/// EI-scaled cantilever response, coordinates measured from the fixed end.
/// Loads left of the fixed end are ignored; sections left of it are rigid.
fn cantilever(beam: &NormalizedBeam, load: &Load, x: f64, response: Response) -> f64 {
    let xi = x - beam.left_support;
    if xi < 0.0 {
        return 0.0;
    }
    match *load {
        Load::Point {
            magnitude,
            position,
        } => {
            let a = position - beam.left_support;
            if a < 0.0 {
                return 0.0;
            }
            cant_point(magnitude, a, xi, response)
        }
        Load::Uniform {
            magnitude,
            start,
            end,
        } => {
            let c = (start - beam.left_support).max(0.0);
            let d = end - beam.left_support;
            if d <= c {
                return 0.0;
            }
            let (left, right) = cant_kernels(xi, response);
            distributed_response(left, right, magnitude, 0.0, c, d, xi)
        }
        Load::Triangular {
            magnitude,
            start,
            end,
        } => {
            // intensity k (u - c0) stays linear even when the load is
            // clipped at the fixed end, so the exact integral still applies
            let c0 = start - beam.left_support;
            let c = c0.max(0.0);
            let d = end - beam.left_support;
            if d <= c {
                return 0.0;
            }
            let k = magnitude / (end - start);
            let (left, right) = cant_kernels(xi, response);
            distributed_response(left, right, -k * c0, k, c, d, xi)
        }
    }
}

/// Point load on a cantilever: response saturates beyond the load
fn cant_point(p: f64, a: f64, xi: f64, response: Response) -> f64 {
    match response {
        Response::Deflection => {
            if xi <= a {
                p * xi * xi * (3.0 * a - xi) / 6.0
            } else {
                p * a * a * (3.0 * xi - a) / 6.0
            }
        }
        Response::Slope => {
            if xi <= a {
                p * xi * (2.0 * a - xi) / 2.0
            } else {
                p * a * a / 2.0
            }
        }
    }
}

fn cant_kernels(xi: f64, response: Response) -> ([f64; 4], [f64; 4]) {
    match response {
        Response::Deflection => (
            // load left of the section: u^2 (3 xi - u) / 6
            [0.0, 0.0, xi / 2.0, -1.0 / 6.0],
            // load right of the section: xi^2 (3 u - xi) / 6
            [-xi.powi(3) / 6.0, xi * xi / 2.0, 0.0, 0.0],
        ),
        Response::Slope => (
            // u^2 / 2
            [0.0, 0.0, 0.5, 0.0],
            // xi (2 u - xi) / 2
            [-xi * xi / 2.0, xi, 0.0, 0.0],
        ),
    }
}

// ---------------------------------------------------------------------------
// Fixed at both supports
// ---------------------------------------------------------------------------

/// EI-scaled fixed-fixed response. Point loads and full-span uniform loads
/// use the exact table results; everything else uses the resultant at its
/// centroid in the point-load formula. That substitution is an
/// approximation inherited from the reference behavior, kept for
/// compatibility rather than corrected.
fn fixed(beam: &NormalizedBeam, load: &Load, x: f64, response: Response) -> f64 {
    let span = beam.span();
    let xi = x - beam.left_support;
    if xi < 0.0 || xi > span {
        return 0.0;
    }
    if let Load::Uniform {
        magnitude,
        start,
        end,
    } = *load
    {
        let full = (start - beam.left_support).abs() < SPAN_EPS
            && (end - beam.right_support).abs() < SPAN_EPS;
        if full {
            return match response {
                Response::Deflection => {
                    magnitude * xi * xi * (span - xi) * (span - xi) / 24.0
                }
                Response::Slope => {
                    magnitude * xi * (span - xi) * (span - 2.0 * xi) / 12.0
                }
            };
        }
    }
    let force = load.resultant_between(beam.left_support, beam.right_support);
    match load.centroid_between(beam.left_support, beam.right_support) {
        Some(centroid) => fixed_point(force, centroid - beam.left_support, span, xi, response),
        None => 0.0,
    }
}

/// Point load on a fixed-fixed span: zero slope and deflection at both
/// ends by construction
fn fixed_point(p: f64, a: f64, span: f64, xi: f64, response: Response) -> f64 {
    let b = span - a;
    let l3 = span.powi(3);
    match response {
        Response::Deflection => {
            if xi <= a {
                p * b * b * xi * xi * (3.0 * a * span - (3.0 * a + b) * xi) / (6.0 * l3)
            } else {
                let m = span - xi;
                p * a * a * m * m * (3.0 * b * span - (3.0 * b + a) * m) / (6.0 * l3)
            }
        }
        Response::Slope => {
            if xi <= a {
                p * b * b * xi * (2.0 * a * span - (3.0 * a + b) * xi) / (2.0 * l3)
            } else {
                let m = span - xi;
                -p * a * a * m * (2.0 * b * span - (3.0 * b + a) * m) / (2.0 * l3)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Exact integration of point-load kernels against a linear intensity
// ---------------------------------------------------------------------------

/// Simply supported deflection kernel for a unit load at `u >= x`
fn ss_delta_kernel_right(x: f64, span: f64) -> [f64; 4] {
    [
        -x.powi(3) / 6.0,
        x * (2.0 * span * span + x * x) / (6.0 * span),
        -x / 2.0,
        x / (6.0 * span),
    ]
}

/// Simply supported deflection kernel for a unit load at `u < x`
fn ss_delta_kernel_left(x: f64, span: f64) -> [f64; 4] {
    [
        0.0,
        (span - x) * (2.0 * span * x - x * x) / (6.0 * span),
        0.0,
        -(span - x) / (6.0 * span),
    ]
}

/// Simply supported slope kernel for a unit load at `u >= x`
fn ss_theta_kernel_right(x: f64, span: f64) -> [f64; 4] {
    [
        -x * x / 2.0,
        (2.0 * span * span + 3.0 * x * x) / (6.0 * span),
        -0.5,
        1.0 / (6.0 * span),
    ]
}

/// Simply supported slope kernel for a unit load at `u < x`
fn ss_theta_kernel_left(x: f64, span: f64) -> [f64; 4] {
    [
        0.0,
        (3.0 * x * x - 6.0 * span * x + 2.0 * span * span) / (6.0 * span),
        0.0,
        1.0 / (6.0 * span),
    ]
}

/// Integrate `(alpha + beta u) * poly(u)` exactly over `[lo, hi]`
fn integrate_linear_times_poly(poly: [f64; 4], alpha: f64, beta: f64, lo: f64, hi: f64) -> f64 {
    if hi <= lo {
        return 0.0;
    }
    let product = [
        alpha * poly[0],
        alpha * poly[1] + beta * poly[0],
        alpha * poly[2] + beta * poly[1],
        alpha * poly[3] + beta * poly[2],
        beta * poly[3],
    ];
    let mut sum = 0.0;
    for (i, coeff) in product.iter().enumerate() {
        let n = (i + 1) as i32;
        sum += coeff * (hi.powi(n) - lo.powi(n)) / f64::from(n);
    }
    sum
}

/// Superpose the point kernel over a distributed load on `[c, d]` with
/// intensity `alpha + beta u`, splitting at the section when it lies inside
fn distributed_response(
    left: [f64; 4],
    right: [f64; 4],
    alpha: f64,
    beta: f64,
    c: f64,
    d: f64,
    x: f64,
) -> f64 {
    let split = x.clamp(c, d);
    integrate_linear_times_poly(left, alpha, beta, c, split)
        + integrate_linear_times_poly(right, alpha, beta, split, d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beam::{BeamDescription, BeamType};
    use approx::assert_relative_eq;

    const E: f64 = 200_000.0; // MPa
    const I: f64 = 4e7; // mm^4
    const EI: f64 = 8e6; // N m^2, the same beam in SI

    fn beam(beam_type: BeamType, length: f64, load: Load) -> NormalizedBeam {
        BeamDescription::new(length, E, I, beam_type)
            .with_load(load)
            .normalize()
    }

    #[test]
    fn test_ss_point_midspan_deflection() {
        let b = beam(BeamType::SimplySupported, 5.0, Load::point(10.0, 2.5));
        let expected = 10_000.0 * 5.0_f64.powi(3) / (48.0 * EI);
        assert_relative_eq!(deflection_at(&b, 2.5), expected, max_relative = 1e-12);
        assert_relative_eq!(slope_at(&b, 2.5), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_ss_point_end_slopes() {
        let b = beam(BeamType::SimplySupported, 5.0, Load::point(10.0, 2.5));
        let expected = 10_000.0 * 25.0 / (16.0 * EI);
        assert_relative_eq!(slope_at(&b, 0.0), expected, max_relative = 1e-12);
        assert_relative_eq!(slope_at(&b, 5.0), -expected, max_relative = 1e-12);
    }

    #[test]
    fn test_ss_full_uniform_midspan() {
        let b = beam(BeamType::SimplySupported, 4.0, Load::uniform(3.0, 0.0, 4.0));
        let w = 3_000.0;
        let expected = 5.0 * w * 4.0_f64.powi(4) / (384.0 * EI);
        assert_relative_eq!(deflection_at(&b, 2.0), expected, max_relative = 1e-12);
        let theta0 = w * 4.0_f64.powi(3) / (24.0 * EI);
        assert_relative_eq!(slope_at(&b, 0.0), theta0, max_relative = 1e-12);
    }

    #[test]
    fn test_ss_full_triangular_matches_table() {
        // w x (7 L^4 - 10 L^2 x^2 + 3 x^4) / (360 L EI), peak at the right end
        let length = 6.0;
        let b = beam(
            BeamType::SimplySupported,
            length,
            Load::triangular(4.0, 0.0, length),
        );
        let w = 4_000.0;
        for x in [0.5, 1.5, 3.0, 4.5, 5.5] {
            let expected = w * x * (7.0 * length.powi(4) - 10.0 * length * length * x * x
                + 3.0 * x.powi(4))
                / (360.0 * length * EI);
            assert_relative_eq!(deflection_at(&b, x), expected, max_relative = 1e-9);
        }
        let theta0 = 7.0 * w * length.powi(3) / (360.0 * EI);
        assert_relative_eq!(slope_at(&b, 0.0), theta0, max_relative = 1e-9);
    }

    #[test]
    fn test_cantilever_tip_point_load() {
        let b = beam(BeamType::Cantilever, 2.0, Load::point(10.0, 2.0));
        let expected = 10_000.0 * 8.0 / (3.0 * EI);
        assert_relative_eq!(deflection_at(&b, 2.0), expected, max_relative = 1e-12);
        let theta = 10_000.0 * 4.0 / (2.0 * EI);
        assert_relative_eq!(slope_at(&b, 2.0), theta, max_relative = 1e-12);
        assert_relative_eq!(deflection_at(&b, 0.0), 0.0);
        assert_relative_eq!(slope_at(&b, 0.0), 0.0);
    }

    #[test]
    fn test_cantilever_full_uniform_tip() {
        let b = beam(BeamType::Cantilever, 3.0, Load::uniform(2.0, 0.0, 3.0));
        let w = 2_000.0;
        let expected = w * 3.0_f64.powi(4) / (8.0 * EI);
        assert_relative_eq!(deflection_at(&b, 3.0), expected, max_relative = 1e-12);
        let theta = w * 27.0 / (6.0 * EI);
        assert_relative_eq!(slope_at(&b, 3.0), theta, max_relative = 1e-12);
    }

    #[test]
    fn test_cantilever_full_triangular_tip() {
        // zero at the fixed end, peak at the tip: 11 w L^4 / 120 EI
        let b = beam(BeamType::Cantilever, 3.0, Load::triangular(2.0, 0.0, 3.0));
        let w = 2_000.0;
        let expected = 11.0 * w * 3.0_f64.powi(4) / (120.0 * EI);
        assert_relative_eq!(deflection_at(&b, 3.0), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_cantilever_saturates_past_load() {
        let b = beam(BeamType::Cantilever, 4.0, Load::uniform(2.0, 0.0, 2.0));
        // slope stops growing past the end of the load
        let theta_at_load_end = slope_at(&b, 2.0);
        assert_relative_eq!(slope_at(&b, 3.0), theta_at_load_end, max_relative = 1e-12);
        assert_relative_eq!(slope_at(&b, 4.0), theta_at_load_end, max_relative = 1e-12);
        // deflection keeps growing linearly
        let d2 = deflection_at(&b, 2.0);
        let d3 = deflection_at(&b, 3.0);
        let d4 = deflection_at(&b, 4.0);
        assert_relative_eq!(d4 - d3, d3 - d2, max_relative = 1e-9);
    }

    #[test]
    fn test_fixed_point_midspan() {
        let b = beam(BeamType::Fixed, 4.0, Load::point(10.0, 2.0));
        let expected = 10_000.0 * 4.0_f64.powi(3) / (192.0 * EI);
        assert_relative_eq!(deflection_at(&b, 2.0), expected, max_relative = 1e-12);
        assert_relative_eq!(deflection_at(&b, 0.0), 0.0);
        assert_relative_eq!(deflection_at(&b, 4.0), 0.0, epsilon = 1e-15);
        assert_relative_eq!(slope_at(&b, 0.0), 0.0);
        assert_relative_eq!(slope_at(&b, 4.0), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_fixed_full_uniform_midspan() {
        let b = beam(BeamType::Fixed, 4.0, Load::uniform(3.0, 0.0, 4.0));
        let w = 3_000.0;
        let expected = w * 4.0_f64.powi(4) / (384.0 * EI);
        assert_relative_eq!(deflection_at(&b, 2.0), expected, max_relative = 1e-12);
        assert_relative_eq!(slope_at(&b, 2.0), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_point_branches_are_continuous() {
        let b = beam(BeamType::SimplySupported, 5.0, Load::point(10.0, 1.7));
        let eps = 1e-9;
        assert_relative_eq!(
            deflection_at(&b, 1.7 - eps),
            deflection_at(&b, 1.7 + eps),
            max_relative = 1e-6
        );
        assert_relative_eq!(
            slope_at(&b, 1.7 - eps),
            slope_at(&b, 1.7 + eps),
            max_relative = 1e-6
        );
    }
}
