//! Demo: analyze a reference beam and print the results
//!
//! Run with: cargo run --bin beam-example
//! Set RUST_LOG=debug for pipeline tracing.

use anyhow::Result;
use beam_solver::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    // 5 m simply supported beam of structural steel,
    // E = 200000 MPa, I = 4e7 mm^4, 10 kN point load at midspan
    let beam = BeamDescription::new(5.0, 200_000.0, 4e7, BeamType::SimplySupported)
        .with_load(Load::point(10.0, 2.5));

    let result = analyze(&beam)?;

    println!("Beam Solver example");
    println!("===================");
    println!(
        "Reactions: R1 = {:.3} kN, R2 = {:.3} kN",
        result.reactions.r1 / 1e3,
        result.reactions.r2 / 1e3
    );
    println!(
        "Max deflection: {:.4} mm at x = {:.2} m",
        result.deflection.max_value, result.deflection.max_position
    );
    println!(
        "End slopes: {:.4} deg / {:.4} deg",
        result.slope.left_end, result.slope.right_end
    );

    println!("\nDerivation:");
    for (i, step) in result.steps.iter().enumerate() {
        println!("{}. {}", i + 1, step.title);
        println!("   {}", step.description);
        if let Some(formula) = &step.formula {
            println!("   formula: {formula}");
        }
        if let Some(outcome) = &step.result {
            println!("   result:  {outcome}");
        }
    }

    // The document an export layer would offer for download
    let document = serde_json::json!({
        "parameters": beam,
        "results": result,
    });
    println!("\nJSON export:\n{}", serde_json::to_string_pretty(&document)?);

    Ok(())
}
