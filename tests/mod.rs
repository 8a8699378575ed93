//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
use dakin::data::linear_program::elements::Constraint;
use dakin::data::linear_program::integer_program::IntegerProgram;

/// # Small problems with a known outcome
mod scenarios;
/// # Properties that every decision tree should have
mod properties;

/// Create a problem from dense rows, all variables integer.
fn problem(objective: &[f64], rows: &[(&[f64], f64)]) -> IntegerProgram<f64> {
    let constraints = rows.iter()
        .map(|&(coefficients, bound)| Constraint::new(coefficients.to_vec(), bound))
        .collect();

    IntegerProgram::new(objective.to_vec(), constraints).unwrap()
}

/// Maximize `4x1 + 3x2 + 3x3` over three knapsack-like constraints.
fn textbook() -> IntegerProgram<f64> {
    problem(&[4f64, 3f64, 3f64], &[
        (&[4f64, 2f64, 1f64], 10f64),
        (&[3f64, 4f64, 2f64], 14f64),
        (&[2f64, 1f64, 3f64], 7f64),
    ])
}
