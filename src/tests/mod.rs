//! # Problems shared by the tests inside the crate.
//!
//! Convention for function names:
//!
//! * `fn <name>()`: the problem as an `IntegerProgram`
//! * `mod <name>_search`: the problem followed through every stage of a search
use crate::data::linear_program::elements::Constraint;
use crate::data::linear_program::integer_program::IntegerProgram;


/// Maximize `4x1 + 3x2 + 3x3` over three knapsack-like constraints.
///
/// The relaxation optimum is `(1.2, 2.2, 0.8)` with value `13.8`, the integer optimum is `(1, 2, 1)`
/// with value `13`.
pub fn textbook() -> IntegerProgram<f64> {
    IntegerProgram::new(
        vec![4f64, 3f64, 3f64],
        vec![
            Constraint::new(vec![4f64, 2f64, 1f64], 10f64),
            Constraint::new(vec![3f64, 4f64, 2f64], 14f64),
            Constraint::new(vec![2f64, 1f64, 3f64], 7f64),
        ],
    ).unwrap()
}

/// A single constraint `2x1 + 2x2 <= 3` that many integral points satisfy with the same value.
///
/// Both `(1, 0)` and `(0, 1)` attain the optimum `1`.
pub fn tied() -> IntegerProgram<f64> {
    IntegerProgram::new(
        vec![1f64, 1f64],
        vec![Constraint::new(vec![2f64, 2f64], 3f64)],
    ).unwrap()
}
