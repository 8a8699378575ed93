//! # Integrality of relaxation solutions
//!
//! Relaxation solvers work in floating point, so a value that "is" an integer will often be off by
//! a small amount. Values are compared to their nearest integer with a tolerance, and values that
//! sit right at the edge of that tolerance are reported instead of guessed at.
use num_traits::Float;

use crate::data::linear_program::elements::Variable;

/// Classification of a single value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum Integrality<F> {
    /// Within tolerance of the contained integer.
    Integral(F),
    /// Clearly not an integer.
    Fractional,
    /// Distance to the nearest integer is within the margin of the tolerance.
    Ambiguous,
}

/// Classify a value.
///
/// # Arguments
///
/// * `value`: Value to classify.
/// * `tolerance`: Maximum distance to the nearest integer for `value` to be integral.
/// * `margin`: Distances in `[tolerance - margin, tolerance + margin]` are ambiguous. Zero disables
/// this.
pub(crate) fn classify<F: Float>(value: F, tolerance: F, margin: F) -> Integrality<F> {
    let nearest = value.round();
    let distance = (value - nearest).abs();

    if margin > F::zero() && (distance - tolerance).abs() <= margin {
        Integrality::Ambiguous
    } else if distance <= tolerance {
        Integrality::Integral(nearest)
    } else {
        Integrality::Fractional
    }
}

/// Classification of an entire relaxation solution.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Point<F> {
    /// All integer variables are integral; contains the values with integer variables rounded.
    Integral(Vec<F>),
    /// The first integer variable, in declared order, that has a fractional value.
    Fractional {
        variable: usize,
    },
    /// An integer variable that could not be classified, before any fractional variable.
    Ambiguous {
        variable: usize,
        value: F,
    },
}

/// Select the branching variable: the first fractional integer variable in declared order.
///
/// Continuous variables are skipped. Scanning stops at the first variable that is not integral.
///
/// # Arguments
///
/// * `values`: Relaxation solution, one value per variable.
/// * `variables`: Variables of the problem, in order.
pub(crate) fn classify_point<F: Float>(
    values: &[F],
    variables: &[Variable],
    tolerance: F,
    margin: F,
) -> Point<F> {
    debug_assert_eq!(values.len(), variables.len());

    let mut rounded = Vec::with_capacity(values.len());
    for (variable, (&value, description)) in values.iter().zip(variables).enumerate() {
        if !description.is_integer() {
            rounded.push(value);
            continue;
        }

        match classify(value, tolerance, margin) {
            Integrality::Integral(integer) => rounded.push(integer),
            Integrality::Fractional => return Point::Fractional { variable },
            Integrality::Ambiguous => return Point::Ambiguous { variable, value },
        }
    }

    Point::Integral(rounded)
}
