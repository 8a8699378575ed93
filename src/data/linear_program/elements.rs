//! # Building blocks to describe integer linear programs.
use std::fmt;
use std::fmt::Display;
use std::ops::Neg;

use itertools::Itertools;
use num_traits::{Float, One};

/// Direction of a bound.
///
/// Branching cuts are bounds on a single variable, either from below or from above.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BoundDirection {
    /// In the case of a variable, x >= b >= 0 (variables are nonnegative and branching might only
    /// bring that bound higher).
    Lower,
    /// In the case of a variable, 0 <= x <= b.
    Upper,
}

impl BoundDirection {
    /// Convert a bound direction into a positive or negative one.
    ///
    /// Bounds are written as `<=` rows, so upper bounds keep their sign and lower bounds are
    /// negated.
    #[must_use]
    pub fn into<F: One + Neg<Output = F>>(self) -> F {
        match self {
            BoundDirection::Lower => -F::one(),
            BoundDirection::Upper => F::one(),
        }
    }
}

/// A variable is either continuous or integer.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum VariableType {
    Continuous,
    #[default]
    Integer,
}

/// A decision variable.
///
/// All variables have a lower bound of zero. Upper bounds only arise as constraints, either from
/// the original problem or from branching.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Variable {
    /// Name used when printing problems and solutions.
    pub name: String,
    /// Whether the variable may only take integer values.
    pub variable_type: VariableType,
}

impl Variable {
    /// Create a new integer variable.
    pub fn integer(name: impl Into<String>) -> Self {
        Self { name: name.into(), variable_type: VariableType::Integer }
    }

    /// Create a new continuous variable.
    ///
    /// Continuous variables are never branched on.
    pub fn continuous(name: impl Into<String>) -> Self {
        Self { name: name.into(), variable_type: VariableType::Continuous }
    }

    /// Whether this variable has an integrality requirement.
    pub fn is_integer(&self) -> bool {
        self.variable_type == VariableType::Integer
    }
}

/// A linear inequality `<coefficients, x> <= bound`.
///
/// The coefficients are aligned with the variable order of the problem they belong to.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint<F> {
    /// One coefficient per variable.
    pub coefficients: Vec<F>,
    /// Right-hand side.
    pub bound: F,
}

impl<F: Float> Constraint<F> {
    /// Create a new constraint.
    pub fn new(coefficients: Vec<F>, bound: F) -> Self {
        Self { coefficients, bound }
    }

    /// Left-hand side of the constraint, evaluated at `values`.
    ///
    /// # Arguments
    ///
    /// * `values`: One value per variable.
    pub fn activity(&self, values: &[F]) -> F {
        self.coefficients.iter().zip_eq(values)
            .fold(F::zero(), |total, (&coefficient, &value)| total + coefficient * value)
    }

    /// Whether `values` satisfy this constraint, up to `tolerance`.
    pub fn is_satisfied_by(&self, values: &[F], tolerance: F) -> bool {
        self.activity(values) <= self.bound + tolerance
    }
}

/// The single constraint that distinguishes a child subproblem from its parent.
///
/// Reads as `x_variable <= bound` for an upper bound, and `x_variable >= bound` for a lower bound.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BranchingCut<F> {
    /// Index of the variable that was branched on.
    pub variable: usize,
    /// Side of the bound.
    pub direction: BoundDirection,
    /// Integer valued bound.
    pub bound: F,
}

impl<F: Float> BranchingCut<F> {
    /// The two cuts that split the domain of a variable with fractional value `value`.
    ///
    /// # Return value
    ///
    /// The `x <= floor(value)` cut followed by the `x >= floor(value) + 1` cut. No assignment
    /// satisfies both.
    pub fn split(variable: usize, value: F) -> [Self; 2] {
        let floor = value.floor();

        [
            Self { variable, direction: BoundDirection::Upper, bound: floor },
            Self { variable, direction: BoundDirection::Lower, bound: floor + F::one() },
        ]
    }

    /// Write this cut as a `<=` row over `nr_variables` variables.
    pub fn to_constraint(&self, nr_variables: usize) -> Constraint<F> {
        debug_assert!(self.variable < nr_variables);

        let sign = self.direction.into::<F>();
        let mut coefficients = vec![F::zero(); nr_variables];
        coefficients[self.variable] = sign;

        Constraint::new(coefficients, sign * self.bound)
    }

    /// Whether a value for the cut variable lies on the allowed side of the cut.
    pub fn admits(&self, value: F) -> bool {
        match self.direction {
            BoundDirection::Upper => value <= self.bound,
            BoundDirection::Lower => value >= self.bound,
        }
    }
}

impl<F: Display> Display for BranchingCut<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let relation = match self.direction {
            BoundDirection::Upper => "<=",
            BoundDirection::Lower => ">=",
        };
        write!(f, "x[{}] {} {}", self.variable, relation, self.bound)
    }
}
