//! # Representation of solutions
//!
//! Both relaxations and integer programs are solved to a point with an objective value. Relaxation
//! solutions may be fractional, the final solution of a search is integral in all integer
//! variables.
use std::fmt;
use std::fmt::Display;

use itertools::Itertools;
use num_traits::Float;

use crate::data::linear_program::elements::Variable;

/// An assignment of values to all variables, together with the objective value it attains.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<F> {
    /// Value of the objective function for this solution.
    objective_value: F,
    /// One value per variable, in the variable order of the problem.
    values: Vec<F>,
}

impl<F: Float> Solution<F> {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    ///
    /// # Arguments
    ///
    /// * `objective_value`: Value of the objective function at `values`.
    /// * `values`: One value per variable.
    pub fn new(objective_value: F, values: Vec<F>) -> Self {
        Self { objective_value, values }
    }

    /// Value of the objective function.
    pub fn objective_value(&self) -> F {
        self.objective_value
    }

    /// All variable values, in variable order.
    pub fn values(&self) -> &[F] {
        &self.values
    }

    /// Value of a single variable.
    pub fn value(&self, variable: usize) -> F {
        self.values[variable]
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no variables in this solution.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The values as integers.
    ///
    /// # Return value
    ///
    /// `None` if any of the values is not integral or doesn't fit in an `i64`.
    pub fn to_integers(&self) -> Option<Vec<i64>> {
        self.values.iter()
            .map(|&value| if value.fract() == F::zero() { value.to_i64() } else { None })
            .collect()
    }

    /// Human readable form, using the variable names of the problem.
    pub fn describe(&self, variables: &[Variable]) -> String
    where
        F: Display,
    {
        debug_assert_eq!(variables.len(), self.values.len());

        variables.iter().zip_eq(&self.values)
            .map(|(variable, value)| format!("{} = {}", variable.name, value))
            .join(", ")
    }
}

impl<F: Display> Display for Solution<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] -> {}", self.values.iter().join(", "), self.objective_value)
    }
}
