//! # Integer linear programs
//!
//! The problem statement that a search starts from: maximize a linear objective over nonnegative
//! variables, subject to `<=` constraints. The problem is immutable once constructed; branching
//! only ever adds constraints to subproblems, never to the problem itself.
use std::fmt;
use std::fmt::Display;

use itertools::Itertools;
use num_traits::Float;

use crate::data::linear_program::elements::{Constraint, Variable, VariableType};
use crate::data::linear_program::error::InconsistencyError;

/// An integer linear program in "inequality form".
///
/// Maximize `<objective, x>` subject to `<constraint, x> <= bound` for all constraints and
/// `x >= 0`, with `x` integer for all variables of type `VariableType::Integer`.
///
/// Can only be created through `IntegerProgram::new`, which checks the dimensions of all
/// components.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerProgram<F> {
    /// Cost coefficients, maximized.
    objective: Vec<F>,
    /// Names and types, one for each objective coefficient.
    variables: Vec<Variable>,
    /// Root constraints, each with one coefficient per variable.
    constraints: Vec<Constraint<F>>,
}

impl<F: Float> IntegerProgram<F> {
    /// Create a new problem with integer variables named `x1`, `x2`, and so on.
    ///
    /// # Arguments
    ///
    /// * `objective`: Coefficients of the objective function, which is maximized.
    /// * `constraints`: Rows of the form `<coefficients, x> <= bound`.
    ///
    /// # Errors
    ///
    /// If there are no variables, a constraint has the wrong number of coefficients, or any of the
    /// numbers is not finite.
    pub fn new(
        objective: Vec<F>,
        constraints: Vec<Constraint<F>>,
    ) -> Result<Self, InconsistencyError> {
        let variables = (1..=objective.len())
            .map(|j| Variable::integer(format!("x{}", j)))
            .collect();

        Self::with_variables(objective, variables, constraints)
    }

    /// Create a new problem with explicitly named and typed variables.
    ///
    /// # Errors
    ///
    /// See `IntegerProgram::new`. Additionally, the number of variables should match the number of
    /// objective coefficients.
    pub fn with_variables(
        objective: Vec<F>,
        variables: Vec<Variable>,
        constraints: Vec<Constraint<F>>,
    ) -> Result<Self, InconsistencyError> {
        if objective.is_empty() {
            return Err(InconsistencyError::new("The problem has no variables"));
        }
        if variables.len() != objective.len() {
            return Err(InconsistencyError::new(format!(
                "There are {} variables, but {} objective coefficients",
                variables.len(), objective.len(),
            )));
        }
        if let Some(j) = objective.iter().position(|coefficient| !coefficient.is_finite()) {
            return Err(InconsistencyError::new(format!(
                "Objective coefficient of variable \"{}\" is not finite", variables[j].name,
            )));
        }

        for (i, constraint) in constraints.iter().enumerate() {
            if constraint.coefficients.len() != objective.len() {
                return Err(InconsistencyError::new(format!(
                    "Constraint {} has {} coefficients, but there are {} variables",
                    i, constraint.coefficients.len(), objective.len(),
                )));
            }
            if !constraint.bound.is_finite()
                || constraint.coefficients.iter().any(|coefficient| !coefficient.is_finite()) {
                return Err(InconsistencyError::new(format!(
                    "Constraint {} contains a value that is not finite", i,
                )));
            }
        }

        Ok(Self { objective, variables, constraints })
    }

    /// Coefficients of the objective function.
    pub fn objective(&self) -> &[F] {
        &self.objective
    }

    /// All variables, in order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// The constraints of the root problem.
    pub fn constraints(&self) -> &[Constraint<F>] {
        &self.constraints
    }

    /// Number of variables.
    pub fn nr_variables(&self) -> usize {
        self.variables.len()
    }

    /// Evaluate the objective function.
    ///
    /// # Arguments
    ///
    /// * `values`: One value per variable.
    pub fn objective_value(&self, values: &[F]) -> F {
        self.objective.iter().zip_eq(values)
            .fold(F::zero(), |total, (&coefficient, &value)| total + coefficient * value)
    }

    /// Whether a point lies in the feasible region of the relaxation.
    ///
    /// Checks the nonnegativity of all variables and all root constraints, each up to `tolerance`.
    /// Integrality is not checked.
    pub fn is_feasible(&self, values: &[F], tolerance: F) -> bool {
        values.len() == self.nr_variables()
            && values.iter().all(|&value| value >= -tolerance)
            && self.constraints.iter().all(|constraint| constraint.is_satisfied_by(values, tolerance))
    }
}

/// Render a linear expression like `4x1 + 3x2 - x3`.
fn linear_expression<F: Float + Display>(coefficients: &[F], variables: &[Variable]) -> String {
    let mut terms = coefficients.iter().zip_eq(variables)
        .filter(|&(&coefficient, _)| coefficient != F::zero())
        .map(|(&coefficient, variable)| {
            let magnitude = coefficient.abs();
            let sign = if coefficient < F::zero() { "-" } else { "+" };
            if magnitude == F::one() {
                (sign, variable.name.clone())
            } else {
                (sign, format!("{}{}", magnitude, variable.name))
            }
        });

    match terms.next() {
        None => "0".to_owned(),
        Some((sign, first)) => {
            let head = if sign == "-" { format!("-{}", first) } else { first };
            terms.fold(head, |expression, (sign, term)| format!("{} {} {}", expression, sign, term))
        },
    }
}

impl<F: Float + Display> Display for IntegerProgram<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Maximize: {}", linear_expression(&self.objective, &self.variables))?;
        writeln!(f, "Subject to:")?;
        for constraint in &self.constraints {
            writeln!(
                f, "\t{} <= {}",
                linear_expression(&constraint.coefficients, &self.variables), constraint.bound,
            )?;
        }

        let integer = self.variables.iter()
            .filter(|variable| variable.variable_type == VariableType::Integer)
            .map(|variable| &variable.name)
            .join(", ");
        let continuous = self.variables.iter()
            .filter(|variable| variable.variable_type == VariableType::Continuous)
            .map(|variable| &variable.name)
            .join(", ");
        if !integer.is_empty() {
            write!(f, "where {} are nonnegative integers", integer)?;
            if !continuous.is_empty() {
                write!(f, " and {} are nonnegative", continuous)?;
            }
        } else {
            write!(f, "where {} are nonnegative", continuous)?;
        }

        Ok(())
    }
}
