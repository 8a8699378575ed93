//! # The Simplex algorithm
//!
//! A dense, two phase primal simplex method used to solve the linear relaxations of subproblems.
//! The first phase minimizes the sum of the artificial variables to find a basic feasible
//! solution, the second phase optimizes the problem objective from there.
use log::{trace, warn};
use num_traits::Float;

use crate::algorithm::{OptimizationResult, SolveRelaxation};
use crate::algorithm::simplex::pivot_rule::{FirstProfitable, PivotRule};
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::linear_program::elements::{Constraint, Variable};
use crate::data::linear_program::solution::Solution;

mod pivot_rule;
mod tableau;

/// Default threshold below which values are treated as zero.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Solves relaxations with the simplex method.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Simplex<F> {
    tolerance: F,
}

impl<F: Float> Simplex<F> {
    /// Create a solver with a custom zero tolerance.
    ///
    /// # Arguments
    ///
    /// * `tolerance`: Positive threshold below which relative costs, pivot elements and phase one
    /// objective values are considered zero.
    pub fn new(tolerance: F) -> Self {
        debug_assert!(tolerance > F::zero());

        Self { tolerance }
    }
}

impl<F: Float> Default for Simplex<F> {
    fn default() -> Self {
        Self::new(F::from(DEFAULT_TOLERANCE).unwrap_or_else(F::epsilon))
    }
}

impl<F: Float> SolveRelaxation<F> for Simplex<F> {
    fn solve_relaxation(
        &mut self,
        variables: &[Variable],
        objective: &[F],
        constraints: &[Constraint<F>],
    ) -> OptimizationResult<F> {
        debug_assert_eq!(variables.len(), objective.len());

        let mut tableau = Tableau::new(objective.len(), constraints);

        if tableau.nr_artificial_variables() > 0 {
            match artificial_primal::<_, FirstProfitable>(&mut tableau, self.tolerance) {
                FeasibilityResult::Feasible => remove_artificial_basis_variables(&mut tableau, self.tolerance),
                FeasibilityResult::Infeasible => return OptimizationResult::Infeasible,
            }
        }

        // Maximization of the objective is minimization of its negation
        let mut cost = vec![F::zero(); tableau.nr_columns()];
        for (j, &coefficient) in objective.iter().enumerate() {
            cost[j] = -coefficient;
        }
        tableau.set_cost(&cost);

        match primal::<_, FirstProfitable>(&mut tableau, self.tolerance) {
            PhaseResult::Optimal => {
                let values = tableau.current_bfs(self.tolerance);
                let objective_value = objective.iter().zip(&values)
                    .fold(F::zero(), |total, (&coefficient, &value)| total + coefficient * value);

                OptimizationResult::FiniteOptimum(Solution::new(objective_value, values))
            },
            PhaseResult::Unbounded => OptimizationResult::Unbounded,
        }
    }
}

/// Result of running the primal simplex on a tableau.
#[derive(Debug, Eq, PartialEq)]
enum PhaseResult {
    Optimal,
    Unbounded,
}

/// LP's can be either feasible (allowing at least one solution) or infeasible (allowing no
/// solutions).
#[derive(Debug, Eq, PartialEq)]
enum FeasibilityResult {
    Feasible,
    Infeasible,
}

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// Artificial variables never enter the basis.
///
/// # Arguments
///
/// * `tableau`: Tableau with a valid basis and the cost function set.
fn primal<F: Float, PR: PivotRule>(tableau: &mut Tableau<F>, tolerance: F) -> PhaseResult {
    let mut rule = PR::new();
    let columns = 0..(tableau.nr_columns() - tableau.nr_artificial_variables());

    loop {
        match rule.select_primal_pivot_column(tableau, columns.clone(), tolerance) {
            Some(column) => match tableau.select_primal_pivot_row(column, tolerance) {
                Some(row) => {
                    trace!("Pivot on row {} and column {}", row, column);
                    tableau.bring_into_basis(column, row);
                },
                None => break PhaseResult::Unbounded,
            },
            None => break PhaseResult::Optimal,
        }
    }
}

/// Reduces the artificial cost of the basic feasible solution to zero, if possible. In doing so, a
/// basic feasible solution to the problem without artificial variables is found.
///
/// # Arguments
///
/// * `tableau`: Tableau with a basis that contains all artificial variables.
///
/// # Return value
///
/// Whether the tableau allows a basic feasible solution without artificial variables.
fn artificial_primal<F: Float, PR: PivotRule>(
    tableau: &mut Tableau<F>,
    tolerance: F,
) -> FeasibilityResult {
    let mut cost = vec![F::zero(); tableau.nr_columns()];
    for column in (tableau.nr_columns() - tableau.nr_artificial_variables())..tableau.nr_columns() {
        cost[column] = F::one();
    }
    tableau.set_cost(&cost);

    let mut rule = PR::new();
    loop {
        match rule.select_primal_pivot_column(tableau, 0..tableau.nr_columns(), tolerance) {
            Some(column) => match tableau.select_primal_pivot_row(column, tolerance) {
                Some(row) => {
                    trace!("Phase one pivot on row {} and column {}", row, column);
                    tableau.bring_into_basis(column, row);
                },
                // The artificial cost is bounded below by zero, so this only happens when
                // rounding errors make a column look profitable
                None => {
                    warn!("Phase one can't pivot on column {}, stopping early", column);
                    break if tableau.objective_value() <= tolerance {
                        FeasibilityResult::Feasible
                    } else {
                        FeasibilityResult::Infeasible
                    };
                },
            },
            None => break if tableau.objective_value() <= tolerance {
                FeasibilityResult::Feasible
            } else {
                FeasibilityResult::Infeasible
            },
        }
    }
}

/// Removes artificial variables from the basis by making a basis change "at zero level", or
/// without change of the current solution.
///
/// An artificial variable that can't be removed sits in a row without nonzero coefficients for the
/// other variables; it stays basic at value zero and never limits a ratio test.
fn remove_artificial_basis_variables<F: Float>(tableau: &mut Tableau<F>, tolerance: F) {
    let real_columns = tableau.nr_columns() - tableau.nr_artificial_variables();

    for row in tableau.artificial_basis_rows() {
        debug_assert!(row < tableau.nr_rows());

        let column = (0..real_columns)
            .filter(|&column| !tableau.is_in_basis(column))
            .find(|&column| tableau.element(row, column).abs() > tolerance);

        if let Some(column) = column {
            tableau.bring_into_basis(column, row);
        }
    }
}
