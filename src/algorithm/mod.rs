//! # Algorithms
use crate::data::linear_program::elements::{Constraint, Variable};
use crate::data::linear_program::solution::Solution;

pub mod branch_and_bound;
pub mod simplex;

/// A solver for the linear relaxation of a subproblem.
///
/// In the case of integer linear programming, that means that integrality constraints are ignored:
/// all variables are treated as continuous and nonnegative.
///
/// The branch and bound engine only talks to a relaxation solver through this trait. The default
/// implementation is `simplex::Simplex`.
pub trait SolveRelaxation<F> {
    /// Solve the relaxed version of a problem.
    ///
    /// # Arguments
    ///
    /// * `variables`: The variables of the problem. Their type should be ignored.
    /// * `objective`: One coefficient per variable, maximized.
    /// * `constraints`: Rows of the form `<coefficients, x> <= bound`.
    ///
    /// # Return value
    ///
    /// Whether the problem is feasible, and if so, a solution if the problem is bounded.
    fn solve_relaxation(
        &mut self,
        variables: &[Variable],
        objective: &[F],
        constraints: &[Constraint<F>],
    ) -> OptimizationResult<F>;
}

impl<F, S: SolveRelaxation<F> + ?Sized> SolveRelaxation<F> for &mut S {
    fn solve_relaxation(
        &mut self,
        variables: &[Variable],
        objective: &[F],
        constraints: &[Constraint<F>],
    ) -> OptimizationResult<F> {
        (**self).solve_relaxation(variables, objective, constraints)
    }
}

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq)]
pub enum OptimizationResult<F> {
    Infeasible,
    FiniteOptimum(Solution<F>),
    Unbounded,
}
