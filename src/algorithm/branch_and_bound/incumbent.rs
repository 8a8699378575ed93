//! # Best integral solution found so far
use num_traits::Float;

use crate::data::decision_tree::NodeId;
use crate::data::linear_program::solution::Solution;

/// An integral solution together with the leaf it was found at.
#[derive(Debug, Clone, PartialEq)]
pub struct Incumbent<F> {
    node: NodeId,
    solution: Solution<F>,
}

impl<F: Float> Incumbent<F> {
    /// Leaf of the decision tree at which this solution was found.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// The solution, with integer variables at exact integer values.
    pub fn solution(&self) -> &Solution<F> {
        &self.solution
    }

    /// Objective value of the solution.
    pub fn objective_value(&self) -> F {
        self.solution.objective_value()
    }
}

/// Search state tracking the incumbent.
///
/// Starts without a solution, at an objective value of minus infinity, and only ever improves.
#[derive(Debug, Clone)]
pub(crate) struct BestSoFar<F> {
    incumbent: Option<Incumbent<F>>,
}

impl<F: Float> BestSoFar<F> {
    pub(crate) fn new() -> Self {
        Self { incumbent: None }
    }

    /// Objective value of the incumbent, minus infinity if there is none.
    pub(crate) fn objective_value(&self) -> F {
        self.incumbent.as_ref().map_or(F::neg_infinity(), Incumbent::objective_value)
    }

    /// Replace the incumbent if a candidate is strictly better.
    ///
    /// Ties keep the earlier solution.
    ///
    /// # Return value
    ///
    /// Whether the candidate became the incumbent.
    pub(crate) fn offer(&mut self, node: NodeId, solution: Solution<F>) -> bool {
        if solution.objective_value() > self.objective_value() {
            self.incumbent = Some(Incumbent { node, solution });
            true
        } else {
            false
        }
    }

    /// Take the incumbent, leaving none behind.
    pub(crate) fn take(&mut self) -> Option<Incumbent<F>> {
        self.incumbent.take()
    }
}
