//! # Branch and bound
//!
//! Dakin's method for integer linear programs. Subproblems are taken from a queue in first in,
//! first out order and their linear relaxation is solved. A relaxation optimum in which all integer
//! variables are integral is a leaf and a candidate for the incumbent. Otherwise, the first
//! fractional integer variable is branched on: one child gets the cut `x <= floor(value)`, the
//! other `x >= floor(value) + 1`.
//!
//! No subproblem is pruned based on its bound; the entire tree is explored. Every evaluated
//! subproblem is recorded in a `DecisionTree`, including the infeasible ones.
use std::fmt;
use std::fmt::Display;
use std::time::Instant;

use log::{debug, info, warn};
use num_traits::Float;

use crate::algorithm::{OptimizationResult, SolveRelaxation};
use crate::algorithm::branch_and_bound::frontier::{Frontier, Subproblem};
use crate::algorithm::branch_and_bound::incumbent::{BestSoFar, Incumbent};
use crate::algorithm::branch_and_bound::integrality::{classify_point, Point};
use crate::algorithm::branch_and_bound::settings::{Limit, Settings};
use crate::algorithm::branch_and_bound::statistics::Statistics;
use crate::algorithm::simplex::Simplex;
use crate::data::decision_tree::{DecisionTree, NodeId, NodeKind};
use crate::data::linear_program::elements::BranchingCut;
use crate::data::linear_program::integer_program::IntegerProgram;
use crate::data::linear_program::solution::Solution;

mod frontier;
mod integrality;
pub mod incumbent;
pub mod settings;
pub mod statistics;

/// Branch and bound engine for a single problem.
///
/// The engine holds no search state; every call to `solve` starts from an empty tree.
#[derive(Debug)]
pub struct BranchAndBound<'a, F, S> {
    problem: &'a IntegerProgram<F>,
    solver: S,
    settings: Settings<F>,
}

impl<'a, F: Float + Display> BranchAndBound<'a, F, Simplex<F>> {
    /// Create an engine that solves relaxations with the default simplex solver.
    pub fn with_simplex(problem: &'a IntegerProgram<F>) -> Self {
        Self::new(problem, Simplex::default())
    }
}

impl<'a, F, S> BranchAndBound<'a, F, S>
where
    F: Float + Display,
    S: SolveRelaxation<F>,
{
    /// Create an engine with default settings.
    ///
    /// # Arguments
    ///
    /// * `problem`: Problem to solve.
    /// * `solver`: Used to solve the linear relaxation of every subproblem.
    pub fn new(problem: &'a IntegerProgram<F>, solver: S) -> Self {
        Self::with_settings(problem, solver, Settings::default())
    }

    /// Create an engine with custom tolerances or budgets.
    pub fn with_settings(problem: &'a IntegerProgram<F>, solver: S, settings: Settings<F>) -> Self {
        debug_assert!(settings.has_valid_tolerances());

        Self { problem, solver, settings }
    }

    /// Explore the decision tree, breadth first.
    ///
    /// # Return value
    ///
    /// The outcome of the search, the decision tree with every evaluated subproblem, and
    /// statistics.
    pub fn solve(&mut self) -> Search<F> {
        let mut session = Session::new();

        let status = loop {
            if !session.frontier.is_empty() {
                if let Some(limit) = session.exhausted_budget(&self.settings) {
                    warn!(
                        "Stopping at the {} after {} nodes, {} subproblems pending",
                        limit, session.tree.len(), session.frontier.len(),
                    );
                    break Status::LimitReached { limit, incumbent: session.best.take() };
                }
            }

            let Some(subproblem) = session.frontier.pop() else {
                break match session.best.take() {
                    Some(incumbent) => Status::Optimal(incumbent),
                    None => Status::NoFeasibleSolution,
                };
            };
            if let Some(status) = self.evaluate(&mut session, subproblem) {
                break status;
            }
        };

        session.finish(status)
    }

    /// Solve the relaxation of a subproblem, record it and branch if needed.
    ///
    /// # Return value
    ///
    /// A status if the search has to be aborted.
    fn evaluate(&mut self, session: &mut Session<F>, subproblem: Subproblem<F>) -> Option<Status<F>> {
        let constraints = subproblem.constraints(self.problem);
        let result = self.solver.solve_relaxation(
            self.problem.variables(),
            self.problem.objective(),
            &constraints,
        );
        session.statistics.relaxations_solved += 1;

        let parent = subproblem.parent();
        let cut = subproblem.last_cut();
        match result {
            OptimizationResult::Infeasible => {
                session.record(parent, cut, NodeKind::Dead, None, None);
                None
            },
            OptimizationResult::Unbounded => {
                let node = session.record(parent, cut, NodeKind::Aborted, None, None);
                warn!("Node {}: relaxation is unbounded, aborting", node);
                Some(Status::Unbounded { node })
            },
            OptimizationResult::FiniteOptimum(relaxation) if relaxation.len() != self.problem.nr_variables() => {
                let node = session.record(parent, cut, NodeKind::Aborted, None, None);
                warn!(
                    "Node {}: relaxation solver returned {} values for {} variables, aborting",
                    node, relaxation.len(), self.problem.nr_variables(),
                );
                Some(Status::MalformedRelaxation {
                    node,
                    expected: self.problem.nr_variables(),
                    found: relaxation.len(),
                })
            },
            OptimizationResult::FiniteOptimum(relaxation) => {
                let point = classify_point(
                    relaxation.values(),
                    self.problem.variables(),
                    self.settings.integrality_tolerance,
                    self.settings.instability_margin,
                );
                match point {
                    Point::Integral(values) => {
                        let node = session.record(parent, cut, NodeKind::Leaf, Some(relaxation), None);
                        let objective_value = self.problem.objective_value(&values);
                        if session.best.offer(node, Solution::new(objective_value, values)) {
                            session.statistics.incumbent_updates += 1;
                            info!("New incumbent at node {} with objective value {}", node, objective_value);
                        }
                        None
                    },
                    Point::Fractional { variable } => {
                        let value = relaxation.value(variable);
                        let node = session.record(parent, cut, NodeKind::Branched, Some(relaxation), Some(variable));
                        debug!("Node {}: branching on {} = {}", node, self.problem.variables()[variable].name, value);
                        for child_cut in BranchingCut::split(variable, value) {
                            session.frontier.push(subproblem.child(node, child_cut));
                        }
                        None
                    },
                    Point::Ambiguous { variable, value } => {
                        let node = session.record(parent, cut, NodeKind::Aborted, Some(relaxation), None);
                        warn!(
                            "Node {}: can't decide whether {} = {} is integral, aborting",
                            node, self.problem.variables()[variable].name, value,
                        );
                        Some(Status::NumericInstability { node, variable, value })
                    },
                }
            },
        }
    }
}

/// State of a single call to `BranchAndBound::solve`.
struct Session<F> {
    tree: DecisionTree<F>,
    frontier: Frontier<F>,
    best: BestSoFar<F>,
    statistics: Statistics,
    start: Instant,
}

impl<F: Float + Display> Session<F> {
    fn new() -> Self {
        Self {
            tree: DecisionTree::new(),
            frontier: Frontier::new(Subproblem::root()),
            best: BestSoFar::new(),
            statistics: Statistics::default(),
            start: Instant::now(),
        }
    }

    fn exhausted_budget(&self, settings: &Settings<F>) -> Option<Limit> {
        if settings.node_limit.is_some_and(|limit| self.tree.len() >= limit) {
            Some(Limit::Nodes)
        } else if settings.time_limit.is_some_and(|limit| self.start.elapsed() >= limit) {
            Some(Limit::Time)
        } else {
            None
        }
    }

    fn record(
        &mut self,
        parent: Option<NodeId>,
        cut: Option<BranchingCut<F>>,
        kind: NodeKind,
        relaxation: Option<Solution<F>>,
        branching_variable: Option<usize>,
    ) -> NodeId {
        let id = self.tree.record(parent, cut, kind, relaxation, branching_variable);
        self.statistics.count(kind);

        let node = &self.tree[id];
        match node.relaxation() {
            Some(relaxation) => debug!("Node {} at depth {}: {} {}", id, node.depth(), kind, relaxation),
            None => debug!("Node {} at depth {}: {}", id, node.depth(), kind),
        }

        id
    }

    fn finish(mut self, status: Status<F>) -> Search<F> {
        self.statistics.max_frontier_size = self.frontier.max_len();
        self.statistics.elapsed = self.start.elapsed();
        info!("Search finished: {}", status);
        debug!("{}", self.statistics);

        Search { status, tree: self.tree, statistics: self.statistics }
    }
}

/// Result of a search.
#[derive(Debug, Clone, PartialEq)]
pub struct Search<F> {
    /// How the search ended.
    pub status: Status<F>,
    /// Every evaluated subproblem.
    pub tree: DecisionTree<F>,
    /// Counters.
    pub statistics: Statistics,
}

impl<F: Float> Search<F> {
    /// Whether the search proved optimality.
    pub fn is_optimal(&self) -> bool {
        matches!(self.status, Status::Optimal(_))
    }

    /// The optimal solution, if the search ran to completion and found one.
    pub fn solution(&self) -> Option<&Solution<F>> {
        match &self.status {
            Status::Optimal(incumbent) => Some(incumbent.solution()),
            _ => None,
        }
    }

    /// The best solution found, also when a budget stopped the search early.
    pub fn incumbent(&self) -> Option<&Incumbent<F>> {
        match &self.status {
            Status::Optimal(incumbent) => Some(incumbent),
            Status::LimitReached { incumbent, .. } => incumbent.as_ref(),
            _ => None,
        }
    }
}

/// How a search ended.
///
/// None of these are errors: each describes a property of the problem, or of the budget the search
/// was given.
#[derive(Debug, Clone, PartialEq)]
pub enum Status<F> {
    /// The tree was explored and at least one integral solution was found.
    ///
    /// Of all solutions with the best objective value, this is the one found first.
    Optimal(Incumbent<F>),
    /// The tree was explored and no subproblem had an integral relaxation optimum.
    NoFeasibleSolution,
    /// The relaxation of a subproblem is unbounded.
    ///
    /// This indicates a malformed problem; the search stops immediately.
    Unbounded {
        /// Node at which this was detected.
        node: NodeId,
    },
    /// A relaxation value was too close to the edge of the integrality tolerance to be classified.
    NumericInstability {
        /// Node at which this was detected.
        node: NodeId,
        /// Index of the variable.
        variable: usize,
        /// Value of the variable in the relaxation optimum.
        value: F,
    },
    /// The relaxation solver returned a solution with the wrong number of values.
    ///
    /// The solution is not stored in the tree; the search stops immediately.
    MalformedRelaxation {
        /// Node at which this was detected.
        node: NodeId,
        /// Number of variables of the problem.
        expected: usize,
        /// Number of values in the returned solution.
        found: usize,
    },
    /// A budget was exhausted before the tree was explored.
    LimitReached {
        /// Budget that ran out.
        limit: Limit,
        /// Best solution found, which is not necessarily optimal.
        incumbent: Option<Incumbent<F>>,
    },
}

impl<F: Float + Display> Display for Status<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Optimal(incumbent) => write!(f, "optimal {}", incumbent.solution()),
            Status::NoFeasibleSolution => f.write_str("no feasible solution"),
            Status::Unbounded { node } => write!(f, "unbounded relaxation at node {}", node),
            Status::NumericInstability { node, variable, value } => write!(
                f, "numerically unstable value {} of x[{}] at node {}", value, variable, node,
            ),
            Status::MalformedRelaxation { node, expected, found } => write!(
                f, "relaxation with {} values for {} variables at node {}", found, expected, node,
            ),
            Status::LimitReached { limit, incumbent: Some(incumbent) } => write!(
                f, "{} reached, best solution found {}", limit, incumbent.solution(),
            ),
            Status::LimitReached { limit, incumbent: None } => write!(
                f, "{} reached without a feasible solution", limit,
            ),
        }
    }
}
