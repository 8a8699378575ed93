//! # Configuration of the search
use std::fmt;
use std::fmt::Display;
use std::time::Duration;

use num_traits::Float;

/// Default maximum distance from an integer for a value to count as integral.
pub const DEFAULT_INTEGRALITY_TOLERANCE: f64 = 1e-6;
/// Default width of the band around the integrality tolerance in which values are ambiguous.
pub const DEFAULT_INSTABILITY_MARGIN: f64 = 1e-7;

/// Settings of a branch and bound search.
///
/// Without budgets the search explores the entire tree, breadth first.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings<F> {
    /// A value is integral if its distance to the nearest integer is at most this tolerance.
    ///
    /// Integral values are replaced by that nearest integer in leaf solutions.
    pub integrality_tolerance: F,
    /// Values whose distance to the nearest integer is within this margin of the integrality
    /// tolerance can't be classified reliably and abort the search.
    ///
    /// Should be smaller than the integrality tolerance. A zero margin disables the check.
    pub instability_margin: F,
    /// Maximum number of nodes to evaluate.
    pub node_limit: Option<usize>,
    /// Maximum wall clock time to spend.
    pub time_limit: Option<Duration>,
}

impl<F: Float> Default for Settings<F> {
    fn default() -> Self {
        Self {
            integrality_tolerance: F::from(DEFAULT_INTEGRALITY_TOLERANCE).unwrap_or_else(F::epsilon),
            instability_margin: F::from(DEFAULT_INSTABILITY_MARGIN).unwrap_or_else(F::zero),
            node_limit: None,
            time_limit: None,
        }
    }
}

impl<F: Float> Settings<F> {
    /// Set the maximum number of nodes to evaluate.
    pub fn with_node_limit(mut self, nodes: usize) -> Self {
        self.node_limit = Some(nodes);
        self
    }

    /// Set the maximum time to spend.
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    /// Set the integrality tolerance.
    pub fn with_integrality_tolerance(mut self, tolerance: F) -> Self {
        self.integrality_tolerance = tolerance;
        self
    }

    /// Set the instability margin, zero to disable the check.
    pub fn with_instability_margin(mut self, margin: F) -> Self {
        self.instability_margin = margin;
        self
    }

    /// Whether the tolerances are usable.
    ///
    /// The tolerance is nonnegative and the margin lies in `[0, tolerance)`, such that exact
    /// integers are never ambiguous.
    pub fn has_valid_tolerances(&self) -> bool {
        self.integrality_tolerance >= F::zero()
            && self.instability_margin >= F::zero()
            && (self.instability_margin == F::zero() || self.instability_margin < self.integrality_tolerance)
    }
}

/// Budget that was exhausted.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Limit {
    /// The maximum number of nodes was evaluated.
    Nodes,
    /// The time limit passed.
    Time,
}

impl Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Limit::Nodes => "node limit",
            Limit::Time => "time limit",
        })
    }
}
