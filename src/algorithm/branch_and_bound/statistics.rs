//! # Search statistics
use std::fmt;
use std::fmt::Display;
use std::time::Duration;

use enum_map::EnumMap;

use crate::data::decision_tree::NodeKind;

/// Counters collected during a search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statistics {
    /// Number of evaluated nodes, by outcome.
    pub nodes: EnumMap<NodeKind, usize>,
    /// Number of calls to the relaxation solver.
    pub relaxations_solved: usize,
    /// Number of times a better integral solution was found.
    pub incumbent_updates: usize,
    /// Largest number of pending subproblems.
    pub max_frontier_size: usize,
    /// Wall clock time spent in the search.
    pub elapsed: Duration,
}

impl Statistics {
    /// Total number of evaluated nodes.
    pub fn total_nodes(&self) -> usize {
        self.nodes.values().sum()
    }

    pub(crate) fn count(&mut self, kind: NodeKind) {
        self.nodes[kind] += 1;
    }
}

impl Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes ({} branched, {} leaves, {} infeasible, {} aborted), {} relaxations, \
            {} incumbent updates, frontier size at most {}, {:?}",
            self.total_nodes(),
            self.nodes[NodeKind::Branched],
            self.nodes[NodeKind::Leaf],
            self.nodes[NodeKind::Dead],
            self.nodes[NodeKind::Aborted],
            self.relaxations_solved,
            self.incumbent_updates,
            self.max_frontier_size,
            self.elapsed,
        )
    }
}
