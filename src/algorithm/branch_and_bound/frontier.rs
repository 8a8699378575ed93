//! # Search frontier
//!
//! Subproblems wait in a first in, first out queue until they are evaluated. This makes the
//! exploration breadth first, which determines both the shape of the decision tree and the order
//! in which node ids are handed out.
use std::collections::VecDeque;

use num_traits::Float;

use crate::data::decision_tree::NodeId;
use crate::data::linear_program::elements::{BranchingCut, Constraint};
use crate::data::linear_program::integer_program::IntegerProgram;

/// A node awaiting evaluation.
///
/// The constraints of a subproblem are those of the root problem, together with all branching
/// cuts inherited from its ancestors. A subproblem has no identity beyond those cuts and the node
/// that created it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Subproblem<F> {
    /// Branching cuts, from the root down.
    cuts: Vec<BranchingCut<F>>,
    /// Node whose branching created this subproblem.
    parent: Option<NodeId>,
}

impl<F: Float> Subproblem<F> {
    /// The problem without any branching cuts.
    pub(crate) fn root() -> Self {
        Self { cuts: Vec::new(), parent: None }
    }

    /// Create a child with exactly one more cut than this subproblem.
    ///
    /// # Arguments
    ///
    /// * `parent`: Id under which this subproblem was recorded in the decision tree.
    /// * `cut`: Branching cut to add.
    pub(crate) fn child(&self, parent: NodeId, cut: BranchingCut<F>) -> Self {
        let mut cuts = Vec::with_capacity(self.cuts.len() + 1);
        cuts.extend_from_slice(&self.cuts);
        cuts.push(cut);

        Self { cuts, parent: Some(parent) }
    }

    /// All constraints of this subproblem, root constraints first.
    pub(crate) fn constraints(&self, problem: &IntegerProgram<F>) -> Vec<Constraint<F>> {
        problem.constraints().iter()
            .cloned()
            .chain(self.cuts.iter().map(|cut| cut.to_constraint(problem.nr_variables())))
            .collect()
    }

    /// The cut that distinguishes this subproblem from its parent.
    pub(crate) fn last_cut(&self) -> Option<BranchingCut<F>> {
        self.cuts.last().copied()
    }

    pub(crate) fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// Queue of pending subproblems.
#[derive(Debug, Clone)]
pub(crate) struct Frontier<F> {
    queue: VecDeque<Subproblem<F>>,
    /// Largest number of subproblems that were pending at the same time.
    max_len: usize,
}

impl<F> Frontier<F> {
    /// Create a frontier containing a single subproblem.
    pub(crate) fn new(initial: Subproblem<F>) -> Self {
        Self { queue: VecDeque::from(vec![initial]), max_len: 1 }
    }

    /// Enqueue at the back.
    pub(crate) fn push(&mut self, subproblem: Subproblem<F>) {
        self.queue.push_back(subproblem);
        self.max_len = self.max_len.max(self.queue.len());
    }

    /// Dequeue from the front.
    pub(crate) fn pop(&mut self) -> Option<Subproblem<F>> {
        self.queue.pop_front()
    }

    pub(crate) fn len(&self) -> usize {
        self.queue.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub(crate) fn max_len(&self) -> usize {
        self.max_len
    }
}
