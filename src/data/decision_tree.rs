//! # Decision trees
//!
//! Every subproblem that is taken from the frontier gets evaluated exactly once, and the result of
//! that evaluation is recorded as a node in a decision tree. Nodes are stored in an arena and refer
//! to their parent by id; they are never removed or changed after they are recorded.
use std::fmt;
use std::fmt::Display;
use std::ops::Index;

use enum_map::Enum;
use itertools::Itertools;
use num_traits::Float;

use crate::data::linear_program::elements::BranchingCut;
use crate::data::linear_program::solution::Solution;

/// Identifier of a node in a `DecisionTree`.
///
/// Ids are handed out in the order in which subproblems are evaluated, starting at zero for the
/// root.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the evaluation of a subproblem led to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Enum)]
pub enum NodeKind {
    /// The relaxation had an integral optimum; a candidate for the incumbent.
    Leaf,
    /// The relaxation had a fractional optimum and two children were created.
    Branched,
    /// The relaxation was infeasible.
    Dead,
    /// Evaluation stopped the search: the relaxation was unbounded, or its values were too close
    /// to the integrality tolerance to classify.
    Aborted,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NodeKind::Leaf => "leaf",
            NodeKind::Branched => "branched",
            NodeKind::Dead => "infeasible",
            NodeKind::Aborted => "aborted",
        })
    }
}

/// A record of one evaluated subproblem.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionNode<F> {
    id: NodeId,
    parent: Option<NodeId>,
    /// The cut added to the parent's constraints to create this subproblem.
    cut: Option<BranchingCut<F>>,
    kind: NodeKind,
    /// Optimum of the relaxation, absent for dead nodes and unbounded relaxations.
    relaxation: Option<Solution<F>>,
    /// First fractional variable, only for branched nodes.
    branching_variable: Option<usize>,
    depth: usize,
}

impl<F> DecisionNode<F> {
    /// Identifier of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Parent in the tree, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The branching cut that separates this node from its parent.
    pub fn cut(&self) -> Option<&BranchingCut<F>> {
        self.cut.as_ref()
    }

    /// Whether this node is a leaf, was branched on or was infeasible.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Whether the relaxation of this node was integral.
    pub fn is_leaf(&self) -> bool {
        self.kind == NodeKind::Leaf
    }

    /// The relaxation optimum found for this node.
    pub fn relaxation(&self) -> Option<&Solution<F>> {
        self.relaxation.as_ref()
    }

    /// Variable that was branched on, if any.
    pub fn branching_variable(&self) -> Option<usize> {
        self.branching_variable
    }

    /// Number of cuts between this node and the root problem.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// All nodes evaluated during a search, connected parent to child.
///
/// There is exactly one root, each other node has exactly one parent and branched nodes have
/// exactly two children once the search has run to completion. A search that stops early, because
/// of a budget or an aborted node, leaves the children of some branched nodes unevaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree<F> {
    nodes: Vec<DecisionNode<F>>,
}

impl<F> Default for DecisionTree<F> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<F> DecisionTree<F> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new node.
    ///
    /// # Arguments
    ///
    /// * `parent`: Node that created this subproblem by branching, `None` for the root.
    /// * `cut`: The constraint added by that branching, `None` for the root.
    /// * `kind`: Result of the evaluation.
    /// * `relaxation`: Relaxation optimum, if the subproblem was feasible.
    /// * `branching_variable`: Variable to branch on, if the node is branched.
    ///
    /// # Return value
    ///
    /// The id of the new node, one larger than that of the previously recorded node.
    pub(crate) fn record(
        &mut self,
        parent: Option<NodeId>,
        cut: Option<BranchingCut<F>>,
        kind: NodeKind,
        relaxation: Option<Solution<F>>,
        branching_variable: Option<usize>,
    ) -> NodeId {
        debug_assert_eq!(parent.is_none(), cut.is_none());
        debug_assert!(parent.is_some() || self.nodes.is_empty());
        debug_assert!(parent.map_or(true, |parent| self[parent].kind == NodeKind::Branched));
        debug_assert!(kind != NodeKind::Dead || relaxation.is_none());
        debug_assert!(!matches!(kind, NodeKind::Leaf | NodeKind::Branched) || relaxation.is_some());
        debug_assert_eq!(kind == NodeKind::Branched, branching_variable.is_some());

        let id = NodeId(self.nodes.len());
        let depth = parent.map_or(0, |parent| self[parent].depth + 1);
        self.nodes.push(DecisionNode { id, parent, cut, kind, relaxation, branching_variable, depth });

        id
    }

    /// Number of recorded nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no nodes have been recorded.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The first node that was recorded.
    pub fn root(&self) -> Option<&DecisionNode<F>> {
        self.nodes.first()
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> Option<&DecisionNode<F>> {
        self.nodes.get(id.0)
    }

    /// All nodes in order of evaluation.
    pub fn iter(&self) -> impl Iterator<Item = &DecisionNode<F>> {
        self.nodes.iter()
    }

    /// Children of a node, in order of evaluation.
    ///
    /// Scans the entire tree.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &DecisionNode<F>> {
        self.nodes.iter().filter(move |node| node.parent == Some(id))
    }

    /// All (parent, child) pairs.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.iter().filter_map(|node| node.parent.map(|parent| (parent, node.id)))
    }

    /// Nodes with an integral relaxation.
    pub fn leaves(&self) -> impl Iterator<Item = &DecisionNode<F>> {
        self.nodes.iter().filter(|node| node.is_leaf())
    }

    /// Number of nodes of a certain kind.
    pub fn count(&self, kind: NodeKind) -> usize {
        self.nodes.iter().filter(|node| node.kind == kind).count()
    }

    /// The ids of the nodes from a node up to and including the root.
    pub fn path_to_root(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = vec![id];
        let mut current = self.nodes.get(id.0).and_then(|node| node.parent);
        while let Some(parent) = current {
            path.push(parent);
            current = self.nodes[parent.0].parent;
        }

        path
    }

    /// All branching cuts that together with the root constraints define the subproblem of a node.
    ///
    /// Ordered from the root down.
    pub fn cuts_to(&self, id: NodeId) -> Vec<&BranchingCut<F>> {
        self.path_to_root(id).into_iter().rev()
            .filter_map(|id| self.nodes[id.0].cut.as_ref())
            .collect()
    }
}

impl<F> Index<NodeId> for DecisionTree<F> {
    type Output = DecisionNode<F>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

impl<F: Float + Display> DecisionTree<F> {
    fn write_subtree(&self, f: &mut fmt::Formatter<'_>, id: NodeId) -> fmt::Result {
        let node = &self[id];

        write!(f, "{}{}", "  ".repeat(node.depth), node.id)?;
        if let Some(cut) = &node.cut {
            write!(f, " [{}]", cut)?;
        }
        write!(f, " {}", node.kind)?;
        if let Some(relaxation) = &node.relaxation {
            write!(
                f, ": ({}) -> {}",
                relaxation.values().iter().join(", "), relaxation.objective_value(),
            )?;
        }
        writeln!(f)?;

        let children = self.children(id).map(|child| child.id).collect::<Vec<_>>();
        for child in children {
            self.write_subtree(f, child)?;
        }

        Ok(())
    }
}

/// Indented, depth first rendering with one node per line.
impl<F: Float + Display> Display for DecisionTree<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => self.write_subtree(f, root.id),
            None => writeln!(f, "(empty)"),
        }
    }
}
