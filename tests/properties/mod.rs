use std::collections::HashSet;

use itertools::Itertools;

use dakin::algorithm::branch_and_bound::{BranchAndBound, Search, Status};
use dakin::algorithm::branch_and_bound::settings::Settings;
use dakin::algorithm::simplex::Simplex;
use dakin::data::decision_tree::NodeKind;
use dakin::data::linear_program::elements::BoundDirection;
use dakin::data::linear_program::integer_program::IntegerProgram;

use crate::{problem, textbook};

const TOLERANCE: f64 = 1e-6;

fn problems() -> Vec<IntegerProgram<f64>> {
    vec![
        textbook(),
        problem(&[1f64, 1f64], &[(&[2f64, 2f64], 3f64)]),
        problem(&[1f64, 1f64], &[(&[-2f64, 2f64], 1f64), (&[16f64, -14f64], 7f64)]),
        problem(&[8f64, 11f64, 6f64, 4f64], &[(&[5f64, 7f64, 4f64, 3f64], 14f64)]),
        problem(&[3f64, 2f64], &[(&[2f64, 2f64], 9f64), (&[2f64, -2f64], 3f64), (&[-1f64, 0f64], -1f64)]),
        problem(&[5f64, 4f64, 3f64], &[
            (&[2f64, 3f64, 1f64], 5f64),
            (&[4f64, 1f64, 2f64], 11f64),
            (&[3f64, 4f64, 2f64], 8f64),
        ]),
    ]
}

fn searches() -> Vec<(IntegerProgram<f64>, Search<f64>)> {
    problems().into_iter()
        .map(|problem| {
            let search = BranchAndBound::with_simplex(&problem).solve();
            (problem, search)
        })
        .collect()
}

#[test]
fn all_terminate_with_an_optimum() {
    for (_, search) in searches() {
        assert!(search.is_optimal(), "{:?}", search.status);
        assert_eq!(search.tree.count(NodeKind::Aborted), 0);
    }
}

#[test]
fn leaves_are_feasible_and_integral() {
    for (problem, search) in searches() {
        for leaf in search.tree.leaves() {
            let values = leaf.relaxation().unwrap().values();
            assert!(problem.is_feasible(values, TOLERANCE));
            assert!(values.iter().all(|value| (value - value.round()).abs() <= TOLERANCE));

            for cut in search.tree.cuts_to(leaf.id()) {
                assert!(cut.admits(values[cut.variable].round()));
            }
        }
    }
}

#[test]
fn incumbent_is_the_best_leaf() {
    for (problem, search) in searches() {
        let incumbent = search.incumbent().unwrap();
        assert!(problem.is_feasible(incumbent.solution().values(), 0f64));
        assert_eq!(problem.objective_value(incumbent.solution().values()), incumbent.objective_value());

        for leaf in search.tree.leaves() {
            let rounded = leaf.relaxation().unwrap().values().iter().map(|value| value.round()).collect::<Vec<_>>();
            assert!(problem.objective_value(&rounded) <= incumbent.objective_value());
        }
    }
}

#[test]
fn ids_follow_evaluation_order() {
    for (_, search) in searches() {
        let tree = &search.tree;
        for (index, node) in tree.iter().enumerate() {
            assert_eq!(node.id().index(), index);
            if let Some(parent) = node.parent() {
                assert!(parent < node.id());
                assert_eq!(tree[parent].depth() + 1, node.depth());
            }
        }
        // Breadth first
        assert!(tree.iter().map(|node| node.depth()).tuple_windows().all(|(a, b)| a <= b));
        assert_eq!(tree.path_to_root(tree.root().unwrap().id()).len(), 1);
    }
}

#[test]
fn tree_shape() {
    for (_, search) in searches() {
        let tree = &search.tree;
        assert_eq!(tree.iter().filter(|node| node.parent().is_none()).count(), 1);
        assert_eq!(tree.edges().count(), tree.len() - 1);

        for node in tree.iter() {
            let children = tree.children(node.id()).collect::<Vec<_>>();
            match node.kind() {
                NodeKind::Branched => {
                    assert_eq!(children.len(), 2);
                    let parent_cuts = tree.cuts_to(node.id());
                    for child in &children {
                        let child_cuts = tree.cuts_to(child.id());
                        assert_eq!(child_cuts.len(), parent_cuts.len() + 1);
                        assert_eq!(child_cuts[..parent_cuts.len()], parent_cuts[..]);
                        assert_eq!(child_cuts.last().map(|cut| cut.variable), node.branching_variable());
                    }
                },
                NodeKind::Leaf | NodeKind::Dead | NodeKind::Aborted => assert!(children.is_empty()),
            }
            assert_eq!(node.kind() == NodeKind::Dead, node.relaxation().is_none());
        }
    }
}

#[test]
fn branches_are_disjoint() {
    for (_, search) in searches() {
        let tree = &search.tree;
        for node in tree.iter().filter(|node| node.kind() == NodeKind::Branched) {
            let variable = node.branching_variable().unwrap();
            let value = node.relaxation().unwrap().value(variable);

            let cuts = tree.children(node.id()).map(|child| *child.cut().unwrap()).collect::<Vec<_>>();
            let (down, up) = (cuts[0], cuts[1]);
            assert_eq!(down.direction, BoundDirection::Upper);
            assert_eq!(up.direction, BoundDirection::Lower);
            assert_eq!(down.bound, value.floor());
            assert_eq!(up.bound, value.floor() + 1f64);
            assert!(!down.admits(value) && !up.admits(value));

            for integer in -2..20 {
                let integer = f64::from(integer);
                assert!(!(down.admits(integer) && up.admits(integer)));
                assert!(down.admits(integer) || up.admits(integer));
            }
        }
    }
}

#[test]
fn incumbent_is_monotone_in_the_node_budget() {
    let problem = problems().swap_remove(3);
    let full = BranchAndBound::with_simplex(&problem).solve();

    let mut previous = f64::NEG_INFINITY;
    for limit in 1..=full.tree.len() {
        let settings = Settings::default().with_node_limit(limit);
        let search = BranchAndBound::with_settings(&problem, Simplex::default(), settings).solve();

        // A budgeted search evaluates a prefix of the full search
        assert_eq!(search.tree.len(), limit);
        assert!(search.tree.iter().zip(full.tree.iter()).all(|(a, b)| a == b));

        let value = search.incumbent().map_or(f64::NEG_INFINITY, |incumbent| incumbent.objective_value());
        assert!(value >= previous);
        previous = value;

        if limit < full.tree.len() {
            assert!(matches!(search.status, Status::LimitReached { .. }));
        }
    }
    assert_eq!(Some(previous), full.solution().map(|solution| solution.objective_value()));
}

#[test]
fn distinct_subproblems() {
    for (_, search) in searches() {
        let tree = &search.tree;
        let subproblems = tree.iter()
            .map(|node| tree.cuts_to(node.id()).iter().map(|cut| cut.to_string()).join(", "))
            .collect::<HashSet<_>>();
        assert_eq!(subproblems.len(), tree.len());
    }
}
