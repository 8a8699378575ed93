use approx::assert_relative_eq;

use dakin::algorithm::{OptimizationResult, SolveRelaxation};
use dakin::algorithm::branch_and_bound::{BranchAndBound, Status};
use dakin::algorithm::branch_and_bound::settings::Settings;
use dakin::algorithm::simplex::Simplex;
use dakin::data::decision_tree::NodeKind;
use dakin::data::linear_program::elements::{Constraint, Variable};
use dakin::data::linear_program::integer_program::IntegerProgram;

use crate::{problem, textbook};

#[test]
fn textbook_optimum() {
    let problem = textbook();
    let search = BranchAndBound::with_simplex(&problem).solve();

    assert!(search.is_optimal());
    let solution = search.solution().unwrap();
    assert_eq!(solution.to_integers(), Some(vec![1, 2, 1]));
    assert_relative_eq!(solution.objective_value(), 13f64);
    assert!(problem.is_feasible(solution.values(), 0f64));
    assert!(search.tree.len() > 1);
}

#[test]
fn infeasible_root() {
    let problem = problem(&[1f64, 1f64], &[(&[1f64, 1f64], -1f64)]);
    let search = BranchAndBound::with_simplex(&problem).solve();

    assert_eq!(search.status, Status::NoFeasibleSolution);
    assert!(search.solution().is_none());
    assert_eq!(search.tree.len(), 1);
    assert_eq!(search.tree.root().map(|root| root.kind()), Some(NodeKind::Dead));
    assert!(search.tree.root().and_then(|root| root.relaxation()).is_none());
}

#[test]
fn contradictory_bounds() {
    let problem = problem(&[1f64], &[(&[1f64], 2f64), (&[-1f64], -3f64)]);
    let search = BranchAndBound::with_simplex(&problem).solve();

    assert_eq!(search.status, Status::NoFeasibleSolution);
}

#[test]
fn no_integral_point() {
    // 0.2 <= x <= 0.8 has a feasible relaxation but no integer solution
    let problem = problem(&[1f64], &[(&[1f64], 0.8), (&[-1f64], -0.2)]);
    let search = BranchAndBound::with_simplex(&problem).solve();

    assert_eq!(search.status, Status::NoFeasibleSolution);
    let kinds = search.tree.iter().map(|node| node.kind()).collect::<Vec<_>>();
    assert_eq!(kinds, vec![NodeKind::Branched, NodeKind::Dead, NodeKind::Dead]);
}

#[test]
fn integral_root_relaxation() {
    let problem = problem(&[1f64, 1f64], &[(&[1f64, 0f64], 2f64), (&[0f64, 1f64], 3f64)]);
    let search = BranchAndBound::with_simplex(&problem).solve();

    assert_eq!(search.tree.len(), 1);
    let root = search.tree.root().unwrap();
    assert_eq!(root.kind(), NodeKind::Leaf);

    let Status::Optimal(incumbent) = &search.status else { panic!("{:?}", search.status) };
    assert_eq!(incumbent.node(), root.id());
    assert_eq!(root.relaxation(), Some(incumbent.solution()));
    assert_eq!(incumbent.solution().values(), &[2f64, 3f64]);
    assert_eq!(incumbent.objective_value(), 5f64);
}

#[test]
fn unbounded() {
    let problem = problem(&[1f64, 1f64], &[(&[1f64, -1f64], 1f64)]);
    let search = BranchAndBound::with_simplex(&problem).solve();

    let root = search.tree.root().unwrap();
    assert_eq!(search.status, Status::Unbounded { node: root.id() });
    assert_ne!(search.status, Status::NoFeasibleSolution);
    assert!(search.solution().is_none());
}

#[test]
fn negative_right_hand_sides() {
    // x1 >= 1.5, x1 + x2 >= 2
    let problem = problem(&[-1f64, -1f64], &[(&[-1f64, 0f64], -1.5), (&[-1f64, -1f64], -2f64)]);
    let search = BranchAndBound::with_simplex(&problem).solve();

    let solution = search.solution().unwrap();
    assert_eq!(solution.to_integers(), Some(vec![2, 0]));
    assert_relative_eq!(solution.objective_value(), -2f64);
}

#[test]
fn tiny_coefficients() {
    // 5e-10 x >= 1, repeated
    let problem = IntegerProgram::new(vec![-1f64], vec![Constraint::new(vec![-5e-10], -1f64); 3]).unwrap();
    let search = BranchAndBound::with_simplex(&problem).solve();

    assert!(search.is_optimal());
    let solution = search.solution().unwrap();
    assert_relative_eq!(solution.value(0), 2e9, max_relative = 1e-6);
    assert_relative_eq!(solution.objective_value(), -2e9, max_relative = 1e-6);
}

#[test]
fn integer_knapsack() {
    let problem = problem(&[8f64, 11f64, 6f64, 4f64], &[(&[5f64, 7f64, 4f64, 3f64], 14f64)]);
    let search = BranchAndBound::with_simplex(&problem).solve();

    let solution = search.solution().unwrap();
    assert_relative_eq!(solution.objective_value(), 22f64);
    assert!(problem.is_feasible(solution.values(), 0f64));
}

#[test]
fn strict_improvement_keeps_the_first_optimum() {
    let problem = problem(&[1f64, 1f64], &[(&[2f64, 2f64], 3f64)]);
    let search = BranchAndBound::with_simplex(&problem).solve();

    let incumbent = search.incumbent().unwrap();
    assert_eq!(incumbent.objective_value(), 1f64);

    let optimal_leaves = search.tree.leaves()
        .filter(|leaf| leaf.relaxation().is_some_and(|relaxation| relaxation.objective_value() == 1f64))
        .map(|leaf| leaf.id())
        .collect::<Vec<_>>();
    assert!(optimal_leaves.len() > 1);
    assert_eq!(optimal_leaves.first(), Some(&incumbent.node()));
    assert_eq!(search.statistics.incumbent_updates, 1);
}

#[test]
fn mixed_integer() {
    let problem = IntegerProgram::new(vec![1f64, 1f64], vec![
        Constraint::new(vec![2f64, 2f64], 3f64),
    ]).unwrap();
    let mixed = IntegerProgram::with_variables(
        problem.objective().to_vec(),
        vec![Variable::integer("n"), Variable::continuous("y")],
        problem.constraints().to_vec(),
    ).unwrap();
    let search = BranchAndBound::with_simplex(&mixed).solve();

    let solution = search.solution().unwrap();
    assert_relative_eq!(solution.objective_value(), 1.5);
    assert_eq!(solution.value(0).fract(), 0f64);
}

#[test]
fn node_limit() {
    let problem = textbook();
    let settings = Settings::default().with_node_limit(1);
    let search = BranchAndBound::with_settings(&problem, Simplex::default(), settings).solve();

    assert!(matches!(search.status, Status::LimitReached { incumbent: None, .. }));
    assert_eq!(search.tree.len(), 1);
    assert!(!search.is_optimal());
}

/// Counts calls and delegates to the simplex method.
struct Counting {
    calls: usize,
    inner: Simplex<f64>,
}

impl SolveRelaxation<f64> for Counting {
    fn solve_relaxation(
        &mut self,
        variables: &[Variable],
        objective: &[f64],
        constraints: &[Constraint<f64>],
    ) -> OptimizationResult<f64> {
        self.calls += 1;
        self.inner.solve_relaxation(variables, objective, constraints)
    }
}

#[test]
fn custom_relaxation_solver() {
    let problem = textbook();
    let mut solver = Counting { calls: 0, inner: Simplex::default() };
    let search = BranchAndBound::new(&problem, &mut solver).solve();

    assert_eq!(solver.calls, search.tree.len());
    assert_eq!(search.statistics.relaxations_solved, solver.calls);
    assert_eq!(search.solution().and_then(|solution| solution.to_integers()), Some(vec![1, 2, 1]));
}
