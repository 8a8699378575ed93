//! # An integer linear program solver
//!
//! Integer linear programs are solved using Dakin's branch and bound method: the linear relaxation
//! of the problem is solved, and while the relaxation optimum has a fractional integer variable,
//! the problem is split in two on that variable. Subproblems are explored breadth first and each
//! of them is recorded in a decision tree.
//!
//! Relaxations are solved by a dense simplex method by default; any type implementing
//! `algorithm::SolveRelaxation` can take its place.
//!
//! ```
//! use dakin::algorithm::branch_and_bound::BranchAndBound;
//! use dakin::data::linear_program::elements::Constraint;
//! use dakin::data::linear_program::integer_program::IntegerProgram;
//!
//! let problem = IntegerProgram::new(
//!     vec![1f64, 1f64],
//!     vec![Constraint::new(vec![1f64, 0f64], 2f64), Constraint::new(vec![0f64, 1f64], 3f64)],
//! ).unwrap();
//! let search = BranchAndBound::with_simplex(&problem).solve();
//!
//! assert_eq!(search.solution().unwrap().values(), &[2f64, 3f64]);
//! assert_eq!(search.tree.len(), 1);
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;

#[cfg(test)]
mod tests;
