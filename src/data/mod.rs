//! # Storing of problems and search results in memory
//!
//! This module provides the data structures used to represent integer programs and the decision
//! trees built while solving them. Algorithms may introduce their specific data structures in
//! `algorithm::my_algorithm`.

pub mod decision_tree;
pub mod linear_program;
