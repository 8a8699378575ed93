//! # Representing integer linear programs
//!
//! This module contains the problem statement, the building blocks it is made of and the solutions
//! that searches produce.
pub mod elements;
pub mod error;
pub mod integer_program;
pub mod solution;
