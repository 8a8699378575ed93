//! # Dense tableau
//!
//! The problems solved during branch and bound are small and dense, so the tableau is stored
//! explicitly. Columns are ordered as: problem variables, one slack per row, then the artificial
//! variables.
use std::fmt;
use std::fmt::Display;

use itertools::Itertools;
use num_traits::Float;

use crate::data::linear_program::elements::Constraint;

/// Standard form `[A | I | R] x = b` with `x >= 0` and `b >= 0`, together with a basis.
///
/// Rows with a negative right-hand side are negated, after which their slack has a negative
/// coefficient and can't be basic. Such rows get an artificial variable `R` instead.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Tableau<F> {
    /// Current rows `B^-1 [A | I | R]`.
    rows: Vec<Vec<F>>,
    /// Current right-hand side `B^-1 b`, the values of the basic variables.
    rhs: Vec<F>,
    /// Relative cost `c_j - c_B B^-1 a_j` of each column w.r.t. the current cost function.
    relative_costs: Vec<F>,
    /// Value of the current cost function at the basic feasible solution.
    objective_value: F,
    /// Basic column of each row.
    basis: Vec<usize>,
    /// For each column, whether it is basic.
    in_basis: Vec<bool>,
    nr_variables: usize,
    nr_artificial: usize,
}

impl<F: Float> Tableau<F> {
    /// Create a tableau with a basis of slacks and artificial variables.
    ///
    /// # Arguments
    ///
    /// * `nr_variables`: Number of variables of the problem.
    /// * `constraints`: Rows `<a, x> <= b`, each with `nr_variables` coefficients.
    pub(crate) fn new(nr_variables: usize, constraints: &[Constraint<F>]) -> Self {
        let nr_rows = constraints.len();
        let nr_artificial = constraints.iter().filter(|constraint| constraint.bound < F::zero()).count();
        let nr_columns = nr_variables + nr_rows + nr_artificial;

        let mut rows = Vec::with_capacity(nr_rows);
        let mut rhs = Vec::with_capacity(nr_rows);
        let mut basis = Vec::with_capacity(nr_rows);
        let mut next_artificial = nr_variables + nr_rows;
        for (i, constraint) in constraints.iter().enumerate() {
            debug_assert_eq!(constraint.coefficients.len(), nr_variables);

            let sign = if constraint.bound < F::zero() { -F::one() } else { F::one() };
            let mut row = vec![F::zero(); nr_columns];
            for (j, &coefficient) in constraint.coefficients.iter().enumerate() {
                row[j] = sign * coefficient;
            }
            row[nr_variables + i] = sign;

            if constraint.bound < F::zero() {
                row[next_artificial] = F::one();
                basis.push(next_artificial);
                next_artificial += 1;
            } else {
                basis.push(nr_variables + i);
            }
            rows.push(row);
            rhs.push(sign * constraint.bound);
        }

        let mut in_basis = vec![false; nr_columns];
        for &column in &basis {
            in_basis[column] = true;
        }

        Self {
            rows,
            rhs,
            relative_costs: vec![F::zero(); nr_columns],
            objective_value: F::zero(),
            basis,
            in_basis,
            nr_variables,
            nr_artificial,
        }
    }

    /// Replace the cost function, which is minimized.
    ///
    /// Computes the relative costs and objective value from scratch.
    ///
    /// # Arguments
    ///
    /// * `cost`: One cost per column.
    pub(crate) fn set_cost(&mut self, cost: &[F]) {
        debug_assert_eq!(cost.len(), self.nr_columns());

        self.relative_costs = (0..self.nr_columns())
            .map(|j| {
                self.rows.iter().zip_eq(&self.basis)
                    .fold(cost[j], |total, (row, &basic)| total - cost[basic] * row[j])
            })
            .collect();
        self.objective_value = self.rhs.iter().zip_eq(&self.basis)
            .fold(F::zero(), |total, (&value, &basic)| total + cost[basic] * value);
    }

    /// Ratio test: the row whose basic variable leaves first when `column` enters.
    ///
    /// Only entries larger than `tolerance` times the largest absolute entry of the column are
    /// pivot candidates. A column of uniformly small coefficients can still be pivoted on, while
    /// rounding noise next to a large entry can't.
    ///
    /// Ties are broken by the smallest basic column index, which together with the
    /// `FirstProfitable` column rule prevents cycling.
    ///
    /// # Return value
    ///
    /// `None` if the column has no positive entry, so it can be increased without bound.
    pub(crate) fn select_primal_pivot_row(&self, column: usize, tolerance: F) -> Option<usize> {
        let scale = self.rows.iter()
            .map(|row| row[column].abs())
            .fold(F::zero(), F::max);
        let threshold = tolerance * scale;

        let mut best: Option<(usize, F)> = None;
        for (i, row) in self.rows.iter().enumerate() {
            if row[column] > threshold {
                let ratio = self.rhs[i] / row[column];
                best = match best {
                    Some((best_row, best_ratio)) => {
                        if ratio < best_ratio - tolerance
                            || (ratio <= best_ratio + tolerance && self.basis[i] < self.basis[best_row]) {
                            Some((i, ratio))
                        } else {
                            Some((best_row, best_ratio))
                        }
                    },
                    None => Some((i, ratio)),
                };
            }
        }

        best.map(|(row, _)| row)
    }

    /// Pivot: make `column` basic in row `pivot_row`.
    pub(crate) fn bring_into_basis(&mut self, column: usize, pivot_row: usize) {
        debug_assert!(!self.in_basis[column]);
        debug_assert!(self.rows[pivot_row][column] != F::zero());

        let pivot = self.rows[pivot_row][column];
        for value in self.rows[pivot_row].iter_mut() {
            *value = *value / pivot;
        }
        self.rhs[pivot_row] = self.rhs[pivot_row] / pivot;

        let pivot_values = self.rows[pivot_row].clone();
        let pivot_rhs = self.rhs[pivot_row];
        for (i, row) in self.rows.iter_mut().enumerate() {
            let factor = row[column];
            if i != pivot_row && factor != F::zero() {
                for (value, &pivot_value) in row.iter_mut().zip_eq(&pivot_values) {
                    *value = *value - factor * pivot_value;
                }
                self.rhs[i] = self.rhs[i] - factor * pivot_rhs;
            }
        }

        let cost = self.relative_costs[column];
        for (relative_cost, &pivot_value) in self.relative_costs.iter_mut().zip_eq(&pivot_values) {
            *relative_cost = *relative_cost - cost * pivot_value;
        }
        self.objective_value = self.objective_value + cost * pivot_rhs;

        let leaving = self.basis[pivot_row];
        self.in_basis[leaving] = false;
        self.in_basis[column] = true;
        self.basis[pivot_row] = column;
    }

    /// Values of the problem variables in the current basic feasible solution.
    ///
    /// Values within `tolerance` of zero are reported as exactly zero.
    pub(crate) fn current_bfs(&self, tolerance: F) -> Vec<F> {
        let mut values = vec![F::zero(); self.nr_variables];
        for (&column, &value) in self.basis.iter().zip_eq(&self.rhs) {
            if column < self.nr_variables && value.abs() > tolerance {
                values[column] = value;
            }
        }

        values
    }

    /// Rows in which an artificial variable is still basic.
    pub(crate) fn artificial_basis_rows(&self) -> Vec<usize> {
        self.basis.iter().enumerate()
            .filter(|&(_, &column)| self.is_artificial(column))
            .map(|(i, _)| i)
            .collect()
    }

    pub(crate) fn relative_cost(&self, column: usize) -> F {
        self.relative_costs[column]
    }

    pub(crate) fn element(&self, row: usize, column: usize) -> F {
        self.rows[row][column]
    }

    pub(crate) fn is_in_basis(&self, column: usize) -> bool {
        self.in_basis[column]
    }

    pub(crate) fn is_artificial(&self, column: usize) -> bool {
        column >= self.nr_columns() - self.nr_artificial
    }

    /// Value of the cost function at the current basic feasible solution.
    pub(crate) fn objective_value(&self) -> F {
        self.objective_value
    }

    pub(crate) fn nr_rows(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn nr_columns(&self) -> usize {
        self.in_basis.len()
    }

    pub(crate) fn nr_artificial_variables(&self) -> usize {
        self.nr_artificial
    }
}

impl<F: Float + Display> Display for Tableau<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cost\t{}\t| {}", self.relative_costs.iter().join("\t"), self.objective_value)?;
        for ((row, value), basic) in self.rows.iter().zip_eq(&self.rhs).zip_eq(&self.basis) {
            writeln!(f, "[{}]\t{}\t| {}", basic, row.iter().join("\t"), value)?;
        }

        Ok(())
    }
}
