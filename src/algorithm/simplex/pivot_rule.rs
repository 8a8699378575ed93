//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use std::ops::Range;

use num_traits::Float;

use crate::algorithm::simplex::tableau::Tableau;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is made by the
/// tableau, independent of the strategy.
pub(crate) trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Arguments
    ///
    /// * `tableau`: Tableau in a basic feasible solution state.
    /// * `columns`: Columns that are allowed to enter the basis.
    /// * `tolerance`: Relative costs must be below minus this value to count as profitable.
    ///
    /// # Return value
    ///
    /// The index of a nonbasic column with negative relative cost, if there is one.
    fn select_primal_pivot_column<F: Float>(
        &mut self,
        tableau: &Tableau<F>,
        columns: Range<usize>,
        tolerance: F,
    ) -> Option<usize>;
}

/// Simply pivot on the first column, which has a negative relative cost.
///
/// This is Bland's rule: combined with the smallest index tie breaking of the ratio test, the
/// simplex method can't cycle.
pub(crate) struct FirstProfitable;

impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: Float>(
        &mut self,
        tableau: &Tableau<F>,
        columns: Range<usize>,
        tolerance: F,
    ) -> Option<usize> {
        columns
            .filter(|&column| !tableau.is_in_basis(column))
            .find(|&column| tableau.relative_cost(column) < -tolerance)
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::simplex::pivot_rule::{FirstProfitable, PivotRule};
    use crate::algorithm::simplex::tableau::Tableau;
    use crate::data::linear_program::elements::Constraint;

    #[test]
    fn first_profitable() {
        let mut tableau = Tableau::new(3, &[Constraint::new(vec![1f64, 1f64, 1f64], 1f64)]);
        tableau.set_cost(&[0f64, -1f64, -2f64, 0f64]);

        let mut rule = FirstProfitable::new();
        assert_eq!(rule.select_primal_pivot_column(&tableau, 0..4, 1e-9), Some(1));
        assert_eq!(rule.select_primal_pivot_column(&tableau, 2..4, 1e-9), Some(2));
        assert_eq!(rule.select_primal_pivot_column(&tableau, 0..1, 1e-9), None);
    }
}
