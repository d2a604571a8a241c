//! Strategies for ordering the candidate values of a variable.

use crate::solver::{constraint::Constraint, value::DomainValue, variable::Variable};

/// A value-ordering strategy.
///
/// Given the variable chosen for branching, implementors decide the order in
/// which its remaining domain values are tried. The constraint set is
/// available so that an informed strategy could rank values by how much they
/// restrict the neighbours.
pub trait ValueOrdering<V: DomainValue> {
    /// The variable's remaining domain, in the order the solver should try it.
    fn order_values(&self, variable: &Variable<V>, constraints: &[Box<dyn Constraint<V>>])
        -> Vec<V>;
}

/// Tries values in their natural ascending order, unfiltered.
///
/// This is the uninformed default: no look-ahead ranking, just the domain's
/// own deterministic order.
pub struct NaturalOrder;

impl<V: DomainValue> ValueOrdering<V> for NaturalOrder {
    fn order_values(
        &self,
        variable: &Variable<V>,
        _constraints: &[Box<dyn Constraint<V>>],
    ) -> Vec<V> {
        variable.domain().iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use im::ordset;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn natural_order_yields_domain_ascending() {
        let variable = Variable::unassigned("a", ordset![3, 1, 2]);

        let ordered = ValueOrdering::<i64>::order_values(&NaturalOrder, &variable, &[]);

        assert_eq!(ordered, vec![1, 2, 3]);
    }

    #[test]
    fn natural_order_of_assigned_variable_is_empty() {
        let variable = Variable::assigned("a", 1);

        let ordered = ValueOrdering::<i64>::order_values(&NaturalOrder, &variable, &[]);

        assert!(ordered.is_empty());
    }
}
