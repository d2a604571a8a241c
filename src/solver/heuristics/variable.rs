//! Strategies for selecting which unassigned variable to branch on next.

use std::cell::RefCell;

use rand::seq::IteratorRandom;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

use crate::solver::{
    assignment::Assignment,
    value::DomainValue,
    variable::Variable,
};

/// A variable-ordering strategy.
///
/// Implementors choose which unassigned variable the solver branches on next.
/// A good ordering can prune the search tree dramatically; all orderings
/// explore the same solution space.
pub trait VariableOrdering<V: DomainValue> {
    /// Selects the next unassigned variable of `assignment`, or `None` when
    /// every variable is already assigned.
    fn select_variable<'a>(&self, assignment: &'a Assignment<V>) -> Option<&'a Variable<V>>;
}

/// Picks the first unassigned variable in identity order.
///
/// This is the uninformed default. Identity order makes it deterministic:
/// repeated solves of the same problem visit the same variables in the same
/// sequence.
pub struct SelectFirst;

impl<V: DomainValue> VariableOrdering<V> for SelectFirst {
    fn select_variable<'a>(&self, assignment: &'a Assignment<V>) -> Option<&'a Variable<V>> {
        assignment.unassigned_variables().next()
    }
}

/// Picks the unassigned variable with the fewest remaining domain values.
///
/// Also known as the "most constrained variable" or fail-first heuristic: the
/// variable most likely to cause a failure is branched on early, pruning the
/// search tree sooner. Ties are broken by identity order.
pub struct MinimumRemainingValues;

impl<V: DomainValue> VariableOrdering<V> for MinimumRemainingValues {
    fn select_variable<'a>(&self, assignment: &'a Assignment<V>) -> Option<&'a Variable<V>> {
        assignment
            .unassigned_variables()
            .min_by_key(|variable| (variable.domain().len(), variable.id().clone()))
    }
}

/// Picks an unassigned variable at random.
///
/// Seeded, so a given seed reproduces the same search. Mostly useful for
/// shaking a solve out of a pathological deterministic ordering.
pub struct RandomOrdering {
    rng: RefCell<ChaCha8Rng>,
}

impl RandomOrdering {
    pub fn from_entropy() -> Self {
        Self {
            rng: RefCell::new(ChaCha8Rng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: RefCell::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl<V: DomainValue> VariableOrdering<V> for RandomOrdering {
    fn select_variable<'a>(&self, assignment: &'a Assignment<V>) -> Option<&'a Variable<V>> {
        assignment
            .unassigned_variables()
            .choose(&mut *self.rng.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use im::ordset;
    use pretty_assertions::assert_eq;

    use super::*;

    fn assignment() -> Assignment<i64> {
        Assignment::new(vec![
            Variable::unassigned("b", ordset![1, 2, 3]),
            Variable::unassigned("a", ordset![1, 2, 3]),
            Variable::assigned("_fixed", 9),
            Variable::unassigned("c", ordset![1, 2]),
        ])
    }

    #[test]
    fn select_first_picks_lowest_identity() {
        let assignment = assignment();

        let selected = VariableOrdering::<i64>::select_variable(&SelectFirst, &assignment);

        assert_eq!(selected.unwrap().id().as_str(), "a");
    }

    #[test]
    fn mrv_picks_smallest_domain() {
        let assignment = assignment();

        let selected =
            VariableOrdering::<i64>::select_variable(&MinimumRemainingValues, &assignment);

        assert_eq!(selected.unwrap().id().as_str(), "c");
    }

    #[test]
    fn mrv_breaks_ties_by_identity() {
        let assignment: Assignment<i64> = Assignment::new(vec![
            Variable::unassigned("y", ordset![1, 2]),
            Variable::unassigned("x", ordset![1, 2]),
        ]);

        let selected =
            VariableOrdering::<i64>::select_variable(&MinimumRemainingValues, &assignment);

        assert_eq!(selected.unwrap().id().as_str(), "x");
    }

    #[test]
    fn nothing_to_select_once_complete() {
        let assignment: Assignment<i64> = Assignment::new(vec![
            Variable::assigned("a", 1),
            Variable::assigned("b", 2),
        ]);

        assert!(VariableOrdering::<i64>::select_variable(&SelectFirst, &assignment).is_none());
        assert!(
            VariableOrdering::<i64>::select_variable(&MinimumRemainingValues, &assignment)
                .is_none()
        );
    }

    #[test]
    fn random_ordering_is_reproducible_for_a_fixed_seed() {
        let assignment = assignment();

        let first =
            VariableOrdering::<i64>::select_variable(&RandomOrdering::seeded(42), &assignment)
                .unwrap()
                .id()
                .clone();
        let second =
            VariableOrdering::<i64>::select_variable(&RandomOrdering::seeded(42), &assignment)
                .unwrap()
                .id()
                .clone();

        assert_eq!(first, second);
    }
}
