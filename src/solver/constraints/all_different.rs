use std::collections::HashSet;

use crate::solver::{
    constraint::{Constraint, ConstraintDescriptor},
    value::DomainValue,
    variable::{Variable, VariableId},
};

/// Requires all variables in its scope to take pairwise-distinct values.
///
/// Beyond the obvious duplicate check on assigned variables, consistency
/// performs a one-step look-ahead on the unassigned ones. Suppose `X` and `Y`
/// are unassigned and share the singleton domain `{ c }`: neither has a value
/// yet, but they can never both be assigned consistently, so the branch is
/// already dead. Likewise an unassigned variable whose remaining candidates
/// have all been consumed by assigned peers can never be assigned at all.
///
/// This propagation is intentionally shallower than full arc consistency; it
/// only inspects singleton domains and directly-consumed values. Deeper
/// conflicts surface later, once the search narrows the domains further.
#[derive(Debug, Clone)]
pub struct AllDifferent {
    scope: Vec<VariableId>,
}

impl AllDifferent {
    /// Creates the constraint over the given variable identities. The scope
    /// is sorted and deduplicated, so evaluation order is deterministic.
    pub fn new<I>(scope: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<VariableId>,
    {
        let mut scope: Vec<VariableId> = scope.into_iter().map(Into::into).collect();
        scope.sort();
        scope.dedup();
        Self { scope }
    }

    fn no_duplicate_assignments<V: DomainValue>(&self, scoped: &[&Variable<V>]) -> bool {
        let mut seen = HashSet::new();
        scoped
            .iter()
            .filter_map(|variable| variable.value())
            .all(|value| seen.insert(value))
    }

    fn no_conflicting_singletons<V: DomainValue>(&self, scoped: &[&Variable<V>]) -> bool {
        let mut seen = HashSet::new();
        scoped
            .iter()
            .filter(|variable| !variable.is_assigned())
            .filter_map(|variable| {
                if variable.domain().len() == 1 {
                    variable.domain().get_min()
                } else {
                    None
                }
            })
            .all(|value| seen.insert(value))
    }

    fn unassigned_remain_assignable<V: DomainValue>(&self, scoped: &[&Variable<V>]) -> bool {
        let taken: HashSet<&V> = scoped
            .iter()
            .filter_map(|variable| variable.value())
            .collect();
        scoped
            .iter()
            .filter(|variable| !variable.is_assigned())
            .all(|variable| {
                variable
                    .domain()
                    .iter()
                    .any(|candidate| !taken.contains(candidate))
            })
    }
}

impl<V: DomainValue> Constraint<V> for AllDifferent {
    fn scope(&self) -> &[VariableId] {
        &self.scope
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        let scope = self
            .scope
            .iter()
            .map(VariableId::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        ConstraintDescriptor {
            name: "AllDifferent".to_string(),
            description: format!("AllDifferent({scope})"),
        }
    }

    fn is_consistent(&self, scoped: &[&Variable<V>]) -> bool {
        self.no_conflicting_singletons(scoped)
            && self.no_duplicate_assignments(scoped)
            && self.unassigned_remain_assignable(scoped)
    }

    fn is_satisfied(&self, scoped: &[&Variable<V>]) -> bool {
        scoped.iter().all(|variable| variable.is_assigned()) && self.is_consistent(scoped)
    }
}
