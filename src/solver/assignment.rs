use std::{collections::BTreeSet, fmt};

use im::OrdMap;

use crate::{
    error::{Result, SolverError},
    solver::{
        constraint::Constraint,
        value::DomainValue,
        variable::{Variable, VariableId},
    },
};

/// A state of the CSP: every variable mapped to either a fixed value or its
/// remaining domain.
///
/// An assignment that violates no constraint is called consistent; one in
/// which every variable is assigned is complete; a complete assignment
/// satisfying all constraints is a solution.
///
/// Assignments are immutable. Every operation returns a new value and the
/// persistent map shares unaffected entries, so each node of the search tree
/// can hold its own assignment cheaply. The key set never changes over the
/// life of a solve; only the contained variables do.
///
/// [`Assignment::assign`] applies forward checking: whenever a variable is
/// fixed to a value, that value is removed from the domains of all dependent
/// unassigned variables, pruning branches that are already doomed.
#[derive(Clone, Debug)]
pub struct Assignment<V: DomainValue> {
    variables: OrdMap<VariableId, Variable<V>>,
}

impl<V: DomainValue> Assignment<V> {
    pub fn new(variables: impl IntoIterator<Item = Variable<V>>) -> Self {
        Self {
            variables: variables
                .into_iter()
                .map(|variable| (variable.id().clone(), variable))
                .collect(),
        }
    }

    /// Fixes the named variable to `value` and forward-checks.
    ///
    /// After the assignment itself, every other currently-unassigned variable
    /// that shares a constraint scope with `id` has `value` removed from its
    /// remaining domain. A domain emptied this way is not an error here; it
    /// surfaces as an inconsistency when the constraints are checked.
    pub fn assign(
        &self,
        id: &VariableId,
        value: V,
        constraints: &[Box<dyn Constraint<V>>],
    ) -> Result<Self> {
        let variable = self.get(id)?;
        let assigned = variable.assign(value.clone())?;
        let mut next = Self {
            variables: self.variables.update(id.clone(), assigned),
        };
        for dependent in next.dependent_variables(id, constraints) {
            next = next.restrict(&dependent, &value)?;
        }
        Ok(next)
    }

    /// Removes `value` from the domain of the named variable.
    pub fn restrict(&self, id: &VariableId, value: &V) -> Result<Self> {
        let restricted = self.get(id)?.restrict(value)?;
        Ok(Self {
            variables: self.variables.update(id.clone(), restricted),
        })
    }

    /// True iff no constraint is violated by the current state.
    pub fn is_consistent(&self, constraints: &[Box<dyn Constraint<V>>]) -> bool {
        constraints
            .iter()
            .all(|constraint| constraint.is_consistent(&self.scoped_variables(constraint.scope())))
    }

    /// True iff every variable holds a fixed value.
    pub fn is_complete(&self) -> bool {
        self.variables.values().all(Variable::is_assigned)
    }

    /// True iff the assignment is complete and satisfies every constraint.
    pub fn is_satisfied(&self, constraints: &[Box<dyn Constraint<V>>]) -> bool {
        self.is_complete()
            && constraints.iter().all(|constraint| {
                constraint.is_satisfied(&self.scoped_variables(constraint.scope()))
            })
    }

    /// The variables without a fixed value, in identity order.
    pub fn unassigned_variables(&self) -> impl Iterator<Item = &Variable<V>> {
        self.variables
            .values()
            .filter(|variable| !variable.is_assigned())
    }

    pub fn is_assigned(&self, id: &VariableId) -> bool {
        self.variables
            .get(id)
            .is_some_and(Variable::is_assigned)
    }

    /// The fixed value of the named variable, if it has one.
    pub fn value_of(&self, id: &VariableId) -> Option<&V> {
        self.variables.get(id).and_then(Variable::value)
    }

    pub fn variable(&self, id: &VariableId) -> Option<&Variable<V>> {
        self.variables.get(id)
    }

    /// The subset of variables a constraint scope refers to, in scope order.
    pub fn scoped_variables(&self, scope: &[VariableId]) -> Vec<&Variable<V>> {
        scope
            .iter()
            .filter_map(|id| self.variables.get(id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    fn get(&self, id: &VariableId) -> Result<&Variable<V>> {
        self.variables.get(id).ok_or_else(|| {
            SolverError::UnknownVariable {
                variable: id.clone(),
            }
            .into()
        })
    }

    /// Unassigned variables, other than `id` itself, that share at least one
    /// constraint scope with `id`. Deduplicated and in identity order so that
    /// forward checking is deterministic.
    fn dependent_variables(
        &self,
        id: &VariableId,
        constraints: &[Box<dyn Constraint<V>>],
    ) -> Vec<VariableId> {
        let mut dependents = BTreeSet::new();
        for constraint in constraints
            .iter()
            .filter(|constraint| constraint.scope().contains(id))
        {
            for other in constraint.scope() {
                if other != id && !self.is_assigned(other) {
                    dependents.insert(other.clone());
                }
            }
        }
        dependents.into_iter().collect()
    }
}

impl<V: DomainValue> fmt::Display for Assignment<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Assigned variables:")?;
        for variable in self.variables.values() {
            if let Some(value) = variable.value() {
                writeln!(f, "\t{} = {value:?}", variable.id())?;
            }
        }
        writeln!(f, "Unassigned variables:")?;
        for variable in self.unassigned_variables() {
            let candidates: Vec<String> = variable
                .domain()
                .iter()
                .map(|value| format!("{value:?}"))
                .collect();
            writeln!(f, "\t{} = {{ {} }}", variable.id(), candidates.join(" "))?;
        }
        Ok(())
    }
}
