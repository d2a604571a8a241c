use crate::solver::{
    value::DomainValue,
    variable::{Variable, VariableId},
};

/// Human-readable identification of a constraint, used for the per-constraint
/// statistics table and for diagnostics.
#[derive(Debug, Clone)]
pub struct ConstraintDescriptor {
    pub name: String,
    pub description: String,
}

/// A constraint over a fixed subset of a CSP's variables.
///
/// A constraint declares its scope and exposes two predicates over the scoped
/// variables as they currently appear in an assignment:
///
/// - [`Constraint::is_consistent`] is a necessary-but-not-sufficient check
///   that is meaningful on partial assignments. A branch whose assignment
///   violates it can never be extended into a solution.
/// - [`Constraint::is_satisfied`] is the full predicate, only meaningful once
///   every scoped variable is assigned. Satisfaction must imply consistency.
///
/// Constraints are immutable: they are created once per CSP definition and
/// never change during search.
pub trait Constraint<V: DomainValue>: std::fmt::Debug {
    /// The identities of the variables this constraint relies on.
    fn scope(&self) -> &[VariableId];

    fn descriptor(&self) -> ConstraintDescriptor;

    /// Whether the scoped variables, in their current state, can still lead
    /// to a satisfying assignment.
    fn is_consistent(&self, scoped: &[&Variable<V>]) -> bool;

    /// Whether the scoped variables fully satisfy the constraint.
    fn is_satisfied(&self, scoped: &[&Variable<V>]) -> bool;
}
