use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use im::OrdSet;

use crate::{
    error::{Result, SolverError},
    solver::value::DomainValue,
};

/// An opaque identity that uniquely names a variable within a CSP.
///
/// Identities are cheap to clone and ordered, so they double as map keys and
/// as the deterministic tie-break for heuristics ("lexicographic by
/// identity").
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VariableId(Arc<str>);

impl VariableId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(Arc::from(id.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VariableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VariableId {
    fn from(id: &str) -> Self {
        Self(Arc::from(id))
    }
}

impl From<String> for VariableId {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

/// A variable of a CSP: an identity, an optional fixed value, and the domain
/// of values it may still take.
///
/// A variable is immutable. [`Variable::assign`] and [`Variable::restrict`]
/// return updated copies; the persistent domain set makes those copies cheap.
/// Invariant: an assigned variable has an empty domain, an unassigned one
/// keeps its remaining candidates in `domain`. An empty domain on an
/// unassigned variable is a legal transient state signalling that the current
/// branch is dead.
#[derive(Clone, Debug)]
pub struct Variable<V: DomainValue> {
    id: VariableId,
    assigned: Option<V>,
    domain: OrdSet<V>,
}

impl<V: DomainValue> Variable<V> {
    /// Creates an unassigned variable with the given initial domain.
    pub fn unassigned(id: impl Into<VariableId>, domain: OrdSet<V>) -> Self {
        Self {
            id: id.into(),
            assigned: None,
            domain,
        }
    }

    /// Creates a variable that is already fixed to `value`.
    pub fn assigned(id: impl Into<VariableId>, value: V) -> Self {
        Self {
            id: id.into(),
            assigned: Some(value),
            domain: OrdSet::new(),
        }
    }

    pub fn id(&self) -> &VariableId {
        &self.id
    }

    /// The remaining domain. Empty once the variable is assigned.
    pub fn domain(&self) -> &OrdSet<V> {
        &self.domain
    }

    /// The fixed value, if one has been assigned.
    pub fn value(&self) -> Option<&V> {
        self.assigned.as_ref()
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned.is_some()
    }

    /// Fixes the variable to `value` and clears its domain.
    ///
    /// Fails with [`SolverError::DomainViolation`] if `value` is not in the
    /// remaining domain. That is a precondition violation, not an ordinary
    /// search outcome.
    pub fn assign(&self, value: V) -> Result<Self> {
        if !self.domain.contains(&value) {
            return Err(SolverError::DomainViolation {
                variable: self.id.clone(),
                value: format!("{value:?}"),
            }
            .into());
        }
        Ok(Self {
            id: self.id.clone(),
            assigned: Some(value),
            domain: OrdSet::new(),
        })
    }

    /// Removes `value` from the remaining domain.
    ///
    /// Restricting by a value that is not in the domain is a no-op returning
    /// an equal variable, so the operation is idempotent. Fails with
    /// [`SolverError::InvalidRestriction`] if the variable already holds a
    /// fixed value.
    pub fn restrict(&self, value: &V) -> Result<Self> {
        if self.is_assigned() {
            return Err(SolverError::InvalidRestriction {
                variable: self.id.clone(),
            }
            .into());
        }
        if !self.domain.contains(value) {
            return Ok(self.clone());
        }
        Ok(Self {
            id: self.id.clone(),
            assigned: None,
            domain: self.domain.without(value),
        })
    }
}

// Equality and hashing go by identity alone. Domain and assigned value do not
// participate, which lets variables act as set members keyed purely by id.
impl<V: DomainValue> PartialEq for Variable<V> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<V: DomainValue> Eq for Variable<V> {}

impl<V: DomainValue> Hash for Variable<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use im::ordset;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::SolverError;

    fn colours() -> OrdSet<&'static str> {
        ordset!["blue", "green", "red"]
    }

    #[test]
    fn assign_fixes_value_and_clears_domain() {
        let variable = Variable::unassigned("WA", colours());

        let assigned = variable.assign("red").unwrap();

        assert!(assigned.is_assigned());
        assert_eq!(assigned.value(), Some(&"red"));
        assert!(assigned.domain().is_empty());
    }

    #[test]
    fn assign_rejects_value_outside_domain() {
        let variable = Variable::unassigned("WA", colours());

        let err = variable.assign("purple").unwrap_err();

        assert!(matches!(
            err.inner(),
            SolverError::DomainViolation { .. }
        ));
    }

    #[test]
    fn restrict_removes_value_from_domain() {
        let variable = Variable::unassigned("WA", colours());

        let restricted = variable.restrict(&"red").unwrap();

        assert!(!restricted.domain().contains(&"red"));
        assert_eq!(restricted.domain().len(), 2);
        assert!(!restricted.is_assigned());
    }

    #[test]
    fn restrict_is_idempotent() {
        let variable = Variable::unassigned("WA", colours());

        let once = variable.restrict(&"red").unwrap();
        let twice = once.restrict(&"red").unwrap();

        assert_eq!(once.domain(), twice.domain());
    }

    #[test]
    fn restrict_by_absent_value_is_a_noop() {
        let variable = Variable::unassigned("WA", colours());

        let restricted = variable.restrict(&"purple").unwrap();

        assert_eq!(restricted.domain(), variable.domain());
    }

    #[test]
    fn restrict_rejects_assigned_variable() {
        let variable = Variable::assigned("WA", "red");

        let err = variable.restrict(&"green").unwrap_err();

        assert!(matches!(
            err.inner(),
            SolverError::InvalidRestriction { .. }
        ));
    }

    #[test]
    fn restricting_to_an_empty_domain_is_legal() {
        let variable = Variable::unassigned("WA", ordset!["red"]);

        let emptied = variable.restrict(&"red").unwrap();

        assert!(emptied.domain().is_empty());
        assert!(!emptied.is_assigned());
    }

    #[test]
    fn equality_goes_by_identity_only() {
        let unassigned = Variable::unassigned("WA", colours());
        let assigned = Variable::<&'static str>::assigned("WA", "red");
        let other = Variable::unassigned("NT", colours());

        assert_eq!(unassigned, assigned);
        assert_ne!(unassigned, other);
    }
}
