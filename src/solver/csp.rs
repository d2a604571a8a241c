use crate::{
    error::Result,
    solver::{assignment::Assignment, constraint::Constraint, value::DomainValue},
};

/// The contract a concrete problem implements to be solvable by the engine.
///
/// A CSP is defined by its variables (delivered through the initial
/// assignment) and its constraints. Both are treated as fixed for the
/// duration of a solve: the solver asks for each exactly once. Every variable
/// identity referenced by any constraint's scope must exist as a key of every
/// assignment produced during the solve.
pub trait Csp {
    type Value: DomainValue;

    /// The starting state: an assignment covering exactly the problem's
    /// variables, with any pre-fixed cells already assigned (and forward
    /// checking already applied, consistently with [`Csp::constraints`]).
    /// Fallible because building it may involve parsing external input and
    /// placing given values.
    fn initial_assignment(&self) -> Result<Assignment<Self::Value>>;

    /// The constraint set of the problem.
    fn constraints(&self) -> Vec<Box<dyn Constraint<Self::Value>>>;

    /// Whether `assignment` is consistent with this problem's constraints.
    fn is_consistent(&self, assignment: &Assignment<Self::Value>) -> bool {
        assignment.is_consistent(&self.constraints())
    }

    /// Whether `assignment` is a solution to this problem.
    fn is_satisfied(&self, assignment: &Assignment<Self::Value>) -> bool {
        assignment.is_satisfied(&self.constraints())
    }
}
