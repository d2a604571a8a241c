use std::time::Instant;

use tracing::debug;

use crate::{
    error::Result,
    solver::{
        assignment::Assignment,
        constraint::Constraint,
        csp::Csp,
        heuristics::{
            value::{NaturalOrder, ValueOrdering},
            variable::{SelectFirst, VariableOrdering},
        },
        stats::SearchStats,
        value::DomainValue,
    },
};

pub type ConstraintId = usize;

/// A callback invoked with every consistent extension the search accepts.
pub type Listener<V> = Box<dyn Fn(&Assignment<V>)>;

/// Depth-first backtracking search over assignments.
///
/// The solver is driven by the [`Csp`] contract and by a pair of pluggable
/// heuristics: a [`VariableOrdering`] picking the next unassigned variable
/// and a [`ValueOrdering`] deciding the order in which its candidate values
/// are tried. The defaults are uninformed (first unassigned variable, natural
/// value order).
///
/// The search returns the first complete satisfying assignment it reaches in
/// depth-first order; it does not enumerate further solutions, learn from
/// sibling failures, or run in parallel. Exhausting the search space is an
/// expected outcome represented as `Ok(None)`, never as an error — every
/// recursion level reports "this branch failed" as an empty result so its
/// parent can move on to the next candidate.
pub struct DfsSolver<V: DomainValue> {
    variable_ordering: Box<dyn VariableOrdering<V>>,
    value_ordering: Box<dyn ValueOrdering<V>>,
    listeners: Vec<Listener<V>>,
}

impl<V: DomainValue> DfsSolver<V> {
    pub fn new(
        variable_ordering: Box<dyn VariableOrdering<V>>,
        value_ordering: Box<dyn ValueOrdering<V>>,
    ) -> Self {
        Self {
            variable_ordering,
            value_ordering,
            listeners: Vec::new(),
        }
    }

    /// Uses the given variable ordering with the default value ordering.
    pub fn with_variable_ordering(variable_ordering: Box<dyn VariableOrdering<V>>) -> Self {
        Self::new(variable_ordering, Box::new(NaturalOrder))
    }

    /// Uses the given value ordering with the default variable ordering.
    pub fn with_value_ordering(value_ordering: Box<dyn ValueOrdering<V>>) -> Self {
        Self::new(Box::new(SelectFirst), value_ordering)
    }

    /// Registers a callback invoked synchronously, on the solving thread,
    /// once per accepted consistent extension. Listeners must not block;
    /// they run inline with the search.
    pub fn add_listener(&mut self, listener: impl Fn(&Assignment<V>) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Solves the CSP starting from its initial assignment.
    ///
    /// Returns the first complete satisfying assignment found in depth-first
    /// order, or `None` if the search space is exhausted without one, along
    /// with the search statistics. Errors only surface structural violations
    /// (a bug in the problem definition), never an unsatisfiable instance.
    pub fn solve<P>(&self, csp: &P) -> Result<(Option<Assignment<V>>, SearchStats)>
    where
        P: Csp<Value = V> + ?Sized,
    {
        let constraints = csp.constraints();
        let initial = csp.initial_assignment()?;
        let mut stats = SearchStats::default();
        let solution = self.search(&constraints, initial, &mut stats)?;
        Ok((solution, stats))
    }

    fn search(
        &self,
        constraints: &[Box<dyn Constraint<V>>],
        assignment: Assignment<V>,
        stats: &mut SearchStats,
    ) -> Result<Option<Assignment<V>>> {
        stats.nodes_visited += 1;

        if assignment.is_satisfied(constraints) {
            debug!(nodes = stats.nodes_visited, "complete satisfying assignment found");
            return Ok(Some(assignment));
        }

        let Some(variable) = self.variable_ordering.select_variable(&assignment) else {
            // Complete but violating a constraint: a dead end.
            return Ok(None);
        };
        let id = variable.id().clone();
        let candidates = self.value_ordering.order_values(variable, constraints);
        debug!(variable = %id, candidates = candidates.len(), "expanding");

        for value in candidates {
            let candidate = assignment.assign(&id, value, constraints)?;
            stats.assignments += 1;

            if !self.check_consistency(&candidate, constraints, stats) {
                stats.backtracks += 1;
                continue;
            }

            self.notify_listeners(&candidate);

            if let Some(found) = self.search(constraints, candidate, stats)? {
                return Ok(Some(found));
            }
            stats.backtracks += 1;
        }

        Ok(None)
    }

    fn check_consistency(
        &self,
        assignment: &Assignment<V>,
        constraints: &[Box<dyn Constraint<V>>],
        stats: &mut SearchStats,
    ) -> bool {
        for (constraint_id, constraint) in constraints.iter().enumerate() {
            let started = Instant::now();
            let scoped = assignment.scoped_variables(constraint.scope());
            let consistent = constraint.is_consistent(&scoped);

            let entry = stats.constraint_stats.entry(constraint_id).or_default();
            entry.checks += 1;
            entry.time_spent_micros += started.elapsed().as_micros() as u64;

            if !consistent {
                entry.violations += 1;
                return false;
            }
        }
        true
    }

    fn notify_listeners(&self, assignment: &Assignment<V>) {
        for listener in &self.listeners {
            listener(assignment);
        }
    }
}

impl<V: DomainValue> Default for DfsSolver<V> {
    fn default() -> Self {
        Self::new(Box::new(SelectFirst), Box::new(NaturalOrder))
    }
}
