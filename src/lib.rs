//! Crisp is a generic constraint satisfaction problem (CSP) solver.
//!
//! A CSP is a set of variables with finite discrete domains plus constraints
//! restricting how values may be assigned jointly. The engine searches for an
//! assignment of every variable that satisfies every constraint, using
//! depth-first backtracking with forward checking; it is problem-agnostic and
//! concrete problems plug in through a small contract.
//!
//! # Core Concepts
//!
//! - **[`Variable`]** and **[`Assignment`]**: the immutable state model. An
//!   assignment maps every variable identity to either a fixed value or its
//!   remaining domain; operations return new values backed by persistent
//!   data structures.
//! - **[`Constraint`]**: a rule over a fixed scope of variables, with a
//!   partial-assignment consistency check and a full satisfaction predicate.
//!   [`AllDifferent`] is the supplied implementation.
//! - **[`Csp`]**: the trait a concrete problem implements, supplying the
//!   initial assignment and the constraint set.
//! - **[`DfsSolver`]**: the backtracking engine, steered by pluggable
//!   variable- and value-ordering heuristics.
//!
//! # Example: A Forced Two-Variable Problem
//!
//! `a` may be `1` or `2`, `b` can only be `1`, and the two must differ — the
//! solver must deduce `a = 2`.
//!
//! ```
//! use crisp::error::Result;
//! use crisp::solver::assignment::Assignment;
//! use crisp::solver::constraint::Constraint;
//! use crisp::solver::constraints::all_different::AllDifferent;
//! use crisp::solver::csp::Csp;
//! use crisp::solver::engine::DfsSolver;
//! use crisp::solver::variable::{Variable, VariableId};
//! use im::ordset;
//!
//! struct ForcedPair;
//!
//! impl Csp for ForcedPair {
//!     type Value = i64;
//!
//!     fn initial_assignment(&self) -> Result<Assignment<i64>> {
//!         Ok(Assignment::new(vec![
//!             Variable::unassigned("a", ordset![1, 2]),
//!             Variable::unassigned("b", ordset![1]),
//!         ]))
//!     }
//!
//!     fn constraints(&self) -> Vec<Box<dyn Constraint<i64>>> {
//!         vec![Box::new(AllDifferent::new(["a", "b"]))]
//!     }
//! }
//!
//! let solver = DfsSolver::default();
//! let (solution, _stats) = solver.solve(&ForcedPair).unwrap();
//! let solution = solution.expect("satisfiable");
//!
//! assert_eq!(solution.value_of(&VariableId::new("a")), Some(&2));
//! assert_eq!(solution.value_of(&VariableId::new("b")), Some(&1));
//! ```
//!
//! [`Variable`]: solver::variable::Variable
//! [`Assignment`]: solver::assignment::Assignment
//! [`Constraint`]: solver::constraint::Constraint
//! [`AllDifferent`]: solver::constraints::all_different::AllDifferent
//! [`Csp`]: solver::csp::Csp
//! [`DfsSolver`]: solver::engine::DfsSolver

pub mod error;
pub mod problems;
pub mod solver;
