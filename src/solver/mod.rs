//! The problem-agnostic solving machinery: the immutable variable and
//! assignment model, the constraint abstraction, the backtracking engine, and
//! the ordering heuristics that steer it.

pub mod assignment;
pub mod constraint;
pub mod constraints;
pub mod csp;
pub mod engine;
pub mod heuristics;
pub mod stats;
pub mod value;
pub mod variable;
