//! Pluggable ordering heuristics that steer the backtracking search.

pub mod value;
pub mod variable;
