//! The standard library of constraint implementations.

pub mod all_different;
