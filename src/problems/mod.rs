//! Ready-made problem definitions built on top of the generic solver.

pub mod map_colouring;
pub mod sudoku;
