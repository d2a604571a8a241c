//! Sudoku as a CSP: 81 cell variables over 1..=9 and 27 [`AllDifferent`]
//! constraints (rows, columns and 3×3 boxes).

use im::OrdSet;

use crate::{
    error::{Result, SolverError},
    solver::{
        assignment::Assignment,
        constraint::Constraint,
        constraints::all_different::AllDifferent,
        csp::Csp,
        variable::{Variable, VariableId},
    },
};

pub const BOARD_SIZE: usize = 9;
const BOX_SIZE: usize = 3;
const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A Sudoku puzzle parsed from its 81-digit board string.
#[derive(Debug, Clone)]
pub struct SudokuCsp {
    cells: Vec<u8>,
}

impl SudokuCsp {
    /// Parses a board given as 81 digits in row-major order, `0` marking a
    /// blank cell. Whitespace, including newlines between rows, is ignored.
    pub fn parse(puzzle: &str) -> Result<Self> {
        let mut cells = Vec::with_capacity(CELL_COUNT);
        for ch in puzzle.chars().filter(|ch| !ch.is_whitespace()) {
            let digit = ch.to_digit(10).ok_or_else(|| {
                SolverError::InvalidPuzzle(format!("unexpected character {ch:?}"))
            })?;
            cells.push(digit as u8);
        }
        if cells.len() != CELL_COUNT {
            return Err(SolverError::InvalidPuzzle(format!(
                "expected {CELL_COUNT} cells, found {}",
                cells.len()
            ))
            .into());
        }
        Ok(Self { cells })
    }

    /// The identity of the cell at `row`, `col` (zero-based): `C{row}{col}`.
    pub fn cell_id(row: usize, col: usize) -> VariableId {
        VariableId::new(format!("C{row}{col}"))
    }

    fn clue(&self, row: usize, col: usize) -> u8 {
        self.cells[row * BOARD_SIZE + col]
    }
}

impl Csp for SudokuCsp {
    type Value = u8;

    /// All 81 cells start with the full 1..=9 domain; the given clues are
    /// then assigned one by one, so forward checking has already pruned the
    /// dependent domains when the search begins. A contradictory set of clues
    /// fails here with a [`SolverError::DomainViolation`].
    fn initial_assignment(&self) -> Result<Assignment<u8>> {
        let digits: OrdSet<u8> = (1..=BOARD_SIZE as u8).collect();
        let mut variables = Vec::with_capacity(CELL_COUNT);
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                variables.push(Variable::unassigned(Self::cell_id(row, col), digits.clone()));
            }
        }

        let constraints = self.constraints();
        let mut assignment = Assignment::new(variables);
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let clue = self.clue(row, col);
                if clue != 0 {
                    assignment =
                        assignment.assign(&Self::cell_id(row, col), clue, &constraints)?;
                }
            }
        }
        Ok(assignment)
    }

    fn constraints(&self) -> Vec<Box<dyn Constraint<u8>>> {
        let mut constraints: Vec<Box<dyn Constraint<u8>>> = Vec::with_capacity(27);

        for row in 0..BOARD_SIZE {
            constraints.push(Box::new(AllDifferent::new(
                (0..BOARD_SIZE).map(|col| Self::cell_id(row, col)),
            )));
        }

        for col in 0..BOARD_SIZE {
            constraints.push(Box::new(AllDifferent::new(
                (0..BOARD_SIZE).map(|row| Self::cell_id(row, col)),
            )));
        }

        for box_row in 0..BOX_SIZE {
            for box_col in 0..BOX_SIZE {
                let mut scope = Vec::with_capacity(BOARD_SIZE);
                for row in box_row * BOX_SIZE..(box_row + 1) * BOX_SIZE {
                    for col in box_col * BOX_SIZE..(box_col + 1) * BOX_SIZE {
                        scope.push(Self::cell_id(row, col));
                    }
                }
                constraints.push(Box::new(AllDifferent::new(scope)));
            }
        }

        constraints
    }
}

/// Renders the board as nine lines of digits, `.` for unassigned cells.
pub fn render_board(assignment: &Assignment<u8>) -> String {
    let mut board = String::with_capacity(CELL_COUNT + BOARD_SIZE);
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            match assignment.value_of(&SudokuCsp::cell_id(row, col)) {
                Some(value) => {
                    board.push(char::from_digit(u32::from(*value), 10).unwrap_or('?'))
                }
                None => board.push('.'),
            }
        }
        board.push('\n');
    }
    board
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        error::SolverError,
        solver::{engine::DfsSolver, heuristics::variable::MinimumRemainingValues},
    };

    const EASY_PUZZLE: &str = "\
        003020600\n\
        900305001\n\
        001806400\n\
        008102900\n\
        700000008\n\
        006708200\n\
        002609500\n\
        800203009\n\
        005010300";

    fn unit_holds_every_digit(assignment: &Assignment<u8>, cells: &[(usize, usize)]) -> bool {
        let mut digits: Vec<u8> = cells
            .iter()
            .filter_map(|(row, col)| assignment.value_of(&SudokuCsp::cell_id(*row, *col)))
            .copied()
            .collect();
        digits.sort_unstable();
        digits == (1..=9).collect::<Vec<u8>>()
    }

    #[test]
    fn parses_a_flat_81_character_string() {
        let flat: String = EASY_PUZZLE.chars().filter(|ch| !ch.is_whitespace()).collect();

        assert_eq!(flat.len(), 81);
        assert!(SudokuCsp::parse(&flat).is_ok());
        assert!(SudokuCsp::parse(EASY_PUZZLE).is_ok());
    }

    #[test]
    fn rejects_a_board_of_the_wrong_size() {
        let err = SudokuCsp::parse("123").unwrap_err();

        assert!(matches!(err.inner(), SolverError::InvalidPuzzle(_)));
    }

    #[test]
    fn rejects_non_digit_characters() {
        let bad = "x".repeat(81);

        let err = SudokuCsp::parse(&bad).unwrap_err();

        assert!(matches!(err.inner(), SolverError::InvalidPuzzle(_)));
    }

    #[test]
    fn initial_assignment_places_clues_and_forward_checks() {
        let csp = SudokuCsp::parse(EASY_PUZZLE).unwrap();

        let assignment = csp.initial_assignment().unwrap();

        // Row 0 reads 003020600.
        assert_eq!(assignment.value_of(&SudokuCsp::cell_id(0, 2)), Some(&3));
        assert_eq!(assignment.value_of(&SudokuCsp::cell_id(0, 4)), Some(&2));
        assert_eq!(assignment.value_of(&SudokuCsp::cell_id(0, 6)), Some(&6));

        // The blank cell C00 shares row 0 with the 3, column 0 with the 9
        // and 7, and its box with the 9: all pruned from its domain.
        let c00 = assignment.variable(&SudokuCsp::cell_id(0, 0)).unwrap();
        assert!(!c00.is_assigned());
        for pruned in [3, 2, 6, 9, 7] {
            assert!(!c00.domain().contains(&pruned), "{pruned} should be pruned");
        }
    }

    #[test]
    fn contradictory_clues_fail_fast() {
        // Two 1s in the first row.
        let mut board = "0".repeat(81);
        board.replace_range(0..2, "11");

        let csp = SudokuCsp::parse(&board).unwrap();
        let err = csp.initial_assignment().unwrap_err();

        assert!(matches!(err.inner(), SolverError::DomainViolation { .. }));
    }

    #[test]
    fn solves_the_easy_puzzle() {
        let _ = tracing_subscriber::fmt::try_init();

        let csp = SudokuCsp::parse(EASY_PUZZLE).unwrap();
        let solver = DfsSolver::with_variable_ordering(Box::new(MinimumRemainingValues));

        let (solution, _stats) = solver.solve(&csp).unwrap();
        let solution = solution.unwrap();

        assert!(solution.is_complete());

        // Originally given cells keep their values.
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let clue = csp.clue(row, col);
                if clue != 0 {
                    assert_eq!(
                        solution.value_of(&SudokuCsp::cell_id(row, col)),
                        Some(&clue)
                    );
                }
            }
        }

        // Every row, column and box holds each of 1..=9 exactly once.
        for row in 0..BOARD_SIZE {
            let cells: Vec<_> = (0..BOARD_SIZE).map(|col| (row, col)).collect();
            assert!(unit_holds_every_digit(&solution, &cells), "row {row}");
        }
        for col in 0..BOARD_SIZE {
            let cells: Vec<_> = (0..BOARD_SIZE).map(|row| (row, col)).collect();
            assert!(unit_holds_every_digit(&solution, &cells), "column {col}");
        }
        for box_row in 0..BOX_SIZE {
            for box_col in 0..BOX_SIZE {
                let mut cells = Vec::new();
                for row in box_row * BOX_SIZE..(box_row + 1) * BOX_SIZE {
                    for col in box_col * BOX_SIZE..(box_col + 1) * BOX_SIZE {
                        cells.push((row, col));
                    }
                }
                assert!(
                    unit_holds_every_digit(&solution, &cells),
                    "box {box_row}{box_col}"
                );
            }
        }
    }

    #[test]
    fn renders_blanks_as_dots() {
        let csp = SudokuCsp::parse(EASY_PUZZLE).unwrap();

        let board = render_board(&csp.initial_assignment().unwrap());
        let first_line = board.lines().next().unwrap();

        assert_eq!(first_line, "..3.2.6..");
        assert_eq!(board.lines().count(), 9);
    }
}
