//! Letter grid
//!
//! One row per guess, one cell per letter. Each cell remembers the verdict its
//! letter received when the row was submitted.

use super::Dimensions;
use crate::core::{Verdict, Word};

/// A single letter slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    letter: Option<u8>,
    verdict: Verdict,
}

impl Cell {
    /// The uppercase letter in this cell, if any
    #[must_use]
    pub fn letter(self) -> Option<char> {
        self.letter.map(char::from)
    }

    /// Verdict from submission; `Verdict::None` until the row is scored
    #[must_use]
    pub const fn verdict(self) -> Verdict {
        self.verdict
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.letter.is_none()
    }
}

/// One guess attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    fn new(letters: usize) -> Self {
        Self {
            cells: vec![Cell::default(); letters],
        }
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Every cell holds a letter
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// The row as a word, if complete
    #[must_use]
    pub fn guess(&self) -> Option<Word> {
        let text: Option<String> = self.cells.iter().map(|c| c.letter()).collect();
        text.and_then(|t| Word::new(t).ok())
    }
}

/// Fixed-size grid of rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    /// Empty grid of the given dimensions
    #[must_use]
    pub fn new(dims: Dimensions) -> Self {
        Self {
            rows: (0..dims.rows()).map(|_| Row::new(dims.letters())).collect(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// # Panics
    /// Panics if `index` is out of range
    #[must_use]
    pub fn row(&self, index: usize) -> &Row {
        &self.rows[index]
    }

    /// Cell at `(row, col)`, or `None` outside the grid
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row)?.cells.get(col).copied()
    }

    pub(crate) fn set_letter(&mut self, row: usize, col: usize, letter: Option<u8>) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.cells.get_mut(col)) {
            cell.letter = letter;
        }
    }

    pub(crate) fn set_verdicts(&mut self, row: usize, verdicts: &[Verdict]) {
        if let Some(r) = self.rows.get_mut(row) {
            for (cell, &verdict) in r.cells.iter_mut().zip(verdicts) {
                cell.verdict = verdict;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(letters: usize, rows: usize) -> Grid {
        Grid::new(Dimensions::new(letters, rows).unwrap())
    }

    #[test]
    fn new_grid_is_empty() {
        let g = grid(4, 3);
        assert_eq!(g.rows().len(), 3);
        for row in g.rows() {
            assert_eq!(row.cells().len(), 4);
            assert!(row.cells().iter().all(|c| c.is_empty()));
            assert!(row.cells().iter().all(|c| c.verdict() == Verdict::None));
        }
    }

    #[test]
    fn row_guess_requires_every_cell() {
        let mut g = grid(2, 2);
        g.set_letter(0, 0, Some(b'H'));
        assert!(!g.row(0).is_complete());
        assert_eq!(g.row(0).guess(), None);

        g.set_letter(0, 1, Some(b'I'));
        assert!(g.row(0).is_complete());
        assert_eq!(g.row(0).guess(), Some(Word::new("HI").unwrap()));
    }

    #[test]
    fn cell_outside_grid_is_none() {
        let g = grid(2, 2);
        assert!(g.cell(0, 1).is_some());
        assert!(g.cell(0, 2).is_none());
        assert!(g.cell(2, 0).is_none());
    }

    #[test]
    fn set_verdicts_touches_only_that_row() {
        let mut g = grid(3, 2);
        g.set_verdicts(1, &[Verdict::Correct, Verdict::Absent, Verdict::Present]);
        assert_eq!(g.cell(1, 0).unwrap().verdict(), Verdict::Correct);
        assert_eq!(g.cell(1, 2).unwrap().verdict(), Verdict::Present);
        assert_eq!(g.cell(0, 0).unwrap().verdict(), Verdict::None);
    }
}
