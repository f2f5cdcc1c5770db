use crate::Coords;

use rand::Rng;
use tracing::debug;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Food,
    /// A body segment carrying its ordinal label, 1 being the head.
    Segment(usize),
    DeadHead,
}

impl Cell {
    pub fn is_segment(&self) -> bool {
        matches!(self, Cell::Segment(_))
    }
}

/// Fixed-size grid of cells, stored row by row.
#[derive(Clone, Debug)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// An all-empty board. Both dimensions must be at least 1.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows >= 1 && cols >= 1, "board must be at least 1x1");
        let size = rows.checked_mul(cols).expect("board size overflows usize");
        Board { rows, cols, cells: vec![Cell::Empty; size] }
    }

    /// Builds a board with `food_count` foods and a single snake segment at
    /// distinct random positions, returning the board and the snake's start.
    ///
    /// Requires `food_count <= rows * cols - 1`; validating that is up to the
    /// caller (see `GameConfig::validate`).
    pub fn initialize<R: Rng + ?Sized>(rows: usize, cols: usize, food_count: usize, rng: &mut R) -> (Board, Coords) {
        let mut board = Board::new(rows, cols);
        assert!(food_count < board.cells.len(), "{} foods do not fit on a {}x{} board", food_count, rows, cols);

        let mut placed = 0;
        while placed < food_count {
            let pos = board.random_position(rng);
            if board.cell_at(pos) == Cell::Empty {
                board.set_cell(pos, Cell::Food);
                placed += 1;
            }
        }

        let start = loop {
            let pos = board.random_position(rng);
            if board.cell_at(pos) == Cell::Empty {
                break pos;
            }
        };
        board.set_cell(start, Cell::Segment(1));

        debug!(rows, cols, food_count, ?start, "board initialized");
        (board, start)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_at(&self, pos: Coords) -> Cell {
        self.cells[self.index(pos)]
    }

    pub fn set_cell(&mut self, pos: Coords, cell: Cell) {
        let i = self.index(pos);
        self.cells[i] = cell;
    }

    /// True when `pos` sits exactly one step past an edge. Only meaningful
    /// for single-step displacements from a position on the board.
    pub fn is_out_of_bounds(&self, pos: Coords) -> bool {
        let (x, y) = pos;
        x == -1 || y == -1 || x == self.cols as i32 || y == self.rows as i32
    }

    /// Iterates over the board one row at a time.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols)
    }

    /// Every position on the board, in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Coords> {
        let cols = self.cols as i32;
        (0..self.rows as i32).flat_map(move |y| (0..cols).map(move |x| (x, y)))
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    pub fn segment_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_segment()).count()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn index(&self, pos: Coords) -> usize {
        let (x, y) = pos;
        debug_assert!(x >= 0 && y >= 0 && (x as usize) < self.cols && (y as usize) < self.rows);
        self.cols * y as usize + x as usize
    }

    fn random_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Coords {
        (rng.gen_range(0..self.cols) as i32, rng.gen_range(0..self.rows) as i32)
    }
}
