use crate::board::{Board, Cell};
use crate::{Coords, NO_POSITION};

/// Scans the whole board for the segment labelled `label`.
///
/// Returns `NO_POSITION` when no such segment exists. This is a full
/// O(rows * cols) scan; the engine tracks the body in order and only uses
/// this to rebuild a snake from a labelled board.
pub fn locate(board: &Board, label: usize) -> Coords {
    board
        .positions()
        .find(|pos| board.cell_at(*pos) == Cell::Segment(label))
        .unwrap_or(NO_POSITION)
}
