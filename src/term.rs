use std::io::{self, Write};

use crate::board::{Board, Cell};
use crate::engine::{Outcome, Report};

use crossterm::queue;
use crossterm::style::Print;

const ROW_INDENT: &str = "\t\t\t";

const HELP: &[&str] = &[
    "Press U to go up",
    "Press D to go down",
    "Press L to go left",
    "Press R to go right.",
];

/// Writes boards, prompts and messages to a terminal (or any writer).
pub struct TermManager<W: Write> {
    out: W,
    fancy: bool,
}

impl<W: Write> TermManager<W> {
    pub fn new(out: W, fancy: bool) -> Self {
        TermManager { out, fancy }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn draw_board(&mut self, board: &Board, moves: u32) -> io::Result<()> {
        for row in board.iter_rows() {
            queue!(self.out, Print(ROW_INDENT))?;
            for cell in row {
                queue!(self.out, Print(cell_glyph(*cell, self.fancy)))?;
            }
            queue!(self.out, Print("\n"))?;
        }

        queue!(self.out, Print(format!("\n{}Number of moves: {}\n\n", ROW_INDENT, moves)))?;
        self.flush()
    }

    pub fn show_message(&mut self, lines: &[&str]) -> io::Result<()> {
        for line in lines {
            queue!(self.out, Print(line), Print("\n"))?;
        }
        self.flush()
    }

    pub fn show_help(&mut self) -> io::Result<()> {
        self.show_message(HELP)
    }

    /// Prints `text` without a line break so the answer follows it.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text))?;
        self.flush()
    }

    pub fn show_report(&mut self, report: &Report) -> io::Result<()> {
        if report.outcome.is_win() {
            let line = format!("You won! You have eaten all the food in {} moves.", report.moves);
            return self.show_message(&[line.as_str(), ""]);
        }

        let reason = match report.outcome {
            Outcome::SelfBite => "Game over! You've bitten yourself.",
            _ => "Game over! You're out of bounds.",
        };

        self.show_message(&[
            reason,
            &*format!("Number of moves: {}", report.moves),
            &*format!("Snake's size: {}", report.length),
            &*format!("Number of remaining foods on board: {}", report.remaining_food),
            "",
        ])
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

fn cell_glyph(cell: Cell, fancy: bool) -> String {
    if fancy {
        let glyph = match cell {
            Cell::Empty => "⬜",
            Cell::Food => "🍎",
            Cell::Segment(1) => "🔵",
            Cell::Segment(_) => "🟢",
            Cell::DeadHead => "🔴",
        };
        return glyph.to_string();
    }

    match cell {
        Cell::Empty => " - ".to_string(),
        Cell::Food => " 0 ".to_string(),
        Cell::Segment(label) => format!(" {} ", label),
        Cell::DeadHead => " X ".to_string(),
    }
}
