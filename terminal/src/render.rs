use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use shared::grid::{Canvas, Cell};

pub const LIVE_GLYPH: char = '◼';
pub const DEAD_GLYPH: char = ' ';

/// Draws cells at their absolute cursor position on an ANSI terminal.
pub struct TerminalCanvas<W: Write> {
    out: W,
}

impl<W: Write> TerminalCanvas<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Clear the screen and hide the cursor before the first frame.
    pub fn begin(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), Hide)?;
        self.out.flush()
    }

    /// Park the cursor on the line below a board of `rows` rows and show it again.
    pub fn end(&mut self, rows: usize) -> io::Result<()> {
        let row = to_coordinate(rows)?;
        queue!(self.out, MoveTo(0, row), Show)?;
        self.out.flush()
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Canvas for TerminalCanvas<W> {
    fn draw_cell(&mut self, cell: Cell) -> io::Result<()> {
        let glyph = if cell.state.is_alive() {
            LIVE_GLYPH
        } else {
            DEAD_GLYPH
        };
        queue!(
            self.out,
            MoveTo(to_coordinate(cell.x)?, to_coordinate(cell.y)?),
            Print(glyph)
        )
    }

    fn finish_frame(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Zero-based cursor position. `u16::MAX` is excluded since it is written one-based.
fn to_coordinate(value: usize) -> io::Result<u16> {
    match u16::try_from(value) {
        Ok(coordinate) if coordinate < u16::MAX => Ok(coordinate),
        _ => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("position {value} does not fit on a terminal"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use shared::grid::{CellState, Grid};

    use super::*;
    use crate::config::{Field, MAX_DIMENSION};

    #[test]
    fn frame_moves_to_each_cell_then_prints_its_glyph() {
        let grid = Grid::from_live_cells(2, 2, [(1, 0), (0, 1)]).unwrap();
        let mut canvas = TerminalCanvas::new(Vec::new());
        grid.render(&mut canvas).unwrap();

        let output = String::from_utf8(canvas.into_inner()).unwrap();
        assert_eq!(
            output,
            "\x1b[1;1H \x1b[1;2H◼\x1b[2;1H◼\x1b[2;2H "
        );
    }

    #[test]
    fn end_parks_cursor_below_the_board() {
        let mut canvas = TerminalCanvas::new(Vec::new());
        canvas.end(3).unwrap();
        let output = String::from_utf8(canvas.into_inner()).unwrap();
        assert!(output.starts_with("\x1b[4;1H"), "{output:?}");
    }

    #[test]
    fn coordinates_beyond_terminal_range_fail() {
        let mut canvas = TerminalCanvas::new(Vec::new());
        let cell = Cell {
            x: 70_000,
            y: 0,
            state: CellState::Alive,
        };
        let err = canvas.draw_cell(cell).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

        let cell = Cell {
            x: 0,
            y: u16::MAX as usize,
            state: CellState::Dead,
        };
        let err = canvas.draw_cell(cell).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(canvas.end(u16::MAX as usize).is_err());
    }

    #[test]
    fn end_below_the_tallest_accepted_board() {
        let height = Field::Height.parse(&MAX_DIMENSION.to_string()).unwrap();
        let mut canvas = TerminalCanvas::new(Vec::new());
        canvas.end(height as usize).unwrap();
        let output = String::from_utf8(canvas.into_inner()).unwrap();
        assert!(output.starts_with("\x1b[65535;1H"), "{output:?}");

        let mut canvas = TerminalCanvas::new(Vec::new());
        let corner = Cell {
            x: height as usize - 1,
            y: height as usize - 1,
            state: CellState::Alive,
        };
        canvas.draw_cell(corner).unwrap();
        let output = String::from_utf8(canvas.into_inner()).unwrap();
        assert_eq!(output, "\x1b[65534;65534H◼");
    }
}
