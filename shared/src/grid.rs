use std::io;

use rand::Rng;
use thiserror::Error;

use crate::grid::CellState::{Alive, Dead};

/// Share of cells seeded alive when a board is randomized.
pub const LIVE_PROBABILITY: f64 = 0.3;

/// Column/row offsets of the eight surrounding positions.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, -1),  // north
    (1, -1),  // north east
    (1, 0),   // east
    (1, 1),   // south east
    (0, 1),   // south
    (-1, 1),  // south west
    (-1, 0),  // west
    (-1, -1), // north west
];

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CellState {
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == Alive
    }

    /// State this cell takes in the next generation.
    pub fn next(self, alive_neighbors: usize) -> CellState {
        match (self, alive_neighbors) {
            (Alive, 2..=3) => Alive, // Survives
            (Dead, 3) => Alive,      // Becomes alive
            _ => Dead,               // Dies or remains dead
        }
    }
}

/// A cell as seen at one point in time: its fixed position and current state.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub state: CellState,
}

#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyDimensions { width: usize, height: usize },
    #[error("live probability {0} must be between 0.0 and 1.0")]
    InvalidProbability(f64),
    #[error("cell ({x}, {y}) lies outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Something a grid can be drawn onto, one cell at a time.
pub trait Canvas {
    fn draw_cell(&mut self, cell: Cell) -> io::Result<()>;

    /// Called once after every cell of a frame has been drawn.
    fn finish_frame(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Fixed-size, non-wrapping board. `cells[y][x]` holds the state of column `x` in row `y`.
#[derive(Debug, PartialEq, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<CellState>>,
}

impl Grid {
    /// All-dead grid.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions { width, height });
        }
        Ok(Grid {
            width,
            height,
            cells: vec![vec![Dead; width]; height],
        })
    }

    /// Grid where every cell is independently alive with probability `live_probability`.
    pub fn random<R>(
        width: usize,
        height: usize,
        live_probability: f64,
        rng: &mut R,
    ) -> Result<Self, GridError>
    where
        R: Rng + ?Sized,
    {
        if !(0.0..=1.0).contains(&live_probability) {
            return Err(GridError::InvalidProbability(live_probability));
        }
        let mut grid = Grid::new(width, height)?;
        for row in grid.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = if rng.random_bool(live_probability) {
                    Alive
                } else {
                    Dead
                };
            }
        }
        Ok(grid)
    }

    /// Grid where exactly the listed `(x, y)` positions are alive.
    pub fn from_live_cells<I>(width: usize, height: usize, live: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Grid::new(width, height)?;
        for (x, y) in live {
            if x >= width || y >= height {
                return Err(GridError::OutOfBounds {
                    x,
                    y,
                    width,
                    height,
                });
            }
            grid.cells[y][x] = Alive;
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The cell at `(x, y)`, or `None` when the position is off the board.
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        let state = *self.cells.get(y)?.get(x)?;
        Some(Cell { x, y, state })
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &state)| Cell { x, y, state })
        })
    }

    /// The neighbors of `cell` that exist on the board. Corners have 3, edges 5, the rest 8.
    pub fn neighbors_of(&self, cell: Cell) -> Vec<Cell> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| {
                let x = cell.x.checked_add_signed(dx)?;
                let y = cell.y.checked_add_signed(dy)?;
                self.cell(x, y)
            })
            .collect()
    }

    /// Count the number of alive neighbors for a position
    pub fn alive_neighbors(&self, x: usize, y: usize) -> usize {
        self.neighbors_of(Cell { x, y, state: Dead })
            .iter()
            .filter(|neighbor| neighbor.state.is_alive())
            .count()
    }

    pub fn population(&self) -> usize {
        self.cells().filter(|cell| cell.state.is_alive()).count()
    }

    /// Advance the grid by one generation. Every next state is computed from the
    /// current grid before any cell changes. Returns whether anything changed.
    pub fn step(&mut self) -> bool {
        let next_cells: Vec<Vec<CellState>> = self
            .cells
            .iter()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, state)| state.next(self.alive_neighbors(x, y)))
                    .collect()
            })
            .collect();

        if self.cells == next_cells {
            return false;
        }
        self.cells = next_cells;
        true
    }

    /// Draw every cell in row-major order, then finish the frame.
    pub fn render<C>(&self, canvas: &mut C) -> io::Result<()>
    where
        C: Canvas + ?Sized,
    {
        for cell in self.cells() {
            canvas.draw_cell(cell)?;
        }
        canvas.finish_frame()
    }
}
