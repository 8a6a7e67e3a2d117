use std::io::{self, Write};

use anyhow::Context;
use log::debug;
use rand::Rng;
use shared::grid::{Canvas, Grid, GridError, LIVE_PROBABILITY};

use crate::config::Config;
use crate::render::TerminalCanvas;

/// Owns the board for the length of one run.
pub struct Game {
    config: Config,
    grid: Grid,
}

impl Game {
    /// Seed a fresh board for `config`.
    pub fn new<R>(config: Config, rng: &mut R) -> Result<Self, GridError>
    where
        R: Rng + ?Sized,
    {
        let grid = Grid::random(config.width, config.height, LIVE_PROBABILITY, rng)?;
        Ok(Self { config, grid })
    }

    pub fn with_grid(config: Config, grid: Grid) -> Self {
        Self { config, grid }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Step through generations `0..=generations`, drawing the board after each step.
    /// Returns how many steps were taken.
    pub fn run<C>(&mut self, canvas: &mut C) -> io::Result<u64>
    where
        C: Canvas + ?Sized,
    {
        let mut steps = 0;
        for generation in 0..=self.config.generations {
            let changed = self.grid.step();
            self.grid.render(canvas)?;
            steps += 1;
            debug!(
                "generation {}: population {}, changed {}",
                generation,
                self.grid.population(),
                changed
            );
        }
        Ok(steps)
    }

    /// Like [`Game::run`], but clears the terminal first and always restores the
    /// cursor afterwards, even when preparing the terminal or drawing fails.
    pub fn run_in_terminal<W: Write>(
        &mut self,
        canvas: &mut TerminalCanvas<W>,
    ) -> anyhow::Result<u64> {
        let result = canvas
            .begin()
            .context("prepare terminal")
            .and_then(|()| self.run(canvas).context("draw board"));
        canvas.end(self.config.height).context("restore terminal")?;
        result
    }
}
