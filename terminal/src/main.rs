use std::io;

use anyhow::Context;
use log::info;

use term_of_life::game::Game;
use term_of_life::prompt::Prompter;
use term_of_life::render::TerminalCanvas;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Prompter::new(io::stdin().lock(), io::stdout())
        .collect()
        .context("read board settings")?;
    info!(
        "running {}x{} board for {} generations",
        config.width, config.height, config.generations
    );

    let mut game = Game::new(config, &mut rand::rng()).context("seed board")?;
    let mut canvas = TerminalCanvas::new(io::stdout().lock());
    let steps = game.run_in_terminal(&mut canvas)?;
    info!("finished after {} steps, population {}", steps, game.grid().population());
    Ok(())
}
