//! `lifegrid`: run Conway's Game of Life in the terminal.

use std::error::Error;
use std::io;

use clap::Parser;
use lifegrid::cli::{Cli, RunOptions};
use lifegrid::engine::patterns::library;
use lifegrid::prelude::*;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    if cli.list_patterns {
        for pattern in library().values() {
            let (rows, cols) = pattern.extent();
            println!(
                "{:<20} {:>2}x{:<3} {}",
                pattern.name, rows, cols, pattern.description
            );
        }
        return Ok(());
    }
    run(cli.into_options()?)
}

fn run(opts: RunOptions) -> Result<(), Box<dyn Error>> {
    let mut driver = Driver::from_config(&opts.config)?;
    let stdout = io::stdout();
    let mut renderer = TerminalRenderer::new(stdout.lock())
        .with_glyphs(opts.alive, opts.dead)
        .with_clear(opts.clear)
        .with_status_line(opts.status);

    let summary = driver.run(&mut renderer, &StopSignal::never())?;
    log::info!(
        "{} generations run, {} live cells remain",
        summary.generations_run,
        summary.final_live
    );
    Ok(())
}
