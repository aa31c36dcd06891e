use anyhow::{bail, Result};
use aoc2022::day::{day01, day02};
use aoc_runner::Solver;
use clap::Parser;
use std::path::PathBuf;

fn main() -> Result<()> {
    let app = App::parse();
    app.run()?;
    Ok(())
}

/// Advent of code 2022
#[derive(Debug, Parser)]
struct App {
    /// Day to run
    #[arg(short, long)]
    day: usize,

    /// Optional path to an input file. If not supplied, the day's input is
    /// read from input/day/<NN>.txt.
    #[arg(short, long)]
    input: Option<PathBuf>,
}

impl App {
    fn run(&self) -> Result<()> {
        let input = self.input.as_deref();
        match self.day {
            1 => day01::Answer.solve(self.day, input)?,
            2 => day02::Answer.solve(self.day, input)?,
            _ => bail!("Not yet implemented"),
        };
        Ok(())
    }
}
