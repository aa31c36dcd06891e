#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

pub mod error;
pub mod output;

pub use error::ParseError;

use anyhow::{bail, Context, Result};
use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    time::Instant,
};

/// Conventional location of a day's puzzle input.
fn input_path(day: usize) -> String {
    format!("input/day/{day:02}.txt")
}

/// Buffered source of puzzle input. Files, stdin locks and in-memory
/// byte slices all qualify, which keeps solvers testable without fixtures
/// on disk.
pub trait Reader: BufRead {}

impl<T> Reader for T where T: BufRead {}

pub fn file_reader<P: AsRef<Path>>(path: P) -> Result<BufReader<File>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("unable to open {}", path.display()))?;

    if file.metadata()?.is_dir() {
        bail!("{} is a directory", path.display());
    }

    Ok(BufReader::new(file))
}

/// Read the entire input into one string.
pub fn parse_string<R: Reader>(mut r: R) -> Result<String> {
    let mut buf = String::new();
    r.read_to_string(&mut buf)
        .context("input is not readable UTF-8 text")?;
    Ok(buf)
}

pub trait Solver {
    type Input;
    type Output1: Display;
    type Output2: Display;

    /// Interpret the raw input. Fail-fast: a single malformed record makes
    /// the whole parse fail, and no partial input is ever returned.
    fn parse_input<R: Reader>(&self, r: R) -> Result<Self::Input>;
    fn solve_first(&self, input: &Self::Input) -> Self::Output1;
    fn solve_second(&self, input: &Self::Input) -> Self::Output2;

    fn load_input<P: AsRef<Path>>(&self, path: P) -> Result<Self::Input> {
        let mut r = file_reader(path)?;
        self.parse_input(&mut r)
    }

    /// Load the day's input (from `input` if given, the conventional
    /// location otherwise), run both parts and report answers and timings.
    fn solve(&self, day: usize, input: Option<&Path>) -> Result<()> {
        let input = match input {
            Some(path) => self.load_input(path),
            None => self.load_input(input_path(day)),
        }
        .with_context(|| format!("unable to load input for day {day:02}"))?;

        output::print_header();
        output::print_day(day);

        let timer = Instant::now();
        let first = self.solve_first(&input);
        output::print_part(1, &first, timer.elapsed());

        let timer = Instant::now();
        let second = self.solve_second(&input);
        output::print_part(2, &second, timer.elapsed());
        println!();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_paths_are_zero_padded() {
        assert_eq!(input_path(1), "input/day/01.txt");
        assert_eq!(input_path(25), "input/day/25.txt");
    }

    #[test]
    fn parse_string_reads_in_memory_sources() {
        let text = parse_string("1000\n2000\n".as_bytes()).unwrap();
        assert_eq!(text, "1000\n2000\n");
    }
}
