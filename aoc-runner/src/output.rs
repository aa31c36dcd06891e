use colored::Colorize;
use std::{fmt::Display, time::Duration};

pub const NUMBER_DASHES: usize = 80;

const TITLE: &str = "Advent of Code 2022";

pub fn print_header() {
    let left = NUMBER_DASHES / 2 - (TITLE.len() + 2) / 2;
    let right = NUMBER_DASHES - left - TITLE.len() - 2;
    println!("{}", "-".repeat(NUMBER_DASHES).green().bold());
    println!(
        "{} {} {}",
        "-".repeat(left).red().bold(),
        TITLE.bold(),
        "-".repeat(right).red().bold()
    );
    println!("{}", "-".repeat(NUMBER_DASHES).green().bold());
}

pub fn print_day(day: usize) {
    println!("- {}", format!("Day {day:02}").bold());
}

/// One answer line plus its timing, Part 1 in red and Part 2 in green.
pub fn print_part<T: Display>(part: usize, answer: &T, elapsed: Duration) {
    let (label, value) = if part == 1 {
        ("Part 1".red().bold(), answer.to_string().red().bold())
    } else {
        ("Part 2".green().bold(), answer.to_string().green().bold())
    };
    println!("\n{label}: {value}");
    print_time(elapsed);
}

pub fn print_time(d: Duration) {
    println!(
        "- {}.{}{}{} {}",
        d.as_secs().to_string().bright_red(),
        format!("{:03}", d.subsec_millis()).red(),
        format!("{:03}", d.subsec_micros() % 1_000).yellow(),
        format!("{:03}", d.subsec_nanos() % 1_000).green(),
        "seconds".bold(),
    );
}
