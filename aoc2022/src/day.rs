pub mod day01;
pub mod day02;
