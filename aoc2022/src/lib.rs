pub mod day;
pub mod prelude;
