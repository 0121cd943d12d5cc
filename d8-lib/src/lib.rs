pub mod dice;
pub mod dnd;
pub mod error;
mod evaluator;
pub mod kob;
mod parser;
pub mod roll;
pub mod solver;
