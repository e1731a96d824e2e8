pub mod calculator;
pub mod cli;
pub mod errors;
pub mod input;
pub mod session;
