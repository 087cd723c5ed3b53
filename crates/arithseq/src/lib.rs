//! ArithSeq library — application logic for the arithmetic sequence generator.

pub mod app;
pub mod config;
pub mod errors;
