pub mod calculator;
pub mod collections;
pub mod config;
pub mod physics;
pub mod report;
pub mod text;
pub mod vehicle;

pub use calculator::Calculator;
pub use report::Report;
