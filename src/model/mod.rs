pub mod config;
pub mod interval;
pub mod score;
pub mod significance;
