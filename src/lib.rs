//! Optimized bubble sort over `i32` slices, plus the text rendering used by the demo binary.

pub mod bubble;
pub mod demo;
pub mod display;

pub use bubble::{sort, sort_with_stats, SortStats};
pub use display::{render, write_sequence};
