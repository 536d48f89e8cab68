//! Output writers.
//!
//! - [`json`]: writes the combined result set as an indented JSON array

pub mod json;
