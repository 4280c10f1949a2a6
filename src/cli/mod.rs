//! Command-line surface

pub mod args;
