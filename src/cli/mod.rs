//! CLI module

pub mod args;

pub use args::{Args, SubCommand};
