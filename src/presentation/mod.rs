//! Presentation layer
//!
//! Terminal front end: argument parsing, prompts and console reporting.

pub mod cli;
