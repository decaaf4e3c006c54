//! Word Quest tools library.
//!
//! Audio path injection for the word database and UI guardrail checks.

pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod guardrail;

pub use error::Error;
