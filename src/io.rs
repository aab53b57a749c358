//! Reading the input files and writing the result.
//!
//! `plain` parses the three line based input files (topics, student preferences, rank weights), `simple` writes the
//! calculated assignment as JSON.

pub mod plain;
pub mod simple;
