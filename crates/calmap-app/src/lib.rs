//! Command-line front end for the calmap converters.

pub mod cli;
pub mod commands;
