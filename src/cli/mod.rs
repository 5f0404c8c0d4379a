//! Command-line interface for pomopanel.

pub mod args;
pub mod commands;
