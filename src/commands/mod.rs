//! Command implementations, one module per CLI command

pub mod common;
pub mod config;
pub mod create;
pub mod fun;
pub mod interactive;
pub mod list;
pub mod prune;
pub mod remove;
pub mod sessions;
