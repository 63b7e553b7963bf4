//! blockdag - command-line front end for blockDAG analysis
//!
//! Loads a block graph from its textual description, runs either the DAG
//! validity check or the causal set queries, and writes the results.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod loader;
pub mod output;
pub mod ui;

pub use cli::{Args, Command};
pub use config::Config;
pub use error::{BlockdagError, Result};
