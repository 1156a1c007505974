//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (init, path, show)
//! - [`run`] - Sensitivity sweep over the configured inputs

pub mod config;
pub mod run;
