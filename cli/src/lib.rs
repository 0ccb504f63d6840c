//! # vscodethemes CLI Library
//!
//! Command line front end over the `server` library.
//!
//! ## Modules
//!
//! - [`commands`] - Subcommand definitions and handlers
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Error types for the CLI
//! - [`logger`] - Logging setup
//!
//! This library interface enables integration testing by providing access to internal modules.

pub mod commands;
pub mod config;
pub mod error;
pub mod logger;

pub use error::{AppError, AppResult};
