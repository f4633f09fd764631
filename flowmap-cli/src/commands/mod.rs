//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (get, set, list, path)
//! - [`flows`] - Flow map of filtered lanes
//! - [`init`] - Configuration initialization
//! - [`network`] - Store assignment map
//! - [`summary`] - Cost and facility summary

pub mod common;
pub mod config;
pub mod flows;
pub mod init;
pub mod network;
pub mod summary;
