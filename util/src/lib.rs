//! Shared runtime helpers for the essay coach workspace.
//!
//! - [`config`]: environment-driven application configuration.
//! - [`paths`]: filesystem helpers for the database and log locations.

pub mod config;
pub mod paths;
