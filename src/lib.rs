//! commit-deck - a terminal dashboard for structured commit messages
//!
//! Compose commit messages from categorical fields and browse the ones
//! already stored behind a REST API.
//!
//! This library provides:
//! - [`api`]: HTTP client for the commit API
//! - [`app`]: Application state, input routing and request dispatch
//! - [`config`]: Command-line configuration
//! - [`keys`]: Key binding definitions
//! - [`logging`]: File-backed tracing setup
//! - [`model`]: Domain models
//! - [`ui`]: User interface components
//! - [`view_model`]: Commit list state and its transitions

pub mod api;
pub mod app;
pub mod config;
pub mod keys;
pub mod logging;
pub mod model;
pub mod ui;
pub mod view_model;
