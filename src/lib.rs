//! # Trivia - add questions to a trivia question bank
//!
//! A terminal form and a small command-line client for a REST question-bank
//! service. The form loads the category list when it opens and posts a new
//! question on submit. The CLI covers the rest of the service's endpoints.
//!
//! ## Quick Start
//!
//! ```bash
//! # Point the client at a service
//! trivia init --api-url http://127.0.0.1:5000
//!
//! # Open the add-question form
//! trivia
//!
//! # Or add one directly
//! trivia add -q "Largest planet?" -a Jupiter -d 2 -c 1
//!
//! # Browse
//! trivia categories
//! trivia questions --page 2
//! trivia search "planet"
//! ```
//!
//! ## Modules
//!
//! - [`api`]: HTTP client and the [`api::QuestionBank`] seam used by the form
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: `.trivia.yml` loading
//! - [`error`]: Error types and result aliases
//! - [`form`]: Form field state and the change handler
//! - [`model`]: Questions, categories and difficulty
//! - [`tui`]: Terminal rendering of the form

/// Client for the question-bank REST service.
pub mod api;

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.trivia.yml` configuration files and upward discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `TriviaError` enum and `Result<T>` type alias.
pub mod error;

pub mod form;
pub mod logging;

/// Data models shared by the client, the form and the CLI.
pub mod model;

/// Terminal user interface.
///
/// The add-question form built with ratatui.
pub mod tui;
