//! Terminal form for adding a trivia question.
//!
//! ## Usage
//!
//! ```bash
//! trivia form
//! ```
//!
//! ## Keybindings
//!
//! - `Tab`/`↓`, `Shift-Tab`/`↑`: Move between fields
//! - `←/→`, `Space`: Change difficulty or category
//! - `1`-`5`: Pick a difficulty directly
//! - `Ctrl-U`: Clear the focused text field
//! - `Enter`: Submit the question
//! - `Enter`, `Esc`: Dismiss an alert; nothing else gets through while one is up
//! - `Esc`, `Ctrl-C`: Quit

pub mod app;
mod handlers;
pub mod theme;
pub mod ui;
mod ui_modals;
mod ui_utils;

pub use app::run_tui;
pub use handlers::handle_key;
