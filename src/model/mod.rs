//! Data models for the question bank.
//!
//! - [`CategoryMap`]: category id to display name, listed in JS key order
//! - [`Question`]: a stored trivia question
//! - [`NewQuestion`]: the flat body sent when adding a question
//! - [`FieldValue`]: a selector value, numeric until the user changes it
//! - [`Difficulty`]: the five fixed difficulty levels

mod category;
mod question;

pub use category::CategoryMap;
pub use question::{Difficulty, FieldValue, NewQuestion, Question};
