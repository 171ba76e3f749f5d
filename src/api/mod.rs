//! Client side of the trivia question-bank service.
//!
//! [`HttpQuestionBank`] speaks to the REST endpoints. The form only needs the
//! two calls in [`QuestionBank`], so it takes that trait and can be driven by
//! anything that implements it.

mod client;
mod types;

pub use client::HttpQuestionBank;
pub use types::{
    ApiFailure, CategoriesResponse, Created, Deleted, QuestionList, QuizCategory, QuizRequest,
};

use crate::error::Result;
use crate::model::NewQuestion;

/// The two calls the add-question form makes.
pub trait QuestionBank: Send + Sync {
    /// Read the category mapping.
    fn categories(&self) -> Result<CategoriesResponse>;

    /// Store a new question. Returns the created id when the service reports one.
    fn add_question(&self, question: &NewQuestion) -> Result<Option<u64>>;
}
