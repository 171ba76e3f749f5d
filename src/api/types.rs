use crate::model::{CategoryMap, Question};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a category read.
///
/// `categories` is `None` when the body had no usable mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoriesResponse {
    pub categories: Option<CategoryMap>,
}

impl CategoriesResponse {
    /// Interpret any JSON body. Anything but an object of id -> text under
    /// `categories` counts as malformed.
    pub fn from_value(value: Value) -> Self {
        let categories = match value {
            Value::Object(mut body) => body
                .remove("categories")
                .and_then(|c| serde_json::from_value::<CategoryMap>(c).ok()),
            _ => None,
        };
        Self { categories }
    }

    /// The mapping, or an empty one for a malformed body.
    pub fn into_map(self) -> CategoryMap {
        self.categories.unwrap_or_default()
    }
}

/// A list of questions with the service's paging metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionList {
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub total_questions: u64,
    #[serde(default)]
    pub categories: CategoryMap,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Created {
    #[serde(default)]
    pub created: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Deleted {
    pub id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct QuizResponse {
    pub question: Question,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizCategory {
    pub id: u64,
}

/// Body of a quiz draw. Category id 0 means any category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<u64>,
    pub quiz_category: QuizCategory,
}

impl QuizRequest {
    pub fn new(category: Option<u64>, previous: &[u64]) -> Self {
        Self {
            previous_questions: previous.to_vec(),
            quiz_category: QuizCategory {
                id: category.unwrap_or(0),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct SearchRequest<'a> {
    #[serde(rename = "searchTerm")]
    pub search_term: &'a str,
}

/// Error envelope the service sends with non-2xx answers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiFailure {
    #[serde(default)]
    pub success: bool,
    pub error: u16,
    pub message: String,
}
