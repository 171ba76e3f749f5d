//! State behind the add-question form.
//!
//! A fresh form holds the number `1` for both selectors. Once a field changes
//! it holds the text the user entered. Nothing here checks that `difficulty`
//! is in range or that `category` names a loaded category; the service decides.

use crate::error::{Result, TriviaError};
use crate::model::{CategoryMap, Difficulty, FieldValue, NewQuestion};
use std::{borrow::Cow, fmt, str::FromStr};

pub const DEFAULT_DIFFICULTY: u64 = 1;
pub const DEFAULT_CATEGORY: u64 = 1;
pub const NO_CATEGORIES_LABEL: &str = "No categories available";

/// The four named inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Question,
    Answer,
    Difficulty,
    Category,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Question,
        Field::Answer,
        Field::Difficulty,
        Field::Category,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Question => "question",
            Field::Answer => "answer",
            Field::Difficulty => "difficulty",
            Field::Category => "category",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Question => "Question",
            Field::Answer => "Answer",
            Field::Difficulty => "Difficulty",
            Field::Category => "Category",
        }
    }

    /// Free text, as opposed to a selector.
    pub fn is_text(&self) -> bool {
        matches!(self, Field::Question | Field::Answer)
    }

    pub fn next(&self) -> Self {
        match self {
            Field::Question => Field::Answer,
            Field::Answer => Field::Difficulty,
            Field::Difficulty => Field::Category,
            Field::Category => Field::Question,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Field::Question => Field::Category,
            Field::Answer => Field::Question,
            Field::Difficulty => Field::Answer,
            Field::Category => Field::Difficulty,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Field {
    type Err = TriviaError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "question" => Ok(Field::Question),
            "answer" => Ok(Field::Answer),
            "difficulty" => Ok(Field::Difficulty),
            "category" => Ok(Field::Category),
            _ => Err(TriviaError::Parse(format!("Unknown form field: {}", s))),
        }
    }
}

/// One entry of a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub question: String,
    pub answer: String,
    pub difficulty: FieldValue,
    pub category: FieldValue,
    pub categories: CategoryMap,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            question: String::new(),
            answer: String::new(),
            difficulty: FieldValue::Number(DEFAULT_DIFFICULTY),
            category: FieldValue::Number(DEFAULT_CATEGORY),
            categories: CategoryMap::new(),
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The field as its input shows it.
    pub fn value(&self, field: Field) -> Cow<'_, str> {
        match field {
            Field::Question => Cow::Borrowed(&self.question),
            Field::Answer => Cow::Borrowed(&self.answer),
            Field::Difficulty => self.difficulty.as_text(),
            Field::Category => self.category.as_text(),
        }
    }

    /// Overwrite one field with the input's current value.
    pub fn handle_change(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Question => self.question = value,
            Field::Answer => self.answer = value,
            Field::Difficulty => self.difficulty = FieldValue::Text(value),
            Field::Category => self.category = FieldValue::Text(value),
        }
    }

    /// Same as [`FormState::handle_change`], addressed by input name.
    pub fn handle_named_change(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let field = name.parse::<Field>()?;
        self.handle_change(field, value);
        Ok(())
    }

    /// Replace the category mapping wholesale.
    pub fn set_categories(&mut self, categories: CategoryMap) {
        self.categories = categories;
    }

    /// The submit body: the four fields, exactly as they stand.
    pub fn to_new_question(&self) -> NewQuestion {
        NewQuestion {
            question: self.question.clone(),
            answer: self.answer.clone(),
            difficulty: self.difficulty.clone(),
            category: self.category.clone(),
        }
    }

    /// Clear the inputs back to their initial values. Loaded categories stay.
    pub fn reset_inputs(&mut self) {
        let categories = std::mem::take(&mut self.categories);
        *self = Self {
            categories,
            ..Self::default()
        };
    }

    /// Whether the current category names a loaded category.
    pub fn category_is_known(&self) -> bool {
        self.categories.contains(&self.category.as_text())
    }

    pub fn difficulty_options() -> Vec<SelectOption> {
        Difficulty::all()
            .into_iter()
            .map(|d| SelectOption {
                value: d.to_string(),
                label: d.to_string(),
                disabled: false,
            })
            .collect()
    }

    /// One option per category keyed by id, or a single disabled placeholder.
    pub fn category_options(&self) -> Vec<SelectOption> {
        if self.categories.is_empty() {
            return vec![SelectOption {
                value: String::new(),
                label: NO_CATEGORIES_LABEL.to_string(),
                disabled: true,
            }];
        }
        self.categories
            .entries()
            .into_iter()
            .map(|(id, name)| SelectOption {
                value: id.to_string(),
                label: name.to_string(),
                disabled: false,
            })
            .collect()
    }

    /// Move a selector by one step, as a change event with the new option's value.
    pub fn cycle(&mut self, field: Field, forward: bool) {
        let options = match field {
            Field::Difficulty => Self::difficulty_options(),
            Field::Category => self.category_options(),
            Field::Question | Field::Answer => return,
        };
        let enabled: Vec<&SelectOption> = options.iter().filter(|o| !o.disabled).collect();
        if enabled.is_empty() {
            return;
        }

        let current = self.value(field);
        let next = match enabled.iter().position(|o| o.value == current) {
            Some(idx) if forward => (idx + 1) % enabled.len(),
            Some(idx) => (idx + enabled.len() - 1) % enabled.len(),
            None => 0,
        };
        let value = enabled[next].value.clone();
        self.handle_change(field, value);
    }
}
