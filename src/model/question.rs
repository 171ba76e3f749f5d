use crate::error::{Result, TriviaError};
use serde::{Deserialize, Deserializer, Serialize};
use std::{borrow::Cow, fmt, str::FromStr};

/// A question as stored by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u64,
    pub question: String,
    pub answer: String,
    #[serde(deserialize_with = "string_or_number")]
    pub category: String,
    #[serde(deserialize_with = "string_or_number")]
    pub difficulty: String,
}

/// Body of a new question.
///
/// Values are sent as held, without coercion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: FieldValue,
    pub category: FieldValue,
}

/// A selector value on the wire.
///
/// Initial values are numbers; anything the user picked or typed is the
/// input's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(u64),
    Text(String),
}

impl FieldValue {
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Number(n) => Cow::Owned(n.to_string()),
            FieldValue::Text(s) => Cow::Borrowed(s),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Number(1)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for FieldValue {
    fn from(n: u64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

/// Compares what the input would show, so `Number(1) == "1"`.
impl PartialEq<str> for FieldValue {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == other
    }
}

impl PartialEq<&str> for FieldValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == *other
    }
}

/// The service stores ids and scores as integers but accepts text; read both.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    })
}

/// One of the five difficulty levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(TriviaError::Parse(format!(
                "Difficulty must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                level
            )))
        }
    }

    pub fn all() -> Vec<Difficulty> {
        (Self::MIN..=Self::MAX).map(Difficulty).collect()
    }

    pub fn level(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

impl FromStr for Difficulty {
    type Err = TriviaError;

    fn from_str(s: &str) -> Result<Self> {
        let level = s
            .trim()
            .parse::<u8>()
            .map_err(|_| TriviaError::Parse(format!("Invalid difficulty: {}", s)))?;
        Self::new(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_accepts_numeric_category_and_difficulty() {
        let q: Question = serde_json::from_str(
            r#"{"id": 4, "question": "Who?", "answer": "Me", "category": 3, "difficulty": 2}"#,
        )
        .unwrap();
        assert_eq!(q.category, "3");
        assert_eq!(q.difficulty, "2");
    }

    #[test]
    fn test_question_accepts_text_category() {
        let q: Question = serde_json::from_str(
            r#"{"id": 4, "question": "Who?", "answer": "Me", "category": "5", "difficulty": "1"}"#,
        )
        .unwrap();
        assert_eq!(q.category, "5");
    }

    #[test]
    fn test_difficulty_bounds() {
        assert!(Difficulty::new(0).is_err());
        assert!(Difficulty::new(6).is_err());
        assert_eq!(Difficulty::new(3).unwrap().to_string(), "3");
        assert!("x".parse::<Difficulty>().is_err());
        assert_eq!(" 5 ".parse::<Difficulty>().unwrap().level(), 5);
    }

    #[test]
    fn test_difficulty_levels() {
        let levels: Vec<u8> = Difficulty::all().iter().map(Difficulty::level).collect();
        assert_eq!(levels, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_field_value_keeps_its_json_type() {
        assert_eq!(serde_json::to_value(FieldValue::default()).unwrap(), serde_json::json!(1));
        assert_eq!(serde_json::to_value(FieldValue::from("1")).unwrap(), serde_json::json!("1"));
        assert_eq!(FieldValue::Number(1), "1");
        assert_ne!(FieldValue::Number(1), FieldValue::from("1"));
    }
}
