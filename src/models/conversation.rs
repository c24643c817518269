use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Text,
    Select,
    Number,
}

/// One step of the guided trip-planning conversation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ConversationQuestion {
    pub id: String,
    pub question: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
}

impl ConversationQuestion {
    pub fn text(id: &str, question: &str, placeholder: &str) -> Self {
        Self {
            id: id.to_string(),
            question: question.to_string(),
            kind: QuestionKind::Text,
            placeholder: Some(placeholder.to_string()),
            options: None,
            min: None,
            max: None,
        }
    }

    pub fn select(id: &str, question: &str, options: Vec<String>) -> Self {
        Self {
            id: id.to_string(),
            question: question.to_string(),
            kind: QuestionKind::Select,
            placeholder: None,
            options: Some(options),
            min: None,
            max: None,
        }
    }

    pub fn number(id: &str, question: &str, min: i64, max: Option<i64>) -> Self {
        Self {
            id: id.to_string(),
            question: question.to_string(),
            kind: QuestionKind::Number,
            placeholder: None,
            options: None,
            min: Some(min),
            max,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TravelTypeInfo {
    pub id: String,
    pub name: String,
    pub description: String,
}
