//! Question data model

use serde::{Deserialize, Serialize};

/// Label assigned to freshly created questions
pub const DEFAULT_LABEL: &str = "Untitled Question";

/// Widget type of a form question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    #[default]
    Text,
    Checkbox,
    Radio,
}

impl QuestionType {
    /// All types, in the order a type picker presents them
    pub const ALL: [QuestionType; 3] = [Self::Text, Self::Checkbox, Self::Radio];

    pub fn next(&self) -> Self {
        match self {
            Self::Text => Self::Checkbox,
            Self::Checkbox => Self::Radio,
            Self::Radio => Self::Text,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Checkbox => "Checkbox",
            Self::Radio => "Radio",
        }
    }
}

/// A single form field definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique within the collection for its lifetime, never reassigned
    pub id: u64,
    pub label: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
}

impl Question {
    /// Create a question with the placeholder label
    pub fn new(id: u64, question_type: QuestionType) -> Self {
        Self {
            id,
            label: DEFAULT_LABEL.to_string(),
            question_type,
        }
    }
}
