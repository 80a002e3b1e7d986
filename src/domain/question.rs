//! Question entity and identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::CategoryId;

// =============================================================================
// QuestionId
// =============================================================================

/// Primary key of a question row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(i32);

impl QuestionId {
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for QuestionId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

// =============================================================================
// Question
// =============================================================================

/// A stored trivia question.
///
/// The serialized form is the wire shape returned by every endpoint that
/// lists questions: `{id, question, answer, category, difficulty}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

impl Question {
    /// Returns true if the question text contains `term`, ignoring case.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        self.question.to_lowercase().contains(&term.to_lowercase())
    }
}

// =============================================================================
// NewQuestion
// =============================================================================

/// Insert payload for a question.
///
/// Every field is optional: presence is enforced by the storage layer,
/// not by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<CategoryId>,
    pub difficulty: Option<i32>,
}

impl NewQuestion {
    /// Returns the first column that is missing, if any.
    #[must_use]
    pub fn first_missing_column(&self) -> Option<&'static str> {
        if self.question.is_none() {
            Some("question")
        } else if self.answer.is_none() {
            Some("answer")
        } else if self.category.is_none() {
            Some("category")
        } else if self.difficulty.is_none() {
            Some("difficulty")
        } else {
            None
        }
    }

    /// Builds the stored question once an id has been assigned.
    ///
    /// Returns `None` when any column is missing.
    #[must_use]
    pub fn into_question(self, id: QuestionId) -> Option<Question> {
        Some(Question {
            id,
            question: self.question?,
            answer: self.answer?,
            category: self.category?,
            difficulty: self.difficulty?,
        })
    }
}
