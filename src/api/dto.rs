//! Data Transfer Objects for API requests and responses.
//!
//! Field names follow the wire contract of the trivia front end, which mixes
//! `snake_case` (`previous_questions`) with `camelCase` (`searchTerm`).

use axum::extract::{Query, rejection::QueryRejection};
use serde::{Deserialize, Serialize};

use crate::domain::{CategoryId, CategoryMap, NewQuestion, Page, Question, QuestionId};

// =============================================================================
// Query Parameters
// =============================================================================

/// `?page=N` query parameter.
///
/// Kept as a raw string so that a malformed value falls back to the first
/// page instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<String>,
}

impl PageQuery {
    #[must_use]
    pub fn page(&self) -> Page {
        Page::parse_or_first(self.page.as_deref())
    }
}

/// Resolves the requested page. A query string that cannot be decoded at all
/// is treated like a missing `page`.
#[must_use]
pub fn requested_page(query: Result<Query<PageQuery>, QueryRejection>) -> Page {
    query.map_or(Page::FIRST, |Query(query)| query.page())
}

// =============================================================================
// Loose Integers
// =============================================================================

/// An integer that clients may send either as a JSON number or as a numeric
/// string (`3` or `"3"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LooseInteger {
    Number(i64),
    Text(String),
}

impl LooseInteger {
    /// Returns the value as an `i64`, or `None` if it is not an integer.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }

    /// Returns the value as an `i32`, or `None` if it is not a representable integer.
    #[must_use]
    pub fn to_i32(&self) -> Option<i32> {
        self.to_i64().and_then(|value| i32::try_from(value).ok())
    }
}

// =============================================================================
// Loose Text
// =============================================================================

/// A search term that clients may send as a string or a bare number
/// (`"13"` or `13`). Numbers are searched for by their decimal text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LooseText {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl LooseText {
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Integer(value) => value.to_string(),
            Self::Float(value) => format!("{value:?}"),
        }
    }
}

// =============================================================================
// Category DTOs
// =============================================================================

/// Response for `GET /categories`.
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
    pub total_categories: usize,
}

/// Response for `GET /categories/{category_id}/questions`.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: CategoryId,
}

// =============================================================================
// Question DTOs
// =============================================================================

/// Response for `GET /questions`.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// Always `null` for the unfiltered listing.
    pub current_category: Option<CategoryId>,
    pub categories: CategoryMap,
}

/// Response for `DELETE /questions/{question_id}`.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub deleted: QuestionId,
}

/// Body of `POST /questions`.
///
/// A non-null `searchTerm` turns the request into a search; otherwise the
/// remaining fields describe a question to create.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionsPostRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub category: Option<LooseInteger>,
    #[serde(default)]
    pub difficulty: Option<LooseInteger>,
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<LooseText>,
}

/// A `category` or `difficulty` value that is not an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidField(pub &'static str);

impl QuestionsPostRequest {
    /// Converts the create fields into an insert payload.
    ///
    /// # Errors
    ///
    /// Returns the name of the first field whose value is not an integer.
    pub fn into_new_question(self) -> Result<NewQuestion, InvalidField> {
        let category = self
            .category
            .map(|value| value.to_i32().ok_or(InvalidField("category")))
            .transpose()?;
        let difficulty = self
            .difficulty
            .map(|value| value.to_i32().ok_or(InvalidField("difficulty")))
            .transpose()?;

        Ok(NewQuestion {
            question: self.question,
            answer: self.answer,
            category: category.map(CategoryId::new),
            difficulty,
        })
    }
}

/// Response for `POST /questions` when a question was created.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: QuestionId,
}

/// Response for `POST /questions` when a search was run.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Either shape returned by `POST /questions`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum QuestionsPostResponse {
    Created(CreatedResponse),
    Search(SearchResponse),
}

// =============================================================================
// Quiz DTOs
// =============================================================================

/// `quiz_category` object sent by the quiz view (`{"type": "Art", "id": "2"}`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizCategory {
    #[serde(default)]
    pub id: Option<LooseInteger>,
}

/// Body of `POST /quizzes`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
    #[serde(default)]
    pub previous_questions: Option<Vec<LooseInteger>>,
}

/// Converts `previous_questions` into the ids to exclude.
///
/// Returns `None` if any entry is not an integer. Integers outside the id
/// range cannot name a stored question and are dropped.
#[must_use]
pub fn previous_question_ids(previous: &[LooseInteger]) -> Option<Vec<QuestionId>> {
    let values = previous
        .iter()
        .map(LooseInteger::to_i64)
        .collect::<Option<Vec<i64>>>()?;

    Some(
        values
            .into_iter()
            .filter_map(|value| i32::try_from(value).ok())
            .map(QuestionId::new)
            .collect(),
    )
}

/// Response for `POST /quizzes`. `question` is `null` once the round is exhausted.
#[derive(Debug, Clone, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(serde_json::json!(3), Some(3))]
    #[case(serde_json::json!("3"), Some(3))]
    #[case(serde_json::json!(" 12 "), Some(12))]
    #[case(serde_json::json!("abc"), None)]
    #[case(serde_json::json!(4_000_000_000_i64), None)]
    fn test_loose_integer(#[case] value: serde_json::Value, #[case] expected: Option<i32>) {
        let loose: LooseInteger = serde_json::from_value(value).unwrap();
        assert_eq!(loose.to_i32(), expected);
    }

    #[rstest]
    fn test_questions_post_request_search_term() {
        let request: QuestionsPostRequest =
            serde_json::from_value(serde_json::json!({"searchTerm": "wHaT"})).unwrap();
        assert_eq!(request.search_term.unwrap().into_text(), "wHaT");
        assert!(request.question.is_none());
    }

    #[rstest]
    #[case(serde_json::json!("13"), "13")]
    #[case(serde_json::json!(13), "13")]
    #[case(serde_json::json!(-7), "-7")]
    #[case(serde_json::json!(13.0), "13.0")]
    #[case(serde_json::json!(2.5), "2.5")]
    fn test_search_term_accepts_numbers(
        #[case] value: serde_json::Value,
        #[case] expected: &str,
    ) {
        let term: LooseText = serde_json::from_value(value).unwrap();
        assert_eq!(term.into_text(), expected);
    }

    #[rstest]
    fn test_questions_post_request_null_search_term_is_create() {
        let request: QuestionsPostRequest = serde_json::from_value(serde_json::json!({
            "searchTerm": null,
            "question": "Q",
            "answer": "A",
            "category": "3",
            "difficulty": 1
        }))
        .unwrap();
        assert!(request.search_term.is_none());

        let new_question = request.into_new_question().unwrap();
        assert_eq!(new_question.category, Some(CategoryId::new(3)));
        assert_eq!(new_question.difficulty, Some(1));
    }

    #[rstest]
    fn test_into_new_question_rejects_non_numeric_category() {
        let request: QuestionsPostRequest =
            serde_json::from_value(serde_json::json!({"category": "science"})).unwrap();
        assert_eq!(
            request.into_new_question().unwrap_err(),
            InvalidField("category")
        );
    }

    #[rstest]
    fn test_quiz_request_accepts_string_category_id() {
        let request: QuizRequest = serde_json::from_value(serde_json::json!({
            "previous_questions": [16, 17, 18],
            "quiz_category": {"type": "Art", "id": "2"}
        }))
        .unwrap();

        let category = request.quiz_category.unwrap();
        assert_eq!(category.id.unwrap().to_i32(), Some(2));
        assert_eq!(request.previous_questions.unwrap().len(), 3);
    }

    #[rstest]
    #[case(serde_json::json!([16, "17", " 18 "]), Some(vec![16, 17, 18]))]
    #[case(serde_json::json!([16, 3_000_000_000_i64]), Some(vec![16]))]
    #[case(serde_json::json!([]), Some(vec![]))]
    #[case(serde_json::json!([16, "abc"]), None)]
    fn test_previous_question_ids(
        #[case] value: serde_json::Value,
        #[case] expected: Option<Vec<i32>>,
    ) {
        let previous: Vec<LooseInteger> = serde_json::from_value(value).unwrap();
        let expected: Option<Vec<QuestionId>> =
            expected.map(|ids| ids.into_iter().map(QuestionId::new).collect());
        assert_eq!(previous_question_ids(&previous), expected);
    }

    #[rstest]
    fn test_quiz_request_missing_fields() {
        let request: QuizRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(request.quiz_category.is_none());
        assert!(request.previous_questions.is_none());
    }

    #[rstest]
    fn test_questions_response_serializes_null_current_category() {
        let response = QuestionsResponse {
            success: true,
            questions: Vec::new(),
            total_questions: 0,
            current_category: None,
            categories: CategoryMap::new(),
        };
        let json = serde_json::to_value(response).unwrap();
        assert!(json["current_category"].is_null());
    }

    #[rstest]
    fn test_questions_post_response_is_untagged() {
        let response = QuestionsPostResponse::Created(CreatedResponse {
            success: true,
            created: QuestionId::new(24),
        });
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "created": 24}));
    }
}
