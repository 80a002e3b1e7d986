//! Quiz play handler: `POST /quizzes`.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use super::dto::{LooseInteger, QuizRequest, QuizResponse, previous_question_ids};
use super::error::ApiError;
use super::handlers::AppState;
use crate::domain::CategoryId;

/// Draws a random question that has not been asked yet in this round.
///
/// # Request Body
///
/// ```json
/// {
///   "quiz_category": { "type": "Art", "id": 2 },
///   "previous_questions": [16, 17]
/// }
/// ```
///
/// A `quiz_category.id` of `0` draws from every category. When no candidates
/// remain the response carries `"question": null`.
///
/// # Errors
///
/// - `BadRequest`: The body is unparseable, a field is missing or null, the
///   category id is not an integer, or a previous question id is not an integer
/// - `Internal`: The repository failed
pub async fn play_quiz(
    State(state): State<AppState>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(request) = body.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Rejected POST /quizzes body");
        ApiError::BadRequest
    })?;

    let (Some(quiz_category), Some(previous_questions)) =
        (request.quiz_category, request.previous_questions)
    else {
        tracing::warn!("Quiz request is missing quiz_category or previous_questions");
        return Err(ApiError::BadRequest);
    };

    let category = quiz_category
        .id
        .as_ref()
        .and_then(LooseInteger::to_i32)
        .map(CategoryId::new)
        .ok_or(ApiError::BadRequest)?;

    let previous_questions = previous_question_ids(&previous_questions).ok_or_else(|| {
        tracing::warn!("Quiz request carries a non-integer previous question id");
        ApiError::BadRequest
    })?;

    let filter = (!category.is_all()).then_some(category);
    let candidates = state
        .question_repository
        .quiz_candidates(filter, &previous_questions)
        .await?;

    let question = state
        .rng_provider
        .for_quiz(category, &previous_questions)
        .choose(&candidates)
        .cloned();

    tracing::debug!(
        category = %category,
        previous = previous_questions.len(),
        candidates = candidates.len(),
        question_id = question.as_ref().map(|question| question.id.value()),
        "Quiz question drawn"
    );

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
