//! Question handlers.
//!
//! - `GET /questions`: paginated listing
//! - `DELETE /questions/{question_id}`
//! - `POST /questions`: create, or search when the body carries `searchTerm`

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};

use super::dto::{
    CreatedResponse, DeleteQuestionResponse, PageQuery, QuestionsPostRequest,
    QuestionsPostResponse, QuestionsResponse, SearchResponse, requested_page,
};
use super::error::ApiError;
use super::handlers::AppState;
use crate::domain::{Page, QuestionId, category_map, paginate};

// =============================================================================
// GET /questions Handler
// =============================================================================

/// Lists questions ordered by id, ten per page.
///
/// # Query Parameters
///
/// - `page`: 1-based page number (default 1)
///
/// # Errors
///
/// - `NotFound`: The page holds no questions, or there are no categories
/// - `Internal`: The repository failed
pub async fn list_questions(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let page = requested_page(query);

    let selection = state.question_repository.list().await?;
    let categories = state.category_repository.list().await?;
    let questions = paginate(&selection, page);

    if questions.is_empty() || categories.is_empty() {
        tracing::warn!(
            page = page.number(),
            total_questions = selection.len(),
            total_categories = categories.len(),
            "Requested page is empty"
        );
        return Err(ApiError::NotFound);
    }

    Ok(Json(QuestionsResponse {
        success: true,
        questions,
        total_questions: selection.len(),
        current_category: None,
        categories: category_map(&categories),
    }))
}

// =============================================================================
// DELETE /questions/{question_id} Handler
// =============================================================================

/// Deletes a question by id.
///
/// # Errors
///
/// - `NotFound`: No question has this id, or the path segment is not an integer
/// - `Unprocessable`: The delete itself failed
/// - `Internal`: The lookup failed
pub async fn delete_question(
    State(state): State<AppState>,
    question_id: Result<Path<i32>, PathRejection>,
) -> Result<Json<DeleteQuestionResponse>, ApiError> {
    let Ok(Path(question_id)) = question_id else {
        return Err(ApiError::NotFound);
    };
    let question_id = QuestionId::new(question_id);

    if state
        .question_repository
        .find_by_id(question_id)
        .await?
        .is_none()
    {
        tracing::warn!(question_id = %question_id, "Question to delete not found");
        return Err(ApiError::NotFound);
    }

    let deleted = state
        .question_repository
        .delete(question_id)
        .await
        .map_err(ApiError::unprocessable)?;

    // Removed by a concurrent request between lookup and delete.
    if !deleted {
        return Err(ApiError::NotFound);
    }

    tracing::info!(question_id = %question_id, "Question deleted");

    Ok(Json(DeleteQuestionResponse {
        success: true,
        deleted: question_id,
    }))
}

// =============================================================================
// POST /questions Handler
// =============================================================================

/// Creates a question, or searches question text when `searchTerm` is set.
///
/// # Request Body
///
/// ```json
/// { "question": "...", "answer": "...", "category": 1, "difficulty": 2 }
/// ```
///
/// or
///
/// ```json
/// { "searchTerm": "title" }
/// ```
///
/// # Errors
///
/// - `Unprocessable`: The body is not valid JSON of this shape, a required
///   column is missing, or the repository failed
pub async fn create_or_search_questions(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
    body: Result<Json<QuestionsPostRequest>, JsonRejection>,
) -> Result<Json<QuestionsPostResponse>, ApiError> {
    let Json(mut request) = body.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Rejected POST /questions body");
        ApiError::Unprocessable
    })?;

    let response = match request.search_term.take() {
        Some(search_term) => {
            search_questions(&state, &search_term.into_text(), requested_page(query)).await?
        }
        None => create_question(&state, request).await?,
    };

    Ok(Json(response))
}

async fn search_questions(
    state: &AppState,
    search_term: &str,
    page: Page,
) -> Result<QuestionsPostResponse, ApiError> {
    let selection = state
        .question_repository
        .search(search_term)
        .await
        .map_err(ApiError::unprocessable)?;

    tracing::debug!(
        search_term,
        total_questions = selection.len(),
        "Question search completed"
    );

    Ok(QuestionsPostResponse::Search(SearchResponse {
        success: true,
        questions: paginate(&selection, page),
        total_questions: selection.len(),
    }))
}

async fn create_question(
    state: &AppState,
    request: QuestionsPostRequest,
) -> Result<QuestionsPostResponse, ApiError> {
    let new_question = request.into_new_question().map_err(|invalid| {
        tracing::warn!(field = invalid.0, "Question field is not an integer");
        ApiError::Unprocessable
    })?;

    let created = state
        .question_repository
        .insert(new_question)
        .await
        .map_err(ApiError::unprocessable)?;

    tracing::info!(question_id = %created, "Question created");

    Ok(QuestionsPostResponse::Created(CreatedResponse {
        success: true,
        created,
    }))
}
