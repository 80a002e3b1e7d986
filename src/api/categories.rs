//! Category handlers.
//!
//! - `GET /categories`
//! - `GET /categories/{category_id}/questions`

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};

use super::dto::{CategoriesResponse, CategoryQuestionsResponse, PageQuery, requested_page};
use super::error::ApiError;
use super::handlers::AppState;
use crate::domain::{CategoryId, category_map, paginate};

// =============================================================================
// GET /categories Handler
// =============================================================================

/// Lists every category as an `id -> type` mapping.
///
/// # Errors
///
/// - `NotFound`: The category table is empty
/// - `Internal`: The repository failed
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.category_repository.list().await?;
    if categories.is_empty() {
        tracing::warn!("No categories available");
        return Err(ApiError::NotFound);
    }

    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories: category_map(&categories),
    }))
}

// =============================================================================
// GET /categories/{category_id}/questions Handler
// =============================================================================

/// Lists the questions of one category, paginated by `?page=N`.
///
/// An empty category is reported as 422, the same status as a storage
/// failure. A page past the end of a non-empty category is an empty list.
///
/// # Errors
///
/// - `NotFound`: The path segment is not an integer
/// - `Unprocessable`: The category has no questions, or the repository failed
pub async fn list_category_questions(
    State(state): State<AppState>,
    category_id: Result<Path<i32>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let Ok(Path(category_id)) = category_id else {
        return Err(ApiError::NotFound);
    };
    let category = CategoryId::new(category_id);

    let selection = state
        .question_repository
        .list_by_category(category)
        .await
        .map_err(ApiError::unprocessable)?;

    if selection.is_empty() {
        tracing::warn!(category = %category, "No questions in category");
        return Err(ApiError::Unprocessable);
    }

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: paginate(&selection, requested_page(query)),
        total_questions: selection.len(),
        current_category: category,
    }))
}
