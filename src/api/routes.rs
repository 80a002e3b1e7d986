//! Routing definitions for the trivia API.
//!
//! This module defines all API routes and configures the Axum router
//! with handlers, middleware, and state.

use axum::Router;
use axum::http::{Method, header};
use axum::middleware;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::categories::{list_categories, list_category_questions};
use super::error::{json_method_not_allowed, not_found_fallback};
use super::handlers::{AppState, health_check};
use super::questions::{create_or_search_questions, delete_question, list_questions};
use super::quizzes::play_quiz;

// =============================================================================
// Router Creation
// =============================================================================

/// Creates the API router with all routes and middleware.
///
/// Unknown paths answer with the JSON 404 body and a wrong verb on a known
/// path with the JSON 405 body.
///
/// # Examples
///
/// ```ignore
/// use trivia_api::api::{AppState, create_router};
///
/// let state = AppState::from_repositories(repositories, RngProvider::new_random());
/// let router = create_router(state);
///
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
/// axum::serve(listener, router).await?;
/// ```
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Categories
        .route("/categories", get(list_categories))
        .route(
            "/categories/{category_id}/questions",
            get(list_category_questions),
        )
        // Questions
        .route(
            "/questions",
            get(list_questions).post(create_or_search_questions),
        )
        .route("/questions/{question_id}", delete(delete_question))
        // Quiz
        .route("/quizzes", post(play_quiz))
        .fallback(not_found_fallback)
        .layer(middleware::map_response(json_method_not_allowed))
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
        .with_state(state)
}

/// Allows any origin with the headers and verbs the quiz front end uses.
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
}
