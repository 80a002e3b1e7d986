//! Shared application state and the health check endpoint.

use std::sync::Arc;

use axum::Json;
use serde::Serialize;

use crate::infrastructure::{CategoryRepository, QuestionRepository, Repositories, RngProvider};

// =============================================================================
// Application State
// =============================================================================

/// Shared application dependencies.
///
/// Uses trait objects so that the backend chosen by `RepositoryFactory` at
/// startup (in-memory or `PostgreSQL`) can be swapped without touching the
/// handlers. Cloning is cheap: every field is an `Arc` or `Copy`.
#[derive(Clone)]
pub struct AppState {
    /// Question repository for persistence.
    pub question_repository: Arc<dyn QuestionRepository>,
    /// Category repository (read-only).
    pub category_repository: Arc<dyn CategoryRepository>,
    /// Random source for quiz play.
    pub rng_provider: RngProvider,
}

impl AppState {
    /// Creates a new `AppState` from initialized repositories.
    #[must_use]
    pub fn from_repositories(repositories: Repositories, rng_provider: RngProvider) -> Self {
        Self {
            question_repository: repositories.question_repository,
            category_repository: repositories.category_repository,
            rng_provider,
        }
    }

    #[must_use]
    pub fn new(
        question_repository: Arc<dyn QuestionRepository>,
        category_repository: Arc<dyn CategoryRepository>,
        rng_provider: RngProvider,
    ) -> Self {
        Self {
            question_repository,
            category_repository,
            rng_provider,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("AppState")
            .field("rng_provider", &self.rng_provider)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// GET /health Handler
// =============================================================================

/// Response for the health check endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
}

/// Health check endpoint.
///
/// # Response
///
/// - **200 OK**: Service is running
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}
