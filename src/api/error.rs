//! API error handling.
//!
//! Every failure surfaces as a fixed JSON body:
//!
//! ```json
//! { "success": false, "error": 404, "message": "resource not found" }
//! ```

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::infrastructure::RepositoryError;

// =============================================================================
// API Error
// =============================================================================

/// Client-visible failure of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("bad request")]
    BadRequest,

    #[error("resource not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("unprocessable")]
    Unprocessable,

    /// Storage failure outside the paths that translate errors to 422.
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    #[must_use]
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Translates a storage failure on a path whose contract is 422.
    #[must_use]
    pub fn unprocessable(error: RepositoryError) -> Self {
        tracing::warn!(%error, "Operation failed, responding 422");
        Self::Unprocessable
    }
}

/// Storage failures not caught by a handler become 500s. Details are logged,
/// never sent to the client.
impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        tracing::error!(%error, "Unhandled repository error");
        Self::Internal
    }
}

// =============================================================================
// Error Body
// =============================================================================

/// JSON body sent for every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl From<ApiError> for ErrorBody {
    fn from(error: ApiError) -> Self {
        Self {
            success: false,
            error: error.status_code().as_u16(),
            message: error.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorBody::from(self))).into_response()
    }
}

// =============================================================================
// Router-level Translation
// =============================================================================

/// Fallback for paths no route matches.
pub async fn not_found_fallback() -> ApiError {
    ApiError::NotFound
}

/// Replaces the router's bodiless 405 with the JSON error body.
///
/// The `Allow` header produced by the method router is carried over.
pub async fn json_method_not_allowed(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow: Option<HeaderValue> = response.headers().get(header::ALLOW).cloned();
    let mut translated = ApiError::MethodNotAllowed.into_response();
    if let Some(allow) = allow {
        translated.headers_mut().insert(header::ALLOW, allow);
    }
    translated
}

// =============================================================================
// Tests
// =============================================================================
