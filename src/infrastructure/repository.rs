//! Repository traits for domain entities.
//!
//! Every method returns a boxed future so the traits stay object safe and
//! handlers can hold `Arc<dyn ...>` handles selected at runtime.

use futures::future::BoxFuture;
use thiserror::Error;

use crate::domain::{Category, CategoryId, NewQuestion, Question, QuestionId};

// =============================================================================
// Repository Error
// =============================================================================

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A row violated a storage constraint (missing column, bad reference).
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Database connection or query error.
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Result type returned by every repository future.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

// =============================================================================
// Question Repository
// =============================================================================

/// Repository trait for questions.
///
/// Listing methods return rows ordered by id.
pub trait QuestionRepository: Send + Sync {
    /// Lists every question.
    fn list(&self) -> BoxFuture<'_, RepositoryResult<Vec<Question>>>;

    /// Lists the questions of one category.
    fn list_by_category(
        &self,
        category: CategoryId,
    ) -> BoxFuture<'_, RepositoryResult<Vec<Question>>>;

    /// Lists questions whose text contains `term`, ignoring case.
    ///
    /// The term is matched literally; it carries no wildcard syntax.
    fn search(&self, term: &str) -> BoxFuture<'_, RepositoryResult<Vec<Question>>>;

    /// Finds a question by id.
    fn find_by_id(&self, id: QuestionId) -> BoxFuture<'_, RepositoryResult<Option<Question>>>;

    /// Inserts a question and returns its newly assigned id.
    ///
    /// Fails with `ConstraintViolation` when a column is missing.
    fn insert(&self, question: NewQuestion) -> BoxFuture<'_, RepositoryResult<QuestionId>>;

    /// Deletes a question by id.
    ///
    /// Returns `Ok(true)` if the row was deleted, `Ok(false)` if it didn't exist.
    fn delete(&self, id: QuestionId) -> BoxFuture<'_, RepositoryResult<bool>>;

    /// Lists quiz candidates: questions not in `excluded`, restricted to
    /// `category` when one is given.
    fn quiz_candidates(
        &self,
        category: Option<CategoryId>,
        excluded: &[QuestionId],
    ) -> BoxFuture<'_, RepositoryResult<Vec<Question>>>;
}

// =============================================================================
// Category Repository
// =============================================================================

/// Repository trait for categories. Categories are read-only.
pub trait CategoryRepository: Send + Sync {
    /// Lists every category.
    fn list(&self) -> BoxFuture<'_, RepositoryResult<Vec<Category>>>;
}
