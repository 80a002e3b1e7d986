//! `PostgreSQL` repository implementations.
//!
//! This module provides `PostgreSQL`-backed implementations of the repository
//! traits using `sqlx`. The tables are expected to exist already; the service
//! does not run migrations.
//!
//! # Table Schema
//!
//! ```sql
//! CREATE TABLE categories (
//!     id SERIAL PRIMARY KEY,
//!     type TEXT NOT NULL
//! );
//!
//! CREATE TABLE questions (
//!     id SERIAL PRIMARY KEY,
//!     question TEXT NOT NULL,
//!     answer TEXT NOT NULL,
//!     category INTEGER NOT NULL,
//!     difficulty INTEGER NOT NULL
//! );
//! ```

use futures::future::BoxFuture;
use sqlx::PgPool;
use sqlx::error::ErrorKind;

use crate::domain::{Category, CategoryId, NewQuestion, Question, QuestionId};
use crate::infrastructure::{
    CategoryRepository, QuestionRepository, RepositoryError, RepositoryResult,
};

// =============================================================================
// Row Mapping
// =============================================================================

/// Column tuple selected for every question query.
type QuestionRow = (i32, String, String, i32, i32);

const SELECT_QUESTIONS: &str = "SELECT id, question, answer, category, difficulty FROM questions";

fn question_from_row((id, question, answer, category, difficulty): QuestionRow) -> Question {
    Question {
        id: QuestionId::new(id),
        question,
        answer,
        category: CategoryId::new(category),
        difficulty,
    }
}

fn questions_from_rows(rows: Vec<QuestionRow>) -> Vec<Question> {
    rows.into_iter().map(question_from_row).collect()
}

/// Maps a `sqlx` error, keeping constraint failures distinguishable.
fn database_error(error: sqlx::Error) -> RepositoryError {
    match &error {
        sqlx::Error::Database(database) if is_constraint_violation(&database.kind()) => {
            RepositoryError::ConstraintViolation(database.message().to_string())
        }
        _ => RepositoryError::DatabaseError(error.to_string()),
    }
}

fn is_constraint_violation(kind: &ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::NotNullViolation | ErrorKind::ForeignKeyViolation | ErrorKind::CheckViolation
    )
}

/// Escapes `LIKE` wildcards so the search term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    for character in term.chars() {
        if matches!(character, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(character);
    }
    escaped
}

// =============================================================================
// PostgreSQL Question Repository
// =============================================================================

/// `PostgreSQL` implementation of `QuestionRepository`.
///
/// # Example
///
/// ```ignore
/// let pool = PgPool::connect("postgres://localhost/trivia").await?;
/// let repository = PostgresQuestionRepository::new(pool);
/// let questions = repository.list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct PostgresQuestionRepository {
    pool: PgPool,
}

impl PostgresQuestionRepository {
    /// Creates a new repository with the given connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl QuestionRepository for PostgresQuestionRepository {
    fn list(&self) -> BoxFuture<'_, RepositoryResult<Vec<Question>>> {
        Box::pin(async move {
            let rows: Vec<QuestionRow> = sqlx::query_as(&format!("{SELECT_QUESTIONS} ORDER BY id"))
                .fetch_all(&self.pool)
                .await
                .map_err(database_error)?;

            Ok(questions_from_rows(rows))
        })
    }

    fn list_by_category(
        &self,
        category: CategoryId,
    ) -> BoxFuture<'_, RepositoryResult<Vec<Question>>> {
        Box::pin(async move {
            let rows: Vec<QuestionRow> =
                sqlx::query_as(&format!("{SELECT_QUESTIONS} WHERE category = $1 ORDER BY id"))
                    .bind(category.value())
                    .fetch_all(&self.pool)
                    .await
                    .map_err(database_error)?;

            Ok(questions_from_rows(rows))
        })
    }

    fn search(&self, term: &str) -> BoxFuture<'_, RepositoryResult<Vec<Question>>> {
        let pattern = format!("%{}%", escape_like(term));
        Box::pin(async move {
            let rows: Vec<QuestionRow> = sqlx::query_as(&format!(
                "{SELECT_QUESTIONS} WHERE question ILIKE $1 ESCAPE '\\' ORDER BY id"
            ))
            .bind(pattern)
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

            Ok(questions_from_rows(rows))
        })
    }

    fn find_by_id(&self, id: QuestionId) -> BoxFuture<'_, RepositoryResult<Option<Question>>> {
        Box::pin(async move {
            let row: Option<QuestionRow> =
                sqlx::query_as(&format!("{SELECT_QUESTIONS} WHERE id = $1"))
                    .bind(id.value())
                    .fetch_optional(&self.pool)
                    .await
                    .map_err(database_error)?;

            Ok(row.map(question_from_row))
        })
    }

    fn insert(&self, question: NewQuestion) -> BoxFuture<'_, RepositoryResult<QuestionId>> {
        Box::pin(async move {
            let (id,): (i32,) = sqlx::query_as(
                "INSERT INTO questions (question, answer, category, difficulty) \
                 VALUES ($1, $2, $3, $4) \
                 RETURNING id",
            )
            .bind(question.question)
            .bind(question.answer)
            .bind(question.category.map(CategoryId::value))
            .bind(question.difficulty)
            .fetch_one(&self.pool)
            .await
            .map_err(database_error)?;

            tracing::debug!(question_id = id, "Inserted question row");
            Ok(QuestionId::new(id))
        })
    }

    fn delete(&self, id: QuestionId) -> BoxFuture<'_, RepositoryResult<bool>> {
        Box::pin(async move {
            let result = sqlx::query("DELETE FROM questions WHERE id = $1")
                .bind(id.value())
                .execute(&self.pool)
                .await
                .map_err(database_error)?;

            Ok(result.rows_affected() > 0)
        })
    }

    fn quiz_candidates(
        &self,
        category: Option<CategoryId>,
        excluded: &[QuestionId],
    ) -> BoxFuture<'_, RepositoryResult<Vec<Question>>> {
        let excluded: Vec<i32> = excluded.iter().map(|id| id.value()).collect();
        Box::pin(async move {
            // A NULL category parameter disables the category filter.
            let rows: Vec<QuestionRow> = sqlx::query_as(&format!(
                "{SELECT_QUESTIONS} \
                 WHERE NOT (id = ANY($1)) AND ($2::integer IS NULL OR category = $2) \
                 ORDER BY id"
            ))
            .bind(excluded)
            .bind(category.map(CategoryId::value))
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

            Ok(questions_from_rows(rows))
        })
    }
}

// =============================================================================
// PostgreSQL Category Repository
// =============================================================================

/// `PostgreSQL` implementation of `CategoryRepository`.
#[derive(Debug, Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    /// Creates a new repository with the given connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CategoryRepository for PostgresCategoryRepository {
    fn list(&self) -> BoxFuture<'_, RepositoryResult<Vec<Category>>> {
        Box::pin(async move {
            let rows: Vec<(i32, String)> =
                sqlx::query_as("SELECT id, type FROM categories ORDER BY id")
                    .fetch_all(&self.pool)
                    .await
                    .map_err(database_error)?;

            Ok(rows
                .into_iter()
                .map(|(id, kind)| Category::new(id, kind))
                .collect())
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("title", "title")]
    #[case("100%", "100\\%")]
    #[case("snake_case", "snake\\_case")]
    #[case("back\\slash", "back\\\\slash")]
    fn test_escape_like(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_like(input), expected);
    }

    #[rstest]
    fn test_question_from_row() {
        let question = question_from_row((7, "Q".to_string(), "A".to_string(), 3, 4));
        assert_eq!(question.id, QuestionId::new(7));
        assert_eq!(question.category, CategoryId::new(3));
        assert_eq!(question.difficulty, 4);
    }

    #[rstest]
    fn test_database_error_maps_plain_errors() {
        let error = database_error(sqlx::Error::RowNotFound);
        assert!(matches!(error, RepositoryError::DatabaseError(_)));
    }

    #[rstest]
    #[tokio::test]
    #[ignore = "Requires a running PostgreSQL with the trivia schema (DATABASE_URL)"]
    async fn test_postgres_round_trip() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let pool = PgPool::connect(&url).await.expect("connect");
        let repository = PostgresQuestionRepository::new(pool);

        let id = repository
            .insert(NewQuestion {
                question: Some("Integration question?".to_string()),
                answer: Some("Yes".to_string()),
                category: Some(CategoryId::new(1)),
                difficulty: Some(1),
            })
            .await
            .expect("insert");

        let found = repository.find_by_id(id).await.expect("find");
        assert!(found.is_some());
        assert!(repository.delete(id).await.expect("delete"));
    }
}
