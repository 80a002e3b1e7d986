//! In-memory repository implementations.
//!
//! These back development runs and the test suite. Rows live in a
//! `BTreeMap` keyed by id so iteration order is id order, matching the
//! `ORDER BY id` of the `PostgreSQL` backend.
//!
//! # Features
//!
//! - Thread-safe with `Arc<RwLock<...>>`
//! - `SERIAL`-like id assignment: ids increase and are never reused
//! - NOT NULL enforcement on insert

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::RwLock;

use crate::domain::{Category, CategoryId, NewQuestion, Question, QuestionId};
use crate::infrastructure::{
    CategoryRepository, QuestionRepository, RepositoryError, RepositoryResult,
};

// =============================================================================
// In-Memory Question Repository
// =============================================================================

#[derive(Debug, Default)]
struct QuestionTable {
    rows: BTreeMap<QuestionId, Question>,
    /// Highest id ever assigned.
    last_id: i32,
}

impl QuestionTable {
    fn select<F>(&self, predicate: F) -> Vec<Question>
    where
        F: Fn(&Question) -> bool,
    {
        self.rows
            .values()
            .filter(|question| predicate(question))
            .cloned()
            .collect()
    }
}

/// In-memory implementation of `QuestionRepository`.
///
/// # Example
///
/// ```ignore
/// let repository = InMemoryQuestionRepository::new();
/// let id = repository.insert(new_question).await?;
/// let found = repository.find_by_id(id).await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuestionRepository {
    table: Arc<RwLock<QuestionTable>>,
}

impl InMemoryQuestionRepository {
    /// Creates a new empty in-memory question repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `questions`.
    ///
    /// Later inserts are assigned ids above the highest seeded id.
    #[must_use]
    pub fn with_questions(questions: impl IntoIterator<Item = Question>) -> Self {
        let rows: BTreeMap<QuestionId, Question> = questions
            .into_iter()
            .map(|question| (question.id, question))
            .collect();
        let last_id = rows.keys().next_back().map_or(0, |id| id.value());

        Self {
            table: Arc::new(RwLock::new(QuestionTable { rows, last_id })),
        }
    }
}

#[allow(clippy::significant_drop_tightening)]
impl QuestionRepository for InMemoryQuestionRepository {
    fn list(&self) -> BoxFuture<'_, RepositoryResult<Vec<Question>>> {
        Box::pin(async move {
            let guard = self.table.read().await;
            Ok(guard.select(|_| true))
        })
    }

    fn list_by_category(
        &self,
        category: CategoryId,
    ) -> BoxFuture<'_, RepositoryResult<Vec<Question>>> {
        Box::pin(async move {
            let guard = self.table.read().await;
            Ok(guard.select(|question| question.category == category))
        })
    }

    fn search(&self, term: &str) -> BoxFuture<'_, RepositoryResult<Vec<Question>>> {
        let term = term.to_owned();
        Box::pin(async move {
            let guard = self.table.read().await;
            Ok(guard.select(|question| question.matches(&term)))
        })
    }

    fn find_by_id(&self, id: QuestionId) -> BoxFuture<'_, RepositoryResult<Option<Question>>> {
        Box::pin(async move {
            let guard = self.table.read().await;
            Ok(guard.rows.get(&id).cloned())
        })
    }

    fn insert(&self, question: NewQuestion) -> BoxFuture<'_, RepositoryResult<QuestionId>> {
        Box::pin(async move {
            if let Some(column) = question.first_missing_column() {
                return Err(RepositoryError::ConstraintViolation(format!(
                    "null value in column \"{column}\""
                )));
            }

            let mut guard = self.table.write().await;
            let id = guard
                .last_id
                .checked_add(1)
                .map(QuestionId::new)
                .ok_or_else(|| RepositoryError::DatabaseError("id sequence exhausted".into()))?;

            let stored = question.into_question(id).ok_or_else(|| {
                RepositoryError::ConstraintViolation("incomplete question row".to_string())
            })?;

            guard.last_id = id.value();
            guard.rows.insert(id, stored);
            Ok(id)
        })
    }

    fn delete(&self, id: QuestionId) -> BoxFuture<'_, RepositoryResult<bool>> {
        Box::pin(async move {
            let mut guard = self.table.write().await;
            Ok(guard.rows.remove(&id).is_some())
        })
    }

    fn quiz_candidates(
        &self,
        category: Option<CategoryId>,
        excluded: &[QuestionId],
    ) -> BoxFuture<'_, RepositoryResult<Vec<Question>>> {
        let excluded: HashSet<QuestionId> = excluded.iter().copied().collect();
        Box::pin(async move {
            let guard = self.table.read().await;
            Ok(guard.select(|question| {
                !excluded.contains(&question.id)
                    && category.is_none_or(|category| question.category == category)
            }))
        })
    }
}

// =============================================================================
// In-Memory Category Repository
// =============================================================================

/// In-memory implementation of `CategoryRepository`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<BTreeMap<CategoryId, Category>>>,
}

impl InMemoryCategoryRepository {
    /// Creates a new empty in-memory category repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `categories`.
    #[must_use]
    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let categories = categories
            .into_iter()
            .map(|category| (category.id, category))
            .collect();

        Self {
            categories: Arc::new(RwLock::new(categories)),
        }
    }
}

impl CategoryRepository for InMemoryCategoryRepository {
    fn list(&self) -> BoxFuture<'_, RepositoryResult<Vec<Category>>> {
        Box::pin(async move {
            let guard = self.categories.read().await;
            Ok(guard.values().cloned().collect())
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
