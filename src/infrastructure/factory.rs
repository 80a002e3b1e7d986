//! Repository factory for runtime backend selection.
//!
//! This module reads storage configuration from the environment and builds
//! the repository handles shared by every request.
//!
//! # Environment Variables
//!
//! - `STORAGE_MODE`: `in_memory` (default) | `postgres`
//! - `DATABASE_URL`: `PostgreSQL` connection URL (required when `STORAGE_MODE=postgres`)
//! - `DATABASE_MAX_CONNECTIONS`: connection pool size (default: 5)
//!
//! # Example
//!
//! ```ignore
//! let config = RepositoryConfig::from_env()?;
//! let repositories = RepositoryFactory::new(config).create().await?;
//! let categories = repositories.category_repository.list().await?;
//! ```

use std::env;
use std::str::FromStr;
use std::sync::Arc;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use super::{
    CategoryRepository, InMemoryCategoryRepository, InMemoryQuestionRepository,
    PostgresCategoryRepository, PostgresQuestionRepository, QuestionRepository,
};
use crate::domain::default_categories;

/// Default size of the `PostgreSQL` connection pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

// =============================================================================
// Configuration Types
// =============================================================================

/// Storage backend for questions and categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageMode {
    /// In-memory storage seeded with the default categories.
    #[default]
    InMemory,
    /// `PostgreSQL` storage for production use.
    Postgres,
}

impl FromStr for StorageMode {
    type Err = ConfigurationError;

    /// Parses a storage mode from a string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidStorageMode` if the string is not recognized.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "in_memory" | "inmemory" | "memory" => Ok(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            _ => Err(ConfigurationError::InvalidStorageMode(value.to_string())),
        }
    }
}

/// Configuration for the repository factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryConfig {
    pub storage_mode: StorageMode,
    /// `PostgreSQL` connection URL (required when `storage_mode` is `Postgres`).
    pub database_url: Option<String>,
    pub max_connections: u32,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            storage_mode: StorageMode::default(),
            database_url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl RepositoryConfig {
    /// Creates a configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if a variable holds an invalid value or
    /// `DATABASE_URL` is missing when `STORAGE_MODE=postgres`.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Creates a configuration from an arbitrary variable lookup.
    ///
    /// Empty or whitespace-only values are treated as unset.
    ///
    /// # Errors
    ///
    /// See [`RepositoryConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let storage_mode = read("STORAGE_MODE")
            .map(|value| value.parse::<StorageMode>())
            .transpose()?
            .unwrap_or_default();

        let max_connections = match read("DATABASE_MAX_CONNECTIONS") {
            Some(value) => match value.parse::<u32>() {
                Ok(count) if count > 0 => count,
                _ => return Err(ConfigurationError::InvalidMaxConnections(value)),
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let config = Self {
            storage_mode,
            database_url: read("DATABASE_URL"),
            max_connections,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::MissingDatabaseUrl` if `PostgreSQL` storage
    /// is selected without a URL.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if matches!(self.storage_mode, StorageMode::Postgres) && self.database_url.is_none() {
            return Err(ConfigurationError::MissingDatabaseUrl);
        }
        Ok(())
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur while reading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Invalid storage mode value.
    #[error("Invalid storage mode: '{0}'. Expected 'in_memory' or 'postgres'")]
    InvalidStorageMode(String),

    /// Invalid pool size value.
    #[error("Invalid DATABASE_MAX_CONNECTIONS: '{0}'. Expected a positive integer")]
    InvalidMaxConnections(String),

    /// Missing `DATABASE_URL` when storage mode is Postgres.
    #[error("DATABASE_URL environment variable is required when STORAGE_MODE=postgres")]
    MissingDatabaseUrl,
}

/// Errors that can occur during factory initialization.
#[derive(Debug, Error)]
pub enum FactoryError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    DatabaseConnection(String),
}

// =============================================================================
// Repository Factory
// =============================================================================

/// Collection of initialized repositories.
#[derive(Clone)]
pub struct Repositories {
    pub question_repository: Arc<dyn QuestionRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
}

impl std::fmt::Debug for Repositories {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Repositories")
            .field("question_repository", &"Arc<dyn QuestionRepository>")
            .field("category_repository", &"Arc<dyn CategoryRepository>")
            .finish()
    }
}

impl Repositories {
    /// In-memory repositories seeded with the default categories and no questions.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            question_repository: Arc::new(InMemoryQuestionRepository::new()),
            category_repository: Arc::new(InMemoryCategoryRepository::with_categories(
                default_categories(),
            )),
        }
    }

    /// `PostgreSQL` repositories sharing one connection pool.
    #[must_use]
    pub fn postgres(pool: &PgPool) -> Self {
        Self {
            question_repository: Arc::new(PostgresQuestionRepository::new(pool.clone())),
            category_repository: Arc::new(PostgresCategoryRepository::new(pool.clone())),
        }
    }
}

/// Factory for creating repository instances based on configuration.
#[derive(Debug, Clone)]
pub struct RepositoryFactory {
    config: RepositoryConfig,
}

impl RepositoryFactory {
    #[must_use]
    pub const fn new(config: RepositoryConfig) -> Self {
        Self { config }
    }

    /// Creates the repositories, connecting to the database when needed.
    ///
    /// # Errors
    ///
    /// Returns `FactoryError` if the configuration is invalid or the
    /// `PostgreSQL` connection fails.
    pub async fn create(&self) -> Result<Repositories, FactoryError> {
        match self.config.storage_mode {
            StorageMode::InMemory => {
                tracing::info!("Using in-memory storage with default categories");
                Ok(Repositories::in_memory())
            }
            StorageMode::Postgres => {
                let pool = self.create_postgres_pool().await?;
                tracing::info!(
                    max_connections = self.config.max_connections,
                    "Connected to PostgreSQL"
                );
                Ok(Repositories::postgres(&pool))
            }
        }
    }

    async fn create_postgres_pool(&self) -> Result<PgPool, FactoryError> {
        let database_url = self
            .config
            .database_url
            .as_ref()
            .ok_or(ConfigurationError::MissingDatabaseUrl)?;

        PgPoolOptions::new()
            .max_connections(self.config.max_connections)
            .connect(database_url)
            .await
            .map_err(|error| FactoryError::DatabaseConnection(error.to_string()))
    }
}

// =============================================================================
// Tests
// =============================================================================
