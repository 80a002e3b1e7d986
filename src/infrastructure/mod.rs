//! Infrastructure module for external services.
//!
//! This module contains the repository traits, their in-memory and
//! `PostgreSQL` implementations, the backend factory, and the random source
//! used by quiz play.

pub mod factory;
pub mod in_memory;
pub mod postgres;
pub mod repository;
pub mod rng;

pub use factory::{
    ConfigurationError, FactoryError, Repositories, RepositoryConfig, RepositoryFactory,
    StorageMode,
};
pub use in_memory::{InMemoryCategoryRepository, InMemoryQuestionRepository};
pub use postgres::{PostgresCategoryRepository, PostgresQuestionRepository};
pub use repository::{CategoryRepository, QuestionRepository, RepositoryError, RepositoryResult};
pub use rng::{RngConfigError, RngProvider, ScopedRng};
