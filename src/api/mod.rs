//! API module for HTTP handlers.
//!
//! This module contains route definitions and request/response handlers.

pub mod categories;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod questions;
pub mod quizzes;
pub mod routes;

pub use categories::{list_categories, list_category_questions};
pub use dto::{
    CategoriesResponse, CategoryQuestionsResponse, CreatedResponse, DeleteQuestionResponse,
    LooseInteger, PageQuery, QuestionsPostRequest, QuestionsPostResponse, QuestionsResponse,
    QuizCategory, QuizRequest, QuizResponse, SearchResponse,
};
pub use error::{ApiError, ErrorBody};
pub use handlers::{AppState, HealthResponse, health_check};
pub use questions::{create_or_search_questions, delete_question, list_questions};
pub use quizzes::play_quiz;
pub use routes::create_router;
