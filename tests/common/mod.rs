#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use futures::future::BoxFuture;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use trivia_api::api::{AppState, create_router};
use trivia_api::domain::{
    Category, CategoryId, NewQuestion, Question, QuestionId, default_categories,
};
use trivia_api::infrastructure::{
    InMemoryCategoryRepository, InMemoryQuestionRepository, QuestionRepository, RepositoryError,
    RepositoryResult, RngProvider,
};

pub const TEST_SEED: u64 = 42;

// =============================================================================
// Fixture Data
// =============================================================================

pub fn question(id: i32, text: &str, answer: &str, category: i32, difficulty: i32) -> Question {
    Question {
        id: QuestionId::new(id),
        question: text.to_string(),
        answer: answer.to_string(),
        category: CategoryId::new(category),
        difficulty,
    }
}

/// Nineteen questions across the six default categories. Art (2) holds
/// ids 16 to 19.
pub fn trivia_questions() -> Vec<Question> {
    vec![
        question(
            2,
            "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
            "Apollo 13",
            5,
            4,
        ),
        question(
            4,
            "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?",
            "Tom Cruise",
            5,
            4,
        ),
        question(
            5,
            "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
            "Maya Angelou",
            4,
            2,
        ),
        question(
            6,
            "What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?",
            "Edward Scissorhands",
            5,
            3,
        ),
        question(
            9,
            "What boxer's original name is Cassius Clay?",
            "Muhammad Ali",
            4,
            1,
        ),
        question(
            10,
            "Which is the only team to play in every soccer World Cup tournament?",
            "Brazil",
            6,
            3,
        ),
        question(
            11,
            "Which country won the first ever soccer World Cup in 1930?",
            "Uruguay",
            6,
            4,
        ),
        question(
            12,
            "Who invented Peanut Butter?",
            "George Washington Carver",
            4,
            2,
        ),
        question(
            13,
            "What is the largest lake in Africa?",
            "Lake Victoria",
            3,
            2,
        ),
        question(
            14,
            "In which royal palace would you find the Hall of Mirrors?",
            "The Palace of Versailles",
            3,
            3,
        ),
        question(
            15,
            "The Taj Mahal is located in which Indian city?",
            "Agra",
            3,
            2,
        ),
        question(
            16,
            "Which Dutch graphic artist, initials M C, was a creator of optical illusions?",
            "Escher",
            2,
            1,
        ),
        question(
            17,
            "La Giaconda is better known as what?",
            "Mona Lisa",
            2,
            3,
        ),
        question(
            18,
            "How many paintings did Van Gogh sell in his lifetime?",
            "One",
            2,
            4,
        ),
        question(
            19,
            "Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?",
            "Jackson Pollock",
            2,
            2,
        ),
        question(
            20,
            "What is the heaviest organ in the human body?",
            "The Liver",
            1,
            4,
        ),
        question(21, "Who discovered penicillin?", "Alexander Fleming", 1, 3),
        question(
            22,
            "Hematology is a branch of medicine involving the study of what?",
            "Blood",
            1,
            4,
        ),
        question(
            23,
            "Which dung beetle was worshipped by the ancient Egyptians?",
            "Scarab",
            4,
            4,
        ),
    ]
}

// =============================================================================
// Application Builders
// =============================================================================

pub fn app_with(questions: Vec<Question>, categories: Vec<Category>) -> Router {
    let state = AppState::new(
        Arc::new(InMemoryQuestionRepository::with_questions(questions)),
        Arc::new(InMemoryCategoryRepository::with_categories(categories)),
        RngProvider::new_seeded(TEST_SEED),
    );
    create_router(state)
}

/// Router over the trivia fixture data and the six default categories.
pub fn app() -> Router {
    app_with(trivia_questions(), default_categories())
}

/// Router whose question repository fails every call.
pub fn failing_app() -> Router {
    let state = AppState::new(
        Arc::new(FailingQuestionRepository),
        Arc::new(InMemoryCategoryRepository::with_categories(default_categories())),
        RngProvider::new_seeded(TEST_SEED),
    );
    create_router(state)
}

// =============================================================================
// Failing Repository
// =============================================================================

pub struct FailingQuestionRepository;

fn unavailable<T: Send + 'static>() -> BoxFuture<'static, RepositoryResult<T>> {
    let error = RepositoryError::DatabaseError("connection refused".to_string());
    Box::pin(async move { Err(error) })
}

impl QuestionRepository for FailingQuestionRepository {
    fn list(&self) -> BoxFuture<'_, RepositoryResult<Vec<Question>>> {
        unavailable()
    }

    fn list_by_category(
        &self,
        _category: CategoryId,
    ) -> BoxFuture<'_, RepositoryResult<Vec<Question>>> {
        unavailable()
    }

    fn search(&self, _term: &str) -> BoxFuture<'_, RepositoryResult<Vec<Question>>> {
        unavailable()
    }

    fn find_by_id(&self, _id: QuestionId) -> BoxFuture<'_, RepositoryResult<Option<Question>>> {
        unavailable()
    }

    fn insert(&self, _question: NewQuestion) -> BoxFuture<'_, RepositoryResult<QuestionId>> {
        unavailable()
    }

    fn delete(&self, _id: QuestionId) -> BoxFuture<'_, RepositoryResult<bool>> {
        unavailable()
    }

    fn quiz_candidates(
        &self,
        _category: Option<CategoryId>,
        _excluded: &[QuestionId],
    ) -> BoxFuture<'_, RepositoryResult<Vec<Question>>> {
        unavailable()
    }
}

// =============================================================================
// Request Helpers
// =============================================================================

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Value,
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> TestResponse {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: &Router, uri: &str, body: impl Into<Body>) -> TestResponse {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();
    send(app, request).await
}

/// Asserts the fixed JSON error body for `code`.
pub fn assert_error(response: &TestResponse, code: u16, message: &str) {
    assert_eq!(response.status.as_u16(), code, "body: {}", response.body);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["error"], code);
    assert_eq!(response.body["message"], message);
}

pub fn question_ids(body: &Value) -> Vec<i64> {
    body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|question| question["id"].as_i64().unwrap())
        .collect()
}
