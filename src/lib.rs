//! Trivia API Library
//!
//! This library provides the HTTP API behind the trivia quiz game: category
//! and question listings, question creation, deletion and search, and random
//! quiz play.

pub mod api;
pub mod domain;
pub mod infrastructure;
