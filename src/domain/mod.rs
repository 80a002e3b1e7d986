//! Domain module for the trivia game.
//!
//! This module contains the two stored entities and the pagination rules
//! shared by every question listing.

pub mod category;
pub mod page;
pub mod question;

pub use category::{Category, CategoryId, CategoryMap, category_map, default_categories};
pub use page::{Page, QUESTIONS_PER_PAGE, paginate};
pub use question::{NewQuestion, Question, QuestionId};
