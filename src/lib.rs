//! Mentor Match - text-similarity matching service for mentorship programs
//!
//! This library provides the matching engine that ranks a pool of mentors
//! against a mentee by term-frequency cosine similarity, plus the thin
//! service layer (profile store, session tokens, HTTP routes) around it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchResult, combine_text, cosine_similarity, tokenize, Vocabulary};
pub use crate::models::{MenteeProfile, MentorProfile, MentorSummary, Recommendation, RecommendationsResponse};
pub use crate::services::{MatchService, ProfileStore, RecommendationError};
