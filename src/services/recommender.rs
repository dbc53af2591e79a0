use std::sync::Arc;
use thiserror::Error;
use crate::core::{Matcher, MatchResult};
use crate::models::Recommendation;
use crate::services::store::{ProfileStore, StoreError};

/// Failures surfaced at the recommendation boundary
///
/// All variants are recoverable per request.
#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("UserId not provided")]
    MissingIdentity,

    #[error("Mentee not found: {0}")]
    MenteeNotFound(String),

    #[error("No mentors available")]
    EmptyCandidatePool,

    #[error("Unexpected failure: {0}")]
    Unexpected(#[from] StoreError),
}

/// Fetches profiles for a caller and runs the matching engine
#[derive(Clone)]
pub struct MatchService {
    store: Arc<dyn ProfileStore>,
    matcher: Matcher,
}

impl MatchService {
    pub fn new(store: Arc<dyn ProfileStore>, matcher: Matcher) -> Self {
        Self { store, matcher }
    }

    pub fn store(&self) -> &Arc<dyn ProfileStore> {
        &self.store
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Recommend mentors for the mentee owned by `user_id`
    ///
    /// The mentee and the mentor pool are fetched concurrently, then the
    /// engine ranks the pool. `limit` falls back to the matcher default.
    pub async fn recommend(
        &self,
        user_id: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<Recommendation>, RecommendationError> {
        let user_id = user_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(RecommendationError::MissingIdentity)?;

        let (mentee, mentors) = tokio::try_join!(
            self.store.find_mentee(user_id),
            self.store.list_mentors(),
        )?;

        let mentee = mentee.ok_or_else(|| RecommendationError::MenteeNotFound(user_id.to_string()))?;

        if mentors.is_empty() {
            return Err(RecommendationError::EmptyCandidatePool);
        }

        let MatchResult {
            recommendations,
            total_candidates,
            vocabulary_size,
        } = self.matcher.recommend(&mentee, &mentors, limit);

        tracing::info!(
            "Returning {} recommendations for {} (from {} mentors, {} terms)",
            recommendations.len(),
            user_id,
            total_candidates,
            vocabulary_size
        );

        Ok(recommendations)
    }
}
