use crate::models::{MenteeProfile, MentorProfile, MentorSummary, Recommendation};
use crate::core::{
    similarity::{rank_top_k, round_similarity},
    text::combine_text,
    vectorizer::{vectorize_tokens, TermVector},
    vocabulary::{tokenize, Vocabulary},
};

/// Default number of recommendations returned per request
pub const DEFAULT_LIMIT: usize = 5;

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub recommendations: Vec<Recommendation>,
    pub total_candidates: usize,
    pub vocabulary_size: usize,
}

/// Text-similarity matching engine
///
/// # Pipeline Stages
/// 1. Combine each profile into a document
/// 2. Tokenize every document once
/// 3. Build a shared vocabulary over mentee + mentor documents
/// 4. Vectorize, rank by cosine similarity and keep the top K
///
/// The engine holds configuration only; every call builds its own
/// vocabulary and vectors.
#[derive(Debug, Clone)]
pub struct Matcher {
    default_limit: usize,
}

impl Matcher {
    pub fn new(default_limit: usize) -> Self {
        Self { default_limit }
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// Rank mentors for a mentee
    ///
    /// # Arguments
    /// * `mentee` - The mentee being matched
    /// * `mentors` - Candidate pool, in retrieval order
    /// * `limit` - Maximum number of recommendations, `None` uses the default
    ///
    /// # Returns
    /// MatchResult with recommendations sorted by descending similarity
    pub fn recommend(
        &self,
        mentee: &MenteeProfile,
        mentors: &[MentorProfile],
        limit: Option<usize>,
    ) -> MatchResult {
        let limit = limit.unwrap_or(self.default_limit);

        let mut tokenized = Vec::with_capacity(mentors.len() + 1);
        tokenized.push(tokenize(&combine_text(mentee)));
        tokenized.extend(mentors.iter().map(|mentor| tokenize(&combine_text(mentor))));

        let vocabulary = Vocabulary::from_tokens(&tokenized);

        let vectors: Vec<TermVector> = tokenized
            .iter()
            .map(|tokens| vectorize_tokens(tokens, &vocabulary))
            .collect();
        let (mentee_vector, mentor_vectors) = vectors.split_at(1);

        let ranked = rank_top_k(
            &mentee_vector[0],
            mentor_vectors.iter().map(Vec::as_slice),
            limit,
        );

        tracing::debug!(
            mentee = %mentee.user_id,
            candidates = mentors.len(),
            vocabulary = vocabulary.len(),
            "Ranked mentor pool"
        );

        let recommendations = ranked
            .into_iter()
            .map(|m| Recommendation {
                similarity: round_similarity(m.similarity),
                mentor: MentorSummary::from(&mentors[m.index]),
            })
            .collect();

        MatchResult {
            recommendations,
            total_candidates: mentors.len(),
            vocabulary_size: vocabulary.len(),
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}
