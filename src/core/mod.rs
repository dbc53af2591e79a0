// Core algorithm exports
pub mod matcher;
pub mod similarity;
pub mod text;
pub mod vectorizer;
pub mod vocabulary;

pub use matcher::{Matcher, MatchResult, DEFAULT_LIMIT};
pub use similarity::{cosine_similarity, rank_top_k, round_similarity, RankedMatch};
pub use text::{combine_text, DocumentField, Profile};
pub use vectorizer::{vectorize, vectorize_tokens, TermVector};
pub use vocabulary::{tokenize, Vocabulary};
