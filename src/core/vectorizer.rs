use crate::core::vocabulary::{tokenize, Vocabulary};

/// Dense term-frequency vector, one count per vocabulary term
pub type TermVector = Vec<u32>;

/// Vectorize a raw document against a vocabulary
pub fn vectorize(text: &str, vocabulary: &Vocabulary) -> TermVector {
    vectorize_tokens(&tokenize(text), vocabulary)
}

/// Vectorize an already tokenized document
///
/// Tokens missing from the vocabulary are ignored.
pub fn vectorize_tokens(tokens: &[String], vocabulary: &Vocabulary) -> TermVector {
    let mut vector = vec![0; vocabulary.len()];
    for token in tokens {
        if let Some(index) = vocabulary.index_of(token) {
            vector[index] += 1;
        }
    }
    vector
}
