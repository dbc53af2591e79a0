use indexmap::IndexSet;

/// Split a document into lowercase word tokens
///
/// Word characters are ASCII letters, digits and `_`; any run of other
/// characters (including non-ASCII letters) separates tokens. Empty tokens
/// are dropped.
#[inline]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
        .map(|token| token.to_ascii_lowercase())
        .collect()
}

/// Ordered set of unique terms; a term's position is its vector dimension
///
/// Terms keep first-occurrence order across the documents the vocabulary
/// was built from. Lookup of a term's dimension is O(1).
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: IndexSet<String>,
}

impl Vocabulary {
    /// Build a vocabulary from raw documents
    pub fn from_documents<S: AsRef<str>>(documents: &[S]) -> Self {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| tokenize(doc.as_ref()))
            .collect();

        Self::from_tokens(&tokenized)
    }

    /// Build a vocabulary from documents that were already tokenized
    pub fn from_tokens(tokenized: &[Vec<String>]) -> Self {
        let mut terms = IndexSet::new();
        for tokens in tokenized {
            for token in tokens {
                if !terms.contains(token.as_str()) {
                    terms.insert(token.clone());
                }
            }
        }

        Self { terms }
    }

    /// Dimension of a term, if present
    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in dimension order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_on_non_word_runs() {
        assert_eq!(tokenize("React.js & Node"), vec!["react", "js", "node"]);
    }

    #[test]
    fn test_tokenize_keeps_underscores_and_digits() {
        assert_eq!(tokenize("snake_case, web3!!"), vec!["snake_case", "web3"]);
    }

    #[test]
    fn test_tokenize_punctuation_is_not_removed_inside_words() {
        // "R&D" is two tokens, not "rd"
        assert_eq!(tokenize("Python, R&D"), vec!["python", "r", "d"]);
        assert_ne!(tokenize("Python, R&D"), tokenize("python rd"));
    }

    #[test]
    fn test_tokenize_non_ascii_letters_separate_words() {
        assert_eq!(tokenize("café naïve"), vec!["caf", "na", "ve"]);
        assert_eq!(tokenize("Zürich-based"), vec!["z", "rich", "based"]);
    }

    #[test]
    fn test_tokenize_empty_and_separator_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" ,.;- ").is_empty());
    }

    #[test]
    fn test_vocabulary_unique_terms() {
        let vocab = Vocabulary::from_documents(&["a b", "b c"]);
        assert_eq!(vocab.len(), 3);
        for term in ["a", "b", "c"] {
            assert!(vocab.index_of(term).is_some());
        }
    }

    #[test]
    fn test_vocabulary_first_occurrence_order() {
        let vocab = Vocabulary::from_documents(&["Beta alpha", "ALPHA gamma beta"]);
        let terms: Vec<&str> = vocab.terms().collect();
        assert_eq!(terms, vec!["beta", "alpha", "gamma"]);
        assert_eq!(vocab.index_of("gamma"), Some(2));
    }

    #[test]
    fn test_vocabulary_empty_documents() {
        let vocab = Vocabulary::from_documents(&["", ""]);
        assert!(vocab.is_empty());
        assert_eq!(vocab.index_of("anything"), None);
    }
}
