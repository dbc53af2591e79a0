/// Ranked candidate: position in the input sequence and its similarity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedMatch {
    pub index: usize,
    pub similarity: f64,
}

/// Cosine similarity between two term-frequency vectors
///
/// Returns 0 when either vector has zero norm.
#[inline]
pub fn cosine_similarity(a: &[u32], b: &[u32]) -> f64 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (x as f64, y as f64);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b).sqrt()
}

/// Rank candidates against a reference vector and keep the top `limit`
///
/// Sorting is stable: equal similarities keep their input order.
pub fn rank_top_k<'a, I>(reference: &[u32], candidates: I, limit: usize) -> Vec<RankedMatch>
where
    I: IntoIterator<Item = &'a [u32]>,
{
    let mut ranked: Vec<RankedMatch> = candidates
        .into_iter()
        .enumerate()
        .map(|(index, vector)| RankedMatch {
            index,
            similarity: cosine_similarity(reference, vector),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ranked.truncate(limit);
    ranked
}

/// Round a similarity to 4 decimal places for output
///
/// Rounds the exact binary value through decimal formatting rather than
/// scaling by 10^4 first, so near-half values are not shifted by the
/// multiply.
#[inline]
pub fn round_similarity(similarity: f64) -> f64 {
    format!("{:.4}", similarity).parse().unwrap_or(similarity)
}
