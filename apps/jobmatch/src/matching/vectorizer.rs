//! Term-frequency vectorizer and cosine similarity for the free-text signal.
//!
//! Vectors are `BTreeMap`s so every summation runs in token order and the
//! same inputs always produce bit-identical scores.

use std::collections::BTreeMap;

/// Sparse, L2-normalized term-frequency vector.
pub type TermVector = BTreeMap<String, f64>;

/// Tokens of this many characters or fewer are dropped.
const MIN_TOKEN_CHARS: usize = 2;

/// Lower-cases `text`, splits on whitespace, drops short tokens, counts the
/// rest and divides each count by the Euclidean norm of the count vector.
///
/// Returns an empty vector when nothing survives filtering.
pub fn vectorize(text: &str) -> TermVector {
    let mut counts = TermVector::new();

    for token in text.to_lowercase().split_whitespace() {
        if token.chars().count() > MIN_TOKEN_CHARS {
            *counts.entry(token.to_string()).or_insert(0.0) += 1.0;
        }
    }

    let norm = l2_norm(&counts);
    if norm > 0.0 {
        for weight in counts.values_mut() {
            *weight /= norm;
        }
    }

    counts
}

fn l2_norm(vector: &TermVector) -> f64 {
    vector.values().map(|v| v * v).sum::<f64>().sqrt()
}

/// Cosine similarity: dot product over shared tokens divided by the product
/// of both full-vector norms. 0.0 when either side is empty.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let norm_a = l2_norm(a);
    let norm_b = l2_norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    // Iterate the smaller map; BTreeMap order keeps the sum stable.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .iter()
        .filter_map(|(term, wa)| large.get(term).map(|wb| wa * wb))
        .sum();

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vectorize_lowercases_and_filters_short_tokens() {
        let v = vectorize("Java is a GREAT language, java");
        assert!(v.contains_key("java"));
        assert!(v.contains_key("great"));
        assert!(!v.contains_key("is"));
        assert!(!v.contains_key("a"));
        assert_eq!(v.len(), 3); // java, great, "language,"
    }

    #[test]
    fn test_vectorize_is_l2_normalized() {
        let v = vectorize("rust rust tokio serde");
        let norm: f64 = v.values().map(|x| x * x).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-12, "norm was {norm}");
        // counts 2,1,1 → norm √6
        assert!((v["rust"] - 2.0 / 6f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_vectorize_empty_and_filtered_text() {
        assert!(vectorize("").is_empty());
        assert!(vectorize("   \n\t ").is_empty());
        assert!(vectorize("a an to of").is_empty());
    }

    #[test]
    fn test_vectorize_counts_chars_not_bytes() {
        // Three CJK characters are three chars (nine bytes) and survive.
        let v = vectorize("工程师 开发");
        assert!(v.contains_key("工程师"));
        assert!(!v.contains_key("开发"));
    }

    #[test]
    fn test_cosine_identical_text_is_one() {
        let a = vectorize("senior java developer with spring experience");
        let sim = cosine_similarity(&a, &a);
        assert!((sim - 1.0).abs() < 1e-9, "sim was {sim}");
    }

    #[test]
    fn test_cosine_disjoint_text_is_zero() {
        let a = vectorize("java spring mysql");
        let b = vectorize("vue react html");
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_cosine_empty_vector_is_zero() {
        let a = vectorize("java spring mysql");
        let empty = TermVector::new();
        assert_eq!(cosine_similarity(&a, &empty), 0.0);
        assert_eq!(cosine_similarity(&empty, &empty), 0.0);
    }

    #[test]
    fn test_cosine_is_symmetric() {
        let a = vectorize("backend developer java java spring redis");
        let b = vectorize("java developer needed for redis caching layer");
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }

    #[test]
    fn test_cosine_partial_overlap_in_range() {
        let sim = cosine_similarity(&vectorize("java spring docker"), &vectorize("java vue react"));
        assert!(sim > 0.0 && sim < 1.0, "sim was {sim}");
        // one shared token of three on each side → 1/3
        assert!((sim - 1.0 / 3.0).abs() < 1e-9);
    }
}
