//! Skill-text similarity behind a swappable interface
//!
//! The scoring formulas only see a 0-1 similarity; the vectorization
//! strategy can change without touching them.

use ndarray::Array1;
use std::collections::{BTreeMap, HashMap};
use unicode_segmentation::UnicodeSegmentation;

pub trait SimilarityModel: Send + Sync {
    /// Similarity of two skill texts on [0, 1].
    fn similarity(&self, a: &str, b: &str) -> f64;
}

/// Term-frequency / inverse-document-frequency vectors over the two texts,
/// compared by cosine. Smoothed idf so shared terms never zero out.
pub struct TfidfCosine;

impl SimilarityModel for TfidfCosine {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let tokens_a = tokenize(a);
        let tokens_b = tokenize(b);
        if tokens_a.is_empty() || tokens_b.is_empty() {
            return 0.0;
        }

        // BTreeMap keeps vocabulary order deterministic.
        let mut vocabulary: BTreeMap<&str, usize> = BTreeMap::new();
        for token in tokens_a.iter().chain(tokens_b.iter()) {
            let next = vocabulary.len();
            vocabulary.entry(token.as_str()).or_insert(next);
        }

        let counts_a = term_counts(&tokens_a);
        let counts_b = term_counts(&tokens_b);

        let dim = vocabulary.len();
        let mut vec_a = Array1::<f64>::zeros(dim);
        let mut vec_b = Array1::<f64>::zeros(dim);

        for (token, &idx) in &vocabulary {
            let tf_a = *counts_a.get(*token).unwrap_or(&0) as f64;
            let tf_b = *counts_b.get(*token).unwrap_or(&0) as f64;

            let df = (tf_a > 0.0) as usize + (tf_b > 0.0) as usize;
            // Two documents; smoothed as ln((1 + n) / (1 + df)) + 1.
            let idf = ((1.0 + 2.0) / (1.0 + df as f64)).ln() + 1.0;

            vec_a[idx] = tf_a * idf;
            vec_b[idx] = tf_b * idf;
        }

        let norm_a = vec_a.dot(&vec_a).sqrt();
        let norm_b = vec_b.dot(&vec_b).sqrt();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        (vec_a.dot(&vec_b) / (norm_a * norm_b)).clamp(0.0, 1.0)
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words().map(|w| w.to_lowercase()).collect()
}

fn term_counts(tokens: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts() {
        let model = TfidfCosine;
        let sim = model.similarity("python postgresql docker", "python postgresql docker");
        assert!((sim - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_texts() {
        let model = TfidfCosine;
        let sim = model.similarity("python django", "excel powerpoint");
        assert_eq!(sim, 0.0);
    }

    #[test]
    fn test_partial_overlap_between_extremes() {
        let model = TfidfCosine;
        let sim = model.similarity("python docker", "python kubernetes");
        assert!(sim > 0.0);
        assert!(sim < 1.0);
    }

    #[test]
    fn test_empty_input() {
        let model = TfidfCosine;
        assert_eq!(model.similarity("", "python"), 0.0);
        assert_eq!(model.similarity("python", ""), 0.0);
    }

    #[test]
    fn test_deterministic() {
        let model = TfidfCosine;
        let a = model.similarity("rust tokio axum postgres", "rust go kubernetes");
        let b = model.similarity("rust tokio axum postgres", "rust go kubernetes");
        assert_eq!(a, b);
    }
}
