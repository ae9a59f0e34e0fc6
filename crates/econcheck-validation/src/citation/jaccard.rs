use std::collections::HashSet;

use econcheck_core::traits::SimilarityScorer;

/// Word-set Jaccard similarity: `|A ∩ B| / |A ∪ B|` over lowercased
/// whitespace-separated words.
#[derive(Debug, Clone, Copy, Default)]
pub struct JaccardScorer;

impl JaccardScorer {
    fn words(text: &str) -> HashSet<String> {
        text.split_whitespace().map(str::to_lowercase).collect()
    }
}

impl SimilarityScorer for JaccardScorer {
    fn name(&self) -> &'static str {
        "jaccard"
    }

    fn score(&self, a: &str, b: &str) -> f64 {
        let a = Self::words(a);
        let b = Self::words(b);
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        let common = a.intersection(&b).count();
        let union = a.union(&b).count();
        common as f64 / union as f64
    }
}
