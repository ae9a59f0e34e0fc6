/// Text similarity strategy for matching quotes against known statements.
pub trait SimilarityScorer: Send + Sync {
    fn name(&self) -> &'static str;

    /// Similarity in `[0.0, 1.0]`; 1.0 means identical.
    fn score(&self, a: &str, b: &str) -> f64;
}
