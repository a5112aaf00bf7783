// Term-weight source trait: the seam between a fitted model and the extractor.
//
// Any fitting procedure (factorization, Dirichlet allocation, or a file
// exported from one) that can hand over a topic-by-term matrix and the
// vocabulary aligned with its columns can be summarized.

use ndarray::ArrayView2;

/// Something that exposes a topic-by-term weight matrix and its vocabulary.
pub trait TermWeightSource {
    /// Topic-by-term weights, shape (num_topics, num_terms).
    fn term_weights(&self) -> ArrayView2<'_, f64>;

    /// Vocabulary aligned with the columns of `term_weights`.
    fn vocabulary(&self) -> &[String];
}
