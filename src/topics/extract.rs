// Top-term extraction over a topic-by-term weight matrix.
//
// Each row of the matrix is a topic. Rows are optionally normalized to sum
// to 1.0, then the highest-weighted columns are mapped back to vocabulary
// terms. Rows never influence each other; only the order within a row is
// guaranteed (weight descending, then column index ascending).

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use tracing::{debug, info, warn};

use super::summary::{TopTerm, TopicSummary};
use super::traits::TermWeightSource;
use crate::error::TopTermsError;

/// What to do when `top_n` exceeds the vocabulary size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopNPolicy {
    /// Reject with `InvalidTopN`
    #[default]
    Strict,
    /// Return every term instead
    Clamp,
}

/// What to do when a row sums to zero under normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegenerateRowPolicy {
    /// Reject with `DegenerateRow`
    #[default]
    Fail,
    /// Leave the topic out of the result
    Skip,
}

/// Extracts the top-weighted terms of every topic in a fitted model.
#[derive(Debug, Clone)]
pub struct TopTermExtractor {
    /// How many terms to keep per topic
    pub top_n: usize,
    /// Divide every row by its own sum before ranking
    pub normalize: bool,
    pub top_n_policy: TopNPolicy,
    pub degenerate_policy: DegenerateRowPolicy,
}

impl Default for TopTermExtractor {
    fn default() -> Self {
        Self {
            top_n: 10,
            normalize: true,
            top_n_policy: TopNPolicy::Strict,
            degenerate_policy: DegenerateRowPolicy::Fail,
        }
    }
}

impl TopTermExtractor {
    /// Summarize every topic exposed by a term-weight source.
    pub fn extract_from<S: TermWeightSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<Vec<TopicSummary>, TopTermsError> {
        self.extract(source.term_weights(), source.vocabulary())
    }

    /// Summarize every row of `weights` using `vocabulary` for column names.
    ///
    /// Shape is validated before anything else, then `top_n`. With
    /// `normalize` set, a zero-sum row either fails the whole call or is
    /// dropped, depending on `degenerate_policy`.
    pub fn extract(
        &self,
        weights: ArrayView2<'_, f64>,
        vocabulary: &[String],
    ) -> Result<Vec<TopicSummary>, TopTermsError> {
        let (num_topics, num_terms) = weights.dim();
        if vocabulary.len() != num_terms {
            return Err(TopTermsError::ShapeMismatch {
                vocabulary: vocabulary.len(),
                columns: num_terms,
            });
        }

        let top_n = self.resolve_top_n(num_terms)?;

        let mut summaries = Vec::with_capacity(num_topics);
        for (topic, row) in weights.axis_iter(Axis(0)).enumerate() {
            let row = if self.normalize {
                match normalize_row(row, topic) {
                    Ok(normalized) => normalized,
                    Err(TopTermsError::DegenerateRow { topic })
                        if self.degenerate_policy == DegenerateRowPolicy::Skip =>
                    {
                        warn!(topic, "Skipping topic with zero total weight");
                        continue;
                    }
                    Err(e) => return Err(e),
                }
            } else {
                row.to_owned()
            };

            summaries.push(summarize_row(topic, row.view(), vocabulary, top_n));
        }

        info!(
            topics = summaries.len(),
            skipped = num_topics - summaries.len(),
            terms = num_terms,
            top_n,
            normalize = self.normalize,
            "Extracted top terms"
        );

        Ok(summaries)
    }

    fn resolve_top_n(&self, num_terms: usize) -> Result<usize, TopTermsError> {
        let invalid = TopTermsError::InvalidTopN {
            top_n: self.top_n,
            num_terms,
        };

        if self.top_n == 0 || num_terms == 0 {
            return Err(invalid);
        }

        if self.top_n > num_terms {
            return match self.top_n_policy {
                TopNPolicy::Strict => Err(invalid),
                TopNPolicy::Clamp => {
                    warn!(
                        requested = self.top_n,
                        num_terms, "top_n exceeds vocabulary size, returning every term"
                    );
                    Ok(num_terms)
                }
            };
        }

        Ok(self.top_n)
    }
}

/// Extract the top `top_n` terms of every topic, with strict validation.
///
/// This is the plain contract: shape mismatch, out-of-range `top_n`, and
/// (when normalizing) zero-sum rows are all errors.
pub fn extract_top_terms(
    weights: ArrayView2<'_, f64>,
    vocabulary: &[String],
    top_n: usize,
    normalize: bool,
) -> Result<Vec<TopicSummary>, TopTermsError> {
    let extractor = TopTermExtractor {
        top_n,
        normalize,
        ..TopTermExtractor::default()
    };
    extractor.extract(weights, vocabulary)
}

/// Divide every row by its own sum.
///
/// Fails on the first row whose sum is exactly zero.
pub fn normalize_rows(weights: ArrayView2<'_, f64>) -> Result<Array2<f64>, TopTermsError> {
    let mut normalized = weights.to_owned();
    for (topic, mut row) in normalized.axis_iter_mut(Axis(0)).enumerate() {
        let scaled = normalize_row(row.view(), topic)?;
        row.assign(&scaled);
    }
    Ok(normalized)
}

fn normalize_row(row: ArrayView1<'_, f64>, topic: usize) -> Result<Array1<f64>, TopTermsError> {
    let sum = row.sum();
    if sum == 0.0 {
        return Err(TopTermsError::DegenerateRow { topic });
    }

    // Non-negativity is a precondition, not checked.
    if row.iter().any(|&w| w < 0.0) {
        debug!(topic, sum, "Normalizing a row with negative weights");
    }

    Ok(&row / sum)
}

/// Column indices of the `n` largest values in `row`.
///
/// Ordered by value descending; equal values keep ascending column order.
pub fn top_indices(row: ArrayView1<'_, f64>, n: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..row.len()).collect();
    indices.sort_by(|&a, &b| row[b].total_cmp(&row[a]).then(a.cmp(&b)));
    indices.truncate(n);
    indices
}

fn summarize_row(
    topic: usize,
    row: ArrayView1<'_, f64>,
    vocabulary: &[String],
    top_n: usize,
) -> TopicSummary {
    let terms = top_indices(row, top_n)
        .into_iter()
        .map(|i| TopTerm {
            term: vocabulary[i].clone(),
            weight: row[i],
        })
        .collect();

    TopicSummary { topic, terms }
}
