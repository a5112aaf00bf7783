// Error kinds surfaced by the library.
//
// The binary wraps these in anyhow; library callers can match on the
// variant to decide whether to skip a topic or abort.

use thiserror::Error;

/// Errors that can occur while validating or summarizing a topic model.
#[derive(Debug, Error)]
pub enum TopTermsError {
    /// Vocabulary length disagrees with the weight matrix column count
    #[error("Vocabulary has {vocabulary} terms but the weight matrix has {columns} columns")]
    ShapeMismatch { vocabulary: usize, columns: usize },

    /// A topic row sums to zero and cannot be normalized
    #[error("Topic {topic} has zero total weight and cannot be normalized")]
    DegenerateRow { topic: usize },

    /// Requested number of terms is outside [1, num_terms]
    #[error("top_n must be between 1 and {num_terms}, got {top_n}")]
    InvalidTopN { top_n: usize, num_terms: usize },

    /// Rows of an exported model have different lengths
    #[error("Topic {topic} has {found} weights, expected {expected}")]
    RaggedRows {
        topic: usize,
        expected: usize,
        found: usize,
    },

    /// Exported model JSON could not be parsed
    #[error("Invalid topic model export: {0}")]
    Parse(#[from] serde_json::Error),

    /// A preprocessing pattern failed to compile
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex_lite::Error),
}
