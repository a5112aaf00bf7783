// TopicModelExport: a fitted model's term weights, loaded from disk.
//
// The fitting itself happens elsewhere. This type only holds the resulting
// topic-by-term matrix plus its vocabulary and checks they line up. The
// JSON form is:
//
//   { "vocabulary": ["a", "b", ...], "weights": [[0.1, 0.2, ...], ...] }

use std::path::Path;

use anyhow::{Context, Result};
use ndarray::{Array2, ArrayView2};
use serde::Deserialize;
use tracing::debug;

use super::traits::TermWeightSource;
use crate::error::TopTermsError;

#[derive(Deserialize)]
struct ExportFile {
    vocabulary: Vec<String>,
    weights: Vec<Vec<f64>>,
}

/// An owned, shape-checked topic-by-term matrix and its vocabulary.
#[derive(Debug, Clone)]
pub struct TopicModelExport {
    weights: Array2<f64>,
    vocabulary: Vec<String>,
}

impl TopicModelExport {
    /// Build from one weight vector per topic.
    ///
    /// Every row must have the same length, and that length must match the
    /// vocabulary. Zero rows is allowed.
    pub fn from_rows(rows: Vec<Vec<f64>>, vocabulary: Vec<String>) -> Result<Self, TopTermsError> {
        let num_topics = rows.len();
        let num_terms = rows.first().map_or(vocabulary.len(), Vec::len);

        if let Some((topic, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != num_terms) {
            return Err(TopTermsError::RaggedRows {
                topic,
                expected: num_terms,
                found: row.len(),
            });
        }

        if num_terms != vocabulary.len() {
            return Err(TopTermsError::ShapeMismatch {
                vocabulary: vocabulary.len(),
                columns: num_terms,
            });
        }

        let data: Vec<f64> = rows.into_iter().flatten().collect();
        let weights = Array2::from_shape_vec((num_topics, num_terms), data).map_err(|_| {
            TopTermsError::ShapeMismatch {
                vocabulary: vocabulary.len(),
                columns: num_terms,
            }
        })?;

        Ok(Self {
            weights,
            vocabulary,
        })
    }

    /// Parse the JSON export form, then validate it like `from_rows`.
    pub fn from_json_str(json: &str) -> Result<Self, TopTermsError> {
        let file: ExportFile = serde_json::from_str(json)?;
        Self::from_rows(file.weights, file.vocabulary)
    }

    /// Read and parse an export file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read topic model export {}", path.display()))?;
        let export = Self::from_json_str(&json)
            .with_context(|| format!("Failed to load topic model export {}", path.display()))?;

        debug!(
            topics = export.num_topics(),
            terms = export.num_terms(),
            "Loaded topic model export from {}",
            path.display()
        );

        Ok(export)
    }

    pub fn num_topics(&self) -> usize {
        self.weights.nrows()
    }

    pub fn num_terms(&self) -> usize {
        self.weights.ncols()
    }
}

impl TermWeightSource for TopicModelExport {
    fn term_weights(&self) -> ArrayView2<'_, f64> {
        self.weights.view()
    }

    fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }
}
