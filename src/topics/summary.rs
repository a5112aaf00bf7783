// TopicSummary: the human-readable view of one topic row.
//
// A summary is the topic's top-weighted terms, highest weight first. It
// carries the original row index so that callers skipping degenerate rows
// can still tell which topic a summary belongs to.

use serde::{Deserialize, Serialize};

/// A single vocabulary term and its weight within a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopTerm {
    pub term: String,
    pub weight: f64,
}

/// The top-weighted terms of one topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicSummary {
    /// Row index of this topic in the weight matrix
    pub topic: usize,
    /// Terms in descending weight order, ties by ascending column index
    pub terms: Vec<TopTerm>,
}

impl TopicSummary {
    /// Generate a short label from the first three terms, joined with " / ".
    pub fn label(&self) -> String {
        let label_words: Vec<&str> = self.terms.iter().take(3).map(|t| t.term.as_str()).collect();
        label_words.join(" / ")
    }

    /// Sum of the weights of the terms kept in this summary.
    pub fn total_weight(&self) -> f64 {
        self.terms.iter().map(|t| t.weight).sum()
    }

    /// Weight of the highest-ranked term, or 0.0 for an empty summary.
    pub fn max_weight(&self) -> f64 {
        self.terms.first().map_or(0.0, |t| t.weight)
    }

    /// The summary as borrowed (term, weight) pairs.
    pub fn pairs(&self) -> Vec<(&str, f64)> {
        self.terms.iter().map(|t| (t.term.as_str(), t.weight)).collect()
    }
}
