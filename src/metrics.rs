//! Metrics describing a completed training pass.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Aggregate metrics produced by a training session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrainingMetrics {
    /// Number of documents enumerated in the corpus.
    pub documents_seen: usize,
    /// Documents routed to the positive table.
    pub positive_documents: usize,
    /// Documents routed to the negative table.
    pub negative_documents: usize,
    /// Documents whose name matched neither class prefix.
    pub skipped_documents: usize,
    /// Token occurrences accumulated into the positive table.
    pub positive_tokens: u64,
    /// Token occurrences accumulated into the negative table.
    pub negative_tokens: u64,
    /// Total duration of the training session.
    pub total_duration: Duration,
}

impl TrainingMetrics {
    /// Creates an empty metrics container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
