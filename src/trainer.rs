//! Core training pass responsible for accumulating the class tables.

use std::fmt;
use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::classifier::BayesModel;
use crate::config::{CorpusConfig, TrainerBuilder, TrainerConfig};
use crate::corpus::{load_corpus, Document};
use crate::error::Result;
use crate::freq::FrequencyTable;
use crate::metrics::TrainingMetrics;
use crate::tokenize::tokenize;

/// High-level façade configuring and executing training runs.
#[derive(Debug, Clone)]
pub struct Trainer {
    cfg: TrainerConfig,
}

/// Artifacts returned after a training session completes.
#[must_use]
#[derive(Debug, Clone)]
pub struct TrainerArtifacts {
    /// Trained Naive Bayes model.
    pub model: BayesModel,
    /// Summary metrics captured during training.
    pub metrics: TrainingMetrics,
}

impl Trainer {
    /// Creates a new trainer for the supplied configuration.
    #[must_use]
    pub fn new(cfg: TrainerConfig) -> Self {
        Self { cfg }
    }

    /// Returns a [`TrainerBuilder`] with default settings.
    #[must_use]
    pub fn builder() -> TrainerBuilder {
        TrainerConfig::builder()
    }

    /// Returns an immutable reference to the underlying configuration.
    #[must_use]
    pub fn config(&self) -> &TrainerConfig {
        &self.cfg
    }

    /// Trains a model by loading documents from a corpus directory.
    ///
    /// Fails with [`SentibayesError::CorpusNotFound`](crate::SentibayesError::CorpusNotFound)
    /// when the directory is missing or empty, and with an IO error if any
    /// single document cannot be read; there is no per-file recovery.
    pub fn train_from_dir<P: AsRef<Path>>(
        &self,
        dir: P,
        corpus_cfg: &CorpusConfig,
    ) -> Result<TrainerArtifacts> {
        let documents = load_corpus(dir, corpus_cfg)?;
        self.train_from_documents(&documents)
    }

    /// Trains a model from in-memory documents.
    ///
    /// Documents are routed by filename prefix: positive first, then
    /// negative; names matching neither prefix are skipped without error.
    pub fn train_from_documents(&self, documents: &[Document]) -> Result<TrainerArtifacts> {
        self.cfg.validate()?;

        let mut positive = FrequencyTable::new();
        let mut negative = FrequencyTable::new();
        let mut metrics = TrainingMetrics::new();
        let training_start = Instant::now();
        let total = documents.len();

        for (index, document) in documents.iter().enumerate() {
            if self.cfg.show_progress {
                info!("training {:>4}/{} {}", index + 1, total, document.name);
            }
            metrics.documents_seen += 1;

            let tokens = tokenize(&document.text);
            if document.name.starts_with(&self.cfg.positive_prefix) {
                positive.update(&tokens);
                metrics.positive_documents += 1;
                metrics.positive_tokens += tokens.len() as u64;
            } else if document.name.starts_with(&self.cfg.negative_prefix) {
                negative.update(&tokens);
                metrics.negative_documents += 1;
                metrics.negative_tokens += tokens.len() as u64;
            } else {
                debug!("skipping {}: name matches neither class prefix", document.name);
                metrics.skipped_documents += 1;
            }
        }

        metrics.total_duration = training_start.elapsed();
        if self.cfg.show_progress {
            info!(
                "trained on {} documents ({} positive, {} negative, {} skipped) in {:.2?}",
                metrics.documents_seen,
                metrics.positive_documents,
                metrics.negative_documents,
                metrics.skipped_documents,
                metrics.total_duration
            );
        }

        let model = BayesModel::new(positive, negative);
        Ok(TrainerArtifacts { model, metrics })
    }
}

impl fmt::Display for TrainerArtifacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Naive Bayes model with {} positive / {} negative tokens",
            self.model.positive().total(),
            self.model.negative().total()
        )?;
        writeln!(
            f,
            "Documents: {} positive, {} negative, {} skipped",
            self.metrics.positive_documents,
            self.metrics.negative_documents,
            self.metrics.skipped_documents
        )?;
        writeln!(f, "Total duration: {:?}", self.metrics.total_duration)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn trainer() -> Trainer {
        let cfg = TrainerConfig::builder()
            .show_progress(false)
            .build()
            .unwrap();
        Trainer::new(cfg)
    }

    fn documents() -> Vec<Document> {
        vec![
            Document::new("movies-5-1.txt", "A great movie. Great!"),
            Document::new("movies-1-1.txt", "A terrible movie."),
            Document::new("movies-5-2.txt", "great fun"),
        ]
    }

    #[test]
    fn routes_documents_by_prefix() {
        let artifacts = trainer().train_from_documents(&documents()).unwrap();
        let model = &artifacts.model;

        assert_eq!(model.positive().count("great"), 3);
        assert_eq!(model.positive().count("movie"), 1);
        assert_eq!(model.negative().count("terrible"), 1);
        assert_eq!(model.negative().count("great"), 0);
        assert_eq!(artifacts.metrics.positive_documents, 2);
        assert_eq!(artifacts.metrics.negative_documents, 1);
    }

    #[test]
    fn unmatched_documents_touch_neither_table() {
        let mut docs = documents();
        docs.push(Document::new("README.txt", "zanzibar unrelated notes"));

        let artifacts = trainer().train_from_documents(&docs).unwrap();
        assert_eq!(artifacts.model.positive().count("zanzibar"), 0);
        assert_eq!(artifacts.model.negative().count("zanzibar"), 0);
        assert_eq!(artifacts.metrics.skipped_documents, 1);
        assert_eq!(artifacts.metrics.documents_seen, 4);
    }

    #[test]
    fn token_tallies_match_table_totals() {
        let artifacts = trainer().train_from_documents(&documents()).unwrap();
        assert_eq!(
            artifacts.metrics.positive_tokens,
            artifacts.model.positive().total()
        );
        assert_eq!(
            artifacts.metrics.negative_tokens,
            artifacts.model.negative().total()
        );
    }

    #[test]
    fn train_from_dir_reads_the_corpus() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join("movies-5-a.txt"), "I love it").expect("write pos");
        fs::write(dir.path().join("movies-1-b.txt"), "I hate it").expect("write neg");

        let artifacts = trainer()
            .train_from_dir(dir.path(), &CorpusConfig::default())
            .unwrap();
        assert_eq!(artifacts.model.positive().count("love"), 1);
        assert_eq!(artifacts.model.negative().count("hate"), 1);
    }

    #[test]
    fn missing_corpus_dir_fails() {
        let dir = tempdir().expect("tempdir");
        let err = trainer()
            .train_from_dir(dir.path().join("nope"), &CorpusConfig::default())
            .expect_err("should fail");
        assert!(matches!(
            err,
            crate::SentibayesError::CorpusNotFound { .. }
        ));
    }
}
