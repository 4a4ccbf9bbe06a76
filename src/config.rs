//! Configuration builders controlling training, corpus discovery, and the
//! classifier cache.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SentibayesError};

/// Configuration for a Naive Bayes training run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrainerConfig {
    /// Filename prefix marking positive-class documents.
    pub positive_prefix: String,
    /// Filename prefix marking negative-class documents.
    pub negative_prefix: String,
    /// Enables per-document logging through the `log` facade.
    pub show_progress: bool,
}

impl TrainerConfig {
    /// Returns a builder initialised with [`TrainerConfig::default`].
    #[must_use]
    pub fn builder() -> TrainerBuilder {
        TrainerBuilder::default()
    }

    /// Validates the invariants required for training.
    ///
    /// Positive is matched before negative during routing, so overlapping
    /// prefixes are permitted; empty or identical prefixes are not.
    pub fn validate(&self) -> Result<()> {
        if self.positive_prefix.is_empty() || self.negative_prefix.is_empty() {
            return Err(SentibayesError::InvalidConfig(
                "class prefixes must not be empty".into(),
            ));
        }
        if self.positive_prefix == self.negative_prefix {
            return Err(SentibayesError::InvalidConfig(format!(
                "positive and negative prefixes are both {:?}; classes would be indistinguishable",
                self.positive_prefix
            )));
        }
        Ok(())
    }
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            positive_prefix: "movies-5".into(),
            negative_prefix: "movies-1".into(),
            show_progress: true,
        }
    }
}

/// Builder for [`TrainerConfig`].
#[derive(Debug, Default, Clone)]
pub struct TrainerBuilder {
    cfg: TrainerConfig,
}

impl TrainerBuilder {
    /// Creates a builder with [`TrainerConfig::default`] settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the positive-class filename prefix.
    #[must_use]
    pub fn positive_prefix(mut self, value: impl Into<String>) -> Self {
        self.cfg.positive_prefix = value.into();
        self
    }

    /// Sets the negative-class filename prefix.
    #[must_use]
    pub fn negative_prefix(mut self, value: impl Into<String>) -> Self {
        self.cfg.negative_prefix = value.into();
        self
    }

    /// Enables or disables per-document logging.
    #[must_use]
    pub fn show_progress(mut self, enabled: bool) -> Self {
        self.cfg.show_progress = enabled;
        self
    }

    /// Finalises the builder, returning a validated [`TrainerConfig`].
    pub fn build(self) -> Result<TrainerConfig> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}

/// Configuration controlling how the corpus directory is enumerated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorpusConfig {
    /// Enables recursive directory traversal; the default is a flat listing.
    pub recursive: bool,
    /// Follows symlinks encountered during recursive traversal.
    pub follow_symlinks: bool,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            recursive: false,
            follow_symlinks: false,
        }
    }
}

impl CorpusConfig {
    /// Returns a builder initialised with [`CorpusConfig::default`].
    #[must_use]
    pub fn builder() -> CorpusBuilder {
        CorpusBuilder::default()
    }
}

/// Builder for [`CorpusConfig`].
#[derive(Debug, Default, Clone)]
pub struct CorpusBuilder {
    cfg: CorpusConfig,
}

impl CorpusBuilder {
    /// Creates a new builder with [`CorpusConfig::default`] settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables recursive directory traversal.
    #[must_use]
    pub fn recursive(mut self, enabled: bool) -> Self {
        self.cfg.recursive = enabled;
        self
    }

    /// Enables or disables following of symlinks when traversing directories.
    #[must_use]
    pub fn follow_symlinks(mut self, enabled: bool) -> Self {
        self.cfg.follow_symlinks = enabled;
        self
    }

    /// Finalises the builder, returning the [`CorpusConfig`].
    #[must_use]
    pub fn build(self) -> CorpusConfig {
        self.cfg
    }
}

/// Configuration for the [`BayesClassifier`](crate::BayesClassifier) facade:
/// where the corpus lives, where the persisted tables go, and how training
/// behaves when the cache is cold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Directory holding the labeled training documents.
    pub training_dir: PathBuf,
    /// Path of the persisted positive frequency table.
    pub positive_model: PathBuf,
    /// Path of the persisted negative frequency table.
    pub negative_model: PathBuf,
    /// Training behaviour used when no cached model exists.
    pub trainer: TrainerConfig,
    /// Corpus enumeration behaviour.
    pub corpus: CorpusConfig,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            training_dir: PathBuf::from("movie_reviews"),
            positive_model: PathBuf::from("pos.dat"),
            negative_model: PathBuf::from("neg.dat"),
            trainer: TrainerConfig::default(),
            corpus: CorpusConfig::default(),
        }
    }
}

impl ClassifierConfig {
    /// Returns a builder initialised with [`ClassifierConfig::default`].
    #[must_use]
    pub fn builder() -> ClassifierBuilder {
        ClassifierBuilder::default()
    }

    /// Validates the nested trainer configuration.
    pub fn validate(&self) -> Result<()> {
        self.trainer.validate()
    }
}

/// Builder for [`ClassifierConfig`].
#[derive(Debug, Default, Clone)]
pub struct ClassifierBuilder {
    cfg: ClassifierConfig,
}

impl ClassifierBuilder {
    /// Creates a new builder with [`ClassifierConfig::default`] settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the training corpus directory.
    #[must_use]
    pub fn training_dir(mut self, value: impl Into<PathBuf>) -> Self {
        self.cfg.training_dir = value.into();
        self
    }

    /// Sets the persisted positive table path.
    #[must_use]
    pub fn positive_model(mut self, value: impl Into<PathBuf>) -> Self {
        self.cfg.positive_model = value.into();
        self
    }

    /// Sets the persisted negative table path.
    #[must_use]
    pub fn negative_model(mut self, value: impl Into<PathBuf>) -> Self {
        self.cfg.negative_model = value.into();
        self
    }

    /// Overrides the nested trainer configuration.
    #[must_use]
    pub fn trainer(mut self, value: TrainerConfig) -> Self {
        self.cfg.trainer = value;
        self
    }

    /// Overrides the nested corpus configuration.
    #[must_use]
    pub fn corpus(mut self, value: CorpusConfig) -> Self {
        self.cfg.corpus = value;
        self
    }

    /// Finalises the builder, returning a validated [`ClassifierConfig`].
    pub fn build(self) -> Result<ClassifierConfig> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_overrides() {
        let cfg = TrainerConfig::builder()
            .positive_prefix("good-")
            .negative_prefix("bad-")
            .show_progress(false)
            .build()
            .expect("config should be valid");
        assert_eq!(cfg.positive_prefix, "good-");
        assert_eq!(cfg.negative_prefix, "bad-");
        assert!(!cfg.show_progress);
    }

    #[test]
    fn validate_rejects_empty_prefix() {
        let err = TrainerConfig::builder()
            .positive_prefix("")
            .build()
            .expect_err("validation should fail");
        assert!(matches!(
            err,
            SentibayesError::InvalidConfig(message) if message.contains("must not be empty")
        ));
    }

    #[test]
    fn validate_rejects_identical_prefixes() {
        let err = TrainerConfig::builder()
            .positive_prefix("movies-")
            .negative_prefix("movies-")
            .build()
            .expect_err("validation should fail");
        assert!(matches!(err, SentibayesError::InvalidConfig(_)));
    }

    #[test]
    fn classifier_builder_overrides_defaults() {
        let cfg = ClassifierConfig::builder()
            .training_dir("reviews")
            .positive_model("p.json")
            .negative_model("n.json")
            .corpus(CorpusConfig::builder().recursive(true).build())
            .build()
            .expect("config should be valid");
        assert_eq!(cfg.training_dir, PathBuf::from("reviews"));
        assert_eq!(cfg.positive_model, PathBuf::from("p.json"));
        assert!(cfg.corpus.recursive);
    }
}
