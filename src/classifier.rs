//! Model types and the load-or-train classifier facade.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::ClassifierConfig;
use crate::error::{Result, SentibayesError};
use crate::freq::FrequencyTable;
use crate::metrics::TrainingMetrics;
use crate::serialization::{load_model, model_files_exist, save_model};
use crate::tokenize::tokenize;
use crate::trainer::Trainer;

/// Sentiment label assigned to classified text.
///
/// Classification is a forced binary choice; there is no neutral outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// The text scored higher under the positive frequency model.
    Positive,
    /// The text scored at or below the negative model's score.
    Negative,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Label::Positive => "positive",
            Label::Negative => "negative",
        };
        f.write_str(label)
    }
}

impl FromStr for Label {
    type Err = SentibayesError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "positive" => Ok(Label::Positive),
            "negative" => Ok(Label::Negative),
            other => Err(SentibayesError::InvalidConfig(format!(
                "unknown label {other:?}; expected \"positive\" or \"negative\""
            ))),
        }
    }
}

/// Smoothed log-likelihood sums for one classified input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    /// Sum of per-token log-probabilities under the positive model.
    pub positive: f64,
    /// Sum of per-token log-probabilities under the negative model.
    pub negative: f64,
}

impl Scores {
    /// Resolves the score pair into a label.  Ties resolve to
    /// [`Label::Negative`].
    #[must_use]
    pub fn label(&self) -> Label {
        if self.positive > self.negative {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}

/// Trained Naive Bayes model: one frequency table per class.
#[must_use]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BayesModel {
    positive: FrequencyTable,
    negative: FrequencyTable,
}

impl BayesModel {
    /// Constructs a model from previously accumulated tables.
    pub fn new(positive: FrequencyTable, negative: FrequencyTable) -> Self {
        Self { positive, negative }
    }

    /// Returns the positive-class frequency table.
    #[must_use]
    pub fn positive(&self) -> &FrequencyTable {
        &self.positive
    }

    /// Returns the negative-class frequency table.
    #[must_use]
    pub fn negative(&self) -> &FrequencyTable {
        &self.negative
    }

    /// Computes the smoothed log-likelihood of the text under both class
    /// models.
    ///
    /// Each token contributes `ln((1 + count) / total)` per class: add-one
    /// smoothing keeps unseen tokens from zeroing the product, and summing
    /// logs instead of multiplying probabilities avoids underflow on long
    /// inputs.  Both denominators are fixed for the whole call.
    ///
    /// Fails with [`SentibayesError::ModelNotTrained`] when either table is
    /// empty, since an empty class has no denominator.
    pub fn scores(&self, text: &str) -> Result<Scores> {
        let num_pos_words = self.positive.total();
        let num_neg_words = self.negative.total();
        if num_pos_words == 0 {
            return Err(SentibayesError::ModelNotTrained {
                class: Label::Positive.to_string(),
            });
        }
        if num_neg_words == 0 {
            return Err(SentibayesError::ModelNotTrained {
                class: Label::Negative.to_string(),
            });
        }

        let mut positive = 0.0f64;
        let mut negative = 0.0f64;
        for token in tokenize(text) {
            let pos_count = (1 + self.positive.count(&token)) as f64;
            positive += (pos_count / num_pos_words as f64).ln();
            let neg_count = (1 + self.negative.count(&token)) as f64;
            negative += (neg_count / num_neg_words as f64).ln();
        }
        Ok(Scores { positive, negative })
    }

    /// Classifies the text as positive or negative.
    pub fn classify(&self, text: &str) -> Result<Label> {
        Ok(self.scores(text)?.label())
    }

    /// Persists both tables to the given paths, overwriting prior contents.
    pub fn save<P: AsRef<Path>>(&self, positive_path: P, negative_path: P) -> Result<()> {
        save_model(self, positive_path, negative_path, false)
    }

    /// Loads a model from two previously persisted tables.
    pub fn load<P: AsRef<Path>>(positive_path: P, negative_path: P) -> Result<Self> {
        load_model(positive_path, negative_path)
    }
}

/// High-level classifier that owns a trained model and the configuration it
/// was built from.
///
/// The constructor makes the cache decision: when both persisted tables
/// already exist they are loaded verbatim, otherwise the corpus is trained
/// and the resulting tables persisted for subsequent runs.
#[must_use]
#[derive(Debug, Clone)]
pub struct BayesClassifier {
    model: BayesModel,
    cfg: ClassifierConfig,
}

impl BayesClassifier {
    /// Loads the cached model if present, training and persisting it
    /// otherwise.
    pub fn open(cfg: ClassifierConfig) -> Result<Self> {
        cfg.validate()?;
        if model_files_exist(&cfg.positive_model, &cfg.negative_model) {
            info!(
                "model files found, loading cached tables from {} and {}",
                cfg.positive_model.display(),
                cfg.negative_model.display()
            );
            let model = BayesModel::load(&cfg.positive_model, &cfg.negative_model)?;
            return Ok(Self { model, cfg });
        }
        info!("model files not found, training from {}", cfg.training_dir.display());
        let (classifier, _) = Self::train(cfg)?;
        Ok(classifier)
    }

    /// Trains from the configured corpus and persists the tables, ignoring
    /// any existing cache.
    pub fn train(cfg: ClassifierConfig) -> Result<(Self, TrainingMetrics)> {
        let trainer = Trainer::new(cfg.trainer.clone());
        let artifacts = trainer.train_from_dir(&cfg.training_dir, &cfg.corpus)?;
        artifacts
            .model
            .save(&cfg.positive_model, &cfg.negative_model)?;
        let classifier = Self {
            model: artifacts.model,
            cfg,
        };
        Ok((classifier, artifacts.metrics))
    }

    /// Returns the trained model.
    #[must_use]
    pub fn model(&self) -> &BayesModel {
        &self.model
    }

    /// Returns the configuration the classifier was opened with.
    #[must_use]
    pub fn config(&self) -> &ClassifierConfig {
        &self.cfg
    }

    /// Computes log-likelihood scores for the text.
    pub fn scores(&self, text: &str) -> Result<Scores> {
        self.model.scores(text)
    }

    /// Classifies the text as positive or negative.
    pub fn classify(&self, text: &str) -> Result<Label> {
        self.model.classify(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn table(entries: &[(&str, u64)]) -> FrequencyTable {
        entries
            .iter()
            .map(|&(token, count)| (token.to_owned(), count))
            .collect()
    }

    #[test]
    fn smoothing_favors_the_class_with_more_occurrences() {
        // ln(6/100) vs ln(2/100) for the single token "love".
        let model = BayesModel::new(
            table(&[("love", 5), ("filler", 95)]),
            table(&[("love", 1), ("filler", 99)]),
        );
        assert_eq!(model.classify("love").unwrap(), Label::Positive);
    }

    #[test]
    fn unseen_tokens_still_score_via_pseudo_counts() {
        let model = BayesModel::new(table(&[("great", 10)]), table(&[("awful", 10)]));
        let scores = model.scores("mediocre").expect("scores");
        assert!(scores.positive.is_finite());
        assert!(scores.negative.is_finite());
    }

    #[test]
    fn tie_resolves_to_negative() {
        // Empty input scores 0 under both models regardless of contents.
        let model = BayesModel::new(table(&[("a", 3)]), table(&[("b", 7)]));
        let scores = model.scores("").expect("scores");
        assert_eq!(scores.positive, scores.negative);
        assert_eq!(scores.label(), Label::Negative);
    }

    #[test]
    fn empty_table_is_a_precondition_failure() {
        let model = BayesModel::new(FrequencyTable::new(), table(&[("bad", 1)]));
        let err = model.classify("anything").expect_err("should fail");
        assert!(matches!(
            err,
            SentibayesError::ModelNotTrained { class } if class == "positive"
        ));
    }

    #[test]
    fn label_round_trips_through_display_and_from_str() {
        assert_eq!(Label::Positive.to_string(), "positive");
        assert_eq!("negative".parse::<Label>().unwrap(), Label::Negative);
        assert!("neutral".parse::<Label>().is_err());
    }

    fn write_corpus(dir: &Path) {
        fs::write(dir.join("movies-5-a.txt"), "I love this great movie").expect("write pos");
        fs::write(dir.join("movies-1-b.txt"), "I hate this awful movie").expect("write neg");
    }

    fn corpus_config(dir: &Path) -> ClassifierConfig {
        ClassifierConfig::builder()
            .training_dir(dir.join("reviews"))
            .positive_model(dir.join("pos.dat"))
            .negative_model(dir.join("neg.dat"))
            .trainer(
                crate::config::TrainerConfig::builder()
                    .show_progress(false)
                    .build()
                    .expect("trainer config"),
            )
            .build()
            .expect("classifier config")
    }

    #[test]
    fn open_trains_then_reuses_the_cache() {
        let dir = tempdir().expect("tempdir");
        let reviews = dir.path().join("reviews");
        fs::create_dir(&reviews).expect("create reviews");
        write_corpus(&reviews);
        let cfg = corpus_config(dir.path());

        let first = BayesClassifier::open(cfg.clone()).expect("first open trains");
        assert!(cfg.positive_model.exists());
        assert!(cfg.negative_model.exists());
        assert_eq!(first.classify("love love love").unwrap(), Label::Positive);

        // Mutating the corpus must not affect a cached second open.
        fs::write(reviews.join("movies-5-c.txt"), "more praise").expect("write extra");
        let second = BayesClassifier::open(cfg).expect("second open loads");
        assert_eq!(second.model(), first.model());
    }

    #[test]
    fn open_surfaces_missing_corpus() {
        let dir = tempdir().expect("tempdir");
        let cfg = corpus_config(dir.path());
        let err = BayesClassifier::open(cfg).expect_err("no corpus, no cache");
        assert!(matches!(err, SentibayesError::CorpusNotFound { .. }));
    }
}
