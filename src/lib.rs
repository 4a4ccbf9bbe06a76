//! Naive Bayes sentiment classification library and CLI.
//!
//! The crate exposes both a library API and a `sentibayes` command line
//! interface for training bag-of-words sentiment models over a directory of
//! labeled text documents.  Filenames carry the class labels: documents whose
//! names start with the positive prefix feed the positive frequency table,
//! the negative prefix feeds the negative table, and everything else is
//! skipped.  Trained tables are persisted as JSON and reloaded on subsequent
//! runs in place of retraining.
//!
//! ```no_run
//! use sentibayes::{BayesClassifier, ClassifierConfig, Label};
//!
//! # fn main() -> sentibayes::Result<()> {
//! let cfg = ClassifierConfig::builder()
//!     .training_dir("movie_reviews")
//!     .positive_model("pos.dat")
//!     .negative_model("neg.dat")
//!     .build()?;
//! let classifier = BayesClassifier::open(cfg)?;
//! assert_eq!(classifier.classify("what a great movie")?, Label::Positive);
//! # Ok(())
//! # }
//! ```
//!
//! The CLI is enabled by default through the `cli` feature.  Users targeting
//! the library portion only can disable default features to avoid the CLI
//! dependencies: `sentibayes = { version = "...", default-features = false }`.

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    clippy::all,
    rust_2018_idioms,
    future_incompatible,
    unused_lifetimes,
    unreachable_pub
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::doc_markdown,
    clippy::multiple_crate_versions
)]

pub mod classifier;
pub mod config;
pub mod corpus;
pub mod error;
pub mod freq;
pub mod metrics;
pub mod serialization;
pub mod tokenize;
pub mod trainer;

pub use classifier::{BayesClassifier, BayesModel, Label, Scores};
pub use config::{ClassifierConfig, CorpusConfig, TrainerBuilder, TrainerConfig};
pub use corpus::Document;
pub use error::{Result, SentibayesError};
pub use freq::{update_frequencies, FrequencyTable};
pub use metrics::TrainingMetrics;
pub use tokenize::tokenize;
pub use trainer::{Trainer, TrainerArtifacts};
