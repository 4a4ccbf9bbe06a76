//! Per-class token frequency tables.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Mapping from token to occurrence count for a single document class.
///
/// Tables start empty, grow by increment-on-occurrence, and are never shrunk.
/// Every key present holds a count of at least 1; absent keys are implicitly
/// zero.  The serialized form is a flat JSON object keyed by token, which
/// round-trips exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: FxHashMap<String, u64>,
}

impl FrequencyTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the count of every token in the given sequence.
    ///
    /// Tokens absent from the table are inserted with a count of 1; repeated
    /// tokens within one call accumulate, as do repeated calls.
    pub fn update<S: AsRef<str>>(&mut self, tokens: &[S]) {
        for token in tokens {
            self.increment(token.as_ref());
        }
    }

    /// Increments the count of a single token.
    pub fn increment(&mut self, token: &str) {
        match self.counts.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(token.to_owned(), 1);
            }
        }
    }

    /// Returns the recorded count for a token, or 0 when absent.
    #[must_use]
    pub fn count(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Returns the sum of all counts, i.e. the total number of token
    /// occurrences recorded for this class.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Returns the number of distinct tokens recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` when no tokens have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over `(token, count)` entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(token, &count)| (token.as_str(), count))
    }
}

impl FromIterator<(String, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

/// Updates `table` in place with the given token sequence.
///
/// Free-function form of [`FrequencyTable::update`], kept so the
/// accumulation step can be exercised independently of the trainer.
pub fn update_frequencies<S: AsRef<str>>(tokens: &[S], table: &mut FrequencyTable) {
    table.update(tokens);
}
