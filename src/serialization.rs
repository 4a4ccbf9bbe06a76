//! JSON persistence for frequency tables and the two-file model.
//!
//! Each class table is stored as a flat JSON object mapping token to count,
//! one file per class.  The format round-trips every key/value pair exactly
//! and retrieval is order-independent.

use std::fs;
use std::path::Path;

use crate::classifier::BayesModel;
use crate::error::{Result, SentibayesError};
use crate::freq::FrequencyTable;

/// Serialises a frequency table to the given path, overwriting any prior
/// contents.
pub fn save_table<P: AsRef<Path>>(table: &FrequencyTable, path: P, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(table)?
    } else {
        serde_json::to_string(table)?
    };
    fs::write(path.as_ref(), json)
        .map_err(|err| SentibayesError::io(err, Some(path.as_ref().to_path_buf())))
}

/// Loads a frequency table previously written by [`save_table`].
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<FrequencyTable> {
    let data = fs::read_to_string(path.as_ref())
        .map_err(|err| SentibayesError::io(err, Some(path.as_ref().to_path_buf())))?;
    Ok(serde_json::from_str(&data)?)
}

/// Persists both class tables of a model.
pub fn save_model<P: AsRef<Path>>(
    model: &BayesModel,
    positive_path: P,
    negative_path: P,
    pretty: bool,
) -> Result<()> {
    save_table(model.positive(), positive_path, pretty)?;
    save_table(model.negative(), negative_path, pretty)
}

/// Loads a model from its two persisted class tables.
pub fn load_model<P: AsRef<Path>>(positive_path: P, negative_path: P) -> Result<BayesModel> {
    let positive = load_table(positive_path)?;
    let negative = load_table(negative_path)?;
    Ok(BayesModel::new(positive, negative))
}

/// Returns `true` when both persisted table files exist, i.e. a cached model
/// is available to load in place of retraining.
pub fn model_files_exist<P: AsRef<Path>>(positive_path: P, negative_path: P) -> bool {
    positive_path.as_ref().is_file() && negative_path.as_ref().is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn table_round_trips_exactly() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("pos.dat");
        let mut table = FrequencyTable::new();
        table.update(&["love", "love", "it", "!"]);

        save_table(&table, &path, false).expect("save");
        let restored = load_table(&path).expect("load");
        assert_eq!(restored, table);
    }

    #[test]
    fn pretty_output_is_loadable() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("pos.dat");
        let mut table = FrequencyTable::new();
        table.update(&["fine"]);

        save_table(&table, &path, true).expect("save pretty");
        assert_eq!(load_table(&path).expect("load"), table);
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("pos.dat");
        let mut first = FrequencyTable::new();
        first.update(&["stale", "stale"]);
        save_table(&first, &path, false).expect("save first");

        let mut second = FrequencyTable::new();
        second.update(&["fresh"]);
        save_table(&second, &path, false).expect("save second");
        assert_eq!(load_table(&path).expect("load"), second);
    }

    #[test]
    fn model_files_exist_requires_both() {
        let dir = tempdir().expect("tempdir");
        let pos = dir.path().join("pos.dat");
        let neg = dir.path().join("neg.dat");
        assert!(!model_files_exist(&pos, &neg));

        save_table(&FrequencyTable::new(), &pos, false).expect("save pos");
        assert!(!model_files_exist(&pos, &neg));

        save_table(&FrequencyTable::new(), &neg, false).expect("save neg");
        assert!(model_files_exist(&pos, &neg));
    }

    #[test]
    fn load_reports_missing_file_with_path() {
        let dir = tempdir().expect("tempdir");
        let missing = dir.path().join("absent.dat");
        let err = load_table(&missing).expect_err("should fail");
        assert!(matches!(
            err,
            SentibayesError::Io { path: Some(path), .. } if path == missing
        ));
    }
}
