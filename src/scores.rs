//! Last/best run persistence
//!
//! A small JSON document on disk. The last run is overwritten on every
//! save; the best run only when its collected count is beaten. A
//! missing or malformed document is "no history" - callers substitute
//! zeros and keep going.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stats for a single finished run
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub collected: u32,
    pub dropped: u32,
    pub time_played: f32,
}

/// The persisted document; both blocks are required on load
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub last_run: RunSummary,
    pub best_run: RunSummary,
}

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("score file i/o: {0}")]
    Io(#[from] io::Error),
    #[error("score file malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// File-backed score store
#[derive(Debug, Clone)]
pub struct ScoreFile {
    path: PathBuf,
}

impl ScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read both blocks; fails if the document or either block is missing
    pub fn load(&self) -> Result<ScoreRecord, ScoreError> {
        let text = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Overwrite the last run; promote the best run when beaten.
    /// Without usable history, both blocks are seeded from this run.
    pub fn save(&self, run: &RunSummary) -> Result<(), ScoreError> {
        let record = match self.load() {
            Ok(mut record) => {
                record.last_run = *run;
                if run.collected > record.best_run.collected {
                    record.best_run = *run;
                }
                record
            }
            Err(err) => {
                log::debug!("starting a fresh score record: {err}");
                ScoreRecord {
                    last_run: *run,
                    best_run: *run,
                }
            }
        };
        fs::write(&self.path, serde_json::to_string_pretty(&record)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (ScoreFile, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        (ScoreFile::new(dir.path().join("score.json")), dir)
    }

    fn run(collected: u32) -> RunSummary {
        RunSummary {
            collected,
            dropped: 2,
            time_played: 30.5,
        }
    }

    #[test]
    fn first_save_seeds_both_blocks() {
        let (store, _dir) = store();
        store.save(&run(3)).unwrap();

        let record = store.load().unwrap();
        assert_eq!(record.last_run, run(3));
        assert_eq!(record.best_run, run(3));
    }

    #[test]
    fn best_run_is_promoted_only_when_beaten() {
        let (store, _dir) = store();
        store.save(&run(7)).unwrap();

        store.save(&run(10)).unwrap();
        let record = store.load().unwrap();
        assert_eq!(record.last_run.collected, 10);
        assert_eq!(record.best_run.collected, 10);

        store.save(&run(5)).unwrap();
        let record = store.load().unwrap();
        assert_eq!(record.last_run.collected, 5);
        assert_eq!(record.best_run.collected, 10);
    }

    #[test]
    fn missing_file_fails_to_load() {
        let (store, _dir) = store();
        assert!(matches!(store.load(), Err(ScoreError::Io(_))));
    }

    #[test]
    fn malformed_file_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("score.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = ScoreFile::new(&path);
        assert!(matches!(store.load(), Err(ScoreError::Malformed(_))));
    }

    #[test]
    fn document_missing_a_block_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("score.json");
        std::fs::write(&path, r#"{"last_run":{"collected":1,"dropped":0,"time_played":1.0}}"#)
            .unwrap();

        let store = ScoreFile::new(&path);
        assert!(matches!(store.load(), Err(ScoreError::Malformed(_))));
    }

    #[test]
    fn saving_over_garbage_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("score.json");
        std::fs::write(&path, "{{{{").unwrap();

        let store = ScoreFile::new(&path);
        store.save(&run(2)).unwrap();
        assert_eq!(store.load().unwrap().best_run.collected, 2);
    }
}
