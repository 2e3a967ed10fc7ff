use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Fatal errors for a pull run. Anything recoverable (a miss on one
/// candidate file for one date) never surfaces here.
#[derive(Error, Debug)]
pub enum Error {
    /// End date precedes start date; caught before any date is visited.
    #[error("end date {end} is before start date {start} ({delta} days)")]
    InvalidRange {
        start: NaiveDate,
        end: NaiveDate,
        delta: i64,
    },

    /// Nothing to try for any date.
    #[error("no candidate filenames were given")]
    NoCandidates,

    /// Local write failed; aborts the run, files already written stay.
    #[error("could not save {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One fetch attempt failed at the transport level. The extractor treats
/// this the same as a bad status code: move on to the next candidate.
#[derive(Error, Debug)]
#[error("request failed: {0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError(err.to_string())
    }
}
