use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::Error;
use crate::fetch::Fetch;
use crate::store::Store;
use crate::{output_path, remote_url, OCTET_STREAM};

/// Everything one pull run needs. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    /// Archive root, no trailing slash.
    pub base_url: String,
    /// Local directory, trailing separator included (caller's contract).
    pub destination: String,
    /// Filenames tried in order for each date.
    pub candidates: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// What happened for a single date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyOutcome {
    pub date: NaiveDate,
    /// Path of the file written, or `None` if every candidate missed.
    pub saved: Option<PathBuf>,
}

pub struct Extractor<F, S> {
    request: ExtractionRequest,
    fetch: F,
    store: S,
}

impl<F: Fetch, S: Store> Extractor<F, S> {
    pub fn new(request: ExtractionRequest, fetch: F, store: S) -> Result<Self, Error> {
        if request.candidates.is_empty() {
            return Err(Error::NoCandidates);
        }
        let delta = (request.end_date - request.start_date).num_days();
        if delta < 0 {
            return Err(Error::InvalidRange {
                start: request.start_date,
                end: request.end_date,
                delta,
            });
        }
        Ok(Self {
            request,
            fetch,
            store,
        })
    }

    /// Walks the range one calendar day at a time, printing one line per
    /// date as it resolves. Only a failed write stops the run early.
    pub async fn run(&self) -> Result<(), Error> {
        let mut date = self.request.start_date;
        while date <= self.request.end_date {
            match self.pull_date(date).await? {
                DailyOutcome {
                    saved: Some(path), ..
                } => println!("Saved file to: {}", path.display()),
                DailyOutcome { saved: None, .. } => {
                    println!("No files available for: {}", date.format("%m/%d/%Y"))
                }
            }
            // succ_opt only fails at the far end of the calendar
            date = date.succ_opt().expect("date out of range");
        }
        Ok(())
    }

    /// Tries each candidate in order and writes the first hit. Transport
    /// faults and bad responses just fall through to the next candidate;
    /// each date starts with a clean slate.
    async fn pull_date(&self, date: NaiveDate) -> Result<DailyOutcome, Error> {
        for name in &self.request.candidates {
            let url = remote_url(&self.request.base_url, name, date);
            let resp = match self.fetch.fetch(&url).await {
                Ok(resp) => resp,
                Err(e) => {
                    debug!("transport fault for {url}: {e}");
                    continue;
                }
            };
            if resp.status != 200 || resp.content_type != OCTET_STREAM {
                debug!(
                    "no usable file at {url} (status {}, content-type {:?})",
                    resp.status, resp.content_type
                );
                continue;
            }
            let path = output_path(&self.request.destination, name, date);
            self.store.write(&path, &resp.body).await?;
            return Ok(DailyOutcome {
                date,
                saved: Some(path),
            });
        }
        Ok(DailyOutcome { date, saved: None })
    }
}
