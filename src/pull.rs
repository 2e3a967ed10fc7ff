use std::time::Duration;

use airpull::extractor::{ExtractionRequest, Extractor};
use airpull::fetch::HttpFetch;
use airpull::store::FsStore;
use anyhow::{anyhow, Context};
use chrono::NaiveDate;
use clap::Parser;

/// Pull daily AirNow archive files for a date range.
#[derive(Parser, Debug)]
#[command(name = "pull")]
#[command(about = "Pull daily AirNow data files for a date range")]
struct Args {
    /// First date to pull, MM/DD/YYYY
    #[arg(long, value_name = "MM/DD/YYYY")]
    start: String,

    /// Last date to pull (inclusive), MM/DD/YYYY; defaults to the start date
    #[arg(long, value_name = "MM/DD/YYYY")]
    end: Option<String>,

    /// Pull only the start date, whatever --end says
    #[arg(long)]
    ignore_end_date: bool,

    /// Archive root URL
    #[arg(long, default_value = airpull::BASE_URL)]
    base_url: String,

    /// Local directory (must exist and end with a path separator)
    #[arg(long, default_value = airpull::DESTINATION)]
    destination: String,

    /// Filenames to try in order; defaults to v2 then v1
    #[arg(long = "file")]
    files: Vec<String>,

    /// Per-request timeout; the transport default applies when unset
    #[arg(long)]
    timeout_secs: Option<u64>,
}

fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%m/%d/%Y")
        .with_context(|| format!("expected MM/DD/YYYY, got {raw:?}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let args = Args::parse();

    let start_date = parse_date(&args.start)?;
    let end_date = if args.ignore_end_date {
        start_date
    } else {
        match &args.end {
            Some(raw) => parse_date(raw)?,
            None => start_date,
        }
    };

    // Reject a backwards range before touching the extractor
    let delta = (end_date - start_date).num_days();
    if delta < 0 {
        return Err(anyhow!(
            "end date is before start date: the range spans {delta} days"
        ));
    }

    let candidates = if args.files.is_empty() {
        airpull::DEFAULT_FILES.map(str::to_string).to_vec()
    } else {
        args.files
    };

    let fetch = match args.timeout_secs {
        Some(secs) => HttpFetch::with_timeout(Duration::from_secs(secs))?,
        None => HttpFetch::new()?,
    };

    let request = ExtractionRequest {
        base_url: args.base_url,
        destination: args.destination,
        candidates,
        start_date,
        end_date,
    };
    let extractor = Extractor::new(request, fetch, FsStore)?;
    extractor.run().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_us_style_dates() {
        assert_eq!(
            parse_date("03/05/2020").unwrap(),
            NaiveDate::from_ymd_opt(2020, 3, 5).unwrap()
        );
        assert!(parse_date("2020-03-05").is_err());
    }
}
