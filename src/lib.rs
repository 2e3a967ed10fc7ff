use std::path::PathBuf;

use chrono::NaiveDate;

pub mod error;
pub mod extractor;
pub mod fetch;
pub mod store;

// NOTE: First daily_data.dat = 20131022, first daily_data_v2.dat = 20180718
pub const BASE_URL: &str = "https://s3-us-west-1.amazonaws.com//files.airnowtech.org/airnow";
pub const DESTINATION: &str = "./data/daily_data/";

/// Tried in order; v2 first since it carries all the fields.
pub const DEFAULT_FILES: [&str; 2] = ["daily_data_v2.dat", "daily_data.dat"];

/// The archive only serves real data files with exactly this header value,
/// so we match the literal rather than a MIME family.
pub const OCTET_STREAM: &str = "application/octet-stream";

fn date_stamp(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Archive layout is `base/<year>/<yyyymmdd>/<file>`.
pub fn remote_url(base_url: &str, filename: &str, date: NaiveDate) -> String {
    let stamp = date_stamp(date);
    format!("{}/{}/{}/{}", base_url, &stamp[0..4], stamp, filename)
}

/// `daily_data_v2.dat` on 2020-03-05 lands as `daily_data_v2_20200305.dat`
/// inside `destination`, which must already end with a path separator.
pub fn output_path(destination: &str, filename: &str, date: NaiveDate) -> PathBuf {
    let stamp = date_stamp(date);
    let output_name = match filename.split_once('.') {
        Some((stem, ext)) => format!("{}_{}.{}", stem, stamp, ext),
        None => format!("{}_{}", filename, stamp),
    };
    PathBuf::from(format!("{}{}", destination, output_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn url_nests_year_then_day() {
        let url = remote_url("https://example.com/airnow", "daily_data_v2.dat", date(2020, 3, 5));
        assert_eq!(url, "https://example.com/airnow/2020/20200305/daily_data_v2.dat");
    }

    #[test]
    fn output_name_stamps_before_extension() {
        let path = output_path("./data/daily_data/", "daily_data_v2.dat", date(2020, 3, 5));
        assert_eq!(path, PathBuf::from("./data/daily_data/daily_data_v2_20200305.dat"));
    }

    #[test]
    fn extensionless_name_gets_stamp_appended() {
        let path = output_path("./out/", "daily", date(2013, 10, 22));
        assert_eq!(path, PathBuf::from("./out/daily_20131022"));
    }
}
