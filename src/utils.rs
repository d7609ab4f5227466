use chrono::{Local, NaiveDate};
use directories::BaseDirs;
use log::warn;
use std::path::PathBuf;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn get_current_date() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn get_home_dir() -> PathBuf {
    match BaseDirs::new() {
        Some(dirs) => dirs.home_dir().to_path_buf(),
        None => {
            warn!("could not determine home directory, falling back to `.`");
            PathBuf::from(".")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_are_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(format_date(date), "2024-03-01");
    }
}
