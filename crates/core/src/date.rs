use chrono::NaiveDate;
use thiserror::Error;

const INPUT_FORMAT: &str = "%d/%m/%Y";
const OUTPUT_FORMAT: &str = "%Y%m%d";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("'{value}' is not a DD/MM/YYYY date")]
pub struct DateFormatError {
    pub value: String,
}

/// `DD/MM/YYYY` to `YYYYMMDD`. The shape is checked before the calendar so
/// `5/3/2024` or ` 05/03/2024` are rejected even though chrono would accept them.
pub fn normalize_date(input: &str) -> Result<String, DateFormatError> {
    let err = || DateFormatError {
        value: input.to_string(),
    };

    if !has_date_shape(input) {
        return Err(err());
    }

    NaiveDate::parse_from_str(input, INPUT_FORMAT)
        .map(|date| date.format(OUTPUT_FORMAT).to_string())
        .map_err(|_| err())
}

pub fn normalize_all(groups: &[String]) -> Result<Vec<String>, DateFormatError> {
    groups.iter().map(|group| normalize_date(group)).collect()
}

fn has_date_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            _ => b.is_ascii_digit(),
        })
}
