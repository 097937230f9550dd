use chrono::NaiveDate;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The selector you are trying to scrape for is missing. Selector: {0}")]
    ParseMissingSelector(String),
    #[error("The rates table contains no parseable rows.")]
    ParseEmptyTable,
    #[error("Malformed table row: expected {expected} columns, got {got}.")]
    ParseRowShape { expected: usize, got: usize },
    #[error("Couldn't parse a table date: {0}")]
    ParseDate(#[from] chrono::ParseError),
    #[error("Couldn't parse a rate value: {0}")]
    ParseDecimal(#[from] rust_decimal::Error),

    #[error("No parsed record at the start of the saturation range: {0}")]
    SaturationStart(NaiveDate),
    #[error("Cannot saturate an empty series.")]
    SaturateEmptySeries,

    #[error("Trader INN {0} is missing from the traders collection.")]
    UnknownTrader(String),

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Json Error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Csv Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
