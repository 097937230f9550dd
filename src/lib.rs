//! CBR RATE CORRIDOR SCRAPER + TRADER BATCH JOBS
//!
//! Two independent pipelines share this crate:
//! - `process` scrapes the Bank of Russia interest-rate corridor table,
//!   saturates it into a gap-free daily series and persists it; `store`
//!   answers lookups against the persisted file.
//! - `traders` + `emails` join trader records by INN and mine bankruptcy
//!   messages for email addresses.

mod error;
mod macros;
mod request;

pub mod emails;
pub mod parse;
pub mod process;
pub mod record;
pub mod saturate;
pub mod store;
pub mod traders;

pub use error::{Error, Result};

/// Corridor table endpoint; takes an inclusive date range as query params.
pub const SITE_URL: &str = "https://www.cbr.ru/hd_base/ProcStav/IRB_OMMIR/";
/// How far back from today a scrape reaches.
pub const HISTORY_DAYS: i64 = 365;
pub const RATES_FILE_PATH: &str = "parsed_data/rate_corridor.json";

pub const TRADERS_LIST_PATH: &str = "traders.txt";
pub const TRADERS_DATA_PATH: &str = "traders.json";
pub const TRADERS_CSV_PATH: &str = "traders.csv";
pub const MESSAGES_PATH: &str = "1000_efrsb_messages.json";
pub const EMAILS_PATH: &str = "emails.json";
