use std::path::Path;

use chrono::{Duration, Local};

use crate::parse::parse_rates_table;
use crate::request::fetch_rates_html;
use crate::saturate::saturate;
use crate::store::{save_series, RateDb};
use crate::{info_time, Result, HISTORY_DAYS, RATES_FILE_PATH};

/// Runs the whole rate pipeline: one GET for the last year of the corridor
/// table, parse, saturate, save. Returns a reader over the freshly written
/// file. Any failure aborts the run; nothing partial is saved.
pub async fn scrape_rate_corridor() -> Result<RateDb> {
    let start_time = Local::now();
    let client = reqwest::Client::new();

    let date_to = Local::now().date_naive();
    let date_from = date_to - Duration::days(HISTORY_DAYS);
    info_time!("Requesting rates from {} to {}", date_from, date_to);
    let html = fetch_rates_html(&client, date_from, date_to).await?;

    let parsed = parse_rates_table(&html)?;
    info_time!("Parsed {} trading days", parsed.len());

    let saturated = saturate(&parsed)?;
    save_series(&saturated, Path::new(RATES_FILE_PATH))?;
    info_time!(start_time, "Saved {} days to {RATES_FILE_PATH}", saturated.len());

    RateDb::load(Path::new(RATES_FILE_PATH))
}
