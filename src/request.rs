use chrono::NaiveDate;
use reqwest::Client;

use crate::{Result, SITE_URL};

/// Requests the corridor table for an inclusive date range and returns the
/// page HTML. The site takes its range as `%d.%m.%Y` query parameters.
pub(crate) async fn fetch_rates_html(
    client: &Client,
    date_from: NaiveDate,
    date_to: NaiveDate,
) -> Result<String> {
    let url = format!(
        "{SITE_URL}?UniDbQuery.Posted=True&UniDbQuery.From={}&UniDbQuery.To={}",
        date_from.format("%d.%m.%Y"),
        date_to.format("%d.%m.%Y"),
    );
    let res = client.get(url).send().await?;
    let html = res.text().await?;
    Ok(html)
}
