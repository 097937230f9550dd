use chrono::{Duration, Local};
use cbr_rates::{info_time, process::scrape_rate_corridor, record::RateField, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let start_time = Local::now();
    let db = scrape_rate_corridor().await?;

    // A few sample queries against the freshly scraped series.
    let today = Local::now().date_naive();
    println!(
        "deposit floor a month ago: {:?}",
        db.value_at(RateField::LowerLimitDeposits, today - Duration::days(30))
    );
    println!(
        "latest repo ceiling: {:?}",
        db.latest_value(RateField::UpperLimitRepo)
    );
    println!(
        "credit ceiling over the last week: {:?}",
        db.values_in_range(
            RateField::UpperLimitCredits,
            today - Duration::days(7),
            today,
        )
    );

    info_time!(start_time, "Full program time:");

    Ok(())
}
