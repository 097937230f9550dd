use std::path::Path;

use chrono::Local;

use cbr_rates::emails::export_publisher_emails;
use cbr_rates::traders::export_matched_traders;
use cbr_rates::{
    info_time, Result, EMAILS_PATH, MESSAGES_PATH, TRADERS_CSV_PATH, TRADERS_DATA_PATH,
    TRADERS_LIST_PATH,
};

fn main() -> Result<()> {
    let start_time = Local::now();

    export_matched_traders(
        Path::new(TRADERS_LIST_PATH),
        Path::new(TRADERS_DATA_PATH),
        Path::new(TRADERS_CSV_PATH),
    )?;
    info_time!("Wrote matched traders to {TRADERS_CSV_PATH}");

    export_publisher_emails(Path::new(MESSAGES_PATH), Path::new(EMAILS_PATH))?;
    info_time!("Wrote publisher emails to {EMAILS_PATH}");

    info_time!(start_time, "Full program time:");

    Ok(())
}
