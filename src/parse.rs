//! Extracts the corridor table out of the scraped page.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use scraper::{Html, Selector};

use crate::record::RateRecord;
use crate::saturate::RateSeries;
use crate::{Error, Result};

/// Date column + six value columns.
const TABLE_COLUMNS: usize = 7;
/// How the site renders a cell with no published value.
const EMPTY_CELL: &str = "—";

/// Parses the page into a date-keyed map of corridor records.
/// Rows without `<td>` cells (the two header rows) are skipped; every data
/// row must carry all seven columns.
pub fn parse_rates_table(html: &str) -> Result<RateSeries> {
    let doc = Html::parse_document(html);

    let table_selector = create_selector(r#"table[class="data spaced"]"#)?;
    let row_selector = create_selector("tr")?;
    let cell_selector = create_selector("td")?;

    let table = doc
        .select(&table_selector)
        .next()
        .ok_or_else(|| Error::ParseMissingSelector(r#"table[class="data spaced"]"#.into()))?;

    let mut data = RateSeries::new();
    for row in table.select(&row_selector) {
        let cells = row
            .select(&cell_selector)
            .map(|cell| cell.text().collect::<String>().trim().to_owned())
            .collect::<Vec<_>>();
        if cells.is_empty() {
            continue;
        }
        if cells.len() != TABLE_COLUMNS {
            return Err(Error::ParseRowShape {
                expected: TABLE_COLUMNS,
                got: cells.len(),
            });
        }

        let day = NaiveDate::parse_from_str(&cells[0], "%d.%m.%Y")?;
        let record = RateRecord {
            key_rate: parse_cell(&cells[1])?,
            lower_limit_deposits: parse_cell(&cells[2])?,
            upper_limit_repo: parse_cell(&cells[3])?,
            upper_limit_credits: parse_cell(&cells[4])?,
            miacr: parse_cell(&cells[5])?,
            ruonia: parse_cell(&cells[6])?,
        };
        data.insert(day, record);
    }

    if data.is_empty() {
        return Err(Error::ParseEmptyTable);
    }
    Ok(data)
}

/// The site uses a decimal comma; an em-dash marks a day with no value.
fn parse_cell(cell: &str) -> Result<Option<Decimal>> {
    if cell == EMPTY_CELL || cell.is_empty() {
        return Ok(None);
    }
    Ok(Some(cell.replace(',', ".").parse::<Decimal>()?))
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::ParseMissingSelector(sel_str.into()))
}
