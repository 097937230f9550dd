//! Turns the sparse parsed table into a gap-free daily series.
//!
//! The bank only publishes rows for trading days. Queries want an answer for
//! every calendar day, so gaps (weekends, holidays) are filled by carrying
//! the most recent known record forward.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::record::RateRecord;
use crate::{Error, Result};

/// Date-ordered mapping of days to corridor records.
pub type RateSeries = BTreeMap<NaiveDate, RateRecord>;

/// Saturates a parsed series over its own first..=last date span.
pub fn saturate(parsed: &RateSeries) -> Result<RateSeries> {
    let (first, last) = match (parsed.first_key_value(), parsed.last_key_value()) {
        (Some((first, _)), Some((last, _))) => (*first, *last),
        _ => return Err(Error::SaturateEmptySeries),
    };
    saturate_range(parsed, first, last)
}

/// Saturates over an explicit inclusive range: every day in `from..=to` gets
/// an entry, either the parsed record or a copy of the nearest preceding one.
/// `from` itself must have a parsed record; forward-fill has nothing to carry
/// before the first known value.
pub fn saturate_range(parsed: &RateSeries, from: NaiveDate, to: NaiveDate) -> Result<RateSeries> {
    let mut last_seen = parsed.get(&from).ok_or(Error::SaturationStart(from))?;

    let mut saturated = RateSeries::new();
    let mut day = from;
    while day <= to {
        if let Some(record) = parsed.get(&day) {
            last_seen = record;
        }
        saturated.insert(day, last_seen.clone());
        day += Duration::days(1);
    }
    Ok(saturated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(key_rate: rust_decimal::Decimal) -> RateRecord {
        RateRecord {
            key_rate: Some(key_rate),
            lower_limit_deposits: Some(key_rate - dec!(1)),
            upper_limit_repo: Some(key_rate + dec!(1)),
            upper_limit_credits: Some(key_rate + dec!(1.75)),
            miacr: None,
            ruonia: Some(key_rate - dec!(0.29)),
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 5, d).unwrap()
    }

    #[test]
    fn fills_the_gap_with_the_preceding_record() {
        let mut parsed = RateSeries::new();
        parsed.insert(day(1), record(dec!(7.50)));
        parsed.insert(day(3), record(dec!(8.00)));

        let saturated = saturate(&parsed).unwrap();

        assert_eq!(saturated.len(), 3);
        assert_eq!(saturated[&day(2)], saturated[&day(1)]);
        assert_eq!(saturated[&day(3)], record(dec!(8.00)));
    }

    #[test]
    fn one_entry_per_calendar_day() {
        let mut parsed = RateSeries::new();
        parsed.insert(day(1), record(dec!(7.50)));
        parsed.insert(day(4), record(dec!(7.75)));
        parsed.insert(day(9), record(dec!(8.00)));

        let saturated = saturate_range(&parsed, day(1), day(12)).unwrap();

        assert_eq!(saturated.len(), 12);
        let mut expected = day(1);
        for date in saturated.keys() {
            assert_eq!(*date, expected);
            expected += Duration::days(1);
        }
        // Fill runs past the last parsed day too.
        assert_eq!(saturated[&day(12)], record(dec!(8.00)));
    }

    #[test]
    fn all_fields_are_carried_together() {
        let mut parsed = RateSeries::new();
        parsed.insert(day(5), record(dec!(12.00)));

        let saturated = saturate_range(&parsed, day(5), day(8)).unwrap();
        for date in [day(6), day(7), day(8)] {
            assert_eq!(saturated[&date], parsed[&day(5)]);
        }
    }

    #[test]
    fn range_start_without_a_record_is_an_error() {
        let mut parsed = RateSeries::new();
        parsed.insert(day(3), record(dec!(7.50)));

        let err = saturate_range(&parsed, day(1), day(3)).unwrap_err();
        assert!(matches!(err, Error::SaturationStart(date) if date == day(1)));
    }

    #[test]
    fn empty_series_is_an_error() {
        let parsed = RateSeries::new();
        assert!(matches!(
            saturate(&parsed),
            Err(Error::SaturateEmptySeries)
        ));
    }

    #[test]
    fn single_day_range_is_the_identity() {
        let mut parsed = RateSeries::new();
        parsed.insert(day(1), record(dec!(7.50)));

        let saturated = saturate_range(&parsed, day(1), day(1)).unwrap();
        assert_eq!(saturated, parsed);
    }
}
