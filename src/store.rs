//! Persistence for the saturated series and the read-only query surface.

use std::fs;
use std::path::Path;

use chrono::{Duration, NaiveDate};

use crate::record::{Lookup, RateField};
use crate::saturate::RateSeries;
use crate::Result;

/// Writes the series to `path` as one JSON document: ISO-8601 date keys,
/// field names to decimal strings (or null). Whole-file overwrite.
pub fn save_series(series: &RateSeries, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, serde_json::to_string(series)?)?;
    Ok(())
}

/// Read-only view over a persisted rate series.
#[derive(Debug)]
pub struct RateDb {
    data: RateSeries,
}

impl RateDb {
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let data = serde_json::from_str(&json)?;
        Ok(RateDb { data })
    }

    pub fn from_series(data: RateSeries) -> Self {
        RateDb { data }
    }

    /// Value of `field` on `day`; `NoData` when the day is outside the
    /// stored range.
    pub fn value_at(&self, field: RateField, day: NaiveDate) -> Lookup {
        match self.data.get(&day) {
            Some(record) => Lookup::Value(record.field(field)),
            None => Lookup::NoData,
        }
    }

    /// Value of `field` on the most recent stored day.
    pub fn latest_value(&self, field: RateField) -> Lookup {
        match self.data.last_key_value() {
            Some((_, record)) => Lookup::Value(record.field(field)),
            None => Lookup::NoData,
        }
    }

    /// One value per calendar day of the inclusive range, in date order.
    /// An inverted range yields an empty list.
    pub fn values_in_range(&self, field: RateField, from: NaiveDate, to: NaiveDate) -> Vec<Lookup> {
        let mut values = Vec::new();
        let mut day = from;
        while day <= to {
            values.push(self.value_at(field, day));
            day += Duration::days(1);
        }
        values
    }

    /// `value_at` for callers holding a field name instead of a `RateField`.
    /// An unrecognized name answers `InvalidField`.
    pub fn value_at_named(&self, name: &str, day: NaiveDate) -> Lookup {
        match name.parse() {
            Ok(field) => self.value_at(field, day),
            Err(_) => Lookup::InvalidField,
        }
    }

    pub fn latest_value_named(&self, name: &str) -> Lookup {
        match name.parse() {
            Ok(field) => self.latest_value(field),
            Err(_) => Lookup::InvalidField,
        }
    }

    pub fn values_in_range_named(&self, name: &str, from: NaiveDate, to: NaiveDate) -> Vec<Lookup> {
        let mut values = Vec::new();
        let mut day = from;
        while day <= to {
            values.push(self.value_at_named(name, day));
            day += Duration::days(1);
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RateRecord;
    use rust_decimal_macros::dec;

    fn record(ruonia: rust_decimal::Decimal) -> RateRecord {
        RateRecord {
            key_rate: Some(dec!(16.00)),
            lower_limit_deposits: Some(dec!(15.00)),
            upper_limit_repo: Some(dec!(17.00)),
            upper_limit_credits: Some(dec!(17.75)),
            miacr: None,
            ruonia: Some(ruonia),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_db() -> RateDb {
        let mut series = RateSeries::new();
        series.insert(day(2024, 1, 8), record(dec!(15.81)));
        series.insert(day(2024, 1, 9), record(dec!(15.84)));
        series.insert(day(2024, 1, 10), record(dec!(15.92)));
        RateDb::from_series(series)
    }

    #[test]
    fn value_at_answers_inside_and_outside_the_range() {
        let db = sample_db();

        assert_eq!(
            db.value_at(RateField::Ruonia, day(2024, 1, 9)),
            Lookup::Value(Some(dec!(15.84)))
        );
        assert_eq!(
            db.value_at(RateField::Miacr, day(2024, 1, 9)),
            Lookup::Value(None)
        );
        assert_eq!(db.value_at(RateField::Ruonia, day(2023, 12, 31)), Lookup::NoData);
    }

    #[test]
    fn value_at_is_idempotent() {
        let db = sample_db();
        let first = db.value_at(RateField::KeyRate, day(2024, 1, 10));
        let second = db.value_at(RateField::KeyRate, day(2024, 1, 10));
        assert_eq!(first, second);
    }

    #[test]
    fn latest_value_reads_the_maximum_stored_date() {
        let db = sample_db();
        assert_eq!(
            db.latest_value(RateField::Ruonia),
            Lookup::Value(Some(dec!(15.92)))
        );

        let empty = RateDb::from_series(RateSeries::new());
        assert_eq!(empty.latest_value(RateField::Ruonia), Lookup::NoData);
    }

    #[test]
    fn single_day_range_equals_the_point_lookup() {
        let db = sample_db();
        for name in ["key_rate", "miacr", "ruonia"] {
            let d = day(2024, 1, 8);
            assert_eq!(
                db.values_in_range_named(name, d, d),
                vec![db.value_at_named(name, d)]
            );
        }
    }

    #[test]
    fn range_spans_every_day_and_marks_missing_ones() {
        let db = sample_db();
        let values = db.values_in_range(RateField::Ruonia, day(2024, 1, 7), day(2024, 1, 11));

        assert_eq!(values.len(), 5);
        assert_eq!(values[0], Lookup::NoData);
        assert_eq!(values[1], Lookup::Value(Some(dec!(15.81))));
        assert_eq!(values[4], Lookup::NoData);
    }

    #[test]
    fn inverted_range_is_empty() {
        let db = sample_db();
        assert!(db
            .values_in_range(RateField::Ruonia, day(2024, 1, 10), day(2024, 1, 8))
            .is_empty());
    }

    #[test]
    fn unknown_field_name_answers_invalid_field() {
        let db = sample_db();
        let d = day(2024, 1, 9);

        assert_eq!(db.value_at_named("not_a_field", d), Lookup::InvalidField);
        assert_eq!(db.latest_value_named("not_a_field"), Lookup::InvalidField);
        assert_eq!(
            db.values_in_range_named("not_a_field", d, d),
            vec![Lookup::InvalidField]
        );
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rates").join("corridor.json");

        let mut series = RateSeries::new();
        series.insert(day(2024, 1, 8), record(dec!(15.81)));
        save_series(&series, &path).unwrap();

        let json = fs::read_to_string(&path).unwrap();
        assert!(json.contains(r#""2024-01-08""#));
        assert!(json.contains(r#""ruonia":"15.81""#));
        assert!(json.contains(r#""miacr":null"#));

        let db = RateDb::load(&path).unwrap();
        assert_eq!(
            db.value_at(RateField::Ruonia, day(2024, 1, 8)),
            Lookup::Value(Some(dec!(15.81)))
        );
    }
}
