//! The per-day corridor record and its typed field names.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the corridor table. A `None` field is a cell the bank left
/// empty for that day (rendered as an em-dash on the site); the persisted
/// file keeps the rest as decimal strings so no precision is lost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateRecord {
    #[serde(with = "rust_decimal::serde::str_option")]
    pub key_rate: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub lower_limit_deposits: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub upper_limit_repo: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub upper_limit_credits: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub miacr: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub ruonia: Option<Decimal>,
}

impl RateRecord {
    pub fn field(&self, field: RateField) -> Option<Decimal> {
        match field {
            RateField::KeyRate => self.key_rate,
            RateField::LowerLimitDeposits => self.lower_limit_deposits,
            RateField::UpperLimitRepo => self.upper_limit_repo,
            RateField::UpperLimitCredits => self.upper_limit_credits,
            RateField::Miacr => self.miacr,
            RateField::Ruonia => self.ruonia,
        }
    }
}

/// The six columns of the table, in site order. Using an enum instead of
/// string keys means a typo in a field name can't survive compilation;
/// callers that only hold a name go through `FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateField {
    KeyRate,
    LowerLimitDeposits,
    UpperLimitRepo,
    UpperLimitCredits,
    Miacr,
    Ruonia,
}

impl RateField {
    /// The snake_case name used as the JSON key in the persisted file.
    pub fn name(&self) -> &'static str {
        match self {
            RateField::KeyRate => "key_rate",
            RateField::LowerLimitDeposits => "lower_limit_deposits",
            RateField::UpperLimitRepo => "upper_limit_repo",
            RateField::UpperLimitCredits => "upper_limit_credits",
            RateField::Miacr => "miacr",
            RateField::Ruonia => "ruonia",
        }
    }
}

impl fmt::Display for RateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Marker for a field name that matches no table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownField;

impl FromStr for RateField {
    type Err = UnknownField;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s {
            "key_rate" => Ok(RateField::KeyRate),
            "lower_limit_deposits" => Ok(RateField::LowerLimitDeposits),
            "upper_limit_repo" => Ok(RateField::UpperLimitRepo),
            "upper_limit_credits" => Ok(RateField::UpperLimitCredits),
            "miacr" => Ok(RateField::Miacr),
            "ruonia" => Ok(RateField::Ruonia),
            _ => Err(UnknownField),
        }
    }
}

/// Outcome of a query against the stored series. A date outside the stored
/// range and an unrecognized field name are ordinary answers, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The field's value on the queried day; `None` if the bank published
    /// no value for it.
    Value(Option<Decimal>),
    /// The queried date is outside the stored range.
    NoData,
    /// The queried field name matches no table column.
    InvalidField,
}
