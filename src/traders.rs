//! Joins a requested list of trader INNs against the traders collection and
//! writes the matches as a semicolon-delimited CSV.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One trader record from the source collection, keyed by INN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trader {
    pub inn: String,
    pub ogrn: String,
    pub address: String,
}

/// Reads the lookup list: one INN per line, blank lines ignored.
pub fn read_inn_list(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}

pub fn read_traders(path: &Path) -> Result<Vec<Trader>> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Looks every requested INN up in the collection, preserving request order.
/// An INN absent from the collection fails the whole run.
pub fn join_traders(inn_list: &[String], traders: &[Trader]) -> Result<Vec<Trader>> {
    let by_inn: HashMap<&str, &Trader> = traders
        .iter()
        .map(|trader| (trader.inn.as_str(), trader))
        .collect();

    inn_list
        .iter()
        .map(|inn| {
            by_inn
                .get(inn.as_str())
                .map(|&trader| trader.clone())
                .ok_or_else(|| Error::UnknownTrader(inn.clone()))
        })
        .collect()
}

/// Writes the matches as `inn;ogrn;address` rows, no header.
pub fn write_traders_csv(traders: &[Trader], path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_path(path)?;
    for trader in traders {
        writer.write_record([&trader.inn, &trader.ogrn, &trader.address])?;
    }
    writer.flush()?;
    Ok(())
}

/// The whole join task: read both inputs, join, write the CSV.
pub fn export_matched_traders(list_path: &Path, data_path: &Path, out_path: &Path) -> Result<()> {
    let inn_list = read_inn_list(list_path)?;
    let traders = read_traders(data_path)?;
    let matched = join_traders(&inn_list, &traders)?;
    write_traders_csv(&matched, out_path)?;
    Ok(())
}
