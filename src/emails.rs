//! Mines bankruptcy messages for email addresses, keyed by publisher INN.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::Result;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[a-z0-9][\w.+$~-]*@[a-z0-9-]+(?:\.[a-z0-9-]+)*\.[a-z]{2,}")
        .expect("regex must compile")
});

/// One entry of the bankruptcy-message feed. Only the text and the publisher
/// INN are addressed directly; everything else is kept so the whole record
/// can be re-serialized and scanned too.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankruptcyMessage {
    pub msg_text: String,
    pub publisher_inn: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Deduplicated addresses per publisher INN.
pub type EmailSet = BTreeMap<String, Vec<String>>;

/// All email-like strings in `text`, in order of appearance.
pub fn find_emails(text: &str) -> Vec<String> {
    EMAIL_RE
        .find_iter(text)
        .map(|m| m.as_str().to_owned())
        .collect()
}

/// Collects addresses per publisher. Each message is scanned twice: the
/// message text itself and the full serialized record, since contacts also
/// show up in fields outside the text. Matches are unioned and deduplicated.
pub fn extract_publisher_emails(messages: &[BankruptcyMessage]) -> Result<EmailSet> {
    let mut by_publisher: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for message in messages {
        let found = by_publisher
            .entry(message.publisher_inn.clone())
            .or_default();
        found.extend(find_emails(&message.msg_text));
        found.extend(find_emails(&serde_json::to_string(message)?));
    }

    Ok(by_publisher
        .into_iter()
        .map(|(inn, emails)| (inn, emails.into_iter().collect()))
        .collect())
}

pub fn read_messages(path: &Path) -> Result<Vec<BankruptcyMessage>> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

pub fn write_email_sets(emails: &EmailSet, path: &Path) -> Result<()> {
    fs::write(path, serde_json::to_string(emails)?)?;
    Ok(())
}

/// The whole extraction task: read the feed, collect, write the JSON map.
pub fn export_publisher_emails(messages_path: &Path, out_path: &Path) -> Result<()> {
    let messages = read_messages(messages_path)?;
    let emails = extract_publisher_emails(&messages)?;
    write_email_sets(&emails, out_path)?;
    Ok(())
}
