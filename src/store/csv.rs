//! CSV interchange codec for export/import.
//!
//! The header row is exactly `Name,Email,Phone,Date Added`; one data row
//! per contact, same four values, collection order.

use crate::error::StoreResult;
use crate::models::Contact;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One CSV data row, keyed by the fixed interchange headers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CsvRow {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Email")]
    pub email: String,

    #[serde(rename = "Phone")]
    pub phone: String,

    #[serde(rename = "Date Added")]
    pub date_added: String,
}

impl From<&Contact> for CsvRow {
    fn from(contact: &Contact) -> Self {
        Self {
            name: contact.name().to_string(),
            email: contact.email().as_str().to_string(),
            phone: contact.telephone().as_str().to_string(),
            date_added: contact.date_added().to_string(),
        }
    }
}

/// Write the contact collection to `path` as CSV, overwriting it.
pub fn export(path: &Path, contacts: &[Contact]) -> StoreResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for contact in contacts {
        writer.serialize(CsvRow::from(contact))?;
    }
    writer.flush()?;
    Ok(())
}

/// Read every data row from the CSV file at `path`.
///
/// Rows are returned as-is; the caller re-validates them through the
/// manager's `add` path.
pub fn read_rows(path: &Path) -> StoreResult<Vec<CsvRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for result in reader.deserialize::<CsvRow>() {
        rows.push(result?);
    }
    Ok(rows)
}
