//! Primary on-disk codec: a JSON array of contact records.

use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, ContactRecord};
use std::fs;
use std::path::Path;

/// Load the full contact collection from `path`.
///
/// Callers decide how to treat a missing file; this function expects the
/// file to exist. Any record failing validation makes the whole load fail
/// with `StoreError::Corrupt`.
pub fn load(path: &Path) -> StoreResult<Vec<Contact>> {
    let text = fs::read_to_string(path)?;
    let records: Vec<ContactRecord> = serde_json::from_str(&text)?;

    records
        .into_iter()
        .map(|record| Contact::from_record(record).map_err(StoreError::Corrupt))
        .collect()
}

/// Save the full contact collection to `path`, overwriting it.
pub fn save(path: &Path, contacts: &[Contact]) -> StoreResult<()> {
    let records: Vec<ContactRecord> = contacts.iter().map(Contact::to_record).collect();
    let text = serde_json::to_string_pretty(&records)?;
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");

        let contacts = vec![
            Contact::new("Alice Dupont", "alice@email.com", "0123456789").unwrap(),
            Contact::new("Bob Martin", "bob@email.com", "9876543210").unwrap(),
        ];
        save(&path, &contacts).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded, contacts);
    }

    #[test]
    fn test_load_rejects_corrupt_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        std::fs::write(
            &path,
            r#"[{"name": "x", "email": "not-an-email", "telephone": "0123456789"}]"#,
        )
        .unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        std::fs::write(&path, "this is not json {").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, StoreError::Json(_)));
    }
}
