//! Contact manager service.
//!
//! Owns the ordered contact collection, enforces the unique-email invariant,
//! and mediates every read and write of the backing store. Mutations are
//! write-through: each successful add or delete persists the full collection
//! immediately.

use crate::models::Contact;
use crate::outcome::Outcome;
use crate::store;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// The core service owning the contact collection and storage round-trip.
///
/// One manager instance per storage location for the lifetime of the
/// process; no locking is performed, so two instances pointed at the same
/// file will race on save.
#[derive(Debug)]
pub struct ContactManager {
    storage_path: PathBuf,
    contacts: Vec<Contact>,
}

impl ContactManager {
    /// Open a manager on `storage_path`, loading any existing state.
    ///
    /// A missing file means an empty collection; an unreadable or corrupt
    /// file is discarded with a warning. Construction never fails.
    pub fn open(storage_path: impl Into<PathBuf>) -> Self {
        let mut manager = Self {
            storage_path: storage_path.into(),
            contacts: Vec::new(),
        };
        manager.load();
        manager
    }

    /// Path of the backing store file.
    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    /// Current collection size.
    pub fn count(&self) -> usize {
        self.contacts.len()
    }

    /// Read access to the ordered collection, for custom rendering.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// The most recently added contact, if any.
    pub fn last_added(&self) -> Option<&Contact> {
        self.contacts.last()
    }

    /// Add a new contact.
    ///
    /// Fails (error-tagged, collection unchanged, nothing saved) when the
    /// email duplicates an existing contact or when validation rejects a
    /// field; otherwise appends, persists, and reports success.
    pub fn add(&mut self, name: &str, email: &str, telephone: &str) -> Outcome {
        if self.contacts.iter().any(|c| c.email().as_str() == email) {
            return Outcome::error(format!("A contact with email {} already exists", email));
        }

        match Contact::new(name, email, telephone) {
            Ok(contact) => {
                let message = format!("Contact {} added successfully", contact.name());
                self.contacts.push(contact);
                self.save();
                Outcome::success(message)
            }
            Err(err) => Outcome::error(err.to_string()),
        }
    }

    /// Search contacts by case-insensitive substring of name or email.
    ///
    /// Matches are rendered newline-joined in collection order. Never
    /// mutates state.
    pub fn search(&self, term: &str) -> Outcome {
        let needle = term.to_lowercase();
        let matches: Vec<String> = self
            .contacts
            .iter()
            .filter(|c| {
                c.name().to_lowercase().contains(&needle)
                    || c.email().as_str().to_lowercase().contains(&needle)
            })
            .map(Contact::render)
            .collect();

        if matches.is_empty() {
            Outcome::error(format!("No contact found for '{}'", term))
        } else {
            Outcome::success(matches.join("\n"))
        }
    }

    /// Delete the first contact whose email exactly equals `email`.
    pub fn delete(&mut self, email: &str) -> Outcome {
        match self
            .contacts
            .iter()
            .position(|c| c.email().as_str() == email)
        {
            Some(index) => {
                let removed = self.contacts.remove(index);
                self.save();
                Outcome::success(format!("Contact {} deleted", removed.name()))
            }
            None => Outcome::error(format!("No contact with email {}", email)),
        }
    }

    /// Formatted summary of the whole collection, 1-indexed.
    pub fn list_all(&self) -> Outcome {
        if self.contacts.is_empty() {
            return Outcome::error("No contacts saved");
        }

        let mut text = format!("CONTACT LIST ({})", self.contacts.len());
        for (i, contact) in self.contacts.iter().enumerate() {
            text.push_str(&format!("\n{}. {}", i + 1, contact.render()));
        }
        Outcome::success(text)
    }

    /// Export the collection to a CSV file at `path`.
    pub fn export_csv(&self, path: &Path) -> Outcome {
        if self.contacts.is_empty() {
            return Outcome::error("No contacts to export");
        }

        match store::csv::export(path, &self.contacts) {
            Ok(()) => Outcome::success(format!(
                "Exported {} contacts to {}",
                self.contacts.len(),
                path.display()
            )),
            Err(err) => Outcome::error(format!("Export error: {}", err)),
        }
    }

    /// Import contacts from a CSV file at `path`.
    ///
    /// Each row goes through `add`; rows that fail validation or duplicate
    /// an existing email are skipped without individual reporting, and only
    /// the success count is returned.
    pub fn import_csv(&mut self, path: &Path) -> Outcome {
        if !path.exists() {
            return Outcome::error(format!("File {} not found", path.display()));
        }

        match store::csv::read_rows(path) {
            Ok(rows) => {
                let imported = rows
                    .iter()
                    .filter(|row| self.add(&row.name, &row.email, &row.phone).is_success())
                    .count();
                Outcome::success(format!("Imported {} contacts from {}", imported, path.display()))
            }
            Err(err) => Outcome::error(format!("Import error: {}", err)),
        }
    }

    /// Load the collection from the backing store.
    ///
    /// Corruption never blocks startup; it only discards the store.
    fn load(&mut self) {
        if !self.storage_path.exists() {
            debug!(path = %self.storage_path.display(), "no contact store yet, starting empty");
            return;
        }

        match store::json::load(&self.storage_path) {
            Ok(contacts) => {
                info!(count = contacts.len(), "loaded contact store");
                self.contacts = contacts;
            }
            Err(err) => {
                warn!(
                    path = %self.storage_path.display(),
                    %err,
                    "contact store unreadable, starting with an empty collection"
                );
                self.contacts.clear();
            }
        }
    }

    /// Persist the full collection to the backing store.
    ///
    /// On failure the in-memory state stays authoritative; the last
    /// successful save defines the durable state.
    fn save(&self) {
        if let Err(err) = store::json::save(&self.storage_path, &self.contacts) {
            warn!(
                path = %self.storage_path.display(),
                %err,
                "failed to persist contact store"
            );
        }
    }
}

impl Default for ContactManager {
    fn default() -> Self {
        Self::open(crate::config::DEFAULT_CONTACTS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager_in(dir: &tempfile::TempDir) -> ContactManager {
        ContactManager::open(dir.path().join("contacts.json"))
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let manager = manager_in(&dir);
        assert_eq!(manager.count(), 0);
    }

    #[test]
    fn test_add_rejects_invalid_without_saving() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = manager_in(&dir);

        let outcome = manager.add("x", "not-an-email", "0123456789");
        assert!(!outcome.is_success());
        assert_eq!(manager.count(), 0);
        // Nothing was persisted either
        assert!(!manager.storage_path().exists());
    }

    #[test]
    fn test_duplicate_email_is_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = manager_in(&dir);

        assert!(manager.add("A", "test@email.com", "0123456789").is_success());
        // Exact duplicate rejected
        assert!(!manager.add("B", "test@email.com", "9876543210").is_success());
        // Different case is a distinct email
        assert!(manager.add("C", "Test@email.com", "9876543210").is_success());
        assert_eq!(manager.count(), 2);
    }

    #[test]
    fn test_last_added_tracks_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = manager_in(&dir);
        assert!(manager.last_added().is_none());

        manager.add("Alice Dupont", "alice@email.com", "0123456789");
        manager.add("Bob Martin", "bob@email.com", "9876543210");
        assert_eq!(manager.last_added().unwrap().name(), "Bob Martin");
    }
}
