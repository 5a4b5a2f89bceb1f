//! Contact model representing one address-book entry.

use crate::domain::{EmailAddress, PhoneNumber, ValidationError};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp format used for `date_added` (minute granularity).
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One address-book entry.
///
/// A contact is immutable after construction: the email and phone are
/// validated exactly once, in [`Contact::new`], and hold for the lifetime
/// of the value. Contacts are owned exclusively by the manager's collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: String,
    email: EmailAddress,
    telephone: PhoneNumber,
    date_added: String,
}

/// The four-field textual representation of a contact used for persistence.
///
/// Unknown extra fields are ignored on read; a missing `date_added` is
/// tolerated and replaced with a fresh timestamp on reconstruction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    pub telephone: String,
    #[serde(default)]
    pub date_added: Option<String>,
}

impl Contact {
    /// Create a new contact, validating email and phone.
    ///
    /// The name is accepted as given; presence is enforced by the calling
    /// layer. `date_added` is set to the current local time truncated to
    /// minutes.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` from the first failing field.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        telephone: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let email = EmailAddress::new(email)?;
        let telephone = PhoneNumber::new(telephone)?;

        Ok(Self {
            name: name.into(),
            email,
            telephone,
            date_added: Local::now().format(DATE_FORMAT).to_string(),
        })
    }

    /// Reconstruct a contact from a stored record.
    ///
    /// Goes through the validating constructor, then restores the stored
    /// `date_added` when present (else the fresh timestamp is kept).
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` from the first failing field.
    pub fn from_record(record: ContactRecord) -> Result<Self, ValidationError> {
        let mut contact = Self::new(record.name, record.email, record.telephone)?;
        if let Some(date_added) = record.date_added {
            contact.date_added = date_added;
        }
        Ok(contact)
    }

    /// Convert to the four-field persistence record.
    pub fn to_record(&self) -> ContactRecord {
        ContactRecord {
            name: self.name.clone(),
            email: self.email.as_str().to_string(),
            telephone: self.telephone.as_str().to_string(),
            date_added: Some(self.date_added.clone()),
        }
    }

    /// Render the contact as a single human-readable line.
    ///
    /// Stable and deterministic for a given contact, so search and list
    /// results can be asserted against.
    pub fn render(&self) -> String {
        format!("{} | {} | {}", self.name, self.email, self.telephone)
    }

    /// Display name of the contact.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validated email address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Validated phone number, original formatting preserved.
    pub fn telephone(&self) -> &PhoneNumber {
        &self.telephone
    }

    /// Creation timestamp, `YYYY-MM-DD HH:MM`.
    pub fn date_added(&self) -> &str {
        &self.date_added
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_new() {
        let contact = Contact::new("John Doe", "john@email.com", "0123456789").unwrap();
        assert_eq!(contact.name(), "John Doe");
        assert_eq!(contact.email().as_str(), "john@email.com");
        assert_eq!(contact.telephone().as_str(), "0123456789");
        assert!(!contact.date_added().is_empty());
    }

    #[test]
    fn test_contact_rejects_invalid_email() {
        let err = Contact::new("x", "not-an-email", "0123456789").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidEmail(_)));
    }

    #[test]
    fn test_contact_rejects_short_phone() {
        let err = Contact::new("x", "a@b.co", "12345").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPhone(_)));
    }

    #[test]
    fn test_contact_date_format() {
        let contact = Contact::new("Test", "test@email.com", "0000000000").unwrap();
        // YYYY-MM-DD HH:MM
        assert_eq!(contact.date_added().len(), 16);
        assert_eq!(&contact.date_added()[4..5], "-");
        assert_eq!(&contact.date_added()[10..11], " ");
    }

    #[test]
    fn test_contact_render() {
        let contact = Contact::new("Test", "test@email.com", "0000000000").unwrap();
        let line = contact.render();
        assert!(line.contains("Test"));
        assert!(line.contains("test@email.com"));
        assert!(line.contains("0000000000"));
        assert_eq!(line, contact.to_string());
    }

    #[test]
    fn test_to_record_has_four_fields() {
        let contact = Contact::new("Jane Doe", "jane@email.com", "9876543210").unwrap();
        let record = contact.to_record();
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.email, "jane@email.com");
        assert_eq!(record.telephone, "9876543210");
        assert_eq!(record.date_added.as_deref(), Some(contact.date_added()));
    }

    #[test]
    fn test_from_record_restores_date() {
        let record = ContactRecord {
            name: "Jane Doe".to_string(),
            email: "jane@email.com".to_string(),
            telephone: "9876543210".to_string(),
            date_added: Some("2020-01-01 09:30".to_string()),
        };
        let contact = Contact::from_record(record).unwrap();
        assert_eq!(contact.date_added(), "2020-01-01 09:30");
    }

    #[test]
    fn test_from_record_defaults_missing_date() {
        let record = ContactRecord {
            name: "Jane Doe".to_string(),
            email: "jane@email.com".to_string(),
            telephone: "9876543210".to_string(),
            date_added: None,
        };
        let contact = Contact::from_record(record).unwrap();
        assert!(!contact.date_added().is_empty());
    }

    #[test]
    fn test_from_record_validates() {
        let record = ContactRecord {
            name: "Jane Doe".to_string(),
            email: "not-an-email".to_string(),
            telephone: "9876543210".to_string(),
            date_added: None,
        };
        assert!(Contact::from_record(record).is_err());
    }

    #[test]
    fn test_record_ignores_unknown_fields() {
        let json = r#"{
            "name": "Jane Doe",
            "email": "jane@email.com",
            "telephone": "9876543210",
            "date_added": "2020-01-01 09:30",
            "nickname": "JD"
        }"#;
        let record: ContactRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Jane Doe");
    }

    #[test]
    fn test_record_roundtrip() {
        let contact = Contact::new("José Müller", "jose@email.com", "0612345678").unwrap();
        let json = serde_json::to_string(&contact.to_record()).unwrap();
        let record: ContactRecord = serde_json::from_str(&json).unwrap();
        let restored = Contact::from_record(record).unwrap();
        assert_eq!(restored, contact);
    }
}
