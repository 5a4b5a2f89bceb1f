//! Rolodex - a local address book with JSON persistence and CSV import/export.
//!
//! The core is the contact data model and the manager that validates,
//! stores, and queries contacts. The interactive menu is a thin
//! presentation layer over the manager's public operations.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (email address, phone number)
//! - **models**: the Contact entity and its persistence record
//! - **manager**: the core service owning the collection and storage round-trip
//! - **store**: persistence codecs (JSON primary store, CSV interchange)
//! - **outcome**: tagged success/error result messages
//! - **config**: configuration management from environment variables
//! - **error**: custom error types for precise error handling

pub mod config;
pub mod domain;
pub mod error;
pub mod manager;
pub mod models;
pub mod outcome;
pub mod store;

pub use config::Config;
pub use domain::{EmailAddress, PhoneNumber, ValidationError};
pub use error::{ConfigError, StoreError};
pub use manager::ContactManager;
pub use models::{Contact, ContactRecord};
pub use outcome::{Outcome, OutcomeKind};
