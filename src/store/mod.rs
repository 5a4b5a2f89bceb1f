//! Persistence codecs for the contact collection.
//!
//! The primary store is a JSON document holding the ordered record array
//! (`json`); CSV (`csv`) is an interchange format used only for
//! export/import, never as the primary store.

pub mod csv;
pub mod json;
