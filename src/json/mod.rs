//! JSON Document Module
//!
//! Reads the documents the external store serves and turns them into typed
//! records.
//!
//! # Architecture
//!
//! - `document.rs` - serde shapes of the store's documents
//! - `converter.rs` - document to record conversion and date parsing
//! - `loader.rs` - snapshot loading from JSON text, values and files

mod converter;
mod document;
mod loader;

pub use converter::{DocumentConverter, document_id, parse_document_date};
pub use document::{
    GarmentDocument, OutfitDocument, PreferencesDocument, SnapshotDocument, UsageDocument,
    UserDocument,
};
