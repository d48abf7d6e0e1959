// src/models/mod.rs

//! Domain models for the word-of-the-day service.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod entry;
mod pool;
mod record;

// Re-export all public types
pub use config::{
    CacheConfig, Config, DictionaryConfig, FallbackConfig, HttpConfig, IndexStrategy,
    SelectionConfig, ServerConfig, TranslatorConfig,
};
pub use entry::{
    Definition, DictionaryEntry, LexicalEntry, MAX_RELATED_TERMS, Meaning, Phonetic, merge_terms,
};
pub use pool::WordPool;
pub use record::{Enriched, RecordSource, WordPayload, WordRecord};
