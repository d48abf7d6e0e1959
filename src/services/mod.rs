//! Service layer for the word-of-the-day application.
//!
//! This module contains the business logic for:
//! - Daily word selection (`DateIndexer`)
//! - Dictionary lookups (`DictionaryClient`)
//! - Translation (`GoogleTranslator`)

mod dictionary;
mod indexer;
mod translator;

pub use dictionary::{DefinitionSource, DictionaryClient};
pub use indexer::{DateIndexer, numeric_date};
pub use translator::{GoogleTranslator, Translate};
