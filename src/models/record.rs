//! The enriched word-of-the-day record and its wire form.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::FallbackConfig;

/// A fully enriched, bilingual word record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    /// English headword
    pub word: String,

    /// Spanish translation of the headword
    pub translation: String,

    /// Spanish definition
    pub meaning: String,

    /// Spanish example sentence
    pub example: String,

    /// IPA transcription, or empty
    pub pronunciation: String,

    /// `"english (spanish)"` pairs
    pub synonyms: Vec<String>,

    /// `"english (spanish)"` pairs
    pub antonyms: Vec<String>,

    /// Day the record was computed
    pub date: NaiveDate,
}

impl WordRecord {
    /// The fallback record, dated `date`.
    pub fn fallback(fallback: &FallbackConfig, date: NaiveDate) -> Self {
        Self {
            word: fallback.word.clone(),
            translation: fallback.translation.clone(),
            meaning: fallback.meaning.clone(),
            example: fallback.example.clone(),
            pronunciation: fallback.pronunciation.clone(),
            synonyms: fallback.synonyms.clone(),
            antonyms: fallback.antonyms.clone(),
            date,
        }
    }
}

/// Whether a record came from the upstream services or the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSource {
    Fresh,
    Fallback,
}

/// A record together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enriched {
    pub record: WordRecord,
    pub source: RecordSource,
}

impl Enriched {
    pub fn is_fallback(&self) -> bool {
        self.source == RecordSource::Fallback
    }
}

/// JSON body served by `GET /api/word`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPayload {
    pub id: i64,
    pub espanol: String,
    pub ingles: String,
    pub significado: String,
    pub ejemplo: String,
    pub pronunciacion: String,
    pub sinonimos: Vec<String>,
    pub antonimos: Vec<String>,
    pub fecha: NaiveDate,
}

impl WordPayload {
    /// Build the payload with a timestamp-derived id.
    pub fn from_record(record: &WordRecord) -> Self {
        Self::with_id(record, Utc::now().timestamp_millis())
    }

    pub fn with_id(record: &WordRecord, id: i64) -> Self {
        Self {
            id,
            espanol: record.translation.clone(),
            ingles: record.word.clone(),
            significado: record.meaning.clone(),
            ejemplo: record.example.clone(),
            pronunciacion: record.pronunciation.clone(),
            sinonimos: record.synonyms.clone(),
            antonimos: record.antonyms.clone(),
            fecha: record.date,
        }
    }
}
