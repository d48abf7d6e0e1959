//! Dictionary response shapes and the validated lexical entry.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::{AppError, Result};

/// Most synonyms or antonyms kept per record.
pub const MAX_RELATED_TERMS: usize = 3;

/// One entry of the dictionary service's response array.
#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryEntry {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Meaning {
    #[serde(default)]
    pub definitions: Vec<Definition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

/// The parts of a dictionary entry the enrichment pipeline uses.
///
/// Only the first meaning and its first definition are considered.
/// Synonyms and antonyms merge the meaning-level and definition-level lists
/// in first-seen order, without repeats, capped at [`MAX_RELATED_TERMS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalEntry {
    pub phonetic: String,
    pub definition: String,
    pub example: Option<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

impl TryFrom<DictionaryEntry> for LexicalEntry {
    type Error = AppError;

    fn try_from(entry: DictionaryEntry) -> Result<Self> {
        let phonetic = non_blank(entry.phonetic)
            .or_else(|| {
                entry
                    .phonetics
                    .into_iter()
                    .next()
                    .and_then(|p| non_blank(p.text))
            })
            .unwrap_or_default();

        let meaning = entry
            .meanings
            .into_iter()
            .next()
            .ok_or_else(|| AppError::shape("dictionary", "entry has no meanings"))?;

        let Meaning {
            definitions,
            synonyms,
            antonyms,
        } = meaning;

        let first = definitions
            .into_iter()
            .next()
            .ok_or_else(|| AppError::shape("dictionary", "first meaning has no definitions"))?;

        if first.definition.trim().is_empty() {
            return Err(AppError::shape("dictionary", "definition text is empty"));
        }

        Ok(Self {
            phonetic,
            synonyms: merge_terms(&synonyms, &first.synonyms, MAX_RELATED_TERMS),
            antonyms: merge_terms(&antonyms, &first.antonyms, MAX_RELATED_TERMS),
            example: non_blank(first.example),
            definition: first.definition,
        })
    }
}

/// Union of two term lists in first-seen order, de-duplicated, truncated to `limit`.
pub fn merge_terms(primary: &[String], secondary: &[String], limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    primary
        .iter()
        .chain(secondary)
        .map(|term| term.trim())
        .filter(|term| !term.is_empty())
        .filter(|term| seen.insert(*term))
        .take(limit)
        .map(String::from)
        .collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
