// src/pipeline/enrich.rs

//! Word-of-the-day enrichment pipeline.
//!
//! Selects the day's word, looks it up, and translates every field
//! concurrently. Any failure yields the configured fallback record, so
//! callers always get a [`WordRecord`].

use std::sync::Arc;

use chrono::NaiveDate;
use futures::future::join_all;
use reqwest::Client;

use crate::error::Result;
use crate::models::{Config, Enriched, FallbackConfig, RecordSource, WordPool, WordRecord};
use crate::services::{DateIndexer, DefinitionSource, DictionaryClient, GoogleTranslator, Translate};
use crate::utils;

/// Default English stand-in translated when the dictionary has no example.
pub const MISSING_EXAMPLE: &str = "No example available";

/// Builds [`WordRecord`]s from a word pool and upstream services.
pub struct Enricher {
    pool: WordPool,
    indexer: DateIndexer,
    dictionary: Arc<dyn DefinitionSource>,
    translator: Arc<dyn Translate>,
    fallback: FallbackConfig,
    missing_example: String,
}

impl Enricher {
    pub fn new(
        pool: WordPool,
        indexer: DateIndexer,
        dictionary: Arc<dyn DefinitionSource>,
        translator: Arc<dyn Translate>,
    ) -> Self {
        Self {
            pool,
            indexer,
            dictionary,
            translator,
            fallback: FallbackConfig::default(),
            missing_example: MISSING_EXAMPLE.to_string(),
        }
    }

    /// Wire the pipeline to the real dictionary and translation services.
    pub fn from_config(config: &Config, client: Client) -> Result<Self> {
        let pool = WordPool::new(config.selection.words.iter().cloned())?;
        let dictionary = DictionaryClient::new(client.clone(), &config.dictionary)?;
        let translator = GoogleTranslator::new(client, &config.translator)?;

        Ok(Self::new(
            pool,
            DateIndexer::new(config.selection.strategy),
            Arc::new(dictionary),
            Arc::new(translator),
        )
        .with_fallback(config.fallback.clone())
        .with_missing_example(config.dictionary.missing_example.clone()))
    }

    pub fn with_fallback(mut self, fallback: FallbackConfig) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_missing_example(mut self, text: impl Into<String>) -> Self {
        self.missing_example = text.into();
        self
    }

    /// Record for the current UTC date.
    pub async fn build_today_record(&self) -> Enriched {
        self.build_record_for(utils::today()).await
    }

    /// Record for the word `date` selects.
    pub async fn build_record_for(&self, date: NaiveDate) -> Enriched {
        let (index, word) = self.indexer.pick(&self.pool, date);
        log::info!("Selected word #{index} '{word}' for {date}");
        self.build_record_for_word(word, date).await
    }

    /// Record for an explicit word, dated `date`.
    pub async fn build_record_for_word(&self, word: &str, date: NaiveDate) -> Enriched {
        match self.try_build(word, date).await {
            Ok(record) => Enriched {
                record,
                source: RecordSource::Fresh,
            },
            Err(e) => {
                log::error!("Enrichment failed for '{word}': {e}. Serving fallback record.");
                Enriched {
                    record: WordRecord::fallback(&self.fallback, date),
                    source: RecordSource::Fallback,
                }
            }
        }
    }

    async fn try_build(&self, word: &str, date: NaiveDate) -> Result<WordRecord> {
        let entry = self.dictionary.fetch_definition(word).await?;

        let translator = self.translator.as_ref();
        let example = entry.example.as_deref().unwrap_or(&self.missing_example);

        let (translation, meaning, example, synonyms, antonyms) = futures::join!(
            translator.translate(word),
            translator.translate(&entry.definition),
            translator.translate(example),
            translate_all(translator, &entry.synonyms),
            translate_all(translator, &entry.antonyms),
        );

        Ok(WordRecord {
            word: word.to_string(),
            translation,
            meaning,
            example,
            pronunciation: entry.phonetic,
            synonyms: pair_terms(&entry.synonyms, &synonyms),
            antonyms: pair_terms(&entry.antonyms, &antonyms),
            date,
        })
    }
}

/// Translate each term; output order matches input order.
async fn translate_all(translator: &dyn Translate, terms: &[String]) -> Vec<String> {
    join_all(terms.iter().map(|term| translator.translate(term))).await
}

/// `"english (spanish)"` for each index-aligned pair.
fn pair_terms(english: &[String], spanish: &[String]) -> Vec<String> {
    english
        .iter()
        .zip(spanish)
        .map(|(en, es)| format!("{en} ({es})"))
        .collect()
}
