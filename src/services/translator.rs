// src/services/translator.rs

//! Text translation.
//!
//! Translation never fails from the caller's point of view: on any error the
//! input text is returned unchanged and the error is logged.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::TranslatorConfig;
use crate::utils::http;

/// Translates text into the configured target language.
#[async_trait]
pub trait Translate: Send + Sync {
    /// Translate `text`, surfacing errors.
    async fn try_translate(&self, text: &str) -> Result<String>;

    /// Translate `text`, returning it unchanged on failure.
    async fn translate(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }
        match self.try_translate(text).await {
            Ok(translated) => translated,
            Err(e) => {
                log::warn!("Translation failed for {text:?}: {e}");
                text.to_string()
            }
        }
    }
}

/// Client for the public Google Translate `translate_a/single` endpoint.
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: Client,
    base_url: Url,
    source_lang: String,
    target_lang: String,
}

impl GoogleTranslator {
    pub fn new(client: Client, config: &TranslatorConfig) -> Result<Self> {
        Ok(Self {
            client,
            base_url: Url::parse(&config.base_url)?,
            source_lang: config.source_lang.clone(),
            target_lang: config.target_lang.clone(),
        })
    }

    fn request_url(&self, text: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("client", "gtx")
            .append_pair("sl", &self.source_lang)
            .append_pair("tl", &self.target_lang)
            .append_pair("dt", "t")
            .append_pair("q", text);
        url
    }
}

#[async_trait]
impl Translate for GoogleTranslator {
    async fn try_translate(&self, text: &str) -> Result<String> {
        let body = http::fetch_text(&self.client, self.request_url(text)).await?;
        let value: Value =
            serde_json::from_str(&body).map_err(|e| AppError::shape("translator", e))?;
        first_segment(&value)
    }
}

/// The first translated segment of a `[[["translated", "source", ...], ...], ...]` response.
fn first_segment(value: &Value) -> Result<String> {
    let segment = value
        .get(0)
        .and_then(|sentences| sentences.get(0))
        .and_then(|sentence| sentence.get(0))
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::shape("translator", "missing first translated segment"))?;

    if segment.trim().is_empty() {
        return Err(AppError::shape("translator", "empty translation"));
    }
    Ok(segment.to_string())
}
