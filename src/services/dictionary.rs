// src/services/dictionary.rs

//! Dictionary lookups.
//!
//! Fetches the first lexical entry for a word and validates its shape.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{DictionaryConfig, DictionaryEntry, LexicalEntry};

/// Source of word definitions.
#[async_trait]
pub trait DefinitionSource: Send + Sync {
    /// Look up `word`, returning its first validated entry.
    async fn fetch_definition(&self, word: &str) -> Result<LexicalEntry>;
}

/// Client for a dictionaryapi.dev-compatible entries endpoint.
#[derive(Debug, Clone)]
pub struct DictionaryClient {
    client: Client,
    base_url: Url,
}

impl DictionaryClient {
    pub fn new(client: Client, config: &DictionaryConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::config(format!(
                "dictionary.base_url '{}' cannot take a path",
                config.base_url
            )));
        }
        Ok(Self { client, base_url })
    }

    fn entry_url(&self, word: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(word);
        }
        url
    }
}

#[async_trait]
impl DefinitionSource for DictionaryClient {
    async fn fetch_definition(&self, word: &str) -> Result<LexicalEntry> {
        let url = self.entry_url(word);
        log::debug!("Fetching definition: {url}");

        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::not_found(word));
        }
        let body = response.error_for_status()?.text().await?;

        let entries: Vec<DictionaryEntry> =
            serde_json::from_str(&body).map_err(|e| AppError::shape("dictionary", e))?;
        let first = entries
            .into_iter()
            .next()
            .ok_or_else(|| AppError::not_found(word))?;

        LexicalEntry::try_from(first)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_for(server: &MockServer) -> DictionaryClient {
        let config = DictionaryConfig {
            base_url: format!("{}/api/v2/entries/en", server.uri()),
            ..DictionaryConfig::default()
        };
        DictionaryClient::new(Client::new(), &config).unwrap()
    }

    #[test]
    fn entry_url_appends_encoded_word() {
        let client = DictionaryClient::new(
            Client::new(),
            &DictionaryConfig {
                base_url: "https://dict.example/api/v2/entries/en/".to_string(),
                ..DictionaryConfig::default()
            },
        )
        .unwrap();
        assert_eq!(
            client.entry_url("ice cream").as_str(),
            "https://dict.example/api/v2/entries/en/ice%20cream"
        );
    }

    #[test]
    fn rejects_non_base_url() {
        let config = DictionaryConfig {
            base_url: "mailto:someone@example.com".to_string(),
            ..DictionaryConfig::default()
        };
        assert!(matches!(
            DictionaryClient::new(Client::new(), &config),
            Err(AppError::Config(_))
        ));
    }

    #[tokio::test]
    async fn fetches_first_entry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/entries/en/luminous"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "word": "luminous",
                    "phonetics": [{ "text": "/ˈluːmɪnəs/" }],
                    "meanings": [{
                        "synonyms": ["bright", "shining"],
                        "definitions": [{
                            "definition": "Full of or shedding light.",
                            "synonyms": ["shining", "radiant", "glowing"]
                        }]
                    }]
                },
                { "word": "luminous", "meanings": [] }
            ])))
            .mount(&server)
            .await;

        let entry = client_for(&server).fetch_definition("luminous").await.unwrap();
        assert_eq!(entry.definition, "Full of or shedding light.");
        assert_eq!(entry.phonetic, "/ˈluːmɪnəs/");
        assert_eq!(entry.synonyms, vec!["bright", "shining", "radiant"]);
        assert!(entry.antonyms.is_empty());
    }

    #[tokio::test]
    async fn maps_404_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "title": "No Definitions Found"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_definition("qwzx").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(word) if word == "qwzx"));
    }

    #[tokio::test]
    async fn maps_server_errors_to_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_definition("serene").await.unwrap_err();
        assert!(matches!(err, AppError::Http(_)));
    }

    #[tokio::test]
    async fn maps_bad_bodies_to_shape_or_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/entries/en/garbled"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v2/entries/en/empty"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert!(matches!(
            client.fetch_definition("garbled").await,
            Err(AppError::Shape { .. })
        ));
        assert!(matches!(
            client.fetch_definition("empty").await,
            Err(AppError::NotFound(_))
        ));
    }
}
