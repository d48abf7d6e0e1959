//! Application configuration structures.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Shared outbound HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Dictionary service settings
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Translation service settings
    #[serde(default)]
    pub translator: TranslatorConfig,

    /// Word pool and daily selection
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Result cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Inbound HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Record served when enrichment fails
    #[serde(default)]
    pub fallback: FallbackConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Apply `WOTD_*` environment overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(bind) = lookup("WOTD_BIND") {
            self.server.bind = bind;
        }

        if let Some(timeout) = lookup("WOTD_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => self.http.timeout_secs = secs,
                Err(_) => log::warn!("Ignoring invalid WOTD_TIMEOUT_SECS={timeout}"),
            }
        }

        if let Some(ttl) = lookup("WOTD_CACHE_TTL_SECS") {
            match ttl.parse() {
                Ok(secs) => self.cache.ttl_secs = secs,
                Err(_) => log::warn!("Ignoring invalid WOTD_CACHE_TTL_SECS={ttl}"),
            }
        }

        if let Some(url) = lookup("WOTD_DICTIONARY_URL") {
            self.dictionary.base_url = url;
        }

        if let Some(url) = lookup("WOTD_TRANSLATOR_URL") {
            self.translator.base_url = url;
        }
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.selection.words.is_empty() {
            return Err(AppError::validation("selection.words is empty"));
        }
        if let Some(pos) = self.selection.words.iter().position(|w| w.trim().is_empty()) {
            return Err(AppError::validation(format!(
                "selection.words[{pos}] is blank"
            )));
        }
        if self.translator.source_lang.trim().is_empty()
            || self.translator.target_lang.trim().is_empty()
        {
            return Err(AppError::validation(
                "translator.source_lang and translator.target_lang must be set",
            ));
        }
        if self.dictionary.missing_example.trim().is_empty() {
            return Err(AppError::validation("dictionary.missing_example is empty"));
        }

        Url::parse(&self.dictionary.base_url).map_err(|e| {
            AppError::validation(format!(
                "dictionary.base_url '{}' is invalid: {e}",
                self.dictionary.base_url
            ))
        })?;
        Url::parse(&self.translator.base_url).map_err(|e| {
            AppError::validation(format!(
                "translator.base_url '{}' is invalid: {e}",
                self.translator.base_url
            ))
        })?;
        self.server.socket_addr()?;

        if self.fallback.word.trim().is_empty() {
            return Err(AppError::validation("fallback.word is empty"));
        }
        Ok(())
    }
}

/// Outbound HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for outbound requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Dictionary service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Entries endpoint; the word is appended as a path segment
    #[serde(default = "defaults::dictionary_url")]
    pub base_url: String,

    /// English text translated in place of a missing example
    #[serde(default = "defaults::missing_example")]
    pub missing_example: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::dictionary_url(),
            missing_example: defaults::missing_example(),
        }
    }
}

/// Translation service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default = "defaults::translator_url")]
    pub base_url: String,

    #[serde(default = "defaults::source_lang")]
    pub source_lang: String,

    #[serde(default = "defaults::target_lang")]
    pub target_lang: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::translator_url(),
            source_lang: defaults::source_lang(),
            target_lang: defaults::target_lang(),
        }
    }
}

/// How a calendar date is turned into a pool index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexStrategy {
    /// `YYYYMMDD` as an integer, modulo the pool size
    #[default]
    NumericDate,
    /// Ordinal day of the year, modulo the pool size
    DayOfYear,
}

/// Word pool and selection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    #[serde(default)]
    pub strategy: IndexStrategy,

    /// Candidate words, in selection order
    #[serde(default = "defaults::words")]
    pub words: Vec<String>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            strategy: IndexStrategy::default(),
            words: defaults::words(),
        }
    }
}

/// Result cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Freshness window in seconds (0 disables caching)
    #[serde(default = "defaults::cache_ttl")]
    pub ttl_secs: u64,

    /// Keep fallback records for the whole window instead of retrying
    #[serde(default)]
    pub cache_fallback: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: defaults::cache_ttl(),
            cache_fallback: false,
        }
    }
}

/// Inbound HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "defaults::bind")]
    pub bind: String,

    /// Send `Cache-Control: no-store` instead of a max-age matching the cache window
    #[serde(default = "defaults::no_store")]
    pub no_store: bool,
}

impl ServerConfig {
    /// Parse the bind address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind
            .parse()
            .map_err(|e| AppError::validation(format!("server.bind '{}': {e}", self.bind)))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: defaults::bind(),
            no_store: defaults::no_store(),
        }
    }
}

/// The record served whenever enrichment cannot complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackConfig {
    #[serde(default = "defaults::fallback_word")]
    pub word: String,
    #[serde(default = "defaults::fallback_translation")]
    pub translation: String,
    #[serde(default = "defaults::fallback_meaning")]
    pub meaning: String,
    #[serde(default = "defaults::fallback_example")]
    pub example: String,
    #[serde(default = "defaults::fallback_pronunciation")]
    pub pronunciation: String,
    #[serde(default = "defaults::fallback_synonyms")]
    pub synonyms: Vec<String>,
    #[serde(default = "defaults::fallback_antonyms")]
    pub antonyms: Vec<String>,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            word: defaults::fallback_word(),
            translation: defaults::fallback_translation(),
            meaning: defaults::fallback_meaning(),
            example: defaults::fallback_example(),
            pronunciation: defaults::fallback_pronunciation(),
            synonyms: defaults::fallback_synonyms(),
            antonyms: defaults::fallback_antonyms(),
        }
    }
}

mod defaults {
    // HTTP defaults
    pub fn user_agent() -> String {
        concat!("wotd/", env!("CARGO_PKG_VERSION")).into()
    }
    pub fn timeout() -> u64 {
        10
    }

    // Upstream defaults
    pub fn dictionary_url() -> String {
        "https://api.dictionaryapi.dev/api/v2/entries/en".into()
    }
    pub fn missing_example() -> String {
        crate::pipeline::MISSING_EXAMPLE.into()
    }
    pub fn translator_url() -> String {
        "https://translate.googleapis.com/translate_a/single".into()
    }
    pub fn source_lang() -> String {
        "en".into()
    }
    pub fn target_lang() -> String {
        "es".into()
    }

    // Selection defaults. Repeats are intentional: they weight the daily pick.
    pub fn words() -> Vec<String> {
        [
            "serendipity",
            "ephemeral",
            "mellifluous",
            "ethereal",
            "luminous",
            "enigmatic",
            "resilient",
            "ineffable",
            "sublime",
            "pristine",
            "eloquent",
            "euphoric",
            "tenacious",
            "serene",
            "sagacious",
            "benevolent",
            "resplendent",
            "melancholy",
            "ubiquitous",
            "quintessential",
            "ethereal",
            "ephemeral",
            "ineffable",
            "surreptitious",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }

    // Cache defaults
    pub fn cache_ttl() -> u64 {
        86_400
    }

    // Server defaults
    pub fn bind() -> String {
        "127.0.0.1:3000".into()
    }
    pub fn no_store() -> bool {
        true
    }

    // Fallback record
    pub fn fallback_word() -> String {
        "hello".into()
    }
    pub fn fallback_translation() -> String {
        "hola".into()
    }
    pub fn fallback_meaning() -> String {
        "Un saludo común".into()
    }
    pub fn fallback_example() -> String {
        "¡Hola, ¿cómo estás?".into()
    }
    pub fn fallback_pronunciation() -> String {
        "/həˈləʊ/".into()
    }
    pub fn fallback_synonyms() -> Vec<String> {
        vec!["hi (hola)".into(), "greetings (saludos)".into()]
    }
    pub fn fallback_antonyms() -> Vec<String> {
        vec!["goodbye (adiós)".into(), "farewell (despedida)".into()]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_pool() {
        let mut config = Config::default();
        config.selection.words.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_word() {
        let mut config = Config::default();
        config.selection.words.push("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.http.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_urls_and_bind() {
        let mut config = Config::default();
        config.dictionary.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.translator.base_url = "::".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.server.bind = "localhost".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [selection]
            strategy = "day_of_year"
            words = ["alpha", "beta"]

            [cache]
            ttl_secs = 60
            "#,
        )
        .unwrap();

        assert_eq!(config.selection.strategy, IndexStrategy::DayOfYear);
        assert_eq!(config.selection.words, vec!["alpha", "beta"]);
        assert_eq!(config.cache.ttl_secs, 60);
        assert!(!config.cache.cache_fallback);
        assert_eq!(config.http.timeout_secs, 10);
        assert_eq!(config.fallback.word, "hello");
        assert_eq!(config.translator.target_lang, "es");
    }

    #[test]
    fn load_reads_file_and_load_or_default_recovers() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nbind = \"0.0.0.0:8080\"\nno_store = false").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert!(!config.server.no_store);

        let missing = file.path().with_extension("missing");
        let config = Config::load_or_default(&missing);
        assert_eq!(config.server.bind, "127.0.0.1:3000");
    }

    #[test]
    fn overrides_apply_and_skip_invalid_numbers() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("WOTD_BIND", "0.0.0.0:9000"),
            ("WOTD_TIMEOUT_SECS", "abc"),
            ("WOTD_CACHE_TTL_SECS", "120"),
            ("WOTD_TRANSLATOR_URL", "http://127.0.0.1:1/t"),
        ]);

        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert_eq!(config.http.timeout_secs, 10);
        assert_eq!(config.cache.ttl_secs, 120);
        assert_eq!(config.translator.base_url, "http://127.0.0.1:1/t");
        assert_eq!(
            config.dictionary.base_url,
            "https://api.dictionaryapi.dev/api/v2/entries/en"
        );
    }
}
