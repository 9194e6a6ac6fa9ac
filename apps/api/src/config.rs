use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::matching::normalizer::NormalizerConfig;
use crate::matching::{EngineConfig, KeywordScope};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Caller-side usability threshold per text field. 0 disables it.
    pub min_input_chars: usize,
    pub max_body_bytes: usize,
    pub engine: EngineConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = NormalizerConfig::default();

        Ok(Config {
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            min_input_chars: parse_or(&lookup, "MIN_INPUT_CHARS", 50)?,
            max_body_bytes: parse_or(&lookup, "MAX_BODY_BYTES", 5 * 1024 * 1024)?,
            engine: EngineConfig {
                normalizer: NormalizerConfig {
                    min_token_chars: parse_or(&lookup, "MIN_TOKEN_CHARS", defaults.min_token_chars)?,
                    fold_diacritics: parse_or(&lookup, "FOLD_DIACRITICS", defaults.fold_diacritics)?,
                    fold_inflections: parse_or(
                        &lookup,
                        "FOLD_INFLECTIONS",
                        defaults.fold_inflections,
                    )?,
                },
                min_keyword_count: parse_or(&lookup, "MIN_KEYWORD_COUNT", 1)?,
                keyword_scope: match lookup("KEYWORD_SCOPE") {
                    Some(raw) => parse_scope(&raw)?,
                    None => KeywordScope::Job,
                },
                extra_stopwords: lookup("EXTRA_STOPWORDS")
                    .map(|raw| split_list(&raw))
                    .unwrap_or_default(),
                // 0 or unset: no cap
                max_phrases: parse_or(&lookup, "MAX_PHRASES", 0usize)
                    .map(|max| (max > 0).then_some(max))?,
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: '{raw}'")),
        None => Ok(default),
    }
}

fn parse_scope(raw: &str) -> Result<KeywordScope> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "job" => Ok(KeywordScope::Job),
        "union" => Ok(KeywordScope::Union),
        other => bail!("KEYWORD_SCOPE must be 'job' or 'union', got '{other}'"),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
