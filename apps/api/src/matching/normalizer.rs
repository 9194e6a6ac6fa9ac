//! Normalizer — turns raw text into an ordered sequence of lowercase tokens.
//!
//! Every token carries two strings: the surface form as it appeared (lowercased,
//! NFKC) and the key used for comparison. Folding only ever touches the key, so
//! the words shown back to a user are words they actually wrote.
//!
//! The `Normalizer` trait is the seam: the engine only ever sees token
//! sequences, so a stricter tokenizer can replace `StandardNormalizer`
//! without touching extraction or scoring.

use serde::{Deserialize, Serialize};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// One token: what the text said, and what it compares as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub key: String,
    pub surface: String,
}

/// Any policy that maps text to an ordered token sequence.
///
/// Implementations must be stateless across calls and must never return
/// empty tokens.
pub trait Normalizer: Send + Sync {
    /// Lowercase surface tokens, in text order.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Comparison key for a surface token. Identity unless overridden.
    fn match_key(&self, surface: &str) -> String {
        surface.to_string()
    }

    fn tokens(&self, text: &str) -> Vec<Token> {
        self.tokenize(text)
            .into_iter()
            .filter_map(|surface| {
                let key = self.match_key(&surface);
                (!key.is_empty()).then_some(Token { key, surface })
            })
            .collect()
    }
}

/// Knobs for the default normalization policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Tokens shorter than this (in chars) are dropped.
    pub min_token_chars: usize,
    /// Compare with combining marks stripped (`é` matches `e`).
    pub fold_diacritics: bool,
    /// Compare regular English inflections as one (`experienced` matches `experience`).
    pub fold_inflections: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            min_token_chars: 2,
            fold_diacritics: false,
            fold_inflections: true,
        }
    }
}

/// Default policy: NFKC, lowercase, split on every non-alphanumeric run.
#[derive(Debug, Clone, Default)]
pub struct StandardNormalizer {
    config: NormalizerConfig,
}

impl StandardNormalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    fn finish_token(&self, raw: &mut String, tokens: &mut Vec<String>) {
        if raw.is_empty() {
            return;
        }
        let token = std::mem::take(raw);
        if token.chars().count() >= self.config.min_token_chars.max(1) {
            tokens.push(token);
        }
    }
}

impl Normalizer for StandardNormalizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::with_capacity(text.len() / 6 + 1);
        let mut current = String::new();

        // NFKC first: it can change char boundaries (ligatures, full-width forms).
        for ch in text.nfkc() {
            if ch.is_alphanumeric() {
                // Lowercasing may expand one char into several (`İ` -> `i̇`).
                current.extend(ch.to_lowercase());
            } else if is_combining_mark(ch) && !current.is_empty() {
                // Decomposed accents stay attached to their base letter.
                current.push(ch);
            } else {
                self.finish_token(&mut current, &mut tokens);
            }
        }
        self.finish_token(&mut current, &mut tokens);

        tokens
    }

    fn match_key(&self, surface: &str) -> String {
        let mut key = if self.config.fold_diacritics {
            strip_diacritics(surface)
        } else {
            surface.to_string()
        };
        if self.config.fold_inflections {
            key = fold_inflection(&key);
        }
        key
    }
}

/// Removes combining marks after canonical decomposition.
pub fn strip_diacritics(token: &str) -> String {
    token.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
}

/// Minimum token length (in bytes, ASCII only) before any suffix is touched.
const MIN_FOLD_LEN: usize = 4;

/// A trailing silent `e` is dropped only from keys at least this long, so
/// short words (`same`, `node`) keep their own key.
const MIN_SILENT_E_LEN: usize = 5;

/// Folds one regular English inflectional suffix, then a silent `e`, so a base
/// form and its inflections land on the same key (`automate`, `automated` ->
/// `automat`; `cache`, `caches` -> `cach`). The result is a comparison key and
/// need not be a word. Non-ASCII and short tokens are returned unchanged.
pub fn fold_inflection(token: &str) -> String {
    if token.len() < MIN_FOLD_LEN || !token.is_ascii() {
        return token.to_string();
    }

    let stem = strip_inflection(token);
    match stem.strip_suffix('e') {
        Some(rest) if stem.len() >= MIN_SILENT_E_LEN && !rest.ends_with('e') => rest.to_string(),
        _ => stem,
    }
}

fn strip_inflection(token: &str) -> String {
    if let Some(stem) = token.strip_suffix("ies") {
        if stem.len() >= 4 {
            return format!("{stem}y");
        }
    }
    if token.ends_with("sses")
        || token.ends_with("xes")
        || token.ends_with("ches")
        || token.ends_with("shes")
    {
        return token[..token.len() - 2].to_string();
    }

    if token.ends_with("eed") {
        return token.to_string();
    }
    for suffix in ["ed", "ing"] {
        if let Some(stem) = token.strip_suffix(suffix) {
            if stem.len() >= 3 && has_vowel(stem) {
                return undouble(stem).to_string();
            }
            return token.to_string();
        }
    }

    if let Some(stem) = token.strip_suffix('s') {
        let keeps_s = stem.ends_with(['s', 'u', 'i', 'o']);
        if !keeps_s && stem.len() >= 3 {
            return stem.to_string();
        }
    }

    token.to_string()
}

fn has_vowel(stem: &str) -> bool {
    stem.contains(['a', 'e', 'i', 'o', 'u', 'y'])
}

/// shipp -> ship, formatt -> format; `ll`, `ss`, `zz` stay (install, process).
fn undouble(stem: &str) -> &str {
    let bytes = stem.as_bytes();
    match bytes {
        [.., a, b] if a == b && !b"aeioulsz".contains(b) => &stem[..stem.len() - 1],
        _ => stem,
    }
}
