//! Keyword extraction — filtered tokens to a deduplicated, counted set.

use std::collections::HashMap;

use serde::Serialize;

use crate::matching::normalizer::Token;
use crate::matching::ranking::KeywordRanking;

/// One distinct keyword from a single input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Keyword {
    /// Match key; two keywords are the same keyword iff their terms are equal.
    pub term: String,
    /// Spelling of the first occurrence, as shown to users.
    pub surface: String,
    /// Occurrences within this input only.
    pub count: u32,
    /// Position of the first occurrence in the filtered token stream.
    pub first_seen: usize,
}

/// Deduplicated keywords of one input, in first-seen order.
///
/// The `Vec` carries the order, the map is only an index into it, so nothing
/// observable depends on hash iteration order.
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    keywords: Vec<Keyword>,
    index: HashMap<String, usize>,
}

impl KeywordSet {
    /// Counts tokens by key and drops keywords seen fewer than `min_count`
    /// times. A `min_count` of 0 or 1 keeps everything.
    pub fn from_tokens<I>(tokens: I, min_count: u32) -> Self
    where
        I: IntoIterator<Item = Token>,
    {
        let mut keywords: Vec<Keyword> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for (position, token) in tokens.into_iter().enumerate() {
            match index.get(&token.key) {
                Some(&slot) => keywords[slot].count += 1,
                None => {
                    index.insert(token.key.clone(), keywords.len());
                    keywords.push(Keyword {
                        term: token.key,
                        surface: token.surface,
                        count: 1,
                        first_seen: position,
                    });
                }
            }
        }

        if min_count > 1 {
            keywords.retain(|k| k.count >= min_count);
            index = keywords
                .iter()
                .enumerate()
                .map(|(slot, k)| (k.term.clone(), slot))
                .collect();
        }

        Self { keywords, index }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.index.contains_key(term)
    }

    pub fn get(&self, term: &str) -> Option<&Keyword> {
        self.index.get(term).map(|&slot| &self.keywords[slot])
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// First-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Keyword> {
        self.keywords.iter()
    }

    pub fn terms(&self) -> Vec<&str> {
        self.keywords.iter().map(|k| k.term.as_str()).collect()
    }

    pub fn surfaces(&self) -> Vec<&str> {
        self.keywords.iter().map(|k| k.surface.as_str()).collect()
    }

    /// All keywords ordered by `ranking`.
    pub fn ranked(&self, ranking: &dyn KeywordRanking) -> Vec<Keyword> {
        let mut out = self.keywords.clone();
        ranking.sort(&mut out);
        out
    }
}
