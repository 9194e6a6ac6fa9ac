//! Match engine — wires the pipeline together and exposes the call contract.
//!
//! raw text → normalizer → stopword filter → keyword extractor (per input)
//! → scorer → explainer → `MatchResult`
//!
//! The engine holds only immutable data built at construction, so one
//! instance can be shared across threads and requests without locking.

use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::explainer::{Explainer, PhraseStyle};
use crate::matching::keywords::KeywordSet;
use crate::matching::normalizer::{Normalizer, NormalizerConfig, StandardNormalizer};
use crate::matching::ranking::{FrequencyRanking, KeywordRanking};
use crate::matching::scorer::score_keywords;
use crate::matching::stopwords::StopwordFilter;

/// Which keywords are surfaced in `MatchResult::keywords`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordScope {
    /// Job keywords only.
    #[default]
    Job,
    /// Job keywords, then keywords found only in the CV.
    Union,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub normalizer: NormalizerConfig,
    /// Applied identically to the CV and the job text.
    pub min_keyword_count: u32,
    pub keyword_scope: KeywordScope,
    pub extra_stopwords: Vec<String>,
    /// Cap on `strengths` and on `gaps`; `None` keeps every phrase.
    pub max_phrases: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            normalizer: NormalizerConfig::default(),
            min_keyword_count: 1,
            keyword_scope: KeywordScope::Job,
            extra_stopwords: Vec::new(),
            max_phrases: None,
        }
    }
}

/// Final verdict handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub score: u8, // 0 – 100
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub keywords: Vec<String>,
}

/// Anything that can turn (CV, job) text into a `MatchResult`.
///
/// Carried in `AppState` as `Arc<dyn CompatibilityScorer>`.
pub trait CompatibilityScorer: Send + Sync {
    fn score(&self, cv_text: &str, job_text: &str, style: PhraseStyle) -> MatchResult;
}

pub struct MatchEngine {
    normalizer: Box<dyn Normalizer>,
    stopwords: StopwordFilter,
    ranking: Arc<dyn KeywordRanking>,
    min_keyword_count: u32,
    keyword_scope: KeywordScope,
    max_phrases: Option<usize>,
}

impl MatchEngine {
    pub fn new(config: EngineConfig) -> Self {
        let normalizer = StandardNormalizer::new(config.normalizer.clone());
        Self::with_normalizer(config, Box::new(normalizer))
    }

    /// Uses a caller-supplied tokenizer. Stopwords are compiled through it.
    pub fn with_normalizer(config: EngineConfig, normalizer: Box<dyn Normalizer>) -> Self {
        let stopwords = StopwordFilter::bilingual(normalizer.as_ref())
            .with_extra(&config.extra_stopwords, normalizer.as_ref());
        Self {
            normalizer,
            stopwords,
            ranking: Arc::new(FrequencyRanking),
            min_keyword_count: config.min_keyword_count,
            keyword_scope: config.keyword_scope,
            max_phrases: config.max_phrases,
        }
    }

    pub fn with_ranking(mut self, ranking: Arc<dyn KeywordRanking>) -> Self {
        self.ranking = ranking;
        self
    }

    /// Keyword set of a single text.
    pub fn extract(&self, text: &str) -> KeywordSet {
        let tokens = self.normalizer.tokens(text);
        let filtered = self.stopwords.filter(tokens);
        KeywordSet::from_tokens(filtered, self.min_keyword_count)
    }

    pub fn score(&self, cv_text: &str, job_text: &str, style: PhraseStyle) -> MatchResult {
        let explainer = Explainer {
            style,
            max_phrases: self.max_phrases,
        };
        self.score_with(cv_text, job_text, &explainer)
    }

    pub fn score_with(&self, cv_text: &str, job_text: &str, explainer: &Explainer) -> MatchResult {
        let job = self.extract(job_text);
        let cv = self.extract(cv_text);
        let outcome = score_keywords(&job, &cv, self.ranking.as_ref());
        let explanation = explainer.explain(&outcome);

        // Surfaces come from the job side for shared keys, so a word is spelled
        // the same way in `keywords`, `strengths` and `gaps`.
        let mut keywords: Vec<String> = job
            .ranked(self.ranking.as_ref())
            .into_iter()
            .map(|k| k.surface)
            .collect();
        if self.keyword_scope == KeywordScope::Union {
            keywords.extend(
                cv.ranked(self.ranking.as_ref())
                    .into_iter()
                    .filter(|k| !job.contains(&k.term))
                    .map(|k| k.surface),
            );
        }

        debug!(
            job_keywords = job.len(),
            cv_keywords = cv.len(),
            matched = outcome.matched.len(),
            score = outcome.score,
            "Scored CV against job description"
        );

        MatchResult {
            score: outcome.score,
            strengths: explanation.strengths,
            gaps: explanation.gaps,
            keywords,
        }
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl CompatibilityScorer for MatchEngine {
    fn score(&self, cv_text: &str, job_text: &str, style: PhraseStyle) -> MatchResult {
        MatchEngine::score(self, cv_text, job_text, style)
    }
}

static DEFAULT_ENGINE: LazyLock<MatchEngine> = LazyLock::new(MatchEngine::default);

/// Scores with the default configuration and plain keyword phrases.
pub fn score_match(cv_text: &str, job_text: &str) -> MatchResult {
    DEFAULT_ENGINE.score(cv_text, job_text, PhraseStyle::Keyword)
}
