// Matching engine: CV text vs job description text.
// Pure and synchronous. No I/O, no shared mutable state; callers own transport and storage.

pub mod engine;
pub mod explainer;
pub mod keywords;
pub mod normalizer;
pub mod ranking;
pub mod scorer;
pub mod stopwords;

pub use engine::{
    score_match, CompatibilityScorer, EngineConfig, KeywordScope, MatchEngine, MatchResult,
};
pub use explainer::PhraseStyle;
pub use stopwords::Language;
