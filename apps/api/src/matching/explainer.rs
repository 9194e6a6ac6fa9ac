//! Explainer — matched/missing partitions to user-facing phrases.
//!
//! Phrases keep the order the scorer produced. Empty partitions stay empty:
//! the "no results" copy belongs to whoever renders the lists.

use serde::{Deserialize, Serialize};

use crate::matching::scorer::MatchOutcome;
use crate::matching::stopwords::Language;

/// How a keyword is rendered into a phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "language")]
pub enum PhraseStyle {
    /// The keyword itself.
    #[default]
    Keyword,
    /// A short templated sentence in the given language.
    Sentence(Language),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Explainer {
    pub style: PhraseStyle,
    /// Cap per list; `None` keeps every phrase.
    pub max_phrases: Option<usize>,
}

impl Explainer {
    pub fn new(style: PhraseStyle) -> Self {
        Self {
            style,
            max_phrases: None,
        }
    }

    pub fn explain(&self, outcome: &MatchOutcome) -> Explanation {
        let limit = self.max_phrases.unwrap_or(usize::MAX);
        Explanation {
            strengths: outcome
                .matched
                .iter()
                .take(limit)
                .map(|k| self.strength_phrase(&k.surface))
                .collect(),
            gaps: outcome
                .missing
                .iter()
                .take(limit)
                .map(|k| self.gap_phrase(&k.surface))
                .collect(),
        }
    }

    fn strength_phrase(&self, term: &str) -> String {
        match self.style {
            PhraseStyle::Keyword => term.to_string(),
            PhraseStyle::Sentence(Language::English) => {
                format!("Your CV covers \"{term}\" from the job description.")
            }
            PhraseStyle::Sentence(Language::Hungarian) => {
                format!("Az önéletrajzod tartalmazza: \"{term}\".")
            }
        }
    }

    fn gap_phrase(&self, term: &str) -> String {
        match self.style {
            PhraseStyle::Keyword => term.to_string(),
            PhraseStyle::Sentence(Language::English) => {
                format!("Consider adding \"{term}\" to your CV if it applies.")
            }
            PhraseStyle::Sentence(Language::Hungarian) => {
                format!("Érdemes lehet kiegészíteni ezzel: \"{term}\".")
            }
        }
    }
}
