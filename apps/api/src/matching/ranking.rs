//! Keyword ranking — decides the order of matched, missing and listed keywords.
//!
//! Ranking never feeds into the score. Alternative heuristics (technical-term
//! detection, section weighting) plug in by implementing `KeywordRanking`.

use std::cmp::Ordering;

use crate::matching::keywords::Keyword;

pub trait KeywordRanking: Send + Sync {
    fn compare(&self, a: &Keyword, b: &Keyword) -> Ordering;

    /// Must be a stable sort so equal keys keep their incoming order.
    fn sort(&self, keywords: &mut [Keyword]) {
        keywords.sort_by(|a, b| self.compare(a, b));
    }
}

/// Higher count first, earlier first occurrence breaks ties.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyRanking;

impl KeywordRanking for FrequencyRanking {
    fn compare(&self, a: &Keyword, b: &Keyword) -> Ordering {
        b.count
            .cmp(&a.count)
            .then_with(|| a.first_seen.cmp(&b.first_seen))
    }
}

/// Plain first-seen order, ignoring counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstSeenRanking;

impl KeywordRanking for FirstSeenRanking {
    fn compare(&self, a: &Keyword, b: &Keyword) -> Ordering {
        a.first_seen.cmp(&b.first_seen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(term: &str, count: u32, first_seen: usize) -> Keyword {
        Keyword {
            term: term.to_string(),
            surface: term.to_string(),
            count,
            first_seen,
        }
    }

    #[test]
    fn test_frequency_ranking_tie_break_is_first_seen() {
        let mut list = vec![kw("c", 1, 5), kw("a", 2, 9), kw("b", 2, 1), kw("d", 1, 0)];
        FrequencyRanking.sort(&mut list);
        let order: Vec<&str> = list.iter().map(|k| k.term.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "d", "c"]);
    }

    #[test]
    fn test_first_seen_ranking_ignores_counts() {
        let mut list = vec![kw("late", 9, 4), kw("early", 1, 0)];
        FirstSeenRanking.sort(&mut list);
        assert_eq!(list[0].term, "early");
    }
}
