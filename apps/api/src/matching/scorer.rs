//! Matcher / Scorer — job keywords vs CV keywords.
//!
//! Algorithm:
//! 1. `matched` = job keywords whose term is also a CV keyword (exact term)
//! 2. `missing` = the remaining job keywords
//! 3. `score` = round(100 × |matched| / |job|), 0 when the job side is empty
//!
//! The job set is always the denominator, so swapping the inputs changes the
//! result. Counts only affect ordering, never the score.

use serde::Serialize;

use crate::matching::keywords::{Keyword, KeywordSet};
use crate::matching::ranking::KeywordRanking;

/// Output of comparing two keyword sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchOutcome {
    pub score: u8, // 0 – 100
    pub matched: Vec<Keyword>,
    pub missing: Vec<Keyword>,
}

pub fn score_keywords(
    job: &KeywordSet,
    cv: &KeywordSet,
    ranking: &dyn KeywordRanking,
) -> MatchOutcome {
    if job.is_empty() {
        return MatchOutcome {
            score: 0,
            matched: vec![],
            missing: vec![],
        };
    }

    let (mut matched, mut missing): (Vec<Keyword>, Vec<Keyword>) =
        job.iter().cloned().partition(|k| cv.contains(&k.term));

    ranking.sort(&mut matched);
    ranking.sort(&mut missing);

    MatchOutcome {
        score: percentage(matched.len(), job.len()),
        matched,
        missing,
    }
}

/// `round(100 * part / whole)` with halves rounded up, in integer arithmetic.
fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole) as u64;
    let whole = whole as u64;
    ((200 * part + whole) / (2 * whole)) as u8
}
