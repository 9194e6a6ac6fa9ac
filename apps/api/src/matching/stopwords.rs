//! Stopword filter — bilingual (English + Hungarian) deny-list.
//!
//! The lists below are grammatical filler plus job-posting boilerplate.
//! Domain words such as "experience" / "tapasztalat" are deliberately absent.
//! Anything not listed passes through.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matching::normalizer::{Normalizer, Token};

/// Languages the dashboard offers. Each maps to one stopword list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hu")]
    Hungarian,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Hungarian];

    pub fn stopwords(self) -> &'static [&'static str] {
        match self {
            Language::English => ENGLISH_STOPWORDS,
            Language::Hungarian => HUNGARIAN_STOPWORDS,
        }
    }
}

pub const ENGLISH_STOPWORDS: &[&str] = &[
    // articles, conjunctions
    "a", "an", "the", "and", "or", "but", "nor", "so", "yet", "if", "then", "than",
    "as", "because", "while", "whether", "either", "neither", "both",
    // prepositions
    "at", "by", "for", "from", "in", "into", "of", "on", "onto", "to", "with",
    "within", "without", "about", "above", "after", "against", "among", "around",
    "before", "behind", "below", "between", "beyond", "during", "over", "under",
    "through", "across", "along", "upon", "via", "per", "off", "out", "up", "down",
    // pronouns, determiners
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves",
    "you", "your", "yours", "yourself", "he", "him", "his", "she", "her", "hers",
    "it", "its", "itself", "they", "them", "their", "theirs", "this", "that",
    "these", "those", "who", "whom", "whose", "which", "what", "where", "when",
    "why", "how", "all", "any", "each", "every", "few", "more", "most", "other",
    "others", "some", "such", "own", "same", "there", "here",
    // auxiliaries, generic verbs
    "be", "am", "is", "are", "was", "were", "been", "being", "have", "has", "had",
    "having", "do", "does", "did", "doing", "will", "would", "shall", "should",
    "can", "could", "may", "might", "must", "get", "gets", "make", "makes",
    "include", "includes", "including", "like", "want", "wants",
    // adverbs, fillers
    "not", "no", "yes", "only", "too", "very", "just", "also", "well", "etc",
    "eg", "ie", "again", "further", "once", "always", "often", "already",
    // posting boilerplate
    "requirement", "requirements", "require", "requires", "required",
    "responsibility", "responsibilities", "preferred", "plus", "nice", "ideal",
    "candidate", "candidates", "role", "position", "looking", "seeking", "join",
    "opportunity", "year", "years", "ability", "able", "strong", "good",
    "excellent",
];

pub const HUNGARIAN_STOPWORDS: &[&str] = &[
    // névelők, kötőszavak
    "a", "az", "egy", "és", "s", "vagy", "de", "hogy", "is", "sem", "se", "mint",
    "ha", "akkor", "mert", "pedig", "illetve", "valamint", "továbbá", "vagyis",
    "azaz", "tehát", "hanem", "ill",
    // névutók
    "által", "alatt", "felett", "fölött", "között", "mellett", "után", "előtt",
    "szerint", "számára", "részére", "nélkül", "óta", "miatt", "keresztül", "helyett",
    "során", "iránt",
    // névmások
    "én", "te", "ő", "mi", "ti", "ők", "engem", "téged", "őt", "minket", "titeket",
    "őket", "ez", "ezek", "azok", "ezt", "azt", "ennek", "annak", "ebben", "abban",
    "itt", "ott", "ide", "oda", "aki", "ami", "amely", "amelyek", "akik", "amit",
    "akit", "ahol", "amikor", "amelyet", "amelyben", "saját", "minden", "más",
    "egyéb",
    // segédigék, általános igék
    "van", "vannak", "volt", "voltak", "lesz", "lesznek", "lenne", "legyen",
    "kell", "lehet", "lehetőség", "való", "nincs", "nem", "igen", "már", "még",
    "csak", "meg", "el", "ki", "be", "fel", "le", "át", "össze", "vissza",
    "nagyon", "jól", "jó",
    // álláshirdetés sablonszavai
    "követelmény", "követelmények", "elvárás", "elvárások", "feladat", "feladatok",
    "előny", "előnyt", "jelent", "munkakör", "pozíció", "pozícióra", "jelölt",
    "jelöltet", "keresünk", "várjuk", "kínálunk", "legalább", "év", "éves",
];

/// Deny-list of match keys.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    words: HashSet<String>,
}

impl StopwordFilter {
    /// Builds the filter for the given languages.
    ///
    /// Every listed word goes through `normalizer` so the set holds exactly
    /// the token shapes the normalizer emits (folded diacritics, folded
    /// inflections, and so on).
    pub fn for_languages(languages: &[Language], normalizer: &dyn Normalizer) -> Self {
        let mut filter = Self::default();
        for language in languages {
            filter.insert_all(language.stopwords().iter().copied(), normalizer);
        }
        filter
    }

    /// Both dashboard languages.
    pub fn bilingual(normalizer: &dyn Normalizer) -> Self {
        Self::for_languages(&Language::ALL, normalizer)
    }

    /// Adds caller-configured words on top of the built-in lists.
    pub fn with_extra<I, S>(mut self, words: I, normalizer: &dyn Normalizer) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.insert_all(words, normalizer);
        self
    }

    fn insert_all<I, S>(&mut self, words: I, normalizer: &dyn Normalizer)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.words
                .extend(normalizer.tokens(word.as_ref()).into_iter().map(|t| t.key));
        }
    }

    /// `key` is a match key, as produced by `Normalizer::match_key`.
    pub fn is_stopword(&self, key: &str) -> bool {
        self.words.contains(key)
    }

    /// Drops stopwords, keeping the order of everything else.
    pub fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .filter(|t| !self.is_stopword(&t.key))
            .collect()
    }
}
