//! Grammatical analysis: tokenizing, tagging and re-inflecting English.
//!
//! The rest of the crate only talks to the [`Analyzer`] trait, so a different
//! part-of-speech model can be plugged in. [`EnglishAnalyzer`] is the bundled
//! rule-based implementation:
//!
//! - **Tagging** ([`english`]) — word lists, suffix rules and the class of the
//!   previous word decide each token's [`GrammarTag`]s
//! - **Inflection** ([`inflect`]) — plurals, tenses, gerunds and negation

pub mod english;
pub mod inflect;

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use english::EnglishAnalyzer;

use crate::error::AnalyzerResult;

/// Grammatical marker attached to an analyzed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrammarTag {
    /// Common noun.
    Noun,
    /// Plural noun.
    Plural,
    /// Capitalized name; never replaced.
    ProperNoun,
    /// Possessive form ("fox's").
    Possessive,
    /// Verb or verb phrase.
    Verb,
    /// Past tense or past participle.
    PastTense,
    /// Third-person present tense.
    PresentTense,
    /// Future tense ("will go").
    FutureTense,
    /// Bare form ("go", "don't go").
    Infinitive,
    /// Progressive "-ing" form.
    Gerund,
    /// Negated verb phrase or negation particle.
    Negative,
    /// Adjective.
    Adjective,
    /// Adverb.
    Adverb,
    /// Article, demonstrative or quantifier.
    Determiner,
    /// Pronoun.
    Pronoun,
    /// Preposition.
    Preposition,
    /// Conjunction.
    Conjunction,
    /// Form of "be", "have" or "do".
    Auxiliary,
    /// Modal verb.
    Modal,
    /// Number.
    Value,
    /// Punctuation with no word in it.
    Punctuation,
    /// First letter is uppercase.
    TitleCase,
}

/// Conjugation class of a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tense {
    /// "went", "did not go".
    Past,
    /// "goes", "does not go".
    Present,
    /// "will go".
    Future,
    /// "going".
    Gerund,
    /// "go", "do not go".
    Infinitive,
}

impl Tense {
    /// Returns the tense name as a lowercase string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Past => "past",
            Self::Present => "present",
            Self::Future => "future",
            Self::Gerund => "gerund",
            Self::Infinitive => "infinitive",
        }
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One analyzed token.
///
/// Verb phrases such as "didn't go" are a single token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzedToken {
    /// Surface text, punctuation included.
    pub text: String,
    /// Leading punctuation.
    pub prefix: String,
    /// The word or phrase without surrounding punctuation.
    pub core: String,
    /// Trailing punctuation.
    pub suffix: String,
    /// Lowercased core with stray punctuation removed.
    pub normal: String,
    /// Grammatical markers.
    pub tags: BTreeSet<GrammarTag>,
}

impl AnalyzedToken {
    /// Check whether the token carries a tag.
    pub fn has(&self, tag: GrammarTag) -> bool {
        self.tags.contains(&tag)
    }
}

/// Infinitive and conjugation class of a verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conjugation {
    /// Bare form ("go" for "didn't go").
    pub infinitive: String,
    /// Detected conjugation class.
    pub tense: Tense,
}

/// A grammatical text-analysis capability.
///
/// Per-word operations take normalized (lowercase) words or phrases.
pub trait Analyzer {
    /// Split text into tokens and tag each one.
    fn analyze(&self, text: &str) -> Vec<AnalyzedToken>;

    /// Singular form of a noun phrase.
    fn to_singular(&self, noun: &str) -> AnalyzerResult<String>;

    /// Plural form of a noun phrase.
    fn to_plural(&self, noun: &str) -> AnalyzerResult<String>;

    /// Whether a noun phrase is plural.
    fn is_plural(&self, noun: &str) -> bool;

    /// Infinitive and conjugation class of a verb phrase.
    fn conjugate(&self, verb: &str) -> AnalyzerResult<Conjugation>;

    /// Whether a verb phrase is negated.
    fn is_negative(&self, verb: &str) -> bool;

    /// Simple past ("leapt").
    fn to_past_tense(&self, verb: &str) -> AnalyzerResult<String>;

    /// Third-person present ("leaps").
    fn to_present_tense(&self, verb: &str) -> AnalyzerResult<String>;

    /// Future ("will leap").
    fn to_future_tense(&self, verb: &str) -> AnalyzerResult<String>;

    /// Progressive form ("leaping").
    fn to_gerund(&self, verb: &str) -> AnalyzerResult<String>;

    /// Bare form ("leap").
    fn to_infinitive(&self, verb: &str) -> AnalyzerResult<String>;

    /// Negate a verb phrase, keeping its tense ("leapt" → "did not leap").
    fn to_negative(&self, verb: &str) -> AnalyzerResult<String>;

    /// Inflect a verb phrase to the given tense.
    fn to_tense(&self, verb: &str, tense: Tense) -> AnalyzerResult<String> {
        match tense {
            Tense::Past => self.to_past_tense(verb),
            Tense::Present => self.to_present_tense(verb),
            Tense::Future => self.to_future_tense(verb),
            Tense::Gerund => self.to_gerund(verb),
            Tense::Infinitive => self.to_infinitive(verb),
        }
    }

    /// Render tokens back to text, single-space separated.
    fn render(&self, tokens: &[AnalyzedToken]) -> String {
        tokens
            .iter()
            .map(|token| token.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<A: Analyzer + ?Sized> Analyzer for &A {
    fn analyze(&self, text: &str) -> Vec<AnalyzedToken> {
        (**self).analyze(text)
    }
    fn to_singular(&self, noun: &str) -> AnalyzerResult<String> {
        (**self).to_singular(noun)
    }
    fn to_plural(&self, noun: &str) -> AnalyzerResult<String> {
        (**self).to_plural(noun)
    }
    fn is_plural(&self, noun: &str) -> bool {
        (**self).is_plural(noun)
    }
    fn conjugate(&self, verb: &str) -> AnalyzerResult<Conjugation> {
        (**self).conjugate(verb)
    }
    fn is_negative(&self, verb: &str) -> bool {
        (**self).is_negative(verb)
    }
    fn to_past_tense(&self, verb: &str) -> AnalyzerResult<String> {
        (**self).to_past_tense(verb)
    }
    fn to_present_tense(&self, verb: &str) -> AnalyzerResult<String> {
        (**self).to_present_tense(verb)
    }
    fn to_future_tense(&self, verb: &str) -> AnalyzerResult<String> {
        (**self).to_future_tense(verb)
    }
    fn to_gerund(&self, verb: &str) -> AnalyzerResult<String> {
        (**self).to_gerund(verb)
    }
    fn to_infinitive(&self, verb: &str) -> AnalyzerResult<String> {
        (**self).to_infinitive(verb)
    }
    fn to_negative(&self, verb: &str) -> AnalyzerResult<String> {
        (**self).to_negative(verb)
    }
}
