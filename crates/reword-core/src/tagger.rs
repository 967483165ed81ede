//! Word tagging.
//!
//! Turns [`Analyzer`] output into [`Tag`]s: one per token, classified as a
//! noun, verb, adjective, adverb or "other", with the lemma used for
//! dictionary lookups and what substitution needs to re-inflect a
//! replacement.

use serde::Serialize;
use tracing::debug;

use crate::analyzer::{AnalyzedToken, Analyzer, GrammarTag, Tense};
use crate::error::AnalyzerResult;
use crate::lexical::PartOfSpeech;
use crate::text;

/// Content-word category with its morphological details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum Category {
    /// A common noun.
    Noun {
        /// Whether the original word is plural.
        is_plural: bool,
    },
    /// A verb or verb phrase.
    Verb {
        /// Conjugation class of the original.
        tense: Tense,
        /// Whether the original is negated ("didn't go").
        is_negative: bool,
    },
    /// An adjective.
    Adjective,
    /// An adverb.
    Adverb,
    /// Anything that is never replaced.
    Other,
}

impl Category {
    /// The dictionary section this category draws synonyms from.
    pub const fn part_of_speech(&self) -> Option<PartOfSpeech> {
        match self {
            Self::Noun { .. } => Some(PartOfSpeech::Noun),
            Self::Verb { .. } => Some(PartOfSpeech::Verb),
            Self::Adjective => Some(PartOfSpeech::Adjective),
            Self::Adverb => Some(PartOfSpeech::Adverb),
            Self::Other => None,
        }
    }

    /// Short lowercase name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Noun { .. } => "noun",
            Self::Verb { .. } => "verb",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
            Self::Other => "other",
        }
    }
}

/// One classified token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    /// The token exactly as it appeared, punctuation included.
    pub text: String,
    /// Leading punctuation.
    pub prefix: String,
    /// Trailing punctuation.
    pub suffix: String,
    /// Lowercased, punctuation-stripped form.
    pub normal: String,
    /// Dictionary lemma.
    pub base: String,
    /// First letter is uppercase.
    pub is_title_case: bool,
    /// Every letter is uppercase.
    pub is_upper_case: bool,
    /// Category and its details.
    #[serde(flatten)]
    pub category: Category,
}

/// Tag every token of `input`.
///
/// Tokens the analyzer cannot handle come back as [`Category::Other`] with
/// `base` equal to `normal`; tagging itself never fails.
#[tracing::instrument(skip_all, fields(input_len = input.len()))]
pub fn tag_words<A: Analyzer + ?Sized>(analyzer: &A, input: &str) -> Vec<Tag> {
    let tags: Vec<Tag> = analyzer
        .analyze(input)
        .into_iter()
        .map(|token| tag_token(analyzer, token))
        .collect();

    debug!(
        tags = tags.len(),
        content = tags
            .iter()
            .filter(|t| t.category != Category::Other)
            .count(),
        "tagged input"
    );
    tags
}

fn tag_token<A: Analyzer + ?Sized>(analyzer: &A, token: AnalyzedToken) -> Tag {
    let (base, category) = match classify(analyzer, &token) {
        Ok(classified) => classified,
        Err(err) => {
            debug!(token = %token.text, error = %err, "token degraded to other");
            (token.normal.clone(), Category::Other)
        }
    };

    Tag {
        is_title_case: token.has(GrammarTag::TitleCase),
        is_upper_case: text::is_upper_case(&token.core),
        text: token.text,
        prefix: token.prefix,
        suffix: token.suffix,
        normal: token.normal,
        base,
        category,
    }
}

/// Pick a category in the order noun, verb, adjective, adverb, other.
fn classify<A: Analyzer + ?Sized>(
    analyzer: &A,
    token: &AnalyzedToken,
) -> AnalyzerResult<(String, Category)> {
    let normal = token.normal.as_str();
    if normal.is_empty() {
        return Ok((String::new(), Category::Other));
    }

    if token.has(GrammarTag::Noun) {
        let base = analyzer.to_singular(normal)?;
        let is_plural = token.has(GrammarTag::Plural);
        return Ok((base, Category::Noun { is_plural }));
    }

    if token.has(GrammarTag::Verb) {
        let conjugation = analyzer.conjugate(normal)?;
        let is_negative = token.has(GrammarTag::Negative) || analyzer.is_negative(normal);
        return Ok((
            conjugation.infinitive,
            Category::Verb {
                tense: conjugation.tense,
                is_negative,
            },
        ));
    }

    let category = if token.has(GrammarTag::Adjective) {
        Category::Adjective
    } else if token.has(GrammarTag::Adverb) {
        Category::Adverb
    } else {
        Category::Other
    };
    Ok((normal.to_string(), category))
}
