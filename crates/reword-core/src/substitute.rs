//! Substitution: replacing tagged words with weighted random synonyms.

use tracing::debug;

use crate::analyzer::{Analyzer, Tense};
use crate::error::AnalyzerResult;
use crate::lexical::{PartOfSpeech, SynonymDictionary, WordRecord};
use crate::sampling::{RandomSource, choose_uniform, sample_weighted};
use crate::tagger::{Category, Tag};
use crate::text;

/// Rewrites a tag sequence using a [`SynonymDictionary`].
///
/// Holds the analyzer used to re-inflect replacements and the random source
/// that picks them.
#[derive(Debug)]
pub struct Substituter<'a, A: ?Sized, R> {
    analyzer: &'a A,
    random: R,
}

impl<'a, A: Analyzer + ?Sized, R: RandomSource> Substituter<'a, A, R> {
    /// Create a substituter.
    pub const fn new(analyzer: &'a A, random: R) -> Self {
        Self { analyzer, random }
    }

    /// Rewrite every tag and join the results with single spaces.
    #[tracing::instrument(skip_all, fields(tags = tags.len(), dictionary = dictionary.len()))]
    pub fn substitute(&mut self, tags: &[Tag], dictionary: &SynonymDictionary) -> String {
        let mut replaced = 0usize;
        let words: Vec<String> = tags
            .iter()
            .map(|tag| {
                self.replace(tag, dictionary).map_or_else(
                    || tag.text.clone(),
                    |word| {
                        replaced += 1;
                        word
                    },
                )
            })
            .collect();
        debug!(replaced, "substituted words");
        words.join(" ")
    }

    /// The replacement for one tag, punctuation and case included.
    ///
    /// `None` means the original text stands: the tag is never replaced, its
    /// lemma has no record, sampling missed, or re-inflection failed.
    pub fn replace(&mut self, tag: &Tag, dictionary: &SynonymDictionary) -> Option<String> {
        let pos = tag.category.part_of_speech()?;
        let record = dictionary.get(&tag.base)?;
        let word = self.pick(tag, pos, record)?;
        Some(format!(
            "{}{}{}",
            tag.prefix,
            text::apply_case(&word, tag.is_upper_case, tag.is_title_case),
            tag.suffix
        ))
    }

    fn pick(&mut self, tag: &Tag, pos: PartOfSpeech, record: &WordRecord) -> Option<String> {
        // A negated verb with antonyms swaps meaning instead of negating.
        if let Category::Verb {
            tense,
            is_negative: true,
        } = tag.category
            && !record.antonyms.verb.is_empty()
        {
            let antonym = choose_uniform(&record.antonyms.verb, self.random.next_unit())?;
            return self.inflected(tag, self.analyzer.to_tense(antonym, tense));
        }

        let candidates = record.synonyms(pos);
        if candidates.is_empty() {
            return None;
        }
        let draw = self.random.next_unit();
        let Some(entry) = sample_weighted(candidates, draw) else {
            debug!(lemma = %tag.base, draw, "sampling missed, keeping original");
            return None;
        };
        let word = entry.word.as_str();

        let result = match tag.category {
            Category::Noun { is_plural: true } => self.analyzer.to_plural(word),
            Category::Verb { tense, is_negative } => self.verb(word, tense, is_negative),
            Category::Noun { .. } | Category::Adjective | Category::Adverb => Ok(word.to_string()),
            Category::Other => return None,
        };
        self.inflected(tag, result)
    }

    fn verb(&self, word: &str, tense: Tense, is_negative: bool) -> AnalyzerResult<String> {
        let inflected = self.analyzer.to_tense(word, tense)?;
        if is_negative {
            self.analyzer.to_negative(&inflected)
        } else {
            Ok(inflected)
        }
    }

    fn inflected(&self, tag: &Tag, result: AnalyzerResult<String>) -> Option<String> {
        result
            .inspect_err(|err| debug!(word = %tag.text, error = %err, "re-inflection failed"))
            .ok()
    }
}
