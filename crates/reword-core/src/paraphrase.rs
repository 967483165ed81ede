//! The end-to-end pipeline: tag, build the dictionary, substitute.

use serde::Serialize;
use tracing::info;

use crate::analyzer::Analyzer;
use crate::lexical::{DictionaryBuilder, SynonymDictionary, SynonymFetcher, SynonymStore};
use crate::sampling::RandomSource;
use crate::substitute::Substituter;
use crate::tagger::{Tag, tag_words};

/// Result of one paraphrase call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paraphrase {
    /// The rewritten text.
    pub text: String,
    /// The prior dictionary plus every lemma looked up for this call.
    ///
    /// Pass it back in as the prior of the next call to skip repeat lookups.
    pub dictionary: SynonymDictionary,
}

/// Paraphrases text with injected collaborators.
///
/// Nothing in the pipeline fails: words that cannot be analyzed, looked up,
/// sampled or re-inflected are kept as they were.
#[derive(Debug)]
pub struct Paraphraser<A, S, F, R> {
    analyzer: A,
    builder: DictionaryBuilder<S, F>,
    random: R,
}

impl<A, S, F, R> Paraphraser<A, S, F, R>
where
    A: Analyzer,
    S: SynonymStore,
    F: SynonymFetcher,
    R: RandomSource,
{
    /// Assemble a paraphraser.
    pub const fn new(analyzer: A, builder: DictionaryBuilder<S, F>, random: R) -> Self {
        Self {
            analyzer,
            builder,
            random,
        }
    }

    /// The analyzer in use.
    pub const fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// The dictionary builder in use.
    pub const fn builder(&self) -> &DictionaryBuilder<S, F> {
        &self.builder
    }

    /// Tag `input` without looking anything up.
    pub fn tag(&self, input: &str) -> Vec<Tag> {
        tag_words(&self.analyzer, input)
    }

    /// Paraphrase `input`, reusing the lemmas already in `prior`.
    #[tracing::instrument(skip_all, fields(input_len = input.len(), prior = prior.len()))]
    pub async fn paraphrase(&mut self, input: &str, prior: &SynonymDictionary) -> Paraphrase {
        let tags = self.tag(input);
        let dictionary = self.builder.build(&tags, prior).await;
        let text =
            Substituter::new(&self.analyzer, &mut self.random).substitute(&tags, &dictionary);

        info!(
            words = tags.len(),
            dictionary = dictionary.len(),
            "paraphrased text"
        );
        Paraphrase { text, dictionary }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::EnglishAnalyzer;
    use crate::lexical::{MemoryStore, NullStore, PartOfSpeech, WordRecord};
    use crate::sampling::{FixedDraws, RngSource};

    /// Knows a fixed set of words.
    struct StaticFetcher(SynonymDictionary);

    impl SynonymFetcher for StaticFetcher {
        async fn fetch(&self, lemma: &str) -> Option<WordRecord> {
            self.0.get(lemma).cloned()
        }
    }

    /// Every request fails.
    struct DownFetcher;

    impl SynonymFetcher for DownFetcher {
        async fn fetch(&self, _lemma: &str) -> Option<WordRecord> {
            None
        }
    }

    fn record(pos: PartOfSpeech, words: &[(&str, f64)]) -> WordRecord {
        let mut record = WordRecord::default();
        record.set_pool(
            pos,
            words.iter().map(|&(w, s)| (w.to_string(), s)).collect(),
        );
        record
    }

    fn known() -> SynonymDictionary {
        let mut dictionary = SynonymDictionary::new();
        dictionary.insert("quick", record(PartOfSpeech::Adjective, &[("fast", 1.0)]));
        dictionary.insert("jump", record(PartOfSpeech::Verb, &[("leap", 1.0)]));
        dictionary
    }

    #[tokio::test]
    async fn reference_sentence_from_prior() {
        let builder = DictionaryBuilder::new(NullStore, DownFetcher);
        let mut paraphraser =
            Paraphraser::new(EnglishAnalyzer::new(), builder, FixedDraws::new([0.5]));

        let result = paraphraser.paraphrase("The quick fox jumps.", &known()).await;
        assert_eq!(result.text, "The fast fox leaps.");
        assert_eq!(result.dictionary, known());
    }

    #[tokio::test]
    async fn reference_sentence_from_fetcher() {
        let store = MemoryStore::new();
        let builder = DictionaryBuilder::new(&store, StaticFetcher(known()));
        let mut paraphraser =
            Paraphraser::new(EnglishAnalyzer::new(), builder, FixedDraws::new([0.5]));

        let result = paraphraser
            .paraphrase("The quick fox jumps.", &SynonymDictionary::new())
            .await;
        assert_eq!(result.text, "The fast fox leaps.");
        assert_eq!(result.dictionary.len(), 2);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn unreachable_source_returns_input() {
        let builder = DictionaryBuilder::new(NullStore, DownFetcher);
        let mut paraphraser =
            Paraphraser::new(EnglishAnalyzer::new(), builder, RngSource::seeded(1));

        let result = paraphraser
            .paraphrase("The QUICK fox jumps.", &SynonymDictionary::new())
            .await;
        assert_eq!(result.text, "The QUICK fox jumps.");
        assert!(result.dictionary.is_empty());
    }

    #[tokio::test]
    async fn same_seed_same_output() {
        let mut dictionary = SynonymDictionary::new();
        dictionary.insert(
            "quick",
            record(
                PartOfSpeech::Adjective,
                &[("fast", 1.0), ("rapid", 1.0), ("swift", 1.0), ("speedy", 1.0)],
            ),
        );
        let input = "quick quick quick quick quick quick";

        let mut outputs = Vec::new();
        for _ in 0..2 {
            let builder = DictionaryBuilder::new(NullStore, DownFetcher);
            let mut paraphraser =
                Paraphraser::new(EnglishAnalyzer::new(), builder, RngSource::seeded(42));
            outputs.push(paraphraser.paraphrase(input, &dictionary).await.text);
        }
        assert_eq!(outputs[0], outputs[1]);
        assert_eq!(outputs[0].split(' ').count(), 6);
    }

    #[test]
    fn tag_skips_lookups() {
        let builder = DictionaryBuilder::new(NullStore, DownFetcher);
        let paraphraser = Paraphraser::new(EnglishAnalyzer::new(), builder, FixedDraws::default());
        assert_eq!(paraphraser.tag("The quick fox jumps.").len(), 4);
    }
}
