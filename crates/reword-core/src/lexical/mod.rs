//! Synonym data: records, dictionaries, fetching and caching.
//!
//! - [`fetch`] — [`SynonymFetcher`] and the HTTP client for the lexical APIs
//! - [`store`] — [`SynonymStore`] backends (memory, files, none)
//! - [`builder`] — [`DictionaryBuilder`], which combines the two

pub mod builder;
pub mod fetch;
pub mod store;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use builder::DictionaryBuilder;
pub use fetch::{HttpFetcher, SynonymFetcher};
pub use store::{FileStore, MemoryStore, NullStore, SynonymStore, open_store};

/// A dictionary section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    /// Nouns.
    Noun,
    /// Verbs.
    Verb,
    /// Adjectives.
    Adjective,
    /// Adverbs.
    Adverb,
}

impl PartOfSpeech {
    /// All sections, in record order.
    pub const ALL: [Self; 4] = [Self::Noun, Self::Verb, Self::Adjective, Self::Adverb];

    /// Returns the section name as a lowercase string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate replacement and its chance of being picked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynonymEntry {
    /// The replacement word or phrase.
    pub word: String,
    /// Probability in `[0, 1]`; a section's entries sum to 1.
    pub probability: f64,
}

/// Antonym lists per section. Only the verb list is used, for negated verbs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Antonyms {
    /// Noun antonyms.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub noun: Vec<String>,
    /// Verb antonyms.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub verb: Vec<String>,
    /// Adjective antonyms.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub adjective: Vec<String>,
    /// Adverb antonyms.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub adverb: Vec<String>,
}

impl Antonyms {
    /// Antonyms for one section.
    pub fn get(&self, pos: PartOfSpeech) -> &[String] {
        match pos {
            PartOfSpeech::Noun => &self.noun,
            PartOfSpeech::Verb => &self.verb,
            PartOfSpeech::Adjective => &self.adjective,
            PartOfSpeech::Adverb => &self.adverb,
        }
    }

    /// Mutable antonym list for one section.
    pub const fn get_mut(&mut self, pos: PartOfSpeech) -> &mut Vec<String> {
        match pos {
            PartOfSpeech::Noun => &mut self.noun,
            PartOfSpeech::Verb => &mut self.verb,
            PartOfSpeech::Adjective => &mut self.adjective,
            PartOfSpeech::Adverb => &mut self.adverb,
        }
    }

    /// Whether every list is empty.
    pub fn is_empty(&self) -> bool {
        PartOfSpeech::ALL.iter().all(|&pos| self.get(pos).is_empty())
    }
}

/// Synonym and antonym data for one lemma.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    /// Noun synonyms.
    #[serde(default)]
    pub noun: Vec<SynonymEntry>,
    /// Verb synonyms.
    #[serde(default)]
    pub verb: Vec<SynonymEntry>,
    /// Adjective synonyms.
    #[serde(default)]
    pub adjective: Vec<SynonymEntry>,
    /// Adverb synonyms.
    #[serde(default)]
    pub adverb: Vec<SynonymEntry>,
    /// Antonyms as returned by the source.
    #[serde(default, skip_serializing_if = "Antonyms::is_empty")]
    pub antonyms: Antonyms,
}

impl WordRecord {
    /// Synonyms for one section.
    pub fn synonyms(&self, pos: PartOfSpeech) -> &[SynonymEntry] {
        match pos {
            PartOfSpeech::Noun => &self.noun,
            PartOfSpeech::Verb => &self.verb,
            PartOfSpeech::Adjective => &self.adjective,
            PartOfSpeech::Adverb => &self.adverb,
        }
    }

    /// Replace a section's synonyms with a scored pool.
    ///
    /// See [`weigh`] for how scores become probabilities.
    pub fn set_pool(&mut self, pos: PartOfSpeech, pool: Vec<(String, f64)>) {
        let entries = weigh(pool);
        match pos {
            PartOfSpeech::Noun => self.noun = entries,
            PartOfSpeech::Verb => self.verb = entries,
            PartOfSpeech::Adjective => self.adjective = entries,
            PartOfSpeech::Adverb => self.adverb = entries,
        }
    }

    /// Whether the record offers nothing at all.
    pub fn is_empty(&self) -> bool {
        PartOfSpeech::ALL
            .iter()
            .all(|&pos| self.synonyms(pos).is_empty())
            && self.antonyms.is_empty()
    }

    /// Total number of synonym candidates across sections.
    pub fn synonym_count(&self) -> usize {
        PartOfSpeech::ALL
            .iter()
            .map(|&pos| self.synonyms(pos).len())
            .sum()
    }
}

/// Lemma → record mapping for one paraphrase call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynonymDictionary(BTreeMap<String, WordRecord>);

impl SynonymDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a lemma.
    pub fn get(&self, lemma: &str) -> Option<&WordRecord> {
        self.0.get(lemma)
    }

    /// Whether a lemma is present.
    pub fn contains(&self, lemma: &str) -> bool {
        self.0.contains_key(lemma)
    }

    /// Add or replace a lemma's record.
    pub fn insert(&mut self, lemma: impl Into<String>, record: WordRecord) -> Option<WordRecord> {
        self.0.insert(lemma.into(), record)
    }

    /// Number of lemmas.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate lemmas and records in lemma order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WordRecord)> {
        self.0.iter().map(|(lemma, record)| (lemma.as_str(), record))
    }

    /// Add every entry of `other`, replacing records for lemmas already here.
    pub fn merge(&mut self, other: Self) {
        self.0.extend(other.0);
    }
}

impl FromIterator<(String, WordRecord)> for SynonymDictionary {
    fn from_iter<I: IntoIterator<Item = (String, WordRecord)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Turn relevance scores into probabilities that sum to 1.
///
/// Each score is divided by the pool total. Negative scores count as zero,
/// and a pool whose total is zero is weighted uniformly. An empty pool gives
/// no entries.
pub fn weigh(pool: Vec<(String, f64)>) -> Vec<SynonymEntry> {
    if pool.is_empty() {
        return Vec::new();
    }
    let clamp = |score: f64| if score.is_finite() { score.max(0.0) } else { 0.0 };
    let total: f64 = pool.iter().map(|&(_, score)| clamp(score)).sum();

    #[allow(clippy::cast_precision_loss)]
    let uniform = 1.0 / pool.len() as f64;

    pool.into_iter()
        .map(|(word, score)| SynonymEntry {
            word,
            probability: if total > 0.0 {
                clamp(score) / total
            } else {
                uniform
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(items: &[(&str, f64)]) -> Vec<(String, f64)> {
        items.iter().map(|&(w, s)| (w.to_string(), s)).collect()
    }

    fn sum(entries: &[SynonymEntry]) -> f64 {
        entries.iter().map(|e| e.probability).sum()
    }

    #[test]
    fn weights_sum_to_one() {
        let entries = weigh(pool(&[("fast", 3.0), ("rapid", 1.0), ("swift", 4.0)]));
        assert!((sum(&entries) - 1.0).abs() < 1e-9);
        assert!((entries[0].probability - 0.375).abs() < 1e-9);
        assert_eq!(entries[2].word, "swift");
    }

    #[test]
    fn many_small_scores_still_sum_to_one() {
        let items: Vec<(String, f64)> = (0..97)
            .map(|i| (format!("w{i}"), 0.1 + f64::from(i)))
            .collect();
        let entries = weigh(items);
        assert!((sum(&entries) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_total_is_uniform() {
        let entries = weigh(pool(&[("a", 0.0), ("b", 0.0), ("c", -2.0), ("d", 0.0)]));
        assert!(entries.iter().all(|e| (e.probability - 0.25).abs() < 1e-12));
    }

    #[test]
    fn empty_pool_gives_nothing() {
        assert!(weigh(Vec::new()).is_empty());
    }

    #[test]
    fn record_sections() {
        let mut record = WordRecord::default();
        assert!(record.is_empty());
        record.set_pool(PartOfSpeech::Verb, pool(&[("leap", 1.0)]));
        record.antonyms.get_mut(PartOfSpeech::Verb).push("stay".into());
        assert_eq!(record.synonyms(PartOfSpeech::Verb)[0].word, "leap");
        assert!(record.synonyms(PartOfSpeech::Noun).is_empty());
        assert_eq!(record.antonyms.get(PartOfSpeech::Verb), ["stay"]);
        assert_eq!(record.synonym_count(), 1);
        assert!(!record.is_empty());
    }

    #[test]
    fn dictionary_json_shape() {
        let json = r#"{
            "quick": { "adjective": [{ "word": "fast", "probability": 1.0 }] },
            "go": { "verb": [], "antonyms": { "verb": ["stop"] } }
        }"#;
        let dictionary: SynonymDictionary = serde_json::from_str(json).unwrap();
        assert_eq!(dictionary.len(), 2);
        let quick = dictionary.get("quick").unwrap();
        assert_eq!(quick.adjective[0].word, "fast");
        assert!(quick.noun.is_empty());
        assert_eq!(dictionary.get("go").unwrap().antonyms.verb, ["stop"]);

        let back = serde_json::to_value(&dictionary).unwrap();
        assert!(back["quick"].get("antonyms").is_none());
    }

    #[test]
    fn merge_prefers_newer_records() {
        let mut older = SynonymDictionary::new();
        older.insert("quick", WordRecord::default());
        let mut newer = SynonymDictionary::new();
        let mut record = WordRecord::default();
        record.set_pool(PartOfSpeech::Adjective, pool(&[("fast", 1.0)]));
        newer.insert("quick", record.clone());
        newer.insert("fox", WordRecord::default());

        older.merge(newer);
        assert_eq!(older.len(), 2);
        assert_eq!(older.get("quick"), Some(&record));
    }
}
