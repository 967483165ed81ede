//! Dictionary building: store lookups plus concurrent fetches.

use std::collections::BTreeSet;

use futures::StreamExt;
use tracing::{debug, warn};

use super::{SynonymDictionary, SynonymFetcher, SynonymStore, WordRecord};
use crate::tagger::{Category, Tag};

/// Upper bound on lexical API requests in flight during one build.
pub const MAX_CONCURRENT_FETCHES: usize = 16;

/// Distinct lemmas worth looking up, in sorted order.
///
/// Tags of category [`Category::Other`] and empty bases are skipped.
pub fn lemmas(tags: &[Tag]) -> BTreeSet<String> {
    tags.iter()
        .filter(|tag| tag.category != Category::Other && !tag.base.is_empty())
        .map(|tag| tag.base.clone())
        .collect()
}

/// Builds the [`SynonymDictionary`] for a tagged input.
///
/// Lemmas are resolved from the prior dictionary first, then the store, and
/// only then fetched. Fetches for one build run concurrently, up to
/// [`MAX_CONCURRENT_FETCHES`] at a time, and all of them finish before the
/// dictionary is returned. Every answer the fetcher gives is written back to
/// the store, empty ones included, but only records with synonyms or
/// antonyms enter the dictionary.
#[derive(Debug)]
pub struct DictionaryBuilder<S, F> {
    store: S,
    fetcher: F,
    fetch_phrases: bool,
    offline: bool,
}

impl<S: SynonymStore, F: SynonymFetcher> DictionaryBuilder<S, F> {
    /// Create a builder over a store and a fetcher.
    pub const fn new(store: S, fetcher: F) -> Self {
        Self {
            store,
            fetcher,
            fetch_phrases: false,
            offline: false,
        }
    }

    /// Also fetch lemmas containing spaces (default: skip them).
    #[must_use]
    pub const fn with_phrases(mut self, fetch_phrases: bool) -> Self {
        self.fetch_phrases = fetch_phrases;
        self
    }

    /// Never fetch; resolve lemmas from the prior dictionary and store only.
    #[must_use]
    pub const fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// The underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Build the dictionary for `tags`, starting from `prior`.
    ///
    /// Lemmas whose lookup fails or returns nothing are left out.
    #[tracing::instrument(skip_all, fields(tags = tags.len(), prior = prior.len()))]
    pub async fn build(&self, tags: &[Tag], prior: &SynonymDictionary) -> SynonymDictionary {
        let mut dictionary = prior.clone();
        let mut missing = Vec::new();
        let mut from_store = 0usize;

        for lemma in lemmas(tags) {
            if dictionary.contains(&lemma) {
                continue;
            }
            match self.cached(&lemma) {
                Some(record) => {
                    from_store += 1;
                    if !record.is_empty() {
                        dictionary.insert(lemma, record);
                    }
                }
                None => missing.push(lemma),
            }
        }

        let to_fetch: Vec<String> = missing
            .into_iter()
            .filter(|lemma| self.should_fetch(lemma))
            .collect();

        let fetched: Vec<_> = futures::stream::iter(&to_fetch)
            .map(|lemma| async move { (lemma, self.fetcher.fetch(lemma).await) })
            .buffered(MAX_CONCURRENT_FETCHES)
            .collect()
            .await;

        let mut added = 0usize;
        for (lemma, record) in fetched {
            let Some(record) = record else {
                debug!(lemma, "lookup failed");
                continue;
            };
            // Empty answers are stored too, so the lemma counts as known.
            self.persist(lemma, &record);
            if !record.is_empty() {
                dictionary.insert(lemma.clone(), record);
                added += 1;
            }
        }

        debug!(
            from_store,
            requested = to_fetch.len(),
            fetched = added,
            size = dictionary.len(),
            "built dictionary"
        );
        dictionary
    }

    /// Resolve a single lemma: store first, then the fetcher.
    #[tracing::instrument(skip(self))]
    pub async fn lookup(&self, lemma: &str) -> Option<WordRecord> {
        if let Some(record) = self.cached(lemma) {
            return (!record.is_empty()).then_some(record);
        }
        if self.offline {
            return None;
        }
        let record = self.fetcher.fetch(lemma).await?;
        self.persist(lemma, &record);
        (!record.is_empty()).then_some(record)
    }

    fn should_fetch(&self, lemma: &str) -> bool {
        if self.offline {
            return false;
        }
        if lemma.contains(' ') && !self.fetch_phrases {
            debug!(lemma, "skipping multi-word lemma");
            return false;
        }
        true
    }

    /// Store read that treats a failing store as a miss.
    fn cached(&self, lemma: &str) -> Option<WordRecord> {
        match self.store.get(lemma) {
            Ok(record) => record,
            Err(err) => {
                warn!(lemma, error = %err, "synonym store unavailable, fetching instead");
                None
            }
        }
    }

    fn persist(&self, lemma: &str, record: &WordRecord) {
        if let Err(err) = self.store.set(lemma, record) {
            warn!(lemma, error = %err, "failed to cache word record");
        }
    }
}
