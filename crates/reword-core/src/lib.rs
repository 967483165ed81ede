//! Core library for reword.
//!
//! This crate provides the paraphrasing pipeline used by the `reword` CLI and
//! any downstream consumers: words are tagged by part of speech, synonyms are
//! looked up per lemma (cached in a store, fetched from a lexical API when
//! missing), and each content word is swapped for a weighted random synonym
//! re-inflected to match the original.
//!
//! # Modules
//!
//! - [`analyzer`] - Grammatical analysis and re-inflection
//! - [`tagger`] - Word classification into nouns, verbs, adjectives and adverbs
//! - [`lexical`] - Word records, dictionaries, fetchers and stores
//! - [`sampling`] - Random sources and weighted choice
//! - [`substitute`] - Synonym substitution
//! - [`paraphrase`] - The end-to-end pipeline
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use reword_core::{
//!     DictionaryBuilder, EnglishAnalyzer, HttpFetcher, MemoryStore, Paraphraser, RngSource,
//!     SynonymDictionary,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let (config, _sources) = reword_core::ConfigLoader::new().load()?;
//! let fetcher = HttpFetcher::from_config(&config)?;
//! let builder = DictionaryBuilder::new(MemoryStore::new(), fetcher);
//! let mut paraphraser = Paraphraser::new(EnglishAnalyzer::new(), builder, RngSource::seeded(7));
//!
//! let result = paraphraser
//!     .paraphrase("The quick fox jumps.", &SynonymDictionary::new())
//!     .await;
//! println!("{}", result.text);
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code)]

pub mod analyzer;
pub mod config;
pub mod dictionaries;
pub mod error;
pub mod lexical;
pub mod paraphrase;
pub mod sampling;
pub mod substitute;
pub mod tagger;
pub mod text;

pub use analyzer::{Analyzer, EnglishAnalyzer, GrammarTag, Tense};
pub use config::{Config, ConfigLoader, DEFAULT_MAX_INPUT_BYTES, LogLevel, Provider};
pub use error::{
    AnalyzerError, AnalyzerResult, ConfigError, ConfigResult, FetchError, FetchResult, StoreError,
    StoreResult,
};
pub use lexical::{
    DictionaryBuilder, FileStore, HttpFetcher, MemoryStore, NullStore, PartOfSpeech,
    SynonymDictionary, SynonymEntry, SynonymFetcher, SynonymStore, WordRecord, open_store,
};
pub use paraphrase::{Paraphrase, Paraphraser};
pub use sampling::{FixedDraws, RandomSource, RngSource};
pub use substitute::Substituter;
pub use tagger::{Category, Tag, tag_words};
