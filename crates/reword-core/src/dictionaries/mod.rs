//! Dictionaries for English analysis.
//!
//! Provides curated word sets used by part-of-speech tagging and
//! re-inflection of replacement words.

pub mod irregular_nouns;
pub mod irregular_verbs;
pub mod lexicon;
