//! Synonym fetching from lexical APIs.
//!
//! Two response formats are understood, selected by [`Provider`]:
//!
//! - **Thesaurus** — an object keyed by part of speech, each holding lists
//!   under relation codes (`ant`, `rel`, `syn`, `sim`, `usr`). List items are
//!   plain words (score 1) or `{ "word", "score" }` objects.
//! - **Datamuse** — an array of `{ "word", "score", "tags" }` where the tags
//!   `n`, `v`, `adj` and `adv` name the part of speech.
//!
//! Both become a [`WordRecord`] whose synonym pools are weighted by score.

use std::future::Future;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use super::{PartOfSpeech, WordRecord};
use crate::config::{Config, Provider};
use crate::error::{FetchError, FetchResult};

/// Something that can look up synonym data for a lemma.
///
/// Failures are not errors at this level: a network problem or a bad
/// response comes back as `None`. A source that answered but knows no
/// synonyms returns an empty [`WordRecord`], which is worth remembering.
pub trait SynonymFetcher {
    /// Look up one lemma.
    fn fetch(&self, lemma: &str) -> impl Future<Output = Option<WordRecord>> + Send;
}

impl<F: SynonymFetcher + Sync> SynonymFetcher for &F {
    fn fetch(&self, lemma: &str) -> impl Future<Output = Option<WordRecord>> + Send {
        (**self).fetch(lemma)
    }
}

/// HTTP client for a lexical API.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    provider: Provider,
    url_template: String,
    api_key: Option<String>,
}

impl HttpFetcher {
    /// Create a fetcher for `provider` using a URL template.
    ///
    /// `{word}` in the template is replaced with the lemma and `{key}` with
    /// the API key.
    pub fn new(
        provider: Provider,
        url_template: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> FetchResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            provider,
            url_template: url_template.into(),
            api_key,
        })
    }

    /// Create a fetcher from the provider, URL, key and timeout in `config`.
    pub fn from_config(config: &Config) -> FetchResult<Self> {
        if config.provider == Provider::Thesaurus && config.api_key.is_none() {
            warn!("thesaurus provider configured without an api_key");
        }
        Self::new(
            config.provider,
            config.url_template(),
            config.api_key.clone(),
            config.request_timeout(),
        )
    }

    /// The provider whose format responses are parsed as.
    pub const fn provider(&self) -> Provider {
        self.provider
    }

    /// The URL requested for `lemma`.
    pub fn url_for(&self, lemma: &str) -> String {
        self.url_template
            .replace("{key}", self.api_key.as_deref().unwrap_or_default())
            .replace("{word}", lemma)
    }

    /// Request and parse one lemma, reporting what went wrong.
    #[tracing::instrument(skip(self), fields(provider = %self.provider))]
    pub async fn request(&self, lemma: &str) -> FetchResult<WordRecord> {
        let request_error = |source| FetchError::Request {
            lemma: lemma.to_string(),
            source,
        };

        let response = self
            .client
            .get(self.url_for(lemma))
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                lemma: lemma.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(request_error)?;
        debug!(bytes = body.len(), "received response");
        parse_response(self.provider, lemma, &body)
    }
}

impl SynonymFetcher for HttpFetcher {
    async fn fetch(&self, lemma: &str) -> Option<WordRecord> {
        match self.request(lemma).await {
            Ok(record) => {
                if record.is_empty() {
                    debug!(lemma, "no synonyms found");
                }
                Some(record)
            }
            Err(err) => {
                warn!(lemma, error = %err, "synonym lookup failed");
                None
            }
        }
    }
}

/// Parse a response body in the format of `provider`.
pub fn parse_response(provider: Provider, lemma: &str, body: &str) -> FetchResult<WordRecord> {
    match provider {
        Provider::Thesaurus => parse_thesaurus(lemma, body),
        Provider::Datamuse => parse_datamuse(lemma, body),
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Candidate {
    Plain(String),
    Scored {
        word: String,
        #[serde(default = "default_score")]
        score: f64,
    },
}

const fn default_score() -> f64 {
    1.0
}

impl Candidate {
    fn into_scored(self) -> (String, f64) {
        match self {
            Self::Plain(word) => (word, default_score()),
            Self::Scored { word, score } => (word, score),
        }
    }

    fn into_word(self) -> String {
        self.into_scored().0
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Relations {
    ant: Vec<Candidate>,
    rel: Vec<Candidate>,
    syn: Vec<Candidate>,
    sim: Vec<Candidate>,
    usr: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ThesaurusResponse {
    noun: Option<Relations>,
    verb: Option<Relations>,
    adjective: Option<Relations>,
    adverb: Option<Relations>,
}

impl ThesaurusResponse {
    const fn take(&mut self, pos: PartOfSpeech) -> Option<Relations> {
        match pos {
            PartOfSpeech::Noun => self.noun.take(),
            PartOfSpeech::Verb => self.verb.take(),
            PartOfSpeech::Adjective => self.adjective.take(),
            PartOfSpeech::Adverb => self.adverb.take(),
        }
    }
}

/// Parse a thesaurus-style response.
///
/// The synonym pool of each part of speech is `rel`, `syn`, `sim` and `usr`
/// concatenated in that order, duplicates kept.
pub fn parse_thesaurus(lemma: &str, body: &str) -> FetchResult<WordRecord> {
    if body.trim().is_empty() {
        return Ok(WordRecord::default());
    }
    let mut response: ThesaurusResponse =
        serde_json::from_str(body).map_err(|source| FetchError::Decode {
            lemma: lemma.to_string(),
            source,
        })?;

    let mut record = WordRecord::default();
    for pos in PartOfSpeech::ALL {
        let Some(relations) = response.take(pos) else {
            continue;
        };
        let pool = relations
            .rel
            .into_iter()
            .chain(relations.syn)
            .chain(relations.sim)
            .chain(relations.usr)
            .map(Candidate::into_scored)
            .collect();
        record.set_pool(pos, pool);
        *record.antonyms.get_mut(pos) = relations
            .ant
            .into_iter()
            .map(Candidate::into_word)
            .collect();
    }
    Ok(record)
}

#[derive(Debug, Deserialize)]
struct DatamuseWord {
    word: String,
    #[serde(default)]
    score: f64,
    #[serde(default)]
    tags: Vec<String>,
}

fn datamuse_pos(tag: &str) -> Option<PartOfSpeech> {
    match tag {
        "n" => Some(PartOfSpeech::Noun),
        "v" => Some(PartOfSpeech::Verb),
        "adj" => Some(PartOfSpeech::Adjective),
        "adv" => Some(PartOfSpeech::Adverb),
        _ => None,
    }
}

/// Parse a Datamuse `words` response.
///
/// A word tagged with several parts of speech joins each of their pools;
/// words with no part-of-speech tag are dropped.
pub fn parse_datamuse(lemma: &str, body: &str) -> FetchResult<WordRecord> {
    let words: Vec<DatamuseWord> =
        serde_json::from_str(body).map_err(|source| FetchError::Decode {
            lemma: lemma.to_string(),
            source,
        })?;

    let mut pools: [Vec<(String, f64)>; 4] = Default::default();
    for entry in words {
        for pos in entry.tags.iter().filter_map(|tag| datamuse_pos(tag)) {
            pools[pos as usize].push((entry.word.clone(), entry.score));
        }
    }

    let mut record = WordRecord::default();
    for (pos, pool) in PartOfSpeech::ALL.into_iter().zip(pools) {
        record.set_pool(pos, pool);
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::SynonymEntry;

    fn words(entries: &[SynonymEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.word.as_str()).collect()
    }

    #[test]
    fn thesaurus_concatenates_relations() {
        let body = r#"{
            "verb": {
                "syn": ["leap", "spring"],
                "rel": ["hop"],
                "sim": ["bound"],
                "usr": ["leap"],
                "ant": ["stay"]
            },
            "noun": { "syn": ["bound"] }
        }"#;
        let record = parse_thesaurus("jump", body).unwrap();
        assert_eq!(
            words(&record.verb),
            ["hop", "leap", "spring", "bound", "leap"]
        );
        assert!(record.verb.iter().all(|e| (e.probability - 0.2).abs() < 1e-12));
        assert_eq!(record.antonyms.verb, ["stay"]);
        assert_eq!(words(&record.noun), ["bound"]);
        assert!(record.adjective.is_empty());
        assert!(record.antonyms.noun.is_empty());
    }

    #[test]
    fn thesaurus_scored_variant() {
        let body = r#"{ "adjective": { "syn": [
            { "word": "fast", "score": 3 },
            { "word": "rapid", "score": 1 }
        ] } }"#;
        let record = parse_thesaurus("quick", body).unwrap();
        assert!((record.adjective[0].probability - 0.75).abs() < 1e-12);
        assert!((record.adjective[1].probability - 0.25).abs() < 1e-12);
    }

    #[test]
    fn thesaurus_ignores_unknown_sections() {
        let record = parse_thesaurus("x", r#"{ "interjection": { "syn": ["hey"] } }"#).unwrap();
        assert!(record.is_empty());
        assert!(parse_thesaurus("x", "   ").unwrap().is_empty());
    }

    #[test]
    fn thesaurus_rejects_garbage() {
        let err = parse_thesaurus("jump", "<html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode { ref lemma, .. } if lemma == "jump"));
    }

    #[test]
    fn datamuse_splits_by_tag() {
        let body = r#"[
            { "word": "fast", "score": 3000, "tags": ["syn", "adj"] },
            { "word": "speedy", "score": 1000, "tags": ["syn", "adj"] },
            { "word": "quickly", "score": 500, "tags": ["syn", "adv"] },
            { "word": "mystery", "score": 10, "tags": ["syn"] }
        ]"#;
        let record = parse_datamuse("quick", body).unwrap();
        assert_eq!(words(&record.adjective), ["fast", "speedy"]);
        assert!((record.adjective[0].probability - 0.75).abs() < 1e-12);
        assert_eq!(words(&record.adverb), ["quickly"]);
        assert!((record.adverb[0].probability - 1.0).abs() < 1e-12);
        assert!(record.noun.is_empty());
        assert!(record.antonyms.is_empty());
    }

    #[test]
    fn datamuse_without_scores_is_uniform() {
        let body = r#"[{ "word": "a", "tags": ["n"] }, { "word": "b", "tags": ["n"] }]"#;
        let record = parse_datamuse("x", body).unwrap();
        assert!((record.noun[0].probability - 0.5).abs() < 1e-12);
    }

    #[test]
    fn url_template_substitution() {
        let fetcher = HttpFetcher::new(
            Provider::Thesaurus,
            "https://example.test/api/2/{key}/{word}/json",
            Some("secret".into()),
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(
            fetcher.url_for("jump"),
            "https://example.test/api/2/secret/jump/json"
        );
        assert_eq!(fetcher.provider(), Provider::Thesaurus);
    }

    #[test]
    fn from_config_uses_provider_default() {
        let config = Config::default();
        let fetcher = HttpFetcher::from_config(&config).unwrap();
        assert_eq!(
            fetcher.url_for("quick"),
            "https://api.datamuse.com/words?rel_syn=quick&md=p"
        );
    }

    #[tokio::test]
    async fn unreachable_api_yields_nothing() {
        let fetcher = HttpFetcher::new(
            Provider::Datamuse,
            "http://127.0.0.1:9/words?rel_syn={word}",
            None,
            Duration::from_secs(2),
        )
        .unwrap();
        assert!(matches!(
            fetcher.request("jump").await,
            Err(FetchError::Request { .. })
        ));
        assert_eq!(fetcher.fetch("jump").await, None);
    }

    /// Answer every connection on a local port with an empty response.
    ///
    /// Returns a URL template pointing at the server.
    async fn serve(status: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response =
            format!("HTTP/1.1 {status}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{addr}/words?rel_syn={{word}}")
    }

    fn local_fetcher(url: String) -> HttpFetcher {
        HttpFetcher::new(Provider::Datamuse, url, None, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn error_status_yields_nothing() {
        let fetcher = local_fetcher(serve("404 Not Found").await);

        assert!(matches!(
            fetcher.request("zzz").await,
            Err(FetchError::Status { ref lemma, status: 404 }) if lemma == "zzz"
        ));
        assert_eq!(fetcher.fetch("zzz").await, None);
    }

    #[tokio::test]
    async fn error_status_leaves_words_unchanged() {
        use crate::analyzer::EnglishAnalyzer;
        use crate::lexical::{DictionaryBuilder, MemoryStore, SynonymDictionary};
        use crate::sampling::FixedDraws;
        use crate::substitute::Substituter;
        use crate::tagger::tag_words;

        let fetcher = local_fetcher(serve("503 Service Unavailable").await);
        let builder = DictionaryBuilder::new(MemoryStore::new(), fetcher);
        let analyzer = EnglishAnalyzer::new();
        let tags = tag_words(&analyzer, "The quick fox jumps.");

        let dictionary = builder.build(&tags, &SynonymDictionary::new()).await;
        assert!(dictionary.is_empty());
        assert!(builder.store().is_empty(), "failures are not cached");

        let text = Substituter::new(&analyzer, FixedDraws::new([0.0]))
            .substitute(&tags, &dictionary);
        assert_eq!(text, "The quick fox jumps.");
    }
}
