//! Command implementations.

use std::io::Read;
use std::time::Duration;

use anyhow::Context;
use camino::Utf8Path;
use indicatif::{ProgressBar, ProgressStyle};
use reword_core::{
    Config, DictionaryBuilder, HttpFetcher, SynonymDictionary, SynonymStore, open_store,
};

pub mod info;
pub mod lookup;
pub mod paraphrase;
pub mod tag;

/// The dictionary builder the CLI runs with: configured store, HTTP fetcher.
pub type CliBuilder = DictionaryBuilder<Box<dyn SynonymStore + Send + Sync>, HttpFetcher>;

/// Build the store and fetcher described by `config`.
pub fn dictionary_builder(config: &Config) -> anyhow::Result<CliBuilder> {
    let fetcher = HttpFetcher::from_config(config).context("failed to create HTTP client")?;
    Ok(DictionaryBuilder::new(open_store(config), fetcher)
        .with_phrases(config.fetch_phrases)
        .offline(config.offline))
}

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Input text from the argument, a file, or stdin, in that order.
pub fn read_input(
    text: Option<&str>,
    file: Option<&Utf8Path>,
    max_bytes: Option<usize>,
) -> anyhow::Result<String> {
    let content = match (text, file) {
        (Some(text), _) => text.to_string(),
        (None, Some(path)) => return read_input_file(path, max_bytes),
        (None, None) => {
            let mut buf = String::new();
            // One byte past the limit is enough to report it
            let limit = max_bytes
                .and_then(|max| u64::try_from(max).ok())
                .map_or(u64::MAX, |max| max.saturating_add(1));
            std::io::stdin()
                .take(limit)
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    if let Some(max) = max_bytes
        && content.len() > max
    {
        anyhow::bail!(
            "input too large: {} bytes (limit: {max} bytes)",
            content.len()
        );
    }
    Ok(content)
}

/// Load a prior dictionary. A missing file is an empty dictionary when
/// `allow_missing` is set.
pub fn load_dictionary(path: &Utf8Path, allow_missing: bool) -> anyhow::Result<SynonymDictionary> {
    if allow_missing && !path.exists() {
        return Ok(SynonymDictionary::new());
    }
    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read dictionary {path}"))?;
    serde_json::from_str(&content).with_context(|| format!("invalid dictionary {path}"))
}

/// Write a dictionary as pretty JSON.
pub fn save_dictionary(path: &Utf8Path, dictionary: &SynonymDictionary) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(dictionary)?;
    std::fs::write(path.as_std_path(), json + "\n")
        .with_context(|| format!("failed to write dictionary {path}"))
}

/// A stderr spinner, hidden when `hidden` is set or stderr is not a terminal.
pub fn spinner(message: &'static str, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
