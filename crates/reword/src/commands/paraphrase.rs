//! Paraphrase command: tag, look up and substitute.

use camino::Utf8PathBuf;
use clap::Args;
use reword_core::{Config, EnglishAnalyzer, Paraphraser, RngSource, SynonymDictionary};
use serde::Serialize;
use tracing::{debug, instrument};

use super::{dictionary_builder, load_dictionary, read_input, save_dictionary, spinner};

/// Arguments for the `paraphrase` subcommand.
#[derive(Args, Debug, Default)]
pub struct ParaphraseArgs {
    /// Text to paraphrase (reads stdin when neither TEXT nor --file is given)
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<Utf8PathBuf>,

    /// JSON dictionary of words already looked up
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<Utf8PathBuf>,

    /// Write the updated dictionary back to the --dictionary file
    #[arg(long, requires = "dictionary")]
    pub save_dictionary: bool,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Never contact the lexical API
    #[arg(long)]
    pub offline: bool,

    /// Do not read or write the word cache
    #[arg(long)]
    pub no_cache: bool,
}

#[derive(Serialize)]
struct ParaphraseOutput<'a> {
    text: &'a str,
    dictionary_size: usize,
}

/// Paraphrase text and print the result.
#[instrument(name = "cmd_paraphrase", skip_all, fields(offline = args.offline))]
pub async fn cmd_paraphrase(
    args: ParaphraseArgs,
    global_json: bool,
    quiet: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let config = Config {
        offline: config.offline || args.offline,
        no_cache: config.no_cache || args.no_cache,
        ..config.clone()
    };
    let seed = args.seed.or(config.seed);
    debug!(?seed, offline = config.offline, "executing paraphrase command");

    let input = read_input(args.text.as_deref(), args.file.as_deref(), max_input_bytes)?;
    let prior = match &args.dictionary {
        Some(path) => load_dictionary(path, args.save_dictionary)?,
        None => SynonymDictionary::new(),
    };

    let builder = dictionary_builder(&config)?;
    let mut paraphraser =
        Paraphraser::new(EnglishAnalyzer::new(), builder, RngSource::from_seed(seed));

    let progress = spinner("looking up synonyms", global_json || quiet || config.offline);
    let result = paraphraser.paraphrase(input.trim(), &prior).await;
    progress.finish_and_clear();

    if args.save_dictionary
        && let Some(path) = &args.dictionary
    {
        save_dictionary(path, &result.dictionary)?;
        debug!(path = %path, size = result.dictionary.len(), "saved dictionary");
    }

    if global_json {
        let output = ParaphraseOutput {
            text: &result.text,
            dictionary_size: result.dictionary.len(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", result.text);
    }

    Ok(())
}
