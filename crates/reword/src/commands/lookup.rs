//! Lookup command: the word record for one lemma.

use clap::Args;
use owo_colors::OwoColorize;
use reword_core::text::normalize;
use reword_core::{Config, PartOfSpeech, WordRecord};
use tracing::{debug, instrument};

use super::{dictionary_builder, spinner};

/// Arguments for the `lookup` subcommand.
#[derive(Args, Debug, Default)]
pub struct LookupArgs {
    /// Word to look up (use the dictionary form: "go", not "went")
    pub word: String,

    /// Only consult the word cache
    #[arg(long)]
    pub offline: bool,
}

/// Look up one word, from the cache or the lexical API.
#[instrument(name = "cmd_lookup", skip_all, fields(word = %args.word))]
pub async fn cmd_lookup(
    args: LookupArgs,
    global_json: bool,
    quiet: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let lemma = normalize(&args.word);
    if lemma.is_empty() {
        anyhow::bail!("nothing to look up in {:?}", args.word);
    }
    let config = Config {
        offline: config.offline || args.offline,
        ..config.clone()
    };
    debug!(lemma, offline = config.offline, "executing lookup command");

    let builder = dictionary_builder(&config)?;
    let progress = spinner("looking up synonyms", global_json || quiet || config.offline);
    let record = builder.lookup(&lemma).await;
    progress.finish_and_clear();

    let Some(record) = record else {
        anyhow::bail!("no synonyms found for {lemma:?}");
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_record(&lemma, &record);
    }
    Ok(())
}

fn print_record(lemma: &str, record: &WordRecord) {
    println!("{}", lemma.bold());
    for pos in PartOfSpeech::ALL {
        let synonyms = record.synonyms(pos);
        if !synonyms.is_empty() {
            let words: Vec<String> = synonyms
                .iter()
                .map(|entry| format!("{} ({:.2})", entry.word, entry.probability))
                .collect();
            println!("  {}: {}", pos.as_str().cyan(), words.join(", "));
        }
        let antonyms = record.antonyms.get(pos);
        if !antonyms.is_empty() {
            println!(
                "  {} {}: {}",
                pos.as_str().cyan(),
                "antonyms".dimmed(),
                antonyms.join(", ")
            );
        }
    }
}
