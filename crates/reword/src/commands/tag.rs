//! Tag command: show the word classification without looking anything up.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use reword_core::{Category, EnglishAnalyzer, Tag, tag_words};
use tracing::{debug, instrument};

use super::read_input;

/// Arguments for the `tag` subcommand.
#[derive(Args, Debug, Default)]
pub struct TagArgs {
    /// Text to tag (reads stdin when neither TEXT nor --file is given)
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<Utf8PathBuf>,
}

/// Tag text and print one row per word.
#[instrument(name = "cmd_tag", skip_all)]
pub fn cmd_tag(
    args: TagArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let input = read_input(args.text.as_deref(), args.file.as_deref(), max_input_bytes)?;
    let tags = tag_words(&EnglishAnalyzer::new(), &input);
    debug!(tags = tags.len(), "executing tag command");

    if global_json {
        println!("{}", serde_json::to_string_pretty(&tags)?);
        return Ok(());
    }

    let width = tags.iter().map(|t| t.text.chars().count()).max().unwrap_or(0);
    for tag in &tags {
        let name = format!("{:<9}", tag.category.name());
        let name = match tag.category {
            Category::Other => name.dimmed().to_string(),
            _ => name.cyan().to_string(),
        };
        println!(
            "{:<width$}  {name}  {}{}",
            tag.text,
            tag.base,
            details(tag).dimmed()
        );
    }
    Ok(())
}

/// Morphology notes shown after the lemma.
fn details(tag: &Tag) -> String {
    let mut notes = Vec::new();
    match tag.category {
        Category::Noun { is_plural: true } => notes.push("plural".to_string()),
        Category::Verb { tense, is_negative } => {
            notes.push(tense.to_string());
            if is_negative {
                notes.push("negative".to_string());
            }
        }
        _ => {}
    }
    if tag.is_upper_case {
        notes.push("uppercase".to_string());
    } else if tag.is_title_case {
        notes.push("title case".to_string());
    }
    if notes.is_empty() {
        String::new()
    } else {
        format!(" ({})", notes.join(", "))
    }
}
