//! Text processing utilities.
//!
//! Splits input into whitespace-delimited words with their surrounding
//! punctuation peeled off, and provides the case helpers used when a
//! replacement word has to look like the word it replaces.

use std::sync::LazyLock;

use regex::Regex;

/// Regex for numbers, including decimals, ordinals and thousands separators.
static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?\d[\d,]*(?:\.\d+)?(?:st|nd|rd|th|s|%)?$").expect("valid regex")
});

/// One whitespace-delimited piece of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// Punctuation before the word (opening quotes, brackets).
    pub prefix: String,
    /// The word itself, with inner apostrophes and hyphens kept.
    pub core: String,
    /// Punctuation after the word (commas, periods, closing quotes).
    pub suffix: String,
}

impl Word {
    /// The word as it appeared in the input.
    pub fn surface(&self) -> String {
        format!("{}{}{}", self.prefix, self.core, self.suffix)
    }

    /// Whether the word ends a sentence.
    pub fn ends_sentence(&self) -> bool {
        self.suffix.contains(['.', '!', '?'])
    }
}

/// Split text on whitespace, separating leading and trailing punctuation.
///
/// A piece made only of punctuation keeps everything in `prefix` and has an
/// empty `core`.
pub fn split_words(text: &str) -> Vec<Word> {
    text.split_whitespace().map(split_word).collect()
}

fn split_word(raw: &str) -> Word {
    let is_inner = |c: char| c.is_alphanumeric();
    let Some(start) = raw.find(is_inner) else {
        return Word {
            prefix: raw.to_string(),
            core: String::new(),
            suffix: String::new(),
        };
    };
    let end = raw
        .rfind(is_inner)
        .map_or(raw.len(), |i| i + raw[i..].chars().next().map_or(1, char::len_utf8));

    // Keep a trailing percent sign with numbers ("15%").
    let end = if raw[end..].starts_with('%') {
        end + 1
    } else {
        end
    };

    Word {
        prefix: raw[..start].to_string(),
        core: raw[start..end].to_string(),
        suffix: raw[end..].to_string(),
    }
}

/// Lowercase a word and strip anything that is not part of a word.
pub fn normalize(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '\'' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect::<String>()
        .trim()
        .to_string()
}

/// Whether a word is a number ("42", "3.14", "1,000", "2nd").
pub fn is_number(word: &str) -> bool {
    NUMBER_PATTERN.is_match(word)
}

/// Whether the first letter of a word is uppercase.
pub fn is_title_case(word: &str) -> bool {
    word.chars()
        .find(|c| c.is_alphabetic())
        .is_some_and(char::is_uppercase)
}

/// Whether every cased letter of a word is uppercase.
///
/// Needs at least two letters, so "A" and "I" are not shouting.
pub fn is_upper_case(word: &str) -> bool {
    let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() > 1
        && letters.iter().any(|c| c.is_uppercase())
        && letters.iter().all(|c| !c.is_lowercase())
}

/// Uppercase the first character of a string, leaving the rest alone.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Re-apply a word's capitalization to a replacement.
///
/// Uppercase wins over title case; otherwise the replacement is returned as
/// produced.
pub fn apply_case(replacement: &str, upper: bool, title: bool) -> String {
    if upper {
        replacement.to_uppercase()
    } else if title {
        capitalize(replacement)
    } else {
        replacement.to_string()
    }
}
