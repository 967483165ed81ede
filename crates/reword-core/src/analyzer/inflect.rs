//! Inflection rules for English nouns and verbs.
//!
//! Word-level functions work on a single lowercase word. The phrase helpers
//! inflect the head of a multi-word expression: the last word of a noun
//! phrase ("ice creams") and the first word of a verb phrase ("took off").

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::dictionaries::irregular_nouns::{
    SINGULAR_S_NOUNS, irregular_plural, irregular_singular, is_invariant, is_singular_s,
};
use crate::dictionaries::irregular_verbs::{irregular_base, irregular_past, is_irregular_base};
use crate::dictionaries::lexicon::{MODALS, VERBS};

/// Multi-syllable verbs that still double their final consonant.
static DOUBLING_VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "admit", "commit", "compel", "control", "equip", "expel", "occur", "omit", "patrol",
        "permit", "prefer", "propel", "rebel", "recur", "refer", "regret", "submit", "transfer",
    ]
    .into_iter()
    .collect()
});

/// Forms of "be" and "have" that take "not" directly after them.
const NOT_TAKERS: &[&str] = &["am", "is", "are", "was", "were", "has", "have", "had"];

/// Shape of a recognized verb form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbForm {
    /// "jump"
    Base,
    /// "jumps"
    ThirdPerson,
    /// "jumped", "went", "gone"
    Past,
    /// "jumping"
    Gerund,
}

/// Check if a word is the base form of a verb we know about.
pub fn is_known_verb(word: &str) -> bool {
    VERBS.contains(word) || is_irregular_base(word) || matches!(word, "be" | "have" | "do")
}

const fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c)
}

fn vowel_groups(word: &str) -> usize {
    let mut groups = 0;
    let mut in_group = false;
    for c in word.chars() {
        let vowel = is_vowel(c);
        if vowel && !in_group {
            groups += 1;
        }
        in_group = vowel;
    }
    groups
}

/// Consonant-vowel-consonant ending, excluding final w, x and y.
fn ends_cvc(word: &str) -> bool {
    let mut tail = word.chars().rev();
    match (tail.next(), tail.next(), tail.next()) {
        (Some(c), Some(v), Some(before)) => {
            is_consonant(c)
                && !matches!(c, 'w' | 'x' | 'y')
                && is_vowel(v)
                && is_consonant(before)
        }
        _ => false,
    }
}

fn doubles_final(word: &str) -> bool {
    ends_cvc(word) && (vowel_groups(word) == 1 || DOUBLING_VERBS.contains(word))
}

fn double_final(word: &str) -> String {
    match word.chars().last() {
        Some(c) => format!("{word}{c}"),
        None => String::new(),
    }
}

fn ends_with_sibilant(word: &str) -> bool {
    ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|ending| word.ends_with(ending))
}

fn ends_consonant_y(word: &str) -> bool {
    let mut tail = word.chars().rev();
    matches!((tail.next(), tail.next()), (Some('y'), Some(c)) if is_consonant(c))
}

/// Drop one of a doubled final consonant ("stopp" → "stop").
fn undouble(stem: &str) -> Option<String> {
    let mut tail = stem.chars().rev();
    match (tail.next(), tail.next()) {
        (Some(a), Some(b)) if a == b && is_consonant(a) => {
            Some(stem[..stem.len() - a.len_utf8()].to_string())
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Nouns
// ---------------------------------------------------------------------------

/// Singular form of a single noun.
pub fn singularize(word: &str) -> String {
    if word.len() < 3 || is_invariant(word) || word.ends_with("'s") {
        return word.to_string();
    }
    if let Some(singular) = irregular_singular(word) {
        return singular.to_string();
    }
    if irregular_plural(word).is_some() || is_singular_s(word) {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("ies")
        && stem.len() > 1
    {
        return format!("{stem}y");
    }
    for ending in ["sses", "xes", "ches", "shes", "zzes"] {
        if word.ends_with(ending) {
            return word[..word.len() - 2].to_string();
        }
    }
    if let Some(stem) = word.strip_suffix("es")
        && SINGULAR_S_NOUNS.contains(stem)
    {
        return stem.to_string();
    }
    match word.strip_suffix('s') {
        Some(stem) if !stem.ends_with('s') => stem.to_string(),
        _ => word.to_string(),
    }
}

/// Plural form of a single noun.
pub fn pluralize(word: &str) -> String {
    if word.is_empty() || is_invariant(word) {
        return word.to_string();
    }
    if let Some(plural) = irregular_plural(word) {
        return plural.to_string();
    }
    if irregular_singular(word).is_some() {
        return word.to_string();
    }
    if ends_consonant_y(word) {
        return format!("{}ies", &word[..word.len() - 1]);
    }
    if ends_with_sibilant(word) {
        return format!("{word}es");
    }
    format!("{word}s")
}

/// Whether a single noun looks plural.
pub fn looks_plural(word: &str) -> bool {
    if irregular_singular(word).is_some() {
        return true;
    }
    if is_invariant(word) || is_singular_s(word) || word.ends_with("'s") {
        return false;
    }
    word.len() > 2 && word.ends_with('s') && !word.ends_with("us")
}

// ---------------------------------------------------------------------------
// Verbs
// ---------------------------------------------------------------------------

fn first_known(candidates: impl IntoIterator<Item = String>) -> Option<String> {
    candidates.into_iter().find(|c| is_known_verb(c))
}

fn ing_candidates(stem: &str) -> Vec<String> {
    let mut candidates = vec![stem.to_string(), format!("{stem}e")];
    candidates.extend(undouble(stem));
    if let Some(root) = stem.strip_suffix('y') {
        candidates.push(format!("{root}ie"));
    }
    candidates
}

fn ed_candidates(stem: &str) -> Vec<String> {
    let mut candidates = vec![stem.to_string(), format!("{stem}e")];
    candidates.extend(undouble(stem));
    if let Some(root) = stem.strip_suffix('i') {
        candidates.push(format!("{root}y"));
    }
    candidates
}

fn s_candidates(word: &str) -> Vec<String> {
    let mut candidates = Vec::new();
    if let Some(stem) = word.strip_suffix("ies") {
        candidates.push(format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("es") {
        candidates.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix('s') {
        candidates.push(stem.to_string());
    }
    candidates
}

/// Recognize an inflected form of a known verb.
///
/// Returns the base form and the shape of the inflection, or `None` when
/// the word is not a form of any verb in the lexicon.
pub fn verb_form(word: &str) -> Option<(String, VerbForm)> {
    if is_known_verb(word) {
        return Some((word.to_string(), VerbForm::Base));
    }
    match word {
        "is" | "am" | "are" | "was" | "were" | "been" => {
            return Some(("be".to_string(), form_of_be(word)));
        }
        "has" => return Some(("have".to_string(), VerbForm::ThirdPerson)),
        "had" => return Some(("have".to_string(), VerbForm::Past)),
        "does" => return Some(("do".to_string(), VerbForm::ThirdPerson)),
        "did" | "done" => return Some(("do".to_string(), VerbForm::Past)),
        _ => {}
    }
    if let Some(base) = irregular_base(word) {
        return Some((base.to_string(), VerbForm::Past));
    }
    if let Some(stem) = word.strip_suffix("ing")
        && stem.len() > 1
    {
        return first_known(ing_candidates(stem)).map(|base| (base, VerbForm::Gerund));
    }
    if let Some(stem) = word.strip_suffix("ed")
        && stem.len() > 1
        && !word.ends_with("eed")
    {
        return first_known(ed_candidates(stem)).map(|base| (base, VerbForm::Past));
    }
    if word.len() > 2 && word.ends_with('s') && !word.ends_with("ss") {
        return first_known(s_candidates(word)).map(|base| (base, VerbForm::ThirdPerson));
    }
    None
}

fn form_of_be(word: &str) -> VerbForm {
    match word {
        "was" | "were" | "been" => VerbForm::Past,
        "is" => VerbForm::ThirdPerson,
        _ => VerbForm::Base,
    }
}

/// Best guess at the bare form of a verb we have never seen.
fn guess_stem(stem: &str) -> String {
    if let Some(root) = stem.strip_suffix('i') {
        return format!("{root}y");
    }
    if let Some(single) = undouble(stem)
        && !["ll", "ss", "ff", "zz"].iter().any(|d| stem.ends_with(d))
    {
        return single;
    }
    if stem.ends_with(['v', 'u', 'c', 'z']) || stem.ends_with("dg") {
        return format!("{stem}e");
    }
    stem.to_string()
}

/// Bare form of a single verb, known or not.
pub fn infinitive(word: &str) -> (String, VerbForm) {
    if let Some(found) = verb_form(word) {
        return found;
    }
    if let Some(stem) = word.strip_suffix("ing")
        && stem.len() > 2
    {
        return (guess_stem(stem), VerbForm::Gerund);
    }
    if let Some(stem) = word.strip_suffix("ed")
        && stem.len() > 2
        && !word.ends_with("eed")
    {
        return (guess_stem(stem), VerbForm::Past);
    }
    if word.len() > 3
        && word.ends_with('s')
        && !["ss", "us", "is"].iter().any(|e| word.ends_with(e))
    {
        let base = s_candidates(word)
            .into_iter()
            .last()
            .unwrap_or_else(|| word.to_string());
        return (base, VerbForm::ThirdPerson);
    }
    (word.to_string(), VerbForm::Base)
}

/// Simple past of a base verb.
pub fn past(base: &str) -> String {
    match base {
        "be" => return "was".to_string(),
        "have" => return "had".to_string(),
        "do" => return "did".to_string(),
        _ => {}
    }
    if let Some(past) = irregular_past(base) {
        return past.to_string();
    }
    if base.ends_with('e') {
        return format!("{base}d");
    }
    if ends_consonant_y(base) {
        return format!("{}ied", &base[..base.len() - 1]);
    }
    if doubles_final(base) {
        return format!("{}ed", double_final(base));
    }
    format!("{base}ed")
}

/// Third-person present of a base verb.
pub fn third_person(base: &str) -> String {
    match base {
        "be" => return "is".to_string(),
        "have" => return "has".to_string(),
        _ => {}
    }
    if ends_with_sibilant(base) || base.ends_with('o') {
        return format!("{base}es");
    }
    if ends_consonant_y(base) {
        return format!("{}ies", &base[..base.len() - 1]);
    }
    format!("{base}s")
}

/// Progressive "-ing" form of a base verb.
pub fn gerund(base: &str) -> String {
    if base == "be" {
        return "being".to_string();
    }
    if let Some(stem) = base.strip_suffix("ie") {
        return format!("{stem}ying");
    }
    if base.len() > 2
        && base.ends_with('e')
        && !["ee", "ye", "oe"].iter().any(|e| base.ends_with(e))
    {
        return format!("{}ing", &base[..base.len() - 1]);
    }
    if doubles_final(base) {
        return format!("{}ing", double_final(base));
    }
    format!("{base}ing")
}

// ---------------------------------------------------------------------------
// Phrases
// ---------------------------------------------------------------------------

/// Apply `f` to the first word of a phrase.
pub fn map_head(phrase: &str, f: impl FnOnce(&str) -> String) -> String {
    match phrase.split_once(' ') {
        Some((head, rest)) => format!("{} {rest}", f(head)),
        None => f(phrase),
    }
}

/// Apply `f` to the last word of a phrase.
pub fn map_last(phrase: &str, f: impl FnOnce(&str) -> String) -> String {
    match phrase.rsplit_once(' ') {
        Some((rest, last)) => format!("{rest} {}", f(last)),
        None => f(phrase),
    }
}

/// Last word of a phrase.
pub fn last_word(phrase: &str) -> &str {
    phrase.rsplit(' ').next().unwrap_or(phrase)
}

/// Whether a verb phrase contains a negation.
pub fn is_negated(phrase: &str) -> bool {
    phrase
        .split(' ')
        .any(|w| matches!(w, "not" | "never" | "cannot") || w.ends_with("n't"))
}

/// Negate a verb phrase, keeping its tense.
///
/// "leapt" → "did not leap", "leaps" → "does not leap",
/// "will leap" → "will not leap", "leap" → "do not leap".
pub fn negate(phrase: &str) -> String {
    if is_negated(phrase) {
        return phrase.to_string();
    }
    let (head, rest) = match phrase.split_once(' ') {
        Some((head, rest)) => (head, Some(rest)),
        None => (phrase, None),
    };
    let tail = rest.map(|r| format!(" {r}")).unwrap_or_default();

    if head == "can" {
        return format!("cannot{tail}");
    }
    if MODALS.contains(head) || NOT_TAKERS.contains(&head) {
        return format!("{head} not{tail}");
    }

    let (base, form) = infinitive(head);
    match form {
        VerbForm::Past => format!("did not {base}{tail}"),
        VerbForm::ThirdPerson => format!("does not {base}{tail}"),
        VerbForm::Gerund => format!("not {phrase}"),
        VerbForm::Base => format!("do not {phrase}"),
    }
}
