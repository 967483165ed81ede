//! Rule-based English analyzer.
//!
//! Tags words using the closed-class lists and open-class lexicon in
//! [`crate::dictionaries`], suffix rules, and the class of the word before.
//! A negative or future auxiliary directly followed by a verb ("didn't go",
//! "will not leap", "won't stop") becomes a single verb-phrase token.

use std::collections::BTreeSet;

use tracing::debug;

use super::inflect::{self, VerbForm};
use super::{AnalyzedToken, Analyzer, Conjugation, GrammarTag, Tense};
use crate::dictionaries::lexicon::{
    ADJECTIVES, AUXILIARIES, CONJUNCTIONS, DETERMINERS, MODALS, NEGATIONS, NUMBER_WORDS,
    PREPOSITIONS, PRONOUNS, is_adjective, is_adverb, is_function_word,
};
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::text::{self, Word};

/// Auxiliaries that fold into the following verb on their own.
///
/// `(word, tense, negated)`
const FOLDING_AUXILIARIES: &[(&str, Tense, bool)] = &[
    ("didn't", Tense::Past, true),
    ("doesn't", Tense::Present, true),
    ("don't", Tense::Infinitive, true),
    ("won't", Tense::Future, true),
    ("shan't", Tense::Future, true),
    ("will", Tense::Future, false),
    ("shall", Tense::Future, false),
];

/// Auxiliaries that fold into the following verb when followed by "not".
const NEGATED_AUXILIARIES: &[(&str, Tense)] = &[
    ("did", Tense::Past),
    ("does", Tense::Present),
    ("do", Tense::Infinitive),
    ("will", Tense::Future),
    ("shall", Tense::Future),
];

/// Class of the previous word, as far as tagging the next one cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    /// Nothing before, or separated by punctuation.
    None,
    /// Article, possessive, quantifier or number.
    Determiner,
    Adjective,
    Noun,
    Pronoun,
    /// Modal or negation particle.
    Modal,
    Auxiliary,
    /// The infinitive marker "to".
    To,
    Preposition,
    Verb,
    Other,
}

impl Context {
    fn of(token: &AnalyzedToken) -> Self {
        use GrammarTag as T;
        if token.has(T::Determiner) || token.has(T::Possessive) || token.has(T::Value) {
            Self::Determiner
        } else if token.has(T::Adjective) {
            Self::Adjective
        } else if token.has(T::Noun) || token.has(T::ProperNoun) {
            Self::Noun
        } else if token.has(T::Pronoun) {
            Self::Pronoun
        } else if token.has(T::Modal) || (token.has(T::Negative) && !token.has(T::Verb)) {
            Self::Modal
        } else if token.has(T::Auxiliary) {
            Self::Auxiliary
        } else if token.has(T::Preposition) {
            if token.normal == "to" {
                Self::To
            } else {
                Self::Preposition
            }
        } else if token.has(T::Verb) {
            Self::Verb
        } else {
            Self::Other
        }
    }

    const fn is_noun_phrase(self) -> bool {
        matches!(self, Self::Determiner | Self::Adjective)
    }

    /// Contexts after which a word that could be a verb is one.
    const fn expects_verb(self) -> bool {
        matches!(self, Self::Pronoun | Self::Noun | Self::Modal | Self::To)
    }
}

/// Rule-based part-of-speech tagger and inflector for English.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishAnalyzer;

impl EnglishAnalyzer {
    /// Create a new analyzer.
    pub const fn new() -> Self {
        Self
    }

    fn tag_word(word: &Word, context: Context, sentence_start: bool) -> AnalyzedToken {
        let normal = text::normalize(&word.core);
        let mut tags = if word.core.is_empty() || normal.is_empty() {
            BTreeSet::from([GrammarTag::Punctuation])
        } else {
            classify(&normal, &word.core, context, sentence_start)
        };
        if text::is_title_case(&word.core) {
            tags.insert(GrammarTag::TitleCase);
        }
        AnalyzedToken {
            text: word.surface(),
            prefix: word.prefix.clone(),
            core: word.core.clone(),
            suffix: word.suffix.clone(),
            normal,
            tags,
        }
    }
}

/// Find a foldable auxiliary at the start of `words` followed by a verb.
///
/// Returns the merged token and how many words it consumed.
fn fold_verb_phrase(words: &[Word]) -> Option<(AnalyzedToken, usize)> {
    let first = words.first()?;
    if !first.suffix.is_empty() {
        return None;
    }
    let head = text::normalize(&first.core);
    let next = words.get(1).map(|w| text::normalize(&w.core));

    let paired = next.as_deref().is_some_and(|n| matches!(n, "not" | "never"))
        && words[1].prefix.is_empty()
        && words[1].suffix.is_empty();
    let (aux_len, tense, negated) = if paired {
        let &(_, tense) = NEGATED_AUXILIARIES.iter().find(|(aux, _)| *aux == head)?;
        (2, tense, true)
    } else {
        let &(_, tense, negated) = FOLDING_AUXILIARIES.iter().find(|(aux, ..)| *aux == head)?;
        (1, tense, negated)
    };

    let verb = words.get(aux_len)?;
    let verb_normal = text::normalize(&verb.core);
    if !verb.prefix.is_empty() || !could_be_verb(&verb_normal) {
        return None;
    }

    let parts = &words[..=aux_len];
    let core = parts
        .iter()
        .map(|w| w.core.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let normal = parts
        .iter()
        .map(|w| text::normalize(&w.core))
        .collect::<Vec<_>>()
        .join(" ");

    let mut tags = BTreeSet::from([GrammarTag::Verb, tense_tag(tense)]);
    if negated {
        tags.insert(GrammarTag::Negative);
    }
    if text::is_title_case(&first.core) {
        tags.insert(GrammarTag::TitleCase);
    }

    let token = AnalyzedToken {
        text: format!("{}{core}{}", first.prefix, verb.suffix),
        prefix: first.prefix.clone(),
        core,
        suffix: verb.suffix.clone(),
        normal,
        tags,
    };
    Some((token, aux_len + 1))
}

/// Whether a word after an auxiliary can be the main verb.
fn could_be_verb(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    inflect::is_known_verb(word)
        || (!is_function_word(word)
            && !is_adverb(word)
            && !is_adjective(word)
            && !NUMBER_WORDS.contains(word)
            && word.chars().all(|c| c.is_alphabetic() || c == '-'))
}

const fn tense_tag(tense: Tense) -> GrammarTag {
    match tense {
        Tense::Past => GrammarTag::PastTense,
        Tense::Present => GrammarTag::PresentTense,
        Tense::Future => GrammarTag::FutureTense,
        Tense::Gerund => GrammarTag::Gerund,
        Tense::Infinitive => GrammarTag::Infinitive,
    }
}

fn closed_class(normal: &str, context: Context) -> Option<BTreeSet<GrammarTag>> {
    use GrammarTag as T;
    let negated = normal.ends_with("n't") || normal == "cannot";
    let mut tags = BTreeSet::new();

    if DETERMINERS.contains(normal) {
        tags.insert(T::Determiner);
    } else if PRONOUNS.contains(normal) {
        tags.insert(T::Pronoun);
    } else if NEGATIONS.contains(normal) {
        tags.insert(T::Negative);
    } else if MODALS.contains(normal) {
        tags.insert(T::Modal);
    } else if AUXILIARIES.contains(normal) {
        tags.insert(T::Auxiliary);
    } else if PREPOSITIONS.contains(normal) || CONJUNCTIONS.contains(normal) {
        // "I like cats": a verb in disguise
        if context.expects_verb() && inflect::is_known_verb(normal) {
            return None;
        }
        tags.insert(if PREPOSITIONS.contains(normal) {
            T::Preposition
        } else {
            T::Conjunction
        });
    } else {
        return None;
    }

    if negated {
        tags.insert(T::Negative);
    }
    Some(tags)
}

fn noun_tags(normal: &str, core: &str, sentence_start: bool) -> BTreeSet<GrammarTag> {
    // "Zelda" mid-sentence is a name; "DOG" is just shouting.
    if text::is_title_case(core) && !text::is_upper_case(core) && !sentence_start {
        return BTreeSet::from([GrammarTag::ProperNoun]);
    }
    let mut tags = BTreeSet::from([GrammarTag::Noun]);
    if inflect::looks_plural(inflect::last_word(normal)) {
        tags.insert(GrammarTag::Plural);
    }
    tags
}

fn verb_tags(tense: Tense) -> BTreeSet<GrammarTag> {
    BTreeSet::from([GrammarTag::Verb, tense_tag(tense)])
}

/// Tag one word from its normal form, surface form and context.
fn classify(
    normal: &str,
    core: &str,
    context: Context,
    sentence_start: bool,
) -> BTreeSet<GrammarTag> {
    use GrammarTag as T;

    if text::is_number(core) || NUMBER_WORDS.contains(normal) {
        return BTreeSet::from([T::Value]);
    }
    if let Some(tags) = closed_class(normal, context) {
        return tags;
    }
    if normal.len() > 2 && (normal.ends_with("'s") || normal.ends_with("s'")) {
        return BTreeSet::from([T::Possessive]);
    }

    let noun_phrase = context.is_noun_phrase();
    if is_adverb(normal) && !(noun_phrase && ADJECTIVES.contains(normal)) {
        return BTreeSet::from([T::Adverb]);
    }

    let form = inflect::verb_form(normal).map(|(_, form)| form);

    if noun_phrase {
        if is_adjective(normal) || form == Some(VerbForm::Past) {
            return BTreeSet::from([T::Adjective]);
        }
        if form == Some(VerbForm::Gerund) {
            return BTreeSet::from([T::Gerund]);
        }
        return noun_tags(normal, core, sentence_start);
    }

    if ADJECTIVES.contains(normal) && !context.expects_verb() {
        return BTreeSet::from([T::Adjective]);
    }

    match form {
        Some(VerbForm::ThirdPerson) => verb_tags(Tense::Present),
        Some(VerbForm::Past) => verb_tags(Tense::Past),
        Some(VerbForm::Gerund) => BTreeSet::from([T::Gerund]),
        Some(VerbForm::Base) => {
            if matches!(context, Context::Preposition | Context::Verb) {
                noun_tags(normal, core, sentence_start)
            } else {
                verb_tags(Tense::Infinitive)
            }
        }
        None if is_adjective(normal) => BTreeSet::from([T::Adjective]),
        None if normal.len() > 4 && normal.ends_with("ed") && !normal.ends_with("eed") => {
            verb_tags(Tense::Past)
        }
        None if normal.len() > 5 && normal.ends_with("ing") => BTreeSet::from([T::Gerund]),
        None => noun_tags(normal, core, sentence_start),
    }
}

/// Split off a leading foldable auxiliary from a verb phrase.
///
/// Returns the tense it implies, whether it negates, and the rest.
fn split_auxiliary<'a>(words: &'a [&'a str]) -> Option<(Tense, bool, &'a [&'a str])> {
    let head = *words.first()?;
    if words.len() > 2
        && matches!(words[1], "not" | "never")
        && let Some(&(_, tense)) = NEGATED_AUXILIARIES.iter().find(|(aux, _)| *aux == head)
    {
        return Some((tense, true, &words[2..]));
    }
    if words.len() > 1
        && let Some(&(_, tense, negated)) =
            FOLDING_AUXILIARIES.iter().find(|(aux, ..)| *aux == head)
    {
        return Some((tense, negated, &words[1..]));
    }
    None
}

fn require_letters(word: &str) -> AnalyzerResult<()> {
    if word.chars().any(char::is_alphabetic) {
        Ok(())
    } else {
        Err(AnalyzerError::Empty(word.to_string()))
    }
}

impl Analyzer for EnglishAnalyzer {
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    fn analyze(&self, text: &str) -> Vec<AnalyzedToken> {
        let words = text::split_words(text);
        let mut tokens = Vec::with_capacity(words.len());
        let mut context = Context::None;
        let mut sentence_start = true;
        let mut i = 0;

        while i < words.len() {
            let (token, consumed) = fold_verb_phrase(&words[i..])
                .unwrap_or_else(|| (Self::tag_word(&words[i], context, sentence_start), 1));
            let last = &words[i + consumed - 1];

            if token.core.is_empty() {
                sentence_start |= token.prefix.contains(['.', '!', '?']);
                context = Context::None;
            } else {
                sentence_start = last.ends_sentence();
                context = if last.suffix.is_empty() {
                    Context::of(&token)
                } else {
                    Context::None
                };
            }

            tokens.push(token);
            i += consumed;
        }

        debug!(words = words.len(), tokens = tokens.len(), "analyzed text");
        tokens
    }

    fn to_singular(&self, noun: &str) -> AnalyzerResult<String> {
        require_letters(noun)?;
        Ok(inflect::map_last(noun, inflect::singularize))
    }

    fn to_plural(&self, noun: &str) -> AnalyzerResult<String> {
        require_letters(noun)?;
        Ok(inflect::map_last(noun, inflect::pluralize))
    }

    fn is_plural(&self, noun: &str) -> bool {
        inflect::looks_plural(inflect::last_word(noun))
    }

    fn conjugate(&self, verb: &str) -> AnalyzerResult<Conjugation> {
        require_letters(verb)?;
        let words: Vec<&str> = verb.split_whitespace().collect();

        if let Some((tense, _, rest)) = split_auxiliary(&words) {
            let phrase = rest.join(" ");
            return Ok(Conjugation {
                infinitive: inflect::map_head(&phrase, |w| inflect::infinitive(w).0),
                tense,
            });
        }

        let head = words[0];
        if is_function_word(head) && inflect::verb_form(head).is_none() {
            return Err(AnalyzerError::Unrecognized {
                word: verb.to_string(),
                reason: "function word, not a verb",
            });
        }

        let (base, form) = inflect::infinitive(head);
        let tense = match form {
            VerbForm::Base => Tense::Infinitive,
            VerbForm::ThirdPerson => Tense::Present,
            VerbForm::Past => Tense::Past,
            VerbForm::Gerund => Tense::Gerund,
        };
        let infinitive = match verb.split_once(' ') {
            Some((_, rest)) => format!("{base} {rest}"),
            None => base,
        };
        Ok(Conjugation { infinitive, tense })
    }

    fn is_negative(&self, verb: &str) -> bool {
        inflect::is_negated(verb)
    }

    fn to_past_tense(&self, verb: &str) -> AnalyzerResult<String> {
        require_letters(verb)?;
        Ok(inflect::map_head(verb, |w| {
            inflect::past(&inflect::infinitive(w).0)
        }))
    }

    fn to_present_tense(&self, verb: &str) -> AnalyzerResult<String> {
        require_letters(verb)?;
        Ok(inflect::map_head(verb, |w| {
            inflect::third_person(&inflect::infinitive(w).0)
        }))
    }

    fn to_future_tense(&self, verb: &str) -> AnalyzerResult<String> {
        Ok(format!("will {}", self.to_infinitive(verb)?))
    }

    fn to_gerund(&self, verb: &str) -> AnalyzerResult<String> {
        require_letters(verb)?;
        Ok(inflect::map_head(verb, |w| {
            inflect::gerund(&inflect::infinitive(w).0)
        }))
    }

    fn to_infinitive(&self, verb: &str) -> AnalyzerResult<String> {
        require_letters(verb)?;
        Ok(inflect::map_head(verb, |w| inflect::infinitive(w).0))
    }

    fn to_negative(&self, verb: &str) -> AnalyzerResult<String> {
        require_letters(verb)?;
        Ok(inflect::negate(verb))
    }
}
