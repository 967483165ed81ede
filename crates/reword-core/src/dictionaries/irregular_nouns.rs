//! Irregular and invariant noun plurals.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Nouns with irregular plurals as `(singular, plural)`.
pub const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("analysis", "analyses"),
    ("axis", "axes"),
    ("basis", "bases"),
    ("cactus", "cacti"),
    ("calf", "calves"),
    ("child", "children"),
    ("crisis", "crises"),
    ("criterion", "criteria"),
    ("diagnosis", "diagnoses"),
    ("echo", "echoes"),
    ("elf", "elves"),
    ("foot", "feet"),
    ("fungus", "fungi"),
    ("goose", "geese"),
    ("half", "halves"),
    ("hero", "heroes"),
    ("hypothesis", "hypotheses"),
    ("knife", "knives"),
    ("leaf", "leaves"),
    ("life", "lives"),
    ("loaf", "loaves"),
    ("louse", "lice"),
    ("man", "men"),
    ("medium", "media"),
    ("mouse", "mice"),
    ("nucleus", "nuclei"),
    ("oasis", "oases"),
    ("ox", "oxen"),
    ("person", "people"),
    ("phenomenon", "phenomena"),
    ("potato", "potatoes"),
    ("quiz", "quizzes"),
    ("radius", "radii"),
    ("scarf", "scarves"),
    ("self", "selves"),
    ("shelf", "shelves"),
    ("stimulus", "stimuli"),
    ("syllabus", "syllabi"),
    ("thesis", "theses"),
    ("thief", "thieves"),
    ("tomato", "tomatoes"),
    ("tooth", "teeth"),
    ("torpedo", "torpedoes"),
    ("veto", "vetoes"),
    ("wife", "wives"),
    ("wolf", "wolves"),
    ("woman", "women"),
];

/// Nouns whose singular and plural are the same, or that have no plural.
pub static INVARIANT_NOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "advice",
        "aircraft",
        "bison",
        "cattle",
        "data",
        "deer",
        "equipment",
        "evidence",
        "fish",
        "furniture",
        "information",
        "knowledge",
        "luggage",
        "means",
        "moose",
        "news",
        "offspring",
        "police",
        "rice",
        "salmon",
        "series",
        "sheep",
        "software",
        "species",
        "swine",
        "trout",
        "water",
        "weather",
    ]
    .into_iter()
    .collect()
});

/// Singular nouns that end in a plural-looking "s".
pub static SINGULAR_S_NOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "alias", "apparatus", "atlas", "bias", "bonus", "bus", "campus", "canvas", "chaos",
        "circus", "corpus", "cosmos", "gas", "genius", "lens", "minus", "octopus", "pancreas",
        "plus", "status", "virus", "walrus", "yes",
    ]
    .into_iter()
    .collect()
});

static PLURAL_BY_SINGULAR: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULAR_NOUNS.iter().copied().collect());

static SINGULAR_BY_PLURAL: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    IRREGULAR_NOUNS
        .iter()
        .map(|&(singular, plural)| (plural, singular))
        .collect()
});

/// Irregular plural of a singular noun.
pub fn irregular_plural(singular: &str) -> Option<&'static str> {
    PLURAL_BY_SINGULAR.get(singular).copied()
}

/// Singular of an irregular plural noun.
pub fn irregular_singular(plural: &str) -> Option<&'static str> {
    SINGULAR_BY_PLURAL.get(plural).copied()
}

/// Check if a noun does not change between singular and plural.
pub fn is_invariant(word: &str) -> bool {
    INVARIANT_NOUNS.contains(word)
}

/// Check if a noun ending in "s" is actually singular.
pub fn is_singular_s(word: &str) -> bool {
    SINGULAR_S_NOUNS.contains(word)
        || word.ends_with("ss")
        || word.ends_with("ous")
        || (word.ends_with("is") && word.len() > 3)
}
