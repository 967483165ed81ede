//! Word lists for part-of-speech tagging.
//!
//! Closed word classes (determiners, pronouns, prepositions, conjunctions,
//! auxiliaries) are listed exhaustively. Open classes (verbs, adjectives,
//! adverbs) list common words only; everything else falls back to suffix
//! rules and then to "noun".

use std::collections::HashSet;
use std::sync::LazyLock;

/// Articles, demonstratives, quantifiers and possessive determiners.
pub static DETERMINERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "an", "the", "this", "that", "these", "those", "my", "your", "his", "her", "its",
        "our", "their", "some", "any", "no", "every", "each", "either", "neither", "all", "both",
        "few", "many", "much", "more", "most", "several", "such", "what", "which", "whose",
        "another", "other", "enough", "less", "least", "own",
    ]
    .into_iter()
    .collect()
});

/// Personal, reflexive, relative and indefinite pronouns.
pub static PRONOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "mine", "yours",
        "hers", "ours", "theirs", "myself", "yourself", "himself", "herself", "itself",
        "ourselves", "yourselves", "themselves", "who", "whom", "whoever", "whatever", "someone",
        "somebody", "something", "anyone", "anybody", "anything", "everyone", "everybody",
        "everything", "nobody", "nothing", "none", "one", "i'm", "you're", "he's", "she's",
        "it's", "we're", "they're", "i've", "you've", "we've", "they've", "i'll", "you'll",
        "he'll", "she'll", "we'll", "they'll", "i'd", "you'd", "he'd", "she'd", "we'd",
        "they'd", "there", "here", "that's", "there's", "what's", "let's",
    ]
    .into_iter()
    .collect()
});

/// Prepositions and particles.
pub static PREPOSITIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "about", "above", "across", "after", "against", "along", "amid", "among", "around", "as",
        "at", "before", "behind", "below", "beneath", "beside", "besides", "between", "beyond",
        "by", "despite", "down", "during", "except", "for", "from", "in", "inside", "into",
        "like", "near", "of", "off", "on", "onto", "out", "outside", "over", "past", "per",
        "since", "through", "throughout", "till", "to", "toward", "towards", "under",
        "underneath", "until", "unlike", "up", "upon", "via", "with", "within", "without",
    ]
    .into_iter()
    .collect()
});

/// Coordinating and subordinating conjunctions.
pub static CONJUNCTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "and", "but", "or", "nor", "so", "yet", "if", "because", "although", "though", "while",
        "whereas", "unless", "whether", "than", "then", "when", "whenever", "where", "wherever",
        "why", "how", "once", "lest",
    ]
    .into_iter()
    .collect()
});

/// Forms of "be", "have" and "do".
pub static AUXILIARIES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "be", "am", "is", "are", "was", "were", "been", "being", "have", "has", "had", "having",
        "do", "does", "did", "isn't", "aren't", "wasn't", "weren't", "hasn't", "haven't",
        "hadn't", "ain't", "don't", "doesn't", "didn't",
    ]
    .into_iter()
    .collect()
});

/// Modal verbs, including their negative contractions.
pub static MODALS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "can", "could", "may", "might", "must", "shall", "should", "will", "would", "ought",
        "can't", "cannot", "couldn't", "mightn't", "mustn't", "shouldn't", "wouldn't", "won't",
        "shan't",
    ]
    .into_iter()
    .collect()
});

/// Negation particles.
pub static NEGATIONS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["not", "n't", "never"].into_iter().collect());

/// Number words.
pub static NUMBER_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "zero", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
        "eleven", "twelve", "twenty", "thirty", "forty", "fifty", "hundred", "thousand",
        "million", "billion", "first", "second", "third",
    ]
    .into_iter()
    .collect()
});

/// Common regular verbs in base form.
///
/// Inflections of irregular verbs come from [`super::irregular_verbs`].
pub static VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Motion and physical action
    set.extend([
        "walk", "jump", "hop", "skip", "climb", "crawl", "dance", "march", "move", "push",
        "pull", "lift", "carry", "drop", "roll", "kick", "punch", "touch", "grab", "reach",
        "travel", "arrive", "enter", "exit", "return", "follow", "chase", "hurry", "rush",
        "race", "wander", "stroll", "drag", "toss", "bounce", "slip", "trip", "stumble",
        "float", "sail", "paddle", "ski", "skate", "jog", "sprint", "dash", "wave", "nod",
        "smile", "laugh", "cry", "shout", "yell", "scream", "whisper", "cough", "sneeze", "bark",
        "breathe", "kiss", "hug", "clap", "knock", "pour", "wash", "clean", "cook", "bake",
        "boil", "fry", "stir", "chop", "slice", "paint", "draw", "fix", "repair", "open",
        "close", "lock", "fill", "empty", "pack", "fold", "wrap", "tie", "hang", "park",
        "plant", "water", "dig", "hunt", "fish", "play", "kill", "attack", "defend", "guard",
        "save", "rescue", "escape", "hide", "stop", "start", "finish", "end", "stay", "wait",
        "rest", "relax", "sleep", "wake", "live", "die", "work", "study", "learn", "watch",
        "look", "listen", "smell", "taste", "talk", "call", "ask", "answer", "reply", "shop",
    ]);

    // Mental and communicative
    set.extend([
        "believe", "consider", "decide", "discover", "doubt", "enjoy", "expect", "explain",
        "guess", "hate", "hope", "ignore", "imagine", "intend", "like", "love", "mention",
        "mind", "miss", "need", "notice", "offer", "order", "plan", "prefer", "pretend",
        "promise", "realize", "recognize", "remember", "remind", "seem", "suggest", "suppose",
        "surprise", "trust", "try", "want", "wish", "wonder", "worry", "agree", "allow",
        "announce", "apologize", "appear", "argue", "assume", "avoid", "beg", "blame",
        "care", "claim", "complain", "confirm", "convince", "deny", "describe", "deserve",
        "discuss", "dislike", "encourage", "forgive", "help", "inform", "insist", "invite",
        "judge", "note", "obey", "persuade", "pray", "prove", "question", "refuse", "regret",
        "reject", "report", "request", "respond", "share", "state", "thank", "warn",
    ]);

    // Change, work and everyday business
    set.extend([
        "accept", "achieve", "add", "admit", "affect", "afford", "apply", "arrange",
        "attach", "attempt", "attend", "borrow", "bother", "calculate", "cancel", "cause",
        "change", "charge", "check", "choose", "collect", "compare", "compete", "complete",
        "connect", "contain", "continue", "control", "copy", "correct", "count", "cover",
        "create", "damage", "decrease", "delay", "deliver", "depend", "design", "destroy",
        "develop", "divide", "earn", "employ", "examine", "exist", "expand", "fail", "force",
        "gather", "handle", "happen", "hire", "improve", "include", "increase", "install",
        "introduce", "invent", "join", "kick", "last", "launch", "manage", "mark", "measure",
        "mix", "name", "obtain", "occur", "own", "pass", "perform", "pick", "place", "point",
        "possess", "post", "practice", "prepare", "present", "press", "prevent", "print",
        "produce", "protect", "provide", "publish", "punish", "receive", "record", "reduce",
        "relate", "release", "rely", "remain", "remove", "replace", "require", "rescue",
        "resolve", "rule", "search", "serve", "settle", "sign", "solve", "sort", "supply",
        "support", "test", "train", "treat", "turn", "use", "visit", "vote", "wonder",
        "accelerate", "hasten", "halt", "cease", "depart", "proceed", "vault", "bound",
        "pounce", "spring", "soar", "glide", "hurl", "fling", "propel",
    ]);

    set
});

/// Common adjectives that suffix rules would not catch.
pub static ADJECTIVES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    set.extend([
        "able", "bad", "big", "black", "blue", "bold", "brave", "bright", "broad", "brown",
        "busy", "calm", "cheap", "clean", "clear", "clever", "close", "cold", "cool", "crazy",
        "cruel", "cute", "damp", "dark", "dead", "dear", "deep", "dirty", "dry", "dull",
        "early", "easy", "empty", "fair", "fake", "false", "fancy", "far", "fast", "fat",
        "few", "fierce", "fine", "firm", "flat", "fresh", "friendly", "full", "funny", "gentle",
        "glad", "good", "grand", "gray", "great", "green", "grey", "happy", "hard", "harsh",
        "heavy", "high", "holy", "hot", "huge", "humble", "hungry", "ill", "keen", "kind",
        "large", "late", "lazy", "light", "likely", "little", "lively", "lonely", "long",
        "loose", "loud", "lovely", "low", "lucky", "mad", "main", "mean", "mild", "modern",
        "narrow", "nasty", "neat", "new", "nice", "noble", "odd", "old", "orange", "pale",
        "pink", "plain", "polite", "poor", "pretty", "proud", "pure", "purple", "quick",
        "quiet", "rapid", "rare", "raw", "ready", "real", "red", "rich", "right", "rough",
        "round", "rude", "sad", "safe", "same", "scary", "sharp", "short", "shy", "sick",
        "silly", "simple", "slim", "slow", "small", "smart", "smooth", "soft", "solid", "sore",
        "sour", "steep", "stiff", "still", "strange", "strict", "strong", "stupid", "sudden",
        "sure", "sweet", "swift", "tall", "tame", "thick", "thin", "tidy", "tight", "tiny",
        "tired", "tough", "true", "ugly", "upset", "vast", "warm", "weak", "wealthy", "weird",
        "wet", "white", "whole", "wide", "wild", "wise", "wrong", "yellow", "young",
    ]);

    // Participle-shaped adjectives
    set.extend([
        "beloved", "crooked", "naked", "rugged", "sacred", "wicked", "wretched", "interested",
        "excited", "bored", "scared", "worried", "pleased", "surprised", "amazed", "annoyed",
    ]);

    set
});

/// Common adverbs that do not end in "-ly".
pub static ADVERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "again", "ago", "almost", "alone", "already", "also", "always", "anyway", "away",
        "back", "even", "ever", "everywhere", "far", "forever", "hence", "however", "indeed",
        "instead", "just", "later", "maybe", "meanwhile", "moreover", "nearly", "nevertheless",
        "now", "nowhere", "often", "only", "perhaps", "quite", "rather", "seldom", "sometimes",
        "somewhere", "soon", "still", "thus", "today", "together", "tomorrow", "tonight",
        "too", "very", "well", "yesterday", "abroad", "ahead", "apart", "aside", "downstairs",
        "upstairs", "indoors", "outdoors", "twice", "yet",
    ]
    .into_iter()
    .collect()
});

/// Words ending in "-ly" that are not adverbs.
pub static LY_NON_ADVERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "ally", "anomaly", "assembly", "belly", "bully", "butterfly", "daily", "family", "fly",
        "folly", "holy", "italy", "jelly", "july", "lily", "monopoly", "rally", "reply", "rely",
        "supply", "apply", "comply", "imply", "multiply", "bully", "only", "ugly", "silly",
        "lonely", "lovely", "friendly", "likely", "lively", "early", "curly", "elderly",
        "costly", "deadly", "orderly", "ghastly", "manly", "homely", "jolly", "wooly",
    ]
    .into_iter()
    .collect()
});

/// Suffixes that mark a word as an adjective.
pub const ADJECTIVE_SUFFIXES: &[&str] = &[
    "able", "ible", "ical", "ful", "less", "ous", "ive", "ish", "ular", "esque", "ient",
];

/// Check if a word belongs to a closed (function word) class.
pub fn is_function_word(word: &str) -> bool {
    DETERMINERS.contains(word)
        || PRONOUNS.contains(word)
        || PREPOSITIONS.contains(word)
        || CONJUNCTIONS.contains(word)
        || AUXILIARIES.contains(word)
        || MODALS.contains(word)
        || NEGATIONS.contains(word)
}

/// Check if a word looks like an adjective, by list or by suffix.
pub fn is_adjective(word: &str) -> bool {
    ADJECTIVES.contains(word)
        || (word.len() > 5
            && ADJECTIVE_SUFFIXES
                .iter()
                .any(|suffix| word.ends_with(suffix)))
}

/// Check if a word looks like an adverb, by list or by "-ly" suffix.
pub fn is_adverb(word: &str) -> bool {
    ADVERBS.contains(word)
        || (word.len() > 4 && word.ends_with("ly") && !LY_NON_ADVERBS.contains(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_classes() {
        assert!(is_function_word("the"));
        assert!(is_function_word("they"));
        assert!(is_function_word("between"));
        assert!(is_function_word("because"));
        assert!(is_function_word("was"));
        assert!(is_function_word("should"));
        assert!(is_function_word("not"));
        assert!(!is_function_word("fox"));
    }

    #[test]
    fn adjectives_by_list_and_suffix() {
        assert!(is_adjective("quick"));
        assert!(is_adjective("beautiful"));
        assert!(is_adjective("dangerous"));
        assert!(is_adjective("careless"));
        assert!(!is_adjective("fox"));
        // Too short for the suffix rule
        assert!(!is_adjective("olive"));
    }

    #[test]
    fn adverbs() {
        assert!(is_adverb("quickly"));
        assert!(is_adverb("often"));
        assert!(!is_adverb("family"));
        assert!(!is_adverb("friendly"));
        assert!(!is_adverb("fly"));
    }

    #[test]
    fn verbs_exclude_irregulars() {
        assert!(VERBS.contains("jump"));
        assert!(VERBS.contains("walk"));
        assert!(!VERBS.contains("fox"));
    }
}
