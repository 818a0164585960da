// src/core/grammar.rs
//! Subject-Verb-Object to Subject-Object-Verb reordering.
//!
//! This is a single-pass heuristic, not a parser. Sentences with several
//! verbs or nested clauses are segmented on the first auxiliary and the
//! first main verb only.

use crate::core::types::Token;
use tracing::trace;

const VERBS: &[&str] = &[
    "eat", "drink", "go", "come", "take", "give", "help", "teach", "learn", "read", "write",
    "play", "work", "see", "hear", "say", "want", "need", "like", "love", "have", "get", "make",
    "do", "sleep", "wake", "run", "walk", "sit", "stand", "think", "know", "tell", "ask", "call",
    "use", "find", "leave", "feel", "try", "start", "stop", "open", "close", "watch", "listen",
    "speak", "buy", "sell", "pay", "meet", "wait", "talk", "understand", "thank",
];

const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "will", "shall", "would", "can", "could", "should", "may",
    "might", "must", "do", "does", "did", "has", "have", "had", "been", "being",
];

const QUESTION_WORDS: &[&str] = &["how", "what", "when", "where", "why", "who", "which", "whose"];

const CONTRACTIONS: &[(&str, &[&str])] = &[
    ("i'm", &["i", "am"]),
    ("i'll", &["i", "will"]),
    ("i'd", &["i", "would"]),
    ("you're", &["you", "are"]),
    ("you'll", &["you", "will"]),
    ("he's", &["he", "is"]),
    ("she's", &["she", "is"]),
    ("it's", &["it", "is"]),
    ("we're", &["we", "are"]),
    ("they're", &["they", "are"]),
    ("isn't", &["is", "not"]),
    ("aren't", &["are", "not"]),
    ("wasn't", &["was", "not"]),
    ("weren't", &["were", "not"]),
    ("don't", &["do", "not"]),
    ("doesn't", &["does", "not"]),
    ("didn't", &["did", "not"]),
    ("won't", &["will", "not"]),
    ("wouldn't", &["would", "not"]),
    ("can't", &["can", "not"]),
    ("couldn't", &["could", "not"]),
    ("shouldn't", &["should", "not"]),
    ("gonna", &["going", "to"]),
    ("wanna", &["want", "to"]),
    ("gotta", &["got", "to"]),
];

fn is_auxiliary(word: &str) -> bool {
    AUXILIARIES.contains(&word)
}

fn is_verb_like(word: &str) -> bool {
    VERBS.contains(&word) || word.ends_with("ing") || word.ends_with("ed")
}

pub fn is_question_word(word: &str) -> bool {
    QUESTION_WORDS.contains(&word)
}

/// Lower-cases every token and splits known contractions in place.
pub fn expand_contractions(tokens: &[Token]) -> Vec<Token> {
    let mut expanded = Vec::with_capacity(tokens.len());
    for token in tokens {
        let lower = token.to_lowercase();
        match CONTRACTIONS.iter().find(|(c, _)| *c == lower) {
            Some((_, parts)) => expanded.extend(parts.iter().map(|p| p.to_string())),
            None => expanded.push(lower),
        }
    }
    expanded
}

/// Where the first auxiliary and the first main verb sit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct VerbScan {
    aux_idx: Option<usize>,
    main_verb_idx: Option<usize>,
}

impl VerbScan {
    fn run(words: &[Token]) -> Self {
        let mut scan = Self::default();
        for (i, word) in words.iter().enumerate() {
            if is_auxiliary(word) && scan.aux_idx.is_none() {
                scan.aux_idx = Some(i);
            } else if is_verb_like(word) && scan.main_verb_idx.is_none() {
                scan.main_verb_idx = Some(i);
            }
        }
        scan
    }
}

/// A sentence split into its sign-order parts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Segments {
    pub subject: Vec<Token>,
    pub object: Vec<Token>,
    pub verb: Option<Token>,
}

impl Segments {
    fn into_sov(self) -> Vec<Token> {
        let mut out = self.subject;
        out.extend(self.object);
        out.extend(self.verb);
        out
    }
}

/// Segments `words` around its verb. `None` means no verb signal was found.
pub fn segment(words: &[Token]) -> Option<Segments> {
    let scan = VerbScan::run(words);
    match (scan.aux_idx, scan.main_verb_idx) {
        (Some(aux), main) => {
            let subject = words[..aux].to_vec();
            let (verb, object) = match main {
                Some(m) if m > aux => (Some(words[m].clone()), words[m + 1..].to_vec()),
                _ => match words.get(aux + 1) {
                    Some(next) if is_verb_like(next) => {
                        (Some(next.clone()), words[aux + 2..].to_vec())
                    }
                    _ => (None, words[aux + 1..].to_vec()),
                },
            };
            Some(Segments { subject, object, verb })
        }
        (None, Some(m)) => Some(Segments {
            subject: words[..m].to_vec(),
            verb: Some(words[m].clone()),
            object: words[m + 1..].to_vec(),
        }),
        (None, None) => None,
    }
}

/// Reorders a token sequence from spoken (SVO) to sign (SOV) order.
/// Never invents words and never returns an empty sequence for non-empty input.
pub fn reorder(tokens: &[Token]) -> Vec<Token> {
    if tokens.len() < 2 {
        return tokens.to_vec();
    }

    let mut words = expand_contractions(tokens);

    let question = if words.first().is_some_and(|w| is_question_word(w)) {
        Some(words.remove(0))
    } else {
        None
    };

    let mut result = match segment(&words) {
        Some(segments) => segments.into_sov(),
        None => words,
    };
    result.extend(question);

    trace!(input = ?tokens, output = ?result, "reordered");

    if result.is_empty() {
        tokens.to_vec()
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn toks(s: &str) -> Vec<Token> {
        s.split_whitespace().map(str::to_string).collect()
    }

    fn reordered(s: &str) -> Vec<Token> {
        reorder(&toks(s))
    }

    #[test]
    fn short_input_is_untouched() {
        assert_eq!(reordered("eat"), toks("eat"));
        assert_eq!(reordered("don't"), toks("don't"));
        assert!(reorder(&[]).is_empty());
    }

    #[test]
    fn main_verb_moves_after_object() {
        assert_eq!(reordered("i eat food"), toks("i food eat"));
        assert_eq!(reordered("you like apple"), toks("you apple like"));
    }

    #[test]
    fn auxiliary_with_progressive_verb() {
        assert_eq!(reordered("i am sleeping"), toks("i sleeping"));
        assert_eq!(reordered("you are eating food"), toks("you food eating"));
    }

    #[test]
    fn auxiliary_without_verb_keeps_rest_as_object() {
        assert_eq!(reordered("he is tall"), toks("he tall"));
    }

    #[test]
    fn verb_before_auxiliary_is_not_duplicated() {
        // "running" is found before the auxiliary, so there is no verb after it.
        assert_eq!(reordered("running is fun"), toks("running fun"));
    }

    #[test]
    fn contraction_then_main_verb() {
        // Tokens between the auxiliary and the main verb are dropped.
        assert_eq!(reordered("don't go"), toks("go"));
        assert_eq!(reordered("I'm reading book"), toks("i book reading"));
    }

    #[test]
    fn contractions_can_lengthen_the_sentence() {
        // Three input words expand to five; four survive reordering.
        assert_eq!(reordered("I'm gonna go"), toks("i to go going"));
        assert_eq!(reordered("it isn't good"), toks("it not good"));
    }

    #[test]
    fn question_word_moves_to_end() {
        assert_eq!(reordered("where do you live"), toks("you live where"));
        assert_eq!(reordered("what you want"), toks("you want what"));
    }

    #[test]
    fn no_verb_keeps_order_and_appends_question_word() {
        assert_eq!(reordered("big blue apple"), toks("big blue apple"));
        assert_eq!(reordered("which colour"), toks("colour which"));
    }

    #[test]
    fn tokens_are_lowercased() {
        assert_eq!(reordered("I Eat Food"), toks("i food eat"));
    }

    #[test]
    fn segments_expose_parts() {
        let s = segment(&toks("you are eating food")).unwrap();
        assert_eq!(s.subject, toks("you"));
        assert_eq!(s.verb.as_deref(), Some("eating"));
        assert_eq!(s.object, toks("food"));
        assert!(segment(&toks("big apple")).is_none());
    }

    const NOUNS: &[&str] = &["apple", "book", "boy", "car", "father", "food", "home", "water"];

    /// Contractions, nouns, verb-like words, question words or noise.
    fn sentence_word() -> impl Strategy<Value = Token> {
        let contractions: Vec<&'static str> = CONTRACTIONS.iter().map(|(c, _)| *c).collect();
        let signals = vec!["is", "am", "do", "eat", "go", "running", "walked", "what", "where"];
        prop_oneof![
            prop::sample::select(contractions).prop_map(|w: &str| w.to_string()),
            prop::sample::select(NOUNS.to_vec()).prop_map(|w: &str| w.to_string()),
            prop::sample::select(signals).prop_map(|w: &str| w.to_string()),
            "[a-z]{1,8}",
        ]
    }

    proptest! {
        #[test]
        fn idempotent_without_verb_signal(idx in prop::collection::vec(0..NOUNS.len(), 0..6)) {
            let input: Vec<Token> = idx.iter().map(|&i| NOUNS[i].to_string()).collect();
            let once = reorder(&input);
            prop_assert_eq!(reorder(&once), once.clone());
            prop_assert_eq!(once, input);
        }

        #[test]
        fn never_grows_the_expanded_sequence(words in prop::collection::vec(sentence_word(), 0..8)) {
            let out = reorder(&words);
            if words.len() < 2 {
                prop_assert_eq!(out, words);
            } else {
                prop_assert!(out.len() <= expand_contractions(&words).len());
                prop_assert!(!out.is_empty());
            }
        }
    }
}
