// File: src/fuzzy/morphology.rs

/// Suffix rewrites tried in order: (suffix, replacement).
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("ing", ""),  // jumping -> jump
    ("ed", ""),   // walked -> walk
    ("s", ""),    // walks -> walk
    ("es", ""),   // watches -> watch
    ("ies", "y"), // tries -> try
    ("ly", ""),   // quickly -> quick
];

/// Stems ending in a doubled consonant after "-ing"/"-ed" ("runn", "stopp")
/// also yield the undoubled form.
fn undoubled(stem: &str) -> Option<&str> {
    let mut rev = stem.chars().rev();
    match (rev.next(), rev.next()) {
        (Some(a), Some(b)) if a == b && a.is_ascii_alphabetic() && !"aeiou".contains(a) => {
            Some(&stem[..stem.len() - a.len_utf8()])
        }
        _ => None,
    }
}

/// Generates inflection-stripped candidates for a word, in rule order.
/// A rule whose suffix is absent, or that would leave nothing, yields no
/// candidate; the same candidate is never produced twice.
pub fn variants(word: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(SUFFIX_RULES.len() + 1);
    let mut push = |candidate: String| {
        if !candidate.is_empty() && !out.contains(&candidate) {
            out.push(candidate);
        }
    };
    for &(suffix, replacement) in SUFFIX_RULES {
        let Some(stem) = word.strip_suffix(suffix) else {
            continue;
        };
        if stem.is_empty() {
            continue;
        }
        push(format!("{stem}{replacement}"));
        if suffix == "ing" || suffix == "ed" {
            if let Some(short) = undoubled(stem) {
                push(short.to_string());
            }
        }
    }
    out
}
