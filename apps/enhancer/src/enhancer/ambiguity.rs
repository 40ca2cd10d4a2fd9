//! Ambiguity resolver — flags vague or underspecified prompts.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::prompt::{AmbiguityResult, Domain};

/// Prompts with this many words or fewer are treated as ambiguous on length alone.
const SHORT_PROMPT_MAX_WORDS: usize = 3;

static VAGUENESS_MARKERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(?-u:\b)etc\.?(?-u:\b)",
        r"(?i)(?-u:\b)and so on(?-u:\b)",
        r"(?i)(?-u:\b)whatever(?-u:\b)",
        r"(?i)(?-u:\b)anything(?-u:\b)",
        r"(?i)(?-u:\b)something(?-u:\b)",
        r"(?i)(?-u:\b)various(?-u:\b)",
        r"(?i)(?-u:\b)several(?-u:\b)",
        r"(?i)(?-u:\b)a few(?-u:\b)",
        r"(?i)(?-u:\b)kind of(?-u:\b)",
        r"(?i)(?-u:\b)sort of(?-u:\b)",
        r"(?i)(?-u:\b)maybe(?-u:\b)",
        r"(?i)(?-u:\b)approximately(?-u:\b)",
        r"(?i)(?-u:\b)as needed(?-u:\b)",
        r"(?i)(?-u:\b)as appropriate(?-u:\b)",
        r"(?i)(?-u:\b)to be determined(?-u:\b)",
        r"(?i)(?-u:\b)tbd(?-u:\b)",
        // <placeholder>
        r"<[^>]+>",
        // [placeholder]
        r"\[[^\]]+\]",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

pub fn resolve_ambiguity(prompt: &str, domain: Domain) -> AmbiguityResult {
    let has_marker = VAGUENESS_MARKERS.iter().any(|re| re.is_match(prompt));
    let too_short = prompt.split_whitespace().count() <= SHORT_PROMPT_MAX_WORDS;

    let ambiguity_detected = has_marker || too_short;

    AmbiguityResult {
        ambiguity_detected,
        inject_uncertainty_rules: ambiguity_detected && domain.needs_uncertainty_rules(),
    }
}
