//! Output-format deriver — picks at most one format directive for the prompt.
//!
//! A directive is produced only when forced, when the domain is `Conversion`, or
//! when the prompt mentions a format cue. Once triggered, `FORMAT_CUES` is scanned
//! in order against the lower-cased prompt and the first hit wins.

use std::sync::LazyLock;

use regex::Regex;

use crate::enhancer::prompts::{
    FORMAT_AS_REQUESTED, FORMAT_CONVERSION, FORMAT_CSV, FORMAT_JSON, FORMAT_LIST,
    FORMAT_MARKDOWN, FORMAT_OUTLINE, FORMAT_STEPS, FORMAT_TABLE, FORMAT_TIMELINE, FORMAT_XML,
    FORMAT_YAML,
};
use crate::models::prompt::Domain;

static FORMAT_REQUESTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?-u:\b)(format|structure|schema|json|yaml|xml|csv|markdown|table|bullet|list|timeline|steps|step-by-step|outline)(?-u:\b)",
    )
    .unwrap()
});

/// Substring cues in priority order, each mapped to its directive.
const FORMAT_CUES: &[(&[&str], &str)] = &[
    (&["json"], FORMAT_JSON),
    (&["yaml"], FORMAT_YAML),
    (&["xml"], FORMAT_XML),
    (&["csv"], FORMAT_CSV),
    (&["markdown"], FORMAT_MARKDOWN),
    (&["table"], FORMAT_TABLE),
    (&["timeline"], FORMAT_TIMELINE),
    (&["step-by-step", "steps"], FORMAT_STEPS),
    (&["outline"], FORMAT_OUTLINE),
    (&["bullet", "list"], FORMAT_LIST),
];

pub fn is_format_requested(prompt: &str) -> bool {
    FORMAT_REQUESTED.is_match(prompt)
}

pub fn derive_output_format(
    prompt: &str,
    domain: Domain,
    force_output_format: bool,
) -> Option<&'static str> {
    let triggered =
        force_output_format || domain == Domain::Conversion || is_format_requested(prompt);
    if !triggered {
        return None;
    }

    let lower = prompt.to_lowercase();
    let explicit = FORMAT_CUES
        .iter()
        .find(|(cues, _)| cues.iter().any(|cue| lower.contains(cue)))
        .map(|(_, directive)| *directive);

    Some(match explicit {
        Some(directive) => directive,
        None if domain == Domain::Conversion => FORMAT_CONVERSION,
        None => FORMAT_AS_REQUESTED,
    })
}
