//! Constraint synthesizer — universal intent-preserving bullets plus a small
//! per-domain table.

use crate::enhancer::prompts::{bullets, LANGUAGE_CONSTRAINT_TEMPLATE, UNIVERSAL_CONSTRAINTS};
use crate::models::prompt::Domain;

fn domain_constraints(domain: Domain) -> &'static [&'static str] {
    match domain {
        Domain::Code => &[
            "Use standard language features unless otherwise specified.",
            "Do not assume framework versions.",
        ],
        Domain::Content => &["Maintain neutral, clear tone unless otherwise specified."],
        Domain::Planning => &["Base recommendations on common defaults only."],
        Domain::Research => &["Avoid unsupported claims."],
        Domain::Reasoning | Domain::Design | Domain::Conversion | Domain::Unknown => &[],
    }
}

/// Returns the constraints block as `- `-prefixed lines.
///
/// An empty `language` counts as not requested; a non-empty one is named verbatim.
pub fn synthesize_constraints(domain: Domain, language: Option<&str>) -> String {
    let language_line = language
        .filter(|l| !l.is_empty())
        .map(|l| LANGUAGE_CONSTRAINT_TEMPLATE.replace("{language}", l));

    let mut lines: Vec<&str> = UNIVERSAL_CONSTRAINTS.to_vec();
    if let Some(line) = language_line.as_deref() {
        lines.push(line);
    }
    lines.extend_from_slice(domain_constraints(domain));

    bullets(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_constraints() {
        let out = synthesize_constraints(Domain::Code, None);
        assert_eq!(
            out,
            "- Preserve the original user intent exactly.\n\
             - Do not add new requirements, features, or scope.\n\
             - Use standard language features unless otherwise specified.\n\
             - Do not assume framework versions."
        );
    }

    #[test]
    fn test_language_inserted_before_domain_bullets() {
        let out = synthesize_constraints(Domain::Research, Some("Brazilian Portuguese"));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "- Write the response in Brazilian Portuguese.");
        assert_eq!(lines[3], "- Avoid unsupported claims.");
    }

    #[test]
    fn test_empty_language_ignored() {
        let out = synthesize_constraints(Domain::Design, Some(""));
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn test_domains_without_extras() {
        for domain in [
            Domain::Reasoning,
            Domain::Design,
            Domain::Conversion,
            Domain::Unknown,
        ] {
            assert_eq!(synthesize_constraints(domain, None).lines().count(), 2);
        }
    }

    #[test]
    fn test_every_line_is_a_bullet() {
        for domain in Domain::ALL {
            let out = synthesize_constraints(domain, Some("fr-CA"));
            assert!(out.lines().all(|l| l.starts_with("- ")));
        }
    }
}
