//! Prompt structure builder and canonical formatter.
//!
//! The rendered layout is byte-for-byte stable: eight `###` headers in fixed
//! order, each followed by its trimmed body, sections separated by one blank line,
//! no trailing newline.

use crate::enhancer::guards::GuardInjection;
use crate::enhancer::prompts::{
    bullets, CITATION_QUALITY_BAR, CODE_QUALITY_BAR, DEFAULT_OUTPUT_FORMAT, NO_EXTRA_CONTEXT,
    SECTION_HEADERS, SEMANTIC_INTEGRITY_RULE, UNIVERSAL_QUALITY_BAR,
};
use crate::models::prompt::{Domain, PromptStructure};

pub fn role_for_domain(domain: Domain) -> &'static str {
    match domain {
        Domain::Code => {
            "You are an expert software engineer focused on correctness and reliability."
        }
        Domain::Content => {
            "You are a professional writer and editor focused on clarity and accuracy."
        }
        Domain::Research => {
            "You are a careful research assistant focused on factual accuracy and clear uncertainty handling."
        }
        Domain::Reasoning => {
            "You are a rigorous reasoning assistant focused on logical correctness and explicit uncertainty."
        }
        Domain::Planning => {
            "You are a pragmatic planner focused on actionable, realistic guidance."
        }
        Domain::Design => "You are a UI/UX designer focused on usability and clear communication.",
        Domain::Conversion => {
            "You are a precise text transformation assistant focused on fidelity to the original content."
        }
        Domain::Unknown => {
            "You are a careful assistant focused on following instructions and avoiding fabrication."
        }
    }
}

pub fn quality_bar_for_domain(domain: Domain) -> String {
    let mut lines: Vec<&str> = UNIVERSAL_QUALITY_BAR.to_vec();
    if domain == Domain::Code {
        lines.push(CODE_QUALITY_BAR);
    }
    if matches!(domain, Domain::Research | Domain::Unknown) {
        lines.push(CITATION_QUALITY_BAR);
    }
    bullets(lines)
}

/// Strips surrounding whitespace and byte-order marks.
fn trim_task(raw_prompt: &str) -> &str {
    raw_prompt.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Assembles the eight sections. The task is the user's prompt, trimmed, never paraphrased.
pub fn build_prompt_structure(
    raw_prompt: &str,
    domain: Domain,
    constraints: &str,
    guards: &GuardInjection,
    output_format: Option<&str>,
) -> PromptStructure {
    PromptStructure {
        role: role_for_domain(domain).to_string(),
        task: trim_task(raw_prompt).to_string(),
        context: NO_EXTRA_CONTEXT.to_string(),
        constraints: format!("{}\n{}", guards.global_guards, constraints),
        verification_rules: guards.verification_rules.clone(),
        output_format: output_format.unwrap_or(DEFAULT_OUTPUT_FORMAT).to_string(),
        semantic_integrity_rule: SEMANTIC_INTEGRITY_RULE.to_string(),
        quality_bar: quality_bar_for_domain(domain),
    }
}

pub fn format_enhanced_prompt(structure: &PromptStructure) -> String {
    let bodies = [
        &structure.role,
        &structure.task,
        &structure.context,
        &structure.constraints,
        &structure.verification_rules,
        &structure.output_format,
        &structure.semantic_integrity_rule,
        &structure.quality_bar,
    ];

    SECTION_HEADERS
        .iter()
        .zip(bodies)
        .map(|(header, body)| format!("{header}\n{}", body.trim()))
        .collect::<Vec<_>>()
        .join("\n\n")
}
