//! Domain/Risk classifier — assigns a domain tag and a risk level to raw prompt text.
//!
//! Domain is the first matching group in `patterns::DOMAIN_GROUPS`, falling back to
//! `Domain::Unknown`. Risk starts from the domain baseline and is only ever raised:
//! safety-critical or factual-request signals raise it to `High`, and `Strictness::Strict`
//! forces `High` after everything else.

use tracing::debug;

use crate::classifier::patterns::{DOMAIN_GROUPS, FACTUAL_REQUEST, NUMERIC_FACT, SAFETY_CRITICAL};
use crate::models::prompt::{ClassificationResult, Domain, RiskLevel, Strictness};

/// First-match domain detection. Total: every input yields a domain.
pub fn detect_domain(prompt: &str) -> Domain {
    DOMAIN_GROUPS
        .iter()
        .find(|(_, rules)| rules.matches(prompt))
        .map(|(domain, _)| *domain)
        .unwrap_or(Domain::Unknown)
}

pub fn baseline_risk(domain: Domain) -> RiskLevel {
    match domain {
        Domain::Content | Domain::Design | Domain::Conversion => RiskLevel::Low,
        Domain::Code | Domain::Reasoning | Domain::Planning => RiskLevel::Medium,
        Domain::Research | Domain::Unknown => RiskLevel::High,
    }
}

pub fn is_safety_critical(prompt: &str) -> bool {
    SAFETY_CRITICAL.matches(prompt)
}

/// Broad factual vocabulary, OR a digit together with the narrower statistics vocabulary.
pub fn is_factual_request(prompt: &str) -> bool {
    FACTUAL_REQUEST.matches(prompt)
        || (prompt.chars().any(|c| c.is_ascii_digit()) && NUMERIC_FACT.matches(prompt))
}

pub fn classify(prompt: &str, strictness: Strictness) -> ClassificationResult {
    let domain = detect_domain(prompt);
    let safety_critical_detected = is_safety_critical(prompt);
    let factual_request_detected = is_factual_request(prompt);

    let mut risk_level = baseline_risk(domain);
    if safety_critical_detected || factual_request_detected {
        risk_level = risk_level.escalate(RiskLevel::High);
    }
    if strictness == Strictness::Strict {
        risk_level = risk_level.escalate(RiskLevel::High);
    }

    debug!(
        %domain,
        %risk_level,
        safety_critical_detected,
        factual_request_detected,
        "Prompt classified"
    );

    ClassificationResult {
        domain,
        risk_level,
        safety_critical_detected,
        factual_request_detected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "Write a function in Python to reverse a string",
        "What is the population of France and its GDP growth rate?",
        "fix my code",
        "Draft a newsletter about our spring sale",
        "Why does the moon look bigger near the horizon",
        "Create a roadmap for the next quarter",
        "Pick a color palette for the landing page",
        "Translate this paragraph into German",
        "hello there friend",
        "",
        "   ",
        "日本語のテキスト",
    ];

    #[test]
    fn test_python_function_is_code_medium() {
        let result = classify(SAMPLES[0], Strictness::Auto);
        assert_eq!(result.domain, Domain::Code);
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert!(!result.safety_critical_detected);
        assert!(!result.factual_request_detected);
    }

    #[test]
    fn test_mixed_cjk_prompt_is_code_medium() {
        let result = classify("用Python写一个反转字符串的函数", Strictness::Auto);
        assert_eq!(result.domain, Domain::Code);
        assert_eq!(result.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_population_question_is_research_high() {
        let result = classify(SAMPLES[1], Strictness::Auto);
        assert_eq!(result.domain, Domain::Research);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert!(result.factual_request_detected);
    }

    #[test]
    fn test_domain_priority_per_group() {
        assert_eq!(detect_domain("Draft a newsletter about our spring sale"), Domain::Content);
        assert_eq!(
            detect_domain("Why does the moon look bigger near the horizon"),
            Domain::Reasoning
        );
        assert_eq!(detect_domain("Create a roadmap for the next quarter"), Domain::Planning);
        assert_eq!(detect_domain("Pick a color palette for the landing page"), Domain::Design);
        assert_eq!(detect_domain("Translate this paragraph into German"), Domain::Conversion);
        assert_eq!(detect_domain("hello there friend"), Domain::Unknown);
    }

    #[test]
    fn test_code_wins_over_later_groups() {
        // "write" is content, "rust" is code: code comes first.
        assert_eq!(detect_domain("write me a poem about rust"), Domain::Code);
        // A lone semicolon is a code signal.
        assert_eq!(detect_domain("tell a story; make it short"), Domain::Code);
    }

    #[test]
    fn test_fenced_block_is_code() {
        let prompt = "Please look at this:\n```\nhello world\n```";
        assert_eq!(detect_domain(prompt), Domain::Code);
    }

    #[test]
    fn test_classification_is_total() {
        for prompt in SAMPLES {
            let result = classify(prompt, Strictness::Auto);
            assert!(Domain::ALL.contains(&result.domain));
        }
    }

    #[test]
    fn test_strict_always_high() {
        for prompt in SAMPLES {
            let result = classify(prompt, Strictness::Strict);
            assert_eq!(result.risk_level, RiskLevel::High, "prompt: {prompt:?}");
        }
    }

    #[test]
    fn test_normal_and_auto_identical() {
        for prompt in SAMPLES {
            assert_eq!(
                classify(prompt, Strictness::Normal),
                classify(prompt, Strictness::Auto)
            );
        }
    }

    #[test]
    fn test_safety_critical_escalates_low_domain() {
        let prompt = "Draft a blog post about medical dosage guidelines";
        let result = classify(prompt, Strictness::Auto);
        assert_eq!(result.domain, Domain::Content);
        assert!(result.safety_critical_detected);
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_factual_escalates_design() {
        let prompt = "Design a logo, cite the source of inspiration";
        let result = classify(prompt, Strictness::Auto);
        assert_eq!(result.domain, Domain::Design);
        assert!(result.factual_request_detected);
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_digit_with_year_is_factual() {
        // "year" alone is not in the broad vocabulary; it needs a digit.
        assert!(is_factual_request("Summarize the year 2020"));
        assert!(!is_factual_request("Summarize the year in review"));
    }

    #[test]
    fn test_plain_digit_is_not_factual() {
        assert!(!is_factual_request("Summarize these 5 paragraphs"));
    }

    #[test]
    fn test_low_baseline_without_signals() {
        let result = classify("Translate this paragraph into German", Strictness::Auto);
        assert_eq!(result.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_unknown_baseline_is_high() {
        let result = classify("hello there friend", Strictness::Auto);
        assert_eq!(result.domain, Domain::Unknown);
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_baseline_table() {
        assert_eq!(baseline_risk(Domain::Content), RiskLevel::Low);
        assert_eq!(baseline_risk(Domain::Design), RiskLevel::Low);
        assert_eq!(baseline_risk(Domain::Conversion), RiskLevel::Low);
        assert_eq!(baseline_risk(Domain::Code), RiskLevel::Medium);
        assert_eq!(baseline_risk(Domain::Reasoning), RiskLevel::Medium);
        assert_eq!(baseline_risk(Domain::Planning), RiskLevel::Medium);
        assert_eq!(baseline_risk(Domain::Research), RiskLevel::High);
        assert_eq!(baseline_risk(Domain::Unknown), RiskLevel::High);
    }
}
