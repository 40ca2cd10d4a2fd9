//! Read-only rule tables for domain, safety and factual-request detection.
//!
//! Every table is compiled once on first use and never mutated afterwards.
//! All matches are case-insensitive and unanchored.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::prompt::Domain;

/// An ordered list of regexes. Matches when any rule matches.
#[derive(Debug)]
pub struct RuleSet(Vec<Regex>);

impl RuleSet {
    fn compile(patterns: &[&str]) -> Self {
        RuleSet(
            patterns
                .iter()
                .map(|p| Regex::new(p).unwrap())
                .collect(),
        )
    }

    pub fn matches(&self, text: &str) -> bool {
        self.0.iter().any(|re| re.is_match(text))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Domain groups
// ────────────────────────────────────────────────────────────────────────────

const CODE: &[&str] = &[
    r"(?s)```.*?```",
    r"(?i)(?-u:\b)(function|class|interface|type|import|export|const|let|var|def|return)(?-u:\b)",
    r"(?i)(?-u:\b)(node\.js|nodejs|typescript|javascript|python|java|c\+\+|c#|golang|rust|sql|regex)(?-u:\b)",
    r"[{};]|=>",
    r"(?i)(?-u:\b)(api|sdk|library|framework|package|dependency|npm|pip|cargo|maven|gradle)(?-u:\b)",
];

const CONTENT: &[&str] = &[
    r"(?i)(?-u:\b)(write|draft|compose|script|story|caption|post|blog|newsletter|copy|narrative|poem)(?-u:\b)",
    r"(?i)(?-u:\b)(tone|voice|style guide|headline|tagline|call to action)(?-u:\b)",
];

const RESEARCH: &[&str] = &[
    r"(?i)(?-u:\b)(research|study|studies|evidence|data|statistics|statistic|sources|citations|references)(?-u:\b)",
    r"(?i)(?-u:\b)(explain|cause|causes|history|when did|how many|what is|who is)(?-u:\b)",
];

const REASONING: &[&str] = &[
    r"(?i)(?-u:\b)(why|how)(?-u:\b)",
    r"(?i)(?-u:\b)(logic|reasoning|solve|prove|derive|deduce)(?-u:\b)",
];

const PLANNING: &[&str] =
    &[r"(?i)(?-u:\b)(plan|roadmap|strategy|process|steps|timeline|milestones|checklist)(?-u:\b)"];

const DESIGN: &[&str] = &[
    r"(?i)(?-u:\b)(ui|ux|wireframe|layout|branding|logo|typography|color palette|visual design)(?-u:\b)",
];

const CONVERSION: &[&str] =
    &[r"(?i)(?-u:\b)(translate|summarize|convert|rewrite|transform|paraphrase|extract)(?-u:\b)"];

/// Domain groups in priority order. The first group with a matching rule wins;
/// `Domain::Unknown` is the fallback and has no entry here.
pub static DOMAIN_GROUPS: LazyLock<Vec<(Domain, RuleSet)>> = LazyLock::new(|| {
    vec![
        (Domain::Code, RuleSet::compile(CODE)),
        (Domain::Content, RuleSet::compile(CONTENT)),
        (Domain::Research, RuleSet::compile(RESEARCH)),
        (Domain::Reasoning, RuleSet::compile(REASONING)),
        (Domain::Planning, RuleSet::compile(PLANNING)),
        (Domain::Design, RuleSet::compile(DESIGN)),
        (Domain::Conversion, RuleSet::compile(CONVERSION)),
    ]
});

// ────────────────────────────────────────────────────────────────────────────
// Risk signals
// ────────────────────────────────────────────────────────────────────────────

/// Legal, medical and security vocabulary.
pub static SAFETY_CRITICAL: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::compile(&[
        r"(?i)(?-u:\b)(legal|law|contract|lawsuit|attorney|compliance|regulation|tax)(?-u:\b)",
        r"(?i)(?-u:\b)(medical|diagnosis|treatment|symptom|dosage|drug|health)(?-u:\b)",
        r"(?i)(?-u:\b)(security|vulnerability|exploit|malware|phishing|password|encryption)(?-u:\b)",
    ])
});

/// Quantitative, temporal and citation requests.
pub static FACTUAL_REQUEST: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::compile(&[
        r"(?i)(?-u:\b)(how many|when|what year|date|statistics|data|percent|percentage|rate)(?-u:\b)",
        r"(?i)(?-u:\b)(cite|citation|source|reference)(?-u:\b)",
        r"(?i)(?-u:\b)(gdp|population|revenue|market size|inflation)(?-u:\b)",
    ])
});

/// Narrower statistics vocabulary, only consulted when the prompt contains a digit.
pub static NUMERIC_FACT: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::compile(&[r"(?i)(?-u:\b)(statistics|data|date|year|percent)(?-u:\b)"])
});
