use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse topical category of a prompt. Drives persona, constraints and quality bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Code,
    Content,
    Research,
    Reasoning,
    Planning,
    Design,
    Conversion,
    Unknown,
}

impl Domain {
    #[cfg(test)]
    pub const ALL: [Domain; 8] = [
        Domain::Code,
        Domain::Content,
        Domain::Research,
        Domain::Reasoning,
        Domain::Planning,
        Domain::Design,
        Domain::Conversion,
        Domain::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Code => "code",
            Domain::Content => "content",
            Domain::Research => "research",
            Domain::Reasoning => "reasoning",
            Domain::Planning => "planning",
            Domain::Design => "design",
            Domain::Conversion => "conversion",
            Domain::Unknown => "unknown",
        }
    }

    /// Domains where silently guessing is harmful enough to warrant uncertainty rules.
    pub fn needs_uncertainty_rules(&self) -> bool {
        matches!(
            self,
            Domain::Code
                | Domain::Planning
                | Domain::Research
                | Domain::Reasoning
                | Domain::Unknown
        )
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hallucination exposure tier. Variant order is the escalation order: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Raises the level to `floor` if it is lower. Never downgrades.
    pub fn escalate(self, floor: RiskLevel) -> RiskLevel {
        self.max(floor)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-selected risk handling. `Normal` and `Auto` behave identically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strictness {
    Normal,
    Strict,
    #[default]
    Auto,
}

impl Strictness {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(Strictness::Auto),
            "normal" => Some(Strictness::Normal),
            "strict" => Some(Strictness::Strict),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub domain: Domain,
    pub risk_level: RiskLevel,
    pub safety_critical_detected: bool,
    pub factual_request_detected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmbiguityResult {
    pub ambiguity_detected: bool,
    pub inject_uncertainty_rules: bool,
}

/// The eight canonical sections of an enhanced prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptStructure {
    pub role: String,
    pub task: String,
    pub context: String,
    pub constraints: String,
    pub verification_rules: String,
    pub output_format: String,
    pub semantic_integrity_rule: String,
    pub quality_bar: String,
}
