//! Hallucination guard injector.
//!
//! Global guards never vary. Verification rules start from the base list and grow
//! by two independent, additive extensions: high risk (+3) and ambiguity (+2).

use crate::enhancer::prompts::{
    bullets, AMBIGUITY_VERIFICATION_RULES, BASE_VERIFICATION_RULES, GLOBAL_GUARDS,
    HIGH_RISK_VERIFICATION_RULES,
};
use crate::models::prompt::RiskLevel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardInjection {
    pub global_guards: String,
    pub verification_rules: String,
}

pub fn inject_guards(risk_level: RiskLevel, inject_ambiguity_rules: bool) -> GuardInjection {
    let mut rules: Vec<&str> = BASE_VERIFICATION_RULES.to_vec();

    if risk_level == RiskLevel::High {
        rules.extend_from_slice(HIGH_RISK_VERIFICATION_RULES);
    }
    if inject_ambiguity_rules {
        rules.extend_from_slice(AMBIGUITY_VERIFICATION_RULES);
    }

    GuardInjection {
        global_guards: bullets(GLOBAL_GUARDS.iter().copied()),
        verification_rules: bullets(rules),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_count(g: &GuardInjection) -> usize {
        g.verification_rules.lines().count()
    }

    #[test]
    fn test_global_guards_invariant() {
        let a = inject_guards(RiskLevel::Low, false);
        let b = inject_guards(RiskLevel::High, true);
        assert_eq!(a.global_guards, b.global_guards);
        assert_eq!(a.global_guards.lines().count(), 4);
    }

    #[test]
    fn test_rule_counts() {
        assert_eq!(rule_count(&inject_guards(RiskLevel::Low, false)), 4);
        assert_eq!(rule_count(&inject_guards(RiskLevel::Medium, false)), 4);
        assert_eq!(rule_count(&inject_guards(RiskLevel::High, false)), 7);
        assert_eq!(rule_count(&inject_guards(RiskLevel::Medium, true)), 6);
        assert_eq!(rule_count(&inject_guards(RiskLevel::High, true)), 9);
    }

    #[test]
    fn test_high_risk_rules_precede_ambiguity_rules() {
        let g = inject_guards(RiskLevel::High, true);
        let lines: Vec<&str> = g.verification_rules.lines().collect();
        assert_eq!(lines[4], "- Do not provide estimates unless explicitly requested.");
        assert_eq!(lines[8], "- Explicitly state any assumptions made.");
    }
}
