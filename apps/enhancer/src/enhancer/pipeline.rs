//! Enhancement pipeline — orchestrates the three public operations.
//!
//! Flow: classify → resolve ambiguity → synthesize constraints / inject guards →
//!       derive output format → build structure → format → hash.
//!
//! Every step is a pure function of the validated request; nothing is cached or shared.

use tracing::debug;

use crate::classifier::domain::classify;
use crate::determinism::compute_determinism_hash;
use crate::enhancer::ambiguity::resolve_ambiguity;
use crate::enhancer::constraints::synthesize_constraints;
use crate::enhancer::formatter::{build_prompt_structure, format_enhanced_prompt};
use crate::enhancer::guards::inject_guards;
use crate::enhancer::output_format::derive_output_format;
use crate::models::prompt::{RiskLevel, Strictness};
use crate::models::tools::{
    ClassifyPromptRequest, ClassifyPromptResponse, DiffPromptRequest, DiffPromptResponse,
    EnhanceMetadata, EnhanceOptions, EnhancePromptRequest, EnhancePromptResponse,
};

pub const CHANGE_SECTIONS: &str = "section additions";
pub const CHANGE_GUARDS: &str = "guard injections";
pub const CHANGE_HIGH_RISK: &str = "high-risk guard injections";
pub const CHANGE_AMBIGUITY: &str = "ambiguity handling";

/// Enhancement result plus the ambiguity signal `diff_prompt` reports on.
#[derive(Debug, Clone)]
pub struct EnhanceOutcome {
    pub response: EnhancePromptResponse,
    pub ambiguity_detected: bool,
}

pub fn enhance_prompt_internal(prompt: &str, options: &EnhanceOptions) -> EnhanceOutcome {
    let classification = classify(prompt, options.strictness);
    let ambiguity = resolve_ambiguity(prompt, classification.domain);

    let constraints = synthesize_constraints(classification.domain, options.language.as_deref());
    let guards = inject_guards(classification.risk_level, ambiguity.inject_uncertainty_rules);

    let output_format =
        derive_output_format(prompt, classification.domain, options.force_output_format);

    let structure = build_prompt_structure(
        prompt,
        classification.domain,
        &constraints,
        &guards,
        output_format,
    );
    let enhanced_prompt = format_enhanced_prompt(&structure);
    let determinism_hash = compute_determinism_hash(&enhanced_prompt);

    debug!(
        domain = %classification.domain,
        risk_level = %classification.risk_level,
        ambiguity_detected = ambiguity.ambiguity_detected,
        uncertainty_rules = ambiguity.inject_uncertainty_rules,
        hash = %determinism_hash,
        "Prompt enhanced"
    );

    EnhanceOutcome {
        response: EnhancePromptResponse {
            enhanced_prompt,
            metadata: EnhanceMetadata {
                domain: classification.domain,
                risk_level: classification.risk_level,
                determinism_hash,
            },
        },
        ambiguity_detected: ambiguity.ambiguity_detected,
    }
}

pub fn enhance_prompt(request: &EnhancePromptRequest) -> EnhancePromptResponse {
    enhance_prompt_internal(&request.prompt, &request.options).response
}

pub fn classify_prompt(request: &ClassifyPromptRequest) -> ClassifyPromptResponse {
    let classification = classify(&request.prompt, Strictness::Auto);
    let ambiguity = resolve_ambiguity(&request.prompt, classification.domain);

    ClassifyPromptResponse {
        domain: classification.domain,
        risk_level: classification.risk_level,
        ambiguity_detected: ambiguity.ambiguity_detected,
    }
}

/// Enhances with default options and lists which kinds of changes were applied.
pub fn diff_prompt(request: &DiffPromptRequest) -> DiffPromptResponse {
    let outcome = enhance_prompt_internal(&request.prompt, &EnhanceOptions::default());

    let mut changes_made = vec![CHANGE_SECTIONS.to_string(), CHANGE_GUARDS.to_string()];
    if outcome.response.metadata.risk_level == RiskLevel::High {
        changes_made.push(CHANGE_HIGH_RISK.to_string());
    }
    if outcome.ambiguity_detected {
        changes_made.push(CHANGE_AMBIGUITY.to_string());
    }

    DiffPromptResponse {
        raw: request.prompt.clone(),
        enhanced: outcome.response.enhanced_prompt,
        changes_made,
        metadata: outcome.response.metadata,
    }
}
