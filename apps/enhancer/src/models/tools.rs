use serde::{Deserialize, Serialize};

use crate::models::prompt::{Domain, RiskLevel, Strictness};

// ────────────────────────────────────────────────────────────────────────────
// Requests (produced by the boundary validator, never deserialized directly)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnhanceOptions {
    pub language: Option<String>,
    pub force_output_format: bool,
    pub strictness: Strictness,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhancePromptRequest {
    pub prompt: String,
    pub options: EnhanceOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifyPromptRequest {
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffPromptRequest {
    pub prompt: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Responses
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhanceMetadata {
    pub domain: Domain,
    pub risk_level: RiskLevel,
    /// Hex SHA-256 of the normalized enhanced prompt.
    pub determinism_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancePromptResponse {
    pub enhanced_prompt: String,
    pub metadata: EnhanceMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyPromptResponse {
    pub domain: Domain,
    pub risk_level: RiskLevel,
    pub ambiguity_detected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffPromptResponse {
    pub raw: String,
    pub enhanced: String,
    pub changes_made: Vec<String>,
    pub metadata: EnhanceMetadata,
}
