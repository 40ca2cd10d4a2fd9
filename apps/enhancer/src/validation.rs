//! Boundary validation — turns untyped tool arguments into typed requests.
//!
//! Nothing reaches the pipeline unless it passes here. Lengths are counted in
//! Unicode scalar values, not UTF-16 code units: a character outside the Basic
//! Multilingual Plane (most emoji) counts once, not twice.

use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::models::prompt::Strictness;
use crate::models::tools::{
    ClassifyPromptRequest, DiffPromptRequest, EnhanceOptions, EnhancePromptRequest,
};

pub const PROMPT_MIN_LENGTH: usize = 10;
pub const PROMPT_MAX_LENGTH: usize = 5000;

fn invalid(reason: impl Into<String>) -> AppError {
    AppError::InvalidInput(reason.into())
}

fn expect_object(input: &Value) -> Result<&Map<String, Value>, AppError> {
    input
        .as_object()
        .ok_or_else(|| invalid("expected an object"))
}

pub fn validate_prompt(prompt: Option<&Value>) -> Result<String, AppError> {
    let prompt = prompt
        .and_then(Value::as_str)
        .ok_or_else(|| invalid("prompt must be a string"))?;

    let length = prompt.chars().count();
    if length < PROMPT_MIN_LENGTH {
        return Err(invalid(format!(
            "prompt must be at least {PROMPT_MIN_LENGTH} characters long"
        )));
    }
    if length > PROMPT_MAX_LENGTH {
        return Err(invalid(format!(
            "prompt must not exceed {PROMPT_MAX_LENGTH} characters"
        )));
    }

    Ok(prompt.to_string())
}

/// Absent or `null` options mean defaults; `null` fields inside mean defaults too.
fn parse_options(raw: Option<&Value>) -> Result<EnhanceOptions, AppError> {
    let options = match raw {
        None | Some(Value::Null) => return Ok(EnhanceOptions::default()),
        Some(Value::Object(map)) => map,
        Some(_) => return Err(invalid("options must be an object or null")),
    };

    let language = match options.get("language") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => return Err(invalid("options.language must be a string or null")),
    };

    let force_output_format = match options.get("force_output_format") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(_) => {
            return Err(invalid(
                "options.force_output_format must be a boolean or null",
            ))
        }
    };

    let strictness = match options.get("strictness") {
        None | Some(Value::Null) => Strictness::default(),
        Some(value) => value
            .as_str()
            .and_then(Strictness::parse)
            .ok_or_else(|| invalid("options.strictness must be one of: auto, normal, strict"))?,
    };

    Ok(EnhanceOptions {
        language,
        force_output_format,
        strictness,
    })
}

pub fn parse_enhance_request(input: &Value) -> Result<EnhancePromptRequest, AppError> {
    let obj = expect_object(input)?;
    let prompt = validate_prompt(obj.get("prompt"))?;
    let options = parse_options(obj.get("options"))?;
    Ok(EnhancePromptRequest { prompt, options })
}

pub fn parse_classify_request(input: &Value) -> Result<ClassifyPromptRequest, AppError> {
    let obj = expect_object(input)?;
    Ok(ClassifyPromptRequest {
        prompt: validate_prompt(obj.get("prompt"))?,
    })
}

pub fn parse_diff_request(input: &Value) -> Result<DiffPromptRequest, AppError> {
    let obj = expect_object(input)?;
    Ok(DiffPromptRequest {
        prompt: validate_prompt(obj.get("prompt"))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reason(err: AppError) -> String {
        match err {
            AppError::InvalidInput(reason) => reason,
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_minimal_request() {
        let req = parse_enhance_request(&json!({"prompt": "Explain closures in Rust"})).unwrap();
        assert_eq!(req.prompt, "Explain closures in Rust");
        assert_eq!(req.options, EnhanceOptions::default());
    }

    #[test]
    fn test_missing_prompt() {
        let err = parse_classify_request(&json!({})).unwrap_err();
        assert_eq!(reason(err), "prompt must be a string");
    }

    #[test]
    fn test_non_string_prompt() {
        let err = parse_diff_request(&json!({"prompt": 42})).unwrap_err();
        assert_eq!(reason(err), "prompt must be a string");
    }

    #[test]
    fn test_non_object_input() {
        let err = parse_enhance_request(&json!(["prompt"])).unwrap_err();
        assert_eq!(reason(err), "expected an object");
    }

    #[test]
    fn test_length_bounds() {
        assert!(validate_prompt(Some(&json!("123456789"))).is_err());
        assert!(validate_prompt(Some(&json!("1234567890"))).is_ok());
        assert!(validate_prompt(Some(&json!("a".repeat(5000)))).is_ok());
        let err = validate_prompt(Some(&json!("a".repeat(5001)))).unwrap_err();
        assert_eq!(reason(err), "prompt must not exceed 5000 characters");
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Ten characters, thirty bytes.
        assert!(validate_prompt(Some(&json!("日本語日本語日本語日"))).is_ok());
    }

    #[test]
    fn test_astral_characters_count_once() {
        // Five emoji: five scalar values, ten UTF-16 code units.
        assert!(validate_prompt(Some(&json!("🚀🚀🚀🚀🚀"))).is_err());
        assert!(validate_prompt(Some(&json!("🚀".repeat(10)))).is_ok());
        assert!(validate_prompt(Some(&json!("🚀".repeat(5000)))).is_ok());
        assert!(validate_prompt(Some(&json!("🚀".repeat(5001)))).is_err());
    }

    #[test]
    fn test_short_prompt_reason() {
        let err = validate_prompt(Some(&json!("short"))).unwrap_err();
        assert_eq!(reason(err), "prompt must be at least 10 characters long");
    }

    #[test]
    fn test_full_options() {
        let req = parse_enhance_request(&json!({
            "prompt": "Summarize this report for executives",
            "options": {"language": "French", "force_output_format": true, "strictness": "strict"}
        }))
        .unwrap();
        assert_eq!(req.options.language.as_deref(), Some("French"));
        assert!(req.options.force_output_format);
        assert_eq!(req.options.strictness, Strictness::Strict);
    }

    #[test]
    fn test_null_options_and_fields_default() {
        let req = parse_enhance_request(&json!({
            "prompt": "Summarize this report for executives",
            "options": null
        }))
        .unwrap();
        assert_eq!(req.options, EnhanceOptions::default());

        let req = parse_enhance_request(&json!({
            "prompt": "Summarize this report for executives",
            "options": {"language": null, "force_output_format": null, "strictness": null}
        }))
        .unwrap();
        assert_eq!(req.options, EnhanceOptions::default());
    }

    #[test]
    fn test_bad_option_types() {
        let cases = [
            (json!("strict"), "options must be an object or null"),
            (json!({"language": 5}), "options.language must be a string or null"),
            (
                json!({"force_output_format": "yes"}),
                "options.force_output_format must be a boolean or null",
            ),
            (
                json!({"strictness": "paranoid"}),
                "options.strictness must be one of: auto, normal, strict",
            ),
            (
                json!({"strictness": 1}),
                "options.strictness must be one of: auto, normal, strict",
            ),
        ];
        for (options, expected) in cases {
            let err = parse_enhance_request(&json!({
                "prompt": "Summarize this report for executives",
                "options": options
            }))
            .unwrap_err();
            assert_eq!(reason(err), expected);
        }
    }
}
