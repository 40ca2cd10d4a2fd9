//! MCP tool definitions and the tool dispatcher shared by both transports.

use anyhow::Context;
use serde::Serialize;
use serde_json::{json, Value};

use crate::enhancer::pipeline::{classify_prompt, diff_prompt, enhance_prompt};
use crate::errors::AppError;
use crate::validation::{
    parse_classify_request, parse_diff_request, parse_enhance_request, PROMPT_MAX_LENGTH,
    PROMPT_MIN_LENGTH,
};

pub mod tool_names {
    pub const ENHANCE_PROMPT: &str = "enhance_prompt";
    pub const CLASSIFY_PROMPT: &str = "classify_prompt";
    pub const DIFF_PROMPT: &str = "diff_prompt";
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

fn prompt_schema() -> Value {
    json!({
        "type": "string",
        "description": "The raw prompt",
        "minLength": PROMPT_MIN_LENGTH,
        "maxLength": PROMPT_MAX_LENGTH
    })
}

pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: tool_names::ENHANCE_PROMPT,
            description: "Rewrites a raw prompt into a structured, hallucination-resistant prompt \
                with ROLE/TASK/CONTEXT/CONSTRAINTS/VERIFICATION RULES/OUTPUT FORMAT/\
                SEMANTIC INTEGRITY RULE/QUALITY BAR sections.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "prompt": prompt_schema(),
                    "options": {
                        "type": ["object", "null"],
                        "properties": {
                            "language": {
                                "type": ["string", "null"],
                                "description": "Language the response must be written in"
                            },
                            "force_output_format": {
                                "type": ["boolean", "null"],
                                "description": "Always emit an explicit output-format directive"
                            },
                            "strictness": {
                                "type": ["string", "null"],
                                "enum": ["auto", "normal", "strict", null],
                                "description": "'strict' forces high-risk verification rules"
                            }
                        }
                    }
                },
                "required": ["prompt"]
            }),
        },
        ToolDefinition {
            name: tool_names::CLASSIFY_PROMPT,
            description: "Classifies a prompt's domain, risk level and ambiguity without rewriting it.",
            input_schema: json!({
                "type": "object",
                "properties": { "prompt": prompt_schema() },
                "required": ["prompt"]
            }),
        },
        ToolDefinition {
            name: tool_names::DIFF_PROMPT,
            description: "Returns the raw prompt, its enhanced form and the kinds of changes applied.",
            input_schema: json!({
                "type": "object",
                "properties": { "prompt": prompt_schema() },
                "required": ["prompt"]
            }),
        },
    ]
}

/// Output of a successful tool call, ready for the MCP `content` array.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput {
    pub texts: Vec<String>,
}

fn to_json_text<T: Serialize>(value: &T, tool: &str) -> Result<String, AppError> {
    let text = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {tool} response"))?;
    Ok(text)
}

/// Validates `arguments` for `name` and runs the matching pipeline operation.
pub fn call_tool(name: &str, arguments: &Value) -> Result<ToolOutput, AppError> {
    match name {
        tool_names::ENHANCE_PROMPT => {
            let request = parse_enhance_request(arguments)?;
            let response = enhance_prompt(&request);
            Ok(ToolOutput {
                texts: vec![
                    response.enhanced_prompt.clone(),
                    to_json_text(&response, name)?,
                ],
            })
        }
        tool_names::CLASSIFY_PROMPT => {
            let request = parse_classify_request(arguments)?;
            let response = classify_prompt(&request);
            Ok(ToolOutput {
                texts: vec![to_json_text(&response, name)?],
            })
        }
        tool_names::DIFF_PROMPT => {
            let request = parse_diff_request(arguments)?;
            let response = diff_prompt(&request);
            Ok(ToolOutput {
                texts: vec![to_json_text(&response, name)?],
            })
        }
        _ => Err(AppError::UnknownTool(name.to_string())),
    }
}
