//! Axum route handlers for the prompt tools.
//!
//! Bodies arrive as raw JSON and go through the same boundary validator as the
//! stdio transport, so both surfaces reject exactly the same inputs.

use axum::{extract::FromRequest, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::enhancer::pipeline::{classify_prompt, diff_prompt, enhance_prompt};
use crate::errors::AppError;
use crate::models::tools::{ClassifyPromptResponse, DiffPromptResponse, EnhancePromptResponse};
use crate::validation::{parse_classify_request, parse_diff_request, parse_enhance_request};

/// `Json<Value>` whose rejections render through `AppError`.
#[derive(Deserialize, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct JsonBody(Value);

/// POST /api/v1/prompts/enhance
pub async fn handle_enhance(
    JsonBody(body): JsonBody,
) -> Result<Json<EnhancePromptResponse>, AppError> {
    let request = parse_enhance_request(&body)?;
    Ok(Json(enhance_prompt(&request)))
}

/// POST /api/v1/prompts/classify
pub async fn handle_classify(
    JsonBody(body): JsonBody,
) -> Result<Json<ClassifyPromptResponse>, AppError> {
    let request = parse_classify_request(&body)?;
    Ok(Json(classify_prompt(&request)))
}

/// POST /api/v1/prompts/diff
pub async fn handle_diff(JsonBody(body): JsonBody) -> Result<Json<DiffPromptResponse>, AppError> {
    let request = parse_diff_request(&body)?;
    Ok(Json(diff_prompt(&request)))
}
