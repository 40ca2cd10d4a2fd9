//! MCP server over newline-delimited JSON-RPC on stdin/stdout.
//!
//! stdout carries protocol frames only; all logging goes to stderr.

use std::future::Future;

use anyhow::{Context, Result};
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info, warn};

use crate::errors::AppError;
use crate::mcp::protocol::{
    error_codes, methods, JsonRpcId, JsonRpcRequest, JsonRpcResponse, PROTOCOL_VERSION,
};
use crate::mcp::tools::{call_tool, get_tool_definitions};

pub const SERVER_NAME: &str = "prompt-enhancer-mcp";

/// Handles one raw input line. Returns `None` when no reply is due (notifications).
pub fn handle_line(line: &str) -> Option<JsonRpcResponse> {
    let request: JsonRpcRequest = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => {
            warn!("Failed to parse request: {e}");
            return Some(JsonRpcResponse::error(
                None,
                error_codes::PARSE_ERROR,
                format!("Parse error: {e}"),
            ));
        }
    };

    if request.jsonrpc != "2.0" {
        return Some(JsonRpcResponse::error(
            request.id,
            error_codes::INVALID_REQUEST,
            "Invalid JSON-RPC version",
        ));
    }

    dispatch(request)
}

pub fn dispatch(request: JsonRpcRequest) -> Option<JsonRpcResponse> {
    debug!("Dispatching method: {}", request.method);

    // Notifications carry no id and never get a reply, not even an error.
    if request.id.is_none() {
        if request.method == methods::INITIALIZED {
            info!("Client initialized notification received");
        } else {
            debug!("Ignoring notification: {}", request.method);
        }
        return None;
    }

    let id = request.id;
    let response = match request.method.as_str() {
        methods::INITIALIZE => {
            info!("Handling initialize request");
            JsonRpcResponse::success(
                id,
                json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "capabilities": { "tools": {} },
                    "serverInfo": {
                        "name": SERVER_NAME,
                        "version": env!("CARGO_PKG_VERSION")
                    }
                }),
            )
        }
        methods::INITIALIZED => {
            info!("Client initialized notification received");
            return None;
        }
        methods::PING | methods::SHUTDOWN => JsonRpcResponse::success(id, json!({})),
        methods::TOOLS_LIST => {
            JsonRpcResponse::success(id, json!({ "tools": get_tool_definitions() }))
        }
        methods::TOOLS_CALL => handle_tools_call(id, request.params),
        other => JsonRpcResponse::error(
            id,
            error_codes::METHOD_NOT_FOUND,
            format!("Method not found: {other}"),
        ),
    };

    Some(response)
}

fn handle_tools_call(id: Option<JsonRpcId>, params: Option<Value>) -> JsonRpcResponse {
    let Some(params) = params else {
        return JsonRpcResponse::error(
            id,
            error_codes::INVALID_PARAMS,
            "Missing params for tools/call",
        );
    };

    let Some(name) = params.get("name").and_then(Value::as_str) else {
        return JsonRpcResponse::error(
            id,
            error_codes::INVALID_PARAMS,
            "Missing 'name' parameter in tools/call",
        );
    };

    let arguments = params.get("arguments").cloned().unwrap_or(Value::Null);

    match call_tool(name, &arguments) {
        Ok(output) => {
            let content: Vec<Value> = output
                .texts
                .into_iter()
                .map(|text| json!({ "type": "text", "text": text }))
                .collect();
            JsonRpcResponse::success(id, json!({ "content": content, "isError": false }))
        }
        Err(AppError::UnknownTool(tool)) => JsonRpcResponse::error(
            id,
            error_codes::TOOL_NOT_FOUND,
            format!("Unknown tool: {tool}"),
        ),
        Err(e) => {
            match &e {
                AppError::ExecutionFailed(cause) => error!("Tool {name} failed: {cause:?}"),
                _ => warn!("Tool {name} rejected input: {e}"),
            }
            JsonRpcResponse::success(
                id,
                json!({
                    "content": [{ "type": "text", "text": format!("Failed to {}: {e}", name.replace('_', " ")) }],
                    "isError": true
                }),
            )
        }
    }
}

/// Serves requests from `reader` until EOF or until `shutdown` resolves.
pub async fn serve<R, W, F>(reader: R, mut writer: W, shutdown: F) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    F: Future<Output = ()>,
{
    let mut lines = reader.lines();
    tokio::pin!(shutdown);

    info!("{SERVER_NAME} ready on stdio");

    loop {
        let line = tokio::select! {
            _ = &mut shutdown => {
                info!("Shutdown signal received");
                break;
            }
            line = lines.next_line() => line.context("Error reading stdin")?,
        };

        let Some(line) = line else {
            debug!("stdin closed");
            break;
        };

        if line.trim().is_empty() {
            continue;
        }

        let Some(response) = handle_line(&line) else {
            continue;
        };

        let mut frame = serde_json::to_string(&response).context("Failed to encode response")?;
        frame.push('\n');
        writer.write_all(frame.as_bytes()).await?;
        writer.flush().await?;
    }

    info!("Server shutting down...");
    Ok(())
}
