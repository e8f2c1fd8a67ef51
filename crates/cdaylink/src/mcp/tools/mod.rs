mod slug;
mod url;

use serde::{Deserialize, Serialize};

// Re-export types needed by tool handlers
pub use super::{JsonRpcError, Tool};

// MCP Protocol types for tools
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: Option<ToolsCapability>,
}

#[derive(Debug, Serialize)]
pub struct ToolsCapability {}

#[derive(Debug, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ToolsList {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },
}

pub fn handle_initialize() -> Result<serde_json::Value, JsonRpcError> {
    let result = InitializeResult {
        protocol_version: "2024-11-05".to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability {}),
        },
        server_info: ServerInfo {
            name: "cdaylink".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    })
}

pub fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    let tools = vec![
        Tool {
            name: "slugify".to_string(),
            description: "Convert text into a URL-safe slug. Non-Latin scripts and accented letters are transliterated to ASCII (e.g., 'Xin chào!' becomes 'xin-chao'), then the text is lowercased, punctuation is removed and whitespace becomes single hyphens. Returns the slug and its character count.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "text": {
                        "type": "string",
                        "description": "Text to convert. Must not be blank."
                    },
                    "language": {
                        "type": "string",
                        "description": "Language of error messages (default: en)",
                        "enum": ["en", "vi"]
                    }
                },
                "required": ["text"]
            }),
        },
        Tool {
            name: "convert_url".to_string(),
            description: "Rewrite an internal CDay link of the form https://cday.kambria.io/knth-<content> or https://cday.kambria.io/cdcg-<content> into its public form https://<knth|cdcg>.cday.global/<slug>, where the whole <content> (including any slashes or query string) is slugified into one path segment. Returns the prefix, content, slug and destination URL.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "url": {
                        "type": "string",
                        "description": "Source URL, e.g. 'https://cday.kambria.io/cdcg-news'"
                    },
                    "language": {
                        "type": "string",
                        "description": "Language of error messages (default: en)",
                        "enum": ["en", "vi"]
                    }
                },
                "required": ["url"]
            }),
        },
    ];

    let result = ToolsList { tools };

    serde_json::to_value(result).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    })
}

pub async fn handle_tools_call(
    params: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError {
            code: -32602,
            message: format!("Invalid params: {e}"),
            data: None,
        })?;

    match params.name.as_str() {
        "slugify" => slug::handle_slugify(params.arguments, global).await,
        "convert_url" => url::handle_convert_url(params.arguments, global).await,
        _ => Err(JsonRpcError {
            code: -32602,
            message: format!("Unknown tool: {}", params.name),
            data: None,
        }),
    }
}

/// Wrap a serializable tool output in an MCP text result
fn tool_output<T: Serialize>(output: &T) -> Result<serde_json::Value, JsonRpcError> {
    let json_string = serde_json::to_string_pretty(output).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Serialization error: {e}"),
        data: None,
    })?;

    tool_result(json_string, None)
}

/// A transform rejected its input: report the message as a tool-level error
fn tool_error(message: &str) -> Result<serde_json::Value, JsonRpcError> {
    tool_result(message.to_string(), Some(true))
}

fn tool_result(text: String, is_error: Option<bool>) -> Result<serde_json::Value, JsonRpcError> {
    let result = CallToolResult {
        content: vec![Content::Text { text }],
        is_error,
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    })
}
