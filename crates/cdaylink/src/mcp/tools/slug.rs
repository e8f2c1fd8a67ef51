use super::{tool_error, tool_output, JsonRpcError};
use crate::prelude::eprintln;
use cdaylink_core::labels::Language;
use cdaylink_core::slug::slug_tool;
use serde::Deserialize;

pub async fn handle_slugify(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct SlugifyArgs {
        text: String,
        #[serde(default)]
        language: Option<Language>,
    }

    let args: SlugifyArgs = serde_json::from_value(arguments.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError {
            code: -32602,
            message: format!("Invalid arguments: {e}"),
            data: None,
        })?;

    if global.verbose {
        eprintln!("Calling slugify: text={:?}", args.text);
    }

    let language = args.language.or(global.lang).unwrap_or_default();

    match slug_tool(&args.text) {
        Ok(output) => tool_output(&output),
        Err(e) => tool_error(e.message(language)),
    }
}
