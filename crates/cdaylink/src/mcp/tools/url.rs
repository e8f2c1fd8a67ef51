use super::{tool_error, tool_output, JsonRpcError};
use crate::prelude::eprintln;
use cdaylink_core::convert::convert_url;
use cdaylink_core::labels::Language;
use serde::Deserialize;

pub async fn handle_convert_url(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct ConvertUrlArgs {
        url: String,
        #[serde(default)]
        language: Option<Language>,
    }

    let args: ConvertUrlArgs =
        serde_json::from_value(arguments.unwrap_or(serde_json::Value::Null)).map_err(|e| {
            JsonRpcError {
                code: -32602,
                message: format!("Invalid arguments: {e}"),
                data: None,
            }
        })?;

    if global.verbose {
        eprintln!("Calling convert_url: url={:?}", args.url);
    }

    let language = args.language.or(global.lang).unwrap_or_default();

    match convert_url(&args.url) {
        Ok(conversion) => tool_output(&conversion),
        Err(e) => tool_error(e.message(language)),
    }
}
