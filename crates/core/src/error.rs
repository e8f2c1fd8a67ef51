use serde::Serialize;

use crate::labels::{Labels, Language};

/// Recoverable errors surfaced to the user as a single message.
///
/// The English `Display` text matches what the tools have always shown. Use
/// [`Error::message`] to get the text in the selected display language.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Error {
    /// The slug tool was submitted with blank or whitespace-only input.
    #[error("Please enter some text!")]
    EmptyInput,

    /// The URL does not match `https://cday.kambria.io/(knth|cdcg)-...`.
    #[error(
        "Invalid URL format. URL must start with https://cday.kambria.io/ followed by either \"knth-\" or \"cdcg-\""
    )]
    InvalidUrlFormat,
}

impl Error {
    /// Message for this error in the given display language
    pub fn message(&self, language: Language) -> &'static str {
        let labels = Labels::for_language(language);
        match self {
            Error::EmptyInput => labels.slug.error_message,
            Error::InvalidUrlFormat => labels.url.error_message,
        }
    }
}
