#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("No clipboard program found (tried {0})")]
    ClipboardUnavailable(String),

    #[error("Clipboard write failed: {0}")]
    Clipboard(String),

    #[error("Opening links is not supported on {0}")]
    UnsupportedPlatform(String),

    #[error("Nothing to {0}: the result is empty")]
    EmptyResult(&'static str),

    #[error("Could not determine home directory")]
    NoHomeDir,
}
