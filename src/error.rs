/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum StatefetchError {
    /// Network or request execution error from `reqwest`, including timeouts.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// Non-success HTTP status code with raw response body.
    #[error("http error {status}: {body}")]
    Http { status: u16, body: String },
    /// Invalid install-time configuration, such as an unparseable header.
    #[error("configuration error: {0}")]
    Config(String),
    /// Read of a state accessor whose backing option was disabled.
    #[error("the {option} option is disabled")]
    Disabled {
        /// Name of the disabled `ClientOptions` field.
        option: &'static str,
    },
}
