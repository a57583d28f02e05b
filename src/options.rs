/// Strategy used to build the `Authorization` header from the configured key.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum AuthScheme {
    /// No `Authorization` header is added.
    #[default]
    None,
    /// `Authorization: key=<api_key>`.
    Key,
    /// `Authorization: Bearer <api_key>`.
    Bearer,
}

/// Install-time configuration, immutable once the client is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientOptions {
    /// Prefixed to every relative request path.
    pub base_url: String,
    /// Credential used by [`AuthScheme::Key`] and [`AuthScheme::Bearer`].
    pub api_key: String,
    /// How the `Authorization` header is derived from `api_key`.
    pub auth_scheme: AuthScheme,
    /// Headers merged into every request.
    pub default_headers: Vec<(String, String)>,
    /// Enables the [`last_data_pulled`](crate::StatefetchClient::last_data_pulled) accessor.
    pub store_last_data_pulled: bool,
    /// Enables the [`is_loading`](crate::StatefetchClient::is_loading) accessor.
    pub store_loading_state: bool,
    /// Per-attempt request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Additional attempts after the first failure. Zero means no retry.
    pub retry: u32,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            auth_scheme: AuthScheme::None,
            default_headers: vec![("Content-type".to_owned(), "application/json".to_owned())],
            store_last_data_pulled: true,
            store_loading_state: true,
            timeout_ms: 10_000,
            retry: 0,
        }
    }
}

/// Per-call request options.
///
/// Converts from `()` so callers without extra headers or query pairs can
/// pass the unit value directly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallOptions {
    /// Headers applied on top of the defaults for this call only.
    pub headers: Vec<(String, String)>,
    /// Query-string pairs appended to the request URL.
    pub query: Vec<(String, String)>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a per-call header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Adds a query-string pair.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }
}

impl From<()> for CallOptions {
    fn from(_: ()) -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use crate::{AuthScheme, CallOptions, ClientOptions};

    #[test]
    fn defaults_match_documented_table() {
        let options = ClientOptions::default();
        assert_eq!(options.base_url, "");
        assert_eq!(options.api_key, "");
        assert_eq!(options.auth_scheme, AuthScheme::None);
        assert_eq!(
            options.default_headers,
            vec![("Content-type".to_owned(), "application/json".to_owned())]
        );
        assert!(options.store_last_data_pulled);
        assert!(options.store_loading_state);
        assert_eq!(options.timeout_ms, 10_000);
        assert_eq!(options.retry, 0);
    }

    #[test]
    fn call_options_builder() {
        let opts = CallOptions::new()
            .header("X-Trace", "abc")
            .query("page", "2");
        assert_eq!(opts.headers, vec![("X-Trace".to_owned(), "abc".to_owned())]);
        assert_eq!(opts.query, vec![("page".to_owned(), "2".to_owned())]);
    }

    #[test]
    fn unit_converts_to_empty_options() {
        let opts: CallOptions = ().into();
        assert!(opts.headers.is_empty());
        assert!(opts.query.is_empty());
    }
}
