use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION},
    Method,
};
use serde::Serialize;

use crate::{
    decode::decode_payload, ApiResponse, AuthScheme, CallOptions, ClientOptions, Result,
    StatefetchError,
};

/// Preconfigured HTTP client performing exactly one network call per `send`.
///
/// Retry and shared-state policy live in the wrapper, not here.
#[derive(Clone, Debug)]
pub(crate) struct HttpAdapter {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAdapter {
    pub(crate) fn from_options(options: &ClientOptions) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in &options.default_headers {
            headers.insert(parse_header_name(name)?, parse_header_value(value)?);
        }
        if let Some(authorization) = auth_header_value(options.auth_scheme, &options.api_key) {
            headers.insert(AUTHORIZATION, parse_header_value(&authorization)?);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(options.timeout_ms))
            .build()
            .map_err(|err| {
                StatefetchError::Config(format!("failed to build http client: {err}"))
            })?;

        Ok(Self {
            http,
            base_url: options.base_url.clone(),
        })
    }

    pub(crate) async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        call: &CallOptions,
    ) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let url = join_url(&self.base_url, path);
        let mut request = self.http.request(method, url);
        for (name, value) in &call.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if !call.query.is_empty() {
            request = request.query(&call.query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(StatefetchError::Transport)?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await.map_err(StatefetchError::Transport)?;

        if !status.is_success() {
            return Err(StatefetchError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(ApiResponse {
            status,
            headers,
            data: decode_payload(&body),
        })
    }
}

fn parse_header_name(name: &str) -> Result<HeaderName> {
    HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| StatefetchError::Config(format!("invalid header name '{name}'")))
}

fn parse_header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| StatefetchError::Config(format!("invalid header value '{value}'")))
}

/// Builds the `Authorization` value for the configured scheme.
///
/// `Key` → `key=<api_key>`, `Bearer` → `Bearer <api_key>`, `None` → no header.
pub(crate) fn auth_header_value(scheme: AuthScheme, api_key: &str) -> Option<String> {
    match scheme {
        AuthScheme::None => None,
        AuthScheme::Key => Some(format!("key={api_key}")),
        AuthScheme::Bearer => Some(format!("Bearer {api_key}")),
    }
}

/// Joins a request path onto the configured base URL.
///
/// Absolute `http(s)://` paths pass through untouched, with exactly one `/`
/// inserted between base and relative path otherwise. An empty base leaves
/// the path as-is.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    if base.is_empty() || path.starts_with("http://") || path.starts_with("https://") {
        return path.to_owned();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
