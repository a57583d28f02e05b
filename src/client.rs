use std::fmt;
use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;

use crate::{
    adapter::HttpAdapter, state::SharedState, ApiResponse, CallOptions, ClientOptions, Result,
    StatefetchError,
};

/// Client wrapping the standard verbs with loading tracking, bounded retry,
/// and last-payload caching.
///
/// Cloning is cheap; all clones share one underlying HTTP client and one
/// state object, so [`is_loading`](Self::is_loading) and
/// [`last_data_pulled`](Self::last_data_pulled) observe requests issued from
/// any clone.
#[derive(Clone)]
pub struct StatefetchClient {
    adapter: HttpAdapter,
    options: Arc<ClientOptions>,
    state: Arc<SharedState>,
}

impl fmt::Debug for StatefetchClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatefetchClient")
            .field("base_url", &self.options.base_url)
            .field("api_key", &"<redacted>")
            .field("auth_scheme", &self.options.auth_scheme)
            .field("retry", &self.options.retry)
            .finish()
    }
}

impl StatefetchClient {
    /// Builds a client from install-time options.
    ///
    /// Fails with [`StatefetchError::Config`] when a default header cannot be
    /// parsed or the underlying HTTP client cannot be constructed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use statefetch::{ClientOptions, StatefetchClient};
    ///
    /// # async fn run() -> statefetch::Result<()> {
    /// let api = StatefetchClient::new(ClientOptions {
    ///     base_url: "https://api.example.com".to_owned(),
    ///     retry: 2,
    ///     ..Default::default()
    /// })?;
    ///
    /// let users = api.get("/users", ()).await?;
    /// println!("{}", users.data);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(options: ClientOptions) -> Result<Self> {
        let adapter = HttpAdapter::from_options(&options)?;
        Ok(Self {
            adapter,
            options: Arc::new(options),
            state: Arc::new(SharedState::default()),
        })
    }

    /// Issues a GET request.
    pub async fn get<O>(&self, path: &str, opts: O) -> Result<ApiResponse>
    where
        O: Into<CallOptions>,
    {
        self.dispatch::<()>(Method::GET, path, None, opts.into())
            .await
    }

    /// Issues a POST request with a JSON body.
    pub async fn post<B, O>(&self, path: &str, body: &B, opts: O) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
        O: Into<CallOptions>,
    {
        self.dispatch(Method::POST, path, Some(body), opts.into())
            .await
    }

    /// Issues a PUT request with a JSON body.
    pub async fn put<B, O>(&self, path: &str, body: &B, opts: O) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
        O: Into<CallOptions>,
    {
        self.dispatch(Method::PUT, path, Some(body), opts.into())
            .await
    }

    /// Issues a DELETE request.
    pub async fn delete<O>(&self, path: &str, opts: O) -> Result<ApiResponse>
    where
        O: Into<CallOptions>,
    {
        self.dispatch::<()>(Method::DELETE, path, None, opts.into())
            .await
    }

    /// Issues a PATCH request with a JSON body.
    pub async fn patch<B, O>(&self, path: &str, body: &B, opts: O) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
        O: Into<CallOptions>,
    {
        self.dispatch(Method::PATCH, path, Some(body), opts.into())
            .await
    }

    /// Returns the payload of the most recent successful request, if any.
    ///
    /// Fails with [`StatefetchError::Disabled`] when
    /// `store_last_data_pulled` was off at construction.
    pub fn last_data_pulled(&self) -> Result<Option<serde_json::Value>> {
        if !self.options.store_last_data_pulled {
            return Err(StatefetchError::Disabled {
                option: "store_last_data_pulled",
            });
        }
        Ok(self.state.payload())
    }

    /// Returns whether a request attempt is currently in flight.
    ///
    /// The flag is shared across all clones and all concurrent requests.
    /// Fails with [`StatefetchError::Disabled`] when `store_loading_state`
    /// was off at construction.
    pub fn is_loading(&self) -> Result<bool> {
        if !self.options.store_loading_state {
            return Err(StatefetchError::Disabled {
                option: "store_loading_state",
            });
        }
        Ok(self.state.loading())
    }

    async fn dispatch<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        call: CallOptions,
    ) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        if self.options.store_loading_state {
            self.state.set_loading(true);
        }

        let mut attempts = 0u32;
        loop {
            let outcome = self.adapter.send(method.clone(), path, body, &call).await;

            // Per-attempt cleanup: the shared flag drops after every attempt,
            // including ones that will be retried, and is not raised again
            // for later attempts. Concurrent calls share the flag, so the
            // most recent cleanup wins.
            if self.options.store_loading_state {
                self.state.set_loading(false);
            }

            match outcome {
                Ok(response) => {
                    if self.options.store_last_data_pulled {
                        self.state.store_payload(response.data.clone());
                    }
                    return Ok(response);
                }
                Err(err) if attempts < self.options.retry => {
                    attempts += 1;
                    // Failed attempts are retried immediately, without backoff.
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        "retrying {} {} after failure ({}/{}): {}",
                        method,
                        path,
                        attempts,
                        self.options.retry,
                        err
                    );
                    #[cfg(not(feature = "tracing"))]
                    let _ = err;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{AuthScheme, ClientOptions, StatefetchError};

    use super::StatefetchClient;

    #[test]
    fn debug_redacts_api_key() {
        let api = StatefetchClient::new(ClientOptions {
            api_key: "secret-key".to_owned(),
            auth_scheme: AuthScheme::Bearer,
            ..Default::default()
        })
        .expect("options must be valid");

        let debug = format!("{api:?}");
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("secret-key"));
    }

    #[test]
    fn cache_accessor_fails_when_disabled() {
        let api = StatefetchClient::new(ClientOptions {
            store_last_data_pulled: false,
            ..Default::default()
        })
        .expect("options must be valid");

        match api.last_data_pulled() {
            Err(StatefetchError::Disabled { option }) => {
                assert_eq!(option, "store_last_data_pulled");
            }
            other => panic!("expected disabled error, got {other:?}"),
        }
    }

    #[test]
    fn loading_accessor_fails_when_disabled() {
        let api = StatefetchClient::new(ClientOptions {
            store_loading_state: false,
            ..Default::default()
        })
        .expect("options must be valid");

        match api.is_loading() {
            Err(StatefetchError::Disabled { option }) => {
                assert_eq!(option, "store_loading_state");
            }
            other => panic!("expected disabled error, got {other:?}"),
        }
    }

    #[test]
    fn accessors_start_empty_and_idle() {
        let api = StatefetchClient::new(ClientOptions::default()).expect("options must be valid");
        assert_eq!(api.last_data_pulled().expect("caching enabled"), None);
        assert!(!api.is_loading().expect("tracking enabled"));
    }
}
