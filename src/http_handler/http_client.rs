use once_cell::sync::Lazy;
use std::sync::Arc;

/// Base URL the site generation backend listens on when run locally.
/// All relative endpoint paths are resolved against this address.
pub(crate) const DEFAULT_BASE_URL: &str = "http://localhost:5000/";

/// Generation requests are answered by a language model on the backend,
/// so responses can take well over a minute.
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(120);

/// A simple wrapper around `reqwest::Client` used to manage HTTP requests
/// with a preconfigured base URL and default settings.
///
/// This client is used for making REST API calls to the site generation
/// backend. It sets a fixed timeout and allows easy reuse of the HTTP
/// client infrastructure.
#[derive(Debug)]
pub(crate) struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base URL for the API, prepended to all endpoint paths.
    base_url: String,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` with the given base URL.
    ///
    /// # Arguments
    /// * `base_url` – The root URL for all HTTP requests
    ///   (e.g., `"http://localhost:5000/"`).
    ///
    /// # Returns
    /// A configured `HTTPClient` instance.
    pub(crate) fn new(base_url: &str) -> HTTPClient {
        HTTPClient {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap(),
            base_url: String::from(base_url),
        }
    }

    /// Returns a reference to the internal `reqwest::Client`.
    pub(super) fn client(&self) -> &reqwest::Client { &self.client }

    /// Returns the base URL that the client was initialized with.
    pub(crate) fn url(&self) -> &str { self.base_url.as_str() }

    /// Resolves an endpoint path against the base URL. Duplicate slashes
    /// are collapsed so a trailing-slash base joins a leading-slash
    /// endpoint cleanly.
    pub(super) fn join_endpoint(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

impl Default for HTTPClient {
    /// An `HTTPClient` bound to [`DEFAULT_BASE_URL`].
    fn default() -> Self { Self::new(DEFAULT_BASE_URL) }
}

/// The process-wide client handle, created on first access and bound to
/// [`DEFAULT_BASE_URL`].
static SHARED_CLIENT: Lazy<Arc<HTTPClient>> = Lazy::new(|| Arc::new(HTTPClient::default()));

/// Returns the shared client handle. Every call hands out the same
/// instance, so all callers reuse one connection pool and see one base
/// URL configuration.
pub(crate) fn shared_client() -> Arc<HTTPClient> { Arc::clone(&SHARED_CLIENT) }
