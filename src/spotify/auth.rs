use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::{
    config::Credentials,
    spotify::{AUTHORIZE_URL, ExchangeError, TOKEN_URL},
    types::TokenEndpointResponse,
};

/// Form body of an authorization code exchange.
///
/// Holds exactly the five fields the token endpoint expects for the
/// `authorization_code` grant, in the order they are sent.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenRequest {
    pub code: String,
    pub redirect_uri: String,
    pub client_id: String,
    pub client_secret: String,
}

impl TokenRequest {
    pub fn authorization_code(code: &str, credentials: &Credentials) -> Self {
        TokenRequest {
            code: code.to_string(),
            redirect_uri: credentials.redirect_uri.clone(),
            client_id: credentials.client_id.clone(),
            client_secret: credentials.client_secret.clone(),
        }
    }

    /// Key/value pairs as they go on the wire.
    pub fn form(&self) -> [(&'static str, &str); 5] {
        [
            ("grant_type", "authorization_code"),
            ("code", &self.code),
            ("redirect_uri", &self.redirect_uri),
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
        ]
    }
}

impl std::fmt::Debug for TokenRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenRequest")
            .field("code", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Capability to perform the token exchange round trip.
///
/// The callback handler only depends on this trait, so tests can swap the
/// network for a fake. Implementations return the raw status and body and
/// leave interpretation to the caller.
#[async_trait]
pub trait TokenExchange: Send + Sync {
    async fn exchange(&self, request: &TokenRequest) -> Result<TokenEndpointResponse, ExchangeError>;
}

/// [`TokenExchange`] backed by `reqwest`.
///
/// No timeout is set: a hanging token endpoint holds the one inbound request
/// open, nothing else.
#[derive(Debug, Clone)]
pub struct HttpTokenExchange {
    client: Client,
    token_url: String,
}

impl HttpTokenExchange {
    pub fn new() -> Self {
        Self::with_token_url(TOKEN_URL)
    }

    /// Points the exchange at another endpoint, e.g. a local mock server.
    pub fn with_token_url(token_url: impl Into<String>) -> Self {
        HttpTokenExchange {
            client: Client::new(),
            token_url: token_url.into(),
        }
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }
}

impl Default for HttpTokenExchange {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenExchange for HttpTokenExchange {
    async fn exchange(&self, request: &TokenRequest) -> Result<TokenEndpointResponse, ExchangeError> {
        let res = self
            .client
            .post(&self.token_url)
            .form(&request.form())
            .send()
            .await
            .map_err(ExchangeError::Transport)?;

        let status = res.status().as_u16();
        let body = res.text().await.map_err(ExchangeError::Transport)?;

        Ok(TokenEndpointResponse { status, body })
    }
}

/// Builds the Spotify consent URL that eventually redirects to `/callback`.
///
/// # Example
///
/// ```
/// use spotify_auth_helper::{config::Credentials, spotify::authorize_url};
///
/// let url = authorize_url(&Credentials::default(), &["user-read-playback-state".into()]);
/// assert!(url.starts_with("https://accounts.spotify.com/authorize?"));
/// ```
pub fn authorize_url(credentials: &Credentials, scopes: &[String]) -> String {
    let scope = scopes.join(" ");
    let mut params = vec![
        ("client_id", credentials.client_id.as_str()),
        ("response_type", "code"),
        ("redirect_uri", credentials.redirect_uri.as_str()),
    ];
    if !scope.is_empty() {
        params.push(("scope", scope.as_str()));
    }

    match Url::parse_with_params(AUTHORIZE_URL, &params) {
        Ok(url) => url.to_string(),
        // AUTHORIZE_URL is a valid constant, parsing cannot fail
        Err(_) => AUTHORIZE_URL.to_string(),
    }
}
