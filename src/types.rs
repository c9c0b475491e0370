use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{config::Credentials, spotify::TokenExchange};

/// Query parameters Spotify appends when redirecting back to `/callback`.
///
/// Anything else in the query string (`state`, tracking params, ...) is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub error: Option<String>,
}

impl CallbackParams {
    /// Picks `code` and `error` out of decoded query pairs.
    ///
    /// A repeated key keeps its first value.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = CallbackParams::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "code" => &mut params.code,
                "error" => &mut params.error,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

/// Parsed body of a successful token exchange.
///
/// Only the two tokens are looked at; every other field Spotify sends back
/// (`scope`, `expires_in`, `token_type`, ...) is kept in `extra` untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Raw answer of the token endpoint, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenEndpointResponse {
    pub status: u16,
    pub body: String,
}

/// Everything the request handlers need, shared read-only between requests.
#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<Credentials>,
    pub exchange: Arc<dyn TokenExchange>,
}

impl AppState {
    pub fn new(credentials: Credentials, exchange: impl TokenExchange + 'static) -> Self {
        AppState {
            credentials: Arc::new(credentials),
            exchange: Arc::new(exchange),
        }
    }
}
