use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
};

use crate::{
    api::Page,
    config::Credentials,
    spotify::{ExchangeError, TokenExchange, TokenRequest},
    success,
    types::{AppState, CallbackParams, TokenResponse},
    warning,
};

pub const NO_CODE_MESSAGE: &str = "No code parameter in query string.";

const MISSING_TOKEN: &str = "(not returned)";

pub async fn callback(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Page {
    let params = CallbackParams::from_pairs(pairs);
    handle_callback(&params, &state.credentials, state.exchange.as_ref()).await
}

/// Completes one authorization code exchange.
///
/// Checked in order, first match wins:
/// 1. `error` present: echo it back.
/// 2. `code` missing: say so, without touching the network.
/// 3. Exchange the code. A non-200 answer is shown verbatim.
/// 4. Render both tokens as HTML.
///
/// All of the above answer with 200 so the page is readable in the browser
/// that completed the consent screen. Only a failed round trip (transport
/// error, unparsable body) turns into a 502.
pub async fn handle_callback(
    params: &CallbackParams,
    credentials: &Credentials,
    exchange: &dyn TokenExchange,
) -> Page {
    if let Some(error) = params.error.as_deref().filter(|e| !e.is_empty()) {
        warning!("Authorization was not granted: {}", error);
        return Page::text(format!("Error from Spotify: {}", error));
    }

    let Some(code) = params.code.as_deref().filter(|c| !c.is_empty()) else {
        warning!("Callback hit without an authorization code");
        return Page::text(NO_CODE_MESSAGE);
    };

    let request = TokenRequest::authorization_code(code, credentials);
    let res = match exchange.exchange(&request).await {
        Ok(res) => res,
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            return exchange_failed(&e);
        }
    };

    if res.status != 200 {
        warning!("Token endpoint answered with status {}", res.status);
        return Page::text(format!("Token request failed: {} {}", res.status, res.body));
    }

    let tokens: TokenResponse = match serde_json::from_str(&res.body) {
        Ok(tokens) => tokens,
        Err(e) => {
            let e = ExchangeError::from(e);
            warning!("Token exchange failed: {}", e);
            return exchange_failed(&e);
        }
    };

    match render_tokens(&tokens) {
        Ok(html) => {
            success!("Tokens received");
            Page::html(html)
        }
        Err(e) => {
            warning!("Failed to render token page: {}", e);
            Page {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                ..Page::text("Tokens received, but the page could not be rendered.")
            }
        }
    }
}

fn exchange_failed(e: &ExchangeError) -> Page {
    let message = match e {
        ExchangeError::Transport(_) => {
            "Token request failed: could not reach the token endpoint."
        }
        ExchangeError::Malformed(_) => {
            "Token request failed: the token endpoint returned a malformed response."
        }
    };

    Page::bad_gateway(message)
}

#[derive(Template)]
#[template(path = "tokens.html")]
struct TokensTemplate<'a> {
    access_token: &'a str,
    refresh_token: &'a str,
}

fn render_tokens(tokens: &TokenResponse) -> askama::Result<String> {
    TokensTemplate {
        access_token: tokens.access_token.as_deref().unwrap_or(MISSING_TOKEN),
        refresh_token: tokens.refresh_token.as_deref().unwrap_or(MISSING_TOKEN),
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_tokens_escapes_markup() {
        let tokens = TokenResponse {
            access_token: Some(r#"<script>alert("x&y")</script>"#.to_string()),
            refresh_token: Some("BQD-abc_123".to_string()),
            ..Default::default()
        };
        let html = render_tokens(&tokens).unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("x&amp;y"));
        assert!(html.contains("<b>refresh_token</b>: BQD-abc_123"));
    }

    #[test]
    fn render_tokens_marks_missing_values() {
        let tokens = TokenResponse {
            access_token: Some("AT1".to_string()),
            ..Default::default()
        };
        let html = render_tokens(&tokens).unwrap();

        assert!(html.contains("<b>access_token</b>: AT1"));
        assert!(html.contains("<b>refresh_token</b>: (not returned)"));
        assert!(html.contains("SPOTIFY_REFRESH_TOKEN"));
    }
}
