//! # API Module
//!
//! HTTP endpoints of the auth helper:
//!
//! - [`health`] answers `GET /` with a fixed acknowledgement.
//! - [`callback`] answers `GET /callback`, the redirect target registered with
//!   Spotify. It is a thin axum adapter over [`handle_callback`], which takes
//!   the query parameters, the credentials and a [`crate::spotify::TokenExchange`]
//!   and returns a [`Page`]. That keeps the exchange logic testable without a
//!   socket or the network.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use spotify_auth_helper::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/", get(health))
//!     .route("/callback", get(callback))
//!     .with_state(state);
//! ```

mod callback;
mod health;

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

pub use callback::{NO_CODE_MESSAGE, callback, handle_callback};
pub use health::{HEALTH_MESSAGE, health};

pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
pub const TEXT_HTML: &str = "text/html; charset=utf-8";

/// Status, content type and body of a handler answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: String,
}

impl Page {
    pub fn text(body: impl Into<String>) -> Self {
        Page {
            status: StatusCode::OK,
            content_type: TEXT_PLAIN,
            body: body.into(),
        }
    }

    pub fn html(body: impl Into<String>) -> Self {
        Page {
            status: StatusCode::OK,
            content_type: TEXT_HTML,
            body: body.into(),
        }
    }

    pub fn bad_gateway(body: impl Into<String>) -> Self {
        Page {
            status: StatusCode::BAD_GATEWAY,
            ..Self::text(body)
        }
    }

    pub fn is_html(&self) -> bool {
        self.content_type == TEXT_HTML
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, self.content_type)],
            self.body,
        )
            .into_response()
    }
}
