//! # Spotify Accounts Module
//!
//! Integration with the Spotify accounts service, limited to what the
//! authorization code flow needs:
//!
//! - [`authorize_url`] builds the consent URL the operator opens in a browser.
//! - [`TokenRequest`] is the form body trading an authorization code for tokens.
//! - [`TokenExchange`] is the capability that sends it. [`HttpTokenExchange`]
//!   is the `reqwest` implementation used by the binary.
//!
//! ## Flow
//!
//! ```text
//! browser → accounts.spotify.com/authorize → /callback?code=...
//!                                               ↓
//!                          POST accounts.spotify.com/api/token
//!                                               ↓
//!                                 access_token + refresh_token
//! ```
//!
//! Token refresh, revocation and storage are out of scope: the tokens are
//! shown once and then forgotten.

pub mod auth;
mod error;

pub use auth::{HttpTokenExchange, TokenExchange, TokenRequest, authorize_url};
pub use error::ExchangeError;

/// Endpoint the authorization code is exchanged at.
pub const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Endpoint the operator is sent to for consent.
pub const AUTHORIZE_URL: &str = "https://accounts.spotify.com/authorize";
