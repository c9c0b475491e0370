//! # CLI Module
//!
//! Command implementations behind the `spotify-auth-helper` binary.
//!
//! - [`serve`] starts the callback server and optionally opens the consent
//!   page in the default browser.
//! - [`authorize_url`] prints the consent URL, for setups where the browser
//!   runs on another machine than the helper (e.g. behind a tunnel).
//!
//! ## Usage
//!
//! ```bash
//! spotify-auth-helper serve --open --scope user-read-playback-state
//! spotify-auth-helper authorize-url --scope user-read-currently-playing
//! ```

mod authorize;
mod serve;

pub use authorize::authorize_url;
pub use serve::serve;
