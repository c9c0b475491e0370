//! Configuration management for the Spotify auth helper.
//!
//! Configuration comes from three places, highest priority first:
//! 1. Environment variables
//! 2. A `.env` file in the local data directory
//! 3. Compiled-in defaults
//!
//! The compiled-in defaults are placeholders, not working credentials. A real
//! client id and secret always have to be supplied from outside.

use std::{env, fmt, path::PathBuf};

pub const CLIENT_ID_VAR: &str = "SPOTIFY_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "SPOTIFY_CLIENT_SECRET";
pub const REDIRECT_URI_VAR: &str = "SPOTIFY_REDIRECT_URI";

pub const DEFAULT_CLIENT_ID: &str = "your-spotify-client-id";
pub const DEFAULT_CLIENT_SECRET: &str = "your-spotify-client-secret";
pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:3000/callback";

pub const DEFAULT_PORT: u16 = 3000;

/// Client credentials used for the authorization code exchange.
///
/// Loaded once at start-up and never mutated afterwards. The secret is
/// redacted from the `Debug` output so the value can be logged safely.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl Credentials {
    /// Resolves the credentials through `lookup`, falling back to the
    /// compiled-in defaults for every name that is unset or empty.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use spotify_auth_helper::config::Credentials;
    ///
    /// let vars = HashMap::from([("SPOTIFY_CLIENT_ID", "abc")]);
    /// let credentials = Credentials::from_lookup(|name| vars.get(name).map(|v| v.to_string()));
    /// assert_eq!(credentials.client_id, "abc");
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |name: &str, default: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Credentials {
            client_id: resolve(CLIENT_ID_VAR, DEFAULT_CLIENT_ID),
            client_secret: resolve(CLIENT_SECRET_VAR, DEFAULT_CLIENT_SECRET),
            redirect_uri: resolve(REDIRECT_URI_VAR, DEFAULT_REDIRECT_URI),
        }
    }

    /// Resolves the credentials from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Returns true while the client id or secret is still a placeholder.
    pub fn uses_placeholders(&self) -> bool {
        self.client_id == DEFAULT_CLIENT_ID || self.client_secret == DEFAULT_CLIENT_SECRET
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}

/// Location of the optional `.env` file.
///
/// - Linux: `~/.local/share/spotify-auth-helper/.env`
/// - macOS: `~/Library/Application Support/spotify-auth-helper/.env`
/// - Windows: `%LOCALAPPDATA%/spotify-auth-helper/.env`
pub fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotify-auth-helper/.env");
    path
}

/// Loads environment variables from the `.env` file in the local data directory.
///
/// Returns `Ok(false)` when there is no such file, since every value has a
/// fallback. Variables already present in the environment are never
/// overwritten.
///
/// # Errors
///
/// Fails when the file exists but cannot be read or parsed.
pub fn load_env() -> Result<bool, String> {
    let path = env_file_path();
    if !path.is_file() {
        return Ok(false);
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
    Ok(true)
}

/// Returns the address the callback server binds to.
///
/// `SERVER_ADDRESS` wins when set. Otherwise the server listens on
/// `127.0.0.1` and the port from `PORT`, defaulting to 3000.
pub fn server_addr() -> String {
    server_addr_from(|name| env::var(name).ok())
}

pub fn server_addr_from<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(addr) = lookup("SERVER_ADDRESS").filter(|a| !a.is_empty()) {
        return addr;
    }

    let port = lookup("PORT")
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);

    format!("127.0.0.1:{}", port)
}
