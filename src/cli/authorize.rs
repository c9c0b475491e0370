use crate::{config::Credentials, spotify};

/// Prints the consent URL for the configured client and redirect URI.
pub fn authorize_url(scopes: Vec<String>) {
    let credentials = Credentials::from_env();
    println!("{}", spotify::authorize_url(&credentials, &scopes));
}
