use crate::{
    config::{self, Credentials},
    error, info,
    server::start_api_server,
    spotify::{self, HttpTokenExchange},
    types::AppState,
    warning,
};

/// Runs the callback server until the process is stopped.
///
/// Credentials are resolved once here and handed to the handlers. With
/// `open_browser` set, the consent URL is opened so the flow can be completed
/// right away.
pub async fn serve(address: Option<String>, open_browser: bool, scopes: Vec<String>) {
    let credentials = Credentials::from_env();
    if credentials.uses_placeholders() {
        warning!(
            "{} / {} are not set, the token exchange will be rejected by Spotify",
            config::CLIENT_ID_VAR,
            config::CLIENT_SECRET_VAR
        );
    }
    info!("Redirect URI: {}", credentials.redirect_uri);

    let auth_url = spotify::authorize_url(&credentials, &scopes);
    let addr = address.unwrap_or_else(config::server_addr);
    let state = AppState::new(credentials, HttpTokenExchange::new());

    let server = tokio::spawn(async move { start_api_server(&addr, state).await });

    if open_browser {
        if webbrowser::open(&auth_url).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                auth_url
            )
        }
    } else {
        info!("Authorize at: {}", auth_url);
    }

    match server.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!("Server stopped: {}", e),
        Err(e) => error!("Server task failed: {}", e),
    }
}
