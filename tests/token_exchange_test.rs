use httpmock::prelude::*;
use spotify_auth_helper::{
    config::Credentials,
    spotify::{AUTHORIZE_URL, HttpTokenExchange, TOKEN_URL, TokenExchange, TokenRequest, authorize_url},
};

fn test_credentials() -> Credentials {
    Credentials {
        client_id: "client-it".to_string(),
        client_secret: "secret-it".to_string(),
        redirect_uri: "http://127.0.0.1:3000/callback".to_string(),
    }
}

#[test]
fn test_default_exchange_targets_spotify() {
    let exchange = HttpTokenExchange::new();

    assert_eq!(exchange.token_url(), TOKEN_URL);
    assert_eq!(TOKEN_URL, "https://accounts.spotify.com/api/token");
}

#[test]
fn test_token_request_debug_hides_secrets() {
    let request = TokenRequest::authorization_code("ABC123", &test_credentials());
    let debug = format!("{:?}", request);

    assert!(!debug.contains("secret-it"));
    assert!(!debug.contains("ABC123"));
    assert!(debug.contains("client-it"));
}

#[tokio::test]
async fn test_exchange_posts_form_encoded_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/token")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(
                    "grant_type=authorization_code&code=ABC123\
                     &redirect_uri=http%3A%2F%2F127.0.0.1%3A3000%2Fcallback\
                     &client_id=client-it&client_secret=secret-it",
                );
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"access_token":"AT1","refresh_token":"RT1"}"#);
        })
        .await;

    let exchange = HttpTokenExchange::with_token_url(server.url("/api/token"));
    let request = TokenRequest::authorization_code("ABC123", &test_credentials());
    let res = exchange.exchange(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body, r#"{"access_token":"AT1","refresh_token":"RT1"}"#);
}

#[tokio::test]
async fn test_exchange_returns_rejections_untouched() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/token");
            then.status(400).body("invalid_grant");
        })
        .await;

    let exchange = HttpTokenExchange::with_token_url(server.url("/api/token"));
    let request = TokenRequest::authorization_code("ABC123", &test_credentials());
    let res = exchange.exchange(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(res.status, 400);
    assert_eq!(res.body, "invalid_grant");
}

#[tokio::test]
async fn test_exchange_reports_transport_failure() {
    let exchange = HttpTokenExchange::with_token_url("http://127.0.0.1:1/api/token");
    let request = TokenRequest::authorization_code("ABC123", &test_credentials());
    let err = exchange.exchange(&request).await.unwrap_err();

    assert!(err.to_string().starts_with("could not reach the token endpoint"));
}

#[test]
fn test_authorize_url_carries_client_and_redirect() {
    let url = authorize_url(
        &test_credentials(),
        &["user-read-playback-state".to_string(), "user-read-currently-playing".to_string()],
    );

    assert!(url.starts_with(AUTHORIZE_URL));
    assert!(url.contains("client_id=client-it"));
    assert!(url.contains("response_type=code"));
    assert!(url.contains("redirect_uri=http%3A%2F%2F127.0.0.1%3A3000%2Fcallback"));
    assert!(url.contains("scope=user-read-playback-state+user-read-currently-playing"));
}

#[test]
fn test_authorize_url_without_scopes() {
    let url = authorize_url(&test_credentials(), &[]);

    assert!(!url.contains("scope="));
}
