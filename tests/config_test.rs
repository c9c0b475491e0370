use std::collections::HashMap;

use spotify_auth_helper::config::*;

fn lookup_in(vars: &HashMap<&str, &str>) -> impl Fn(&str) -> Option<String> {
    move |name| vars.get(name).map(|v| v.to_string())
}

#[test]
fn test_credentials_fall_back_to_defaults() {
    let credentials = Credentials::from_lookup(|_| None);

    assert_eq!(credentials.client_id, DEFAULT_CLIENT_ID);
    assert_eq!(credentials.client_secret, DEFAULT_CLIENT_SECRET);
    assert_eq!(credentials.redirect_uri, DEFAULT_REDIRECT_URI);
    assert!(credentials.uses_placeholders());
    assert_eq!(credentials, Credentials::default());
}

#[test]
fn test_credentials_take_environment_values_verbatim() {
    let vars = HashMap::from([
        (CLIENT_ID_VAR, "ffbee243"),
        (CLIENT_SECRET_VAR, "s3cr3t with spaces"),
        (REDIRECT_URI_VAR, "https://example.ngrok.dev/callback"),
    ]);
    let credentials = Credentials::from_lookup(lookup_in(&vars));

    assert_eq!(credentials.client_id, "ffbee243");
    assert_eq!(credentials.client_secret, "s3cr3t with spaces");
    assert_eq!(credentials.redirect_uri, "https://example.ngrok.dev/callback");
    assert!(!credentials.uses_placeholders());
}

#[test]
fn test_credentials_resolve_each_name_independently() {
    let vars = HashMap::from([(CLIENT_ID_VAR, "only-the-id"), (CLIENT_SECRET_VAR, "")]);
    let credentials = Credentials::from_lookup(lookup_in(&vars));

    assert_eq!(credentials.client_id, "only-the-id");
    // Empty counts as unset
    assert_eq!(credentials.client_secret, DEFAULT_CLIENT_SECRET);
    assert_eq!(credentials.redirect_uri, DEFAULT_REDIRECT_URI);
    assert!(credentials.uses_placeholders());
}

#[test]
fn test_credentials_debug_hides_secret() {
    let vars = HashMap::from([(CLIENT_SECRET_VAR, "dac6d5b7b5f0")]);
    let credentials = Credentials::from_lookup(lookup_in(&vars));
    let debug = format!("{:?}", credentials);

    assert!(!debug.contains("dac6d5b7b5f0"));
    assert!(debug.contains("<redacted>"));
    assert!(debug.contains(DEFAULT_CLIENT_ID));
}

#[test]
fn test_server_addr_defaults_to_port_3000() {
    assert_eq!(server_addr_from(|_| None), "127.0.0.1:3000");
}

#[test]
fn test_server_addr_uses_port() {
    let vars = HashMap::from([("PORT", "8888")]);
    assert_eq!(server_addr_from(lookup_in(&vars)), "127.0.0.1:8888");

    let vars = HashMap::from([("PORT", "not-a-port")]);
    assert_eq!(server_addr_from(lookup_in(&vars)), "127.0.0.1:3000");
}

#[test]
fn test_server_addr_prefers_server_address() {
    let vars = HashMap::from([("SERVER_ADDRESS", "0.0.0.0:9000"), ("PORT", "8888")]);
    assert_eq!(server_addr_from(lookup_in(&vars)), "0.0.0.0:9000");
}

#[test]
fn test_env_file_lives_in_helper_directory() {
    let path = env_file_path();

    assert!(path.ends_with("spotify-auth-helper/.env"));
}
