use crate::api::Page;

pub const HEALTH_MESSAGE: &str = "Spotify auth helper is running.";

pub async fn health() -> Page {
    Page::text(HEALTH_MESSAGE)
}
