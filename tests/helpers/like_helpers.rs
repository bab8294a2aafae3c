use axum_test::{TestResponse, TestServer};

#[allow(dead_code)]
pub async fn toggle_like(
    server: &TestServer,
    token: &str,
    kind: &str,
    target_id: &str,
) -> TestResponse {
    let cookie = format!("jwt={token}");
    server
        .post(&format!("/api/likes/{kind}/{target_id}"))
        .add_header("Cookie", cookie.as_str())
        .add_header("Accept", "application/json")
        .await
}

#[allow(dead_code)]
pub async fn get_liked_videos(server: &TestServer, token: &str) -> TestResponse {
    let cookie = format!("jwt={token}");
    server
        .get("/api/likes/videos")
        .add_header("Cookie", cookie.as_str())
        .add_header("Accept", "application/json")
        .await
}
