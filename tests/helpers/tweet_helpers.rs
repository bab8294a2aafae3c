use axum_test::{TestResponse, TestServer};
use cliptube_server::entities::tweet_entity::Tweet;
use cliptube_server::models::web::ApiResponse;
use fake::{faker, Fake};
use serde_json::json;

#[allow(dead_code)]
pub async fn create_tweet(server: &TestServer, token: &str, content: &str) -> TestResponse {
    let cookie = format!("jwt={token}");
    server
        .post("/api/tweets")
        .add_header("Cookie", cookie.as_str())
        .json(&json!({ "content": content }))
        .await
}

#[allow(dead_code)]
pub async fn create_fake_tweet(server: &TestServer, token: &str) -> Tweet {
    let content = faker::lorem::en::Sentence(3..12).fake::<String>();
    let response = create_tweet(server, token, &content).await;
    response.assert_status_ok();
    response.json::<ApiResponse<Tweet>>().data
}

#[allow(dead_code)]
pub async fn update_tweet(
    server: &TestServer,
    token: &str,
    tweet_id: &str,
    content: &str,
) -> TestResponse {
    let cookie = format!("jwt={token}");
    server
        .patch(&format!("/api/tweets/{tweet_id}"))
        .add_header("Cookie", cookie.as_str())
        .json(&json!({ "content": content }))
        .await
}

#[allow(dead_code)]
pub async fn delete_tweet(server: &TestServer, token: &str, tweet_id: &str) -> TestResponse {
    let cookie = format!("jwt={token}");
    server
        .delete(&format!("/api/tweets/{tweet_id}"))
        .add_header("Cookie", cookie.as_str())
        .await
}

#[allow(dead_code)]
pub async fn get_user_tweets(server: &TestServer, token: &str, user_id: &str) -> TestResponse {
    let cookie = format!("jwt={token}");
    server
        .get(&format!("/api/users/{user_id}/tweets"))
        .add_header("Cookie", cookie.as_str())
        .add_header("Accept", "application/json")
        .await
}
