mod helpers;

use std::future::IntoFuture;

use cliptube_server::entities::reaction_entity::{Reaction, ReactionTargetKind};
use cliptube_server::middleware::error::ErrorResponseBody;
use cliptube_server::models::web::ApiResponse;
use cliptube_server::routes::likes::ToggleLikeResponse;
use futures::future::join_all;

use crate::helpers::{count_rows, create_fake_login_test_user};
use helpers::like_helpers::toggle_like;
use helpers::tweet_helpers::create_fake_tweet;
use helpers::video_helpers::{create_fake_comment, create_fake_video};

test_with_server!(toggle_video_like_flips_state, |server, ctx_state, config| {
    let (owner, _) = create_fake_login_test_user(&ctx_state).await;
    let (_, token) = create_fake_login_test_user(&ctx_state).await;
    let video = create_fake_video(&ctx_state, owner.id.as_ref().unwrap(), true).await;
    let video_id = video.id.as_ref().unwrap().to_raw();

    // first toggle creates the reaction
    let response = toggle_like(&server, &token, "video", &video_id).await;
    response.assert_status_ok();
    let body = response.json::<ApiResponse<ToggleLikeResponse>>();
    assert!(body.data.is_liked);
    assert_eq!(count_rows(&ctx_state, "like").await, 1);

    // second toggle removes it again
    let response = toggle_like(&server, &token, "video", &video_id).await;
    response.assert_status_ok();
    assert!(!response.json::<ApiResponse<ToggleLikeResponse>>().data.is_liked);
    assert_eq!(count_rows(&ctx_state, "like").await, 0);

    // and a third one re-likes
    let response = toggle_like(&server, &token, "video", &video_id).await;
    response.assert_status_ok();
    assert!(response.json::<ApiResponse<ToggleLikeResponse>>().data.is_liked);
    assert_eq!(count_rows(&ctx_state, "like").await, 1);
});

test_with_server!(toggle_like_per_target_kind, |server, ctx_state, config| {
    let (owner, owner_token) = create_fake_login_test_user(&ctx_state).await;
    let (_, token) = create_fake_login_test_user(&ctx_state).await;
    let owner_id = owner.id.as_ref().unwrap();

    let video = create_fake_video(&ctx_state, owner_id, true).await;
    let comment = create_fake_comment(&ctx_state, video.id.as_ref().unwrap(), owner_id).await;
    let tweet = create_fake_tweet(&server, &owner_token).await;

    let video_id = video.id.as_ref().unwrap().to_raw();
    let comment_id = comment.id.as_ref().unwrap().to_raw();
    let tweet_id = tweet.id.as_ref().unwrap().to_raw();

    toggle_like(&server, &token, "video", &video_id)
        .await
        .assert_status_ok();
    toggle_like(&server, &token, "comment", &comment_id)
        .await
        .assert_status_ok();
    toggle_like(&server, &token, "tweet", &tweet_id)
        .await
        .assert_status_ok();

    let likes: Vec<Reaction> = ctx_state.db.client.select("like").await.unwrap();
    assert_eq!(likes.len(), 3);
    assert!(likes
        .iter()
        .any(|l| l.kind == ReactionTargetKind::Video));
    assert!(likes
        .iter()
        .any(|l| l.kind == ReactionTargetKind::Comment));
    assert!(likes
        .iter()
        .any(|l| l.kind == ReactionTargetKind::Tweet));

    // untoggling one kind leaves the other reactions alone
    toggle_like(&server, &token, "comment", &comment_id)
        .await
        .assert_status_ok();
    let likes: Vec<Reaction> = ctx_state.db.client.select("like").await.unwrap();
    assert_eq!(likes.len(), 2);
    assert!(!likes
        .iter()
        .any(|l| l.kind == ReactionTargetKind::Comment));
});

test_with_server!(toggle_like_rejects_bad_targets, |server, ctx_state, config| {
    let (_, owner_token) = create_fake_login_test_user(&ctx_state).await;
    let (_, token) = create_fake_login_test_user(&ctx_state).await;

    // not a record id at all
    let response = toggle_like(&server, &token, "video", "not-a-record-id").await;
    response.assert_status_bad_request();

    // a record id from a different table than the route's kind
    let tweet = create_fake_tweet(&server, &owner_token).await;
    let tweet_id = tweet.id.as_ref().unwrap().to_raw();
    let response = toggle_like(&server, &token, "video", &tweet_id).await;
    response.assert_status_bad_request();

    // well formed but missing
    let response = toggle_like(&server, &token, "video", "video:does_not_exist").await;
    response.assert_status_not_found();

    // nothing was written along the way
    assert_eq!(count_rows(&ctx_state, "like").await, 0);
});

test_with_server!(toggle_like_requires_login, |server, ctx_state, config| {
    let (owner, _) = create_fake_login_test_user(&ctx_state).await;
    let video = create_fake_video(&ctx_state, owner.id.as_ref().unwrap(), true).await;
    let video_id = video.id.as_ref().unwrap().to_raw();

    // no session cookie at all
    let response = server
        .post(&format!("/api/likes/video/{video_id}"))
        .await;
    response.assert_status_forbidden();
    let body: ErrorResponseBody = serde_json::from_str(&response.text()).unwrap();
    assert_eq!(body.status_code, 403);
    assert_eq!(body.message, "You are not logged in");

    // a cookie that does not decode
    let response = server
        .post(&format!("/api/likes/video/{video_id}"))
        .add_header("Cookie", "jwt=not-a-valid-token")
        .await;
    response.assert_status_forbidden();
    let body: ErrorResponseBody = serde_json::from_str(&response.text()).unwrap();
    assert_eq!(body.message, "The provided JWT token is not valid");

    assert_eq!(count_rows(&ctx_state, "like").await, 0);
});

test_with_server!(concurrent_toggles_converge, |server, ctx_state, config| {
    let (owner, _) = create_fake_login_test_user(&ctx_state).await;
    let (_, token) = create_fake_login_test_user(&ctx_state).await;
    let video = create_fake_video(&ctx_state, owner.id.as_ref().unwrap(), true).await;
    let video_id = video.id.as_ref().unwrap().to_raw();
    let cookie = format!("jwt={token}");

    let requests = (0..50).map(|_| {
        server
            .post(&format!("/api/likes/video/{video_id}"))
            .add_header("Cookie", cookie.as_str())
            .into_future()
    });
    let responses = join_all(requests).await;
    for response in responses {
        response.assert_status_ok();
    }

    // racing toggles may land either way but never leave duplicates
    assert!(count_rows(&ctx_state, "like").await <= 1);
});
