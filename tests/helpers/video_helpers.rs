use std::sync::Arc;

use cliptube_server::entities::comment_entity::{Comment, CommentDbService, CreateComment};
use cliptube_server::entities::video_entity::{CreateVideo, Video, VideoDbService};
use cliptube_server::middleware::mw_ctx::CtxState;
use fake::{faker, Fake};
use surrealdb::sql::Thing;

use crate::helpers::fixture_ctx;

#[allow(dead_code)]
pub async fn create_fake_video(
    ctx_state: &Arc<CtxState>,
    owner: &Thing,
    is_published: bool,
) -> Video {
    let ctx = fixture_ctx();
    VideoDbService {
        db: &ctx_state.db.client,
        ctx: &ctx,
    }
    .create(CreateVideo {
        owner: owner.clone(),
        title: faker::lorem::en::Sentence(2..6).fake::<String>(),
        description: Some(faker::lorem::en::Sentence(7..20).fake::<String>()),
        video_file: "videos/clip.mp4".to_string(),
        thumbnail: "thumbnails/clip.jpg".to_string(),
        duration: 120.0,
        is_published,
    })
    .await
    .expect("video fixture")
}

#[allow(dead_code)]
pub async fn create_fake_comment(
    ctx_state: &Arc<CtxState>,
    video: &Thing,
    created_by: &Thing,
) -> Comment {
    let ctx = fixture_ctx();
    CommentDbService {
        db: &ctx_state.db.client,
        ctx: &ctx,
    }
    .create(CreateComment {
        video: video.clone(),
        created_by: created_by.clone(),
        content: faker::lorem::en::Sentence(3..10).fake::<String>(),
    })
    .await
    .expect("comment fixture")
}
