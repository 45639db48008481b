//! Post CRUD handlers.
//!
//! Update and delete check existence first, because the stored routines
//! silently ignore unknown ids.

use actix_web::{HttpResponse, web};

use rutracker_core::DomainError;
use rutracker_core::domain::{NewPost, Post};
use rutracker_shared::dto::{DeletedPost, PostPayload};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn into_new_post(payload: PostPayload) -> NewPost {
    NewPost {
        rutracker_id: payload.rutracker_id,
        link: payload.link,
        title: payload.title,
        seeds: payload.seeds,
        leaches: payload.leaches,
        size: payload.size,
    }
}

/// Fetch a post or fail with "Post not found".
pub(crate) async fn find_post(state: &AppState, id: i32) -> AppResult<Post> {
    let post = state
        .posts
        .get_post(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "Post",
            id,
        })?;

    Ok(post)
}

/// GET /posts/
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_posts().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /posts/
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let id = state.posts.create_post(into_new_post(body.into_inner())).await?;

    // Re-read so the response reflects what the database stored.
    let post = state
        .posts
        .get_post(id)
        .await?
        .ok_or(DomainError::CreateFailed("post"))?;

    tracing::info!(post_id = id, rutracker_id = %post.rutracker_id, "Post created");
    Ok(HttpResponse::Created().json(post))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    find_post(&state, id).await?;

    state
        .posts
        .update_post(id, into_new_post(body.into_inner()))
        .await?;

    let post = find_post(&state, id).await?;
    tracing::info!(post_id = id, "Post updated");
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    find_post(&state, id).await?;

    state.posts.delete_post(id).await?;

    tracing::info!(post_id = id, "Post deleted");
    Ok(HttpResponse::Ok().json(DeletedPost { id }))
}
