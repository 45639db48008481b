//! Forwarding posts to the chat.

use actix_web::{HttpResponse, web};

use rutracker_shared::dto::SendPostResponse;

use super::posts::find_post;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /send-post/{id}
///
/// A missing post is a 404. A delivery failure is reported in the body
/// with status 200, since the post itself is fine.
pub async fn send_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = find_post(&state, id).await?;

    let response = match state.notifier.send_message(&post.notification_text()).await {
        Ok(()) => {
            tracing::info!(post_id = id, "Post forwarded to chat");
            SendPostResponse::Ok { post_id: id }
        }
        Err(e) => {
            tracing::warn!(post_id = id, error = %e, "Failed to forward post");
            SendPostResponse::Error {
                detail: e.to_string(),
            }
        }
    };

    Ok(HttpResponse::Ok().json(response))
}
