use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::RepoError;

/// Post repository backed by database-side stored routines.
///
/// Each method is a single round trip. Mutations commit their own
/// transaction before returning.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, in whatever order the backend yields them.
    async fn list_posts(&self) -> Result<Vec<Post>, RepoError>;

    /// The post with `id`, or `None` when no row matches.
    async fn get_post(&self, id: i32) -> Result<Option<Post>, RepoError>;

    /// Insert a post and return its assigned id.
    ///
    /// Fails with [`RepoError::CreateFailed`] when the backend yields no id.
    async fn create_post(&self, post: NewPost) -> Result<i32, RepoError>;

    /// Replace every field of post `id`. A missing id is not an error here.
    async fn update_post(&self, id: i32, post: NewPost) -> Result<(), RepoError>;

    /// Delete post `id`. A missing id is not an error here.
    async fn delete_post(&self, id: i32) -> Result<(), RepoError>;
}
