//! In-memory post repository - used for tests and builds without Postgres.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use rutracker_core::domain::{NewPost, Post};
use rutracker_core::error::RepoError;
use rutracker_core::ports::PostRepository;

struct Store {
    next_id: i32,
    posts: BTreeMap<i32, Post>,
}

/// In-memory repository mirroring the stored-routine semantics.
///
/// Ids are assigned sequentially from 1 and never reused. A duplicate
/// `rutracker_id` is rejected on create, the same way the database's
/// unique constraint does, and the same holds for an update that takes
/// another post's `rutracker_id`. Update and delete on a missing id are
/// no-ops.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                next_id: 1,
                posts: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_posts(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.values().cloned().collect())
    }

    async fn get_post(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.get(&id).cloned())
    }

    async fn create_post(&self, post: NewPost) -> Result<i32, RepoError> {
        let mut store = self.store.write().await;

        if store
            .posts
            .values()
            .any(|p| p.rutracker_id == post.rutracker_id)
        {
            tracing::warn!(rutracker_id = %post.rutracker_id, "Duplicate rutracker_id rejected");
            return Err(RepoError::CreateFailed);
        }

        let id = store.next_id;
        store.next_id += 1;
        store.posts.insert(id, Post::from_parts(id, post));

        Ok(id)
    }

    async fn update_post(&self, id: i32, post: NewPost) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        if !store.posts.contains_key(&id) {
            return Ok(());
        }

        if store
            .posts
            .values()
            .any(|p| p.id != id && p.rutracker_id == post.rutracker_id)
        {
            return Err(RepoError::Constraint(format!(
                "duplicate key value violates unique constraint: rutracker_id={}",
                post.rutracker_id
            )));
        }

        store.posts.insert(id, Post::from_parts(id, post));
        Ok(())
    }

    async fn delete_post(&self, id: i32) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.posts.remove(&id);
        Ok(())
    }
}
