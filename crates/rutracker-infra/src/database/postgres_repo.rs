//! PostgreSQL repository built on database-side stored routines.
//!
//! The service never touches the `rutracker_posts` table directly. Every
//! operation is one call to a routine that owns row construction and
//! uniqueness checks.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DbBackend, DbConn, DbErr, FromQueryResult, SqlErr, Statement,
    TransactionTrait, Value,
};

use rutracker_core::domain::{NewPost, Post};
use rutracker_core::error::RepoError;
use rutracker_core::ports::PostRepository;

const LIST_POSTS_SQL: &str = "SELECT * FROM get_all_posts()";
const GET_POST_SQL: &str = "SELECT * FROM get_post_by_id($1)";
const CREATE_POST_SQL: &str = "SELECT create_posts($1, $2, $3, $4, $5, $6) AS id";
const UPDATE_POST_SQL: &str = "CALL update_post($1, $2, $3, $4, $5, $6, $7)";
const DELETE_POST_SQL: &str = "CALL delete_post($1)";

/// Row shape returned by `get_all_posts()` and `get_post_by_id()`.
#[derive(Debug, FromQueryResult)]
struct PostRow {
    id: i32,
    rutracker_id: String,
    link: String,
    title: String,
    seeds: i32,
    leaches: i32,
    size: String,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: row.id,
            rutracker_id: row.rutracker_id,
            link: row.link,
            title: row.title,
            seeds: row.seeds,
            leaches: row.leaches,
            size: row.size,
        }
    }
}

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: Arc<DbConn>,
}

impl PostgresPostRepository {
    pub fn new(db: Arc<DbConn>) -> Self {
        Self { db }
    }

    fn statement(sql: &str, values: Vec<Value>) -> Statement {
        Statement::from_sql_and_values(DbBackend::Postgres, sql, values)
    }
}

/// Positional routine arguments in declaration order.
fn post_values(post: NewPost) -> Vec<Value> {
    vec![
        Value::from(post.rutracker_id),
        Value::from(post.link),
        Value::from(post.title),
        Value::from(post.seeds),
        Value::from(post.leaches),
        Value::from(post.size),
    ]
}

fn map_db_err(e: DbErr) -> RepoError {
    if let Some(SqlErr::UniqueConstraintViolation(msg)) = e.sql_err() {
        return RepoError::Constraint(msg);
    }

    match e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(e.to_string()),
        _ => RepoError::Query(e.to_string()),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list_posts(&self) -> Result<Vec<Post>, RepoError> {
        let rows = PostRow::find_by_statement(Self::statement(LIST_POSTS_SQL, Vec::new()))
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        tracing::debug!(count = rows.len(), "Listed posts");
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_post(&self, id: i32) -> Result<Option<Post>, RepoError> {
        tracing::debug!(post_id = id, "Fetching post");

        let row = PostRow::find_by_statement(Self::statement(GET_POST_SQL, vec![id.into()]))
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(row.map(Into::into))
    }

    async fn create_post(&self, post: NewPost) -> Result<i32, RepoError> {
        let rutracker_id = post.rutracker_id.clone();
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let row = txn
            .query_one(Self::statement(CREATE_POST_SQL, post_values(post)))
            .await
            .map_err(|e| match map_db_err(e) {
                RepoError::Constraint(msg) => {
                    tracing::warn!(%rutracker_id, "Create rejected by database: {}", msg);
                    RepoError::CreateFailed
                }
                other => other,
            })?;

        let id = match row {
            Some(row) => row
                .try_get::<Option<i32>>("", "id")
                .map_err(map_db_err)?,
            None => None,
        };

        // Dropping the transaction on this path rolls it back.
        let Some(id) = id else {
            tracing::warn!(%rutracker_id, "Create routine returned no id");
            return Err(RepoError::CreateFailed);
        };

        txn.commit().await.map_err(map_db_err)?;
        tracing::debug!(post_id = id, %rutracker_id, "Created post");

        Ok(id)
    }

    async fn update_post(&self, id: i32, post: NewPost) -> Result<(), RepoError> {
        let mut values = vec![Value::from(id)];
        values.extend(post_values(post));

        let txn = self.db.begin().await.map_err(map_db_err)?;
        txn.execute(Self::statement(UPDATE_POST_SQL, values))
            .await
            .map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        tracing::debug!(post_id = id, "Updated post");
        Ok(())
    }

    async fn delete_post(&self, id: i32) -> Result<(), RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;
        txn.execute(Self::statement(DELETE_POST_SQL, vec![id.into()]))
            .await
            .map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        tracing::debug!(post_id = id, "Deleted post");
        Ok(())
    }
}
