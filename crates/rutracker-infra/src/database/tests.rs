use std::collections::BTreeMap;
use std::sync::Arc;

use rutracker_core::domain::NewPost;
use rutracker_core::error::RepoError;
use rutracker_core::ports::PostRepository;
use sea_orm::{
    DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult, Statement, Transaction,
    Value,
};

use crate::database::postgres_repo::PostgresPostRepository;

fn new_post() -> NewPost {
    NewPost {
        rutracker_id: "t1".to_owned(),
        link: "http://x".to_owned(),
        title: "T".to_owned(),
        seeds: 10,
        leaches: 5,
        size: "700MB".to_owned(),
    }
}

fn new_post_values() -> Vec<Value> {
    vec![
        Value::from("t1".to_owned()),
        Value::from("http://x".to_owned()),
        Value::from("T".to_owned()),
        Value::from(10),
        Value::from(5),
        Value::from("700MB".to_owned()),
    ]
}

fn post_row(id: i32, title: &str) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([
        ("id", Value::from(id)),
        ("rutracker_id", Value::from("t1".to_owned())),
        ("link", Value::from("http://x".to_owned())),
        ("title", Value::from(title.to_owned())),
        ("seeds", Value::from(10)),
        ("leaches", Value::from(5)),
        ("size", Value::from("700MB".to_owned())),
    ])
}

fn exec_result() -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected: 1,
    }
}

/// Repository plus a second handle for reading the statement log.
fn repo_with(db: DatabaseConnection) -> (PostgresPostRepository, Arc<DatabaseConnection>) {
    let db = Arc::new(db);
    (PostgresPostRepository::new(Arc::clone(&db)), db)
}

fn transaction_log(repo: PostgresPostRepository, db: Arc<DatabaseConnection>) -> Vec<Transaction> {
    drop(repo);
    Arc::try_unwrap(db)
        .ok()
        .expect("repository handle still alive")
        .into_transaction_log()
}

/// BEGIN, one statement, COMMIT.
fn committed(sql: &str, values: Vec<Value>) -> Transaction {
    Transaction::many([
        Statement::from_string(DatabaseBackend::Postgres, "BEGIN"),
        Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, values),
        Statement::from_string(DatabaseBackend::Postgres, "COMMIT"),
    ])
}

#[tokio::test]
async fn test_list_posts() {
    let (repo, db) = repo_with(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![post_row(1, "First"), post_row(2, "Second")]])
            .into_connection(),
    );

    let posts = repo.list_posts().await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].title, "First");
    assert_eq!(posts[1].id, 2);
    assert_eq!(
        transaction_log(repo, db),
        [Transaction::from_sql_and_values(
            DatabaseBackend::Postgres,
            "SELECT * FROM get_all_posts()",
            Vec::<Value>::new()
        )]
    );
}

#[tokio::test]
async fn test_list_posts_empty() {
    let (repo, _db) = repo_with(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
            .into_connection(),
    );

    assert!(repo.list_posts().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_post_by_id() {
    let (repo, db) = repo_with(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![post_row(5, "Test Post")]])
            .into_connection(),
    );

    let post = repo.get_post(5).await.unwrap().unwrap();

    assert_eq!(post.id, 5);
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.size, "700MB");
    assert_eq!(
        transaction_log(repo, db),
        [Transaction::from_sql_and_values(
            DatabaseBackend::Postgres,
            "SELECT * FROM get_post_by_id($1)",
            [5i32.into()]
        )]
    );
}

#[tokio::test]
async fn test_get_post_absent() {
    let (repo, _db) = repo_with(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
            .into_connection(),
    );

    assert!(repo.get_post(404).await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_post_commits_and_returns_id() {
    let (repo, db) = repo_with(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![BTreeMap::from([("id", Value::from(99))])]])
            .into_connection(),
    );

    let id = repo.create_post(new_post()).await.unwrap();

    assert_eq!(id, 99);
    assert_eq!(
        transaction_log(repo, db),
        [committed(
            "SELECT create_posts($1, $2, $3, $4, $5, $6) AS id",
            new_post_values()
        )]
    );
}

#[tokio::test]
async fn test_create_post_null_id_fails_without_commit() {
    let (repo, db) = repo_with(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![BTreeMap::from([("id", Value::Int(None))])]])
            .into_connection(),
    );

    let result = repo.create_post(new_post()).await;

    assert!(matches!(result, Err(RepoError::CreateFailed)));
    let log = format!("{:?}", transaction_log(repo, db));
    assert!(!log.contains("COMMIT"));
}

#[tokio::test]
async fn test_create_post_no_row_fails() {
    let (repo, _db) = repo_with(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
            .into_connection(),
    );

    let result = repo.create_post(new_post()).await;

    assert!(matches!(result, Err(RepoError::CreateFailed)));
}

#[tokio::test]
async fn test_update_post_commits_full_replacement() {
    let (repo, db) = repo_with(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec_result()])
            .into_connection(),
    );

    repo.update_post(1, new_post()).await.unwrap();

    let mut values = vec![Value::from(1)];
    values.extend(new_post_values());
    assert_eq!(
        transaction_log(repo, db),
        [committed("CALL update_post($1, $2, $3, $4, $5, $6, $7)", values)]
    );
}

#[tokio::test]
async fn test_delete_post_commits() {
    let (repo, db) = repo_with(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec_result()])
            .into_connection(),
    );

    repo.delete_post(7).await.unwrap();

    assert_eq!(
        transaction_log(repo, db),
        [committed("CALL delete_post($1)", vec![Value::from(7)])]
    );
}
