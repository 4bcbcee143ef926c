//! Post repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide save/find/list/delete primitives over the `posts` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `create_post` always lets SQLite assign the id; ids are never reused.
//! - `list_posts` returns rows in insertion (id) order.
//! - Zero affected rows on update/delete is reported as `RepoError::NotFound`.

use crate::model::post::{Post, PostId};
use crate::repo::error::{RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const POST_SELECT_SQL: &str = "SELECT id, title, content FROM posts";

/// Storage collaborator for posts.
pub trait PostRepository {
    /// Persists a new post and returns it with the assigned id.
    ///
    /// Any id already present on `post` is ignored.
    fn create_post(&self, post: &Post) -> RepoResult<Post>;
    fn get_post(&self, id: PostId) -> RepoResult<Option<Post>>;
    fn list_posts(&self) -> RepoResult<Vec<Post>>;
    /// Writes title/content of an already persisted post back to storage.
    fn update_post(&self, post: &Post) -> RepoResult<()>;
    fn delete_post(&self, id: PostId) -> RepoResult<()>;
}

/// SQLite-backed post repository.
///
/// Borrows the connection, so callers decide the transaction scope by
/// handing in a `rusqlite::Transaction` (which derefs to `Connection`).
pub struct SqlitePostRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePostRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PostRepository for SqlitePostRepository<'_> {
    fn create_post(&self, post: &Post) -> RepoResult<Post> {
        self.conn.execute(
            "INSERT INTO posts (title, content) VALUES (?1, ?2);",
            params![post.title.as_str(), post.content.as_str()],
        )?;

        Ok(Post {
            id: Some(self.conn.last_insert_rowid()),
            title: post.title.clone(),
            content: post.content.clone(),
        })
    }

    fn get_post(&self, id: PostId) -> RepoResult<Option<Post>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{POST_SELECT_SQL} WHERE id = ?1;"))?;
        let post = stmt.query_row([id], parse_post_row).optional()?;
        Ok(post)
    }

    fn list_posts(&self) -> RepoResult<Vec<Post>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{POST_SELECT_SQL} ORDER BY id ASC;"))?;
        let posts = stmt
            .query_map([], parse_post_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(posts)
    }

    fn update_post(&self, post: &Post) -> RepoResult<()> {
        let id = post.id.ok_or(RepoError::MissingId)?;

        let changed = self.conn.execute(
            "UPDATE posts SET title = ?1, content = ?2 WHERE id = ?3;",
            params![post.title.as_str(), post.content.as_str(), id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete_post(&self, id: PostId) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM posts WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_post_row(row: &Row<'_>) -> rusqlite::Result<Post> {
    Ok(Post {
        id: Some(row.get("id")?),
        title: row.get("title")?,
        content: row.get("content")?,
    })
}
