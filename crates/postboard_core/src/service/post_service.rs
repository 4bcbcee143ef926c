//! Post use-case service.
//!
//! # Responsibility
//! - Enforce the post CRUD contract on top of a `PostRepository`.
//! - Translate storage "no row" conditions into `ServiceError::NotFound`.
//!
//! # Invariants
//! - Create performs no field validation; input is stored as given.
//! - Update never changes `id` and never creates a record.
//! - Delete is not idempotent: deleting a missing id fails with `NotFound`.

use crate::model::post::{Post, PostId};
use crate::repo::post_repo::PostRepository;
use crate::service::error::{translate_missing_row, ServiceError, ServiceResult};
use crate::service::DELETE_ACK;
use log::{debug, info, warn};

/// Use-case service for blog posts.
pub struct PostService<R: PostRepository> {
    repo: R,
}

impl<R: PostRepository> PostService<R> {
    /// Creates a service over the provided storage collaborator.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a new post and returns it with its assigned id.
    pub fn create(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> ServiceResult<Post> {
        let post = self.repo.create_post(&Post::new(title, content))?;
        info!(
            "event=post_create module=service status=ok id={}",
            post.id.unwrap_or_default()
        );
        Ok(post)
    }

    /// Returns the stored post, or `NotFound` when `id` has no record.
    pub fn get_by_id(&self, id: PostId) -> ServiceResult<Post> {
        self.repo.get_post(id)?.ok_or_else(|| {
            debug!("event=post_get module=service status=not_found id={id}");
            ServiceError::NotFound
        })
    }

    /// Returns every stored post in insertion order.
    pub fn get_all(&self) -> ServiceResult<Vec<Post>> {
        Ok(self.repo.list_posts()?)
    }

    /// Overwrites title and content of an existing post.
    ///
    /// # Contract
    /// - Reads the current record, edits it, then writes it back explicitly.
    /// - Returns the record as written, with `id` unchanged.
    pub fn update(
        &self,
        id: PostId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> ServiceResult<Post> {
        let mut post = self.get_by_id(id)?;
        post.apply_edit(title, content);
        self.repo.update_post(&post).map_err(translate_missing_row)?;

        info!("event=post_update module=service status=ok id={id}");
        Ok(post)
    }

    /// Deletes a post and returns the fixed acknowledgement `"ok"`.
    pub fn delete(&self, id: PostId) -> ServiceResult<&'static str> {
        self.repo.delete_post(id).map_err(|err| {
            let err = translate_missing_row(err);
            if err.is_not_found() {
                warn!("event=post_delete module=service status=not_found id={id}");
            }
            err
        })?;

        info!("event=post_delete module=service status=ok id={id}");
        Ok(DELETE_ACK)
    }
}

#[cfg(test)]
mod tests {
    use super::PostService;
    use crate::model::post::{Post, PostId};
    use crate::repo::error::{RepoError, RepoResult};
    use crate::repo::post_repo::PostRepository;
    use std::cell::RefCell;

    /// Vec-backed storage that counts write-backs.
    #[derive(Default)]
    struct FakeRepo {
        rows: RefCell<Vec<Post>>,
        next_id: RefCell<PostId>,
        writes: RefCell<usize>,
    }

    impl PostRepository for FakeRepo {
        fn create_post(&self, post: &Post) -> RepoResult<Post> {
            let mut next_id = self.next_id.borrow_mut();
            *next_id += 1;
            let saved = Post {
                id: Some(*next_id),
                ..post.clone()
            };
            self.rows.borrow_mut().push(saved.clone());
            Ok(saved)
        }

        fn get_post(&self, id: PostId) -> RepoResult<Option<Post>> {
            Ok(self
                .rows
                .borrow()
                .iter()
                .find(|row| row.id == Some(id))
                .cloned())
        }

        fn list_posts(&self) -> RepoResult<Vec<Post>> {
            Ok(self.rows.borrow().clone())
        }

        fn update_post(&self, post: &Post) -> RepoResult<()> {
            *self.writes.borrow_mut() += 1;
            let mut rows = self.rows.borrow_mut();
            let slot = rows
                .iter_mut()
                .find(|row| row.id == post.id)
                .ok_or(RepoError::NotFound(post.id.unwrap_or_default()))?;
            *slot = post.clone();
            Ok(())
        }

        fn delete_post(&self, id: PostId) -> RepoResult<()> {
            let mut rows = self.rows.borrow_mut();
            let before = rows.len();
            rows.retain(|row| row.id != Some(id));
            if rows.len() == before {
                return Err(RepoError::NotFound(id));
            }
            Ok(())
        }
    }

    #[test]
    fn update_writes_back_explicitly() {
        let service = PostService::new(FakeRepo::default());
        let created = service.create("t", "c").unwrap();

        service.update(created.id.unwrap(), "t2", "c2").unwrap();

        assert_eq!(*service.repo.writes.borrow(), 1);
        assert_eq!(service.repo.rows.borrow()[0].title, "t2");
    }

    #[test]
    fn update_of_missing_id_skips_write_back() {
        let service = PostService::new(FakeRepo::default());

        let err = service.update(42, "t", "c").unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(*service.repo.writes.borrow(), 0);
        assert!(service.repo.rows.borrow().is_empty());
    }

    #[test]
    fn create_passes_empty_fields_through() {
        let service = PostService::new(FakeRepo::default());

        let created = service.create("", "").unwrap();

        assert!(created.id.is_some());
        assert_eq!(created.title, "");
        assert_eq!(created.content, "");
    }
}
