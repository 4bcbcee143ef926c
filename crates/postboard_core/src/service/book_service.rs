//! Book use-case service.
//!
//! Same contract as the post service, including `NotFound` for missing ids
//! on get, update and delete.

use crate::model::book::{Book, BookId};
use crate::repo::book_repo::BookRepository;
use crate::service::error::{translate_missing_row, ServiceError, ServiceResult};
use crate::service::DELETE_ACK;
use log::{debug, info, warn};

pub struct BookService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> BookService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create(
        &self,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> ServiceResult<Book> {
        let book = self.repo.create_book(&Book::new(title, author))?;
        info!(
            "event=book_create module=service status=ok id={}",
            book.id.unwrap_or_default()
        );
        Ok(book)
    }

    pub fn get_by_id(&self, id: BookId) -> ServiceResult<Book> {
        self.repo.get_book(id)?.ok_or_else(|| {
            debug!("event=book_get module=service status=not_found id={id}");
            ServiceError::NotFound
        })
    }

    pub fn get_all(&self) -> ServiceResult<Vec<Book>> {
        Ok(self.repo.list_books()?)
    }

    pub fn update(
        &self,
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> ServiceResult<Book> {
        let mut book = self.get_by_id(id)?;
        book.apply_edit(title, author);
        self.repo.update_book(&book).map_err(translate_missing_row)?;

        info!("event=book_update module=service status=ok id={id}");
        Ok(book)
    }

    pub fn delete(&self, id: BookId) -> ServiceResult<&'static str> {
        self.repo.delete_book(id).map_err(|err| {
            let err = translate_missing_row(err);
            if err.is_not_found() {
                warn!("event=book_delete module=service status=not_found id={id}");
            }
            err
        })?;

        info!("event=book_delete module=service status=ok id={id}");
        Ok(DELETE_ACK)
    }
}
