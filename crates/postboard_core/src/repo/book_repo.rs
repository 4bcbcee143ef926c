//! Book repository contract and SQLite implementation.
//!
//! Mirrors the post repository over the `books` table.

use crate::model::book::{Book, BookId};
use crate::repo::error::{RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const BOOK_SELECT_SQL: &str = "SELECT id, title, author FROM books";

/// Storage collaborator for books.
pub trait BookRepository {
    fn create_book(&self, book: &Book) -> RepoResult<Book>;
    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>>;
    fn list_books(&self) -> RepoResult<Vec<Book>>;
    fn update_book(&self, book: &Book) -> RepoResult<()>;
    fn delete_book(&self, id: BookId) -> RepoResult<()>;
}

pub struct SqliteBookRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBookRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl BookRepository for SqliteBookRepository<'_> {
    fn create_book(&self, book: &Book) -> RepoResult<Book> {
        self.conn.execute(
            "INSERT INTO books (title, author) VALUES (?1, ?2);",
            params![book.title.as_str(), book.author.as_str()],
        )?;

        Ok(Book {
            id: Some(self.conn.last_insert_rowid()),
            title: book.title.clone(),
            author: book.author.clone(),
        })
    }

    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOK_SELECT_SQL} WHERE id = ?1;"))?;
        Ok(stmt.query_row([id], parse_book_row).optional()?)
    }

    fn list_books(&self) -> RepoResult<Vec<Book>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOK_SELECT_SQL} ORDER BY id ASC;"))?;
        let books = stmt
            .query_map([], parse_book_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(books)
    }

    fn update_book(&self, book: &Book) -> RepoResult<()> {
        let id = book.id.ok_or(RepoError::MissingId)?;

        let changed = self.conn.execute(
            "UPDATE books SET title = ?1, author = ?2 WHERE id = ?3;",
            params![book.title.as_str(), book.author.as_str(), id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete_book(&self, id: BookId) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM books WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_book_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: Some(row.get("id")?),
        title: row.get("title")?,
        author: row.get("author")?,
    })
}
