// Booklib
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Database abstraction to manipulate authors and books.

use crate::model::{Author, AuthorId, Book, BookId};
#[cfg(feature = "postgres")]
use booklib_core::db::postgres;
#[cfg(any(feature = "sqlite", test))]
use booklib_core::db::sqlite;
use booklib_core::db::{DbError, DbResult, Executor};
use sqlx::Row;
#[cfg(feature = "postgres")]
use sqlx::postgres::PgRow;
#[cfg(any(feature = "sqlite", test))]
use sqlx::sqlite::SqliteRow;


/// Columns to select when querying books, joined with their authors.
const BOOK_COLUMNS: &str = "
    books.id AS id, books.title AS title, books.author_id AS author_id,
    authors.name AS author_name";

/// Initializes the database schema.
pub async fn init_schema(ex: &mut Executor) -> DbResult<()> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => postgres::run_schema(ex, include_str!("postgres.sql")).await,

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => sqlite::run_schema(ex, include_str!("sqlite.sql")).await,

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Checks that a write that targeted a single row by its key affected exactly one row.
fn ensure_one_row(rows_affected: u64) -> DbResult<()> {
    match rows_affected {
        0 => Err(DbError::NotFound),
        1 => Ok(()),
        _ => Err(DbError::BackendError("Write affected more than one row".to_owned())),
    }
}

#[cfg(feature = "postgres")]
impl TryFrom<PgRow> for Author {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        let id: i64 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
        let name: String = row.try_get("name").map_err(postgres::map_sqlx_error)?;

        Ok(Author::new(AuthorId::new(id)?, name))
    }
}

#[cfg(feature = "postgres")]
impl TryFrom<PgRow> for Book {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        let id: i64 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
        let title: String = row.try_get("title").map_err(postgres::map_sqlx_error)?;
        let author_id: i64 = row.try_get("author_id").map_err(postgres::map_sqlx_error)?;
        let author_name: String = row.try_get("author_name").map_err(postgres::map_sqlx_error)?;

        let author_id = AuthorId::new(author_id)?;
        let author = Author::new(author_id, author_name);
        Ok(Book::new(BookId::new(id)?, title, author_id, author))
    }
}

#[cfg(any(feature = "sqlite", test))]
impl TryFrom<SqliteRow> for Author {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let id: i64 = row.try_get("id").map_err(sqlite::map_sqlx_error)?;
        let name: String = row.try_get("name").map_err(sqlite::map_sqlx_error)?;

        Ok(Author::new(AuthorId::new(id)?, name))
    }
}

#[cfg(any(feature = "sqlite", test))]
impl TryFrom<SqliteRow> for Book {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let id: i64 = row.try_get("id").map_err(sqlite::map_sqlx_error)?;
        let title: String = row.try_get("title").map_err(sqlite::map_sqlx_error)?;
        let author_id: i64 = row.try_get("author_id").map_err(sqlite::map_sqlx_error)?;
        let author_name: String = row.try_get("author_name").map_err(sqlite::map_sqlx_error)?;

        let author_id = AuthorId::new(author_id)?;
        let author = Author::new(author_id, author_name);
        Ok(Book::new(BookId::new(id)?, title, author_id, author))
    }
}

/// Gets all authors sorted by their identifier.
pub(crate) async fn list_authors(ex: &mut Executor) -> DbResult<Vec<Author>> {
    let query_str = "SELECT id, name FROM authors ORDER BY id";
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let rows = sqlx::query(query_str)
                .fetch_all(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            rows.into_iter().map(Author::try_from).collect()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let rows = sqlx::query(query_str)
                .fetch_all(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            rows.into_iter().map(Author::try_from).collect()
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Gets an existing author by its `id`.
pub(crate) async fn get_author(ex: &mut Executor, id: AuthorId) -> DbResult<Author> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "SELECT id, name FROM authors WHERE id = $1";
            let row = sqlx::query(query_str)
                .bind(id.as_i64())
                .fetch_one(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            Author::try_from(row)
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "SELECT id, name FROM authors WHERE id = ?";
            let row = sqlx::query(query_str)
                .bind(id.as_i64())
                .fetch_one(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            Author::try_from(row)
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Creates a new author with `name` and returns it along with its assigned identifier.
pub(crate) async fn create_author(ex: &mut Executor, name: &str) -> DbResult<Author> {
    let id = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "INSERT INTO authors (name) VALUES ($1) RETURNING id";
            let row = sqlx::query(query_str)
                .bind(name)
                .fetch_one(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            row.try_get::<i64, _>("id").map_err(postgres::map_sqlx_error)?
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "INSERT INTO authors (name) VALUES (?)";
            let done = sqlx::query(query_str)
                .bind(name)
                .execute(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            done.last_insert_rowid()
        }

        #[allow(unused)]
        _ => unreachable!(),
    };

    Ok(Author::new(AuthorId::new(id)?, name.to_owned()))
}

/// Sets the `name` of the existing author `id`.
pub(crate) async fn update_author(ex: &mut Executor, id: AuthorId, name: &str) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "UPDATE authors SET name = $1 WHERE id = $2";
            let done = sqlx::query(query_str)
                .bind(name)
                .bind(id.as_i64())
                .execute(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            done.rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "UPDATE authors SET name = ? WHERE id = ?";
            let done = sqlx::query(query_str)
                .bind(name)
                .bind(id.as_i64())
                .execute(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            done.rows_affected()
        }

        #[allow(unused)]
        _ => unreachable!(),
    };

    ensure_one_row(rows_affected)
}

/// Deletes the existing author `id`.
///
/// Fails with a data integrity error if any book still refers to the author.
pub(crate) async fn delete_author(ex: &mut Executor, id: AuthorId) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "DELETE FROM authors WHERE id = $1";
            let done = sqlx::query(query_str)
                .bind(id.as_i64())
                .execute(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            done.rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "DELETE FROM authors WHERE id = ?";
            let done = sqlx::query(query_str)
                .bind(id.as_i64())
                .execute(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            done.rows_affected()
        }

        #[allow(unused)]
        _ => unreachable!(),
    };

    ensure_one_row(rows_affected)
}

/// Counts how many books refer to the author `id`.
pub(crate) async fn count_books_by_author(ex: &mut Executor, id: AuthorId) -> DbResult<u64> {
    let count: i64 = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "SELECT COUNT(*) AS count FROM books WHERE author_id = $1";
            let row = sqlx::query(query_str)
                .bind(id.as_i64())
                .fetch_one(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            row.try_get("count").map_err(postgres::map_sqlx_error)?
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "SELECT COUNT(*) AS count FROM books WHERE author_id = ?";
            let row = sqlx::query(query_str)
                .bind(id.as_i64())
                .fetch_one(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            row.try_get("count").map_err(sqlite::map_sqlx_error)?
        }

        #[allow(unused)]
        _ => unreachable!(),
    };

    u64::try_from(count).map_err(|e| DbError::DataIntegrityError(e.to_string()))
}

/// Gets all books, along with their authors, sorted by their identifier.
pub(crate) async fn list_books(ex: &mut Executor) -> DbResult<Vec<Book>> {
    let query_str = format!(
        "SELECT {} FROM books JOIN authors ON authors.id = books.author_id ORDER BY books.id",
        BOOK_COLUMNS
    );
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let rows = sqlx::query(&query_str)
                .fetch_all(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            rows.into_iter().map(Book::try_from).collect()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let rows = sqlx::query(&query_str)
                .fetch_all(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            rows.into_iter().map(Book::try_from).collect()
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Gets an existing book, along with its author, by its `id`.
pub(crate) async fn get_book(ex: &mut Executor, id: BookId) -> DbResult<Book> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = format!(
                "SELECT {} FROM books JOIN authors ON authors.id = books.author_id
                WHERE books.id = $1",
                BOOK_COLUMNS
            );
            let row = sqlx::query(&query_str)
                .bind(id.as_i64())
                .fetch_one(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            Book::try_from(row)
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = format!(
                "SELECT {} FROM books JOIN authors ON authors.id = books.author_id
                WHERE books.id = ?",
                BOOK_COLUMNS
            );
            let row = sqlx::query(&query_str)
                .bind(id.as_i64())
                .fetch_one(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            Book::try_from(row)
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Creates a new book with `title` written by `author` and returns it along with its assigned
/// identifier.
pub(crate) async fn create_book(ex: &mut Executor, title: &str, author: Author) -> DbResult<Book> {
    let author_id = *author.id();
    let id = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "INSERT INTO books (title, author_id) VALUES ($1, $2) RETURNING id";
            let row = sqlx::query(query_str)
                .bind(title)
                .bind(author_id.as_i64())
                .fetch_one(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            row.try_get::<i64, _>("id").map_err(postgres::map_sqlx_error)?
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "INSERT INTO books (title, author_id) VALUES (?, ?)";
            let done = sqlx::query(query_str)
                .bind(title)
                .bind(author_id.as_i64())
                .execute(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            done.last_insert_rowid()
        }

        #[allow(unused)]
        _ => unreachable!(),
    };

    Ok(Book::new(BookId::new(id)?, title.to_owned(), author_id, author))
}

/// Sets the `title` and the `author_id` of the existing book `id`.
pub(crate) async fn update_book(
    ex: &mut Executor,
    id: BookId,
    title: &str,
    author_id: AuthorId,
) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "UPDATE books SET title = $1, author_id = $2 WHERE id = $3";
            let done = sqlx::query(query_str)
                .bind(title)
                .bind(author_id.as_i64())
                .bind(id.as_i64())
                .execute(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            done.rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "UPDATE books SET title = ?, author_id = ? WHERE id = ?";
            let done = sqlx::query(query_str)
                .bind(title)
                .bind(author_id.as_i64())
                .bind(id.as_i64())
                .execute(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            done.rows_affected()
        }

        #[allow(unused)]
        _ => unreachable!(),
    };

    ensure_one_row(rows_affected)
}

/// Deletes the existing book `id`.
pub(crate) async fn delete_book(ex: &mut Executor, id: BookId) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "DELETE FROM books WHERE id = $1";
            let done = sqlx::query(query_str)
                .bind(id.as_i64())
                .execute(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            done.rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "DELETE FROM books WHERE id = ?";
            let done = sqlx::query(query_str)
                .bind(id.as_i64())
                .execute(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            done.rows_affected()
        }

        #[allow(unused)]
        _ => unreachable!(),
    };

    ensure_one_row(rows_affected)
}
