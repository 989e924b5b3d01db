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

//! Operations on books.

use crate::db;
use crate::driver::{AUTHOR_NOT_FOUND, BOOK_NOT_FOUND, Driver, OrNotFound};
use crate::model::{AuthorId, Book, BookId};
use booklib_core::driver::DriverResult;
use log::info;

impl Driver {
    /// Gets all books in the catalog along with their authors.
    pub(crate) async fn list_books(self) -> DriverResult<Vec<Book>> {
        let books = db::list_books(&mut self.db.ex().await?).await?;
        Ok(books)
    }

    /// Creates a new book with an already-sanitized `title` for the existing author `author_id`.
    pub(crate) async fn create_book(self, title: String, author_id: AuthorId) -> DriverResult<Book> {
        let mut tx = self.db.begin().await?;
        let author = db::get_author(tx.ex(), author_id).await.or_not_found(AUTHOR_NOT_FOUND)?;
        let book = db::create_book(tx.ex(), &title, author).await?;
        tx.commit().await?;
        info!("Created book {} for author {}", book.id(), author_id);
        Ok(book)
    }

    /// Sets the `title` and the `author_id` of the existing book `id`.
    pub(crate) async fn update_book(
        self,
        id: BookId,
        title: String,
        author_id: AuthorId,
    ) -> DriverResult<()> {
        let mut tx = self.db.begin().await?;
        db::get_book(tx.ex(), id).await.or_not_found(BOOK_NOT_FOUND)?;
        db::get_author(tx.ex(), author_id).await.or_not_found(AUTHOR_NOT_FOUND)?;
        db::update_book(tx.ex(), id, &title, author_id).await?;
        tx.commit().await?;
        info!("Updated book {}", id);
        Ok(())
    }

    /// Deletes the existing book `id`.
    pub(crate) async fn delete_book(self, id: BookId) -> DriverResult<()> {
        let mut tx = self.db.begin().await?;
        db::get_book(tx.ex(), id).await.or_not_found(BOOK_NOT_FOUND)?;
        db::delete_book(tx.ex(), id).await?;
        tx.commit().await?;
        info!("Deleted book {}", id);
        Ok(())
    }
}
