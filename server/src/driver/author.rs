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

//! Operations on authors.

use crate::db;
use crate::driver::{AUTHOR_NOT_FOUND, BOOK_NOT_FOUND, Driver, OrNotFound};
use crate::model::{Author, AuthorId};
use booklib_core::driver::{DriverError, DriverResult};
use log::info;

impl Driver {
    /// Gets all authors in the catalog.
    pub(crate) async fn list_authors(self) -> DriverResult<Vec<Author>> {
        let authors = db::list_authors(&mut self.db.ex().await?).await?;
        Ok(authors)
    }

    /// Creates a new author with an already-sanitized `name`.
    pub(crate) async fn create_author(self, name: String) -> DriverResult<Author> {
        let author = db::create_author(&mut self.db.ex().await?, &name).await?;
        info!("Created author {}", author.id());
        Ok(author)
    }

    /// Renames the existing author `id` to `name`.
    pub(crate) async fn update_author(self, id: AuthorId, name: String) -> DriverResult<()> {
        let mut tx = self.db.begin().await?;
        // The "book" wording is what clients have always received for this operation.
        db::get_author(tx.ex(), id).await.or_not_found(BOOK_NOT_FOUND)?;
        db::update_author(tx.ex(), id, &name).await?;
        tx.commit().await?;
        info!("Updated author {}", id);
        Ok(())
    }

    /// Deletes the existing author `id`, which must not have any books.
    pub(crate) async fn delete_author(self, id: AuthorId) -> DriverResult<()> {
        let mut tx = self.db.begin().await?;
        db::get_author(tx.ex(), id).await.or_not_found(AUTHOR_NOT_FOUND)?;
        if db::count_books_by_author(tx.ex(), id).await? > 0 {
            return Err(DriverError::InUse("Author still has books".to_owned()));
        }
        db::delete_author(tx.ex(), id).await?;
        tx.commit().await?;
        info!("Deleted author {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testutils::*;
    use booklib_core::db::DbError;

    #[tokio::test]
    async fn test_list_authors_empty() {
        let context = TestContext::setup().await;

        assert!(context.driver().list_authors().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_authors_is_idempotent() {
        let context = TestContext::setup().await;

        let author1 = context.create_author("First").await;
        let author2 = context.create_author("Second").await;

        let authors = context.driver().list_authors().await.unwrap();
        assert_eq!(vec![author1, author2], authors);
        assert_eq!(authors, context.driver().list_authors().await.unwrap());
    }

    #[tokio::test]
    async fn test_create_author_ok() {
        let context = TestContext::setup().await;

        let author = context.driver().create_author("Ursula".to_owned()).await.unwrap();
        assert_eq!("Ursula", author.name());
        assert!(author.id().as_i64() > 0);

        assert_eq!(vec![author], db::list_authors(&mut context.ex().await).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_author_ok() {
        let context = TestContext::setup().await;

        let author = context.create_author("Before").await;
        context.driver().update_author(*author.id(), "After".to_owned()).await.unwrap();

        let author = db::get_author(&mut context.ex().await, *author.id()).await.unwrap();
        assert_eq!("After", author.name());
    }

    #[tokio::test]
    async fn test_update_author_not_found() {
        let context = TestContext::setup().await;

        assert_eq!(
            DriverError::NotFound("Book does not exist".to_owned()),
            context
                .driver()
                .update_author(AuthorId::new(5).unwrap(), "Nobody".to_owned())
                .await
                .unwrap_err()
        );
    }

    #[tokio::test]
    async fn test_delete_author_ok() {
        let context = TestContext::setup().await;

        let author = context.create_author("Gone soon").await;
        context.driver().delete_author(*author.id()).await.unwrap();

        assert_eq!(
            DbError::NotFound,
            db::get_author(&mut context.ex().await, *author.id()).await.unwrap_err()
        );
    }

    #[tokio::test]
    async fn test_delete_author_not_found() {
        let context = TestContext::setup().await;

        assert_eq!(
            DriverError::NotFound("Author does not exist".to_owned()),
            context.driver().delete_author(AuthorId::new(5).unwrap()).await.unwrap_err()
        );
    }

    #[tokio::test]
    async fn test_delete_author_with_books() {
        let context = TestContext::setup().await;

        let author = context.create_author("Prolific").await;
        let book = context.create_book("Opus", &author).await;

        assert_eq!(
            DriverError::InUse("Author still has books".to_owned()),
            context.driver().delete_author(*author.id()).await.unwrap_err()
        );

        assert_eq!(vec![author], db::list_authors(&mut context.ex().await).await.unwrap());
        assert_eq!(vec![book], db::list_books(&mut context.ex().await).await.unwrap());
    }
}
