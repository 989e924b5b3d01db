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

//! Utilities to help testing the REST API.

use crate::db;
use crate::driver::Driver;
use crate::model::{Author, Book};
use crate::rest::app;
use axum::Router;
use booklib_core::db::{Db, Executor};
use std::sync::Arc;

/// State of a running test.
pub(crate) struct TestContext {
    app: Router,
    db: Arc<dyn Db + Send + Sync>,
}

impl TestContext {
    /// Creates the app backed by an in-memory database with the schema already initialized.
    pub(crate) async fn setup() -> Self {
        let db: Arc<dyn Db + Send + Sync> =
            Arc::from(booklib_core::db::sqlite::testutils::setup().await);
        db::init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        let app = app(Driver::new(db.clone()));
        Self { app, db }
    }

    /// Consumes the context and transforms it into the app router.
    pub(crate) fn into_app(self) -> Router {
        self.app
    }

    /// Gets a clone of the app router.
    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    async fn ex(&self) -> Executor {
        self.db.ex().await.unwrap()
    }

    /// Shuts down the database so that any further request fails with a backend error.
    pub(crate) async fn break_db(&self) {
        self.db.close().await;
    }

    /// Creates an author by directly modifying the backing database.
    pub(crate) async fn create_author(&self, name: &str) -> Author {
        db::create_author(&mut self.ex().await, name).await.unwrap()
    }

    /// Creates a book by directly modifying the backing database.
    pub(crate) async fn create_book(&self, title: &str, author: &Author) -> Book {
        db::create_book(&mut self.ex().await, title, author.clone()).await.unwrap()
    }

    /// Gets all authors by directly querying the backing database.
    pub(crate) async fn authors(&self) -> Vec<Author> {
        db::list_authors(&mut self.ex().await).await.unwrap()
    }

    /// Gets all books by directly querying the backing database.
    pub(crate) async fn books(&self) -> Vec<Book> {
        db::list_books(&mut self.ex().await).await.unwrap()
    }
}
