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

//! REST interface for the library catalog.

use crate::driver::Driver;
use axum::Router;
use serde::Serialize;
#[cfg(test)]
use serde::Deserialize;
use tower_http::cors::CorsLayer;

mod author_delete;
mod author_put;
mod authors_get;
mod authors_post;
mod book_delete;
mod book_put;
mod books_get;
mod books_post;
mod rules;
#[cfg(test)]
mod testutils;

/// Response to mutations that only report their outcome.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize, PartialEq))]
pub(crate) struct MessageResponse {
    /// Human-readable description of the outcome.
    pub(crate) message: String,
}

impl MessageResponse {
    /// Creates a new response carrying `message`.
    fn new<S: Into<String>>(message: S) -> Self {
        Self { message: message.into() }
    }
}

/// Creates the router for the application.
pub(crate) fn app(driver: Driver) -> Router {
    use axum::routing::{get, put};

    Router::new()
        .route("/authors", get(authors_get::handler).post(authors_post::handler))
        .route("/authors/:id", put(author_put::handler).delete(author_delete::handler))
        .route("/books", get(books_get::handler).post(books_post::handler))
        .route("/books/:id", put(book_put::handler).delete(book_delete::handler))
        .layer(CorsLayer::permissive())
        .with_state(driver)
}

#[cfg(test)]
mod tests {
    use super::authors_post::CreateAuthorResponse;
    use super::books_post::CreateBookResponse;
    use super::testutils::*;
    use crate::model::{Author, Book};
    use axum::http::{self, Method, StatusCode};
    use booklib_core::rest::testutils::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_e2e_catalog_flow() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.app(), (Method::POST, "/authors"))
            .send_json(json!({"name": "Al"}))
            .await
            .expect_status(StatusCode::BAD_REQUEST)
            .expect_field_errors()
            .await;

        let response = OneShotBuilder::new(context.app(), (Method::POST, "/authors"))
            .send_json(json!({"name": "Alice"}))
            .await
            .expect_status(StatusCode::CREATED)
            .expect_json::<CreateAuthorResponse>()
            .await;
        let alice = response.author;
        assert_eq!("Alice", alice.name());

        let response = OneShotBuilder::new(context.app(), (Method::POST, "/books"))
            .send_json(json!({"title": "Dune", "authorId": alice.id()}))
            .await
            .expect_status(StatusCode::CREATED)
            .expect_json::<CreateBookResponse>()
            .await;
        let book = response.book;
        assert_eq!("Alice", book.author().name());

        let missing = alice.id().as_i64() + 100;
        OneShotBuilder::new(context.app(), (Method::PUT, format!("/authors/{}", missing)))
            .send_json(json!({"name": "Alicia"}))
            .await
            .expect_status(StatusCode::NOT_FOUND)
            .expect_error("Book does not exist")
            .await;

        OneShotBuilder::new(context.app(), (Method::DELETE, format!("/books/{}", book.id())))
            .send_empty()
            .await
            .expect_json::<super::MessageResponse>()
            .await;
        OneShotBuilder::new(context.app(), (Method::DELETE, format!("/books/{}", book.id())))
            .send_empty()
            .await
            .expect_status(StatusCode::NOT_FOUND)
            .expect_error("Book does not exist")
            .await;

        let authors = OneShotBuilder::new(context.app(), (Method::GET, "/authors"))
            .send_empty()
            .await
            .expect_json::<Vec<Author>>()
            .await;
        assert_eq!(vec![alice], authors);

        let books = OneShotBuilder::new(context.into_app(), (Method::GET, "/books"))
            .send_empty()
            .await
            .expect_json::<Vec<Book>>()
            .await;
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let context = TestContext::setup().await;

        let response = OneShotBuilder::new(context.into_app(), (Method::GET, "/authors"))
            .with_header(http::header::ORIGIN, "http://localhost:5173")
            .send_empty()
            .await
            .take_response()
            .await;
        let allow_origin =
            response.headers().get(http::header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap();
        assert_eq!("*", allow_origin.to_str().unwrap());
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.into_app(), (Method::GET, "/publishers"))
            .send_empty()
            .await
            .expect_status(StatusCode::NOT_FOUND)
            .expect_empty()
            .await;
    }
}
