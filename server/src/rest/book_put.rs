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

//! API to modify an existing book.

use crate::driver::Driver;
use crate::model::{AuthorId, BookId};
use crate::rest::{MessageResponse, rules};
use axum::Json;
use axum::extract::{Path, State};
use booklib_core::rest::{JsonBody, RestError, RestResult, Validator};
use serde_json::Value;

/// PUT handler for this API.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<Value>,
) -> RestResult<Json<MessageResponse>> {
    let mut validator = Validator::default();
    let id = validator.param_positive_int(&id, &rules::PATH_BOOK_ID);
    let title = validator.text(&body, &rules::BOOK_TITLE);
    let author_id = validator.body_positive_int(&body, &rules::BOOK_AUTHOR_ID);
    let (Some(id), Some(title), Some(author_id)) = (id, title, author_id) else {
        return Err(validator.into_error());
    };

    driver
        .update_book(BookId::new(id)?, title, AuthorId::new(author_id)?)
        .await
        .map_err(|e| RestError::from_driver(e, "Failed to update book"))?;

    Ok(Json(MessageResponse::new("Successfully updated book")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::testutils::*;
    use axum::http::{Method, StatusCode};
    use booklib_core::rest::testutils::OneShotBuilder;
    use booklib_core::test_payload_must_be_json;
    use serde_json::json;

    fn route<T: ToString>(id: T) -> (Method, String) {
        (Method::PUT, format!("/books/{}", id.to_string()))
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        let author1 = context.create_author("First").await;
        let author2 = context.create_author("Second").await;
        let book = context.create_book("Draft", &author1).await;
        let other = context.create_book("Untouched", &author1).await;

        let response = OneShotBuilder::new(context.app(), route(book.id()))
            .send_json(json!({"title": "Final", "authorId": author2.id()}))
            .await
            .expect_json::<MessageResponse>()
            .await;
        assert_eq!(MessageResponse::new("Successfully updated book"), response);

        let books = context.books().await;
        assert_eq!(2, books.len());
        assert_eq!(book.id(), books[0].id());
        assert_eq!("Final", books[0].title());
        assert_eq!(&author2, books[0].author());
        assert_eq!(&other, &books[1]);
    }

    #[tokio::test]
    async fn test_book_not_found() {
        let context = TestContext::setup().await;

        let author = context.create_author("Someone").await;

        OneShotBuilder::new(context.into_app(), route(77))
            .send_json(json!({"title": "Missing", "authorId": author.id()}))
            .await
            .expect_status(StatusCode::NOT_FOUND)
            .expect_error("^Book does not exist$")
            .await;
    }

    #[tokio::test]
    async fn test_author_not_found() {
        let context = TestContext::setup().await;

        let author = context.create_author("Someone").await;
        let book = context.create_book("Kept", &author).await;

        OneShotBuilder::new(context.app(), route(book.id()))
            .send_json(json!({"title": "Changed", "authorId": author.id().as_i64() + 1}))
            .await
            .expect_status(StatusCode::NOT_FOUND)
            .expect_error("^Author does not exist$")
            .await;

        assert_eq!(vec![book], context.books().await);
    }

    #[tokio::test]
    async fn test_bad_id() {
        let context = TestContext::setup().await;

        for id in ["0", "-3", "abc"] {
            let errors = OneShotBuilder::new(context.app(), route(id))
                .send_json(json!({"title": "Valid title", "authorId": 1}))
                .await
                .expect_status(StatusCode::BAD_REQUEST)
                .expect_field_errors()
                .await;
            assert_eq!(vec!["Enter a valid book ID"], errors);
        }
    }

    #[tokio::test]
    async fn test_all_fields_bad_reports_all() {
        let context = TestContext::setup().await;

        let author = context.create_author("Someone").await;
        let book = context.create_book("Kept", &author).await;

        let errors = OneShotBuilder::new(context.app(), route("x"))
            .send_json(json!({"title": "ab", "authorId": "none"}))
            .await
            .expect_status(StatusCode::BAD_REQUEST)
            .expect_field_errors()
            .await;
        assert_eq!(
            vec![
                "Enter a valid book ID",
                "Title must be between 3 and 250 characters",
                "Select a valid author",
            ],
            errors
        );

        assert_eq!(vec![book], context.books().await);
    }

    #[tokio::test]
    async fn test_backend_error() {
        let context = TestContext::setup().await;

        let author = context.create_author("Someone").await;
        let book = context.create_book("Something", &author).await;
        context.break_db().await;

        OneShotBuilder::new(context.into_app(), route(book.id()))
            .send_json(json!({"title": "Something else", "authorId": author.id()}))
            .await
            .expect_status(StatusCode::INTERNAL_SERVER_ERROR)
            .expect_error("^Failed to update book$")
            .await;
    }

    test_payload_must_be_json!(TestContext::setup().await.into_app(), route(1));
}
