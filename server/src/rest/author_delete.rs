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

//! API to delete an existing author.

use crate::driver::Driver;
use crate::model::AuthorId;
use crate::rest::{MessageResponse, rules};
use axum::Json;
use axum::extract::{Path, State};
use booklib_core::rest::{RestError, RestResult, Validator};

/// DELETE handler for this API.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<String>,
) -> RestResult<Json<MessageResponse>> {
    let mut validator = Validator::default();
    let Some(id) = validator.param_positive_int(&id, &rules::PATH_ID) else {
        return Err(validator.into_error());
    };

    driver
        .delete_author(AuthorId::new(id)?)
        .await
        .map_err(|e| RestError::from_driver(e, "Failed to delete author"))?;

    Ok(Json(MessageResponse::new("Successfully deleted author")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::testutils::*;
    use axum::http::{Method, StatusCode};
    use booklib_core::rest::testutils::OneShotBuilder;

    fn route<T: ToString>(id: T) -> (Method, String) {
        (Method::DELETE, format!("/authors/{}", id.to_string()))
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        let author1 = context.create_author("Gone").await;
        let author2 = context.create_author("Kept").await;

        let response = OneShotBuilder::new(context.app(), route(author1.id()))
            .send_empty()
            .await
            .expect_json::<MessageResponse>()
            .await;
        assert_eq!(MessageResponse::new("Successfully deleted author"), response);

        assert_eq!(vec![author2], context.authors().await);
    }

    #[tokio::test]
    async fn test_not_found() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.into_app(), route(5))
            .send_empty()
            .await
            .expect_status(StatusCode::NOT_FOUND)
            .expect_error("^Author does not exist$")
            .await;
    }

    #[tokio::test]
    async fn test_twice() {
        let context = TestContext::setup().await;

        let author = context.create_author("Gone").await;

        OneShotBuilder::new(context.app(), route(author.id()))
            .send_empty()
            .await
            .expect_json::<MessageResponse>()
            .await;
        OneShotBuilder::new(context.into_app(), route(author.id()))
            .send_empty()
            .await
            .expect_status(StatusCode::NOT_FOUND)
            .expect_error("^Author does not exist$")
            .await;
    }

    #[tokio::test]
    async fn test_still_has_books() {
        let context = TestContext::setup().await;

        let author = context.create_author("Busy").await;
        let book = context.create_book("Their book", &author).await;

        OneShotBuilder::new(context.app(), route(author.id()))
            .send_empty()
            .await
            .expect_status(StatusCode::CONFLICT)
            .expect_error("^Author still has books$")
            .await;

        assert_eq!(vec![author], context.authors().await);
        assert_eq!(vec![book], context.books().await);
    }

    #[tokio::test]
    async fn test_bad_id() {
        let context = TestContext::setup().await;

        for id in ["0", "-7", "seven"] {
            let errors = OneShotBuilder::new(context.app(), route(id))
                .send_empty()
                .await
                .expect_status(StatusCode::BAD_REQUEST)
                .expect_field_errors()
                .await;
            assert_eq!(vec!["ID must be a positive integer"], errors);
        }
    }

    #[tokio::test]
    async fn test_backend_error() {
        let context = TestContext::setup().await;

        let author = context.create_author("Someone").await;
        context.break_db().await;

        OneShotBuilder::new(context.into_app(), route(author.id()))
            .send_empty()
            .await
            .expect_status(StatusCode::INTERNAL_SERVER_ERROR)
            .expect_error("^Failed to delete author$")
            .await;
    }
}
