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

//! API to list all authors.

use crate::driver::Driver;
use crate::model::Author;
use axum::Json;
use axum::extract::State;
use booklib_core::rest::{RestError, RestResult};

/// GET handler for this API.
pub(crate) async fn handler(State(driver): State<Driver>) -> RestResult<Json<Vec<Author>>> {
    let authors = driver
        .list_authors()
        .await
        .map_err(|e| RestError::from_driver(e, "Failed to fetch authors"))?;
    Ok(Json(authors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::testutils::*;
    use axum::http::{Method, StatusCode};
    use booklib_core::rest::testutils::OneShotBuilder;

    fn route() -> (Method, String) {
        (Method::GET, "/authors".to_owned())
    }

    #[tokio::test]
    async fn test_empty() {
        let context = TestContext::setup().await;

        let response = OneShotBuilder::new(context.into_app(), route())
            .send_empty()
            .await
            .expect_json::<Vec<Author>>()
            .await;
        assert!(response.is_empty());
    }

    #[tokio::test]
    async fn test_some() {
        let context = TestContext::setup().await;

        let author1 = context.create_author("First").await;
        let author2 = context.create_author("Second").await;

        let response = OneShotBuilder::new(context.app(), route())
            .send_empty()
            .await
            .expect_json::<Vec<Author>>()
            .await;
        assert_eq!(vec![author1, author2], response);

        let again = OneShotBuilder::new(context.into_app(), route())
            .send_empty()
            .await
            .expect_json::<Vec<Author>>()
            .await;
        assert_eq!(response, again);
    }

    #[tokio::test]
    async fn test_json_shape() {
        let context = TestContext::setup().await;

        let author = context.create_author("Octavia").await;

        let response = OneShotBuilder::new(context.into_app(), route())
            .send_empty()
            .await
            .expect_json::<serde_json::Value>()
            .await;
        assert_eq!(
            serde_json::json!([{"id": author.id().as_i64(), "name": "Octavia"}]),
            response
        );
    }

    #[tokio::test]
    async fn test_backend_error() {
        let context = TestContext::setup().await;

        context.break_db().await;

        OneShotBuilder::new(context.into_app(), route())
            .send_empty()
            .await
            .expect_status(StatusCode::INTERNAL_SERVER_ERROR)
            .expect_error("^Failed to fetch authors$")
            .await;
    }
}
