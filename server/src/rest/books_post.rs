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

//! API to create a new book.

use crate::driver::Driver;
use crate::model::{AuthorId, Book};
use crate::rest::rules;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use booklib_core::rest::{JsonBody, RestError, RestResult, Validator};
#[cfg(test)]
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// Message returned by the server after creating a book.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
pub(crate) struct CreateBookResponse {
    /// Human-readable description of the outcome.
    pub(crate) message: String,

    /// The newly-created book, including its author.
    pub(crate) book: Book,
}

/// POST handler for this API.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    JsonBody(body): JsonBody<Value>,
) -> RestResult<(StatusCode, Json<CreateBookResponse>)> {
    let mut validator = Validator::default();
    let title = validator.text(&body, &rules::BOOK_TITLE);
    let author_id = validator.body_positive_int(&body, &rules::BOOK_AUTHOR_ID);
    let (Some(title), Some(author_id)) = (title, author_id) else {
        return Err(validator.into_error());
    };

    let book = driver
        .create_book(title, AuthorId::new(author_id)?)
        .await
        .map_err(|e| RestError::from_driver(e, "Failed to add book"))?;

    let response = CreateBookResponse { message: "Successfully created book".to_owned(), book };
    Ok((StatusCode::CREATED, Json(response)))
}
