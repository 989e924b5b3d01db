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

//! API to create a new author.

use crate::driver::Driver;
use crate::model::Author;
use crate::rest::rules;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use booklib_core::rest::{JsonBody, RestError, RestResult, Validator};
use serde::Serialize;
#[cfg(test)]
use serde::Deserialize;
use serde_json::Value;

/// Message returned by the server after creating an author.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
pub(crate) struct CreateAuthorResponse {
    /// Human-readable description of the outcome.
    pub(crate) message: String,

    /// The newly-created author.
    pub(crate) author: Author,
}

/// POST handler for this API.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    JsonBody(body): JsonBody<Value>,
) -> RestResult<(StatusCode, Json<CreateAuthorResponse>)> {
    let mut validator = Validator::default();
    let Some(name) = validator.text(&body, &rules::AUTHOR_NAME) else {
        return Err(validator.into_error());
    };

    let author = driver
        .create_author(name)
        .await
        .map_err(|e| RestError::from_driver(e, "Failed to add author"))?;

    let response =
        CreateAuthorResponse { message: "Successfully created author".to_owned(), author };
    Ok((StatusCode::CREATED, Json(response)))
}
