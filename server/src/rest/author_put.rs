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

//! API to rename an existing author.

use crate::driver::Driver;
use crate::model::AuthorId;
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
    let id = validator.param_positive_int(&id, &rules::PATH_ID);
    let name = validator.text(&body, &rules::AUTHOR_NAME);
    let (Some(id), Some(name)) = (id, name) else {
        return Err(validator.into_error());
    };

    driver
        .update_author(AuthorId::new(id)?, name)
        .await
        .map_err(|e| RestError::from_driver(e, "Failed to update author"))?;

    Ok(Json(MessageResponse::new("Successfully updated author")))
}
