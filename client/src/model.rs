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

//! Data types exchanged with the catalog service.

use serde::{Deserialize, Serialize};

/// An author as returned by the service.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Author {
    /// Identifier of the author.
    pub id: i64,

    /// Display name of the author.
    pub name: String,
}

/// A book as returned by the service.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Identifier of the book.
    pub id: i64,

    /// Title of the book.
    pub title: String,

    /// Identifier of the author of the book.
    pub author_id: i64,

    /// Details of the author of the book as of the last time they were fetched.
    pub author: Author,
}

/// Body of the requests that create or rename an author.
#[derive(Debug, Serialize)]
pub struct AuthorPayload {
    /// Name of the author.
    pub name: String,
}

/// Body of the requests that create or modify a book.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    /// Title of the book.
    pub title: String,

    /// Identifier of the author of the book.
    pub author_id: i64,
}

/// Response of the service after creating an author.
#[derive(Debug, Deserialize)]
pub struct CreateAuthorResponse {
    /// Human-readable description of the outcome.
    pub message: String,

    /// The newly-created author.
    pub author: Author,
}

/// Response of the service after creating a book.
#[derive(Debug, Deserialize)]
pub struct CreateBookResponse {
    /// Human-readable description of the outcome.
    pub message: String,

    /// The newly-created book.
    pub book: Book,
}
