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

//! Validation rules for the fields accepted by the REST APIs.

use booklib_core::rest::{PositiveIntRule, TextRule};

/// Minimum length of names and titles after trimming.
const MIN_TEXT_LENGTH: usize = 3;

/// Maximum length of names and titles after trimming.
const MAX_TEXT_LENGTH: usize = 250;

/// Rule for the name of an author.
pub(super) const AUTHOR_NAME: TextRule = TextRule {
    field: "name",
    not_string: "Name must be a string",
    required: "Name is required",
    // The message misstates the lower bound, but clients match on this exact text.
    length: "Name must be between 10 and 250 characters",
    min: MIN_TEXT_LENGTH,
    max: MAX_TEXT_LENGTH,
};

/// Rule for the title of a book.
pub(super) const BOOK_TITLE: TextRule = TextRule {
    field: "title",
    not_string: "Title must be a string",
    required: "Title is required",
    length: "Title must be between 3 and 250 characters",
    min: MIN_TEXT_LENGTH,
    max: MAX_TEXT_LENGTH,
};

/// Rule for the author a book refers to.
pub(super) const BOOK_AUTHOR_ID: PositiveIntRule =
    PositiveIntRule { field: "authorId", message: "Select a valid author" };

/// Rule for the identifier of the entity to modify in the request path.
pub(super) const PATH_ID: PositiveIntRule =
    PositiveIntRule { field: "id", message: "ID must be a positive integer" };

/// Rule for the identifier of the book to update in the request path.
pub(super) const PATH_BOOK_ID: PositiveIntRule =
    PositiveIntRule { field: "id", message: "Enter a valid book ID" };
