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

//! Data types for the library catalog.

use booklib_core::model::{ModelError, ModelResult};
use derive_getters::Getters;
use derive_more::Constructor;
#[cfg(test)]
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// Defines a newtype for a store-assigned identifier, which is always strictly positive.
macro_rules! positive_id [
    ( $name:ident, $what:literal ) => {
        #[doc = concat!("Identifier of ", $what, ".")]
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
        #[cfg_attr(test, derive(Deserialize))]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            #[doc = concat!("Creates a new identifier of ", $what, " from a raw `id`.")]
            pub fn new(id: i64) -> ModelResult<Self> {
                if id <= 0 {
                    return Err(ModelError(format!(
                        "Invalid {} id {}: must be positive",
                        $what, id
                    )));
                }
                Ok(Self(id))
            }

            /// Returns the raw value of the identifier.
            pub fn as_i64(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    }
];

positive_id!(AuthorId, "an author");
positive_id!(BookId, "a book");

/// A person who wrote one or more books.
#[derive(Clone, Constructor, Debug, Getters, PartialEq, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
pub struct Author {
    /// Identifier of the author.
    id: AuthorId,

    /// Display name of the author, already sanitized.
    name: String,
}

/// A book in the catalog, along with the details of its author.
#[derive(Clone, Constructor, Debug, Getters, PartialEq, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Identifier of the book.
    id: BookId,

    /// Title of the book, already sanitized.
    title: String,

    /// Identifier of the author of the book.
    author_id: AuthorId,

    /// Details of the author of the book.
    author: Author,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ids_must_be_positive() {
        assert_eq!(5, AuthorId::new(5).unwrap().as_i64());
        assert_eq!(7, BookId::new(7).unwrap().as_i64());

        let err = AuthorId::new(0).unwrap_err();
        assert!(err.0.contains("an author id 0"));
        let err = BookId::new(-3).unwrap_err();
        assert!(err.0.contains("a book id -3"));
    }

    #[test]
    fn test_book_json_shape() {
        let author = Author::new(AuthorId::new(2).unwrap(), "Frank Herbert".to_owned());
        let book =
            Book::new(BookId::new(10).unwrap(), "Dune".to_owned(), *author.id(), author.clone());
        assert_eq!(
            json!({
                "id": 10,
                "title": "Dune",
                "authorId": 2,
                "author": {"id": 2, "name": "Frank Herbert"},
            }),
            serde_json::to_value(&book).unwrap()
        );
    }
}
