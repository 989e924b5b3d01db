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

//! Client-side state of the catalog screen.
//!
//! The state only changes in two ways.  Local edits, such as typing into a form, are applied
//! immediately through the methods of `State`.  Changes that need the service to confirm them are
//! expressed as an `Action` and applied with `State::apply` once the service has answered.

use crate::api::ClientError;
use crate::model::{Author, Book};

/// Contents of the form to add an author.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthorForm {
    /// Name of the author to add.
    pub name: String,
}

/// Contents of the form to add or edit a book.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookForm {
    /// Title of the book.
    pub title: String,

    /// Identifier of the selected author, or 0 if none is selected yet.
    pub author_id: i64,
}

/// An entity the service accepted.
#[derive(Debug)]
pub enum Added {
    /// A new author.
    Author(Author),

    /// A new book, along with its author.
    Book(Book),
}

/// A modification the service accepted.
#[derive(Debug)]
pub enum Updated {
    /// An author was renamed.
    Author {
        /// Identifier of the author.
        id: i64,

        /// New name of the author.
        name: String,
    },

    /// A book got a new title and author.
    Book {
        /// Identifier of the book.
        id: i64,

        /// New title of the book.
        title: String,

        /// Identifier of the new author of the book.
        author_id: i64,
    },
}

/// An entity the service deleted.
#[derive(Debug)]
pub enum Deleted {
    /// The author with the given identifier.
    Author(i64),

    /// The book with the given identifier.
    Book(i64),
}

/// Transitions triggered by the outcome of a service call.
#[derive(Debug)]
pub enum Action {
    /// The full lists were fetched.
    FetchOk {
        /// All books in the catalog.
        books: Vec<Book>,

        /// All authors in the catalog.
        authors: Vec<Author>,
    },

    /// An entity was created.
    AddOk(Added),

    /// An entity was modified.
    UpdateOk(Updated),

    /// An entity was deleted.
    DeleteOk(Deleted),

    /// A call failed and the user has to be told with the given alert text.
    Error(String),
}

/// Computes the alert text to show when an operation fails with `err`.
///
/// Validation failures list every message reported by the service.  Any other failure is
/// summarized with the per-operation `fallback` text.
pub fn error_alert(err: &ClientError, fallback: &str) -> String {
    let messages = err.field_messages();
    if messages.is_empty() {
        fallback.to_owned()
    } else {
        format!("Validation failed:\n{}", messages.join("\n"))
    }
}

/// State of the catalog screen.
#[derive(Debug, Default)]
pub struct State {
    /// All known authors, in the order the service returned them.
    authors: Vec<Author>,

    /// All known books, in the order the service returned them.
    books: Vec<Book>,

    /// Identifier of the book being edited, or none if the book form adds new books.
    editing: Option<i64>,

    /// Contents of the author form.
    author_form: AuthorForm,

    /// Contents of the book form.
    book_form: BookForm,

    /// Alert text recorded by the last failed call, cleared by any successful one.
    last_error: Option<String>,
}

impl State {
    /// Returns the known authors.
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// Returns the known books.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Returns the identifier of the book being edited, if any.
    pub fn editing(&self) -> Option<i64> {
        self.editing
    }

    /// Returns the contents of the author form.
    pub fn author_form(&self) -> &AuthorForm {
        &self.author_form
    }

    /// Returns the contents of the book form.
    pub fn book_form(&self) -> &BookForm {
        &self.book_form
    }

    /// Returns the alert text of the last failed call, if the last call failed.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Looks up a known author by `id`.
    pub fn author(&self, id: i64) -> Option<&Author> {
        self.authors.iter().find(|a| a.id == id)
    }

    /// Looks up a known book by `id`.
    pub fn book(&self, id: i64) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Replaces the contents of the author form.
    pub fn set_author_form(&mut self, name: String) {
        self.author_form = AuthorForm { name };
    }

    /// Replaces the contents of the book form.
    pub fn set_book_form(&mut self, title: String, author_id: i64) {
        self.book_form = BookForm { title, author_id };
    }

    /// Changes the name of author `id` locally, pending a save.
    ///
    /// Returns false if the author is unknown.
    pub fn stage_author_name(&mut self, id: i64, name: String) -> bool {
        match self.authors.iter_mut().find(|a| a.id == id) {
            Some(author) => {
                author.name = name;
                true
            }
            None => false,
        }
    }

    /// Switches the book form to edit book `id` and loads its details into the form.
    ///
    /// Returns false and changes nothing if the book is unknown.
    pub fn select_book(&mut self, id: i64) -> bool {
        let Some(book) = self.book(id) else {
            return false;
        };
        self.book_form = BookForm { title: book.title.clone(), author_id: book.author.id };
        self.editing = Some(id);
        true
    }

    /// Switches the book form back to adding books and clears it.
    pub fn cancel_editing(&mut self) {
        self.editing = None;
        self.book_form = BookForm::default();
    }

    /// Applies the outcome of a service call.
    pub fn apply(&mut self, action: Action) {
        if !matches!(action, Action::Error(_)) {
            self.last_error = None;
        }

        match action {
            Action::FetchOk { books, authors } => {
                self.books = books;
                self.authors = authors;
            }

            Action::AddOk(Added::Author(author)) => {
                self.authors.push(author);
                self.author_form = AuthorForm::default();
            }

            Action::AddOk(Added::Book(book)) => {
                self.books.push(book);
                self.book_form = BookForm::default();
            }

            Action::UpdateOk(Updated::Author { id, name }) => {
                for author in self.authors.iter_mut().filter(|a| a.id == id) {
                    author.name = name.clone();
                }
                for book in self.books.iter_mut().filter(|b| b.author.id == id) {
                    book.author.name = name.clone();
                }
            }

            Action::UpdateOk(Updated::Book { id, title, author_id }) => {
                // The nested author is left as is until the next fetch.
                for book in self.books.iter_mut().filter(|b| b.id == id) {
                    book.title = title.clone();
                    book.author_id = author_id;
                }
                self.cancel_editing();
            }

            Action::DeleteOk(Deleted::Author(id)) => self.authors.retain(|a| a.id != id),

            Action::DeleteOk(Deleted::Book(id)) => self.books.retain(|b| b.id != id),

            Action::Error(alert) => self.last_error = Some(alert),
        }
    }
}
