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

//! Textual rendering of the catalog screen.

use crate::state::State;

/// Placeholder shown when the book form has no author selected.
const NO_AUTHOR_SELECTED: &str = "Select a Author";

/// Renders the whole screen for `state`.
pub fn render(state: &State) -> String {
    let mut out = String::from("Book Library\n\nAuthors:\n");
    if state.authors().is_empty() {
        out.push_str("No authors found\n");
    }
    for author in state.authors() {
        out.push_str(&format!("  [{}] {}\n", author.id, author.name));
    }

    let mode = if state.editing().is_some() { "Edit" } else { "Add" };
    let form = state.book_form();
    let author = match state.author(form.author_id) {
        Some(author) => author.name.as_str(),
        None => NO_AUTHOR_SELECTED,
    };
    out.push_str(&format!(
        "\n{} a book using the form below:\n  Title: {}\n  Author: {}\n",
        mode, form.title, author
    ));

    out.push_str("\nBooks:\n");
    if state.books().is_empty() {
        out.push_str("No books found\n");
    }
    for book in state.books() {
        out.push_str(&format!(
            "  [{}] Book: {}\n      Author: {}\n",
            book.id, book.title, book.author.name
        ));
    }

    out
}
