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

//! Operations of the catalog screen, tying the service calls to the state transitions.

use crate::api::{ApiClient, ClientError, ClientResult};
use crate::model::{
    Author, AuthorPayload, Book, BookPayload, CreateAuthorResponse, CreateBookResponse,
};
use crate::state::{Action, Added, Deleted, State, Updated, error_alert};
use log::{error, info};
use std::sync::{Arc, Mutex};

/// Mechanism to bring messages to the user's attention.
pub trait Notifier {
    /// Shows `message` to the user.
    fn alert(&self, message: &str);
}

/// Notifier that prints alerts to the console.
#[derive(Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        println!("\n>>> {}\n", message.replace('\n', "\n>>> "));
    }
}

/// Notifier that records alerts for later inspection.
#[derive(Clone, Default)]
pub struct RecorderNotifier {
    /// Alerts received so far, oldest first.
    alerts: Arc<Mutex<Vec<String>>>,
}

impl RecorderNotifier {
    /// Returns the alerts received so far and forgets them.
    pub fn take(&self) -> Vec<String> {
        match self.alerts.lock() {
            Ok(mut alerts) => alerts.drain(..).collect(),
            Err(poisoned) => poisoned.into_inner().drain(..).collect(),
        }
    }
}

impl Notifier for RecorderNotifier {
    fn alert(&self, message: &str) {
        match self.alerts.lock() {
            Ok(mut alerts) => alerts.push(message.to_owned()),
            Err(poisoned) => poisoned.into_inner().push(message.to_owned()),
        }
    }
}

/// The catalog screen: its state plus the operations that talk to the service.
pub struct Library<N> {
    /// Client to reach the service.
    api: ApiClient,

    /// Current state of the screen.
    state: State,

    /// Where to send alerts.
    notifier: N,
}

impl<N: Notifier> Library<N> {
    /// Creates a new screen with empty state that talks to the service via `api`.
    pub fn new(api: ApiClient, notifier: N) -> Self {
        Self { api, state: State::default(), notifier }
    }

    /// Returns the current state of the screen.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Returns the current state of the screen for local-only edits.
    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    /// Records a failed operation and alerts the user about it.
    fn fail(&mut self, e: ClientError, fallback: &str) {
        error!("{}: {}", fallback, e);
        let alert = error_alert(&e, fallback);
        self.notifier.alert(&alert);
        self.state.apply(Action::Error(alert));
    }

    /// Fetches the books and then the authors and replaces the known lists.
    ///
    /// Failures are logged but not alerted.
    pub async fn mount(&mut self) {
        let result: ClientResult<(Vec<Book>, Vec<Author>)> = async {
            let books = self.api.get_books().await?.into_json()?;
            let authors = self.api.get_authors().await?.into_json()?;
            Ok((books, authors))
        }
        .await;

        match result {
            Ok((books, authors)) => self.state.apply(Action::FetchOk { books, authors }),
            Err(e) => error!("Error fetching data: {}", e),
        }
    }

    /// Creates an author with the name in the author form.
    pub async fn submit_author(&mut self) {
        let name = self.state.author_form().name.clone();
        let payload = AuthorPayload { name: name.clone() };

        let result = match self.api.add_author(&payload).await {
            Ok(response) => response.into_json::<CreateAuthorResponse>(),
            Err(e) => Err(e),
        };
        match result {
            Ok(response) => {
                info!("Added author {}", response.author.id);
                self.state.apply(Action::AddOk(Added::Author(response.author)));
                self.notifier.alert(&format!("Successfully added: {}", name));
            }
            Err(e) => self.fail(e, "Failed to add author"),
        }
    }

    /// Saves the locally-staged name of author `id`.
    ///
    /// Does nothing if the author is unknown.
    pub async fn save_author(&mut self, id: i64) {
        let Some(author) = self.state.author(id) else {
            return;
        };
        let name = author.name.clone();
        let payload = AuthorPayload { name: name.clone() };

        let result = match self.api.update_author(id, &payload).await {
            Ok(response) => response.into_unit(),
            Err(e) => Err(e),
        };
        match result {
            Ok(()) => {
                self.state.apply(Action::UpdateOk(Updated::Author { id, name: name.clone() }));
                self.notifier.alert(&format!("Successfully updated: {}", name));
            }
            Err(e) => self.fail(e, "Failed to save author"),
        }
    }

    /// Deletes author `id`.
    pub async fn delete_author(&mut self, id: i64) {
        let result = match self.api.delete_author(id).await {
            Ok(response) => response.into_unit(),
            Err(e) => Err(e),
        };
        match result {
            Ok(()) => self.state.apply(Action::DeleteOk(Deleted::Author(id))),
            Err(e) => self.fail(e, "Failed to delete author"),
        }
    }

    /// Submits the book form, which edits the selected book or creates a new one.
    pub async fn submit_book(&mut self) {
        let form = self.state.book_form().clone();
        let payload = BookPayload { title: form.title.clone(), author_id: form.author_id };

        match self.state.editing() {
            Some(id) => {
                let result = match self.api.update_book(id, &payload).await {
                    Ok(response) => response.into_unit(),
                    Err(e) => Err(e),
                };
                match result {
                    Ok(()) => {
                        self.state.apply(Action::UpdateOk(Updated::Book {
                            id,
                            title: payload.title,
                            author_id: payload.author_id,
                        }));
                        self.notifier.alert(&format!("Successfully edited: {}", form.title));
                    }
                    Err(e) => self.fail(e, "Failed to edit book"),
                }
            }

            None => {
                let result = match self.api.create_book(&payload).await {
                    Ok(response) => response.into_json::<CreateBookResponse>(),
                    Err(e) => Err(e),
                };
                match result {
                    Ok(response) => {
                        info!("Added book {}", response.book.id);
                        self.state.apply(Action::AddOk(Added::Book(response.book)));
                        self.notifier.alert(&format!("Successfully added: {}", form.title));
                    }
                    Err(e) => self.fail(e, "Failed to add book"),
                }
            }
        }
    }

    /// Deletes book `id`.
    pub async fn delete_book(&mut self, id: i64) {
        let result = match self.api.delete_book(id).await {
            Ok(response) => response.into_unit(),
            Err(e) => Err(e),
        };
        match result {
            Ok(()) => self.state.apply(Action::DeleteOk(Deleted::Book(id))),
            Err(e) => self.fail(e, "Failed to delete book"),
        }
    }
}
