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

//! Line-oriented commands to drive the catalog screen.

use crate::library::{Library, Notifier};

/// Help text listing all commands.
pub const HELP: &str = "Commands:
  show                        Redraw the screen
  add-author <name>           Add a new author
  rename-author <id> <name>   Change the name of an author without saving it
  save-author <id>            Save the name of an author
  delete-author <id>          Delete an author
  book <author-id> <title>    Add a book, or save the book being edited
  edit-book <id>              Load a book into the form for editing
  cancel                      Stop editing a book
  delete-book <id>            Delete a book
  help                        Show this help
  quit                        Exit";

/// A parsed command.
#[derive(Debug, PartialEq)]
pub enum Command {
    /// Adds a new author with the given name.
    AddAuthor(String),

    /// Submits the book form with the given author and title.
    Book(i64, String),

    /// Leaves book edit mode.
    Cancel,

    /// Deletes the author with the given identifier.
    DeleteAuthor(i64),

    /// Deletes the book with the given identifier.
    DeleteBook(i64),

    /// Enters edit mode for the book with the given identifier.
    EditBook(i64),

    /// Prints the list of commands.
    Help,

    /// Exits the shell.
    Quit,

    /// Stages a new name for the author with the given identifier.
    RenameAuthor(i64, String),

    /// Saves the staged name of the author with the given identifier.
    SaveAuthor(i64),

    /// Redraws the screen.
    Show,
}

/// Splits `s` into its first word and the rest, with surrounding whitespace removed.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim();
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (s, ""),
    }
}

/// Parses an identifier argument of command `cmd`.
fn parse_id(cmd: &str, raw: &str) -> Result<i64, String> {
    if raw.is_empty() {
        return Err(format!("{}: missing identifier", cmd));
    }
    raw.parse::<i64>().map_err(|_| format!("{}: invalid identifier '{}'", cmd, raw))
}

/// Ensures that command `cmd` got no arguments.
fn no_args(cmd: &str, rest: &str, command: Command) -> Result<Command, String> {
    if rest.is_empty() { Ok(command) } else { Err(format!("{}: takes no arguments", cmd)) }
}

impl Command {
    /// Parses a command `line`.  Returns `None` for blank lines.
    ///
    /// Free-form text arguments are passed through untouched so that the service gets to validate
    /// them.
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let (cmd, rest) = split_word(line);
        let command = match cmd {
            "" => return Ok(None),
            "add-author" => Command::AddAuthor(rest.to_owned()),
            "book" => {
                let (id, title) = split_word(rest);
                Command::Book(parse_id(cmd, id)?, title.to_owned())
            }
            "cancel" => no_args(cmd, rest, Command::Cancel)?,
            "delete-author" => Command::DeleteAuthor(parse_id(cmd, rest)?),
            "delete-book" => Command::DeleteBook(parse_id(cmd, rest)?),
            "edit-book" => Command::EditBook(parse_id(cmd, rest)?),
            "help" => no_args(cmd, rest, Command::Help)?,
            "quit" => no_args(cmd, rest, Command::Quit)?,
            "rename-author" => {
                let (id, name) = split_word(rest);
                Command::RenameAuthor(parse_id(cmd, id)?, name.to_owned())
            }
            "save-author" => Command::SaveAuthor(parse_id(cmd, rest)?),
            "show" => no_args(cmd, rest, Command::Show)?,
            _ => return Err(format!("Unknown command '{}'; type 'help' for a list", cmd)),
        };
        Ok(Some(command))
    }
}

/// Outcome of running a command.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// Keep reading commands.
    Continue,

    /// Print the given text and keep reading commands.
    Print(String),

    /// Stop reading commands.
    Exit,
}

/// Runs `command` against `library`.
pub async fn execute<N: Notifier>(library: &mut Library<N>, command: Command) -> Outcome {
    match command {
        Command::AddAuthor(name) => {
            library.state_mut().set_author_form(name);
            library.submit_author().await;
        }

        Command::Book(author_id, title) => {
            library.state_mut().set_book_form(title, author_id);
            library.submit_book().await;
        }

        Command::Cancel => library.state_mut().cancel_editing(),

        Command::DeleteAuthor(id) => library.delete_author(id).await,

        Command::DeleteBook(id) => library.delete_book(id).await,

        Command::EditBook(id) => {
            if !library.state_mut().select_book(id) {
                return Outcome::Print(format!("No book with id {}", id));
            }
        }

        Command::Help => return Outcome::Print(HELP.to_owned()),

        Command::Quit => return Outcome::Exit,

        Command::RenameAuthor(id, name) => {
            if !library.state_mut().stage_author_name(id, name) {
                return Outcome::Print(format!("No author with id {}", id));
            }
        }

        Command::SaveAuthor(id) => library.save_author(id).await,

        Command::Show => (),
    }
    Outcome::Continue
}
