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

//! Entry point to the Booklib terminal client.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use booklib_client::api::ApiClient;
use booklib_client::library::{ConsoleNotifier, Library};
use booklib_client::render::render;
use booklib_client::shell::{Command, Outcome, execute};
use log::error;
use std::process;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Runs the interactive loop until the user quits or the input ends.
async fn run() -> Result<(), String> {
    let api = ApiClient::from_env("BOOKLIB")?;
    let mut library = Library::new(api, ConsoleNotifier);
    library.mount().await;

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let screen = format!("{}\n> ", render(library.state()));
        stdout.write_all(screen.as_bytes()).await.map_err(|e| e.to_string())?;
        stdout.flush().await.map_err(|e| e.to_string())?;

        let Some(line) = lines.next_line().await.map_err(|e| e.to_string())? else {
            return Ok(());
        };

        match Command::parse(&line) {
            Ok(None) => (),
            Ok(Some(command)) => match execute(&mut library, command).await {
                Outcome::Continue => (),
                Outcome::Print(text) => println!("{}\n", text),
                Outcome::Exit => return Ok(()),
            },
            Err(e) => println!("{}\n", e),
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        error!("{}", e);
        process::exit(1);
    }
}
