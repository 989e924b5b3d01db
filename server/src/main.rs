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

//! Entry point to the Booklib REST service.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use booklib_core::db::Db;
use booklib_server::db::init_schema;
use booklib_server::{ServerOptions, connect_db, serve};
use log::{error, info};
use std::process;
use tokio::net::TcpListener;

/// Initializes the schema of `db` and binds to the address configured in `opts`.
async fn prepare(db: &(dyn Db + Send + Sync), opts: &ServerOptions) -> Result<TcpListener, String> {
    let mut ex = db.ex().await.map_err(|e| format!("Cannot connect to database: {}", e))?;
    init_schema(&mut ex).await.map_err(|e| format!("Cannot initialize schema: {}", e))?;
    drop(ex);

    let listener = TcpListener::bind((opts.bind, opts.port))
        .await
        .map_err(|e| format!("Cannot bind to {}:{}: {}", opts.bind, opts.port, e))?;
    info!("Listening on {}:{}", opts.bind, opts.port);
    Ok(listener)
}

/// Gathers the configuration from the environment and serves the API until interrupted.
async fn run() -> Result<(), String> {
    let opts = ServerOptions::from_env("BOOKLIB")?;

    let db = connect_db().await?;
    let listener = match prepare(db.as_ref(), &opts).await {
        Ok(listener) => listener,
        Err(e) => {
            db.close().await;
            return Err(e);
        }
    };

    // `serve` closes the database when it returns.
    serve(listener, db).await.map_err(|e| format!("Server failed: {}", e))
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        error!("{}", e);
        process::exit(1);
    }
}
