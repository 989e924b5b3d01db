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

//! REST service to manage a catalog of authors and the books they wrote.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use axum::Router;
use booklib_core::db::Db;
#[cfg(feature = "postgres")]
use booklib_core::db::postgres::{PostgresDb, PostgresOptions};
use booklib_core::env::get_optional_var;
use log::{info, warn};
use std::io;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use tokio::net::TcpListener;

pub mod db;
mod driver;
use driver::Driver;
pub(crate) mod model;
mod rest;

/// Port to listen on when none is configured.
const DEFAULT_PORT: u16 = 3000;

/// Configuration of the network endpoint of the server.
#[derive(Debug, PartialEq)]
pub struct ServerOptions {
    /// Address to bind to.
    pub bind: IpAddr,

    /// Port to listen on.
    pub port: u16,
}

impl ServerOptions {
    /// Initializes a set of options from environment variables whose name is prefixed with the
    /// given `prefix`.
    ///
    /// This will use variables such as `<prefix>_BIND` and `<prefix>_PORT`, both of which are
    /// optional.
    pub fn from_env(prefix: &str) -> Result<ServerOptions, String> {
        Ok(ServerOptions {
            bind: get_optional_var::<IpAddr>(prefix, "BIND")?
                .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST)),
            port: get_optional_var::<u16>(prefix, "PORT")?.unwrap_or(DEFAULT_PORT),
        })
    }
}

/// Connects to the database configured in the environment.
///
/// Builds with the `sqlite` feature honor `BOOKLIB_SQLITE`, which names a SQLite connection
/// string.  Otherwise, the PostgreSQL database described by the `PGSQL_PROD_*` variables is used.
#[allow(unreachable_code)]
pub async fn connect_db() -> Result<Arc<dyn Db + Send + Sync>, String> {
    #[cfg(feature = "sqlite")]
    {
        if let Some(conn_str) = get_optional_var::<String>("BOOKLIB", "SQLITE")? {
            let db =
                booklib_core::db::sqlite::connect(&conn_str).await.map_err(|e| e.to_string())?;
            return Ok(Arc::new(db));
        }
    }

    #[cfg(feature = "postgres")]
    {
        let opts = PostgresOptions::from_env("PGSQL_PROD")?;
        let db = PostgresDb::connect(opts).map_err(|e| e.to_string())?;
        return Ok(Arc::new(db));
    }

    Err("No database backend configured".to_owned())
}

/// Creates the router that serves the REST API on top of `db`.
///
/// The schema of `db` must have already been initialized with `db::init_schema`.
pub fn app(db: Arc<dyn Db + Send + Sync>) -> Router {
    rest::app(Driver::new(db))
}

/// Serves the REST API on top of `db` on the already-bound `listener` until `shutdown`
/// completes or the server fails.
///
/// The database is closed once the server stops, whatever the reason.
pub async fn serve_until<F>(
    listener: TcpListener,
    db: Arc<dyn Db + Send + Sync>,
    shutdown: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let result = axum::serve(listener, app(db.clone())).with_graceful_shutdown(shutdown).await;
    db.close().await;
    result
}

/// Serves the REST API on top of `db` on the already-bound `listener` until interrupted.
pub async fn serve(listener: TcpListener, db: Arc<dyn Db + Send + Sync>) -> io::Result<()> {
    serve_until(listener, db, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Cannot wait for interrupt signal: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Interrupted; shutting down");
    })
    .await
}
