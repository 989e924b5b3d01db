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

//! Terminal client for the Booklib catalog service.
//!
//! The client keeps a local copy of the catalog that is only updated after the service confirms
//! each change.  `api` issues the HTTP requests, `state` holds the screen contents and its
//! transitions, `library` ties both together, and `render` and `shell` implement the terminal
//! front end on top.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

pub mod api;
pub mod library;
pub mod model;
pub mod render;
pub mod shell;
pub mod state;
