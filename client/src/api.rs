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

//! Thin wrapper over the REST API of the catalog service.
//!
//! Every operation maps to exactly one HTTP request and hands back the raw status and body of the
//! response so that callers decide how to interpret them.  Only transport failures surface as
//! errors at this level.

use crate::model::{AuthorPayload, BookPayload};
use booklib_core::env::get_optional_var;
use booklib_core::rest::ErrorResponse;
use log::debug;
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

/// Location of the service when none is configured.
const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Client-side errors.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The response body did not have the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The service answered with a non-successful status code.
    #[error("Request failed with status {status}")]
    Status {
        /// HTTP status code of the response.
        status: u16,

        /// Body of the response.
        body: Value,
    },

    /// The request could not be delivered or the response could not be read.
    #[error("Cannot reach service: {0}")]
    Transport(String),
}

impl ClientError {
    /// Returns the per-field validation messages carried by this error, if any.
    pub fn field_messages(&self) -> Vec<String> {
        match self {
            ClientError::Status { body, .. } => {
                match serde_json::from_value::<ErrorResponse>(body.clone()) {
                    Ok(response) => response.errors.into_iter().map(|e| e.msg).collect(),
                    Err(_) => vec![],
                }
            }
            _ => vec![],
        }
    }
}

/// Result type for this module.
pub type ClientResult<T> = Result<T, ClientError>;

/// Raw response from the service.
#[derive(Debug, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,

    /// Parsed body: JSON documents as is, other text as a JSON string, and empty bodies as null.
    pub body: Value,
}

impl ApiResponse {
    /// Returns true if the status code denotes success.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Interprets the body as a `T` if the request succeeded.
    pub fn into_json<T: DeserializeOwned>(self) -> ClientResult<T> {
        if !self.is_success() {
            return Err(ClientError::Status { status: self.status, body: self.body });
        }
        serde_json::from_value(self.body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Discards the body if the request succeeded.
    pub fn into_unit(self) -> ClientResult<()> {
        if !self.is_success() {
            return Err(ClientError::Status { status: self.status, body: self.body });
        }
        Ok(())
    }
}

/// Converts the raw bytes of a response body into a JSON value.
fn parse_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }
    match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(_) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
    }
}

/// Client for the catalog service.
#[derive(Clone)]
pub struct ApiClient {
    /// Asynchronous HTTP client with which to issue the service requests.
    client: Client,

    /// Root of the service.  Any path in here is replaced by the paths of the API.
    base_url: Url,
}

impl ApiClient {
    /// Creates a new client that talks to the service at `base_url`.
    pub fn new(base_url: Url) -> Self {
        Self { client: Client::default(), base_url }
    }

    /// Creates a new client for the service configured in `<prefix>_API_URL`, which defaults to
    /// the local development server when unset.
    pub fn from_env(prefix: &str) -> Result<Self, String> {
        let raw = get_optional_var::<String>(prefix, "API_URL")?
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        let base_url = Url::parse(&raw).map_err(|e| format!("Invalid API URL {}: {}", raw, e))?;
        Ok(Self::new(base_url))
    }

    /// Returns the root URL of the service.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issues a `method` request against `path` with an optional JSON `body`.
    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<ApiResponse> {
        let url = self.base_url.join(path).map_err(|e| ClientError::Transport(e.to_string()))?;
        debug!("Sending {} {}", method, url);

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await.map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(|e| ClientError::Transport(e.to_string()))?;
        Ok(ApiResponse { status, body: parse_body(&bytes) })
    }

    /// Fetches all books.
    pub async fn get_books(&self) -> ClientResult<ApiResponse> {
        self.send::<()>(Method::GET, "/books", None).await
    }

    /// Creates a new book.
    pub async fn create_book(&self, data: &BookPayload) -> ClientResult<ApiResponse> {
        self.send(Method::POST, "/books", Some(data)).await
    }

    /// Replaces the title and author of book `id`.
    pub async fn update_book(&self, id: i64, data: &BookPayload) -> ClientResult<ApiResponse> {
        self.send(Method::PUT, &format!("/books/{}", id), Some(data)).await
    }

    /// Deletes book `id`.
    pub async fn delete_book(&self, id: i64) -> ClientResult<ApiResponse> {
        self.send::<()>(Method::DELETE, &format!("/books/{}", id), None).await
    }

    /// Fetches all authors.
    pub async fn get_authors(&self) -> ClientResult<ApiResponse> {
        self.send::<()>(Method::GET, "/authors", None).await
    }

    /// Creates a new author.
    pub async fn add_author(&self, data: &AuthorPayload) -> ClientResult<ApiResponse> {
        self.send(Method::POST, "/authors", Some(data)).await
    }

    /// Renames author `id`.
    pub async fn update_author(&self, id: i64, data: &AuthorPayload) -> ClientResult<ApiResponse> {
        self.send(Method::PUT, &format!("/authors/{}", id), Some(data)).await
    }

    /// Deletes author `id`.
    pub async fn delete_author(&self, id: i64) -> ClientResult<ApiResponse> {
        self.send::<()>(Method::DELETE, &format!("/authors/{}", id), None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::net::{Ipv4Addr, TcpListener};

    #[test]
    fn test_parse_body() {
        assert_eq!(Value::Null, parse_body(b""));
        assert_eq!(json!({"message": "hi"}), parse_body(br#"{"message": "hi"}"#));
        assert_eq!(json!("Not Found"), parse_body(b"Not Found"));
    }

    #[test]
    fn test_api_response_into_json() {
        let response = ApiResponse { status: 200, body: json!([{"id": 1, "name": "Alice"}]) };
        let authors: Vec<crate::model::Author> = response.into_json().unwrap();
        assert_eq!("Alice", authors[0].name);

        let response = ApiResponse { status: 200, body: json!({"unexpected": true}) };
        match response.into_json::<Vec<crate::model::Author>>() {
            Err(ClientError::InvalidResponse(_)) => (),
            e => panic!("Unexpected result {:?}", e),
        }

        let response = ApiResponse { status: 404, body: json!({"message": "Nope"}) };
        match response.into_unit() {
            Err(ClientError::Status { status: 404, body }) => {
                assert_eq!(json!({"message": "Nope"}), body)
            }
            e => panic!("Unexpected result {:?}", e),
        }
    }

    #[test]
    fn test_field_messages() {
        let err = ClientError::Status {
            status: 400,
            body: json!({
                "message": "Validation errors",
                "errors": [
                    {"msg": "First", "path": "name", "location": "body", "value": ""},
                    {"msg": "Second", "path": "name", "location": "body"},
                ],
            }),
        };
        assert_eq!(vec!["First", "Second"], err.field_messages());

        let err = ClientError::Status { status: 404, body: json!({"message": "Nope"}) };
        assert!(err.field_messages().is_empty());

        let err = ClientError::Status { status: 502, body: json!("Bad Gateway") };
        assert!(err.field_messages().is_empty());

        assert!(ClientError::Transport("down".to_owned()).field_messages().is_empty());
    }

    #[test]
    fn test_from_env_default() {
        temp_env::with_var("TEST_API_URL", None::<&str>, || {
            let client = ApiClient::from_env("TEST").unwrap();
            assert_eq!("http://localhost:3000/", client.base_url().as_str());
        });
    }

    #[test]
    fn test_from_env_custom_and_invalid() {
        temp_env::with_var("TEST_API_URL", Some("http://example.com:8080"), || {
            let client = ApiClient::from_env("TEST").unwrap();
            assert_eq!("http://example.com:8080/", client.base_url().as_str());
        });

        temp_env::with_var("TEST_API_URL", Some("not a url"), || {
            let err = ApiClient::from_env("TEST").err().unwrap();
            assert!(err.contains("Invalid API URL"));
        });
    }

    #[tokio::test]
    async fn test_transport_error() {
        let addr = {
            let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
            listener.local_addr().unwrap()
        };

        let client = ApiClient::new(Url::parse(&format!("http://{}", addr)).unwrap());
        match client.get_authors().await {
            Err(ClientError::Transport(_)) => (),
            e => panic!("Unexpected result {:?}", e),
        }
    }
}
