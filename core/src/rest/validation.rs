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

//! Declarative validation of request fields.
//!
//! Services describe every field they accept with a `TextRule` or a `PositiveIntRule` and feed
//! the raw request data through a `Validator`.  The validator evaluates every check of every rule
//! and accumulates all failures so that the client gets to see all problems at once.

use crate::rest::RestError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Where in the request a field comes from.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// The field is a property of the JSON body.
    Body,

    /// The field is a parameter in the request path.
    Params,
}

/// Details about a single failed check on a field.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FieldError {
    /// Human-readable description of the failed check.
    pub msg: String,

    /// Name of the field that failed validation.
    pub path: String,

    /// Where the field comes from.
    pub location: Location,

    /// The raw value that failed validation, if any was provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// Rule for a free-form text field in a JSON body.
#[derive(Debug)]
pub struct TextRule {
    /// Name of the field in the body.
    pub field: &'static str,

    /// Message to report when the field is not a string.
    pub not_string: &'static str,

    /// Message to report when the field is empty or missing.
    pub required: &'static str,

    /// Message to report when the trimmed field is out of the `min..=max` bounds.
    pub length: &'static str,

    /// Minimum number of characters, inclusive.
    pub min: usize,

    /// Maximum number of characters, inclusive.
    pub max: usize,
}

/// Rule for a field that must hold an integer strictly greater than zero.
#[derive(Debug)]
pub struct PositiveIntRule {
    /// Name of the field.
    pub field: &'static str,

    /// Message to report when the field is not a positive integer.
    pub message: &'static str,
}

/// Escapes the characters that have a special meaning in HTML.
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '/' => escaped.push_str("&#x2F;"),
            '\\' => escaped.push_str("&#x5C;"),
            '`' => escaped.push_str("&#96;"),
            ch => escaped.push(ch),
        }
    }
    escaped
}

/// Converts a JSON `value` to the string form that the checks operate on.
///
/// Scalars are rendered as their textual representation and anything else becomes empty.
fn coerce_to_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Parses `s` as an integer strictly greater than zero.
///
/// An optional sign is accepted in front of the digits but nothing else, so fractional numbers
/// and numbers in exponent notation are rejected.
fn parse_positive_int(s: &str) -> Option<i64> {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match s.parse::<i64>() {
        Ok(i) if i > 0 => Some(i),
        _ => None,
    }
}

/// Accumulator of field errors for a single request.
///
/// Every checking method returns the validated and sanitized value on success, or `None` after
/// recording all the errors it found.  Once all fields have been checked, callers that got any
/// `None` back should return the error produced by `into_error`.
#[derive(Debug, Default)]
pub struct Validator {
    /// Errors found so far, in the order the checks ran.
    errors: Vec<FieldError>,
}

impl Validator {
    /// Records a failed check on `field`.
    fn push(&mut self, msg: &str, field: &str, location: Location, value: Option<&Value>) {
        self.errors.push(FieldError {
            msg: msg.to_owned(),
            path: field.to_owned(),
            location,
            value: value.cloned(),
        });
    }

    /// Checks the text field described by `rule` in the JSON `body` and returns its trimmed and
    /// HTML-escaped value.
    pub fn text(&mut self, body: &Value, rule: &TextRule) -> Option<String> {
        let value = body.get(rule.field);
        let before = self.errors.len();

        if !matches!(value, Some(Value::String(_))) {
            self.push(rule.not_string, rule.field, Location::Body, value);
        }

        let raw = coerce_to_string(value);
        if raw.is_empty() {
            self.push(rule.required, rule.field, Location::Body, value);
        }

        let trimmed = raw.trim();
        let len = trimmed.chars().count();
        if len < rule.min || len > rule.max {
            self.push(rule.length, rule.field, Location::Body, value);
        }

        if self.errors.len() == before { Some(escape_html(trimmed)) } else { None }
    }

    /// Checks the positive integer field described by `rule` in the JSON `body`.
    pub fn body_positive_int(&mut self, body: &Value, rule: &PositiveIntRule) -> Option<i64> {
        let value = body.get(rule.field);
        let parsed = parse_positive_int(coerce_to_string(value).trim());
        if parsed.is_none() {
            self.push(rule.message, rule.field, Location::Body, value);
        }
        parsed
    }

    /// Checks the positive integer path parameter described by `rule` whose raw text is `raw`.
    pub fn param_positive_int(&mut self, raw: &str, rule: &PositiveIntRule) -> Option<i64> {
        let parsed = parse_positive_int(raw.trim());
        if parsed.is_none() {
            let value = Value::String(raw.to_owned());
            self.push(rule.message, rule.field, Location::Params, Some(&value));
        }
        parsed
    }

    /// Returns true if no check has failed so far.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consumes the validator and returns the error to report to the client.
    pub fn into_error(self) -> RestError {
        RestError::Validation(self.errors)
    }
}
