/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::borrow::Cow;
use std::fmt;
use std::io::Cursor;

use serde::de::DeserializeOwned;

use crate::transport::RawResponse;

/// The status code of an HTTP response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCode(pub(crate) u16);

impl StatusCode {
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Check if status is within 400-499.
    pub fn is_client_error(&self) -> bool {
        500 > self.0 && self.0 >= 400
    }

    /// Check if status is within 500-599.
    pub fn is_server_error(&self) -> bool {
        600 > self.0 && self.0 >= 500
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An HTTP response resulting from a previous request.
///
/// Immutable once constructed: the body bytes are stored exactly as the
/// transport returned them and every accessor is a read-only view, so a
/// response can be shared across threads and read repeatedly.
pub struct Response {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl Response {
    pub(crate) fn from_raw(raw: RawResponse) -> Response {
        Response {
            status: StatusCode(raw.status),
            headers: raw.headers,
            body: raw.body,
        }
    }

    /// The status code of the response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Retrieves a single header from the response, by case-insensitive
    /// name. The first match wins.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// The raw body bytes, unchanged, as often as needed.
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// The body reinterpreted as text.
    ///
    /// No charset is negotiated from the headers; the bytes are read as
    /// UTF-8 and invalid sequences are replaced rather than reported.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// A fresh reader over the body bytes.
    ///
    /// Every call yields an independent reader starting at offset 0; the
    /// stored bytes are never consumed, so the full content can be read any
    /// number of times.
    pub fn reader(&self) -> Cursor<&[u8]> {
        Cursor::new(&self.body)
    }

    /// Decodes the body as JSON into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> crate::Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("body", &self.body)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use serde::Deserialize;

    use super::{Response, StatusCode};
    use crate::error::Error;
    use crate::transport::RawResponse;

    fn response_with_body(body: &[u8]) -> Response {
        Response::from_raw(RawResponse {
            status: 200,
            headers: vec![("Content-Type".to_owned(), "application/json".to_owned())],
            body: body.to_vec(),
        })
    }

    #[test]
    fn status_classification() {
        assert!(StatusCode(404).is_client_error());
        assert!(!StatusCode(404).is_server_error());
        assert!(StatusCode(500).is_server_error());
        assert!(!StatusCode(200).is_client_error());
        assert_eq!(StatusCode(418).to_string(), "418");
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let response = response_with_body(b"");
        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.header("X-Missing"), None);
    }

    #[test]
    fn bytes_and_text_views() {
        let response = response_with_body(br#"{"result":"success"}"#);
        assert_eq!(response.bytes(), br#"{"result":"success"}"#);
        assert_eq!(response.text(), r#"{"result":"success"}"#);
        // Repeated access sees the same bytes.
        assert_eq!(response.bytes(), response.bytes());
    }

    #[test]
    fn text_replaces_invalid_utf8() {
        let response = response_with_body(&[b'o', b'k', 0xff]);
        assert_eq!(response.text(), "ok\u{fffd}");
    }

    #[test]
    fn reader_restarts_from_offset_zero_each_call() {
        let response = response_with_body(b"hello world");

        let mut first = String::new();
        response.reader().read_to_string(&mut first).unwrap();

        let mut second = String::new();
        response.reader().read_to_string(&mut second).unwrap();

        assert_eq!(first, "hello world");
        assert_eq!(first, second);
        // The stored buffer was not drained by reading.
        assert_eq!(response.bytes(), b"hello world");
    }

    #[test]
    fn json_decodes_into_a_matching_shape() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Reply {
            result: String,
        }

        let response = response_with_body(br#"{"result":"success"}"#);
        let reply: Reply = response.json().unwrap();
        assert_eq!(
            reply,
            Reply {
                result: "success".to_owned()
            }
        );
    }

    #[test]
    fn json_rejects_bodies_that_are_not_json() {
        let response = response_with_body(b"not json");
        let err = response.json::<serde_json::Value>().unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
