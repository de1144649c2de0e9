/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! This crate provides idiomatic Rust data structures for building and
//! sending simple HTTP requests: query parameters attached behind the URL,
//! URL-encoded or multipart form bodies (including file attachments), and a
//! response wrapper with several views over the body bytes.
//!
//! The actual network exchange is delegated to a caller-supplied
//! [`Transport`], which performs exactly one blocking request/response
//! round-trip per call. Redirects, TLS, pooling and timeouts all live behind
//! that boundary.
//!
//!
//! ## Sending requests
//!
//! A simple GET with query parameters:
//!
//! ```no_run
//! use requests::{Client, Params};
//! # struct Curl;
//! # impl requests::Transport for Curl {
//! #     fn perform(
//! #         &self,
//! #         _: requests::Method,
//! #         _: &str,
//! #         _: Option<&str>,
//! #         _: Option<&[u8]>,
//! #     ) -> std::io::Result<requests::RawResponse> {
//! #         unimplemented!()
//! #     }
//! # }
//! # fn run() -> requests::Result<()> {
//! let client = Client::new(Curl);
//!
//! let response = client.get("http://localhost:5000", &Params::new().set("a", 1).set("b", 2))?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```
//!
//! Posting a form with fields and a file attachment:
//!
//! ```no_run
//! use requests::{Client, Form, Params};
//! # struct Curl;
//! # impl requests::Transport for Curl {
//! #     fn perform(
//! #         &self,
//! #         _: requests::Method,
//! #         _: &str,
//! #         _: Option<&str>,
//! #         _: Option<&[u8]>,
//! #     ) -> std::io::Result<requests::RawResponse> {
//! #         unimplemented!()
//! #     }
//! # }
//! # fn run() -> requests::Result<()> {
//! let client = Client::new(Curl);
//!
//! let mut form = Form::new();
//! form.add_field("field1", "value1")
//!     .add_field("field2", "value2")
//!     .add_file("file1", "test.txt", &b"file contents"[..]);
//!
//! let response = client.post("http://localhost:5000", &Params::new(), Some(&form))?;
//! # Ok(())
//! # }
//! ```
//!
//! The form is sent as `multipart/form-data` as soon as it holds at least
//! one file, and as `application/x-www-form-urlencoded` otherwise. Passing
//! `None` instead of a form sends an empty URL-encoded submission.

mod body;
mod client;
mod error;
mod form;
mod query;
mod response;
mod transport;

pub use client::{Client, Method};
pub use error::{Error, Result};
pub use form::{FileAttachment, Form, Value};
pub use query::Params;
pub use response::{Response, StatusCode};
pub use transport::{RawResponse, Transport};
