/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::io::Read;

use crate::body;
use crate::error::{Error, Result};
use crate::form::Form;
use crate::query::{build_url, Params};
use crate::response::Response;
use crate::transport::Transport;

/// An HTTP method that can be used when sending a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
}

/// Convenience to easily convert enum members into strings when sending out
/// requests.
impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
        }
    }
}

/// An HTTP client capable of building and sending requests through the
/// transport it owns.
///
/// Each call blocks until the transport returns or fails; the client keeps
/// no state between calls.
pub struct Client<T: Transport> {
    transport: T,
}

impl<T: Transport> Client<T> {
    /// Creates a new HTTP client on top of the given transport.
    pub fn new(transport: T) -> Client<T> {
        Client { transport }
    }

    /// Issues a GET to the specified URL.
    ///
    /// `url` can be a host or a complete URL; `params` are attached behind
    /// it as a query string.
    pub fn get(&self, url: &str, params: &Params) -> Result<Response> {
        let url = build_url(url, params);
        let raw = self
            .transport
            .perform(Method::GET, &url, None, None)
            .map_err(Error::Transport)?;

        Ok(Response::from_raw(raw))
    }

    /// Issues a POST to the specified URL.
    ///
    /// `params` are attached behind the URL, exactly as for [`get`][g]. The
    /// form decides the body encoding: `multipart/form-data` once it holds
    /// any file, `application/x-www-form-urlencoded` otherwise. Passing
    /// `None` still submits a body — an empty URL-encoded one.
    ///
    /// [g]: crate::client::Client::get
    pub fn post(&self, url: &str, params: &Params, form: Option<&Form>) -> Result<Response> {
        let url = build_url(url, params);
        let encoded = body::encode(form)?;
        let raw = self
            .transport
            .perform(
                Method::POST,
                &url,
                Some(&encoded.content_type),
                Some(&encoded.bytes),
            )
            .map_err(Error::Transport)?;

        Ok(Response::from_raw(raw))
    }

    /// Issues a POST with the given bytes sent verbatim as the body.
    ///
    /// The Content-Type header is always `multipart/form-data`, whatever
    /// the payload actually contains. Callers depend on that exact header
    /// being sent, so it is kept even though the body is usually not
    /// multipart-shaped.
    pub fn post_binary(&self, url: &str, params: &Params, mut body: impl Read) -> Result<Response> {
        let url = build_url(url, params);

        let mut bytes = Vec::new();
        body.read_to_end(&mut bytes).map_err(Error::Encoding)?;

        let raw = self
            .transport
            .perform(
                Method::POST,
                &url,
                Some("multipart/form-data"),
                Some(&bytes),
            )
            .map_err(Error::Transport)?;

        Ok(Response::from_raw(raw))
    }
}
