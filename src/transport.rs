/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::io;

use crate::client::Method;

/// The raw result of one HTTP exchange, as handed back by a [`Transport`].
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// The boundary to the actual HTTP machinery.
///
/// This crate builds URLs and request bodies; everything network-side —
/// sockets, redirects, TLS, pooling, timeouts — lives behind this trait.
/// An implementation performs exactly one blocking request/response
/// round-trip per call and reads the whole response body into memory.
///
/// A failure is returned as-is to the caller: the client never retries and
/// never synthesizes a partial response.
pub trait Transport {
    fn perform(
        &self,
        method: Method,
        url: &str,
        content_type: Option<&str>,
        body: Option<&[u8]>,
    ) -> io::Result<RawResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn perform(
        &self,
        method: Method,
        url: &str,
        content_type: Option<&str>,
        body: Option<&[u8]>,
    ) -> io::Result<RawResponse> {
        (**self).perform(method, url, content_type, body)
    }
}
