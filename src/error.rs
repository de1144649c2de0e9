/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::io;

use thiserror::Error;

/// An error that happened either when building a request body, exchanging it
/// with the server, or decoding its response.
#[derive(Debug, Error)]
pub enum Error {
    /// The transport collaborator failed to connect, send or receive.
    ///
    /// The underlying error is propagated verbatim; nothing is retried and
    /// no partial response is returned.
    #[error("transport failed: {0}")]
    Transport(#[source] io::Error),

    /// Writing the request body failed.
    ///
    /// Encoding is all-or-nothing: a body that failed to encode is never
    /// partially sent.
    #[error("failed to encode request body: {0}")]
    Encoding(#[source] io::Error),

    /// The response body is not valid JSON, or does not structurally match
    /// the shape it was decoded into.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A result which error type is always an [`enum@Error`].
pub type Result<T> = std::result::Result<T, Error>;
