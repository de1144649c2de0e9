/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::io::Write;

use url::form_urlencoded;

use crate::error::{Error, Result};
use crate::form::{Entry, Form};

pub(crate) const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// A fully serialized request body together with the Content-Type header
/// value that describes it.
pub(crate) struct EncodedBody {
    pub(crate) bytes: Vec<u8>,
    pub(crate) content_type: String,
}

/// Serializes a form, or its absence, into a POST body.
///
/// An absent form is still a submission: it encodes to an empty URL-encoded
/// body rather than to no body at all. A form holding at least one file is
/// always encoded as `multipart/form-data`, fields included; a form without
/// files is always URL-encoded.
pub(crate) fn encode(form: Option<&Form>) -> Result<EncodedBody> {
    match form {
        None => Ok(EncodedBody {
            bytes: Vec::new(),
            content_type: FORM_URLENCODED.to_owned(),
        }),
        Some(form) if form.has_file => encode_multipart(form),
        Some(form) => Ok(encode_urlencoded(form)),
    }
}

/// Flattens the form's entries into a `key=value&...` body. Multi-value
/// fields come out as repeated pairs, not joined.
fn encode_urlencoded(form: &Form) -> EncodedBody {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, entries) in &form.fields {
        for entry in entries {
            // A form without files holds field entries only.
            if let Entry::Field(value) = entry {
                serializer.append_pair(name, &value.to_string());
            }
        }
    }

    EncodedBody {
        bytes: serializer.finish().into_bytes(),
        content_type: FORM_URLENCODED.to_owned(),
    }
}

fn encode_multipart(form: &Form) -> Result<EncodedBody> {
    let boundary = random_boundary();
    let mut bytes = Vec::new();
    write_parts(&mut bytes, form, &boundary).map_err(Error::Encoding)?;

    Ok(EncodedBody {
        bytes,
        content_type: format!("multipart/form-data; boundary={boundary}"),
    })
}

/// Writes every field and file part framed by `boundary`, then the closing
/// marker. Any write failure aborts the whole body.
fn write_parts(buf: &mut Vec<u8>, form: &Form, boundary: &str) -> std::io::Result<()> {
    for (name, entries) in &form.fields {
        for entry in entries {
            match entry {
                Entry::Field(value) => {
                    write!(
                        buf,
                        "--{boundary}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n",
                        escape_quotes(name)
                    )?;
                    write!(buf, "{value}\r\n")?;
                }
                Entry::File(file) => {
                    write!(
                        buf,
                        "--{boundary}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                        escape_quotes(name),
                        escape_quotes(&file.filename)
                    )?;
                    buf.write_all(&file.data)?;
                    buf.write_all(b"\r\n")?;
                }
            }
        }
    }
    write!(buf, "--{boundary}--\r\n")?;

    Ok(())
}

/// 30 random bytes, hex-encoded. Long enough that a collision with the
/// payload is not a practical concern.
fn random_boundary() -> String {
    let raw: [u8; 30] = rand::random();
    raw.iter().map(|byte| format!("{byte:02x}")).collect()
}

fn escape_quotes(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
