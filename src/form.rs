/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::fmt;

/// A scalar that can be sent as a query parameter or form field.
///
/// This is a closed union: only strings, integers and floats convert into
/// it, so unsupported shapes are rejected at compile time instead of being
/// silently stringified.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    /// Kept separate from [`Value::Float`]: widening an `f32` to `f64`
    /// before formatting would change its shortest decimal form (`55.6f32`
    /// prints as `55.6`, but widened it prints as `55.59999847412109`).
    Float32(f32),
}

/// The canonical text representation used on the wire: base-10 integers with
/// no grouping, floats in their shortest round-trippable decimal form,
/// strings unchanged.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{n}"),
            Value::UInt(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Float32(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

macro_rules! value_from_int {
    ($variant:ident: $($ty:ty),+) => {
        $(impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::$variant(value.into())
            }
        })+
    };
}

value_from_int!(Int: i8, i16, i32, i64);
value_from_int!(UInt: u8, u16, u32, u64);

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float32(value)
    }
}

/// A file name plus payload pair attached to a [`Form`].
///
/// Immutable once created; owned exclusively by the form entry holding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttachment {
    pub(crate) filename: String,
    pub(crate) data: Vec<u8>,
}

impl FileAttachment {
    /// The file name sent in the part's `Content-Disposition` header.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The raw payload, embedded byte-for-byte in the multipart body.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// A single value under a form field name.
#[derive(Debug, Clone)]
pub(crate) enum Entry {
    Field(Value),
    File(FileAttachment),
}

/// A web form: named fields and named file attachments prepared for a POST
/// body.
///
/// Repeated additions under the same name accumulate as a multi-value field;
/// they never overwrite. Field names keep their insertion order, which makes
/// the encoded body deterministic for a given build sequence (the part order
/// inside a multipart body is an implementation detail, not a contract).
///
/// A form is meant to be built by one caller and then handed to
/// [`Client::post`](crate::Client::post), which only reads it. It is not
/// synchronized for concurrent mutation.
#[derive(Debug, Clone, Default)]
pub struct Form {
    pub(crate) fields: Vec<(String, Vec<Entry>)>,
    pub(crate) has_file: bool,
}

impl Form {
    /// Creates a new empty web form.
    pub fn new() -> Form {
        Form::default()
    }

    /// Adds one field into the form, returning the form for chaining.
    pub fn add_field(&mut self, name: &str, value: impl Into<Value>) -> &mut Form {
        self.entries_mut(name).push(Entry::Field(value.into()));
        self
    }

    /// Adds one file into the form, returning the form for chaining.
    ///
    /// `name` is the field to post the file under, `filename` is the name
    /// the server sees, `data` is the file payload. Once a file has been
    /// added the form is always encoded as `multipart/form-data`.
    pub fn add_file(&mut self, name: &str, filename: &str, data: impl Into<Vec<u8>>) -> &mut Form {
        self.has_file = true;
        self.entries_mut(name).push(Entry::File(FileAttachment {
            filename: filename.to_owned(),
            data: data.into(),
        }));
        self
    }

    /// Whether any file has been added. Never reset once true.
    pub fn has_file(&self) -> bool {
        self.has_file
    }

    /// The entry list for `name`, created on first use so that field names
    /// keep their insertion order.
    fn entries_mut(&mut self, name: &str) -> &mut Vec<Entry> {
        if let Some(index) = self.fields.iter().position(|(n, _)| n == name) {
            &mut self.fields[index].1
        } else {
            self.fields.push((name.to_owned(), Vec::new()));
            &mut self.fields.last_mut().unwrap().1
        }
    }
}
