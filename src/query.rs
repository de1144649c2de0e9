/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::collections::HashMap;

use url::form_urlencoded;

use crate::form::Value;

/// Query parameters attached behind the URL.
///
/// Keys are unique: setting a key again replaces its previous value. The set
/// is backed by a hash map, so the order of pairs in the encoded query
/// string is unspecified; callers must not rely on it.
#[derive(Debug, Clone, Default)]
pub struct Params(HashMap<String, Value>);

impl Params {
    /// Creates an empty parameter set.
    pub fn new() -> Params {
        Params::default()
    }

    /// Sets one parameter and returns the set, so construction can be
    /// chained.
    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Params {
        self.0.insert(key.to_owned(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Attaches `params` behind `base` as a query string.
///
/// An empty set leaves `base` untouched (no trailing `?`). Otherwise the
/// percent-encoded pairs are appended as `base?pairs` without checking
/// whether `base` already carries a query string: passing a
/// pre-parameterized URL produces a second `?`. This is a long-standing
/// quirk that callers rely on, kept as-is.
pub(crate) fn build_url(base: &str, params: &Params) -> String {
    if params.is_empty() {
        return base.to_owned();
    }

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params.iter() {
        serializer.append_pair(key, &value.to_string());
    }

    format!("{base}?{}", serializer.finish())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use url::form_urlencoded;

    use super::{build_url, Params};

    /// Decodes the query part of `url` into a key-value map, ignoring pair
    /// order (which is unspecified).
    fn decode_query(url: &str) -> HashMap<String, String> {
        let (_, query) = url.split_once('?').expect("url has no query string");
        form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect()
    }

    #[test]
    fn empty_params_leave_base_untouched() {
        assert_eq!(build_url("http://h/p", &Params::new()), "http://h/p");
    }

    #[test]
    fn pairs_decode_back_to_the_same_set() {
        let params = Params::new().set("a", 1).set("b", 2);
        let url = build_url("http://h/p", &params);

        assert!(url.starts_with("http://h/p?"));
        let decoded = decode_query(&url);
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded["a"], "1");
        assert_eq!(decoded["b"], "2");
    }

    #[test]
    fn values_are_coerced_and_escaped() {
        let params = Params::new()
            .set("name", "John Smith")
            .set("height", 55.6)
            .set("q", "a=b&c");
        let url = build_url("http://h/p", &params);

        let decoded = decode_query(&url);
        assert_eq!(decoded["name"], "John Smith");
        assert_eq!(decoded["height"], "55.6");
        assert_eq!(decoded["q"], "a=b&c");
    }

    #[test]
    fn setting_a_key_again_replaces_it() {
        let params = Params::new().set("a", 1).set("a", 2);
        assert_eq!(params.len(), 1);

        let decoded = decode_query(&build_url("http://h/p", &params));
        assert_eq!(decoded["a"], "2");
    }

    #[test]
    fn existing_query_string_gets_a_second_question_mark() {
        let params = Params::new().set("b", 2);
        let url = build_url("http://h/p?a=1", &params);

        assert_eq!(url, "http://h/p?a=1?b=2");
    }
}
