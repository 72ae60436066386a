// hbase-ops: HBase REST gateway client and table operations
// Copyright 2026 hbase-ops developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Multimap helpers for query parameters and request headers

use std::collections::BTreeMap;

/// Multimap for string key and string value
pub type Multimap = multimap::MultiMap<String, String>;

pub trait MultimapExt {
    /// Adds a key-value pair to the multimap
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Adds a multimap to the current multimap
    fn add_multimap(&mut self, other: Multimap);

    /// Adds the pair only if the key is not present yet
    fn add_if_absent<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Converts multimap to HTTP query string, sorted by key
    fn to_query_string(&self) -> String;
}

impl MultimapExt for Multimap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn add_multimap(&mut self, other: Multimap) {
        for (key, values) in other.into_iter() {
            self.insert_many(key.clone(), values);
        }
    }

    fn add_if_absent<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        if !self.contains_key(&key) {
            self.insert(key, value.into());
        }
    }

    fn to_query_string(&self) -> String {
        // Sorted so that request URLs are stable in logs and tests
        let mut sorted: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (key, values) in self.iter_all() {
            sorted
                .entry(key.as_str())
                .or_default()
                .extend(values.iter().map(|s| s.as_str()));
        }

        let mut query = String::new();
        for (key, values) in sorted {
            for value in values {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&urlencoding::encode(key));
                query.push('=');
                query.push_str(&urlencoding::encode(value));
            }
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_query_string_sorted_and_encoded() {
        let mut map = Multimap::new();
        map.add("v", "3");
        map.add("column", "cf1:na me");
        assert_eq!(map.to_query_string(), "column=cf1%3Ana%20me&v=3");
    }

    #[test]
    fn test_to_query_string_empty() {
        assert_eq!(Multimap::new().to_query_string(), "");
    }

    #[test]
    fn test_add_if_absent_keeps_existing() {
        let mut map = Multimap::new();
        map.add("Accept", "text/plain");
        map.add_if_absent("Accept", "application/json");
        map.add_if_absent("Content-Type", "application/json");
        assert_eq!(map.get_vec("Accept").map(Vec::len), Some(1));
        assert_eq!(map.get("Accept").map(String::as_str), Some("text/plain"));
        assert!(map.contains_key("Content-Type"));
    }

    #[test]
    fn test_add_multimap_merges_values() {
        let mut left = Multimap::new();
        left.add("a", "1");
        let mut right = Multimap::new();
        right.add("a", "2");
        right.add("b", "3");
        left.add_multimap(right);
        assert_eq!(left.get_vec("a").map(Vec::len), Some(2));
        assert_eq!(left.to_query_string(), "a=1&a=2&b=3");
    }
}
