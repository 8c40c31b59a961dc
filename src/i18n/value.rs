// SPDX-License-Identifier: MPL-2.0
//! The value model for translation tables.
//!
//! A locale's table is a tree: tables keyed by path segments, with phrase
//! leaves and ordered lists at the bottom. Lists may hold plain phrases
//! (`hero.typewriterPhrases`) or structured blocks (`services.categories`),
//! so list elements are themselves values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One node of a translation table.
///
/// Deserialized straight from the locale JSON files; the untagged
/// representation maps JSON strings, arrays, and objects onto the three
/// variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationValue {
    /// A leaf phrase.
    Text(String),
    /// An ordered list of values.
    List(Vec<TranslationValue>),
    /// A nested table keyed by path segments.
    Table(BTreeMap<String, TranslationValue>),
}

impl TranslationValue {
    /// Walks a dot-delimited key path down the tree.
    ///
    /// Descends one segment at a time and short-circuits as soon as a
    /// segment is missing or an intermediate node is not a table. An empty
    /// path never resolves.
    pub fn get_path(&self, path: &str) -> Option<&TranslationValue> {
        if path.is_empty() {
            return None;
        }
        let mut current = self;
        for segment in path.split('.') {
            match current {
                TranslationValue::Table(entries) => {
                    current = entries.get(segment)?;
                }
                _ => return None,
            }
        }
        Some(current)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            TranslationValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[TranslationValue]> {
        match self {
            TranslationValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&BTreeMap<String, TranslationValue>> {
        match self {
            TranslationValue::Table(entries) => Some(entries),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> TranslationValue {
        serde_json::from_str(
            r#"{
                "hero": {
                    "title": "Hello",
                    "typewriterPhrases": ["Developer", "Designer"],
                    "buttons": { "contact": "Get in touch" }
                },
                "services": {
                    "categories": [
                        { "title": "Web", "description": "Sites" }
                    ]
                }
            }"#,
        )
        .expect("sample tree should parse")
    }

    #[test]
    fn json_string_parses_as_text() {
        let value: TranslationValue = serde_json::from_str("\"Hello\"").expect("parse");
        assert_eq!(value.as_text(), Some("Hello"));
    }

    #[test]
    fn json_array_parses_as_list() {
        let value: TranslationValue = serde_json::from_str("[\"a\", \"b\"]").expect("parse");
        let items = value.as_list().expect("should be a list");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_text(), Some("a"));
    }

    #[test]
    fn get_path_resolves_nested_leaf() {
        let tree = sample_tree();
        let value = tree.get_path("hero.buttons.contact").expect("present");
        assert_eq!(value.as_text(), Some("Get in touch"));
    }

    #[test]
    fn get_path_resolves_intermediate_table() {
        let tree = sample_tree();
        let value = tree.get_path("hero.buttons").expect("present");
        assert!(value.as_table().is_some());
    }

    #[test]
    fn get_path_resolves_list_of_structured_blocks() {
        let tree = sample_tree();
        let value = tree.get_path("services.categories").expect("present");
        let items = value.as_list().expect("should be a list");
        assert_eq!(
            items[0].get_path("title").and_then(TranslationValue::as_text),
            Some("Web")
        );
    }

    #[test]
    fn get_path_short_circuits_on_missing_segment() {
        let tree = sample_tree();
        assert!(tree.get_path("hero.subtitle").is_none());
        assert!(tree.get_path("missing.title").is_none());
    }

    #[test]
    fn get_path_stops_at_non_table_node() {
        let tree = sample_tree();
        // "hero.title" is a leaf; descending past it must fail, not panic.
        assert!(tree.get_path("hero.title.deeper").is_none());
    }

    #[test]
    fn get_path_rejects_empty_path() {
        let tree = sample_tree();
        assert!(tree.get_path("").is_none());
    }

    #[test]
    fn get_path_rejects_empty_segments() {
        let tree = sample_tree();
        assert!(tree.get_path("hero..title").is_none());
        assert!(tree.get_path(".hero.title").is_none());
    }
}
