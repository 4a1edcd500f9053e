use std::slice;

use serde::{Deserialize, Serialize};

use crate::{error::Error, item::NamedItem, search::Matcher};

/// An immutable, ordered group of named items of one kind.
///
/// The `kind` and `apiVersion` tags are fixed at construction and copied
/// verbatim into every collection derived from this one, so a search result
/// always tells where its items came from. Items keep the order in which they
/// were supplied.
///
/// Serializes as `{ "apiVersion": .., "kind": .., "items": [..] }`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection<T> {
    api_version: Tag,

    kind: Tag,

    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

impl<T> Collection<T> {
    /// Creates a collection from already-fetched items.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTag`] if either `kind` or `api_version` is empty.
    pub fn new<K, V>(kind: K, api_version: V, items: Vec<T>) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        Ok(Self {
            api_version: Tag::try_from(api_version.into())?,
            kind: Tag::try_from(kind.into())?,
            items,
        })
    }

    /// Caller guarantees both tags are non-empty.
    pub(crate) const fn from_trusted_tags(kind: String, api_version: String, items: Vec<T>) -> Self {
        Self { api_version: Tag(api_version), kind: Tag(kind), items }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> &str { &self.kind.0 }

    #[inline]
    #[must_use]
    pub fn api_version(&self) -> &str { &self.api_version.0 }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize { self.items.len() }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool { self.items.is_empty() }

    #[inline]
    #[must_use]
    pub fn items(&self) -> &[T] { &self.items }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> { self.items.iter() }

    #[inline]
    #[must_use]
    pub fn into_items(self) -> Vec<T> { self.items }

    /// Creates a sibling collection holding `items` under the same tags.
    fn derive(&self, items: Vec<T>) -> Self {
        Self { api_version: self.api_version.clone(), kind: self.kind.clone(), items }
    }
}

impl<T> Collection<T>
where
    T: NamedItem,
{
    /// Returns the names of all items in collection order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> { self.items.iter().map(NamedItem::name).collect() }

    /// Returns the first item whose name equals `name` exactly.
    ///
    /// The comparison is case-sensitive and no normalization is applied.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.items.iter().find(|item| item.name() == name)
    }
}

impl<T> Collection<T>
where
    T: NamedItem + Clone,
{
    /// Returns the items whose names match at least one of `patterns`.
    ///
    /// With no patterns the collection is returned unchanged. Otherwise the
    /// patterns are joined with `|` into one regular expression and each name
    /// is tested for a match anywhere in it. If that expression cannot be
    /// compiled, because it is not valid syntax or exceeds the size limits of
    /// the regular expression engine, every pattern is instead treated as a
    /// literal and a name matches when it contains any of them.
    ///
    /// Either way each item appears at most once and items keep their
    /// relative order. No match yields an empty collection.
    #[must_use]
    pub fn search<I, S>(&self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns.into_iter().collect::<Vec<_>>();
        if patterns.is_empty() {
            return self.clone();
        }

        let matcher = Matcher::new(&patterns);
        let matches = self.items.iter().filter(|item| matcher.is_match(item.name())).cloned();
        self.derive(matches.collect())
    }
}

impl<T> IntoIterator for Collection<T> {
    type IntoIter = std::vec::IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter { self.items.into_iter() }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type IntoIter = slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter { self.items.iter() }
}

/// A non-empty `kind` or `apiVersion` label.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(try_from = "String", into = "String")]
struct Tag(String);

impl TryFrom<String> for Tag {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() { Err(Error::EmptyTag) } else { Ok(Self(value)) }
    }
}

impl From<Tag> for String {
    fn from(Tag(value): Tag) -> Self { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
    struct Item {
        name: String,
        uid: String,
    }

    impl NamedItem for Item {
        fn name(&self) -> &str { &self.name }

        fn uid(&self) -> &str { &self.uid }
    }

    fn collection(names: &[&str]) -> Collection<Item> {
        let items = names
            .iter()
            .enumerate()
            .map(|(index, name)| Item { name: (*name).to_string(), uid: format!("uid-{index}") })
            .collect();
        Collection::new("ItemList", "v1", items).unwrap()
    }

    const ANIMALS: &[&str] = &["cat", "dog", "bat"];

    #[test]
    fn test_new_rejects_empty_tags() {
        assert!(matches!(Collection::<Item>::new("", "v1", Vec::new()), Err(Error::EmptyTag)));
        assert!(matches!(Collection::<Item>::new("ItemList", "", Vec::new()), Err(Error::EmptyTag)));
    }

    #[test]
    fn test_accessors() {
        let animals = collection(ANIMALS);
        assert_eq!(animals.kind(), "ItemList");
        assert_eq!(animals.api_version(), "v1");
        assert_eq!(animals.len(), 3);
        assert!(!animals.is_empty());
        assert_eq!(animals.names(), vec!["cat", "dog", "bat"]);
    }

    #[test]
    fn test_names_of_empty_collection() {
        let empty = collection(&[]);
        assert!(empty.names().is_empty());
        assert_eq!(empty.len(), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_get_exact_match() {
        let animals = collection(ANIMALS);
        assert_eq!(animals.get("dog").map(NamedItem::uid), Some("uid-1"));
        assert!(animals.get("Dog").is_none());
        assert!(animals.get("do").is_none());
    }

    #[test]
    fn test_get_returns_first_of_duplicates() {
        let twins = collection(&["twin", "twin"]);
        assert_eq!(twins.get("twin").map(NamedItem::uid), Some("uid-0"));
    }

    #[test]
    fn test_get_on_empty_collection() {
        assert!(collection(&[]).get("x").is_none());
    }

    #[test]
    fn test_search_without_patterns_is_passthrough() {
        let animals = collection(ANIMALS);
        let found = animals.search(Vec::<String>::new());
        assert_eq!(found, animals);
    }

    #[test]
    fn test_search_single_pattern() {
        let found = collection(ANIMALS).search(["a"]);
        assert_eq!(found.names(), vec!["cat", "bat"]);
    }

    #[test]
    fn test_search_multiple_patterns_keeps_order_without_duplicates() {
        let found = collection(ANIMALS).search(["a", "d"]);
        assert_eq!(found.names(), vec!["cat", "dog", "bat"]);
    }

    #[test]
    fn test_search_invalid_pattern_without_match() {
        let found = collection(&["cat", "dog"]).search(["["]);
        assert!(found.is_empty());
        assert_eq!(found.kind(), "ItemList");
    }

    #[test]
    fn test_search_one_invalid_pattern_downgrades_all() {
        let found = collection(ANIMALS).search(["a", "["]);
        assert_eq!(found.names(), vec!["cat", "bat"]);
    }

    #[test]
    fn test_fallback_deduplicates_items_matching_several_literals() {
        let found = collection(&["cat", "dog", "bat", "x[y"]).search(["a", "t", "c", "["]);
        assert_eq!(found.names(), vec!["cat", "bat", "x[y"]);
    }

    #[test]
    fn test_search_too_large_expression_matches_literally() {
        let found = collection(&["cat", r"\w{2000}x"]).search([r"\w{2000}"]);
        assert_eq!(found.names(), vec![r"\w{2000}x"]);
    }

    #[test]
    fn test_search_preserves_tags() {
        let animals = Collection::new("List", "apps/v1", collection(ANIMALS).into_items()).unwrap();
        let found = animals.search(["zebra"]);
        assert!(found.is_empty());
        assert_eq!(found.kind(), "List");
        assert_eq!(found.api_version(), "apps/v1");
    }

    #[test]
    fn test_search_is_idempotent() {
        let animals = collection(&["cat", "dog", "bat", "a[b"]);
        for patterns in [vec!["a"], vec!["a", "d"], vec!["["], vec!["a", "["], vec![]] {
            let once = animals.search(&patterns);
            let twice = once.search(&patterns);
            assert_eq!(once, twice, "patterns: {patterns:?}");
        }
    }

    #[test]
    fn test_search_does_not_touch_source() {
        let animals = collection(ANIMALS);
        let _found = animals.search(["dog"]);
        assert_eq!(animals.names(), vec!["cat", "dog", "bat"]);
    }

    #[test]
    fn test_iteration_follows_collection_order() {
        let animals = collection(ANIMALS);
        let by_ref = (&animals).into_iter().map(|item| item.name.as_str()).collect::<Vec<_>>();
        assert_eq!(by_ref, vec!["cat", "dog", "bat"]);
        let owned = animals.into_iter().map(|item| item.name).collect::<Vec<_>>();
        assert_eq!(owned, vec!["cat", "dog", "bat"]);
    }

    #[test]
    fn test_tags_round_trip_through_json() {
        let animals = collection(ANIMALS).search(["t$"]);
        let json = serde_json::to_value(&animals).unwrap();
        assert_eq!(json["apiVersion"], "v1");
        assert_eq!(json["kind"], "ItemList");
        assert_eq!(json["items"].as_array().map(Vec::len), Some(2));

        let decoded: Collection<Item> = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, animals);
    }

    #[test]
    fn test_deserialize_rejects_empty_tag() {
        let json = serde_json::json!({ "apiVersion": "", "kind": "ItemList", "items": [] });
        assert!(serde_json::from_value::<Collection<Item>>(json).is_err());
    }

    #[test]
    fn test_deserialize_defaults_missing_items() {
        let json = serde_json::json!({ "apiVersion": "v1", "kind": "ItemList" });
        let decoded = serde_json::from_value::<Collection<Item>>(json).unwrap();
        assert!(decoded.is_empty());
    }
}
