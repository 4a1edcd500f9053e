//! Immutable, ordered collections of named Kubernetes resources.
//!
//! A [`Collection`] wraps an already-fetched sequence of items together with
//! the `kind` and `apiVersion` tags they were fetched under. Every item must
//! implement [`NamedItem`], which is all the collection needs to look items up
//! by exact name or to search them by pattern.
//!
//! Searching never mutates the source: [`Collection::search`] returns a new
//! collection carrying the same tags. Patterns are first combined into a
//! single regular expression; when that expression cannot be compiled, for
//! instance because a pattern is not valid syntax, the search degrades to plain
//! substring matching instead of failing.
//!
//! ```
//! use kollect_collection::{Collection, NamedItem};
//!
//! #[derive(Clone)]
//! struct Host {
//!     name: String,
//!     uid: String,
//! }
//!
//! impl NamedItem for Host {
//!     fn name(&self) -> &str { &self.name }
//!
//!     fn uid(&self) -> &str { &self.uid }
//! }
//!
//! let hosts = ["cat", "dog", "bat"]
//!     .into_iter()
//!     .map(|name| Host { name: name.to_string(), uid: format!("uid-{name}") })
//!     .collect();
//! let collection = Collection::new("HostList", "v1", hosts).unwrap();
//!
//! let found = collection.search(["a"]);
//! assert_eq!(found.names(), vec!["cat", "bat"]);
//! assert_eq!(found.kind(), "HostList");
//!
//! // `[` is not a valid regular expression, so it is matched literally.
//! assert!(collection.search(["["]).is_empty());
//! ```

mod collection;
mod error;
mod item;
pub mod kinds;
mod search;

pub use self::{collection::Collection, error::Error, item::NamedItem};
