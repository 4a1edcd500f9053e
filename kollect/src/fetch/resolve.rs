//! Turns the outcomes of several by-name lookups into one result.
//!
//! A lookup either finds its resource, finds nothing, or fails. Once all
//! lookups are in:
//!
//! - if at least one resource was found, the found resources are returned
//!   together with every lookup that did not succeed;
//! - if nothing was found but some lookups failed, the failures are the
//!   error;
//! - if nothing was found and nothing failed, the error says how many names
//!   were not found;
//! - if no names were requested at all, that is the error.

use std::fmt;

use k8s_openapi::ListableResource;
use kollect_collection::{Collection, NamedItem};

/// A lookup that did not produce a resource.
#[derive(Debug)]
pub enum Failure<E> {
    NotFound { name: String },
    Error { name: String, source: E },
}

impl<E> Failure<E> {
    pub fn name(&self) -> &str {
        match self {
            Self::NotFound { name } | Self::Error { name, .. } => name,
        }
    }
}

impl<E> fmt::Display for Failure<E>
where
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { name } => write!(f, "{name}: not found"),
            Self::Error { name, source } => write!(f, "{name}: {source}"),
        }
    }
}

/// Every unsuccessful lookup of one request, in request order.
#[derive(Debug)]
pub struct Failures<E>(Vec<Failure<E>>);

impl<E> Failures<E> {
    pub const fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, Failure<E>> { self.0.iter() }
}

impl<E> fmt::Display for Failures<E>
where
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, failure) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}

/// The resources found by a request, plus the lookups that came up empty.
#[derive(Debug)]
pub struct Resolution<K, E> {
    pub collection: Collection<K>,

    /// Empty when every name was found.
    pub failures: Failures<E>,
}

/// Why a request produced no resources at all.
#[derive(Debug)]
pub enum Unresolved<E> {
    /// No names were requested.
    NothingRequested,

    /// No lookup failed, yet none found anything.
    NothingFound { count: usize },

    /// At least one lookup failed.
    Failed(Failures<E>),
}

/// Combines lookup outcomes, given as `(name, outcome)` in request order.
pub fn assemble<K, E, I>(outcomes: I) -> Result<Resolution<K, E>, Unresolved<E>>
where
    K: NamedItem + ListableResource,
    I: IntoIterator<Item = (String, Result<Option<K>, E>)>,
{
    let mut found = Vec::new();
    let mut failures = Vec::new();
    let mut count = 0;
    let mut has_errors = false;

    for (name, outcome) in outcomes {
        count += 1;
        match outcome {
            Ok(Some(resource)) => found.push(resource),
            Ok(None) => failures.push(Failure::NotFound { name }),
            Err(source) => {
                has_errors = true;
                failures.push(Failure::Error { name, source });
            }
        }
    }

    if count == 0 {
        return Err(Unresolved::NothingRequested);
    }

    match (found.is_empty(), has_errors) {
        (true, true) => Err(Unresolved::Failed(Failures(failures))),
        (true, false) => Err(Unresolved::NothingFound { count }),
        (false, _) => Ok(Resolution {
            collection: Collection::from_resources(found),
            failures: Failures(failures),
        }),
    }
}
