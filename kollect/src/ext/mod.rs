//! Extensions to Kubernetes API types.

mod metadata;

pub use self::metadata::MetadataExt;
