//! Table rendering for collections of Kubernetes resources.

mod collection_ext;

pub use self::collection_ext::CollectionTableExt;
