//! Binds each Kubernetes kind to the `kube::Api` handles used to fetch it.

use std::fmt::Debug;

use k8s_openapi::ListableResource;
use kollect_collection::{
    NamedItem,
    kinds::{DaemonSet, Deployment, Ingress, Node, Pod, ReplicaSet, Secret, Service},
};
use kube::Api;
use serde::{Serialize, de::DeserializeOwned};

/// A resource kind that can be listed and looked up by name.
pub trait FetchableResource:
    kube::Resource<DynamicType = ()>
    + ListableResource
    + NamedItem
    + Clone
    + Debug
    + DeserializeOwned
    + Serialize
    + Send
    + Sync
    + 'static
{
    /// Whether resources of this kind live in a namespace.
    const NAMESPACED: bool;

    /// Returns the handle used for lists: scoped to `namespace`, or across
    /// every namespace when `namespace` is `None`. Cluster-scoped kinds
    /// ignore `namespace`.
    fn list_api(kube_client: kube::Client, namespace: Option<&str>) -> Api<Self>;

    /// Returns the handle used for single-object lookups in `namespace`.
    /// Cluster-scoped kinds ignore `namespace`.
    fn object_api(kube_client: kube::Client, namespace: &str) -> Api<Self>;
}

macro_rules! namespaced_resources {
    ($($kind:ty),+ $(,)?) => {
        $(
            impl FetchableResource for $kind {
                const NAMESPACED: bool = true;

                fn list_api(kube_client: kube::Client, namespace: Option<&str>) -> Api<Self> {
                    match namespace {
                        Some(namespace) => Api::namespaced(kube_client, namespace),
                        None => Api::all(kube_client),
                    }
                }

                fn object_api(kube_client: kube::Client, namespace: &str) -> Api<Self> {
                    Api::namespaced(kube_client, namespace)
                }
            }
        )+
    };
}

macro_rules! cluster_resources {
    ($($kind:ty),+ $(,)?) => {
        $(
            impl FetchableResource for $kind {
                const NAMESPACED: bool = false;

                fn list_api(kube_client: kube::Client, _namespace: Option<&str>) -> Api<Self> {
                    Api::all(kube_client)
                }

                fn object_api(kube_client: kube::Client, _namespace: &str) -> Api<Self> {
                    Api::all(kube_client)
                }
            }
        )+
    };
}

namespaced_resources!(Pod, Service, Deployment, DaemonSet, ReplicaSet, Secret, Ingress);

cluster_resources!(Node);
