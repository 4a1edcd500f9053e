//! Bindings of [`Collection`] to the Kubernetes resource kinds kollect knows
//! about.
//!
//! Each kind implements [`NamedItem`] from its object metadata. A collection
//! of any of them is built with [`Collection::from_resources`], which takes
//! its tags from the resource type itself: `apiVersion` is the group/version
//! of the kind and `kind` is its list kind, e.g. `v1` and `PodList`.

pub use k8s_openapi::api::{
    apps::v1::{DaemonSet, Deployment, ReplicaSet},
    core::v1::{Node, Pod, Secret, Service},
    networking::v1::Ingress,
};
use k8s_openapi::ListableResource;

use crate::{Collection, NamedItem};

macro_rules! named_resources {
    ($($kind:ty),+ $(,)?) => {
        $(
            impl NamedItem for $kind {
                fn name(&self) -> &str { self.metadata.name.as_deref().unwrap_or_default() }

                fn uid(&self) -> &str { self.metadata.uid.as_deref().unwrap_or_default() }
            }
        )+
    };
}

named_resources!(Pod, Node, Service, Deployment, DaemonSet, ReplicaSet, Secret, Ingress);

impl<K> Collection<K>
where
    K: NamedItem + ListableResource,
{
    /// Wraps fetched resources of kind `K`, tagging the collection with the
    /// API version and list kind of `K`.
    #[must_use]
    pub fn from_resources(items: Vec<K>) -> Self {
        Self::from_trusted_tags(K::LIST_KIND.to_string(), K::API_VERSION.to_string(), items)
    }
}

#[cfg(test)]
mod tests {
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    use super::*;

    fn metadata(name: &str) -> ObjectMeta {
        ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some("default".to_string()),
            uid: Some(format!("{name}-uid")),
            ..ObjectMeta::default()
        }
    }

    fn pods(names: &[&str]) -> Collection<Pod> {
        Collection::from_resources(
            names.iter().map(|name| Pod { metadata: metadata(name), ..Pod::default() }).collect(),
        )
    }

    #[test]
    fn test_named_item_from_metadata() {
        let pod = Pod { metadata: metadata("web-0"), ..Pod::default() };
        assert_eq!(pod.name(), "web-0");
        assert_eq!(pod.uid(), "web-0-uid");
    }

    #[test]
    fn test_unnamed_resource_has_empty_name() {
        let node = Node::default();
        assert_eq!(node.name(), "");
        assert_eq!(node.uid(), "");
    }

    #[test]
    fn test_tags_come_from_resource_kind() {
        assert_eq!(pods(&[]).api_version(), "v1");
        assert_eq!(pods(&[]).kind(), "PodList");

        let deployments = Collection::<Deployment>::from_resources(Vec::new());
        assert_eq!(deployments.api_version(), "apps/v1");
        assert_eq!(deployments.kind(), "DeploymentList");

        let ingresses = Collection::<Ingress>::from_resources(Vec::new());
        assert_eq!(ingresses.api_version(), "networking.k8s.io/v1");
        assert_eq!(ingresses.kind(), "IngressList");
    }

    #[test]
    fn test_every_kind_has_non_empty_tags() {
        fn tags<K: NamedItem + ListableResource>() -> (String, String) {
            let collection = Collection::<K>::from_resources(Vec::new());
            (collection.kind().to_string(), collection.api_version().to_string())
        }

        for (kind, api_version) in [
            tags::<Pod>(),
            tags::<Node>(),
            tags::<Service>(),
            tags::<Deployment>(),
            tags::<DaemonSet>(),
            tags::<ReplicaSet>(),
            tags::<Secret>(),
            tags::<Ingress>(),
        ] {
            assert!(!kind.is_empty());
            assert!(!api_version.is_empty());
        }
    }

    #[test]
    fn test_search_pods() {
        let found = pods(&["web-0", "web-1", "db-0"]).search(["^web", "nope["]);
        // `nope[` is invalid, so `^web` is a literal too and nothing matches.
        assert!(found.is_empty());

        let found = pods(&["web-0", "web-1", "db-0"]).search(["^web"]);
        assert_eq!(found.names(), vec!["web-0", "web-1"]);
        assert_eq!(found.kind(), "PodList");
    }

    #[test]
    fn test_get_pod() {
        let pods = pods(&["web-0", "db-0"]);
        assert_eq!(pods.get("db-0").map(NamedItem::uid), Some("db-0-uid"));
    }

    #[test]
    fn test_serialized_pods_keep_item_type_meta() {
        let json = serde_json::to_value(pods(&["web-0"])).unwrap();
        assert_eq!(json["apiVersion"], "v1");
        assert_eq!(json["kind"], "PodList");
        assert_eq!(json["items"][0]["kind"], "Pod");
        assert_eq!(json["items"][0]["metadata"]["name"], "web-0");
    }
}
