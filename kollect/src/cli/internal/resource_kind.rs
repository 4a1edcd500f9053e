use std::{fmt, str::FromStr};

use snafu::Snafu;

/// The resource kinds the command line can fetch.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResourceKind {
    Pods,
    Nodes,
    Services,
    Deployments,
    DaemonSets,
    ReplicaSets,
    Secrets,
    Ingresses,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val = match self {
            Self::Pods => "pods",
            Self::Nodes => "nodes",
            Self::Services => "services",
            Self::Deployments => "deployments",
            Self::DaemonSets => "daemonsets",
            Self::ReplicaSets => "replicasets",
            Self::Secrets => "secrets",
            Self::Ingresses => "ingresses",
        };
        f.write_str(val)
    }
}

impl FromStr for ResourceKind {
    type Err = ParseResourceKindError;

    /// Accepts the plural, singular and short names `kubectl` accepts,
    /// ignoring case.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "pods" | "pod" | "po" => Ok(Self::Pods),
            "nodes" | "node" | "no" => Ok(Self::Nodes),
            "services" | "service" | "svc" => Ok(Self::Services),
            "deployments" | "deployment" | "deploy" => Ok(Self::Deployments),
            "daemonsets" | "daemonset" | "ds" => Ok(Self::DaemonSets),
            "replicasets" | "replicaset" | "rs" => Ok(Self::ReplicaSets),
            "secrets" | "secret" => Ok(Self::Secrets),
            "ingresses" | "ingress" | "ing" => Ok(Self::Ingresses),
            _ => Err(ParseResourceKindError::Unknown { value: value.to_string() }),
        }
    }
}

#[derive(Debug, Snafu)]
pub enum ParseResourceKindError {
    #[snafu(display(
        "Unknown resource kind '{value}', expected one of pods, nodes, services, deployments, \
         daemonsets, replicasets, secrets, ingresses"
    ))]
    Unknown { value: String },
}

/// Evaluates `$body` with `$resource` naming the Kubernetes type of `$kind`.
///
/// ```ignore
/// with_resource_kind!(kind, K => client.get_all::<K>().await)
/// ```
macro_rules! with_resource_kind {
    ($kind:expr, $resource:ident => $body:expr) => {
        match $kind {
            $crate::cli::internal::ResourceKind::Pods => {
                type $resource = kollect_collection::kinds::Pod;
                $body
            }
            $crate::cli::internal::ResourceKind::Nodes => {
                type $resource = kollect_collection::kinds::Node;
                $body
            }
            $crate::cli::internal::ResourceKind::Services => {
                type $resource = kollect_collection::kinds::Service;
                $body
            }
            $crate::cli::internal::ResourceKind::Deployments => {
                type $resource = kollect_collection::kinds::Deployment;
                $body
            }
            $crate::cli::internal::ResourceKind::DaemonSets => {
                type $resource = kollect_collection::kinds::DaemonSet;
                $body
            }
            $crate::cli::internal::ResourceKind::ReplicaSets => {
                type $resource = kollect_collection::kinds::ReplicaSet;
                $body
            }
            $crate::cli::internal::ResourceKind::Secrets => {
                type $resource = kollect_collection::kinds::Secret;
                $body
            }
            $crate::cli::internal::ResourceKind::Ingresses => {
                type $resource = kollect_collection::kinds::Ingress;
                $body
            }
        }
    };
}

pub(crate) use with_resource_kind;

#[cfg(test)]
mod tests {
    use super::ResourceKind;

    const ALL: [ResourceKind; 8] = [
        ResourceKind::Pods,
        ResourceKind::Nodes,
        ResourceKind::Services,
        ResourceKind::Deployments,
        ResourceKind::DaemonSets,
        ResourceKind::ReplicaSets,
        ResourceKind::Secrets,
        ResourceKind::Ingresses,
    ];

    #[test]
    fn test_parse_aliases() {
        for (alias, kind) in [
            ("po", ResourceKind::Pods),
            ("Pod", ResourceKind::Pods),
            ("no", ResourceKind::Nodes),
            ("svc", ResourceKind::Services),
            ("deploy", ResourceKind::Deployments),
            ("ds", ResourceKind::DaemonSets),
            ("rs", ResourceKind::ReplicaSets),
            ("secret", ResourceKind::Secrets),
            ("ing", ResourceKind::Ingresses),
            ("INGRESS", ResourceKind::Ingresses),
        ] {
            assert_eq!(alias.parse::<ResourceKind>().unwrap(), kind, "alias: {alias}");
        }
    }

    #[test]
    fn test_display_parses_back() {
        for kind in ALL {
            assert_eq!(kind.to_string().parse::<ResourceKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_kind() {
        let err = "configmaps".parse::<ResourceKind>().unwrap_err();
        assert!(err.to_string().contains("configmaps"));
    }

    #[test]
    fn test_dispatch_matches_kubernetes_plural() {
        for kind in ALL {
            let plural = with_resource_kind!(kind, K => <K as k8s_openapi::Resource>::URL_PATH_SEGMENT);
            assert_eq!(plural, kind.to_string());
        }
    }
}
