use snafu::Snafu;

use crate::fetch::resolve::Failures;

/// Errors raised while fetching resources from the cluster.
///
/// `kind` is the plural resource name, e.g. `pods`.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("No {kind} specified"))]
    NoNamesSpecified { kind: &'static str },

    #[snafu(display("{count} {kind} not found"))]
    NotFound { kind: &'static str, count: usize },

    #[snafu(display("Failed to get {kind}:\n{failures}"))]
    Unresolved { kind: &'static str, failures: Failures<kube::Error> },

    #[snafu(display("{kind} \"{name}\" not found{}", in_namespace(namespace.as_deref())))]
    ResourceNotFound { kind: &'static str, namespace: Option<String>, name: String },

    #[snafu(display(
        "Failed to list {kind} in {}, error: {source}",
        namespace.as_deref().unwrap_or("all namespaces")
    ))]
    ListResources {
        kind: &'static str,
        namespace: Option<String>,
        #[snafu(source(from(kube::Error, Box::new)))]
        source: Box<kube::Error>,
    },

    #[snafu(display(
        "Failed to get {kind} {name}{}, error: {source}",
        in_namespace(namespace.as_deref())
    ))]
    GetResource {
        kind: &'static str,
        namespace: Option<String>,
        name: String,
        #[snafu(source(from(kube::Error, Box::new)))]
        source: Box<kube::Error>,
    },

    #[snafu(display("Failed to list API groups, error: {source}"))]
    ListApiGroups {
        #[snafu(source(from(kube::Error, Box::new)))]
        source: Box<kube::Error>,
    },
}

fn in_namespace(namespace: Option<&str>) -> String {
    namespace.map(|namespace| format!(" in namespace {namespace}")).unwrap_or_default()
}
