use kube::api::ListParams;

use crate::{cli::internal::ScopeArgs, config::Config, fetch::ResourceClient};

/// Turns the scope given on the command line into a [`ResourceClient`],
/// filling in defaults from the configuration and the Kubernetes client.
pub struct ResourceResolver<'k, 'c> {
    kube_client: &'k kube::Client,
    config: &'c Config,
}

impl<'k, 'c> From<(&'k kube::Client, &'c Config)> for ResourceResolver<'k, 'c> {
    /// Creates a resolver from a Kubernetes client and the application
    /// configuration.
    fn from((kube_client, config): (&'k kube::Client, &'c Config)) -> Self {
        Self { kube_client, config }
    }
}

impl ResourceResolver<'_, '_> {
    /// Builds the [`ResourceClient`] for `scope`.
    ///
    /// The namespace is `None` with `--all-namespaces`. Otherwise it is the
    /// first non-empty value of `--namespace`, the configured
    /// `defaultNamespace` and the namespace of the current Kubernetes
    /// context. Selectors given on the command line replace the configured
    /// ones; the configured limit always applies.
    ///
    /// # Arguments
    ///
    /// * `scope` - The scope arguments parsed from the command line.
    pub fn resolve(&self, scope: &ScopeArgs) -> ResourceClient {
        let Self { kube_client, config } = *self;
        let namespace = resolve_namespace(
            scope.all_namespaces,
            scope.namespace.as_deref(),
            config.default_namespace.as_deref(),
            kube_client.default_namespace(),
        );
        let list_params = override_selectors(
            config.fetch.list_params(),
            scope.label_selector.as_deref(),
            scope.field_selector.as_deref(),
        );

        tracing::debug!(namespace = ?namespace, list_params = ?list_params, "Resolved fetch scope");
        ResourceClient::new(kube_client.clone(), namespace, list_params)
    }
}

/// `None` means every namespace. Otherwise the first non-empty of
/// `requested`, `configured` and `client_default` wins.
fn resolve_namespace(
    all_namespaces: bool,
    requested: Option<&str>,
    configured: Option<&str>,
    client_default: &str,
) -> Option<String> {
    if all_namespaces {
        return None;
    }
    let namespace = requested
        .filter(|s| !s.is_empty())
        .or_else(|| configured.filter(|s| !s.is_empty()))
        .unwrap_or(client_default);
    Some(namespace.to_string())
}

fn override_selectors(
    mut list_params: ListParams,
    label_selector: Option<&str>,
    field_selector: Option<&str>,
) -> ListParams {
    if let Some(selector) = label_selector.filter(|s| !s.is_empty()) {
        list_params.label_selector = Some(selector.to_string());
    }
    if let Some(selector) = field_selector.filter(|s| !s.is_empty()) {
        list_params.field_selector = Some(selector.to_string());
    }
    list_params
}
