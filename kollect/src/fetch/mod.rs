//! Fetches resources from the cluster and wraps them in collections.
//!
//! [`ResourceClient`] offers three shapes of request for every kind that
//! implements [`FetchableResource`]:
//!
//! - [`ResourceClient::get_all`] lists every resource of the kind;
//! - [`ResourceClient::get_many`] looks up several resources by name and
//!   keeps whatever it finds, reporting the rest;
//! - [`ResourceClient::get_one`] looks up exactly one resource.

mod action;
mod error;
mod resolve;
mod resource;

use futures::{StreamExt, stream};
use kollect_collection::Collection;
use kube::api::ListParams;
use snafu::{OptionExt, ResultExt};

pub use self::{
    action::Action, error::Error, resolve::Resolution, resource::FetchableResource,
};
use self::resolve::Unresolved;

/// Upper bound on lookups in flight during [`ResourceClient::get_many`].
const MAX_CONCURRENT_LOOKUPS: usize = 5;

/// Fetches resources of any [`FetchableResource`] kind within one scope.
///
/// The scope is fixed at construction: the namespace to work in and the list
/// options applied to every [`ResourceClient::get_all`].
pub struct ResourceClient {
    kube_client: kube::Client,

    /// `None` lists across all namespaces and looks objects up in the
    /// default namespace of the client.
    namespace: Option<String>,

    /// Applied to lists only. Lookups by name ignore selectors.
    list_params: ListParams,
}

impl ResourceClient {
    /// Creates a client for the given scope.
    ///
    /// # Arguments
    ///
    /// * `kube_client` - The Kubernetes client requests are sent with.
    /// * `namespace` - Namespace to work in, or `None` to list across all
    ///   namespaces. Cluster-scoped kinds ignore it.
    /// * `list_params` - Selectors and limit applied to every list.
    pub const fn new(
        kube_client: kube::Client,
        namespace: Option<String>,
        list_params: ListParams,
    ) -> Self {
        Self { kube_client, namespace, list_params }
    }

    fn object_namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or_else(|| self.kube_client.default_namespace())
    }

    /// The namespace a single-object lookup of `K` runs in, if any.
    fn object_scope<K: FetchableResource>(&self) -> Option<String> {
        K::NAMESPACED.then(|| self.object_namespace().to_string())
    }

    /// Lists every resource of kind `K`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ListResources`] if the list request fails.
    pub async fn get_all<K: FetchableResource>(&self) -> Result<Collection<K>, Error> {
        let namespace = self.namespace.as_deref().filter(|_| K::NAMESPACED);
        tracing::debug!(
            action = %Action::List,
            kind = K::URL_PATH_SEGMENT,
            namespace = ?namespace,
            "Fetching resources"
        );

        let list = K::list_api(self.kube_client.clone(), namespace)
            .list(&self.list_params)
            .await
            .context(error::ListResourcesSnafu {
                kind: K::URL_PATH_SEGMENT,
                namespace: namespace.map(str::to_string),
            })?;

        tracing::debug!(
            action = %Action::List,
            kind = K::URL_PATH_SEGMENT,
            count = list.items.len(),
            "Fetched resources"
        );
        Ok(Collection::from_resources(list.items))
    }

    /// Looks up every resource in `names`.
    ///
    /// Succeeds as long as at least one resource is found. The returned
    /// [`Resolution`] then carries the names that were missing or failed.
    ///
    /// # Errors
    ///
    /// - [`Error::NoNamesSpecified`] if `names` is empty.
    /// - [`Error::Unresolved`] if nothing was found and at least one lookup
    ///   failed.
    /// - [`Error::NotFound`] if none of the names exist.
    pub async fn get_many<K: FetchableResource>(
        &self,
        names: &[String],
    ) -> Result<Resolution<K, kube::Error>, Error> {
        let kind = K::URL_PATH_SEGMENT;
        let scope = self.object_scope::<K>();
        let namespace = scope.as_deref();
        let api = K::object_api(self.kube_client.clone(), self.object_namespace());
        let outcomes = stream::iter(names.iter().cloned())
            .map(|name| {
                let api = api.clone();
                async move {
                    tracing::debug!(
                        action = %Action::Get,
                        kind,
                        namespace = ?namespace,
                        name = %name,
                        "Fetching resource"
                    );
                    let outcome = api.get_opt(&name).await;
                    (name, outcome)
                }
            })
            .buffered(MAX_CONCURRENT_LOOKUPS)
            .collect::<Vec<_>>()
            .await;

        match resolve::assemble(outcomes) {
            Ok(resolution) => {
                for failure in resolution.failures.iter() {
                    tracing::warn!(action = %Action::Get, kind, name = failure.name(), "{failure}");
                }
                Ok(resolution)
            }
            Err(Unresolved::NothingRequested) => error::NoNamesSpecifiedSnafu { kind }.fail(),
            Err(Unresolved::NothingFound { count }) => error::NotFoundSnafu { kind, count }.fail(),
            Err(Unresolved::Failed(failures)) => error::UnresolvedSnafu { kind, failures }.fail(),
        }
    }

    /// Looks up the resource of kind `K` called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResourceNotFound`] if it does not exist and
    /// [`Error::GetResource`] if the request fails.
    pub async fn get_one<K: FetchableResource>(&self, name: &str) -> Result<K, Error> {
        let kind = K::URL_PATH_SEGMENT;
        let scope = self.object_scope::<K>();
        tracing::debug!(action = %Action::Get, kind, namespace = ?scope, name, "Fetching resource");

        K::object_api(self.kube_client.clone(), self.object_namespace())
            .get_opt(name)
            .await
            .with_context(|_| error::GetResourceSnafu { kind, namespace: scope.clone(), name })?
            .context(error::ResourceNotFoundSnafu { kind, namespace: scope, name })
    }

    /// Returns the group versions served by the cluster: the core versions
    /// first, then the preferred version of every named group.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ListApiGroups`] if discovery fails.
    pub async fn api_groups(&self) -> Result<Vec<String>, Error> {
        let core =
            self.kube_client.list_core_api_versions().await.context(error::ListApiGroupsSnafu)?;
        let groups = self.kube_client.list_api_groups().await.context(error::ListApiGroupsSnafu)?;

        let named = groups.groups.into_iter().filter_map(|group| {
            group
                .preferred_version
                .or_else(|| group.versions.into_iter().next())
                .map(|version| version.group_version)
        });
        Ok(core.versions.into_iter().chain(named).collect())
    }
}
