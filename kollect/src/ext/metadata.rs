use kube::Resource;

/// Read access to the object metadata fields shown in tables.
///
/// Missing fields read as empty strings.
pub trait MetadataExt {
    fn namespace_or_empty(&self) -> &str;

    fn resource_version_or_empty(&self) -> &str;

    /// Creation time in RFC 3339 form.
    fn created_at(&self) -> String;
}

impl<K> MetadataExt for K
where
    K: Resource,
{
    fn namespace_or_empty(&self) -> &str { self.meta().namespace.as_deref().unwrap_or_default() }

    fn resource_version_or_empty(&self) -> &str {
        self.meta().resource_version.as_deref().unwrap_or_default()
    }

    fn created_at(&self) -> String {
        self.meta()
            .creation_timestamp
            .as_ref()
            .and_then(|time| serde_json::to_value(time).ok())
            .and_then(|value| value.as_str().map(str::to_string))
            .unwrap_or_default()
    }
}
