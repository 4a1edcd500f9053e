use kollect_collection::Collection;

use crate::{ext::MetadataExt, fetch::FetchableResource};

/// Renders a collection of resources as a table.
pub trait CollectionTableExt {
    /// Columns are NAME, NAMESPACE (for namespaced kinds only) and CREATED.
    /// `wide` appends UID and RESOURCE VERSION.
    fn render_table(&self, wide: bool) -> String;
}

impl<K> CollectionTableExt for Collection<K>
where
    K: FetchableResource,
{
    fn render_table(&self, wide: bool) -> String {
        let mut header = vec!["NAME"];
        if K::NAMESPACED {
            header.push("NAMESPACE");
        }
        header.push("CREATED");
        if wide {
            header.extend(["UID", "RESOURCE VERSION"]);
        }

        let rows = self.iter().map(|resource| row(resource, wide)).collect::<Vec<_>>();
        comfy_table::Table::new()
            .load_preset(comfy_table::presets::NOTHING)
            .set_content_arrangement(comfy_table::ContentArrangement::Dynamic)
            .set_header(header)
            .add_rows(rows)
            .to_string()
    }
}

fn row<K: FetchableResource>(resource: &K, wide: bool) -> Vec<String> {
    let mut row = vec![resource.name().to_string()];
    if K::NAMESPACED {
        row.push(resource.namespace_or_empty().to_string());
    }
    row.push(resource.created_at());
    if wide {
        row.push(resource.uid().to_string());
        row.push(resource.resource_version_or_empty().to_string());
    }
    row
}
