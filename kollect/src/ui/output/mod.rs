//! Renders collections in every [`OutputFormat`].
//!
//! `json` and `yaml` write the whole collection envelope (`apiVersion`,
//! `kind`, `items`), so the output can be fed back to other tools. `name`
//! writes one `kind/name` line per resource, like `kubectl get -o name`.

mod error;

use kollect_collection::{Collection, NamedItem};
use snafu::ResultExt;

pub use self::error::Error;
use crate::{config::OutputFormat, fetch::FetchableResource, ui::table::CollectionTableExt};

/// Renders `collection` as `format`. The result always ends with a newline
/// unless it is empty.
///
/// # Errors
///
/// Returns an `Error` if the collection cannot be serialized.
pub fn render<K>(collection: &Collection<K>, format: OutputFormat) -> Result<String, Error>
where
    K: FetchableResource,
{
    let mut rendered = match format {
        OutputFormat::Table => collection.render_table(false),
        OutputFormat::Wide => collection.render_table(true),
        OutputFormat::Json => serde_json::to_string_pretty(collection)
            .with_context(|_| error::SerializeJsonSnafu { kind: collection.kind() })?,
        OutputFormat::Yaml => serde_yaml::to_string(collection)
            .with_context(|_| error::SerializeYamlSnafu { kind: collection.kind() })?,
        OutputFormat::Name => {
            let kind = K::KIND.to_lowercase();
            collection.iter().map(|resource| format!("{kind}/{}\n", resource.name())).collect()
        }
    };

    if !rendered.is_empty() && !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}

/// Renders only the names of `collection`, one per line.
pub fn render_names<K: NamedItem>(collection: &Collection<K>) -> String {
    collection.names().into_iter().map(|name| format!("{name}\n")).collect()
}
