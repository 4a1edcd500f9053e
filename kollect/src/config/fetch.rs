use kube::api::ListParams;
use serde::{Deserialize, Serialize};

/// Options applied to every list request.
#[derive(Clone, Debug, Default, Deserialize, Eq, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FetchConfig {
    /// Restricts lists to resources whose labels match, e.g. `app=web`.
    #[serde(default)]
    pub label_selector: Option<String>,

    /// Restricts lists to resources whose fields match, e.g.
    /// `status.phase=Running`.
    #[serde(default)]
    pub field_selector: Option<String>,

    /// Maximum number of resources returned by a single list.
    #[serde(default)]
    pub limit: Option<u32>,
}

impl FetchConfig {
    pub fn list_params(&self) -> ListParams {
        let Self { label_selector, field_selector, limit } = self;
        ListParams {
            label_selector: label_selector.clone().filter(|s| !s.is_empty()),
            field_selector: field_selector.clone().filter(|s| !s.is_empty()),
            limit: *limit,
            ..ListParams::default()
        }
    }
}
