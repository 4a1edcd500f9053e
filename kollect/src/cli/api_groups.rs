use clap::Args;
use kube::api::ListParams;

use crate::{
    cli::{Error, internal},
    fetch::ResourceClient,
};

/// Represents the `api-groups` subcommand. It takes no arguments.
#[derive(Args, Clone)]
pub struct ApiGroupsCommand {}

impl ApiGroupsCommand {
    /// Prints the group version of every API group served by the cluster,
    /// one per line.
    ///
    /// # Errors
    ///
    /// Returns an `Error` if API discovery fails or stdout cannot be written.
    pub async fn run(self, kube_client: kube::Client) -> Result<i32, Error> {
        let client = ResourceClient::new(kube_client, None, ListParams::default());
        let groups = client.api_groups().await?;
        internal::write_stdout(&groups.into_iter().map(|group| format!("{group}\n")).collect::<String>())
            .await?;
        Ok(0)
    }
}
