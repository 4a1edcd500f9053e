use clap::Args;

use crate::{
    cli::{
        Error,
        internal::{self, ResourceResolver, ScopeArgs, with_resource_kind},
    },
    config::Config,
    ui::output,
};

/// Represents the `names` subcommand, which prints only resource names.
#[derive(Args, Clone)]
pub struct NamesCommand {
    #[command(flatten)]
    scope: ScopeArgs,

    #[arg(help = "Patterns matched against resource names, as for `search`. Every name is \
                  printed if omitted.")]
    patterns: Vec<String>,
}

impl NamesCommand {
    /// Executes the `names` command, writing one matching name per line.
    ///
    /// # Errors
    ///
    /// Returns an `Error` if listing fails or stdout cannot be written.
    pub async fn run(self, kube_client: kube::Client, config: Config) -> Result<i32, Error> {
        let Self { scope, patterns } = self;
        let client = ResourceResolver::from((&kube_client, &config)).resolve(&scope);

        let names = with_resource_kind!(scope.kind, K => {
            output::render_names(&client.get_all::<K>().await?.search(&patterns))
        });
        internal::write_stdout(&names).await?;
        Ok(0)
    }
}
