use clap::Args;

use crate::{
    cli::{
        Error,
        internal::{self, OutputArgs, ResourceResolver, ScopeArgs, with_resource_kind},
    },
    config::Config,
    ui::output,
};

/// Represents the `search` subcommand.
///
/// Lists every resource of a kind in the resolved scope, keeps those whose
/// names match any of the patterns and writes them in the chosen format.
#[derive(Args, Clone)]
pub struct SearchCommand {
    #[command(flatten)]
    scope: ScopeArgs,

    #[arg(
        help = "Patterns matched against resource names. A name matches if any pattern matches \
                anywhere in it. Patterns are regular expressions; if they cannot be compiled, \
                e.g. because one is not valid syntax, all of them are matched as plain text \
                instead."
    )]
    patterns: Vec<String>,

    #[command(flatten)]
    output: OutputArgs,
}

impl SearchCommand {
    /// Executes the `search` command.
    ///
    /// Without patterns every listed resource is written. No match writes an
    /// empty result and still exits with 0.
    ///
    /// # Arguments
    ///
    /// * `kube_client` - Client used to list the resources.
    /// * `config` - Supplies the default namespace, selectors and output format.
    ///
    /// # Errors
    ///
    /// Returns an `Error` if listing fails, the result cannot be rendered or
    /// stdout cannot be written.
    pub async fn run(self, kube_client: kube::Client, config: Config) -> Result<i32, Error> {
        let Self { scope, patterns, output } = self;
        let format = output.resolve(&config);
        let client = ResourceResolver::from((&kube_client, &config)).resolve(&scope);

        let rendered = with_resource_kind!(scope.kind, K => {
            let found = client.get_all::<K>().await?.search(&patterns);
            output::render(&found, format)?
        });
        internal::write_stdout(&rendered).await?;
        Ok(0)
    }
}
