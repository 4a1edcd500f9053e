use clap::Args;
use kollect_collection::Collection;

use crate::{
    cli::{
        Error,
        internal::{self, OutputArgs, ResourceResolver, ScopeArgs, with_resource_kind},
    },
    config::{Config, OutputFormat},
    fetch::{FetchableResource, Resolution, ResourceClient},
    ui::output,
};

/// Exit code of a `get` that found some, but not all, of the named resources.
const EXIT_CODE_PARTIAL: i32 = 2;

/// Represents the `get` subcommand.
///
/// Lists every resource of a kind when no names are given, otherwise looks
/// the named resources up.
#[derive(Args, Clone)]
pub struct GetCommand {
    #[command(flatten)]
    scope: ScopeArgs,

    #[arg(help = "Names of the resources to get. Every resource of the kind is listed if omitted.")]
    names: Vec<String>,

    #[command(flatten)]
    output: OutputArgs,
}

impl GetCommand {
    /// Writes the requested resources to stdout.
    ///
    /// When several names are given, the resources that could be fetched are
    /// written even if others are missing; the missing ones are reported on
    /// stderr and the exit code becomes 2.
    ///
    /// # Arguments
    ///
    /// * `kube_client` - Client used for the list or lookups.
    /// * `config` - Supplies the default namespace, selectors and output format.
    ///
    /// # Errors
    ///
    /// Returns an `Error` if the list fails, a single named resource cannot be
    /// fetched, none of several names resolve, or the output cannot be written.
    pub async fn run(self, kube_client: kube::Client, config: Config) -> Result<i32, Error> {
        let Self { scope, names, output } = self;
        let format = output.resolve(&config);
        let client = ResourceResolver::from((&kube_client, &config)).resolve(&scope);

        with_resource_kind!(scope.kind, K => get::<K>(&client, &names, format).await)
    }
}

async fn get<K: FetchableResource>(
    client: &ResourceClient,
    names: &[String],
    format: OutputFormat,
) -> Result<i32, Error> {
    let (collection, failures) = match names {
        [] => (client.get_all::<K>().await?, None),
        [name] => (Collection::from_resources(vec![client.get_one::<K>(name).await?]), None),
        _ => {
            let Resolution { collection, failures } = client.get_many::<K>(names).await?;
            (collection, Some(failures))
        }
    };

    internal::write_stdout(&output::render(&collection, format)?).await?;

    match failures {
        Some(failures) if !failures.is_empty() => {
            internal::write_stderr(&format!("{failures}\n")).await?;
            Ok(EXIT_CODE_PARTIAL)
        }
        _ => Ok(0),
    }
}
