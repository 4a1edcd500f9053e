//! The `kollect` command line.
//!
//! # Examples
//!
//! ```bash
//! # List every pod in the current namespace
//! kollect get pods
//!
//! # Get two deployments by name, keeping whichever exist
//! kollect get deploy web api -n shop
//!
//! # Find services whose names start with `web` or contain `api`, as YAML
//! kollect search svc '^web' api -A -o yaml
//!
//! # Print the names of matching nodes
//! kollect names nodes worker
//! ```

mod api_groups;
pub mod error;
mod get;
mod internal;
mod names;
mod search;

use std::{io::Write, path::PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use snafu::ResultExt;
use tokio::runtime::Runtime;

pub use self::error::Error;
use self::{
    api_groups::ApiGroupsCommand, get::GetCommand, names::NamesCommand, search::SearchCommand,
};
use crate::{config::Config, shadow};

/// The entry point of the `kollect` command line.
///
/// Parses the arguments and dispatches to the subcommands.
#[derive(Parser)]
#[command(
    name = kollect_base::CLI_PROGRAM_NAME,
    author,
    version,
    long_version = shadow::CLAP_LONG_VERSION,
    about = "Kollect: fetch, look up and search collections of Kubernetes resources.",
    long_about = "Kollect fetches pods, nodes, services, deployments, daemon sets, replica sets, \
                  secrets and ingresses from a Kubernetes cluster. Resources can be listed, \
                  looked up by exact name, or searched by name with regular expressions, and \
                  are written as a table, JSON, YAML or plain names.",
    color = clap::ColorChoice::Always
)]
pub struct Cli {
    /// The subcommand to execute.
    #[clap(subcommand)]
    commands: Option<Commands>,

    /// Path to the configuration file. When absent, the default locations
    /// are searched.
    #[clap(
        long = "config",
        short = 'c',
        env = kollect_base::consts::env::CONFIG_FILE_PATH,
        help = "Specify a configuration file. Defaults to ~/.config/kollect/config.yaml or \
                KOLLECT_CONFIG_FILE_PATH env var."
    )]
    config_file: Option<PathBuf>,

    /// Overrides the `log.level` setting of the configuration file.
    #[clap(
        long = "log-level",
        env = kollect_base::consts::env::LOG_LEVEL,
        help = "Set the logging level (e.g., info, debug, trace)."
    )]
    log_level: Option<tracing::Level>,
}

/// The subcommands of the `kollect` command line.
///
/// `version --client`, `completions` and `default-config` work offline;
/// every other subcommand talks to the cluster.
#[derive(Clone, Subcommand)]
pub enum Commands {
    #[command(about = "Display client and server version information")]
    Version {
        #[clap(long = "client", help = "If true, shows client version only (no server required).")]
        client: bool,
    },

    #[command(about = "Generate shell completion script for the specified shell (bash, zsh, fish)")]
    Completions { shell: clap_complete::Shell },

    #[command(about = "Output the default configuration in YAML format")]
    DefaultConfig,

    #[command(alias = "g", about = "List resources of a kind, or get them by name")]
    Get(GetCommand),

    #[command(alias = "s", about = "Search resources of a kind by name patterns")]
    Search(SearchCommand),

    #[command(alias = "n", about = "Print the names of resources of a kind, optionally filtered")]
    Names(NamesCommand),

    #[command(about = "List the API group versions served by the cluster")]
    ApiGroups(ApiGroupsCommand),
}

impl Default for Cli {
    fn default() -> Self { Self::parse() }
}

impl Cli {
    /// Loads the configuration file, then applies the overrides given on
    /// the command line.
    fn load_config(
        config_file: Option<PathBuf>,
        // Overrides the `log.level` setting of the configuration file.
        log_level: Option<tracing::Level>,
    ) -> Result<Config, Error> {
        let mut config = Config::load(config_file.unwrap_or_else(Config::search_config_file_path))?;

        if let Some(log_level) = log_level {
            config.log.level = log_level;
        }

        Ok(config)
    }

    /// Runs the parsed command and returns the process exit code.
    ///
    /// `version --client`, `completions` and `default-config` run without
    /// touching the cluster. Every other command loads the configuration,
    /// sets up logging and connects with the default kubeconfig.
    ///
    /// # Errors
    ///
    /// Returns an `Error` if the configuration cannot be loaded, the
    /// Kubernetes client or the tokio runtime cannot be created, or the
    /// command itself fails.
    pub fn run(self) -> Result<i32, Error> {
        let Self { commands, config_file, log_level } = self;
        let client_version = Self::command().get_version().unwrap_or_default().to_string();

        let Some(commands) = commands else {
            let help = Self::command().render_long_help().ansi().to_string();
            std::io::stderr().write_all(help.as_bytes()).context(error::WriteStderrSnafu)?;
            return Ok(-1);
        };

        match commands {
            Commands::Version { client: true } => {
                let mut stdout = std::io::stdout();
                stdout
                    .write_all(Self::command().render_long_version().as_bytes())
                    .context(error::WriteStdoutSnafu)?;
                stdout
                    .write_all(format!("Client Version: {client_version}\n").as_bytes())
                    .context(error::WriteStdoutSnafu)?;
                return Ok(0);
            }
            Commands::Completions { shell } => {
                let mut app = Self::command();
                let bin_name = app.get_name().to_string();
                clap_complete::generate(shell, &mut app, bin_name, &mut std::io::stdout());
                return Ok(0);
            }
            Commands::DefaultConfig => {
                std::io::stdout()
                    .write_all(Config::template_basic()?.as_bytes())
                    .context(error::WriteStdoutSnafu)?;
                return Ok(0);
            }
            _ => {}
        }

        let config = Self::load_config(config_file, log_level)?;
        config.log.registry();

        let fut = async move {
            let kube_client = kube::Client::try_default().await.context(error::KubeConfigSnafu)?;
            match commands {
                Commands::Version { .. } => {
                    let server_version = kube_client.apiserver_version().await.map_or_else(
                        |_| "unknown".to_string(),
                        |info| format!("{}.{}", info.major, info.minor),
                    );
                    let info = format!(
                        "{}Client Version: {client_version}\nServer Version: {server_version}\n",
                        Self::command().render_long_version()
                    );
                    std::io::stdout().write_all(info.as_bytes()).context(error::WriteStdoutSnafu)?;
                    Ok(0)
                }
                Commands::Get(cmd) => cmd.run(kube_client, config).await,
                Commands::Search(cmd) => cmd.run(kube_client, config).await,
                Commands::Names(cmd) => cmd.run(kube_client, config).await,
                Commands::ApiGroups(cmd) => cmd.run(kube_client).await,
                Commands::Completions { .. } | Commands::DefaultConfig => Ok(0),
            }
        };

        Runtime::new().context(error::InitializeTokioRuntimeSnafu)?.block_on(fut)
    }
}
