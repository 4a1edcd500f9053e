use clap::Args;

use crate::{
    cli::internal::ResourceKind,
    config::{Config, OutputFormat},
};

/// Arguments selecting which resources a command fetches.
#[derive(Args, Clone, Debug)]
pub struct ScopeArgs {
    #[arg(
        help = "Kind of resource: pods, nodes, services, deployments, daemonsets, replicasets, \
                secrets or ingresses. Singular forms and short names (po, svc, deploy, ...) are \
                accepted."
    )]
    pub kind: ResourceKind,

    #[arg(
        short,
        long,
        env = kollect_base::consts::env::NAMESPACE,
        help = "Kubernetes namespace to fetch from. Defaults to the configured namespace, then to \
                the current Kubernetes context's namespace."
    )]
    pub namespace: Option<String>,

    #[arg(
        short = 'A',
        long,
        help = "List resources across all namespaces. Lookups by name still use the default \
                namespace."
    )]
    pub all_namespaces: bool,

    #[arg(
        short = 'l',
        long = "selector",
        help = "Label selector applied when listing, e.g. app=web. Overrides the configured one."
    )]
    pub label_selector: Option<String>,

    #[arg(
        long = "field-selector",
        help = "Field selector applied when listing, e.g. status.phase=Running. Overrides the \
                configured one."
    )]
    pub field_selector: Option<String>,
}

#[derive(Args, Clone, Debug)]
pub struct OutputArgs {
    #[arg(
        short,
        long,
        help = "Output format: table, wide, json, yaml or name. Defaults to the configured format."
    )]
    pub output: Option<OutputFormat>,
}

impl OutputArgs {
    pub fn resolve(&self, config: &Config) -> OutputFormat { self.output.unwrap_or(config.output) }
}
