use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("{source}"))]
    Configuration { source: crate::config::Error },

    #[snafu(display("{source}"))]
    Fetch { source: crate::fetch::Error },

    #[snafu(display("{source}"))]
    Output { source: crate::ui::output::Error },

    #[snafu(display("Failed to write to stdout, error: {source}"))]
    WriteStdout { source: std::io::Error },

    #[snafu(display("Failed to write to stderr, error: {source}"))]
    WriteStderr { source: std::io::Error },

    #[snafu(display("Failed to initialize Kubernetes client configuration, error: {source}"))]
    KubeConfig {
        #[snafu(source(from(kube::Error, Box::new)))]
        source: Box<kube::Error>,
    },

    #[snafu(display("Failed to create tokio runtime, error: {source}"))]
    InitializeTokioRuntime { source: std::io::Error },
}

impl From<crate::config::Error> for Error {
    fn from(source: crate::config::Error) -> Self { Self::Configuration { source } }
}

impl From<crate::fetch::Error> for Error {
    fn from(source: crate::fetch::Error) -> Self { Self::Fetch { source } }
}

impl From<crate::ui::output::Error> for Error {
    fn from(source: crate::ui::output::Error) -> Self { Self::Output { source } }
}
