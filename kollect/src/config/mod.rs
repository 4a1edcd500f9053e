mod error;
mod fetch;
mod output_format;

use std::path::{Path, PathBuf};

use kollect_cli::config::LogConfig;
use resolve_path::PathResolveExt;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

pub use self::{error::Error, fetch::FetchConfig, output_format::OutputFormat};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Namespace used when the command line does not name one. Falls back to
    /// the namespace of the current kubeconfig context when unset.
    #[serde(default)]
    pub default_namespace: Option<String>,

    #[serde(default)]
    pub output: OutputFormat,

    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default = "LogConfig::default")]
    pub log: LogConfig,
}

impl Config {
    pub fn search_config_file_path() -> PathBuf {
        let paths = vec![Self::default_path()]
            .into_iter()
            .chain(kollect_base::fallback_project_config_directories().into_iter().map(
                |mut path| {
                    path.push(kollect_base::CLI_CONFIG_NAME);
                    path
                },
            ))
            .collect::<Vec<_>>();
        for path in paths {
            let Ok(exists) = path.try_exists() else {
                continue;
            };
            if exists {
                return path;
            }
        }
        Self::default_path()
    }

    #[inline]
    pub fn default_path() -> PathBuf {
        [kollect_base::PROJECT_CONFIG_DIR.to_path_buf(), PathBuf::from(kollect_base::CLI_CONFIG_NAME)]
            .into_iter()
            .collect()
    }

    /// Loads the configuration from `path`.
    ///
    /// A missing file is not an error: every setting has a default, so the
    /// defaults are returned instead.
    ///
    /// # Errors
    ///
    /// Returns an `Error` if the path cannot be resolved, the file exists but
    /// cannot be read, or its content is not a valid configuration.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path
            .as_ref()
            .try_resolve()
            .map(|path| path.to_path_buf())
            .with_context(|_| error::ResolveFilePathSnafu { file_path: path.as_ref().to_path_buf() })?;

        if !path.try_exists().unwrap_or(false) {
            return Ok(Self::default());
        }

        let mut config: Self = {
            let data =
                std::fs::read(&path).context(error::OpenConfigSnafu { filename: path.clone() })?;
            serde_yaml::from_slice(&data).context(error::ParseConfigSnafu { filename: path })?
        };

        config.log.file_path = match config.log.file_path.map(|path| {
            path.try_resolve()
                .map(|path| path.to_path_buf())
                .with_context(|_| error::ResolveFilePathSnafu { file_path: path.clone() })
        }) {
            Some(Ok(path)) => Some(path),
            Some(Err(err)) => return Err(err),
            None => None,
        };

        config.default_namespace = config.default_namespace.filter(|ns| !ns.is_empty());

        Ok(config)
    }

    /// Renders the default configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns an `Error` if the configuration cannot be serialized.
    pub fn template_basic() -> Result<String, Error> {
        serde_yaml::to_string(&Self::default()).context(error::SerializeConfigSnafu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("kollect-{}-{name}.yaml", std::process::id()))
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::load(temp_config_path("does-not-exist")).unwrap();
        assert_eq!(config.output, OutputFormat::Table);
        assert!(config.default_namespace.is_none());
        assert_eq!(config.fetch, FetchConfig::default());
    }

    #[test]
    fn test_load_partial_file() {
        let path = temp_config_path("partial");
        std::fs::write(
            &path,
            "defaultNamespace: kube-system\noutput: wide\nfetch:\n  labelSelector: app=web\n  \
             limit: 10\nlog:\n  level: debug\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.default_namespace.as_deref(), Some("kube-system"));
        assert_eq!(config.output, OutputFormat::Wide);
        assert_eq!(config.fetch.label_selector.as_deref(), Some("app=web"));
        assert_eq!(config.fetch.limit, Some(10));
        assert_eq!(config.log.level, tracing::Level::DEBUG);
    }

    #[test]
    fn test_empty_default_namespace_is_ignored() {
        let path = temp_config_path("empty-namespace");
        std::fs::write(&path, "defaultNamespace: ''\n").unwrap();

        let config = Config::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(config.default_namespace.is_none());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let path = temp_config_path("invalid");
        std::fs::write(&path, "output: [not, a, format]\n").unwrap();

        let result = Config::load(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(Error::ParseConfig { .. })));
    }

    #[test]
    fn test_template_parses_back() {
        let template = Config::template_basic().unwrap();
        let config: Config = serde_yaml::from_str(&template).unwrap();
        assert_eq!(config.output, OutputFormat::Table);
        assert_eq!(config.log.level, LogConfig::default_log_level());
    }

    #[test]
    fn test_default_path_ends_with_config_name() {
        assert!(Config::default_path().ends_with(kollect_base::CLI_CONFIG_NAME));
    }
}
