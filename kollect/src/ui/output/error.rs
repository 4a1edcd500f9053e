use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Failed to serialize {kind} as JSON, error: {source}"))]
    SerializeJson { kind: String, source: serde_json::Error },

    #[snafu(display("Failed to serialize {kind} as YAML, error: {source}"))]
    SerializeYaml { kind: String, source: serde_yaml::Error },
}
