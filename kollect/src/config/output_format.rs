use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use snafu::Snafu;

/// How fetched resources are written to stdout.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Wide,
    Json,
    Yaml,
    Name,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val = match self {
            Self::Table => "table",
            Self::Wide => "wide",
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Name => "name",
        };
        f.write_str(val)
    }
}

impl FromStr for OutputFormat {
    type Err = ParseOutputFormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "wide" => Ok(Self::Wide),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "name" => Ok(Self::Name),
            _ => Err(ParseOutputFormatError::Invalid { value: value.to_string() }),
        }
    }
}

#[derive(Debug, Snafu)]
pub enum ParseOutputFormatError {
    #[snafu(display("'{value}' is not a valid output format, expected one of table, wide, json, yaml, name"))]
    Invalid { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
    }

    #[test]
    fn test_display_parses_back() {
        for format in [
            OutputFormat::Table,
            OutputFormat::Wide,
            OutputFormat::Json,
            OutputFormat::Yaml,
            OutputFormat::Name,
        ] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_parse_invalid() {
        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, ParseOutputFormatError::Invalid { ref value } if value == "xml"));
    }

    #[test]
    fn test_serde_uses_lowercase() {
        assert_eq!(serde_yaml::to_string(&OutputFormat::Wide).unwrap().trim(), "wide");
        assert_eq!(serde_yaml::from_str::<OutputFormat>("name").unwrap(), OutputFormat::Name);
    }
}
