use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReviewError>;

#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("`file` parameter is mandatory, usage: --file=<path/to/yaml/file>")]
    EmptyFilePath,

    #[error(
        "invalid `operation` parameter: {0}, usage: --operation=create or --operation=update or --operation=delete"
    )]
    InvalidOperation(String),

    #[error("invalid `output` parameter: {0}, usage: --output=yaml or --output=json")]
    InvalidOutputFormat(String),

    #[error("failed to read manifest file {path}: {source}")]
    ReadManifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to unmarshal YAML: {0}")]
    ParseManifest(#[source] serde_yaml::Error),

    #[error("manifest does not contain any YAML document")]
    EmptyManifest,

    #[error("manifest is not a YAML mapping")]
    ManifestNotMapping,

    #[error("failed to retrieve `{0}` from object or it's not a string")]
    MissingField(&'static str),

    #[error("failed to convert YAML to JSON: {0}")]
    YamlToJson(#[source] serde_yaml::Error),

    #[error("failed to marshal to YAML: {0}")]
    SerializeYaml(#[source] serde_yaml::Error),

    #[error("failed to marshal to JSON: {0}")]
    SerializeJson(#[source] serde_json::Error),
}
