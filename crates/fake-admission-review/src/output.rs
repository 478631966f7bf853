use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::{
    admission_request::AdmissionReview,
    errors::{Result, ReviewError},
};

const JSON_INDENT: &[u8] = b"    ";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ReviewError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "yaml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ReviewError::InvalidOutputFormat(s.to_string())),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

pub fn format(review: &AdmissionReview, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(review).map_err(ReviewError::SerializeYaml),
        OutputFormat::Json => {
            let mut buf = Vec::new();
            let mut serializer = serde_json::Serializer::with_formatter(
                &mut buf,
                PrettyFormatter::with_indent(JSON_INDENT),
            );
            review
                .serialize(&mut serializer)
                .map_err(ReviewError::SerializeJson)?;

            String::from_utf8(buf)
                .map_err(|err| ReviewError::SerializeJson(serde::ser::Error::custom(err)))
        }
    }
}
