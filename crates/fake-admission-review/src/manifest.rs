use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::{Result, ReviewError};

/// A Kubernetes object read from a YAML manifest.
///
/// The object is kept as a generic JSON mapping: the tool must handle any kind of
/// resource, including custom ones, so no typed representation is attempted.
/// The raw bytes are retained because the `object` of the admission request is
/// built straight from them.
#[derive(Clone, Debug)]
pub struct ParsedManifest {
    api_version: String,
    kind: String,
    fields: Map<String, Value>,
    raw: Vec<u8>,
}

impl ParsedManifest {
    pub fn parse(raw: &[u8]) -> Result<Self> {
        let value = first_document(raw, ReviewError::ParseManifest)?;
        let Value::Object(fields) = value else {
            return Err(ReviewError::ManifestNotMapping);
        };

        let api_version = string_field(&fields, "apiVersion")?;
        let kind = string_field(&fields, "kind")?;

        Ok(ParsedManifest {
            api_version,
            kind,
            fields,
            raw: raw.to_vec(),
        })
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn name(&self) -> Option<&str> {
        self.metadata_str("name")
    }

    pub fn namespace(&self) -> Option<&str> {
        self.metadata_str("namespace")
    }

    fn metadata_str(&self, key: &str) -> Option<&str> {
        self.fields
            .get("metadata")
            .and_then(Value::as_object)
            .and_then(|metadata| metadata.get(key))
            .and_then(Value::as_str)
    }
}

fn string_field(fields: &Map<String, Value>, key: &'static str) -> Result<String> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(ReviewError::MissingField(key))
}

/// Convert a YAML document into its JSON representation
pub fn yaml_to_json(raw: &[u8]) -> Result<Value> {
    first_document(raw, ReviewError::YamlToJson)
}

/// Decode the first document of a YAML stream, any following document is ignored.
/// Merge keys (`<<`) are resolved.
fn first_document(raw: &[u8], map_err: fn(serde_yaml::Error) -> ReviewError) -> Result<Value> {
    let document = serde_yaml::Deserializer::from_slice(raw)
        .next()
        .ok_or(ReviewError::EmptyManifest)?;

    let mut value = serde_yaml::Value::deserialize(document).map_err(map_err)?;
    value.apply_merge().map_err(map_err)?;
    serde_yaml::from_value(value).map_err(map_err)
}
