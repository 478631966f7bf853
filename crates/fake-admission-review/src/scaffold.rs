use k8s_openapi::{api::authentication::v1::UserInfo, apimachinery::pkg::runtime::RawExtension};
use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    admission_request::{AdmissionRequest, AdmissionReview, Operation},
    config::Config,
    errors::{Result, ReviewError},
    manifest::{self, ParsedManifest},
    old_object,
    output::{self, OutputFormat},
    resource::ResourceIdentity,
};

/// Username set inside of the `userInfo` of every generated request
pub const FAKE_USERNAME: &str = "fake-k8s-admin-review";

/// Read the manifest referenced by the configuration and return the formatted
/// AdmissionReview
pub fn run(config: &Config) -> Result<String> {
    let raw = std::fs::read(&config.manifest_path).map_err(|source| ReviewError::ReadManifest {
        path: config.manifest_path.clone(),
        source,
    })?;
    debug!(path = %config.manifest_path.display(), bytes = raw.len(), "manifest read");

    generate(&raw, config.operation, config.output)
}

/// Turn a raw YAML manifest into a formatted AdmissionReview
pub fn generate(raw: &[u8], operation: Operation, format: OutputFormat) -> Result<String> {
    let manifest = ParsedManifest::parse(raw)?;
    let review = admission_review(&manifest, operation)?;
    output::format(&review, format)
}

pub fn admission_review(manifest: &ParsedManifest, operation: Operation) -> Result<AdmissionReview> {
    let identity = ResourceIdentity::resolve(manifest.api_version(), manifest.kind());
    debug!(
        group = %identity.group,
        version = %identity.version,
        kind = %identity.kind,
        resource = %identity.resource,
        "resolved resource"
    );

    let object = if operation.has_object() {
        Some(RawExtension(manifest::yaml_to_json(manifest.raw())?))
    } else {
        None
    };
    let old_object = old_object::synthesize(manifest.fields(), operation)
        .map(|fields| RawExtension(Value::Object(fields)));

    let object_kind = identity.group_version_kind();
    let object_resource = identity.group_version_resource();

    let request = AdmissionRequest {
        uid: Uuid::new_v4().to_string(),
        kind: object_kind.clone(),
        request_kind: Some(object_kind),
        resource: object_resource.clone(),
        request_resource: Some(object_resource),
        name: manifest.name().map(str::to_owned),
        namespace: manifest.namespace().map(str::to_owned),
        operation,
        user_info: UserInfo {
            username: Some(FAKE_USERNAME.to_string()),
            uid: Some(Uuid::new_v4().to_string()),
            ..Default::default()
        },
        object,
        old_object,
        dry_run: true,
    };
    info!(uid = %request.uid, %operation, "admission request generated");

    Ok(AdmissionReview::new(request))
}
