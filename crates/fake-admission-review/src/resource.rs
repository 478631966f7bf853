use crate::admission_request::{GroupVersionKind, GroupVersionResource};

/// Plurals that the suffix rules below would get wrong.
const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("policy", "policies"),
    ("networkpolicy", "networkpolicies"),
    ("ingress", "ingresses"),
];

/// The identity of the resource described by a manifest.
///
/// Some information about a resource cannot be inferred from the object itself, the
/// plural name being the most relevant one. Obtaining it requires a connection to an
/// API server, so the plural name is guessed by [`pluralize`] instead. Callers that
/// need authoritative names have to map them on their own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceIdentity {
    pub group: String,
    pub version: String,
    pub kind: String,
    pub resource: String,
}

impl ResourceIdentity {
    pub fn resolve(api_version: &str, kind: &str) -> Self {
        let (group, version) = match api_version.split_once('/') {
            Some((group, version)) => (group, version),
            // core API group, e.g. `v1`
            None => ("", api_version),
        };

        ResourceIdentity {
            group: group.to_string(),
            version: version.to_string(),
            kind: kind.to_string(),
            resource: pluralize(kind),
        }
    }

    pub fn group_version_kind(&self) -> GroupVersionKind {
        GroupVersionKind {
            group: self.group.clone(),
            version: self.version.clone(),
            kind: self.kind.clone(),
        }
    }

    pub fn group_version_resource(&self) -> GroupVersionResource {
        GroupVersionResource {
            group: self.group.clone(),
            version: self.version.clone(),
            resource: self.resource.clone(),
        }
    }
}

/// Guess the plural resource name of a Kind.
///
/// Kinds ending with a `y` always get `ies`, even when the `y` follows a vowel:
/// `Gateway` becomes `gatewaies`.
pub fn pluralize(kind: &str) -> String {
    let singular = kind.to_lowercase();

    if let Some((_, plural)) = IRREGULAR_PLURALS
        .iter()
        .find(|(irregular, _)| *irregular == singular)
    {
        return plural.to_string();
    }

    if singular.ends_with('s') {
        format!("{singular}es")
    } else if let Some(stem) = singular.strip_suffix('y') {
        format!("{stem}ies")
    } else {
        format!("{singular}s")
    }
}
