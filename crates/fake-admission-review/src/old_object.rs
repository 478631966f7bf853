use serde_json::{Map, Value};
use tracing::warn;

use crate::admission_request::Operation;

/// Appended to `metadata.name` to simulate a previous revision of the object
pub const OLD_OBJECT_NAME_SUFFIX: &str = "-old";

/// Build the state of the object before the operation took place.
///
/// CREATE requests have no previous state. For DELETE requests the object being deleted
/// is the old object. For UPDATE requests the previous revision is simulated by
/// renaming the object.
///
/// The returned mapping is an independent copy: the fields of the manifest are
/// never changed.
pub fn synthesize(fields: &Map<String, Value>, operation: Operation) -> Option<Map<String, Value>> {
    match operation {
        Operation::Create => None,
        Operation::Delete => Some(fields.clone()),
        Operation::Update => Some(previous_revision(fields)),
    }
}

fn previous_revision(fields: &Map<String, Value>) -> Map<String, Value> {
    let mut old = fields.clone();

    let name = old
        .get_mut("metadata")
        .and_then(Value::as_object_mut)
        .and_then(|metadata| metadata.get_mut("name"));
    match name {
        Some(Value::String(name)) => name.push_str(OLD_OBJECT_NAME_SUFFIX),
        _ => warn!("object has no `metadata.name`, the old object is identical to the new one"),
    }

    old
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    fn pod() -> Map<String, Value> {
        fields(json!({
            "apiVersion": "v1",
            "kind": "Pod",
            "metadata": {
                "name": "foo",
                "labels": {"app": "foo"}
            },
            "spec": {"containers": [{"name": "nginx", "image": "nginx"}]}
        }))
    }

    #[test]
    fn create_has_no_old_object() {
        assert!(synthesize(&pod(), Operation::Create).is_none());
    }

    #[test]
    fn delete_keeps_the_object_unchanged() {
        let original = pod();
        let old = synthesize(&original, Operation::Delete).expect("old object expected");

        assert_eq!(old, original);
    }

    #[test]
    fn update_renames_the_old_object() {
        let original = pod();
        let old = synthesize(&original, Operation::Update).expect("old object expected");

        assert_eq!(old["metadata"]["name"], json!("foo-old"));
        assert_eq!(old["metadata"]["labels"], original["metadata"]["labels"]);
        assert_eq!(old["spec"], original["spec"]);
    }

    #[test]
    fn update_does_not_touch_the_original() {
        let original = pod();
        let _old = synthesize(&original, Operation::Update);

        assert_eq!(original["metadata"]["name"], json!("foo"));
        assert_eq!(original, pod());
    }

    #[rstest]
    #[case::no_metadata(json!({"apiVersion": "v1", "kind": "Pod"}))]
    #[case::metadata_not_a_mapping(json!({"apiVersion": "v1", "kind": "Pod", "metadata": "foo"}))]
    #[case::no_name(json!({"apiVersion": "v1", "kind": "Pod", "metadata": {"generateName": "foo-"}}))]
    #[case::name_not_a_string(json!({"apiVersion": "v1", "kind": "Pod", "metadata": {"name": 42}}))]
    fn update_without_a_renamable_name(#[case] object: Value) {
        let original = fields(object);
        let old = synthesize(&original, Operation::Update).expect("old object expected");

        assert_eq!(old, original);
    }
}
