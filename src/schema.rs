//! Schema loading and draft-4 validation
//!
//! The response schemas use two custom formats on top of draft-4:
//!
//! - `none`: the field must be exactly JSON null.
//! - `myinteger`: the field must be an integer or a string that parses
//!   losslessly as one.
//!
//! Both are plain predicates registered on each validator instance at
//! construction time, never process-global state. The `jsonschema` crate
//! only runs format checks on string instances; the schema files pair each
//! `format` with a `type` union so the null and numeric cases are carried
//! by the type check.

use std::fs;
use std::path::{Path, PathBuf};

use jsonschema::{Draft, Validator};
use serde_json::Value;

use crate::common::{Error, Result};

/// True iff the value is JSON null.
pub fn is_none(value: &Value) -> bool {
    value.is_null()
}

/// True for native integers and for strings that parse as integers.
/// Anything else, including unparsable strings, is simply not valid.
pub fn is_integer_like(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.is_i64() || n.is_u64(),
        Value::String(s) => parses_as_integer(s),
        _ => false,
    }
}

fn parses_as_integer(s: &str) -> bool {
    s.trim().parse::<i64>().is_ok()
}

/// Compile a schema document as draft-4 with the custom formats attached.
pub fn compile(schema: &Value, name: &str) -> Result<Validator> {
    jsonschema::options()
        .with_draft(Draft::Draft4)
        .should_validate_formats(true)
        // A string can never be the null sentinel.
        .with_format("none", |_: &str| false)
        .with_format("myinteger", parses_as_integer)
        .build(schema)
        .map_err(|e| Error::SchemaCompile {
            name: name.to_string(),
            message: e.to_string(),
        })
}

/// Every violation found while walking `document`, one formatted entry per
/// error. An empty vec means the document conforms.
pub fn validation_failures(validator: &Validator, document: &Value) -> Vec<String> {
    validator
        .iter_errors(document)
        .map(|error| format!("{} (at {})", error, error.instance_path))
        .collect()
}

/// Loads named schema files from a fixed directory and hands out compiled
/// validators.
#[derive(Debug, Clone)]
pub struct SchemaStore {
    dir: PathBuf,
}

impl SchemaStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory schemas are loaded from
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load `file_name` from the store directory and compile it.
    ///
    /// The file is opened, read, and closed within this call; nothing is
    /// cached between calls.
    pub fn validator_for(&self, file_name: &str) -> Result<Validator> {
        let path = self.dir.join(file_name);
        let content = fs::read_to_string(&path).map_err(|e| Error::SchemaRead {
            path: path.display().to_string(),
            source: e,
        })?;
        let schema: Value = serde_json::from_str(&content).map_err(|e| Error::SchemaParse {
            path: path.display().to_string(),
            source: e,
        })?;
        compile(&schema, file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn is_none_accepts_only_null() {
        assert!(is_none(&json!(null)));
        assert!(!is_none(&json!(0)));
        assert!(!is_none(&json!("")));
        assert!(!is_none(&json!(false)));
        assert!(!is_none(&json!([])));
    }

    #[test]
    fn is_integer_like_accepts_integers_and_integer_strings() {
        assert!(is_integer_like(&json!(42)));
        assert!(is_integer_like(&json!("42")));
        assert!(is_integer_like(&json!("-7")));
        assert!(is_integer_like(&json!(" 42 ")));
    }

    #[test]
    fn is_integer_like_rejects_everything_else() {
        assert!(!is_integer_like(&json!("abc")));
        assert!(!is_integer_like(&json!(null)));
        assert!(!is_integer_like(&json!("3.14")));
        assert!(!is_integer_like(&json!(3.14)));
        assert!(!is_integer_like(&json!([42])));
    }

    fn id_schema() -> Value {
        json!({
            "$schema": "http://json-schema.org/draft-04/schema#",
            "type": "object",
            "required": ["id"],
            "properties": {
                "id": {"type": ["string", "integer"], "format": "myinteger"},
                "parent": {"type": ["string", "null"], "format": "none"}
            }
        })
    }

    #[test]
    fn conforming_document_has_no_failures() {
        let validator = compile(&id_schema(), "id_schema").unwrap();
        let doc = json!({"id": "113", "parent": null});
        assert!(validation_failures(&validator, &doc).is_empty());
        // iter_errors holds no state between walks
        assert!(validation_failures(&validator, &doc).is_empty());
    }

    #[test]
    fn myinteger_format_rejects_non_integer_strings() {
        let validator = compile(&id_schema(), "id_schema").unwrap();
        let failures = validation_failures(&validator, &json!({"id": "abc"}));
        assert_eq!(failures.len(), 1);
        assert!(failures[0].contains("/id"), "unexpected path: {}", failures[0]);
    }

    #[test]
    fn none_format_accepts_only_null() {
        let validator = compile(&id_schema(), "id_schema").unwrap();
        assert!(validation_failures(&validator, &json!({"id": 1, "parent": null})).is_empty());
        assert!(!validation_failures(&validator, &json!({"id": 1, "parent": "x"})).is_empty());
        assert!(!validation_failures(&validator, &json!({"id": 1, "parent": 5})).is_empty());
    }

    #[test]
    fn every_violation_is_collected() {
        let validator = compile(&id_schema(), "id_schema").unwrap();
        let failures = validation_failures(&validator, &json!({"id": "abc", "parent": 5}));
        assert_eq!(failures.len(), 2);
    }

    #[test]
    fn missing_schema_file_is_a_read_error() {
        let store = SchemaStore::new(std::env::temp_dir());
        let err = store.validator_for("no_such_schema.json").unwrap_err();
        assert!(matches!(err, Error::SchemaRead { .. }));
    }

    #[test]
    fn malformed_schema_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.json"), "{not json").unwrap();
        let store = SchemaStore::new(dir.path());
        let err = store.validator_for("broken.json").unwrap_err();
        assert!(matches!(err, Error::SchemaParse { .. }));
    }

    #[test]
    fn shipped_schemas_compile() {
        let store = SchemaStore::new(concat!(env!("CARGO_MANIFEST_DIR"), "/schemas"));
        for name in [
            "schema_areas.json",
            "schema_employers.json",
            "schema_vacancies.json",
        ] {
            store.validator_for(name).unwrap();
        }
    }
}
