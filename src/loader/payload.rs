use serde_json::Value;
use std::io::Read;
use std::path::Path;

use super::error::RuleFileError;
use crate::error_utils::{create_named_source, span_at};

/// Read a JSON payload from `path`, or from stdin when the path is `-`
pub fn read_payload(path: &Path) -> Result<Value, RuleFileError> {
    let content = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| RuleFileError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        buffer
    } else {
        std::fs::read_to_string(path).map_err(|source| RuleFileError::Read {
            path: path.to_path_buf(),
            source,
        })?
    };

    parse_payload(path, content)
}

/// Parse a JSON request body, pointing at the offending character on failure
pub fn parse_payload(path: &Path, content: String) -> Result<Value, RuleFileError> {
    serde_json::from_str(&content).map_err(|e| {
        let span = span_at(&content, e.line(), e.column());
        RuleFileError::Parse {
            name: path.display().to_string(),
            reason: e.to_string(),
            src: create_named_source(path, content.clone()),
            span: Some(span),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_payload_preserves_key_order() {
        let value = parse_payload(Path::new("body.json"), r#"{"b": 1, "a": [2]}"#.to_string())
            .unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(value["a"], json!([2]));
    }

    #[test]
    fn test_parse_error_points_at_source() {
        let err = parse_payload(Path::new("body.json"), "{\"a\": }".to_string()).unwrap_err();
        match err {
            RuleFileError::Parse { name, span, .. } => {
                assert_eq!(name, "body.json");
                let offset = span.unwrap().offset();
                assert!((5..=6).contains(&offset), "offset {offset}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = read_payload(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, RuleFileError::Read { .. }));
    }
}
