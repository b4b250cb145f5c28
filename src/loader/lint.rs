//! Rule-author warnings for rule trees the engine accepts but partly ignores.

use crate::models::{FieldKind, RuleNode, RuleSet};

/// Collect warnings for every rule in `rules`, with dotted field paths
pub fn lint_rules(rules: &RuleSet) -> Vec<String> {
    let mut warnings = Vec::new();
    for (field, rule) in rules {
        lint_rule(field, field, rule, false, &mut warnings);
    }
    warnings
}

fn lint_rule(path: &str, field: &str, rule: &RuleNode, nested: bool, warnings: &mut Vec<String>) {
    let shaped_as_scalar = matches!(
        rule.kind,
        FieldKind::String | FieldKind::Integer | FieldKind::Base64
    );

    if rule.children.is_some() && shaped_as_scalar {
        warnings.push(format!(
            "{path}: children are only applied to array values, but the field is declared as {}",
            rule.kind
        ));
    }

    if rule.has_cardinality() && shaped_as_scalar {
        warnings.push(format!(
            "{path}: minCount/maxCount only apply to array values, but the field is declared as {}",
            rule.kind
        ));
    }

    if let (Some(min), Some(max)) = (rule.min_count, rule.max_count)
        && min > max
    {
        warnings.push(format!(
            "{path}: minCount {min} is greater than maxCount {max}; no array can satisfy both"
        ));
    }

    if (rule.max_size_kb.is_some() || rule.allowed_mimes.is_some())
        && !rule.carries_payload(field, nested)
    {
        warnings.push(format!(
            "{path}: max/mimes are ignored unless the field has type base64 or is a nested Base64 field"
        ));
    }

    if let Some(children) = &rule.children {
        for (child_field, child_rule) in children {
            let child_path = format!("{path}.{child_field}");
            lint_rule(&child_path, child_field, child_rule, true, warnings);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(yaml: &str) -> RuleSet {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_clean_rules_have_no_warnings() {
        let rules = rules(
            r#"
UserId: { type: string, nullable: false }
Files:
  type: array
  minCount: 1
  maxCount: 2
  children:
    Base64: { type: string, max: 10, mimes: "png" }
"#,
        );
        assert!(lint_rules(&rules).is_empty());
    }

    #[test]
    fn test_children_on_scalar() {
        let rules = rules(
            r#"
Owner:
  type: string
  children:
    Name: { type: string }
"#,
        );
        let warnings = lint_rules(&rules);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Owner: children are only applied"));
    }

    #[test]
    fn test_bounds_and_payload_options() {
        let rules = rules(
            r#"
Tags: { type: integer, minCount: 3, maxCount: 1 }
Files:
  type: array
  children:
    Avatar: { type: string, mimes: "png" }
"#,
        );
        let warnings = lint_rules(&rules);
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].starts_with("Tags: minCount/maxCount only apply"));
        assert!(warnings[1].contains("minCount 3 is greater than maxCount 1"));
        assert!(warnings[2].starts_with("Files.Avatar: max/mimes are ignored"));
    }
}
