use serde_json::Value;

/// A value of ORT's `declared_licenses_processed` map.
///
/// ORT writes `spdx_expression` as a string, `unmapped` as a list and
/// `mapped` as a map of original name to SPDX expression. Expressions are
/// kept verbatim; `AND`/`OR` are never split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredLicense {
    Single(String),
    List(Vec<String>),
    Mapping(Vec<(String, String)>),
}

/// A JSON value that is none of the shapes above.
#[derive(Debug, Clone, PartialEq)]
pub struct UnsupportedShape(pub Value);

impl DeclaredLicense {
    /// `Ok(None)` for `null`.
    pub fn from_value(value: &Value) -> Result<Option<Self>, UnsupportedShape> {
        let unsupported = || UnsupportedShape(value.clone());

        match value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(DeclaredLicense::Single(s.clone()))),
            Value::Array(items) => items
                .iter()
                .map(|v| v.as_str().map(str::to_owned).ok_or_else(unsupported))
                .collect::<Result<Vec<_>, _>>()
                .map(|list| Some(DeclaredLicense::List(list))),
            Value::Object(map) => map
                .iter()
                .map(|(k, v)| {
                    v.as_str()
                        .map(|s| (k.clone(), s.to_owned()))
                        .ok_or_else(unsupported)
                })
                .collect::<Result<Vec<_>, _>>()
                .map(|pairs| Some(DeclaredLicense::Mapping(pairs))),
            Value::Bool(_) | Value::Number(_) => Err(unsupported()),
        }
    }

    /// Flatten to license expressions in document order, dropping blank ones.
    pub fn into_expressions(self) -> Vec<String> {
        let all = match self {
            DeclaredLicense::Single(s) => vec![s],
            DeclaredLicense::List(list) => list,
            DeclaredLicense::Mapping(pairs) => pairs.into_iter().map(|(_, v)| v).collect(),
        };
        all.into_iter().filter(|s| !is_blank(s)).collect()
    }
}

/// Blank expressions are dropped by both the declared and the scanner pass.
pub fn is_blank(expression: &str) -> bool {
    expression.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn expressions(value: Value) -> Vec<String> {
        DeclaredLicense::from_value(&value)
            .unwrap()
            .map(DeclaredLicense::into_expressions)
            .unwrap_or_default()
    }

    #[test]
    fn test_scalar() {
        assert_eq!(expressions(json!("Apache-2.0 OR MIT")), vec!["Apache-2.0 OR MIT"]);
    }

    #[test]
    fn test_list() {
        assert_eq!(
            expressions(json!(["Custom-1", "Custom-2"])),
            vec!["Custom-1", "Custom-2"]
        );
    }

    #[test]
    fn test_mapping_yields_one_expression_per_value() {
        assert_eq!(
            expressions(json!({"a": "MIT", "b": "Apache-2.0"})),
            vec!["MIT", "Apache-2.0"]
        );
    }

    #[test]
    fn test_null_and_empty_yield_nothing() {
        assert!(expressions(json!(null)).is_empty());
        assert!(expressions(json!("")).is_empty());
        assert!(expressions(json!([])).is_empty());
        assert!(expressions(json!({})).is_empty());
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        assert!(is_blank("   "));
        assert!(is_blank(""));
        assert!(!is_blank(" MIT "));
        assert_eq!(expressions(json!(["  ", "MIT"])), vec!["MIT"]);
    }

    #[test]
    fn test_unsupported_shapes() {
        for value in [json!(42), json!(true), json!(["MIT", 1]), json!({"a": ["MIT"]})] {
            let err = DeclaredLicense::from_value(&value).unwrap_err();
            assert_eq!(err.0, value);
        }
    }
}
