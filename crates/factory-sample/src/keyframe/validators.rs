//! Per-property validators for keyframe factories.
//!
//! These are the concrete rules the framework's validation capability is
//! wired to: plain predicates over loosely typed values, one per declared
//! property, each paired with a fixed failure message at registration time.

use serde_json::Value;

/// A keyframe name is any string.
pub fn is_name(value: &Value) -> bool {
    value.is_string()
}

/// Markers must be a non-empty array of marker strings: `"from"`, `"to"`, or
/// a percentage like `"10%"`.
pub fn is_markers(value: &Value) -> bool {
    match value.as_array() {
        Some(markers) => {
            !markers.is_empty()
                && markers
                    .iter()
                    .all(|m| m.as_str().is_some_and(is_marker))
        }
        None => false,
    }
}

/// Props must be an object mapping CSS property names to string values.
pub fn is_props(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|props| props.values().all(Value::is_string))
}

fn is_marker(marker: &str) -> bool {
    if matches!(marker, "from" | "to") {
        return true;
    }

    marker
        .strip_suffix('%')
        .is_some_and(|n| !n.is_empty() && n.parse::<f64>().is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn name_must_be_a_string() {
        assert!(is_name(&json!("I am a name")));
        assert!(!is_name(&json!(9)));
    }

    #[test]
    fn markers_must_be_an_array_of_marker_strings() {
        assert!(is_markers(&json!(["from", "50%", "to"])));
        assert!(is_markers(&json!(["12.5%"])));
        assert!(!is_markers(&json!("10")));
        assert!(!is_markers(&json!([])));
        assert!(!is_markers(&json!(["halfway"])));
        assert!(!is_markers(&json!(["%"])));
        assert!(!is_markers(&json!([50])));
    }

    #[test]
    fn props_must_be_a_string_valued_object() {
        assert!(is_props(&json!({ "color": "red", "opacity": "0.5" })));
        assert!(is_props(&json!({})));
        assert!(!is_props(&json!([["color", "red"]])));
        assert!(!is_props(&json!({ "opacity": 0.5 })));
    }
}
