//! # CSS Keyframes Exporter
//!
//! Pure formatting over already-valid state: reads committed snapshots from
//! keyframe factories and renders `@keyframes` rules. The exporter never
//! touches the error ledger; validation happened before anything was
//! committed.

use crate::keyframe::KeyframeError;
use crate::model::CssFormat;
use factory_framework::StateSnapshot;
use serde_json::Value;
use tracing::debug;

/// Renders one `@keyframes` rule per distinct `name` across `snapshots`,
/// grouping states that share a name and ordering marker blocks by their
/// leading percentage.
///
/// Fails with [`KeyframeError::UnnamedState`] when a snapshot has no
/// committed string `name`, since it cannot be grouped under any rule.
pub fn export_keyframes_css(
    snapshots: &[StateSnapshot<Value>],
    format: &CssFormat,
) -> Result<Vec<String>, KeyframeError> {
    // Group by name, preserving first-seen order.
    let mut grouped: Vec<(&str, Vec<&StateSnapshot<Value>>)> = Vec::new();
    for snapshot in snapshots {
        let name = snapshot
            .value_of("name")
            .and_then(Value::as_str)
            .ok_or(KeyframeError::UnnamedState)?;

        match grouped.iter_mut().find(|(n, _)| *n == name) {
            Some((_, group)) => group.push(snapshot),
            None => grouped.push((name, vec![snapshot])),
        }
    }

    debug!(states = snapshots.len(), keyframes = grouped.len(), "Exporting keyframes");

    Ok(grouped
        .into_iter()
        .map(|(name, group)| build_keyframe(name, group, format))
        .collect())
}

fn build_keyframe(name: &str, mut group: Vec<&StateSnapshot<Value>>, format: &CssFormat) -> String {
    group.sort_by(|a, b| {
        marker_position(a)
            .partial_cmp(&marker_position(b))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut at_rule = format!("\n@keyframes {name} {{");
    for snapshot in group {
        at_rule.push_str(&build_marker_block(snapshot, format));
    }
    at_rule.push_str("\n}");
    at_rule
}

fn build_marker_block(snapshot: &StateSnapshot<Value>, format: &CssFormat) -> String {
    let left_indent = " ".repeat(format.outer_indent);
    let markers: Vec<&str> = snapshot
        .value_of("markers")
        .and_then(Value::as_array)
        .map(|markers| markers.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut block = format!("\n{left_indent}{} {{", markers.join(", "));

    if let Some(props) = snapshot.value_of("props").and_then(Value::as_object) {
        for (prop, value) in props {
            if let Some(value) = value.as_str() {
                block.push_str(&build_property(prop, value, format));
            }
        }
    }

    block.push_str(&format!("\n{left_indent}}}"));
    block
}

fn build_property(prop: &str, value: &str, format: &CssFormat) -> String {
    format!("\n{}{prop}: {value};", " ".repeat(format.inner_indent))
}

/// Sort position of a state within its `@keyframes` rule: the percentage of
/// its first marker, with `from` at 0 and `to` at 100.
fn marker_position(snapshot: &StateSnapshot<Value>) -> f64 {
    snapshot
        .value_of("markers")
        .and_then(Value::as_array)
        .and_then(|markers| markers.first())
        .and_then(Value::as_str)
        .map(|marker| match marker {
            "from" => 0.0,
            "to" => 100.0,
            other => other
                .strip_suffix('%')
                .and_then(|n| n.parse().ok())
                .unwrap_or(0.0),
        })
        .unwrap_or(0.0)
}
