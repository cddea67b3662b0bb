use factory_sample::exporter::export_keyframes_css;
use factory_sample::keyframe::{KeyframeError, KeyframeFactory};
use factory_sample::model::{CssFormat, KeyframeOptions};
use serde_json::json;

fn state(name: &str, markers: serde_json::Value, props: serde_json::Value) -> KeyframeFactory {
    let mut keyframe = KeyframeFactory::new().unwrap();
    let ledger = keyframe
        .update(Some(&KeyframeOptions {
            name: Some(json!(name)),
            markers: Some(markers),
            props: Some(props),
        }))
        .unwrap();
    assert!(ledger.is_empty());
    keyframe
}

#[test]
fn test_valid_update_commits_every_submitted_property() {
    let keyframe = state(
        "bounce",
        json!(["from", "to"]),
        json!({ "opacity": "1" }),
    );

    let snapshot = keyframe.snapshot();
    assert_eq!(snapshot.len(), 3);
    assert_eq!(snapshot.value_of("name"), Some(&json!("bounce")));
    assert_eq!(snapshot.value_of("markers"), Some(&json!(["from", "to"])));
}

#[test]
fn test_invalid_batch_is_rejected_without_touching_state() {
    let mut keyframe = state("bounce", json!(["from"]), json!({}));

    let rejected = keyframe
        .update(Some(&KeyframeOptions {
            name: Some(json!("renamed")),
            markers: Some(json!("10")),
            props: None,
        }))
        .unwrap();

    assert_eq!(rejected.len(), 1);
    assert_eq!(
        rejected.record_for("markers").unwrap().message,
        "Markers must be an array"
    );
    assert_eq!(keyframe.get_name(), Some(&json!("bounce")));
    assert!(keyframe.errors().is_empty());
}

#[test]
fn test_setter_clears_its_stale_record_on_the_next_valid_value() {
    let mut keyframe = KeyframeFactory::new().unwrap();

    let ledger = keyframe.set_name(json!(9)).unwrap();
    assert_eq!(ledger.len(), 1);

    let ledger = keyframe.set_name(json!("Jolene")).unwrap();
    assert!(ledger.is_empty());
    assert_eq!(keyframe.get_name(), Some(&json!("Jolene")));
}

#[test]
fn test_export_groups_states_by_name_and_sorts_markers() {
    let peak = state("bounce", json!(["50%"]), json!({ "transform": "translateY(-30px)" }));
    let start = state("bounce", json!(["from", "to"]), json!({ "transform": "translateY(0)" }));

    let css = export_keyframes_css(
        &[peak.snapshot(), start.snapshot()],
        &CssFormat::default(),
    )
    .unwrap();

    assert_eq!(css.len(), 1);
    assert_eq!(
        css[0],
        "\n@keyframes bounce {\
         \n  from, to {\
         \n    transform: translateY(0);\
         \n  }\
         \n  50% {\
         \n    transform: translateY(-30px);\
         \n  }\
         \n}"
    );
}

#[test]
fn test_export_renders_one_rule_per_distinct_name() {
    let bounce = state("bounce", json!(["from"]), json!({}));
    let fade = state("fade", json!(["to"]), json!({ "opacity": "0" }));

    let css = export_keyframes_css(
        &[bounce.snapshot(), fade.snapshot()],
        &CssFormat::default(),
    )
    .unwrap();

    assert_eq!(css.len(), 2);
    assert!(css[0].starts_with("\n@keyframes bounce {"));
    assert!(css[1].contains("opacity: 0;"));
}

#[test]
fn test_export_rejects_states_without_a_name() {
    let mut keyframe = KeyframeFactory::new().unwrap();
    keyframe.set_markers(json!(["from"])).unwrap();

    let result = export_keyframes_css(&[keyframe.snapshot()], &CssFormat::default());

    assert_eq!(result.unwrap_err(), KeyframeError::UnnamedState);
}
