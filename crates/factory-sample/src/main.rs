//! Demo binary for the keyframe factory.
//!
//! Builds two keyframe states for one animation, shows the whole-object gate
//! rejecting an invalid batch without touching committed state, and prints
//! the exported `@keyframes` CSS.

use factory_framework::tracing::setup_tracing;
use factory_sample::exporter::export_keyframes_css;
use factory_sample::keyframe::{marker_for_step, KeyframeError, KeyframeFactory};
use factory_sample::model::{CssFormat, KeyframeOptions};
use serde_json::json;
use tracing::{info, warn};

fn main() -> Result<(), KeyframeError> {
    setup_tracing();

    info!("Building keyframe states for the bounce animation");

    let mut start = KeyframeFactory::new()?;
    let ledger = start.update(Some(&KeyframeOptions {
        name: Some(json!("bounce")),
        markers: Some(json!([marker_for_step(0)])),
        props: Some(json!({ "transform": "translateY(0)" })),
    }))?;
    info!(errors = ledger.len(), "First state applied");

    let mut peak = KeyframeFactory::new()?;
    peak.update(Some(&KeyframeOptions {
        name: Some(json!("bounce")),
        markers: Some(json!(["50%"])),
        props: Some(json!({ "transform": "translateY(-30px)" })),
    }))?;

    // An invalid batch is rejected as a whole: committed state stays intact.
    let rejected = peak.update(Some(&KeyframeOptions {
        name: Some(json!(9)),
        markers: Some(json!("10")),
        props: None,
    }))?;
    for record in &rejected {
        warn!(property = record.property, message = %record.message, "Rejected option");
    }

    let css = export_keyframes_css(
        &[start.snapshot(), peak.snapshot()],
        &CssFormat::default(),
    )?;
    for rule in css {
        println!("{rule}");
    }

    Ok(())
}
