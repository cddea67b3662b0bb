//! Typed options object for keyframe factories.

use crate::keyframe::KeyframeProp;
use factory_framework::StateOptions;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Options submitted to [`KeyframeFactory::update`](crate::keyframe::KeyframeFactory::update).
///
/// One optional field per declared property; "absent" is a first-class
/// `None`, and absent fields are skipped by the bulk synchronizer. Field
/// values are loosely typed [`Value`]s: the validator table enforces shape
/// at commit time, so a caller submitting `9` as a name gets a ledger record
/// rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyframeOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markers: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Value>,
}

impl StateOptions for KeyframeOptions {
    type Key = KeyframeProp;
    type Value = Value;

    fn value_of(&self, key: KeyframeProp) -> Option<Value> {
        match key {
            KeyframeProp::Name => self.name.clone(),
            KeyframeProp::Markers => self.markers.clone(),
            KeyframeProp::Props => self.props.clone(),
        }
    }
}
