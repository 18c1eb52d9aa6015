use super::{SceneObject, SceneObjectState};
use std::sync::Arc;

/// An event that can travel over an [`EventBus`](super::EventBus).
pub trait BusEvent: 'static {
    /// Stable identifier subscribers are matched on.
    const TYPE: &'static str;

    fn event_type(&self) -> &'static str {
        Self::TYPE
    }
}

/// Payload of a [`BusEventWithPayload`]; names the event type it travels as.
pub trait EventPayload: 'static {
    const TYPE: &'static str;
}

/// An event that is nothing more than its payload.
#[derive(Debug, Clone)]
pub struct BusEventWithPayload<P> {
    pub payload: P,
}

impl<P> BusEventWithPayload<P> {
    pub fn new(payload: P) -> Self {
        Self { payload }
    }
}

impl<P: EventPayload> BusEvent for BusEventWithPayload<P> {
    const TYPE: &'static str = P::TYPE;
}

#[derive(Debug, Clone)]
pub struct SceneObjectStateChangedPayload {
    pub prev_state: SceneObjectState,
    pub new_state: SceneObjectState,
    pub partial_update: SceneObjectState,
    pub changed_object: Arc<dyn SceneObject>,
}

impl SceneObjectStateChangedPayload {
    /// Payload whose partial update holds the keys that differ between the
    /// two states. Keys removed in `new_state` map to null.
    pub fn from_states(
        prev_state: SceneObjectState,
        new_state: SceneObjectState,
        changed_object: Arc<dyn SceneObject>,
    ) -> Self {
        let mut partial_update: SceneObjectState = new_state
            .iter()
            .filter(|(key, value)| prev_state.get(*key) != Some(*value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        for key in prev_state.keys() {
            if !new_state.contains_key(key) {
                partial_update.insert(key.clone(), serde_json::Value::Null);
            }
        }

        Self {
            prev_state,
            new_state,
            partial_update,
            changed_object,
        }
    }
}

impl EventPayload for SceneObjectStateChangedPayload {
    const TYPE: &'static str = "scene-object-state-change";
}

#[derive(Debug, Clone)]
pub struct GridLayoutDropPayload {
    pub scene_object: Arc<dyn SceneObject>,
}

impl EventPayload for GridLayoutDropPayload {
    const TYPE: &'static str = "grid-layout-drop";
}

#[derive(Debug, Clone)]
pub struct GridLayoutDragStartPayload {
    pub scene_object: Arc<dyn SceneObject>,
}

impl EventPayload for GridLayoutDragStartPayload {
    const TYPE: &'static str = "grid-layout-drag-start";
}

pub type SceneObjectStateChangedEvent = BusEventWithPayload<SceneObjectStateChangedPayload>;
pub type GridLayoutDropEvent = BusEventWithPayload<GridLayoutDropPayload>;
pub type GridLayoutDragStartEvent = BusEventWithPayload<GridLayoutDragStartPayload>;
