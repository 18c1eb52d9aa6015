pub mod bus;
pub mod events;

pub use bus::{EventBus, SubscriptionId};
pub use events::{
    BusEvent, BusEventWithPayload, EventPayload, GridLayoutDragStartEvent,
    GridLayoutDragStartPayload, GridLayoutDropEvent, GridLayoutDropPayload,
    SceneObjectStateChangedEvent, SceneObjectStateChangedPayload,
};

use std::collections::BTreeMap;
use std::fmt;

/// State of a scene object, as a JSON object.
pub type SceneObjectState = serde_json::Map<String, serde_json::Value>;

/// A node in a scene graph.
pub trait SceneObject: fmt::Debug + Send + Sync {
    fn key(&self) -> Option<&str> {
        None
    }

    fn state(&self) -> SceneObjectState;

    /// URL synchronisation, for objects that mirror state into the URL.
    fn url_sync(&self) -> Option<&dyn SceneObjectUrlSync> {
        None
    }
}

pub trait SceneObjectUrlSync {
    fn url_keys(&self) -> Vec<String>;

    fn url_state(&self) -> BTreeMap<String, String>;
}
