pub mod config;
pub mod core;
pub mod display;
pub mod error;
pub mod links;
pub mod scene;
pub mod timeseries;
pub mod transform;

pub use config::{PrepareRequest, PrepareResponse};
pub use error::FrameError;
pub use timeseries::{normalize_timezones, prepare_graphable_fields, regenerate_links_supplier};
