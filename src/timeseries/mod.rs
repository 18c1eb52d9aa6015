pub mod links;
pub mod prepare;
pub mod timezones;

pub use links::regenerate_links_supplier;
pub use prepare::prepare_graphable_fields;
pub use timezones::normalize_timezones;
