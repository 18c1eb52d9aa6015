pub mod processor;
pub mod theme;
pub mod units;

pub use processor::{format_time, DisplayProcessor, DisplayValue};
pub use theme::{Theme, ThemeColors};
pub use units::{format_value, is_boolean_unit, FormattedValue, UnitFormat, BOOL_UNIT};
