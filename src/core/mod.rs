pub mod dataframe;
pub mod field;
pub mod time_range;
pub mod value;
pub mod values;

pub use dataframe::DataFrame;
pub use field::{
    DataLink, Field, FieldConfig, FieldOrigin, FieldState, FieldType, GraphFieldConfig,
    InsertNulls, LineInterpolation, ScopedVar, ScopedVars,
};
pub use time_range::TimeRange;
pub use value::Value;
pub use values::{Permutation, Values};
