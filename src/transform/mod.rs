pub mod null_insert;
pub mod null_to_value;

pub use null_insert::{InsertMode, NullInsertThreshold};
pub use null_to_value::NullToValue;

use crate::core::DataFrame;

/// A synchronous frame-to-frame pass.
///
/// Implementations read the input and return a new frame; they may hand back
/// a clone when there is nothing to change.
pub trait FrameTransform {
    fn name(&self) -> &'static str;

    fn apply(&self, frame: &DataFrame) -> DataFrame;
}

/// Run `transforms` in order over `frame`.
pub fn apply_all(frame: &DataFrame, transforms: &[&dyn FrameTransform]) -> DataFrame {
    let mut current = frame.clone();
    for transform in transforms {
        log::trace!("applying {} to frame {:?}", transform.name(), frame.name);
        current = transform.apply(&current);
    }
    current
}
