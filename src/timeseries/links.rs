use crate::core::{DataFrame, Field, FieldType};
use crate::links::{InterpolateFn, LinksSupplier};
use log::debug;
use std::sync::Arc;

/// Recomputes `get_links` for every field of an aligned frame.
///
/// Unlike the rest of this module this works in place: `aligned` is updated
/// and handed back. Each field that records its source frame through
/// `state.origin` gets a supplier resolving against the aligned fields plus
/// the string fields of that source frame. When the field's values are a
/// sorted view, the same permutation is applied to those string fields so
/// labels stay on the rows they belong to. Fields without an origin, or
/// whose source frame does not exist, are skipped.
pub fn regenerate_links_supplier<'a>(
    aligned: &'a mut DataFrame,
    frames: &[DataFrame],
    replace: &InterpolateFn,
    time_zone: &str,
) -> &'a mut DataFrame {
    for index in 0..aligned.fields.len() {
        let field = &aligned.fields[index];

        let Some(frame_index) = field.state.as_ref().and_then(|s| s.origin).map(|o| o.frame_index) else {
            continue;
        };
        let Some(source) = frames.get(frame_index) else {
            debug!("field `{}` points at missing frame {}", field.name, frame_index);
            continue;
        };

        let order = field.values.order();
        let extra_fields: Vec<Field> = source
            .fields
            .iter()
            .filter(|f| f.field_type == FieldType::String)
            .map(|f| match order {
                Some(order) => {
                    let mut reordered = f.clone();
                    reordered.values = order.apply(&f.values);
                    reordered
                }
                None => f.clone(),
            })
            .collect();

        let scoped_vars = field
            .state
            .as_ref()
            .and_then(|s| s.scoped_vars.clone())
            .unwrap_or_default();

        let mut temp_fields = aligned.fields.clone();
        temp_fields.extend(extra_fields);
        let temp_frame = DataFrame {
            fields: temp_fields,
            length: aligned.length,
            ..DataFrame::default()
        };

        let supplier = LinksSupplier::new(
            Arc::new(temp_frame),
            index,
            scoped_vars,
            Arc::clone(replace),
            time_zone,
        );
        aligned.fields[index].get_links = Some(supplier);
    }

    aligned
}
