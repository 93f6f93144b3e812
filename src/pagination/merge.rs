//! Merging of partial paginated responses

use crate::error::{Error, Result};
use crate::types::JsonValue;

/// Merge two partial paginated responses into one.
///
/// `destination` is the accumulation so far (or the earlier page) and
/// `source` the newly fetched page. The merge key is the single key of
/// `destination`'s `_embedded` object; the result is a copy of
/// `destination` whose array under that key is destination items followed
/// by source items. Neither input is mutated, so an accumulated object can
/// be reused or inspected after the call.
///
/// Fails with [`Error::Merge`] when either side lacks an `_embedded`
/// object, when the merge key is absent from `source`, or when either
/// value under the key is not an array.
pub fn merge_results(source: &JsonValue, destination: &JsonValue) -> Result<JsonValue> {
    let destination_embedded = destination
        .get("_embedded")
        .and_then(JsonValue::as_object)
        .ok_or_else(|| Error::merge("the destination did not have an _embedded object"))?;
    let source_embedded = source
        .get("_embedded")
        .and_then(JsonValue::as_object)
        .ok_or_else(|| Error::merge("the source did not have an _embedded object"))?;

    // The merge key is the only key within _embedded
    let merge_key = destination_embedded
        .keys()
        .next()
        .ok_or_else(|| Error::merge("the destination _embedded object did not contain any key"))?
        .clone();

    let source_items = source_embedded
        .get(&merge_key)
        .ok_or_else(|| Error::merge("the key to be merged is not available in the source object"))?
        .as_array()
        .ok_or_else(|| {
            Error::merge("the _embedded object did not contain an array for the merge key")
        })?;
    let destination_items = destination_embedded
        .get(&merge_key)
        .and_then(JsonValue::as_array)
        .ok_or_else(|| {
            Error::merge("the _embedded object did not contain an array for the merge key")
        })?;

    let combined: Vec<JsonValue> = destination_items
        .iter()
        .chain(source_items.iter())
        .cloned()
        .collect();

    let mut merged = destination.clone();
    merged["_embedded"][merge_key.as_str()] = JsonValue::Array(combined);
    Ok(merged)
}
