use std::cmp::Ordering;

use crate::errors::error_builder::{ErrorBuilder, FunctionErrorBuilder, InvalidTypeErrorBuilder};
use crate::errors::invalid_type::InvalidTypeErrorBuilderFactory;
use crate::functions::{DataType, RuntimeError};
use crate::Value;

/// Returns `true` if every element of the array is a number, or every
/// element is a string. An empty array is comparable.
pub(crate) fn is_comparable_array(array: &[Value]) -> bool {
    match array.first() {
        None => true,
        Some(first) if first.is_number() => array.iter().all(|x| x.is_number()),
        Some(first) if first.is_str() => array.iter().all(|x| x.is_str()),
        Some(_) => false,
    }
}

/// Compares two values of a comparable array: both numbers or both
/// strings.
pub(crate) fn compare_values(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.cmp(b),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        _ => unreachable!(),
    }
}

/// Returns the index of the first element whose key is the extremum
/// under `wanted`: [`Ordering::Greater`] selects the maximum,
/// [`Ordering::Less`] the minimum.
pub(crate) fn extremum_index(keys: &[Value], wanted: Ordering) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (index, key) in keys.iter().enumerate() {
        match best {
            None => best = Some(index),
            Some(current) => {
                if compare_values(key, &keys[current]) == wanted {
                    best = Some(index);
                }
            }
        }
    }
    best
}

/// Ensures that the results of a key expression are all numbers or all
/// strings. The caller has already validated that every key is a number
/// or a string, so an inconsistency is a number/string mix.
pub(crate) fn ensure_consistent_keys(
    function_name: &str,
    parameter_name: &str,
    keys: &[Value],
) -> Result<(), RuntimeError> {
    if is_comparable_array(keys) {
        return Ok(());
    }
    let first_is_number = keys[0].is_number();
    let expected = if first_is_number {
        DataType::Number
    } else {
        DataType::String
    };
    let offending = keys
        .iter()
        .find(|key| key.is_number() != first_is_number)
        .unwrap_or(&keys[0]);
    Err(RuntimeError::get_invalid_type_error_builder()
        .for_function(function_name)
        .for_expression_parameter(parameter_name)
        .expected_data_types(&[expected])
        .received(offending)
        .build())
}
