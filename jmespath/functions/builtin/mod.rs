pub mod abs;
pub mod avg;
pub mod ceil;
pub mod contains;
pub mod ends_with;
pub mod floor;
pub mod join;
pub mod keys;
pub mod length;
pub mod map;
pub mod max;
pub mod max_by;
pub mod merge;
pub mod min;
pub mod min_by;
pub mod not_null;
pub mod reverse;
pub mod sort;
pub mod sort_by;
pub mod starts_with;
pub mod sum;
pub mod to_array;
pub mod to_number;
pub mod to_string;
pub mod type_of;
pub mod values;

mod ordering;

use crate::errors::error_builder::{ErrorBuilder, FunctionErrorBuilder, InvalidTypeErrorBuilder};
use crate::errors::invalid_type::InvalidTypeErrorBuilderFactory;
use crate::functions::{DataType, RuntimeError};
use crate::Value;

/// Builds the invalid-type error raised when an argument value fails a
/// check that the function signature cannot express, such as the
/// element type of an array.
pub(crate) fn invalid_type_error(
    function_name: &str,
    parameter_name: &str,
    expected: &[DataType],
    received: &Value,
) -> RuntimeError {
    RuntimeError::get_invalid_type_error_builder()
        .for_function(function_name)
        .for_parameter(parameter_name)
        .expected_data_types(expected)
        .received(received)
        .build()
}
