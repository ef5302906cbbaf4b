use std::cmp::Ordering;

use crate::function;

use crate::functions::builtin::invalid_type_error;
use crate::functions::builtin::ordering::{extremum_index, is_comparable_array};
use crate::functions::ReturnValue;
use crate::FunctionContext;
use crate::Value;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(min, [ elements => Required(Of(DataType::Array)) ], |_: &min, args: &Vec<Value>, _: &dyn FunctionContext| {
    let array = args[0].as_array().unwrap();
    if !is_comparable_array(array) {
        return Err(invalid_type_error(
            "min",
            "elements",
            &[DataType::Number, DataType::String],
            &args[0],
        ));
    }
    match extremum_index(array, Ordering::Less) {
        Some(index) => Ok(array[index].clone()),
        None => Ok(Value::Null),
    }
});
