use crate::function;

use crate::functions::builtin::invalid_type_error;
use crate::functions::builtin::ordering::{compare_values, is_comparable_array};
use crate::functions::ReturnValue;
use crate::FunctionContext;
use crate::Value;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(sort, [ elements => Required(Of(DataType::Array)) ], |_: &sort, args: &Vec<Value>, _: &dyn FunctionContext| {
    let array = args[0].as_array().unwrap();
    if !is_comparable_array(array) {
        return Err(invalid_type_error(
            "sort",
            "elements",
            &[DataType::Number, DataType::String],
            &args[0],
        ));
    }
    let mut sorted = array.clone();
    sorted.sort_by(compare_values);
    Ok(Value::Array(sorted))
});
