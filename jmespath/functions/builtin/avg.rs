use crate::function;

use crate::functions::builtin::invalid_type_error;
use crate::functions::ReturnValue;
use crate::FunctionContext;
use crate::Number;
use crate::Value;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(avg, [ elements => Required(Of(DataType::Array)) ], |_: &avg, args: &Vec<Value>, _: &dyn FunctionContext| {
    let array = args[0].as_array().unwrap();
    if array.is_empty() {
        return Ok(Value::Null);
    }
    let mut sum = 0.0;
    for item in array {
        match item.as_f64() {
            Some(number) => sum += number,
            None => {
                return Err(invalid_type_error("avg", "elements", &[DataType::Number], item));
            }
        }
    }
    Ok(Value::Number(Number::Float(sum / array.len() as f64)))
});
