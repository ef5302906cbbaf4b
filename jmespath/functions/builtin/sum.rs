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

function!(sum, [ elements => Required(Of(DataType::Array)) ], |_: &sum, args: &Vec<Value>, _: &dyn FunctionContext| {
    let array = args[0].as_array().unwrap();
    let mut all_integers = true;
    let mut total = 0.0;
    for item in array {
        match item.as_number() {
            Some(number) => {
                if !number.is_int() {
                    all_integers = false;
                }
                total += number.as_f64();
            }
            None => {
                return Err(invalid_type_error("sum", "elements", &[DataType::Number], item));
            }
        }
    }
    let result = if all_integers {
        Number::Int(total as i64)
    } else {
        Number::Float(total)
    };
    Ok(Value::Number(result))
});
