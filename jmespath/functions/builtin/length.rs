use crate::function;

use crate::functions::ReturnValue;
use crate::FunctionContext;
use crate::Number;
use crate::Value;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(length, [ subject => Required(Any(vec![DataType::Array, DataType::Object, DataType::String])) ], |_: &length, args: &Vec<Value>, _: &dyn FunctionContext| {
    let length = match &args[0] {
        Value::Array(v) => v.len(),
        Value::Object(o) => o.len(),
        // the length of a string is its number of Unicode scalar
        // values, not its number of bytes
        Value::String(s) => s.chars().count(),
        _ => unreachable!(),
    };
    Ok(Value::Number(Number::Int(length as i64)))
});
