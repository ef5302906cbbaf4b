use crate::function;

use crate::functions::builtin::invalid_type_error;
use crate::functions::ReturnValue;
use crate::FunctionContext;
use crate::Value;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(join, [
    glue => Required(Of(DataType::String)),
    elements => Required(Of(DataType::Array))
    ], |_: &join, args: &Vec<Value>, _: &dyn FunctionContext| {
    let glue = args[0].as_str().unwrap();
    let array = args[1].as_array().unwrap();

    let mut parts = Vec::new();
    for item in array {
        match item.as_str() {
            Some(text) => parts.push(text),
            None => {
                return Err(invalid_type_error("join", "elements", &[DataType::String], item));
            }
        }
    }
    Ok(Value::String(parts.join(glue)))
});
