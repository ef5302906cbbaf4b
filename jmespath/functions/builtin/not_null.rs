use crate::function;

use crate::functions::ReturnValue;
use crate::FunctionContext;
use crate::Value;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(not_null, [
    first => Required(Of(DataType::Any)),
    rest => Variadic(Of(DataType::Any))
    ], |_: &not_null, args: &Vec<Value>, _: &dyn FunctionContext| {
    for arg in args {
        if !arg.is_null() {
            return Ok(arg.clone());
        }
    }
    Ok(Value::Null)
});
