use crate::function;

use crate::functions::ReturnValue;
use crate::FunctionContext;
use crate::Value;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(values, [ subject => Required(Of(DataType::Object)) ], |_: &values, args: &Vec<Value>, _: &dyn FunctionContext| {
    let object = args[0].as_object().unwrap();
    let values = object.values().cloned().collect();
    Ok(Value::Array(values))
});
