use crate::function;

use crate::functions::ReturnValue;
use crate::FunctionContext;
use crate::Value;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(keys, [ subject => Required(Of(DataType::Object)) ], |_: &keys, args: &Vec<Value>, _: &dyn FunctionContext| {
    let object = args[0].as_object().unwrap();
    let keys = object
        .keys()
        .map(|key| Value::String(key.clone()))
        .collect();
    Ok(Value::Array(keys))
});
