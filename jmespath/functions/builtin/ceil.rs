use crate::function;

use crate::functions::ReturnValue;
use crate::FunctionContext;
use crate::Number;
use crate::Value;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(ceil, [ value => Required(Of(DataType::Number)) ], |_: &ceil, args: &Vec<Value>, _: &dyn FunctionContext| {
    let result = match args[0].as_number().unwrap() {
        Number::Int(i) => Number::Int(*i),
        Number::Float(f) => Number::Float(f.ceil()),
    };
    Ok(Value::Number(result))
});
