use crate::function;

use crate::functions::ReturnValue;
use crate::FunctionContext;
use crate::Value;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(to_string, [ value => Required(Of(DataType::Any)) ], |_: &to_string, args: &Vec<Value>, _: &dyn FunctionContext| {
    let result = match &args[0] {
        Value::String(..) => args[0].clone(),
        other => Value::String(other.to_json()),
    };
    Ok(result)
});
