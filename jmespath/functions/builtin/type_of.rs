use crate::function;

use crate::functions::ReturnValue;
use crate::FunctionContext;
use crate::Value;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(type_of named "type", [ value => Required(Of(DataType::Any)) ], |_: &type_of, args: &Vec<Value>, _: &dyn FunctionContext| {
    let name = match &args[0] {
        Value::Array(..) => "array",
        Value::Boolean(..) => "boolean",
        Value::Null => "null",
        Value::Number(..) => "number",
        Value::Object(..) => "object",
        Value::String(..) => "string",
        Value::Expression(..) => unreachable!(),
    };
    Ok(Value::String(name.to_string()))
});
