use crate::function;

use crate::functions::ReturnValue;
use crate::FunctionContext;
use crate::Value;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(contains, [
    subject => Required(Any(vec![DataType::Array, DataType::String])),
    search => Required(Of(DataType::Any))
    ], |_: &contains, args: &Vec<Value>, _: &dyn FunctionContext| {
    if let Some(array) = args[0].as_array() {
        return Ok(Value::Boolean(array.iter().any(|x| x == &args[1])));
    }
    let subject = args[0].as_str().unwrap();
    let found = match args[1].as_str() {
        Some(search) => subject.contains(search),
        None => false,
    };
    Ok(Value::Boolean(found))
});
