use crate::function;

use crate::functions::ReturnValue;
use crate::FunctionContext;
use crate::Value;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(starts_with, [
    subject => Required(Of(DataType::String)),
    prefix => Required(Of(DataType::String))
    ], |_: &starts_with, args: &Vec<Value>, _: &dyn FunctionContext| {
    let subject = args[0].as_str().unwrap();
    let prefix = args[1].as_str().unwrap();
    Ok(Value::Boolean(subject.starts_with(prefix)))
});
