use crate::function;

use crate::functions::ReturnValue;
use crate::FunctionContext;
use crate::Number;
use crate::Value;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(to_number, [ value => Required(Of(DataType::Any)) ], |_: &to_number, args: &Vec<Value>, _: &dyn FunctionContext| {
    let result = match &args[0] {
        Value::Number(..) => args[0].clone(),
        // an unparseable string quietly becomes null
        Value::String(text) => match text.parse::<i64>() {
            Ok(number) => Value::Number(Number::Int(number)),
            Err(_) => match text.parse::<f64>() {
                Ok(number) if number.is_finite() => Value::Number(Number::Float(number)),
                _ => Value::Null,
            },
        },
        _ => Value::Null,
    };
    Ok(result)
});
