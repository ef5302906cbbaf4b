use crate::function;

use crate::functions::ReturnValue;
use crate::FunctionContext;
use crate::{Map, Value};

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(merge, [ elements => Variadic(Of(DataType::Object)) ], |_: &merge, args: &Vec<Value>, _: &dyn FunctionContext| {
    // later objects win over earlier ones
    let mut result: Map<String, Value> = Map::new();
    for arg in args {
        for (key, value) in arg.as_object().unwrap() {
            result.insert(key.clone(), value.clone());
        }
    }
    Ok(Value::Object(result))
});
