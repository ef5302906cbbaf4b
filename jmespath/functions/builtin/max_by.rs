use std::cmp::Ordering;

use crate::errors::Error as RuntimeError;
use crate::function;

use crate::functions::builtin::ordering::{ensure_consistent_keys, extremum_index};
use crate::functions::ReturnValue;
use crate::FunctionContext;
use crate::Value;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::{self, *};
use crate::functions::Parameter::{self, *};

function!(max_by, [
    elements => Required(Of(DataType::Array)),
    expr => Required(Of(DataType::ExpRef))
    ], |me: &max_by, args: &Vec<Value>, context: &dyn FunctionContext| {
    let array = args[0].as_array().unwrap();
    let ast = args[1].as_expref().unwrap();

    let params: Vec<ParamTypes> = vec![Any(vec![DataType::Number, DataType::String])];
    let closure = context.create_by_function(ast, &params, me, 1)?;

    let keys = array
        .iter()
        .map(|item| closure.call(item))
        .collect::<Result<Vec<Value>, RuntimeError>>()?;
    ensure_consistent_keys("max_by", "expr", &keys)?;

    match extremum_index(&keys, Ordering::Greater) {
        Some(index) => Ok(array[index].clone()),
        None => Ok(Value::Null),
    }
});
