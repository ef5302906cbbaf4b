use crate::errors::Error as RuntimeError;
use crate::function;

use crate::functions::builtin::ordering::{compare_values, ensure_consistent_keys};
use crate::functions::ReturnValue;
use crate::FunctionContext;
use crate::Value;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::{self, *};
use crate::functions::Parameter::{self, *};

function!(sort_by, [
    elements => Required(Of(DataType::Array)),
    expr => Required(Of(DataType::ExpRef))
    ], |me: &sort_by, args: &Vec<Value>, context: &dyn FunctionContext| {
    let array = args[0].as_array().unwrap();
    let ast = args[1].as_expref().unwrap();

    let params: Vec<ParamTypes> = vec![Any(vec![DataType::Number, DataType::String])];
    let closure = context.create_by_function(ast, &params, me, 1)?;

    let keys = array
        .iter()
        .map(|item| closure.call(item))
        .collect::<Result<Vec<Value>, RuntimeError>>()?;
    ensure_consistent_keys("sort_by", "expr", &keys)?;

    // a stable sort keeps elements with equal keys in their input order
    let mut pairs: Vec<(Value, Value)> = array.iter().cloned().zip(keys).collect();
    pairs.sort_by(|left, right| compare_values(&left.1, &right.1));
    let sorted = pairs.into_iter().map(|(item, _)| item).collect();
    Ok(Value::Array(sorted))
});
