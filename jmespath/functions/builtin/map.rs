use crate::function;

use crate::functions::ReturnValue;
use crate::FunctionContext;
use crate::Value;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::{self, *};
use crate::functions::Parameter::{self, *};

function!(map, [
    expr => Required(Of(DataType::ExpRef)),
    elements => Required(Of(DataType::Array))
    ], |me: &map, args: &Vec<Value>, context: &dyn FunctionContext| {
    let ast = args[0].as_expref().unwrap();
    let array = args[1].as_array().unwrap();

    let params: Vec<ParamTypes> = vec![Of(DataType::Any)];
    let closure = context.create_by_function(ast, &params, me, 0)?;

    // unlike a projection, null results are kept
    let mut result = Vec::new();
    for item in array {
        result.push(closure.call(item)?);
    }
    Ok(Value::Array(result))
});

#[cfg(test)]
mod tests {
    use crate::functions::builtin::test_utils::{expref, Fixture};
    use crate::Value;

    fn from_json(text: &str) -> Value {
        Value::from_json(text).unwrap()
    }

    #[test]
    fn map_applies_the_expression_to_every_element() {
        let fixture = Fixture::setup();
        let ast = crate::parse("foo").unwrap();
        let array = from_json(r#"[{"foo": "a"}, {"foo": "b"}, {"bar": "c"}]"#);
        let result = fixture.call("map", vec![expref(ast), array]).unwrap();
        assert_eq!(r#"["a","b",null]"#, result.to_json());
    }

    #[test]
    fn map_of_empty_array() {
        let fixture = Fixture::setup();
        let ast = crate::parse("foo").unwrap();
        let result = fixture
            .call("map", vec![expref(ast), from_json("[]")])
            .unwrap();
        assert_eq!("[]", result.to_json());
    }
}
