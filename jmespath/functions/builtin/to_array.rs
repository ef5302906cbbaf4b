use crate::function;

use crate::functions::ReturnValue;
use crate::FunctionContext;
use crate::Value;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(to_array, [ value => Required(Of(DataType::Any)) ], |_: &to_array, args: &Vec<Value>, _: &dyn FunctionContext| {
    let result = match &args[0] {
        Value::Array(..) => args[0].clone(),
        other => Value::Array(vec![other.clone()]),
    };
    Ok(result)
});

#[cfg(test)]
mod tests {
    use crate::functions::builtin::test_utils::Fixture;
    use crate::Value;
    use rstest::*;

    fn from_json(text: &str) -> Value {
        Value::from_json(text).unwrap()
    }

    #[rstest]
    #[case("[1,2]", "[1, 2]")]
    #[case("[1]", "1")]
    #[case("[\"text\"]", "\"text\"")]
    #[case("[null]", "null")]
    #[case("[{\"a\":1}]", r#"{"a": 1}"#)]
    fn to_array(#[case] expected: &str, #[case] input: &str) {
        let fixture = Fixture::setup();
        let result = fixture.call("to_array", vec![from_json(input)]).unwrap();
        assert_eq!(expected, result.to_json());
    }

    #[test]
    fn to_array_is_idempotent() {
        let fixture = Fixture::setup();
        let once = fixture.call("to_array", vec![from_json("1")]).unwrap();
        let twice = fixture.call("to_array", vec![once.clone()]).unwrap();
        assert_eq!(once, twice);
    }
}
