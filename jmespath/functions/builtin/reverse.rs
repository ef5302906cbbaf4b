use crate::function;

use crate::functions::ReturnValue;
use crate::FunctionContext;
use crate::Value;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(reverse, [ subject => Required(Any(vec![DataType::Array, DataType::String])) ], |_: &reverse, args: &Vec<Value>, _: &dyn FunctionContext| {
    let reversed = match &args[0] {
        Value::Array(array) => {
            let mut reversed = array.clone();
            reversed.reverse();
            Value::Array(reversed)
        }
        Value::String(text) => Value::String(text.chars().rev().collect()),
        _ => unreachable!(),
    };
    Ok(reversed)
});

#[cfg(test)]
mod tests {
    use crate::errors::Kind;
    use crate::functions::builtin::test_utils::Fixture;
    use crate::Value;
    use rstest::*;

    fn from_json(text: &str) -> Value {
        Value::from_json(text).unwrap()
    }

    #[rstest]
    #[case("[3,2,1]", "[1, 2, 3]")]
    #[case("\"cba\"", "\"abc\"")]
    #[case("[]", "[]")]
    fn reverse(#[case] expected: &str, #[case] input: &str) {
        let fixture = Fixture::setup();
        let result = fixture.call("reverse", vec![from_json(input)]).unwrap();
        assert_eq!(expected, result.to_json());
    }

    #[test]
    fn reverse_twice_is_identity() {
        let fixture = Fixture::setup();
        let input = from_json(r#"[1, "two", [3]]"#);
        let once = fixture.call("reverse", vec![input.clone()]).unwrap();
        let twice = fixture.call("reverse", vec![once]).unwrap();
        assert_eq!(input, twice);
    }

    #[test]
    fn reverse_requires_an_array_or_string() {
        let fixture = Fixture::setup();
        let result = fixture
            .call("reverse", vec![from_json("42")])
            .map_err(|e| e.kind);
        assert!(matches!(result, Err(Kind::InvalidType)));
    }
}
