use std::cmp::Ordering;

use crate::function;

use crate::functions::builtin::invalid_type_error;
use crate::functions::builtin::ordering::{extremum_index, is_comparable_array};
use crate::functions::ReturnValue;
use crate::FunctionContext;
use crate::Value;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(max, [ elements => Required(Of(DataType::Array)) ], |_: &max, args: &Vec<Value>, _: &dyn FunctionContext| {
    let array = args[0].as_array().unwrap();
    if !is_comparable_array(array) {
        return Err(invalid_type_error(
            "max",
            "elements",
            &[DataType::Number, DataType::String],
            &args[0],
        ));
    }
    match extremum_index(array, Ordering::Greater) {
        Some(index) => Ok(array[index].clone()),
        None => Ok(Value::Null),
    }
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
    #[case("3", "[3, 1, 2]")]
    #[case("\"c\"", r#"["a", "c", "b"]"#)]
    #[case("null", "[]")]
    #[case("2.5", "[1, 2.5]")]
    fn max(#[case] expected: &str, #[case] input: &str) {
        let fixture = Fixture::setup();
        let result = fixture.call("max", vec![from_json(input)]).unwrap();
        assert_eq!(expected, result.to_json());
    }

    #[rstest]
    #[case(r#"[1, "b"]"#)]
    #[case(r#"[true]"#)]
    fn max_requires_a_comparable_array(#[case] input: &str) {
        let fixture = Fixture::setup();
        let result = fixture
            .call("max", vec![from_json(input)])
            .map_err(|e| e.kind);
        assert!(matches!(result, Err(Kind::InvalidType)));
    }
}
