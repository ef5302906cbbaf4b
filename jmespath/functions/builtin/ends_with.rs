use crate::function;

use crate::functions::ReturnValue;
use crate::FunctionContext;
use crate::Value;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(ends_with, [
    subject => Required(Of(DataType::String)),
    suffix => Required(Of(DataType::String))
    ], |_: &ends_with, args: &Vec<Value>, _: &dyn FunctionContext| {
    let subject = args[0].as_str().unwrap();
    let suffix = args[1].as_str().unwrap();
    Ok(Value::Boolean(subject.ends_with(suffix)))
});

#[cfg(test)]
mod tests {
    use crate::errors::Kind;
    use crate::functions::builtin::test_utils::Fixture;
    use crate::Value;
    use rstest::*;

    #[rstest]
    #[case(true, "foobar".into(), "bar".into())]
    #[case(false, "foobar".into(), "foo".into())]
    #[case(true, "foobar".into(), "".into())]
    fn ends_with(#[case] expected: bool, #[case] subject: Value, #[case] suffix: Value) {
        let fixture = Fixture::setup();
        let result = fixture.call("ends_with", vec![subject, suffix]).unwrap();
        assert_eq!(Value::Boolean(expected), result);
    }

    #[test]
    fn ends_with_requires_strings() {
        let fixture = Fixture::setup();
        let result = fixture
            .call("ends_with", vec!["foobar".into(), Value::Number(1.into())])
            .map_err(|e| e.kind);
        assert!(matches!(result, Err(Kind::InvalidType)));
    }
}
