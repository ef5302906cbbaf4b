use crate::errors::Error;
use crate::expression::Expression;
use crate::runtime::Runtime;
use crate::Value;

/// Compiles a JMESPath expression for repeated evaluation.
///
/// # Example
///
/// ```
/// use jmespath_core as jmespath;
/// use jmespath::{compile, Value};
///
/// let expression = compile("foo").unwrap();
/// let input = Value::from_json(r#"{"foo": "bar"}"#).unwrap();
/// let result = expression.search(&input).unwrap();
///
/// assert_eq!("bar", result);
/// ```
pub fn compile(expression: &str) -> Result<Expression, Error> {
    Expression::compile(expression)
}

/// Evaluates a JMESPath expression and returns a [`Value`].
///
/// Empty expression text evaluates to null.
///
/// # Example
///
/// ```
/// use jmespath_core as jmespath;
/// use jmespath::search;
/// use jmespath::map;
/// use jmespath::Map;
/// use serde_json;
///
/// let input = map!("foo"=> "bar").into();
/// let expression = "'foo'";
/// let result = search(expression, &input).unwrap();
///
/// assert_eq!("\"foo\"", serde_json::to_string(&result).unwrap());
/// ```
pub fn search(expression: &str, root: &Value) -> Result<Value, Error> {
    if expression.is_empty() {
        return Ok(Value::Null);
    }
    Runtime::get_shared_runtime().search(expression, root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_searches() {
        let root = Value::from_json(r#"{"foo": "bar"}"#).unwrap();
        let result = search("foo", &root).unwrap();
        assert_eq!("\"bar\"", result.to_json());
    }

    #[test]
    fn it_searches_an_empty_expression_to_null() {
        let root = Value::from_json(r#"{"foo": "bar"}"#).unwrap();
        let result = search("", &root).unwrap();
        assert_eq!(Value::Null, result);
    }

    #[test]
    fn it_compiles() {
        let expression = compile("foo | bar").unwrap();
        assert_eq!("foo | bar", expression.to_string());
    }

    #[test]
    fn it_reports_syntax_errors() {
        use crate::errors::Kind;
        let result = compile("foo.").map_err(|e| e.kind);
        assert!(matches!(result, Err(Kind::Syntax)));
    }

    mod end_to_end {
        use super::*;
        use crate::errors::Kind;
        use rstest::*;

        fn assert_search(expression: &str, input: &str, expected: &str) {
            let root = Value::from_json(input).unwrap();
            let result = search(expression, &root).unwrap();
            let expected = Value::from_json(expected).unwrap();
            assert_eq!(expected, result, "expression: {}", expression);
        }

        #[rstest]
        #[case("a.b.c", r#"{"a": {"b": {"c": 1}}}"#, "1")]
        #[case("foo[*].bar", r#"{"foo": [{"bar": 1}, {"bar": 2}, {"baz": 3}]}"#, "[1,2]")]
        #[case(
            "foo[?age > `30`].name",
            r#"{"foo": [{"name": "a", "age": 25}, {"name": "b", "age": 40}]}"#,
            r#"["b"]"#
        )]
        #[case("foo[0:4:2]", r#"{"foo": [0, 1, 2, 3, 4, 5]}"#, "[0,2]")]
        #[case(
            "sort_by(foo, &age)[*].name",
            r#"{"foo": [{"name": "b", "age": 40}, {"name": "a", "age": 25}]}"#,
            r#"["a","b"]"#
        )]
        #[case("length(`\"héllo\"`)", "{}", "5")]
        fn it_evaluates_common_expressions(
            #[case] expression: &str,
            #[case] input: &str,
            #[case] expected: &str,
        ) {
            assert_search(expression, input, expected);
        }

        #[rstest]
        #[case("foo.bar | baz", r#"{"foo": {"bar": {"baz": 1}}}"#, "1")]
        #[case("foo[*].bar | [0]", r#"{"foo": [{"bar": 1}, {"bar": 2}]}"#, "1")]
        #[case("foo | bar | baz", r#"{"foo": {"bar": {"baz": 2}}}"#, "2")]
        fn it_evaluates_pipes(
            #[case] expression: &str,
            #[case] input: &str,
            #[case] expected: &str,
        ) {
            assert_search(expression, input, expected);
        }

        #[rstest]
        #[case("a[].b[].c", r#"{"a": [{"b": [{"c": 1}, {"c": 2}]}, {"b": [{"c": 3}]}]}"#, "[1,2,3]")]
        #[case(
            "a[*].b[*].c",
            r#"{"a": [{"b": [{"c": 1}, {"c": 2}]}, {"b": [{"c": 3}]}]}"#,
            "[[1,2],[3]]"
        )]
        #[case("reservations[].instances[].state", r#"{"reservations": [{"instances": [{"state": "a"}, {"state": "b"}]}, {"instances": [{"state": "c"}]}]}"#, r#"["a","b","c"]"#)]
        fn it_distinguishes_flatten_from_wildcard_chains(
            #[case] expression: &str,
            #[case] input: &str,
            #[case] expected: &str,
        ) {
            assert_search(expression, input, expected);
        }

        #[rstest]
        #[case("[-1]", "[1, 2, 3]", "3")]
        #[case("[-4]", "[1, 2, 3]", "null")]
        #[case("[::-1]", "[1, 2, 3]", "[3,2,1]")]
        #[case("[::]", "[1, 2, 3]", "[1,2,3]")]
        #[case("[:]", "[1, 2, 3]", "[1,2,3]")]
        #[case("[:2]", "[1, 2, 3]", "[1,2]")]
        #[case("[*]", "[1, null, 3]", "[1,3]")]
        fn it_evaluates_brackets(
            #[case] expression: &str,
            #[case] input: &str,
            #[case] expected: &str,
        ) {
            assert_search(expression, input, expected);
        }

        #[rstest]
        #[case("foo.*", r#"{"foo": {"a": 1, "b": 2}}"#, "[1,2]")]
        #[case("*.bar", r#"{"a": {"bar": 1}, "b": {"bar": 2}}"#, "[1,2]")]
        #[case("foo.*.baz", r#"{"foo": {"a": {"baz": 1}, "b": {"other": 2}}}"#, "[1]")]
        fn it_evaluates_hash_wildcards(
            #[case] expression: &str,
            #[case] input: &str,
            #[case] expected: &str,
        ) {
            assert_search(expression, input, expected);
        }

        #[rstest]
        #[case("a == `1` && b == `2`", r#"{"a": 1, "b": 2}"#, "true")]
        #[case("a || b", r#"{"b": 2}"#, "2")]
        #[case("!a", r#"{"a": []}"#, "true")]
        #[case("a < b", r#"{"a": 1, "b": 2}"#, "true")]
        #[case("a < b", r#"{"a": 1, "b": "two"}"#, "null")]
        #[case("a == b", r#"{"a": 1, "b": 1.0}"#, "true")]
        fn it_evaluates_boolean_expressions(
            #[case] expression: &str,
            #[case] input: &str,
            #[case] expected: &str,
        ) {
            assert_search(expression, input, expected);
        }

        #[rstest]
        #[case("[foo, bar]", r#"{"foo": 1, "bar": 2}"#, "[1,2]")]
        #[case("{a: foo, b: bar}", r#"{"foo": 1, "bar": 2}"#, r#"{"a":1,"b":2}"#)]
        #[case("missing.[foo]", r#"{"other": 1}"#, "null")]
        fn it_evaluates_multi_selects(
            #[case] expression: &str,
            #[case] input: &str,
            #[case] expected: &str,
        ) {
            assert_search(expression, input, expected);
        }

        #[test]
        fn it_rejects_a_slice_step_of_zero() {
            let root = Value::from_json("[1, 2, 3]").unwrap();
            let result = search("[::0]", &root).map_err(|e| e.kind);
            assert!(matches!(result, Err(Kind::InvalidValue)));
        }

        #[test]
        fn it_reports_unknown_functions() {
            let root = Value::from_json("{}").unwrap();
            let result = search("unknown_function(@)", &root).map_err(|e| e.kind);
            assert!(matches!(result, Err(Kind::UnknownFunction)));
        }

        #[test]
        fn search_does_not_mutate_its_input() {
            let root = Value::from_json(r#"{"foo": [3, 1, 2]}"#).unwrap();
            let snapshot = root.clone();
            let _ = search("sort(foo)", &root).unwrap();
            assert_eq!(snapshot, root);
        }

        #[test]
        fn quoted_identifiers_decode_escapes() {
            assert_search(r#""foo bar""#, r#"{"foo bar": 1}"#, "1");
            assert_search("\"\\u0066oo\"", r#"{"foo": 1}"#, "1");
        }

        #[test]
        fn raw_strings_pass_through_verbatim() {
            assert_search(r"'foo\nbar'", "{}", "\"foo\\\\nbar\"");
        }
    }
}
