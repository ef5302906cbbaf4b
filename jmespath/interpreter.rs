use crate::errors::error_builder::{
    ErrorBuilder, FunctionErrorBuilder, InvalidTypeErrorBuilder, InvalidValueErrorBuilder,
};
use crate::errors::invalid_type::InvalidTypeErrorBuilderFactory;
use crate::errors::invalid_value::InvalidValueErrorBuilderFactory;
use crate::errors::{Error as RuntimeError, Position};
use crate::functions::{DataType, Function, ParamTypes, ReturnValue};
use crate::parser::{Bracket, Comparator, Slice, AST};
use crate::runtime::{ByFunctionHolder, FunctionContext, Runtime};
use crate::value_option::ValueOption as _;
use crate::NodeType;
use crate::Value;

/// Evaluates an abstract syntax tree against a JSON value.
///
/// The interpreter is a plain tree walker: every node consumes the
/// current context value and produces a new one. Projections evaluate
/// their right-hand side once per element and drop null results.
pub struct Interpreter<'a> {
    runtime: &'a Runtime,
}
impl<'a> Interpreter<'a> {
    pub fn new(runtime: &'a Runtime) -> Self {
        Interpreter { runtime }
    }
    pub fn evaluate(&self, ast: &AST, root: &Value) -> ReturnValue {
        self.visit(ast, root)
    }

    fn visit(&self, ast: &AST, value: &Value) -> ReturnValue {
        match &ast.node_type {
            NodeType::Empty => Ok(value.clone()),
            NodeType::Current => Ok(value.clone()),
            NodeType::Identifier(name) => self.visit_identifier(name, value),
            NodeType::RawString(text) => Ok(Value::String(text.clone())),
            NodeType::Literal(literal) => Ok(literal.clone()),

            NodeType::ParenExpression(inner) => self.visit(inner, value),
            NodeType::NotExpression(inner) => {
                let result = self.visit(inner, value)?;
                Ok(Value::Boolean(!result.is_truthy()))
            }
            NodeType::AndExpression(left, right) => {
                let result = self.visit(left, value)?;
                if result.is_truthy() {
                    self.visit(right, value)
                } else {
                    Ok(result)
                }
            }
            NodeType::OrExpression(left, right) => {
                let result = self.visit(left, value)?;
                if result.is_truthy() {
                    Ok(result)
                } else {
                    self.visit(right, value)
                }
            }
            NodeType::ComparatorExpression(comparator, left, right) => {
                self.visit_comparator(*comparator, left, right, value)
            }

            NodeType::PipeExpression(left, right) => {
                let piped = self.visit(left, value)?;
                self.visit(right, &piped)
            }
            NodeType::SubExpression(left, right) => {
                let context = self.visit(left, value)?;
                self.visit(right, &context)
            }

            NodeType::IndexExpression(left, bracket, right) => {
                self.visit_index_expression(left, bracket, right, value, ast.position)
            }
            NodeType::HashWildcard(left, right) => self.visit_hash_wildcard(left, right, value),

            NodeType::MultiSelectList(items) => self.visit_multi_select_list(items, value),
            NodeType::MultiSelectHash(map) => self.visit_multi_select_hash(map, value),

            NodeType::FunctionExpression(name, args) => self.visit_function(name, args, value),
            NodeType::ExpressionRef(inner) => Ok(Value::Expression(Box::new((**inner).clone()))),
        }
    }

    fn visit_identifier(&self, name: &str, value: &Value) -> ReturnValue {
        Ok(match value {
            Value::Object(map) => map.get(name).cloned().or_null(),
            _ => Value::Null,
        })
    }

    fn visit_comparator(
        &self,
        comparator: Comparator,
        left: &AST,
        right: &AST,
        value: &Value,
    ) -> ReturnValue {
        let left_result = self.visit(left, value)?;
        let right_result = self.visit(right, value)?;

        if let Comparator::Equal = comparator {
            return Ok(Value::Boolean(left_result == right_result));
        }
        if let Comparator::NotEqual = comparator {
            return Ok(Value::Boolean(left_result != right_result));
        }

        // ordering comparators are only defined between two numbers
        let (lhs, rhs) = match (left_result.as_number(), right_result.as_number()) {
            (Some(lhs), Some(rhs)) => (lhs, rhs),
            _ => return Ok(Value::Null),
        };
        let compared = match comparator {
            Comparator::Less => lhs < rhs,
            Comparator::LessOrEqual => lhs <= rhs,
            Comparator::GreaterOrEqual => lhs >= rhs,
            Comparator::Greater => lhs > rhs,
            _ => unreachable!(),
        };
        Ok(Value::Boolean(compared))
    }

    fn visit_index_expression(
        &self,
        left: &AST,
        bracket: &Bracket,
        right: &AST,
        value: &Value,
        position: Position,
    ) -> ReturnValue {
        let context = self.visit(left, value)?;
        let array = match context {
            Value::Array(array) => array,
            _ => return Ok(Value::Null),
        };
        match bracket {
            Bracket::ArrayItem(index) => Ok(Self::array_item(&array, *index)),
            Bracket::Flatten => {
                let flattened = Self::flatten_array(array);
                self.evaluate_projection(right, &flattened)
            }
            Bracket::ListWildcard => self.evaluate_projection(right, &array),
            Bracket::Slice(slice) => {
                let sliced = Self::slice_array(&array, slice, position)?;
                self.evaluate_projection(right, &sliced)
            }
            Bracket::Filter(predicate) => {
                let filtered = self.filter_array(predicate, array)?;
                self.evaluate_projection(right, &filtered)
            }
        }
    }

    fn array_item(array: &[Value], index: i64) -> Value {
        let index = if index < 0 {
            index + array.len() as i64
        } else {
            index
        };
        if index < 0 || index >= array.len() as i64 {
            return Value::Null;
        }
        array[index as usize].clone()
    }

    fn flatten_array(array: Vec<Value>) -> Vec<Value> {
        let mut result = Vec::new();
        for item in array {
            if let Value::Array(nested) = item {
                result.extend(nested);
            } else {
                result.push(item);
            }
        }
        result
    }

    fn slice_array(array: &[Value], slice: &Slice, position: Position) -> Result<Vec<Value>, RuntimeError> {
        let length = array.len() as isize;

        let step = slice.step.unwrap_or(1);
        if step == 0 {
            return Err(RuntimeError::get_invalid_value_error_builder()
                .at(position)
                .for_reason("slice step cannot be 0")
                .build());
        }
        let start = match slice.start {
            None => {
                if step < 0 {
                    length - 1
                } else {
                    0
                }
            }
            Some(start) => Self::adjust_slice_endpoint(length, start, step),
        };
        let stop = match slice.stop {
            None => {
                if step < 0 {
                    -1
                } else {
                    length
                }
            }
            Some(stop) => Self::adjust_slice_endpoint(length, stop, step),
        };

        let mut result = Vec::new();
        let mut index = start;
        while if step > 0 { index < stop } else { index > stop } {
            result.push(array[index as usize].clone());
            index += step;
        }
        Ok(result)
    }

    fn adjust_slice_endpoint(length: isize, endpoint: isize, step: isize) -> isize {
        let mut endpoint = endpoint;
        if endpoint < 0 {
            endpoint += length;
            if endpoint < 0 {
                endpoint = if step < 0 { -1 } else { 0 };
            }
        } else if endpoint >= length {
            endpoint = if step < 0 { length - 1 } else { length };
        }
        endpoint
    }

    fn filter_array(&self, predicate: &AST, array: Vec<Value>) -> Result<Vec<Value>, RuntimeError> {
        let mut result = Vec::new();
        for item in array {
            let filtered = self.visit(predicate, &item)?;
            if filtered.is_truthy() {
                result.push(item);
            }
        }
        Ok(result)
    }

    /// Projects `expression` across `items`, dropping null results.
    ///
    /// An empty expression keeps each element as it is, so the
    /// projection reproduces the array minus its null elements.
    fn evaluate_projection(&self, expression: &AST, items: &[Value]) -> ReturnValue {
        let mut result = Vec::new();
        for item in items {
            let evaluated = self.visit(expression, item)?;
            if !evaluated.is_null() {
                result.push(evaluated);
            }
        }
        Ok(Value::Array(result))
    }

    fn visit_hash_wildcard(&self, left: &AST, right: &AST, value: &Value) -> ReturnValue {
        let context = self.visit(left, value)?;
        match context {
            Value::Object(map) => {
                let values: Vec<Value> = map.into_iter().map(|(_, v)| v).collect();
                self.evaluate_projection(right, &values)
            }
            _ => Ok(Value::Null),
        }
    }

    fn visit_multi_select_list(&self, items: &[AST], value: &Value) -> ReturnValue {
        if value.is_null() {
            return Ok(Value::Null);
        }
        let mut result = Vec::new();
        for item in items {
            result.push(self.visit(item, value)?);
        }
        Ok(Value::Array(result))
    }

    fn visit_multi_select_hash(
        &self,
        map: &crate::Map<String, AST>,
        value: &Value,
    ) -> ReturnValue {
        if value.is_null() {
            return Ok(Value::Null);
        }
        let mut object: crate::Map<String, Value> = crate::Map::new();
        for (key, expression) in map {
            let evaluated = self.visit(expression, value)?;
            object.insert(key.clone(), evaluated);
        }
        Ok(Value::Object(object))
    }

    fn visit_function(&self, name: &str, args: &[AST], value: &Value) -> ReturnValue {
        let mut arguments = Vec::new();
        for arg in args {
            arguments.push(self.visit(arg, value)?);
        }
        self.runtime.call(name, &arguments, self)
    }
}
impl<'a> FunctionContext for Interpreter<'a> {
    fn create_by_function<'b>(
        &'b self,
        ast: &'b AST,
        params: &'b Vec<ParamTypes>,
        function: &'b dyn Function,
        param_index: usize,
    ) -> Result<ByFunctionHolder<'b>, RuntimeError> {
        let closure = move |value: &Value| -> Result<Value, RuntimeError> {
            let result = self.visit(ast, value)?;
            let data_types: Vec<DataType> = params
                .iter()
                .map(|x| match x {
                    ParamTypes::Of(t) => vec![*t],
                    ParamTypes::Any(v) => v.clone(),
                })
                .flatten()
                .collect();
            if Runtime::matches_data_type(&result, &data_types) {
                Ok(result)
            } else {
                let err = RuntimeError::get_invalid_type_error_builder()
                    .for_function(function.get_name())
                    .for_expression_parameter(&function.get_parameter_name(param_index))
                    .expected_data_types(&data_types)
                    .received(&result)
                    .build();
                Err(err)
            }
        };
        Ok(ByFunctionHolder {
            closure: Box::new(closure),
        })
    }
}
