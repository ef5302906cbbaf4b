use crate::errors::error_builder::{ErrorBuilder, FunctionErrorBuilder, InvalidTypeErrorBuilder};
use crate::errors::invalid_type::InvalidTypeErrorBuilderFactory;
use crate::errors::Error as RuntimeError;
use crate::functions::{DataType, Function, ParamTypes, Parameter, Signature};
use crate::interpreter::Interpreter;
use crate::registry::REGISTRY;
use crate::{functions::ReturnValue, Value, AST};
use crate::{parse, JmesPathFunction};

/// Represents an expression type at runtime.
///
/// This supports the `_by` functions by holding a closure that
/// evaluates an expression reference against a single value and
/// validates the type of the result.
pub struct ByFunctionHolder<'a> {
    /// A "key" function on a [`Value`].
    pub(crate) closure: Box<dyn Fn(&Value) -> ReturnValue + 'a>,
}
impl<'a> ByFunctionHolder<'a> {
    /// Invokes the "key" function on a [`Value`].
    pub fn call(&self, value: &Value) -> ReturnValue {
        (self.closure)(value)
    }
}
impl<'a> std::ops::Deref for ByFunctionHolder<'a> {
    type Target = dyn Fn(&Value) -> ReturnValue + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.closure
    }
}
/// A type that represents a context accessible to JMESPath function implementations.
pub trait FunctionContext {
    /// Creates a closure that supports the `_by` functions and `map`,
    /// which operate on expression references.
    ///
    /// # Parameters
    ///
    /// * `ast` - the [`AST`](crate::parser::AST) fragment of the
    ///   expression reference.
    ///
    /// * `params` - the [`ParamTypes`] the result of each invocation of
    ///   the expression must match.
    ///
    /// * `function` - the calling [`Function`], used for error
    ///   reporting.
    ///
    /// * `param_index` - the zero-based index of the function parameter
    ///   bound to the expression reference, used for error reporting.
    fn create_by_function<'a>(
        &'a self,
        ast: &'a AST,
        params: &'a Vec<ParamTypes>,
        function: &'a dyn Function,
        param_index: usize,
    ) -> Result<ByFunctionHolder<'a>, RuntimeError>;
}

/// Represents a processing runtime for JMESPath function evaluation.
///
/// The set of functions is the closed set of JMESPath builtins held in
/// the shared registry.
pub struct Runtime {
    registry: &'static crate::registry::Registry,
}
impl Runtime {
    /// Returns the shared [`Runtime`] with every builtin
    /// [`Function`] registered.
    pub fn get_shared_runtime() -> Self {
        Runtime {
            registry: &REGISTRY,
        }
    }
    /// Parses and evaluates a JMESPath expression.
    pub fn search(&self, expression: &str, root: &Value) -> ReturnValue {
        let ast = parse(expression)?;
        self.search_ast(&ast, root)
    }
    /// Evaluates a parsed JMESPath expression.
    pub fn search_ast(&self, ast: &AST, root: &Value) -> ReturnValue {
        let interpreter = Interpreter::new(self);
        interpreter.evaluate(ast, root)
    }
    pub(crate) fn call(
        &self,
        fname: &str,
        args: &Vec<Value>,
        context: &dyn FunctionContext,
    ) -> ReturnValue {
        if let Some(func) = self.registry.get(fname) {
            Self::ensure_arity(func, args)?;
            Self::ensure_type(func, args)?;
            return func.execute(args, context);
        }
        // unknown function
        Err(RuntimeError::unknown_function(fname))
    }
    fn ensure_arity(func: &Box<JmesPathFunction>, args: &Vec<Value>) -> Result<(), RuntimeError> {
        let params = func.get_signature();
        let function_name = func.get_name();

        let count = args.len();
        let is_variadic = Signature::is_variadic(params);
        let max_count = Signature::get_max_args_count(params);
        let min_count = Signature::get_min_args_count(params);

        if count < min_count {
            return Err(RuntimeError::too_few_arguments(
                function_name,
                min_count,
                count,
                is_variadic,
            ));
        }

        if let Some(n) = max_count {
            if count > n {
                return Err(RuntimeError::too_many_arguments(function_name, n, count));
            }
        }

        Ok(())
    }
    pub(crate) fn ensure_type(
        func: &Box<JmesPathFunction>,
        args: &Vec<Value>,
    ) -> Result<(), RuntimeError> {
        let params = func.get_signature();
        let function_name = func.get_name();

        if params.is_empty() {
            return Ok(());
        }

        for (index, arg) in args.iter().enumerate() {
            // arity validation has already run: an argument beyond the
            // declared parameters belongs to a trailing variadic one
            let param_index = std::cmp::min(index, params.len() - 1);
            let param = &params[param_index];
            Self::ensure_matches_parameter(
                function_name,
                &func.get_parameter_name(param_index),
                arg,
                param,
            )?;
        }

        Ok(())
    }
    pub(crate) fn ensure_matches_parameter(
        function_name: &str,
        parameter_name: &str,
        arg: &Value,
        param: &Parameter,
    ) -> Result<(), RuntimeError> {
        match param.get_param_types() {
            ParamTypes::Of(t) => {
                let v = vec![*t];
                Self::ensure_matches_data_type(function_name, parameter_name, arg, &v)
            }
            ParamTypes::Any(v) => {
                Self::ensure_matches_data_type(function_name, parameter_name, arg, v)
            }
        }
    }
    pub(crate) fn ensure_matches_data_type(
        function_name: &str,
        parameter_name: &str,
        arg: &Value,
        data_types: &Vec<DataType>,
    ) -> Result<(), RuntimeError> {
        if Self::matches_data_type(arg, data_types) {
            return Ok(());
        }

        let err = RuntimeError::get_invalid_type_error_builder()
            .for_function(function_name)
            .for_parameter(parameter_name)
            .expected_data_types(data_types)
            .received(arg)
            .build();

        Err(err)
    }
    pub(crate) fn matches_data_type(arg: &Value, data_types: &Vec<DataType>) -> bool {
        data_types
            .iter()
            .map(|x| match x {
                // an expression reference is not a JSON value and only
                // matches an explicit expression parameter
                DataType::Any => !arg.is_expression(),
                DataType::Null => false,

                DataType::Array => arg.is_array(),
                DataType::Boolean => arg.is_bool(),
                DataType::ExpRef => arg.is_expression(),
                DataType::Number => arg.is_number(),
                DataType::Object => arg.is_object(),
                DataType::String => arg.is_str(),
            })
            .any(|x| x)
    }
}
