use super::{Parameter, ReturnValue};
use crate::{FunctionContext, Value};

/// A type that represents a JMESPath function.
pub trait Function {
    /// Returns the name of the function.
    fn get_name(&self) -> &str;
    /// Returns the function signature.
    fn get_signature(&self) -> &Vec<Parameter>;
    /// Invokes the function with the given arguments.
    fn execute(&self, args: &Vec<Value>, context: &dyn FunctionContext) -> ReturnValue;

    /// Returns the name of the given parameter to the function.
    fn get_parameter_name(&self, index: usize) -> String {
        format!("param{}", index)
    }
}

/// Implements a builtin JMESPath [`Function`] as a struct
/// implementing the [`Function`] trait.
///
/// The signature lists each parameter as
/// `name => Required(..) | Optional(..) | Variadic(..)` with the
/// accepted [DataType](crate::functions::DataType)s. The runtime
/// validates arity and argument types against the signature before the
/// closure body runs, so the body may unwrap accesses that the
/// signature guarantees.
///
/// The closure receives a reference to the function struct itself, the
/// vector of evaluated arguments, and the [FunctionContext](crate::FunctionContext)
/// used to invoke expression references.
///
/// A function whose name is not a valid Rust identifier takes an
/// explicit name: `function!(type_of named "type", ...)`.
#[doc(hidden)]
#[macro_export]
macro_rules! function {

    ($name:ident, [$($param_name:ident => $param:expr),*], $closure: expr) => {
        $crate::function!($name named stringify!($name), [$($param_name => $param),*], $closure);
    };

    ($name:ident named $fname:expr, [$($param_name:ident => $param:expr),*], $closure: expr) => {
        #[allow(non_camel_case_types)]
        pub struct $name {
            signature: Vec<Parameter>,
            parameter_names: Vec<std::string::String>,
        }
        impl $name {
            pub fn new() -> Self {
                let signature = vec![ $($param),* ];
                let parameter_names = vec![ $(stringify!($param_name).to_string()),* ];
                // We convert a sequence of parameters to a string
                // by appending the lowercase initial of their categories:
                // - Required -> becomes "r"
                // - Optional -> becomes "o"
                // - Variadic -> becomes "v"
                //
                // We then match this against the following regex:
                // r"^r*(o+|v)?$"
                //
                let expression: &std::string::String = &signature
                    .iter()
                    .map(|p| match p {
                        Parameter::Required(_) => "r",
                        Parameter::Optional(_) => "o",
                        Parameter::Variadic(_) => "v",
                    })
                    .collect();

                let regex = regex::Regex::new(r"^r*(o+|v)?$").unwrap();
                let is_match: bool = regex.is_match(&expression);
                if !is_match {
                    panic!("The signature '{}' is invalid", &expression);
                }
                $name {
                    signature: signature,
                    parameter_names: parameter_names,
                }
            }
        }
        impl Function for $name {
            fn get_name(&self) -> &str {
                $fname
            }
            fn get_signature(&self) -> &Vec<Parameter> {
                &self.signature
            }
            fn execute(&self, args: &Vec<Value>, context: &dyn FunctionContext) -> ReturnValue {
                $closure(self, args, context).map(|v| v.into())
            }
            fn get_parameter_name(&self, index: usize) -> String {
                match self.parameter_names.get(index) {
                    Some(name) => name.clone(),
                    None => format!("param{}", index),
                }
            }
        }
    };
}
