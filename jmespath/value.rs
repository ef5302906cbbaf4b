use crate::functions::DataType;
use crate::parser::AST;
use crate::utils::Number;
use crate::Map;

/// Represents any valid value that is processed during evaluation
/// of a JMESPath expression or used as an argument to a JMESPath
/// [Function](crate::functions::Function).
#[derive(Debug, Clone)]
pub enum Value {
    /// Represents a valid JSON array.
    /// # Example
    /// ```
    /// use jmespath_core as jmespath;
    /// use jmespath::Value;
    /// let value: Value = vec![1, 2, 3].into();
    /// assert!(matches!(value, Value::Array(..)));
    Array(Vec<Value>),
    /// Represents a valid JSON boolean.
    /// # Example
    /// ```
    /// use jmespath_core as jmespath;
    /// use jmespath::Value;
    /// let value: Value = true.into();
    /// assert!(matches!(value, Value::Boolean(true)));
    Boolean(bool),
    /// Represents a valid JSON null token.
    /// # Example
    /// ```
    /// use jmespath_core as jmespath;
    /// use jmespath::Value;
    /// let value: Value = None.into();
    /// assert!(matches!(value, Value::Null));
    Null,
    /// Represents a valid JSON number.
    /// # Example
    /// ```
    /// use jmespath_core as jmespath;
    /// use jmespath::Value;
    /// use jmespath::Number;
    /// let value: Value = 42.into();
    /// assert!(matches!(value, Value::Number(..)));
    Number(Number),
    /// Represents a valid JSON string.
    /// # Example
    /// ```
    /// use jmespath_core as jmespath;
    /// use jmespath::Value;
    /// let value: Value = "text".into();
    /// assert!(matches!(value, Value::String(..)));
    String(String),
    /// Represents a valid JSON object.
    ///
    /// Objects preserve the insertion order of their keys.
    /// # Example
    /// ```
    /// use jmespath_core as jmespath;
    /// use jmespath::{Map, Value};
    /// use jmespath::map;
    /// let value: Value = map!("foo" => "bar").into();
    /// assert!(matches!(value, Value::Object(..)));
    Object(Map<String, Value>),

    /// Represents an unevaluated JMESPath expression, as passed to
    /// higher-order functions with the `&expression` syntax.
    Expression(Box<AST>),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Expression(ast) => format!("{:?}", ast),
            _ => serde_json::to_string(self).map_err(|_| std::fmt::Error)?,
        };
        write!(f, "{}", text)
    }
}

macro_rules! as_ {
    ($ident:ident, $enum:ident, $type:ty) => {
        #[doc = "Returns an"]
        #[doc = concat!("[`Option<", stringify!($type), ">`]") ]
        #[doc = "of the corresponding type."]
        pub fn $ident(&self) -> Option<$type> {
            if let Self::$enum(token) = self {
                Some(token)
            } else {
                None
            }
        }
    };
}
macro_rules! as_deref {
    ($ident:ident, $enum:ident, $type:ty) => {
        #[doc = "Returns an"]
        #[doc = concat!("[`Option<", stringify!($type), ">`]") ]
        #[doc = "of the corresponding type."]
        pub fn $ident(&self) -> Option<$type> {
            if let Self::$enum(token) = self {
                Some(*token)
            } else {
                None
            }
        }
    };
}
macro_rules! if_ {
    ($ident:ident, $enum:ident) => {
        #[doc = "Returns [`Option<Value>`] if the [`Value`] is "]
        #[doc = stringify!($ident)]
        #[doc = "."]
        pub fn $ident(&self) -> Option<Value> {
            if matches!(self, Value::$enum(..)) {
                Some(self.clone())
            } else {
                None
            }
        }
    };
}
macro_rules! is_ {
    ($ident:ident, $type:ident) => {
        #[doc = "Returns `true` if the [`Value`] is a value from type"]
        #[doc = concat!("[`Value::", stringify!($type), "`].")]
        pub fn $ident(&self) -> bool {
            matches!(*self, Self::$type(..))
        }
    };
}

impl Value {
    /// Converts a [`serde_json::Value`] to a [`Value`].
    /// # Example
    /// ```
    /// use serde_json::json;
    /// use jmespath_core as jmespath;
    /// use jmespath::Value;
    ///
    /// let s = json!({"foo": "bar"});
    /// let v = Value::map_from_json(&s);
    /// assert!(matches!(v, Value::Object(..)));
    pub fn map_from_json(value: &serde_json::Value) -> Value {
        match value {
            serde_json::Value::Array(a) => {
                Value::Array(a.into_iter().map(|x| Self::map_from_json(x)).collect())
            }
            serde_json::Value::Bool(b) => Value::Boolean(*b),
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Number(n) => {
                let num = match n.as_i64() {
                    Some(i) => Number::Int(i),
                    None => Number::Float(n.as_f64().unwrap()),
                };
                Value::Number(num)
            }
            serde_json::Value::String(s) => Value::String(s.to_string()),
            serde_json::Value::Object(m) => {
                let map: Map<String, Value> = m
                    .iter()
                    .map(|(k, v)| (k.clone(), Self::map_from_json(v)))
                    .collect();
                Value::Object(map)
            }
        }
    }
    /// Creates a [`Value`] from a JSON representation.
    ///
    /// Convenience function that uses `serde_json` to convert
    /// a JSON representation to a [`Value`].
    ///
    /// # Example
    ///
    /// ```
    /// use jmespath_core as jmespath;
    /// use jmespath::Value;
    ///
    /// let value = Value::from_json(r#"{"foo": "bar"}"#).unwrap();
    /// assert!(value.is_object());
    /// ```
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let obj: serde_json::Value = serde_json::from_str(text)?;
        Ok(Self::map_from_json(&obj))
    }
    /// Returns the JSON string representation
    /// for this [`Value`].
    ///
    /// # Example
    ///
    /// ```
    /// use jmespath_core as jmespath;
    /// use jmespath::Value;
    ///
    /// assert_eq!("null", Value::Null.to_json());
    /// assert_eq!("\"text\"", Value::String("text".to_string()).to_json());
    /// ```
    pub fn to_json(&self) -> String {
        // serde_json::to_string() can fail only if Value's implementation
        // of Serialize decides to fail, or if Value contains a map with
        // non-string keys.
        serde_json::to_string(self).expect("unable to serialize invalid JSON")
    }

    /// Returns the corresponding [`DataType`]
    ///
    /// # Example
    ///
    /// ```
    /// use jmespath_core as jmespath;
    /// use jmespath::Value;
    /// use jmespath::functions::DataType;
    ///
    /// let arg = Value::Number(42.into());
    /// assert_eq!(DataType::Number, arg.get_data_type());
    /// ```
    pub fn get_data_type(&self) -> DataType {
        match self {
            Self::Array(_) => DataType::Array,
            Self::Boolean(_) => DataType::Boolean,
            Self::Null => DataType::Null,
            Self::Number(_) => DataType::Number,
            Self::Object(_) => DataType::Object,
            Self::String(_) => DataType::String,
            Self::Expression(_) => DataType::ExpRef,
        }
    }

    as_!(as_array, Array, &Vec<Value>);
    /// Returns an [`Option<&AST>`] of the corresponding type.
    pub fn as_expref(&self) -> Option<&AST> {
        if let Self::Expression(token) = self {
            Some(token)
        } else {
            None
        }
    }
    as_!(as_number, Number, &Number);
    as_!(as_object, Object, &Map<String, Value>);
    as_!(as_str, String, &str);

    as_deref!(as_bool, Boolean, bool);

    /// Returns an [`Option<f64>`] of the corresponding type.
    pub fn as_f64(&self) -> Option<f64> {
        if let Self::Number(n) = self {
            Some(n.as_f64())
        } else {
            None
        }
    }

    if_!(if_array, Array);
    if_!(if_object, Object);

    /// Returns `true` if the [`Value`] is the `null` value.
    pub fn is_null(&self) -> bool {
        matches!(*self, Self::Null)
    }

    is_!(is_array, Array);
    is_!(is_bool, Boolean);
    is_!(is_number, Number);
    is_!(is_object, Object);
    is_!(is_str, String);

    is_!(is_expression, Expression);

    /// Returns `true` if the [`Value`] is the boolean `true`.
    pub fn is_true(&self) -> bool {
        matches!(self, Value::Boolean(true))
    }
    /// Returns `false` if the [`Value`] is the boolean `false`.
    pub fn is_false(&self) -> bool {
        matches!(self, Value::Boolean(false))
    }

    /// Returns `true` if the [`Value`] is either:
    /// - the `null` value
    /// - the boolean `false`
    /// - the empty string `""`
    /// - an empty array `[]`
    /// - an empty object `{}`
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Array(a) => a.is_empty(),
            Value::Boolean(b) => !*b,
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Object(o) => o.is_empty(),
            _ => false,
        }
    }
    /// Returns `true` if the [`Value`] is not a _falsy_ value.
    /// This is the opposite to the [`Value::is_falsy()`] function.
    pub fn is_truthy(&self) -> bool {
        !self.is_falsy()
    }
}
