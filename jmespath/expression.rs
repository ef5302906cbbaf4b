use crate::errors::Error;
use crate::functions::ReturnValue;
use crate::parser::{parse, AST};
use crate::Value;

/// Represents a compiled JMESPath expression.
///
/// An [`Expression`] owns the original source text and the parsed
/// abstract syntax tree, and can be reused for any number of searches.
/// Two expressions compare equal when their source strings are
/// identical. A default-constructed expression is empty and evaluates
/// to null.
///
/// # Example
/// ```
/// use jmespath_core as jmespath;
/// use jmespath::{Expression, Value};
///
/// let expression = Expression::compile("foo.bar").unwrap();
/// let data = Value::from_json(r#"{"foo": {"bar": 42}}"#).unwrap();
/// let result = expression.search(&data).unwrap();
/// assert_eq!(42, result);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Expression {
    source: String,
    ast: Option<AST>,
}

impl Expression {
    /// Creates an empty [`Expression`].
    pub fn new() -> Self {
        Expression {
            source: String::new(),
            ast: None,
        }
    }
    /// Compiles the given JMESPath expression text.
    ///
    /// Empty text compiles to an empty expression.
    pub fn compile(text: &str) -> Result<Self, Error> {
        if text.is_empty() {
            return Ok(Self::new());
        }
        let ast = parse(text)?;
        Ok(Expression {
            source: text.to_string(),
            ast: Some(ast),
        })
    }
    /// Evaluates the expression against the given value.
    ///
    /// An empty expression evaluates to null.
    pub fn search(&self, root: &Value) -> ReturnValue {
        match &self.ast {
            Some(ast) => ast.search(root),
            None => Ok(Value::Null),
        }
    }
    /// Returns `true` if the expression is empty.
    pub fn is_empty(&self) -> bool {
        self.ast.is_none()
    }
    /// Returns the root of the parsed abstract syntax tree, if any.
    pub fn ast_root(&self) -> Option<&AST> {
        self.ast.as_ref()
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl std::str::FromStr for Expression {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::compile(text)
    }
}
impl TryFrom<&str> for Expression {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::compile(text)
    }
}

impl Eq for Expression {}
impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}
