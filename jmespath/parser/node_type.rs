use super::AST;
use crate::{Map, Value};

/// Represents the contents of an abstract syntax tree node.
#[derive(Clone, Debug)]
pub enum NodeType {
    /// A placeholder node.
    ///
    /// The parser uses it for the not-yet-known children of binary
    /// nodes while a chain of subexpressions and brackets is being
    /// assembled. Evaluating it returns the current context unchanged.
    Empty,

    /// An identifier. _e.g_ `foo` or `"foo bar"`.
    ///
    /// Quoted identifiers carry their text with all JSON escape
    /// sequences already decoded.
    /// # Example
    /// ```
    /// use jmespath_core as jmespath;
    /// use jmespath::{parse, NodeType};
    /// let ast = jmespath::parse("foo").unwrap();
    /// assert_eq!("(1, 1):Identifier(\"foo\")", format!("{:?}", ast));
    /// assert!(matches!(ast.node_type, NodeType::Identifier(..)));
    Identifier(String),
    /// A raw string literal. _e.g_ `'text'`.
    /// # Example
    /// ```
    /// use jmespath_core as jmespath;
    /// use jmespath::{parse, NodeType};
    /// let ast = jmespath::parse("'foo'").unwrap();
    /// assert_eq!("(1, 1):RawString(\"foo\")", format!("{:?}", ast));
    /// assert!(matches!(ast.node_type, NodeType::RawString(..)));
    RawString(String),
    /// A JSON literal. _e.g_ `` `{"foo": "bar"}` ``.
    ///
    /// The enclosed JSON is parsed when the expression is compiled;
    /// malformed JSON is a syntax error.
    Literal(Value),
    /// A reference `@` to the current node.
    /// # Example
    /// ```
    /// use jmespath_core as jmespath;
    /// use jmespath::{parse, NodeType};
    /// let ast = jmespath::parse("@").unwrap();
    /// assert!(matches!(ast.node_type, NodeType::Current));
    Current,

    /// A paren-expression `( <expression> )`.
    ParenExpression(Box<AST>),

    /// The NOT `!` unary logical operator.
    NotExpression(Box<AST>),
    /// The AND `&&` binary logical operator.
    AndExpression(Box<AST>, Box<AST>),
    /// The OR `||` binary logical operator.
    OrExpression(Box<AST>, Box<AST>),
    /// A binary comparator-expression `left { < | <= | == | != | >= | > } right`.
    /// # Example
    /// ```
    /// use jmespath_core as jmespath;
    /// use jmespath::{parse, NodeType};
    /// let ast = jmespath::parse("foo > `2`").unwrap();
    /// assert!(matches!(ast.node_type, NodeType::ComparatorExpression(..)));
    ComparatorExpression(Comparator, Box<AST>, Box<AST>),

    /// A binary pipe-expression `foo | bar`.
    ///
    /// Evaluates like a subexpression but stops any surrounding
    /// projection.
    PipeExpression(Box<AST>, Box<AST>),
    /// A binary sub-expression `foo.bar`.
    SubExpression(Box<AST>, Box<AST>),

    /// An index-expression `left [bracket] right`.
    ///
    /// The bracket specifier is one of [`Bracket::ArrayItem`],
    /// [`Bracket::Slice`], [`Bracket::Flatten`], [`Bracket::ListWildcard`]
    /// or [`Bracket::Filter`]. All specifiers except `ArrayItem` are
    /// projections: the right child is evaluated once per element of the
    /// bracket result, and null results are dropped.
    /// # Example
    /// ```
    /// use jmespath_core as jmespath;
    /// use jmespath::{parse, NodeType};
    /// let ast = jmespath::parse("foo[42]").unwrap();
    /// assert!(matches!(ast.node_type, NodeType::IndexExpression(..)));
    IndexExpression(Box<AST>, Bracket, Box<AST>),
    /// The hash wildcard `*` projection over the values of an object.
    ///
    /// The left child produces the object; the right child is projected
    /// across its values in insertion order.
    HashWildcard(Box<AST>, Box<AST>),

    /// A multi-select-list `[foo, bar]`.
    MultiSelectList(Vec<AST>),
    /// A multi-select-hash `{foo: foo, bar: bar}`.
    ///
    /// Keys preserve their source order; a duplicate key overwrites the
    /// earlier entry, as it would in a JSON object literal.
    MultiSelectHash(Map<String, AST>),

    /// A function expression `avg(foo[*])`.
    ///
    /// Arguments are ordinary expressions, or [`NodeType::ExpressionRef`]
    /// nodes for `&expression` arguments.
    FunctionExpression(String, Vec<AST>),
    /// An expression reference `&<expression>`, passed unevaluated to
    /// higher-order functions such as `map` and `sort_by`.
    ExpressionRef(Box<AST>),
}

/// Represents a comparison operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparator {
    Less,
    LessOrEqual,
    Equal,
    NotEqual,
    GreaterOrEqual,
    Greater,
}

impl std::fmt::Display for Comparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Comparator::Less => "<",
            Comparator::LessOrEqual => "<=",
            Comparator::Equal => "==",
            Comparator::NotEqual => "!=",
            Comparator::GreaterOrEqual => ">=",
            Comparator::Greater => ">",
        };
        write!(f, "{}", text)
    }
}

/// Represents the bracket specifier of a [`NodeType::IndexExpression`].
#[derive(Clone, Debug)]
pub enum Bracket {
    /// An array index `[0]`. Negative indices count from the end.
    ArrayItem(i64),
    /// A slice `[start:stop:step]`.
    Slice(Slice),
    /// The flatten operator `[]`.
    Flatten,
    /// The list wildcard `[*]`.
    ListWildcard,
    /// A filter `[?expression]`.
    Filter(Box<AST>),
}

impl Bracket {
    /// Returns `true` if this bracket specifier projects the right-hand
    /// side of its index expression across the bracket result.
    pub fn is_projection(&self) -> bool {
        !matches!(self, Bracket::ArrayItem(..))
    }
}

/// Represents the parameters for a slice [`Bracket`].
#[derive(Debug, Clone)]
pub struct Slice {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}
