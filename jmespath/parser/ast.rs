use super::{Bracket, NodeType};
use crate::{errors::Position, functions::ReturnValue};

/// Represents an abstract syntax tree node.
#[derive(Clone)]
pub struct AST {
    /// The node type.
    pub node_type: NodeType,
    /// The position of this node in the JMESPath expression.
    pub position: Position,
}
impl AST {
    /// Creates a new instance of the [`AST`] type.
    pub fn make(node_type: NodeType, position: Position) -> Self {
        AST {
            node_type,
            position,
        }
    }
    /// Evaluates a JMESPath expression.
    ///
    /// # Example
    /// ```
    /// use jmespath_core as jmespath;
    /// use jmespath::{parse, Value};
    ///
    /// let ast = parse("foo").unwrap();
    /// let data = Value::from_json(r#"{"foo": "bar"}"#).unwrap();
    /// let result = ast.search(&data).unwrap();
    ///
    /// assert_eq!("bar", result);
    /// ```
    pub fn search(&self, root: &crate::Value) -> ReturnValue {
        let runtime = crate::runtime::Runtime::get_shared_runtime();
        runtime.search_ast(self, root)
    }
}

impl std::fmt::Debug for AST {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:?}", self.position, self.node_type)
    }
}
impl std::fmt::Display for AST {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

impl AST {
    fn format(&self) -> String {
        self.pretty_print(0)
    }
    fn pretty_print(&self, indent_level: usize) -> String {
        fn pretty_print_children(children: &[&AST], indent_level: usize) -> String {
            let mut text = "".to_string();
            for child in children {
                let pretty = format!("\n{}", child.pretty_print(indent_level));
                text.push_str(&pretty);
            }
            text
        }
        let (node_type, children) = match &self.node_type {
            NodeType::Current => ("Current".to_string(), "".to_string()),
            NodeType::Empty => ("Empty".to_string(), "".to_string()),

            NodeType::Identifier(text) => (format!("Identifier({})", text), "".to_string()),
            NodeType::RawString(text) => (format!("RawString({})", text), "".to_string()),
            NodeType::Literal(value) => (format!("Literal({})", value), "".to_string()),

            NodeType::ParenExpression(inner) => (
                "ParenExpression".to_string(),
                pretty_print_children(&[inner], indent_level + 1),
            ),
            NodeType::NotExpression(inner) => (
                "NotExpression".to_string(),
                pretty_print_children(&[inner], indent_level + 1),
            ),
            NodeType::AndExpression(left, right) => (
                "AndExpression".to_string(),
                pretty_print_children(&[left, right], indent_level + 1),
            ),
            NodeType::OrExpression(left, right) => (
                "OrExpression".to_string(),
                pretty_print_children(&[left, right], indent_level + 1),
            ),
            NodeType::ComparatorExpression(comparator, left, right) => (
                format!("ComparatorExpression({})", comparator),
                pretty_print_children(&[left, right], indent_level + 1),
            ),
            NodeType::PipeExpression(left, right) => (
                "PipeExpression".to_string(),
                pretty_print_children(&[left, right], indent_level + 1),
            ),
            NodeType::SubExpression(left, right) => (
                "SubExpression".to_string(),
                pretty_print_children(&[left, right], indent_level + 1),
            ),
            NodeType::HashWildcard(left, right) => (
                "HashWildcard".to_string(),
                pretty_print_children(&[left, right], indent_level + 1),
            ),
            NodeType::IndexExpression(left, bracket, right) => {
                let name = match bracket {
                    Bracket::ArrayItem(index) => format!("IndexExpression[{}]", index),
                    Bracket::Slice(slice) => format!(
                        "IndexExpression[{:?}:{:?}:{:?}]",
                        slice.start, slice.stop, slice.step
                    ),
                    Bracket::Flatten => "IndexExpression[flatten]".to_string(),
                    Bracket::ListWildcard => "IndexExpression[*]".to_string(),
                    Bracket::Filter(..) => "IndexExpression[?]".to_string(),
                };
                let mut children = match bracket {
                    Bracket::Filter(predicate) => {
                        pretty_print_children(&[left, predicate], indent_level + 1)
                    }
                    _ => pretty_print_children(&[left], indent_level + 1),
                };
                children.push_str(&pretty_print_children(&[right], indent_level + 1));
                (name, children)
            }
            NodeType::MultiSelectList(items) => {
                let children: Vec<&AST> = items.iter().collect();
                (
                    "MultiSelectList".to_string(),
                    pretty_print_children(&children, indent_level + 1),
                )
            }
            NodeType::MultiSelectHash(map) => {
                let mut children = "".to_string();
                for item in map {
                    children.push_str(&format!("\n{}{}", "  ".repeat(indent_level + 1), item.0));
                    children.push_str(&pretty_print_children(&[item.1], indent_level + 2));
                }
                ("MultiSelectHash".to_string(), children)
            }
            NodeType::FunctionExpression(name, args) => {
                let children: Vec<&AST> = args.iter().collect();
                (
                    format!("FunctionExpression({})", name),
                    pretty_print_children(&children, indent_level + 1),
                )
            }
            NodeType::ExpressionRef(inner) => (
                "ExpressionRef".to_string(),
                pretty_print_children(&[inner], indent_level + 1),
            ),
        };
        format!(
            "{}{} [{}, {}]{}",
            "  ".repeat(indent_level),
            node_type,
            self.position.line,
            self.position.column,
            children,
        )
    }
}
