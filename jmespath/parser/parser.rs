use super::insert::{attach_first_expression, insert};
use super::{Bracket, Comparator, NodeType, Slice, AST};
use crate::errors::error_builder::ErrorBuilder;
use crate::errors::error_builder::SyntaxErrorBuilder;
use crate::errors::syntax::SyntaxErrorBuilderFactory;
use crate::errors::Error as ParseError;
use crate::errors::Position;
use crate::lexer::{tokenize, Token, TokenKind};
use crate::{Map, Value};

/// Parses a JMESPath expression and returns an [`AST`]
/// that represents the compiled abstract syntax tree.
///
/// # Example
///
/// ```
/// let expression = "'foo'";
/// let ast = jmespath_core::parse(expression).unwrap();
///
/// assert_eq!("RawString(foo) [1, 1]", format!("{}", ast));
/// ```
pub fn parse(input: &str) -> Result<AST, ParseError> {
    let tokens = tokenize(input)?;
    Parser::new(tokens).parse()
}

struct Parser {
    tokens: Vec<Token>,
    index: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, index: 0 }
    }

    fn parse(mut self) -> Result<AST, ParseError> {
        let expression = self.parse_expression()?;
        // the expression must consume the whole input
        if !matches!(self.peek(), TokenKind::Eof) {
            return Err(self.syntax_error("unexpected trailing token"));
        }
        Ok(expression)
    }

    // precedence levels, loosest binding first:
    // pipe, or, and, not, comparators, then chains of dots and brackets

    fn parse_expression(&mut self) -> Result<AST, ParseError> {
        self.parse_pipe_expression()
    }

    fn parse_pipe_expression(&mut self) -> Result<AST, ParseError> {
        let mut left = self.parse_or_expression()?;
        while matches!(self.peek(), TokenKind::Pipe) {
            let position = self.position();
            self.advance();
            let right = self.parse_or_expression()?;
            left = AST::make(
                NodeType::PipeExpression(Box::new(left), Box::new(right)),
                position,
            );
        }
        Ok(left)
    }

    fn parse_or_expression(&mut self) -> Result<AST, ParseError> {
        let mut left = self.parse_and_expression()?;
        while matches!(self.peek(), TokenKind::Or) {
            let position = self.position();
            self.advance();
            let right = self.parse_and_expression()?;
            left = AST::make(
                NodeType::OrExpression(Box::new(left), Box::new(right)),
                position,
            );
        }
        Ok(left)
    }

    fn parse_and_expression(&mut self) -> Result<AST, ParseError> {
        let mut left = self.parse_not_expression()?;
        while matches!(self.peek(), TokenKind::And) {
            let position = self.position();
            self.advance();
            let right = self.parse_not_expression()?;
            left = AST::make(
                NodeType::AndExpression(Box::new(left), Box::new(right)),
                position,
            );
        }
        Ok(left)
    }

    fn parse_not_expression(&mut self) -> Result<AST, ParseError> {
        if matches!(self.peek(), TokenKind::Not) {
            let position = self.position();
            self.advance();
            let inner = self.parse_not_expression()?;
            return Ok(AST::make(NodeType::NotExpression(Box::new(inner)), position));
        }
        self.parse_comparator_expression()
    }

    fn parse_comparator_expression(&mut self) -> Result<AST, ParseError> {
        let mut left = self.parse_chain()?;
        loop {
            let comparator = match self.peek() {
                TokenKind::Equal => Comparator::Equal,
                TokenKind::NotEqual => Comparator::NotEqual,
                TokenKind::LessThan => Comparator::Less,
                TokenKind::LessThanOrEqual => Comparator::LessOrEqual,
                TokenKind::GreaterThan => Comparator::Greater,
                TokenKind::GreaterThanOrEqual => Comparator::GreaterOrEqual,
                _ => break,
            };
            let position = self.position();
            self.advance();
            let right = self.parse_chain()?;
            left = AST::make(
                NodeType::ComparatorExpression(comparator, Box::new(left), Box::new(right)),
                position,
            );
        }
        Ok(left)
    }

    /// Parses a chain of dotted accesses, brackets and wildcards.
    ///
    /// The trailing chain elements are collected first and inserted
    /// right to left, so that projections absorb the accumulated chain
    /// to their right. The leading term, when present, is attached last
    /// as the left child of the leftmost binary node.
    fn parse_chain(&mut self) -> Result<AST, ParseError> {
        let mut first: Option<AST> = None;
        let mut tails: Vec<AST> = Vec::new();

        match self.peek() {
            TokenKind::Star => {
                let position = self.position();
                self.advance();
                tails.push(Self::hash_wildcard(position));
            }
            // a leading bracket specifier is picked up by the loop below
            TokenKind::Flatten | TokenKind::Filter => {}
            TokenKind::LBracket if self.starts_bracket_specifier() => {}
            _ => {
                first = Some(self.parse_term()?);
            }
        }

        loop {
            match self.peek() {
                TokenKind::Dot => {
                    let position = self.position();
                    self.advance();
                    tails.push(self.parse_dot_rhs(position)?);
                }
                TokenKind::Flatten => {
                    let position = self.position();
                    self.advance();
                    tails.push(Self::index_expression(Bracket::Flatten, position));
                }
                TokenKind::Filter => {
                    let position = self.position();
                    self.advance();
                    let predicate = self.parse_expression()?;
                    self.expect_rbracket()?;
                    tails.push(Self::index_expression(
                        Bracket::Filter(Box::new(predicate)),
                        position,
                    ));
                }
                TokenKind::LBracket => {
                    if !self.starts_bracket_specifier() {
                        return Err(self.syntax_error("expected an index, slice or '*' bracket"));
                    }
                    let position = self.position();
                    self.advance();
                    let bracket = self.parse_bracket_specifier()?;
                    tails.push(Self::index_expression(bracket, position));
                }
                _ => break,
            }
        }

        if tails.is_empty() {
            // a chain without dots or brackets is just its leading term
            return Ok(first.expect("a chain has a leading term or at least one tail"));
        }

        let mut root = Self::empty();
        for tail in tails.into_iter().rev() {
            root = insert(root, tail);
        }
        if let Some(first) = first {
            root = attach_first_expression(root, first);
        }
        Ok(root)
    }

    /// Returns `true` if the `[` token at the current position opens an
    /// index, slice or list wildcard rather than a multi-select list.
    fn starts_bracket_specifier(&self) -> bool {
        match self.peek_at(1) {
            TokenKind::Number(..) | TokenKind::Colon => true,
            TokenKind::Star => matches!(self.peek_at(2), TokenKind::RBracket),
            _ => false,
        }
    }

    fn parse_bracket_specifier(&mut self) -> Result<Bracket, ParseError> {
        match self.peek() {
            TokenKind::Star => {
                self.advance();
                self.expect_rbracket()?;
                Ok(Bracket::ListWildcard)
            }
            TokenKind::Number(..) | TokenKind::Colon => self.parse_index_or_slice(),
            _ => Err(self.syntax_error("expected an index, slice or '*' bracket")),
        }
    }

    fn parse_index_or_slice(&mut self) -> Result<Bracket, ParseError> {
        let start = self.parse_optional_number();
        if matches!(self.peek(), TokenKind::RBracket) {
            self.advance();
            return match start {
                Some(index) => Ok(Bracket::ArrayItem(index)),
                None => Err(self.syntax_error("expected an index or slice")),
            };
        }
        self.expect_colon()?;
        let stop = self.parse_optional_number();
        let step = if matches!(self.peek(), TokenKind::Colon) {
            self.advance();
            self.parse_optional_number()
        } else {
            None
        };
        self.expect_rbracket()?;
        Ok(Bracket::Slice(Slice {
            start: start.map(|x| x as isize),
            stop: stop.map(|x| x as isize),
            step: step.map(|x| x as isize),
        }))
    }

    fn parse_optional_number(&mut self) -> Option<i64> {
        if let TokenKind::Number(number) = self.peek() {
            let number = *number;
            self.advance();
            Some(number)
        } else {
            None
        }
    }

    /// Parses the right-hand side of a `.` chain element.
    fn parse_dot_rhs(&mut self, dot_position: Position) -> Result<AST, ParseError> {
        match self.peek().clone() {
            TokenKind::Star => {
                let position = self.position();
                self.advance();
                Ok(Self::hash_wildcard(position))
            }
            TokenKind::UnquotedIdentifier(name)
                if matches!(self.peek_at(1), TokenKind::LParen) =>
            {
                let function = self.parse_function_expression(name)?;
                Ok(Self::sub_expression(function, dot_position))
            }
            TokenKind::UnquotedIdentifier(name) | TokenKind::QuotedIdentifier(name) => {
                let position = self.position();
                self.advance();
                let identifier = AST::make(NodeType::Identifier(name), position);
                Ok(Self::sub_expression(identifier, dot_position))
            }
            TokenKind::LBracket => {
                let list = self.parse_multi_select_list()?;
                Ok(Self::sub_expression(list, dot_position))
            }
            TokenKind::LBrace => {
                let hash = self.parse_multi_select_hash()?;
                Ok(Self::sub_expression(hash, dot_position))
            }
            _ => Err(self.syntax_error("expected an identifier, '*', '[' or '{' after '.'")),
        }
    }

    /// Parses a leading term: an identifier, literal, `@`, a
    /// parenthesized expression, a function call or a multi-select.
    fn parse_term(&mut self) -> Result<AST, ParseError> {
        match self.peek().clone() {
            TokenKind::UnquotedIdentifier(name)
                if matches!(self.peek_at(1), TokenKind::LParen) =>
            {
                self.parse_function_expression(name)
            }
            TokenKind::UnquotedIdentifier(name) | TokenKind::QuotedIdentifier(name) => {
                let position = self.position();
                self.advance();
                Ok(AST::make(NodeType::Identifier(name), position))
            }
            TokenKind::RawString(text) => {
                let position = self.position();
                self.advance();
                Ok(AST::make(NodeType::RawString(text), position))
            }
            TokenKind::JsonValue(text) => {
                let position = self.position();
                self.advance();
                let value = Value::from_json(&text).map_err(|err| {
                    let reason = format!("invalid JSON literal: {}", err);
                    Self::syntax_error_at(position, &reason)
                })?;
                Ok(AST::make(NodeType::Literal(value), position))
            }
            TokenKind::Current => {
                let position = self.position();
                self.advance();
                Ok(AST::make(NodeType::Current, position))
            }
            TokenKind::LParen => {
                let position = self.position();
                self.advance();
                let inner = self.parse_expression()?;
                self.expect_rparen()?;
                Ok(AST::make(
                    NodeType::ParenExpression(Box::new(inner)),
                    position,
                ))
            }
            TokenKind::LBracket => self.parse_multi_select_list(),
            TokenKind::LBrace => self.parse_multi_select_hash(),
            TokenKind::Eof => Err(self.syntax_error("unexpected end of expression")),
            _ => Err(self.syntax_error("unexpected token")),
        }
    }

    fn parse_function_expression(&mut self, name: String) -> Result<AST, ParseError> {
        let position = self.position();
        self.advance(); // function name
        self.advance(); // '('
        let mut args = Vec::new();
        if !matches!(self.peek(), TokenKind::RParen) {
            loop {
                args.push(self.parse_function_arg()?);
                if matches!(self.peek(), TokenKind::Comma) {
                    self.advance();
                } else {
                    break;
                }
            }
        }
        self.expect_rparen()?;
        Ok(AST::make(NodeType::FunctionExpression(name, args), position))
    }

    fn parse_function_arg(&mut self) -> Result<AST, ParseError> {
        if matches!(self.peek(), TokenKind::ExpRef) {
            let position = self.position();
            self.advance();
            let inner = self.parse_expression()?;
            return Ok(AST::make(NodeType::ExpressionRef(Box::new(inner)), position));
        }
        self.parse_expression()
    }

    fn parse_multi_select_list(&mut self) -> Result<AST, ParseError> {
        let position = self.position();
        self.advance(); // '['
        let mut items = Vec::new();
        loop {
            items.push(self.parse_expression()?);
            if matches!(self.peek(), TokenKind::Comma) {
                self.advance();
            } else {
                break;
            }
        }
        self.expect_rbracket()?;
        Ok(AST::make(NodeType::MultiSelectList(items), position))
    }

    fn parse_multi_select_hash(&mut self) -> Result<AST, ParseError> {
        let position = self.position();
        self.advance(); // '{'
        let mut map: Map<String, AST> = Map::new();
        loop {
            let key = match self.peek().clone() {
                TokenKind::UnquotedIdentifier(name) | TokenKind::QuotedIdentifier(name) => {
                    self.advance();
                    name
                }
                _ => return Err(self.syntax_error("expected an identifier key")),
            };
            self.expect_colon()?;
            let value = self.parse_expression()?;
            map.insert(key, value);
            if matches!(self.peek(), TokenKind::Comma) {
                self.advance();
            } else {
                break;
            }
        }
        self.expect_rbrace()?;
        Ok(AST::make(NodeType::MultiSelectHash(map), position))
    }

    fn empty() -> AST {
        AST::make(NodeType::Empty, Position::default())
    }
    fn hash_wildcard(position: Position) -> AST {
        AST::make(
            NodeType::HashWildcard(Box::new(Self::empty()), Box::new(Self::empty())),
            position,
        )
    }
    fn index_expression(bracket: Bracket, position: Position) -> AST {
        AST::make(
            NodeType::IndexExpression(Box::new(Self::empty()), bracket, Box::new(Self::empty())),
            position,
        )
    }
    fn sub_expression(right: AST, position: Position) -> AST {
        AST::make(
            NodeType::SubExpression(Box::new(Self::empty()), Box::new(right)),
            position,
        )
    }

    fn peek(&self) -> &TokenKind {
        &self.tokens[self.index].kind
    }
    fn peek_at(&self, offset: usize) -> &TokenKind {
        let index = std::cmp::min(self.index + offset, self.tokens.len() - 1);
        &self.tokens[index].kind
    }
    fn position(&self) -> Position {
        self.tokens[self.index].position
    }
    fn advance(&mut self) {
        if self.index < self.tokens.len() - 1 {
            self.index += 1;
        }
    }

    fn expect_rparen(&mut self) -> Result<(), ParseError> {
        self.expect(|kind| matches!(kind, TokenKind::RParen), "expected ')'")
    }
    fn expect_rbracket(&mut self) -> Result<(), ParseError> {
        self.expect(|kind| matches!(kind, TokenKind::RBracket), "expected ']'")
    }
    fn expect_rbrace(&mut self) -> Result<(), ParseError> {
        self.expect(|kind| matches!(kind, TokenKind::RBrace), "expected '}'")
    }
    fn expect_colon(&mut self) -> Result<(), ParseError> {
        self.expect(|kind| matches!(kind, TokenKind::Colon), "expected ':'")
    }
    fn expect<F>(&mut self, predicate: F, message: &str) -> Result<(), ParseError>
    where
        F: Fn(&TokenKind) -> bool,
    {
        if predicate(self.peek()) {
            self.advance();
            Ok(())
        } else {
            Err(self.syntax_error(message))
        }
    }

    fn syntax_error(&self, reason: &str) -> ParseError {
        Self::syntax_error_at(self.position(), reason)
    }
    fn syntax_error_at(position: Position, reason: &str) -> ParseError {
        ParseError::get_syntax_error_builder()
            .at(position)
            .for_reason(reason)
            .build()
    }
}

#[cfg(test)]
mod tests {

    use crate::parser::{parse, NodeType, AST};
    use rstest::*;

    fn debug(input: &str) -> String {
        format!("{:?}", parse(input).unwrap())
    }

    #[rstest]
    #[case("foo.@")]
    #[case("foo.")]
    #[case(".foo")]
    #[case("foo..bar")]
    #[case("foo bar")]
    #[case("[")]
    #[case("]")]
    #[case("foo[")]
    #[case("foo[bar]")]
    #[case("foo[0")]
    #[case("[1, 2]")]
    #[case("{foo: bar")]
    #[case("{`\"key\"`: bar}")]
    #[case("foo |")]
    #[case("|| foo")]
    #[case("== foo")]
    #[case("`{\"foo\": \"ba`")]
    #[case("")]
    fn error(#[case] input: &str) {
        let ast = parse(input);
        assert!(ast.is_err());
    }

    #[test]
    fn current_node() {
        let ast = parse("@");
        assert!(matches!(
            ast,
            Ok(AST {
                node_type: NodeType::Current,
                ..
            })
        ));
    }

    #[rstest]
    #[case("foo", "foo")]
    #[case(r#""foo bar""#, "foo bar")]
    #[case(r#""foo\"bar""#, "foo\"bar")]
    fn identifier(#[case] input: &str, #[case] expected: &str) {
        let ast = parse(input);
        match ast {
            Ok(AST {
                node_type: NodeType::Identifier(text),
                ..
            }) => assert_eq!(expected, text),
            _ => unreachable!(),
        }
    }

    #[rstest]
    #[case("", "''")]
    #[case("raw_string", "'raw_string'")]
    #[case("\\", r#"'\\'"#)]
    #[case("'", r#"'\''"#)]
    fn raw_string(#[case] expected: &str, #[case] input: &str) {
        let ast = parse(input);
        match ast {
            Ok(AST {
                node_type: NodeType::RawString(text),
                ..
            }) => assert_eq!(expected, text),
            _ => unreachable!(),
        }
    }

    #[rstest]
    #[case(r#"`"foo"`"#)]
    #[case("`null`")]
    #[case("`[1, 2]`")]
    #[case(r#"`{"foo": "bar"}`"#)]
    fn json_value(#[case] input: &str) {
        let ast = parse(input);
        assert!(matches!(
            ast,
            Ok(AST {
                node_type: NodeType::Literal(..),
                ..
            })
        ));
    }

    #[rstest]
    #[case("foo < bar")]
    #[case("foo <= bar")]
    #[case("foo == bar")]
    #[case("foo != bar")]
    #[case("foo > bar")]
    #[case("foo >= bar")]
    fn comparator_expression(#[case] input: &str) {
        let ast = parse(input);
        assert!(matches!(
            ast,
            Ok(AST {
                node_type: NodeType::ComparatorExpression(..),
                ..
            })
        ));
    }

    #[rstest]
    #[case("length(foo)")]
    #[case("min_by(foo, &age)")]
    #[case("merge()")]
    #[case("not_null(one, two, three)")]
    fn function_expression(#[case] input: &str) {
        let ast = parse(input);
        assert!(matches!(
            ast,
            Ok(AST {
                node_type: NodeType::FunctionExpression(..),
                ..
            })
        ));
    }

    #[rstest]
    #[case("*")]
    #[case("foo.*")]
    #[case("foo.*.bar")]
    fn hash_wildcard(#[case] input: &str) {
        let ast = parse(input);
        assert!(matches!(
            ast,
            Ok(AST {
                node_type: NodeType::HashWildcard(..),
                ..
            })
        ));
    }

    #[rstest]
    #[case("[0]")]
    #[case("foo[0]")]
    #[case("[*]")]
    #[case("[]")]
    #[case("[?foo]")]
    #[case("[0:3]")]
    #[case("foo[::-1]")]
    fn index_expression(#[case] input: &str) {
        let ast = parse(input);
        assert!(matches!(
            ast,
            Ok(AST {
                node_type: NodeType::IndexExpression(..),
                ..
            })
        ));
    }

    #[test]
    fn pipe_expression() {
        assert_eq!(
            "(1, 5):PipeExpression((1, 1):Identifier(\"foo\"), (1, 7):Identifier(\"bar\"))",
            debug("foo | bar")
        );
    }

    #[test]
    fn sub_expression() {
        assert_eq!(
            "(1, 4):SubExpression((1, 1):Identifier(\"foo\"), (1, 5):Identifier(\"bar\"))",
            debug("foo.bar")
        );
    }

    #[test]
    fn recursive_sub_expression() {
        // dotted access is left-associative
        assert_eq!(
            "(1, 8):SubExpression((1, 4):SubExpression((1, 1):Identifier(\"id1\"), \
             (1, 5):Identifier(\"id2\")), (1, 9):Identifier(\"id3\"))",
            debug("id1.id2.id3")
        );
    }

    #[test]
    fn index_expression_after_sub_expression() {
        assert_eq!(
            "(1, 8):IndexExpression((1, 4):SubExpression((1, 1):Identifier(\"id1\"), \
             (1, 5):Identifier(\"id2\")), ArrayItem(4), (0, 0):Empty)",
            debug("id1.id2[4]")
        );
    }

    #[test]
    fn sub_expression_after_index_expression() {
        assert_eq!(
            "(1, 4):SubExpression((1, 1):IndexExpression((0, 0):Empty, ArrayItem(4), \
             (0, 0):Empty), (1, 5):Identifier(\"id\"))",
            debug("[4].id")
        );
    }

    #[test]
    fn flatten_with_sub_expression() {
        // the subexpression is projected by the flatten operator
        assert_eq!(
            "(1, 1):IndexExpression((0, 0):Empty, Flatten, \
             (1, 3):SubExpression((0, 0):Empty, (1, 4):Identifier(\"id\")))",
            debug("[].id")
        );
    }

    #[test]
    fn recursive_flatten_operators() {
        // each flatten collapses the chain built so far: the second
        // operator keeps the first one in its left subtree
        let text = debug("id1[].id2.id3[].id4.id5");
        let expected = "(1, 14):IndexExpression(\
            (1, 4):IndexExpression((1, 1):Identifier(\"id1\"), Flatten, \
            (1, 10):SubExpression((1, 6):SubExpression((0, 0):Empty, \
            (1, 7):Identifier(\"id2\")), (1, 11):Identifier(\"id3\"))), Flatten, \
            (1, 20):SubExpression((1, 16):SubExpression((0, 0):Empty, \
            (1, 17):Identifier(\"id4\")), (1, 21):Identifier(\"id5\")))";
        assert_eq!(expected, text);
    }

    #[test]
    fn recursive_list_wildcards() {
        // list wildcards nest: the second projection lives in the right
        // subtree of the first one
        let text = debug("id1[*].id2.id3[*].id4.id5");
        let expected = "(1, 4):IndexExpression((1, 1):Identifier(\"id1\"), ListWildcard, \
            (1, 15):IndexExpression((1, 11):SubExpression((1, 7):SubExpression((0, 0):Empty, \
            (1, 8):Identifier(\"id2\")), (1, 12):Identifier(\"id3\")), ListWildcard, \
            (1, 22):SubExpression((1, 18):SubExpression((0, 0):Empty, \
            (1, 19):Identifier(\"id4\")), (1, 23):Identifier(\"id5\"))))";
        assert_eq!(expected, text);
    }

    #[test]
    fn recursive_hash_wildcards() {
        let text = debug("id1.*.id2.id3.*.id4.id5");
        let expected = "(1, 5):HashWildcard((1, 1):Identifier(\"id1\"), \
            (1, 15):HashWildcard((1, 10):SubExpression((1, 6):SubExpression((0, 0):Empty, \
            (1, 7):Identifier(\"id2\")), (1, 11):Identifier(\"id3\")), \
            (1, 20):SubExpression((1, 16):SubExpression((0, 0):Empty, \
            (1, 17):Identifier(\"id4\")), (1, 21):Identifier(\"id5\"))))";
        assert_eq!(expected, text);
    }

    #[test]
    fn multi_select_list_as_sub_expression() {
        assert_eq!(
            "(1, 3):SubExpression((1, 1):Identifier(\"id\"), \
             (1, 4):MultiSelectList([(1, 5):Identifier(\"id1\"), (1, 10):Identifier(\"id2\")]))",
            debug("id.[id1, id2]")
        );
    }

    #[test]
    fn multi_select_hash() {
        let ast = parse("{foo: bar, baz: qux}").unwrap();
        assert!(matches!(ast.node_type, NodeType::MultiSelectHash(..)));
    }

    #[test]
    fn multi_select_hash_duplicate_keys_overwrite() {
        let ast = parse("{foo: bar, foo: baz}").unwrap();
        match ast.node_type {
            NodeType::MultiSelectHash(map) => {
                assert_eq!(1, map.len());
                assert!(
                    matches!(&map["foo"].node_type, NodeType::Identifier(name) if name == "baz")
                );
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn paren_expression_groups() {
        let ast = parse("(foo | bar).baz").unwrap();
        match ast.node_type {
            NodeType::SubExpression(left, _) => {
                assert!(matches!(left.node_type, NodeType::ParenExpression(..)));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn not_binds_tighter_than_and() {
        let ast = parse("!foo && bar").unwrap();
        match ast.node_type {
            NodeType::AndExpression(left, _) => {
                assert!(matches!(left.node_type, NodeType::NotExpression(..)));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn not_binds_looser_than_comparators() {
        let ast = parse("!foo == bar").unwrap();
        assert!(matches!(ast.node_type, NodeType::NotExpression(..)));
    }

    #[test]
    fn pipe_binds_loosest() {
        let ast = parse("foo == bar | baz").unwrap();
        match ast.node_type {
            NodeType::PipeExpression(left, _) => {
                assert!(matches!(
                    left.node_type,
                    NodeType::ComparatorExpression(..)
                ));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn filter_holds_a_full_expression() {
        let ast = parse("foo[?bar == `1` || baz]").unwrap();
        assert!(matches!(ast.node_type, NodeType::IndexExpression(..)));
    }

    #[test]
    fn expression_reference_argument() {
        let ast = parse("sort_by(foo, &age)").unwrap();
        match ast.node_type {
            NodeType::FunctionExpression(name, args) => {
                assert_eq!("sort_by", name);
                assert_eq!(2, args.len());
                assert!(matches!(args[1].node_type, NodeType::ExpressionRef(..)));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn dotted_function_call() {
        let ast = parse("foo.length(@)").unwrap();
        match ast.node_type {
            NodeType::SubExpression(_, right) => {
                assert!(matches!(
                    right.node_type,
                    NodeType::FunctionExpression(..)
                ));
            }
            _ => unreachable!(),
        }
    }
}
