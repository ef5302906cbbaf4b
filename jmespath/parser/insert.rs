//! Projection-aware construction of chained expressions.
//!
//! A chain such as `a[].b[*].c` is assembled from its trailing pieces,
//! inserted right to left into a growing tree. Each node carries a rank;
//! an incoming projection absorbs the current tree as its right child
//! when its rank wins, and descends into the left spine otherwise. The
//! leading term of the chain is attached last, as the left child of the
//! leftmost binary node.

use super::{Bracket, NodeType, AST};

/// Returns the rank of a node, used to arbitrate between an incoming
/// chain element and the current tree.
///
/// The placeholder is ranked below every real node; terminals rank 0;
/// subexpressions and plain array indices rank 1; projections rank 2.
pub(crate) fn node_rank(ast: &AST) -> i32 {
    match &ast.node_type {
        NodeType::Empty => -1,
        NodeType::SubExpression(..) => 1,
        NodeType::IndexExpression(_, bracket, _) => bracket_rank(bracket),
        NodeType::HashWildcard(..) => 2,
        _ => 0,
    }
}

fn bracket_rank(bracket: &Bracket) -> i32 {
    match bracket {
        Bracket::ArrayItem(..) => 1,
        _ => 2,
    }
}

/// Returns `true` for the binary chain nodes: subexpressions, index
/// expressions and hash wildcards.
pub(crate) fn is_binary(ast: &AST) -> bool {
    matches!(
        &ast.node_type,
        NodeType::SubExpression(..) | NodeType::IndexExpression(..) | NodeType::HashWildcard(..)
    )
}

/// Returns `true` if the node projects its right child across the
/// elements of its intermediate result.
pub(crate) fn is_projection(ast: &AST) -> bool {
    match &ast.node_type {
        NodeType::IndexExpression(_, bracket, _) => bracket.is_projection(),
        NodeType::HashWildcard(..) => true,
        _ => false,
    }
}

/// Returns `true` if the node refuses to be absorbed by an incoming
/// projection of equal rank.
///
/// The flatten operator collapses the result of the projection built so
/// far before a new projection starts, so `a[].b[].c` produces one flat
/// list. List wildcards, slices, filters and hash wildcards nest
/// instead, so `a[*].b[*].c` produces a list per element.
pub(crate) fn stops_projection(ast: &AST) -> bool {
    matches!(
        &ast.node_type,
        NodeType::IndexExpression(_, Bracket::Flatten, _)
    )
}

/// Inserts `current` into the tree rooted at `target` and returns the
/// new root.
///
/// If the target is not a binary node it is replaced outright. An
/// incoming node of higher rank, or of equal rank when it is a
/// projection and the target does not stop projections, absorbs the
/// target as its right child. Otherwise the insertion descends into the
/// target's left child.
pub(crate) fn insert(target: AST, current: AST) -> AST {
    if !is_binary(&target) {
        return current;
    }
    let target_rank = node_rank(&target);
    let current_rank = node_rank(&current);
    if current_rank > target_rank
        || (current_rank == target_rank && is_projection(&current) && !stops_projection(&target))
    {
        with_right(current, target)
    } else {
        with_inserted_left(target, current)
    }
}

/// Attaches the leading term of a chain as the left child of the
/// leftmost binary node whose rank is at least the rank of the term.
pub(crate) fn attach_first_expression(root: AST, first: AST) -> AST {
    let min_rank = node_rank(&first);
    if is_binary(&root) && node_rank(&root) >= min_rank {
        place_first(root, first, min_rank)
    } else {
        root
    }
}

fn place_first(node: AST, first: AST, min_rank: i32) -> AST {
    // the caller guarantees that node is a binary node of sufficient rank
    let descend = {
        let left = left_of(&node);
        is_binary(left) && node_rank(left) >= min_rank
    };
    if descend {
        map_left(node, |left| place_first(left, first, min_rank))
    } else {
        with_left(node, first)
    }
}

fn left_of(ast: &AST) -> &AST {
    match &ast.node_type {
        NodeType::SubExpression(left, _) => left,
        NodeType::IndexExpression(left, _, _) => left,
        NodeType::HashWildcard(left, _) => left,
        _ => unreachable!(),
    }
}

fn with_left(ast: AST, left: AST) -> AST {
    let AST {
        node_type,
        position,
    } = ast;
    let node_type = match node_type {
        NodeType::SubExpression(_, right) => NodeType::SubExpression(Box::new(left), right),
        NodeType::IndexExpression(_, bracket, right) => {
            NodeType::IndexExpression(Box::new(left), bracket, right)
        }
        NodeType::HashWildcard(_, right) => NodeType::HashWildcard(Box::new(left), right),
        _ => unreachable!(),
    };
    AST::make(node_type, position)
}

fn with_right(ast: AST, right: AST) -> AST {
    let AST {
        node_type,
        position,
    } = ast;
    let node_type = match node_type {
        NodeType::SubExpression(left, _) => NodeType::SubExpression(left, Box::new(right)),
        NodeType::IndexExpression(left, bracket, _) => {
            NodeType::IndexExpression(left, bracket, Box::new(right))
        }
        NodeType::HashWildcard(left, _) => NodeType::HashWildcard(left, Box::new(right)),
        _ => unreachable!(),
    };
    AST::make(node_type, position)
}

fn map_left<F>(ast: AST, f: F) -> AST
where
    F: FnOnce(AST) -> AST,
{
    let AST {
        node_type,
        position,
    } = ast;
    let node_type = match node_type {
        NodeType::SubExpression(left, right) => {
            NodeType::SubExpression(Box::new(f(*left)), right)
        }
        NodeType::IndexExpression(left, bracket, right) => {
            NodeType::IndexExpression(Box::new(f(*left)), bracket, right)
        }
        NodeType::HashWildcard(left, right) => NodeType::HashWildcard(Box::new(f(*left)), right),
        _ => unreachable!(),
    };
    AST::make(node_type, position)
}

fn with_inserted_left(target: AST, current: AST) -> AST {
    map_left(target, |left| insert(left, current))
}
