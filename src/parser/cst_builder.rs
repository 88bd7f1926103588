//! Build a lossless `rowan` green tree from tokens and a parsed expression.
//!
//! Every token, whitespace included, lands in the tree exactly once, so the
//! tree's text equals the source. Each [`Expr`] becomes a node spanning its
//! tokens; tokens between child expressions (operators, brackets, commas)
//! attach to the innermost enclosing node.

use log::warn;
use rowan::{GreenNode, GreenNodeBuilder, Language};

use crate::parser::ast::{Expr, ExprKind};
use crate::{SyntaxKind, TelLanguage, Token};

fn node_kind(expr: &Expr) -> SyntaxKind {
    match expr.kind {
        ExprKind::Not(_) => SyntaxKind::N_NOT_EXPR,
        ExprKind::Binary { .. } => SyntaxKind::N_BINARY_EXPR,
        ExprKind::NullTest { .. } => SyntaxKind::N_NULL_TEST,
        ExprKind::Number(_)
        | ExprKind::Bool(_)
        | ExprKind::SingleQuoted(_)
        | ExprKind::String(_) => SyntaxKind::N_LITERAL,
        ExprKind::Call { .. } => SyntaxKind::N_CALL,
        ExprKind::Taxon(_) => SyntaxKind::N_TAXON,
    }
}

struct TreeBuilder<'t, 'src> {
    builder: GreenNodeBuilder<'static>,
    tokens: std::iter::Peekable<std::slice::Iter<'t, Token<'src>>>,
}

impl TreeBuilder<'_, '_> {
    /// Push every remaining token that ends at or before `pos`.
    fn push_until(&mut self, pos: usize) {
        while let Some(tok) = self.tokens.next_if(|t| t.span.end <= pos) {
            self.push_token(tok.kind, tok.text);
        }
    }

    fn push_token(&mut self, kind: SyntaxKind, text: &str) {
        if kind == SyntaxKind::T_EOF {
            return;
        }
        self.builder.token(TelLanguage::kind_to_raw(kind), text);
    }

    fn push_expr(&mut self, expr: &Expr) {
        self.push_until(expr.span.start);
        self.builder.start_node(TelLanguage::kind_to_raw(node_kind(expr)));
        for child in expr.children() {
            self.push_expr(child);
        }
        self.push_until(expr.span.end);
        self.builder.finish_node();
    }
}

/// Construct the syntax tree for `expr` from the trivia-preserving `tokens`.
///
/// # Examples
///
/// ```ignore
/// let src = " a + 1 ";
/// let tokens = tokenize_with_trivia(src)?;
/// let expr = parse(src)?;
/// let green = build_green_tree(&tokens, &expr);
/// assert_eq!(SyntaxNode::new_root(green).text(), src);
/// ```
pub(crate) fn build_green_tree(tokens: &[Token<'_>], expr: &Expr) -> GreenNode {
    let mut tree = TreeBuilder {
        builder: GreenNodeBuilder::new(),
        tokens: tokens.iter().peekable(),
    };
    tree.builder.start_node(TelLanguage::kind_to_raw(SyntaxKind::N_ROOT));
    tree.push_expr(expr);
    let mut leftover = 0;
    while let Some(tok) = tree.tokens.next() {
        if !tok.kind.is_trivia() && tok.kind != SyntaxKind::T_EOF {
            leftover += 1;
        }
        tree.push_token(tok.kind, tok.text);
    }
    if leftover > 0 {
        warn!("{leftover} significant tokens lie outside the parsed expression");
    }
    tree.builder.finish_node();
    tree.builder.finish()
}
