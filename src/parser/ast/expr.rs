//! Expression AST for TEL.
//!
//! Every node is an [`Expr`]: an [`ExprKind`] plus the byte [`Span`] of the
//! tokens it was built from. The tree is owned and has no back-references,
//! so evaluators can walk it with an exhaustive `match` over [`ExprKind`].

use crate::Span;

/// Binary operators in expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Mul,
    Div,
    Add,
    Sub,
    Or,
    And,
    Eq,
    Neq,
    Gt,
    Lt,
    Gte,
    Lte,
}

impl BinaryOp {
    /// Canonical TEL spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Mul => "*",
            Self::Div => "/",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Or => "||",
            Self::And => "&&",
            Self::Eq => "==",
            Self::Neq => "!=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Gte => ">=",
            Self::Lte => "<=",
        }
    }
}

/// Numeric literal, kept as written so no precision is lost.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumberLiteral {
    /// Source text, including a leading `-` when present.
    pub raw: String,
    /// `true` for the `digits.digits` form.
    pub is_real: bool,
}

/// Reference to a taxonomy entry.
///
/// `namespace` and `tag` are `Some` only when their delimiter was present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaxonSlug {
    /// Set by a leading `?`.
    pub optional: bool,
    pub name: String,
    pub namespace: Option<String>,
    pub tag: Option<String>,
}

/// The shape of an expression node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprKind {
    /// `not operand`.
    Not(Box<Expr>),
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// `expr is null`, or `expr is not null` when `negated`.
    NullTest { expr: Box<Expr>, negated: bool },
    Number(NumberLiteral),
    Bool(bool),
    /// Contents of a `'...'` element with escapes resolved.
    SingleQuoted(String),
    /// Contents of a `"..."` constant with escapes resolved.
    String(String),
    Call { name: String, args: Vec<Expr> },
    Taxon(TaxonSlug),
}

/// Parsed expression tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    pub kind: ExprKind,
    /// Bytes of source covered by the node, brackets included.
    pub span: Span,
}

impl Expr {
    #[must_use]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Direct sub-expressions in source order.
    #[must_use]
    pub fn children(&self) -> Vec<&Self> {
        match &self.kind {
            ExprKind::Not(expr) | ExprKind::NullTest { expr, .. } => vec![expr.as_ref()],
            ExprKind::Binary { lhs, rhs, .. } => vec![lhs.as_ref(), rhs.as_ref()],
            ExprKind::Call { args, .. } => args.iter().collect(),
            ExprKind::Number(_)
            | ExprKind::Bool(_)
            | ExprKind::SingleQuoted(_)
            | ExprKind::String(_)
            | ExprKind::Taxon(_) => Vec::new(),
        }
    }

    /// Every taxon slug referenced by the tree, in source order.
    ///
    /// Slugs inside function arguments are included.
    #[must_use]
    pub fn taxon_slugs(&self) -> Vec<&TaxonSlug> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            if let ExprKind::Taxon(slug) = &expr.kind {
                out.push(slug);
            }
            stack.extend(expr.children().into_iter().rev());
        }
        out
    }

    /// Display the expression as a simple S-expression for tests.
    #[must_use]
    pub fn to_sexpr(&self) -> String {
        match &self.kind {
            ExprKind::Number(n) => n.raw.clone(),
            ExprKind::Bool(b) => b.to_string(),
            ExprKind::String(s) => format!("\"{s}\""),
            ExprKind::SingleQuoted(s) => format!("'{s}'"),
            ExprKind::Taxon(slug) => slug.to_string(),
            ExprKind::Not(expr) => format!("(not {})", expr.to_sexpr()),
            ExprKind::NullTest { expr, negated } => {
                let op = if *negated { "is-not-null" } else { "is-null" };
                format!("({op} {})", expr.to_sexpr())
            }
            ExprKind::Binary { op, lhs, rhs } => {
                let op_str = match op {
                    BinaryOp::And => "and",
                    BinaryOp::Or => "or",
                    other => other.symbol(),
                };
                format!("({op_str} {} {})", lhs.to_sexpr(), rhs.to_sexpr())
            }
            ExprKind::Call { name, args } => {
                let mut out = format!("(call {name}");
                for arg in args {
                    out.push(' ');
                    out.push_str(&arg.to_sexpr());
                }
                out.push(')');
                out
            }
        }
    }
}
