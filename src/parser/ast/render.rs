//! Rendering of expression trees back to TEL source.
//!
//! Binary operators and null tests are always parenthesised, so the output
//! re-parses into the same tree whatever the precedence of the surrounding
//! context. Spans are not preserved.

use std::fmt::{self, Write as _};

use super::{Expr, ExprKind, TaxonSlug};

/// Quote `value` with `quote`, escaping quotes with `\`.
///
/// The lexer resolves `\"` and `\'` inside either kind of literal, so the
/// other quote character also needs escaping whenever a backslash precedes
/// it. Otherwise that backslash would be read back as an escape.
fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str, quote: char) -> fmt::Result {
    f.write_char(quote)?;
    let mut prev = None;
    for ch in value.chars() {
        if ch == quote || (matches!(ch, '"' | '\'') && prev == Some('\\')) {
            f.write_char('\\')?;
        }
        f.write_char(ch)?;
        prev = Some(ch);
    }
    f.write_char(quote)
}

impl fmt::Display for TaxonSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.optional {
            f.write_char('?')?;
        }
        f.write_str(&self.name)?;
        if let Some(namespace) = &self.namespace {
            write!(f, "|{namespace}")?;
        }
        if let Some(tag) = &self.tag {
            write!(f, ":{tag}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Not(expr) => write!(f, "not {expr}"),
            ExprKind::Binary { op, lhs, rhs } => write!(f, "({lhs} {} {rhs})", op.symbol()),
            ExprKind::NullTest { expr, negated } => {
                let not = if *negated { "not " } else { "" };
                write!(f, "({expr} is {not}null)")
            }
            ExprKind::Number(n) => f.write_str(&n.raw),
            ExprKind::Bool(b) => write!(f, "{b}"),
            ExprKind::SingleQuoted(s) => write_quoted(f, s, '\''),
            ExprKind::String(s) => write_quoted(f, s, '"'),
            ExprKind::Call { name, args } => {
                write!(f, "{name}(")?;
                for (idx, arg) in args.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_char(')')
            }
            ExprKind::Taxon(slug) => write!(f, "{slug}"),
        }
    }
}
