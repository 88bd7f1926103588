//! Operator precedence table for TEL expressions.
//!
//! This module centralizes binding power definitions for the prefix `not`,
//! the binary operators and the postfix null test. Higher numbers bind
//! tighter; every binary level is left-associative (`r_bp = l_bp + 1`).
//! Comparison and boolean operators share one level.

use crate::SyntaxKind;

use super::BinaryOp;

#[derive(Debug, Clone, Copy)]
pub(crate) struct InfixEntry {
    pub l_bp: u8,
    pub r_bp: u8,
    pub op: BinaryOp,
}

/// Binding power of the operand of a prefix `not`.
///
/// Higher than every binary operator, so `not a and b` is `(not a) and b`.
pub(crate) const NOT_BP: u8 = 40;

/// Left binding power of the postfix `is [not] null` test, the loosest
/// operator of the grammar.
pub(crate) const NULL_TEST_BP: u8 = 2;

const fn entry(l_bp: u8, op: BinaryOp) -> InfixEntry {
    InfixEntry {
        l_bp,
        r_bp: l_bp + 1,
        op,
    }
}

const INFIX_TABLE: &[(SyntaxKind, InfixEntry)] = &[
    (SyntaxKind::T_STAR, entry(30, BinaryOp::Mul)),
    (SyntaxKind::T_SLASH, entry(30, BinaryOp::Div)),
    (SyntaxKind::T_PLUS, entry(20, BinaryOp::Add)),
    (SyntaxKind::T_MINUS, entry(20, BinaryOp::Sub)),
    (SyntaxKind::K_OR, entry(10, BinaryOp::Or)),
    (SyntaxKind::K_AND, entry(10, BinaryOp::And)),
    (SyntaxKind::T_EQEQ, entry(10, BinaryOp::Eq)),
    (SyntaxKind::T_NEQ, entry(10, BinaryOp::Neq)),
    (SyntaxKind::T_GT, entry(10, BinaryOp::Gt)),
    (SyntaxKind::T_LT, entry(10, BinaryOp::Lt)),
    (SyntaxKind::T_GTE, entry(10, BinaryOp::Gte)),
    (SyntaxKind::T_LTE, entry(10, BinaryOp::Lte)),
];

/// Lookup the binding power and [`BinaryOp`] for an infix operator.
///
/// Returns the left and right binding powers along with the operator variant.
pub(crate) fn infix_binding_power(kind: SyntaxKind) -> Option<(u8, u8, BinaryOp)> {
    INFIX_TABLE
        .iter()
        .find_map(|(k, entry)| (kind == *k).then_some((entry.l_bp, entry.r_bp, entry.op)))
}
