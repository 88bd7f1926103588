//! Tests for parser components and integration scenarios.

mod errors;
