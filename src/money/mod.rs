// ============================================================================
// Money Module
// Exact-decimal monetary amounts for financial calculations
// ============================================================================
//
// This module provides:
// - Money: immutable amount wrapping a normalized rust_decimal::Decimal
// - Operand: closed set of inputs accepted by construction and arithmetic
// - FormatOptions: currency string rendering options
// - MoneyError: error types for coercion, parsing and arithmetic
//
// Design principles:
// - No floating-point operations; floats are rejected, never converted
// - Fallible operations return Result; std::ops impls panic like Decimal's
// - Every construction path funnels through Money::new

mod errors;
mod format;
mod operand;
#[cfg(feature = "serde")]
mod serialization;
mod value;

pub use errors::{Coercion, MoneyError, MoneyResult, Operation};
pub use format::{FormatOptions, CURRENCY_MARKER};
pub use operand::Operand;
pub use value::{Money, ROUNDING};
