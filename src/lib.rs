// ============================================================================
// Decimal Money Library
// Immutable exact-decimal monetary amounts with strict coercion rules
// ============================================================================

//! # Decimal Money
//!
//! An immutable money value type backed by [`rust_decimal::Decimal`].
//!
//! ## Features
//!
//! - **Exact decimal arithmetic**: no binary floating point anywhere; floats
//!   are rejected at the boundary instead of being rounded in
//! - **Canonicalizing construction**: `"$10.20"`, `"10.2"` and
//!   `Decimal::new(1020, 2)` produce identical values
//! - **Strict operand rules**: money adds to money, scales by scalars, and
//!   orders only against money
//! - **Currency formatting** rounded half up to cents, with optional marker
//!   and whole-dollar output
//! - **Persistence glue** for records that store raw decimals
//!
//! ## Example
//!
//! ```rust
//! use decimal_money::prelude::*;
//!
//! let subtotal = Money::new("$335.05")?;
//! let share = subtotal.checked_div(2)?;
//! assert_eq!(share, Money::new("167.525")?);
//! assert_eq!(share.to_string(), "$167.53");
//!
//! let tax = subtotal.percent("10")?;
//! let total = subtotal.checked_add(tax)?;
//! assert_eq!(total.to_s(&FormatOptions::plain()), "368.56");
//!
//! // Mixed-type arithmetic is rejected, not guessed
//! assert!(subtotal.checked_sub(15).is_err());
//! # Ok::<(), MoneyError>(())
//! ```

pub mod attributes;
pub mod money;
pub mod utils;

pub use money::{Money, MoneyError, MoneyResult, Operand};

// Re-exports for convenience
pub mod prelude {
    pub use crate::attributes::{AttributeStore, MoneyAttributes, MoneyCache};
    pub use crate::money::{
        Coercion, FormatOptions, Money, MoneyError, MoneyResult, Operand, Operation,
    };
}
