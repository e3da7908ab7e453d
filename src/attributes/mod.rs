// ============================================================================
// Money Attributes
// Glue between a record's persisted decimal columns and Money values
// ============================================================================
//
// A record stores plain decimals. Reads convert the persisted value into
// Money once and memoize it; writes update the memo and the persisted value
// together. Absent values stay absent, they never become zero.

use crate::money::{Money, MoneyResult, Operand};
use parking_lot::RwLock;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Persisted scalar storage for a record, keyed by field name.
pub trait AttributeStore {
    /// Read the persisted decimal for `name`, if any.
    fn read_attribute(&self, name: &str) -> Option<Decimal>;

    /// Persist `value` for `name`; `None` clears it.
    fn write_attribute(&mut self, name: &str, value: Option<Decimal>);
}

/// Records that expose money accessors through [`attr_money!`].
pub trait MoneyAttributes: AttributeStore {
    fn money_cache(&self) -> &MoneyCache;

    /// Memoized read of a money field.
    fn read_money(&self, name: &'static str) -> Option<Money> {
        self.money_cache().fetch(name, || self.read_attribute(name))
    }

    /// Write a money field from anything `Money::new` accepts, or clear it.
    ///
    /// # Errors
    /// Whatever `Money::new` rejects; on error nothing is written.
    fn write_money<'a, V>(&mut self, name: &'static str, value: Option<V>) -> MoneyResult<Option<Money>>
    where
        V: Into<Operand<'a>>,
        Self: Sized,
    {
        let money = value.map(Money::new).transpose()?;
        self.money_cache().store(name, money);
        self.write_attribute(name, money.map(|m| m.raw()));
        tracing::trace!(field = name, value = ?money, "money attribute written");
        Ok(money)
    }
}

/// Memoized money values for a record's fields.
///
/// Reads go through `&self`, so the memo sits behind a lock and the record
/// stays `Sync`.
#[derive(Debug, Default)]
pub struct MoneyCache {
    entries: RwLock<HashMap<&'static str, Money>>,
}

impl MoneyCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the memoized value, filling it from `load` on a miss.
    /// Nothing is memoized when `load` yields `None`.
    pub fn fetch(&self, name: &'static str, load: impl FnOnce() -> Option<Decimal>) -> Option<Money> {
        if let Some(money) = self.entries.read().get(name) {
            return Some(*money);
        }

        let money = Money::from(load()?);
        self.entries.write().insert(name, money);
        tracing::trace!(field = name, value = ?money, "money attribute loaded");
        Some(money)
    }

    /// Replace (or clear) the memoized value.
    pub fn store(&self, name: &'static str, money: Option<Money>) {
        let mut entries = self.entries.write();
        match money {
            Some(money) => {
                entries.insert(name, money);
            },
            None => {
                entries.remove(name);
            },
        }
    }

    pub fn is_cached(&self, name: &str) -> bool {
        self.entries.read().contains_key(name)
    }

    /// Drop every memoized value, e.g. after the record is reloaded.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

/// Generate money accessors for a record type.
///
/// The type must implement [`MoneyAttributes`]. Each `field => setter` pair
/// produces `fn field(&self) -> Option<Money>` and
/// `fn setter(&mut self, value: Option<V>) -> MoneyResult<Option<Money>>`.
///
/// ```
/// use decimal_money::attributes::{AttributeStore, MoneyAttributes, MoneyCache};
/// use decimal_money::{attr_money, Money};
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
///
/// #[derive(Default)]
/// struct Invoice {
///     columns: HashMap<String, Decimal>,
///     cache: MoneyCache,
/// }
///
/// impl AttributeStore for Invoice {
///     fn read_attribute(&self, name: &str) -> Option<Decimal> {
///         self.columns.get(name).copied()
///     }
///
///     fn write_attribute(&mut self, name: &str, value: Option<Decimal>) {
///         match value {
///             Some(value) => self.columns.insert(name.to_string(), value),
///             None => self.columns.remove(name),
///         };
///     }
/// }
///
/// impl MoneyAttributes for Invoice {
///     fn money_cache(&self) -> &MoneyCache {
///         &self.cache
///     }
/// }
///
/// attr_money!(Invoice { total => set_total });
///
/// let mut invoice = Invoice::default();
/// invoice.set_total(Some("$120.43"))?;
/// assert_eq!(invoice.total(), Some(Money::new("120.43")?));
/// # Ok::<(), decimal_money::MoneyError>(())
/// ```
#[macro_export]
macro_rules! attr_money {
    ($record:ty { $($field:ident => $setter:ident),+ $(,)? }) => {
        impl $record {
            $(
                pub fn $field(&self) -> ::core::option::Option<$crate::Money> {
                    $crate::attributes::MoneyAttributes::read_money(self, stringify!($field))
                }

                pub fn $setter<'a, V>(
                    &mut self,
                    value: ::core::option::Option<V>,
                ) -> $crate::MoneyResult<::core::option::Option<$crate::Money>>
                where
                    V: ::core::convert::Into<$crate::Operand<'a>>,
                {
                    $crate::attributes::MoneyAttributes::write_money(self, stringify!($field), value)
                }
            )+
        }
    };
}
