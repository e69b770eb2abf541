use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{ProductTier, Region, SalesChannel};

/// One synthetic order-day entry.
///
/// Records are created once at generation time and never mutated; filtering
/// produces new views over the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub date: NaiveDate,
    pub region: Region,
    pub channel: SalesChannel,
    pub product: ProductTier,
    /// Number of orders, always >= 1
    pub orders: u32,
    /// Total revenue in rupiah, equals orders * unit price
    pub revenue: u64,
}

impl TransactionRecord {
    /// Average order value. Derived on every call so it can never drift
    /// from the orders/revenue it is defined by.
    pub fn aov(&self) -> f64 {
        self.revenue as f64 / self.orders as f64
    }
}
