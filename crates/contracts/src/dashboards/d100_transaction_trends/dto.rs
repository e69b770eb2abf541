use anyhow::ensure;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::time_bucket::Grain;
use crate::domain::transaction::TransactionRecord;
use crate::enums::{ProductTier, Region, SalesChannel};

/// Measure plotted on the trend chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    Orders,
    Revenue,
    Aov,
}

impl Measure {
    /// Get measure code
    pub fn code(&self) -> &'static str {
        match self {
            Measure::Orders => "orders",
            Measure::Revenue => "revenue",
            Measure::Aov => "aov",
        }
    }

    /// Y-axis title shown by the chart renderer
    pub fn axis_title(&self) -> &'static str {
        match self {
            Measure::Orders => "Orders (sum)",
            Measure::Revenue => "Revenue (sum)",
            Measure::Aov => "Average Order Value (weighted)",
        }
    }

    /// Get all measures
    pub fn all() -> Vec<Measure> {
        vec![Measure::Orders, Measure::Revenue, Measure::Aov]
    }
}

/// Dimension used to split the series into colored groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    Region,
    Channel,
    Product,
}

impl GroupBy {
    /// Get dimension code
    pub fn code(&self) -> &'static str {
        match self {
            GroupBy::Region => "region",
            GroupBy::Channel => "channel",
            GroupBy::Product => "product",
        }
    }

    /// Group label of a record along this dimension
    pub fn label_of(&self, record: &TransactionRecord) -> &'static str {
        match self {
            GroupBy::Region => record.region.display_name(),
            GroupBy::Channel => record.channel.display_name(),
            GroupBy::Product => record.product.display_name(),
        }
    }

    /// Get all dimensions
    pub fn all() -> Vec<GroupBy> {
        vec![GroupBy::Region, GroupBy::Channel, GroupBy::Product]
    }
}

/// Request for the transaction trends dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendsRequest {
    /// Start of the date range, inclusive
    pub date_from: NaiveDate,
    /// End of the date range, inclusive
    pub date_to: NaiveDate,
    /// Selected regions. An empty list matches nothing — the UI sends the
    /// full list for "all", there is no implicit select-all fallback.
    pub regions: Vec<Region>,
    /// Selected channels, same empty-list semantics
    pub channels: Vec<SalesChannel>,
    /// Selected product tiers, same empty-list semantics
    pub products: Vec<ProductTier>,
    pub measure: Measure,
    pub grain: Grain,
    pub group_by: GroupBy,
}

impl TrendsRequest {
    /// Check request invariants that the type system cannot express
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.date_from <= self.date_to,
            "date_from {} is after date_to {}",
            self.date_from,
            self.date_to
        );
        Ok(())
    }
}

/// One (time bucket, group) measurement of the aggregated series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedPoint {
    /// Bucket key: `YYYY-MM-DD`, `YYYY-Www` or `YYYY-MM`
    pub time: String,
    /// Group label along the chosen dimension (e.g. "West Java")
    pub group: String,
    /// Selected measure: orders sum, revenue sum, or orders-weighted AOV
    pub value: f64,
    /// Orders sum, retained for tooltips
    pub orders: u64,
    /// Revenue sum, retained for tooltips
    pub revenue: u64,
}

/// Headline numbers over the filtered set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    /// Number of transaction records after filtering
    pub transactions: u64,
    pub total_orders: u64,
    pub total_revenue: u64,
    /// Overall weighted AOV, 0 when there are no orders
    pub avg_order_value: f64,
}

/// Wire form of a raw record for the details table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRow {
    pub date: NaiveDate,
    pub region: String,
    pub channel: String,
    pub product: String,
    pub orders: u32,
    pub revenue: u64,
    /// Recomputed from orders/revenue at conversion time
    pub aov: f64,
}

impl From<&TransactionRecord> for TransactionRow {
    fn from(record: &TransactionRecord) -> Self {
        Self {
            date: record.date,
            region: record.region.display_name().to_string(),
            channel: record.channel.display_name().to_string(),
            product: record.product.display_name().to_string(),
            orders: record.orders,
            revenue: record.revenue,
            aov: record.aov(),
        }
    }
}

/// Response for the transaction trends dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendsResponse {
    pub kpi: KpiSummary,
    /// Aggregated series in chronological bucket order
    pub series: Vec<AggregatedPoint>,
    /// Vega-Lite v5 specification for the linked overview/detail panels
    pub chart_spec: serde_json::Value,
    /// Up to 200 most-recent filtered raw records, date descending
    pub details: Vec<TransactionRow>,
}

/// Response describing the dataset so the UI can populate its controls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    /// First transaction date in the dataset
    pub date_from: NaiveDate,
    /// Last transaction date in the dataset
    pub date_to: NaiveDate,
    pub regions: Vec<Region>,
    pub channels: Vec<SalesChannel>,
    pub products: Vec<ProductTier>,
    pub measures: Vec<Measure>,
    pub grains: Vec<Grain>,
    pub group_dimensions: Vec<GroupBy>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TrendsRequest {
        TrendsRequest {
            date_from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            date_to: NaiveDate::from_ymd_opt(2024, 12, 30).unwrap(),
            regions: Region::all(),
            channels: SalesChannel::all(),
            products: ProductTier::all(),
            measure: Measure::Revenue,
            grain: Grain::Month,
            group_by: GroupBy::Region,
        }
    }

    #[test]
    fn test_validate_accepts_ordered_range() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let mut req = request();
        req.date_to = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_selector_enums_use_snake_case_codes() {
        // the wire format mirrors the user-facing control values
        assert_eq!(serde_json::to_string(&Measure::Aov).unwrap(), "\"aov\"");
        assert_eq!(serde_json::to_string(&Grain::Week).unwrap(), "\"week\"");
        assert_eq!(
            serde_json::to_string(&GroupBy::Product).unwrap(),
            "\"product\""
        );
        // unknown selector values are a request error, never defaulted
        assert!(serde_json::from_str::<Measure>("\"median\"").is_err());
        assert!(serde_json::from_str::<Grain>("\"quarter\"").is_err());
    }

    #[test]
    fn test_transaction_row_recomputes_aov() {
        let record = TransactionRecord {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            region: Region::Bali,
            channel: SalesChannel::Ads,
            product: ProductTier::Premium,
            orders: 4,
            revenue: 800_000,
        };
        let row = TransactionRow::from(&record);
        assert_eq!(row.region, "Bali");
        assert_eq!(row.aov, 200_000.0);
    }
}
