use std::collections::BTreeMap;

use thiserror::Error;

use contracts::dashboards::d100_transaction_trends::{
    AggregatedPoint, GroupBy, KpiSummary, Measure, TransactionRow, TrendsRequest, TrendsResponse,
};
use contracts::domain::{Grain, TimeBucket, TransactionRecord};

use super::chart;

/// Maximum number of raw records returned in the details table
pub const DETAILS_LIMIT: usize = 200;

/// Errors of the trends dashboard
#[derive(Debug, Error)]
pub enum TrendsError {
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] anyhow::Error),
}

/// Run the full dashboard pass: filter, aggregate, summarize, build chart
pub fn get_transaction_trends(
    records: &[TransactionRecord],
    request: &TrendsRequest,
) -> Result<TrendsResponse, TrendsError> {
    request.validate()?;

    let filtered = filter_records(records, request);
    let series = aggregate(&filtered, request.grain, request.group_by, request.measure);
    let chart_spec = chart::build_chart_spec(&series, request.measure, request.group_by);

    Ok(TrendsResponse {
        kpi: kpi_summary(&filtered),
        series,
        chart_spec,
        details: details_rows(&filtered),
    })
}

/// Narrow the dataset to records matching every predicate of the request.
///
/// Order-preserving. An explicitly empty selection list matches nothing —
/// there is no implicit select-all fallback.
pub fn filter_records<'a>(
    records: &'a [TransactionRecord],
    request: &TrendsRequest,
) -> Vec<&'a TransactionRecord> {
    records
        .iter()
        .filter(|r| {
            r.date >= request.date_from
                && r.date <= request.date_to
                && request.regions.contains(&r.region)
                && request.channels.contains(&r.channel)
                && request.products.contains(&r.product)
        })
        .collect()
}

#[derive(Default)]
struct Accumulator {
    orders: u64,
    revenue: u64,
}

/// Group records by (time bucket, group label) and compute the measure.
///
/// The accumulator map is keyed by the structurally ordered bucket, so
/// iterating it already yields chronological buckets with groups in
/// lexicographic order inside each bucket — no label parsing involved.
pub fn aggregate(
    records: &[&TransactionRecord],
    grain: Grain,
    group_by: GroupBy,
    measure: Measure,
) -> Vec<AggregatedPoint> {
    let mut acc: BTreeMap<(TimeBucket, &'static str), Accumulator> = BTreeMap::new();
    for record in records {
        let key = (TimeBucket::of(record.date, grain), group_by.label_of(record));
        let entry = acc.entry(key).or_default();
        entry.orders += u64::from(record.orders);
        entry.revenue += record.revenue;
    }

    acc.into_iter()
        .map(|((bucket, group), sums)| AggregatedPoint {
            time: bucket.label(),
            group: group.to_string(),
            value: measure_value(measure, sums.orders, sums.revenue),
            orders: sums.orders,
            revenue: sums.revenue,
        })
        .collect()
}

/// Derive the final measure value from the accumulated sums.
///
/// AOV is weighted by orders: sum(revenue)/sum(orders), never a mean of
/// per-record AOVs. Zero orders cannot occur for real data (orders >= 1) but
/// the guard keeps empty input well-defined.
fn measure_value(measure: Measure, orders: u64, revenue: u64) -> f64 {
    match measure {
        Measure::Orders => orders as f64,
        Measure::Revenue => revenue as f64,
        Measure::Aov => {
            if orders == 0 {
                0.0
            } else {
                revenue as f64 / orders as f64
            }
        }
    }
}

/// Headline numbers over the filtered set. All zero for an empty set.
pub fn kpi_summary(records: &[&TransactionRecord]) -> KpiSummary {
    let total_orders: u64 = records.iter().map(|r| u64::from(r.orders)).sum();
    let total_revenue: u64 = records.iter().map(|r| r.revenue).sum();
    let avg_order_value = if total_orders == 0 {
        0.0
    } else {
        total_revenue as f64 / total_orders as f64
    };
    KpiSummary {
        transactions: records.len() as u64,
        total_orders,
        total_revenue,
        avg_order_value,
    }
}

/// Most-recent raw records for the details table, capped at [`DETAILS_LIMIT`]
pub fn details_rows(records: &[&TransactionRecord]) -> Vec<TransactionRow> {
    let mut rows = records.to_vec();
    // stable sort: records sharing a date keep their original order
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    rows.into_iter()
        .take(DETAILS_LIMIT)
        .map(TransactionRow::from)
        .collect()
}
