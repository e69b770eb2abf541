use anyhow::ensure;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rand::distributions::{Distribution, WeightedIndex};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f64::consts::PI;

use contracts::domain::TransactionRecord;
use contracts::enums::{ProductTier, Region, SalesChannel};

/// Number of generated calendar days
pub const DAYS: i64 = 365;

/// Daily transaction count range, inclusive
pub const DAILY_TRANSACTIONS: (u32, u32) = (12, 30);

/// Weekend demand multiplier (Saturday/Sunday)
const WEEKEND_UPLIFT: f64 = 1.15;

/// First generated calendar day
pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("static start date is valid")
}

/// Smooth seasonal multiplier over the year, range [1.0, 1.5]
fn seasonal_multiplier(day_index: i64) -> f64 {
    1.0 + 0.25 * (1.0 + (2.0 * PI * day_index as f64 / DAYS as f64).sin())
}

/// Generate the synthetic transaction dataset for a seed.
///
/// Pure function of the seed: all randomness comes from one seeded ChaCha8
/// stream, drawn in a fixed order (daily count, then per transaction: region,
/// channel, tier, base orders, unit price). Reordering any draw changes every
/// dataset derived from the seed.
pub fn generate(seed: u64) -> Vec<TransactionRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let regions = Region::all();
    let channels = SalesChannel::all();
    let tiers = ProductTier::all();
    let tier_index = WeightedIndex::new(tiers.iter().map(|t| t.weight()))
        .expect("tier weights are positive and non-zero");

    let start = start_date();
    let (min_daily, max_daily) = DAILY_TRANSACTIONS;

    let mut records = Vec::new();
    for i in 0..DAYS {
        let date = start + Duration::days(i);
        let seasonal = seasonal_multiplier(i);
        let weekend = match date.weekday() {
            Weekday::Sat | Weekday::Sun => WEEKEND_UPLIFT,
            _ => 1.0,
        };

        let daily_count = rng.gen_range(min_daily..=max_daily);
        for _ in 0..daily_count {
            let region = regions[rng.gen_range(0..regions.len())];
            let channel = channels[rng.gen_range(0..channels.len())];
            let product = tiers[tier_index.sample(&mut rng)];

            let base_orders = rng.gen_range(1..=3) as f64;
            let (price_lo, price_hi) = product.price_band();
            let unit_price = rng.gen_range(price_lo..=price_hi);

            let scaled =
                base_orders * seasonal * weekend * channel.uplift() * region.uplift();
            let orders = scaled.round().max(1.0) as u32;
            let revenue = u64::from(orders) * unit_price;

            records.push(TransactionRecord {
                date,
                region,
                channel,
                product,
                orders,
                revenue,
            });
        }
    }
    records
}

/// Sanity-check the category tables before the first generation pass.
///
/// The exhaustive matches behind `uplift()`/`weight()`/`price_band()` already
/// guarantee every variant has an entry at compile time; this rejects entries
/// whose values cannot produce valid records.
pub fn validate_dimension_tables() -> anyhow::Result<()> {
    for region in Region::all() {
        let uplift = region.uplift();
        ensure!(
            uplift.is_finite() && uplift > 0.0,
            "region {} has invalid uplift {}",
            region.code(),
            uplift
        );
    }
    for channel in SalesChannel::all() {
        let uplift = channel.uplift();
        ensure!(
            uplift.is_finite() && uplift > 0.0,
            "channel {} has invalid uplift {}",
            channel.code(),
            uplift
        );
    }
    let weight_total: u32 = ProductTier::all().iter().map(|t| t.weight()).sum();
    ensure!(weight_total > 0, "product tier weights must not all be zero");
    for tier in ProductTier::all() {
        let (lo, hi) = tier.price_band();
        ensure!(
            lo > 0 && lo <= hi,
            "product tier {} has invalid price band {}..={}",
            tier.code(),
            lo,
            hi
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_same_seed_is_deterministic() {
        assert_eq!(generate(42), generate(42));
    }

    #[test]
    fn test_different_seeds_diverge() {
        assert_ne!(generate(1), generate(2));
    }

    #[test]
    fn test_covers_every_day_of_the_year() {
        let records = generate(42);
        let dates: Vec<_> = records.iter().map(|r| r.date).collect();

        assert_eq!(dates.first().copied(), Some(start_date()));
        assert_eq!(
            dates.last().copied(),
            Some(start_date() + Duration::days(DAYS - 1))
        );

        let mut distinct = dates.clone();
        distinct.dedup();
        assert_eq!(distinct.len(), DAYS as usize);
        // generation is chronological
        assert!(dates.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_daily_counts_within_range() {
        let records = generate(42);
        let mut per_day: BTreeMap<_, u32> = BTreeMap::new();
        for record in &records {
            *per_day.entry(record.date).or_default() += 1;
        }
        let (min_daily, max_daily) = DAILY_TRANSACTIONS;
        for (date, count) in per_day {
            assert!(
                (min_daily..=max_daily).contains(&count),
                "{} has {} transactions",
                date,
                count
            );
        }
    }

    #[test]
    fn test_record_invariants() {
        for record in generate(42) {
            assert!(record.orders >= 1);
            // revenue is orders times an integral unit price
            assert_eq!(record.revenue % u64::from(record.orders), 0);
            let unit_price = record.revenue / u64::from(record.orders);
            let (lo, hi) = record.product.price_band();
            assert!(
                (lo..=hi).contains(&unit_price),
                "{:?} unit price {} outside band",
                record.product,
                unit_price
            );
        }
    }

    #[test]
    fn test_seasonal_multiplier_range() {
        for i in 0..DAYS {
            let m = seasonal_multiplier(i);
            assert!((1.0..=1.5).contains(&m), "day {} multiplier {}", i, m);
        }
    }

    #[test]
    fn test_dimension_tables_are_valid() {
        assert!(validate_dimension_tables().is_ok());
    }
}
