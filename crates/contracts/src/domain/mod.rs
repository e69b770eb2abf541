pub mod time_bucket;
pub mod transaction;

pub use time_bucket::{Grain, TimeBucket};
pub use transaction::TransactionRecord;
