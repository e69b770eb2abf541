use chrono::NaiveDate;
use once_cell::sync::OnceCell;

use contracts::domain::TransactionRecord;

use super::generator;

static DATASET: OnceCell<Dataset> = OnceCell::new();

/// The process-wide transaction dataset.
///
/// Generated exactly once at startup and immutable afterwards; every request
/// reads the same `'static` records. There is no invalidation — changing the
/// seed requires a restart.
pub struct Dataset {
    seed: u64,
    records: Vec<TransactionRecord>,
}

impl Dataset {
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First and last transaction date. Generation emits at least a dozen
    /// records per day, so the dataset is never empty.
    pub fn date_span(&self) -> (NaiveDate, NaiveDate) {
        let first = self
            .records
            .first()
            .expect("dataset contains at least one record");
        let last = self
            .records
            .last()
            .expect("dataset contains at least one record");
        (first.date, last.date)
    }
}

/// Generate and install the process-wide dataset. Errors if called twice.
pub fn initialize_dataset(seed: u64) -> anyhow::Result<&'static Dataset> {
    let records = generator::generate(seed);
    DATASET
        .set(Dataset { seed, records })
        .map_err(|_| anyhow::anyhow!("dataset already initialized"))?;
    Ok(get_dataset())
}

pub fn get_dataset() -> &'static Dataset {
    DATASET.get().expect("dataset has not been initialized")
}
