use contracts::shared::analytics::TransactionRecord;
use std::sync::Arc;

use super::sample::generate_sample_data;
use crate::shared::config::SampleDataConfig;

/// Immutable snapshot of the transaction data every request reads from.
///
/// Generated once from the seed; handing out the shared snapshot is
/// equivalent to regenerating it on each access.
#[derive(Clone)]
pub struct SalesDataSource {
    records: Arc<[TransactionRecord]>,
}

impl SalesDataSource {
    pub fn generate(config: &SampleDataConfig) -> Self {
        let records = generate_sample_data(config);
        tracing::info!(
            "Generated {} sample transactions (seed={}, start={})",
            records.len(),
            config.seed,
            config.start_date
        );
        Self::from_records(records)
    }

    pub fn from_records(records: Vec<TransactionRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn snapshot(&self) -> Arc<[TransactionRecord]> {
        Arc::clone(&self.records)
    }
}
