use async_trait::async_trait;
use summarizer_common::Result;

use crate::types::SummaryRecord;

/// Append-only sink for processed chat summaries
#[async_trait]
pub trait SummaryStore: Send + Sync {
    async fn save(&self, record: SummaryRecord) -> Result<()>;
}
