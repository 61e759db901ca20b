pub mod commission;
pub mod settlement;
pub mod tags;

pub use commission::{CommissionAggregator, CommissionBasis, CommissionSummary, RoundingPolicy};
pub use settlement::{settlement_rows, settlement_tag_batch, COMMISSION_PAID_TAG};
pub use tags::{apply, plan_batch, BatchReport, RecordOutcome, TagBatchDispatcher, TagOperation, TaggedRecord};
