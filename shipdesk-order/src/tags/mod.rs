pub mod dispatch;
pub mod reconcile;

pub use dispatch::{BatchReport, RecordOutcome, TagBatchDispatcher};
pub use reconcile::{apply, plan_batch, plan_pairs, TagOperation, TaggedRecord};
