use uuid::Uuid;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct ExportGeneratedEvent {
    pub export_id: Uuid,
    pub profile: String,
    pub filename: String,
    pub row_count: usize,
    pub byte_count: usize,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct TagBatchCompletedEvent {
    pub batch_id: Uuid,
    pub record_count: usize,
    pub failed_count: usize,
    pub first_failure: Option<String>,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct CommissionSettledEvent {
    pub order_count: usize,
    pub grand_total: String,
    pub commission: String,
    pub timestamp: i64,
}
