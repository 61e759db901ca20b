use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shipdesk_shared::TagSet;

/// Which backend mutation a tag update goes through.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordKind {
    Customer,
    Order,
}

/// One `{id, newTagSet}` update, computed locally before dispatch.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TagUpdateRequest {
    pub target: RecordKind,
    pub id: String,
    pub tags: TagSet,
}

/// Field-level validation error reported by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    #[serde(default)]
    pub field: Vec<String>,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagUpdateResponse {
    pub id: Option<String>,
    #[serde(default)]
    pub tags: TagSet,
    #[serde(default)]
    pub user_errors: Vec<FieldError>,
}

impl TagUpdateResponse {
    /// The first field error, which is what gets reported for the record.
    pub fn first_error(&self) -> Option<&FieldError> {
        self.user_errors.first()
    }
}

/// Transport for tag mutations (GraphQL `customerUpdate` / `orderUpdate`).
///
/// Implementations must not retry; a failed call is reported as-is.
#[async_trait]
pub trait TagMutationAdapter: Send + Sync {
    async fn update_tags(
        &self,
        request: &TagUpdateRequest,
    ) -> Result<TagUpdateResponse, Box<dyn std::error::Error + Send + Sync>>;
}
