use chrono::Utc;
use shipdesk_core::mutation::{TagMutationAdapter, TagUpdateRequest};
use shipdesk_core::{CoreError, CoreResult};
use shipdesk_shared::models::events::TagBatchCompletedEvent;
use shipdesk_shared::TagSet;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{info, warn};
use uuid::Uuid;

use super::reconcile::{plan_batch, TagOperation, TaggedRecord};

/// What happened to one record of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordOutcome {
    pub id: String,
    /// Tags as confirmed by the backend, or the failure message.
    pub result: Result<TagSet, String>,
}

/// Outcome of a whole batch, one entry per request in submission order.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub batch_id: Uuid,
    pub outcomes: Vec<RecordOutcome>,
    /// First failure in completion order; this is what the batch reports.
    pub first_failure: Option<String>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn is_success(&self) -> bool {
        self.first_failure.is_none()
    }

    pub fn completed_event(&self) -> TagBatchCompletedEvent {
        TagBatchCompletedEvent {
            batch_id: self.batch_id,
            record_count: self.outcomes.len(),
            failed_count: self.failed(),
            first_failure: self.first_failure.clone(),
            timestamp: Utc::now().timestamp(),
        }
    }

    /// Collapse into the all-or-nothing result: the record count on success,
    /// otherwise a single error carrying the first failure. Records that did
    /// succeed are not rolled back.
    pub fn into_result(self) -> CoreResult<usize> {
        match self.first_failure {
            Some(message) => Err(CoreError::ExternalCall(message)),
            None => Ok(self.outcomes.len()),
        }
    }
}

/// Sends a batch of tag updates concurrently, one backend call per record.
///
/// Every call is awaited before returning: a failure does not cancel the
/// calls still in flight, and there is no retry or timeout here.
pub struct TagBatchDispatcher {
    adapter: Arc<dyn TagMutationAdapter>,
}

impl TagBatchDispatcher {
    pub fn new(adapter: Arc<dyn TagMutationAdapter>) -> Self {
        Self { adapter }
    }

    /// Plan and dispatch `op` over `records`.
    pub async fn apply<R: TaggedRecord>(&self, records: &[R], op: &TagOperation) -> CoreResult<BatchReport> {
        let requests = plan_batch(records, op)?;
        self.dispatch(requests).await
    }

    pub async fn dispatch(&self, requests: Vec<TagUpdateRequest>) -> CoreResult<BatchReport> {
        if requests.is_empty() {
            return Err(CoreError::InvalidInput("No records selected".to_string()));
        }

        let batch_id = Uuid::new_v4();
        info!(%batch_id, records = requests.len(), "Dispatching tag update batch");

        let ids: Vec<String> = requests.iter().map(|r| r.id.clone()).collect();
        let mut tasks = JoinSet::new();
        for (position, request) in requests.into_iter().enumerate() {
            let adapter = Arc::clone(&self.adapter);
            tasks.spawn(async move {
                let result = match adapter.update_tags(&request).await {
                    Ok(response) => match response.first_error() {
                        Some(error) => Err(error.message.clone()),
                        None => Ok(response.tags),
                    },
                    Err(e) => Err(e.to_string()),
                };
                (position, result)
            });
        }

        let mut results: Vec<Option<Result<TagSet, String>>> = vec![None; ids.len()];
        let mut first_failure = None;
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((position, result)) => {
                    if let Err(message) = &result {
                        warn!(%batch_id, record = %ids[position], "Tag update failed: {}", message);
                        first_failure.get_or_insert_with(|| message.clone());
                    }
                    results[position] = Some(result);
                }
                Err(join_error) => {
                    warn!(%batch_id, "Tag update task did not complete: {}", join_error);
                    first_failure.get_or_insert_with(|| join_error.to_string());
                }
            }
        }

        let outcomes = ids
            .into_iter()
            .zip(results)
            .map(|(id, result)| RecordOutcome {
                id,
                result: result.unwrap_or_else(|| Err("Update task did not complete".to_string())),
            })
            .collect();

        let report = BatchReport {
            batch_id,
            outcomes,
            first_failure,
        };
        info!(
            %batch_id,
            succeeded = report.succeeded(),
            failed = report.failed(),
            "Tag update batch finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shipdesk_core::mutation::{FieldError, RecordKind, TagUpdateResponse};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Records every call; fails or returns field errors for chosen ids.
    #[derive(Default)]
    struct RecordingAdapter {
        calls: Mutex<Vec<String>>,
        fail: Vec<String>,
        reject: Vec<String>,
    }

    #[async_trait]
    impl TagMutationAdapter for RecordingAdapter {
        async fn update_tags(
            &self,
            request: &TagUpdateRequest,
        ) -> Result<TagUpdateResponse, Box<dyn std::error::Error + Send + Sync>> {
            if self.fail.contains(&request.id) {
                return Err(format!("HTTP 502 for {}", request.id).into());
            }
            // Successful calls finish after the failing one.
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.calls.lock().unwrap().push(request.id.clone());

            let user_errors = if self.reject.contains(&request.id) {
                vec![FieldError {
                    field: vec!["tags".to_string()],
                    message: "Tags is invalid".to_string(),
                }]
            } else {
                Vec::new()
            };
            Ok(TagUpdateResponse {
                id: Some(request.id.clone()),
                tags: request.tags.clone(),
                user_errors,
            })
        }
    }

    fn requests(ids: &[&str]) -> Vec<TagUpdateRequest> {
        ids.iter()
            .map(|id| TagUpdateRequest {
                target: RecordKind::Customer,
                id: id.to_string(),
                tags: ["vip"].into_iter().collect(),
            })
            .collect()
    }

    #[tokio::test]
    async fn test_all_succeed() {
        let adapter = Arc::new(RecordingAdapter::default());
        let dispatcher = TagBatchDispatcher::new(adapter.clone());

        let report = dispatcher.dispatch(requests(&["c1", "c2", "c3"])).await.unwrap();

        assert!(report.is_success());
        assert_eq!(report.succeeded(), 3);
        assert_eq!(adapter.calls.lock().unwrap().len(), 3);
        assert_eq!(report.into_result().unwrap(), 3);
    }

    #[tokio::test]
    async fn test_failure_does_not_cancel_other_calls() {
        let adapter = Arc::new(RecordingAdapter {
            fail: vec!["c2".to_string()],
            ..Default::default()
        });
        let dispatcher = TagBatchDispatcher::new(adapter.clone());

        let report = dispatcher.dispatch(requests(&["c1", "c2", "c3"])).await.unwrap();

        let mut calls = adapter.calls.lock().unwrap().clone();
        calls.sort();
        assert_eq!(calls, vec!["c1", "c3"]);
        assert_eq!(report.failed(), 1);
        assert!(report.outcomes[0].result.is_ok());
        assert!(report.outcomes[1].result.is_err());
        assert!(report.outcomes[2].result.is_ok());

        let event = report.completed_event();
        assert_eq!(event.record_count, 3);
        assert_eq!(event.failed_count, 1);

        match report.into_result() {
            Err(CoreError::ExternalCall(message)) => assert_eq!(message, "HTTP 502 for c2"),
            other => panic!("expected a batch failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_field_errors_fail_the_batch() {
        let adapter = Arc::new(RecordingAdapter {
            reject: vec!["c1".to_string()],
            ..Default::default()
        });
        let dispatcher = TagBatchDispatcher::new(adapter.clone());

        let report = dispatcher.dispatch(requests(&["c1", "c2"])).await.unwrap();

        assert_eq!(adapter.calls.lock().unwrap().len(), 2);
        assert_eq!(report.first_failure.as_deref(), Some("Tags is invalid"));
    }

    #[tokio::test]
    async fn test_invalid_batch_dispatches_nothing() {
        let adapter = Arc::new(RecordingAdapter::default());
        let dispatcher = TagBatchDispatcher::new(adapter.clone());
        let customers: Vec<shipdesk_shared::NormalizedCustomer> =
            serde_json::from_value(serde_json::json!([{"id": "c1"}])).unwrap();

        assert!(dispatcher.dispatch(Vec::new()).await.is_err());
        assert!(dispatcher
            .apply(&customers, &TagOperation::Add(String::new()))
            .await
            .is_err());
        assert!(adapter.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_apply_plans_and_dispatches() {
        let adapter = Arc::new(RecordingAdapter::default());
        let dispatcher = TagBatchDispatcher::new(adapter.clone());
        let customers: Vec<shipdesk_shared::NormalizedCustomer> = serde_json::from_value(
            serde_json::json!([{"id": "c1", "tags": "old"}, {"id": "c2", "tags": ["old", "keep"]}]),
        )
        .unwrap();
        let op = TagOperation::Replace {
            old: ["old"].into_iter().collect(),
            new: "new".into(),
        };

        let report = dispatcher.apply(&customers, &op).await.unwrap();

        let confirmed: TagSet = ["keep", "new"].into_iter().collect();
        assert_eq!(report.outcomes[1].result, Ok(confirmed));
        assert_eq!(report.into_result().unwrap(), 2);
    }
}
