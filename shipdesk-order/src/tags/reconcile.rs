use shipdesk_core::mutation::{RecordKind, TagUpdateRequest};
use shipdesk_core::{CoreError, CoreResult};
use shipdesk_shared::{NormalizedCustomer, NormalizedOrder, TagSet};

/// A change to one record's tag collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagOperation {
    Add(String),
    Remove(String),
    /// Drop every tag in `old`, then add `new`.
    Replace { old: TagSet, new: String },
}

impl TagOperation {
    /// Reject operations that must never reach the backend.
    pub fn validate(&self) -> CoreResult<()> {
        match self {
            TagOperation::Add(tag) | TagOperation::Remove(tag) => require_tag(tag),
            TagOperation::Replace { old, new } => {
                require_tag(new)?;
                if old.is_empty() {
                    return Err(CoreError::InvalidInput(
                        "No tags selected for replacement".to_string(),
                    ));
                }
                if new.trim().chars().any(char::is_whitespace) {
                    return Err(CoreError::InvalidInput(format!(
                        "Tag must not contain whitespace: {new:?}"
                    )));
                }
                Ok(())
            }
        }
    }

    /// Compute the resulting tag set. `current` is left untouched.
    ///
    /// Tags are trimmed first, the same way inbound tags are.
    pub fn apply(&self, current: &TagSet) -> TagSet {
        let mut next = current.clone();
        match self {
            TagOperation::Add(tag) => {
                next.insert(tag.trim());
            }
            TagOperation::Remove(tag) => {
                next.remove(tag.trim());
            }
            TagOperation::Replace { old, new } => {
                next = current.iter().filter(|tag| !old.contains(tag)).collect();
                next.insert(new.trim());
            }
        }
        next
    }
}

fn require_tag(tag: &str) -> CoreResult<()> {
    if tag.trim().is_empty() {
        return Err(CoreError::InvalidInput("Tag must not be empty".to_string()));
    }
    Ok(())
}

pub fn apply(current: &TagSet, op: &TagOperation) -> TagSet {
    op.apply(current)
}

/// A record whose tags can be updated through the backend.
pub trait TaggedRecord {
    const KIND: RecordKind;

    fn record_id(&self) -> &str;
    fn tags(&self) -> &TagSet;
}

impl TaggedRecord for NormalizedCustomer {
    const KIND: RecordKind = RecordKind::Customer;

    fn record_id(&self) -> &str {
        &self.id
    }

    fn tags(&self) -> &TagSet {
        &self.tags
    }
}

impl TaggedRecord for NormalizedOrder {
    const KIND: RecordKind = RecordKind::Order;

    fn record_id(&self) -> &str {
        &self.id
    }

    fn tags(&self) -> &TagSet {
        &self.tags
    }
}

/// Compute one update request per `(record, operation)` pair.
///
/// Everything is validated up front; on error nothing has been dispatched.
pub fn plan_pairs<'a, R, I>(pairs: I) -> CoreResult<Vec<TagUpdateRequest>>
where
    R: TaggedRecord + 'a,
    I: IntoIterator<Item = (&'a R, &'a TagOperation)>,
{
    let mut requests = Vec::new();
    for (record, op) in pairs {
        op.validate()?;
        requests.push(TagUpdateRequest {
            target: R::KIND,
            id: record.record_id().to_string(),
            tags: op.apply(record.tags()),
        });
    }

    if requests.is_empty() {
        return Err(CoreError::InvalidInput("No records selected".to_string()));
    }
    Ok(requests)
}

/// Apply the same operation to every selected record.
pub fn plan_batch<R: TaggedRecord>(records: &[R], op: &TagOperation) -> CoreResult<Vec<TagUpdateRequest>> {
    plan_pairs(records.iter().map(|record| (record, op)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tags(values: &[&str]) -> TagSet {
        values.iter().copied().collect()
    }

    fn customers() -> Vec<NormalizedCustomer> {
        serde_json::from_value(json!([
            {"id": "gid://shopify/Customer/1", "tags": ["a", "b"]},
            {"id": "gid://shopify/Customer/2", "tags": ["b", "x"]}
        ]))
        .unwrap()
    }

    #[test]
    fn test_add() {
        assert_eq!(apply(&tags(&["a"]), &TagOperation::Add("b".into())), tags(&["a", "b"]));
        assert_eq!(apply(&tags(&["a"]), &TagOperation::Add("a".into())), tags(&["a"]));
    }

    #[test]
    fn test_remove_absent_tag_is_noop() {
        assert_eq!(apply(&tags(&["a"]), &TagOperation::Remove("z".into())), tags(&["a"]));
        assert_eq!(apply(&tags(&["a", "b"]), &TagOperation::Remove("a".into())), tags(&["b"]));
    }

    #[test]
    fn test_replace() {
        let op = TagOperation::Replace {
            old: tags(&["a", "b"]),
            new: "c".into(),
        };
        assert_eq!(apply(&tags(&["a", "b"]), &op), tags(&["c"]));
        assert_eq!(apply(&tags(&["b", "x"]), &op), tags(&["x", "c"]));
    }

    #[test]
    fn test_apply_leaves_input_untouched() {
        let current = tags(&["a"]);
        let _ = apply(&current, &TagOperation::Add("b".into()));
        assert_eq!(current, tags(&["a"]));
    }

    #[test]
    fn test_padded_tags_are_trimmed() {
        let added = apply(&tags(&["a"]), &TagOperation::Add(" vip ".into()));
        assert!(added.contains("vip"));
        assert!(!added.contains(" vip "));
        assert_eq!(added.join(","), "a,vip");

        let removed = apply(&tags(&["a", "vip"]), &TagOperation::Remove("vip ".into()));
        assert_eq!(removed, tags(&["a"]));

        let op = TagOperation::Replace {
            old: tags(&["a"]),
            new: " c ".into(),
        };
        assert!(op.validate().is_ok());
        assert_eq!(apply(&tags(&["a", "b"]), &op).join(","), "b,c");
    }

    #[test]
    fn test_validation() {
        assert!(TagOperation::Add("  ".into()).validate().is_err());
        assert!(TagOperation::Remove(String::new()).validate().is_err());
        assert!(TagOperation::Replace { old: TagSet::new(), new: "c".into() }.validate().is_err());
        assert!(TagOperation::Replace { old: tags(&["a"]), new: "c d".into() }.validate().is_err());
        assert!(TagOperation::Replace { old: tags(&["a"]), new: "c".into() }.validate().is_ok());
    }

    #[test]
    fn test_plan_batch() {
        let requests = plan_batch(&customers(), &TagOperation::Add("vip".into())).unwrap();

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].target, RecordKind::Customer);
        assert_eq!(requests[0].id, "gid://shopify/Customer/1");
        assert_eq!(requests[0].tags, tags(&["a", "b", "vip"]));
        assert_eq!(requests[1].tags, tags(&["b", "x", "vip"]));
    }

    #[test]
    fn test_plan_rejects_empty_selection_and_bad_tag() {
        let none: Vec<NormalizedCustomer> = Vec::new();
        assert!(matches!(
            plan_batch(&none, &TagOperation::Add("vip".into())),
            Err(CoreError::InvalidInput(_))
        ));
        assert!(matches!(
            plan_batch(&customers(), &TagOperation::Add(String::new())),
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_plan_pairs_mixes_operations() {
        let records = customers();
        let add = TagOperation::Add("vip".into());
        let remove = TagOperation::Remove("b".into());

        let requests = plan_pairs([(&records[0], &add), (&records[1], &remove)]).unwrap();

        assert_eq!(requests[0].tags, tags(&["a", "b", "vip"]));
        assert_eq!(requests[1].tags, tags(&["x"]));
    }
}
