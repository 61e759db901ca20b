use shipdesk_core::mutation::TagUpdateRequest;
use shipdesk_core::CoreResult;
use shipdesk_shared::{ExportRow, LineItem, NormalizedOrder};

use crate::commission::CommissionSummary;
use crate::tags::{plan_batch, TagOperation};

/// Tag marking an affiliate order whose commission has been paid out.
pub const COMMISSION_PAID_TAG: &str = "コミッション支払い済み";

const HEADER: [&str; 6] = ["注文日", "お名前", "メールアドレス", "注文タグ", "合計商品金額", "注文商品"];

/// Rows of the B2B affiliate settlement report.
///
/// `summary` must come from the same `orders`, in the same order.
pub fn settlement_rows(orders: &[NormalizedOrder], summary: &CommissionSummary) -> Vec<ExportRow> {
    let mut rows: Vec<ExportRow> = Vec::with_capacity(orders.len() + 4);
    rows.push(HEADER.into_iter().collect());

    for (index, order) in orders.iter().enumerate() {
        let customer = order.customer.as_ref();
        rows.push(ExportRow::new(vec![
            order
                .created_at
                .map(|at| at.date_naive().format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            customer.map(|c| c.full_name()).unwrap_or_default(),
            customer
                .and_then(|c| c.email.as_ref())
                .map(|email| email.expose().clone())
                .unwrap_or_default(),
            order.tags.join("、"),
            summary.subtotal_display(index),
            item_summary(&order.line_items),
        ]));
    }

    rows.push(ExportRow::new(vec![String::new()]));
    rows.push(ExportRow::new(vec!["合計金額".to_string(), summary.grand_total_display()]));
    rows.push(ExportRow::new(vec![
        format!("お支払い金額({}%)", summary.percentage_text),
        summary.commission_display(),
    ]));
    rows
}

fn item_summary(items: &[LineItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "{}、 価格: ¥{}、 数量: {}点、",
                item.title, item.unit_price.amount, item.quantity
            )
        })
        .collect::<Vec<_>>()
        .join("、")
}

/// Plan the "paid out" tag over every settled order.
pub fn settlement_tag_batch(orders: &[NormalizedOrder]) -> CoreResult<Vec<TagUpdateRequest>> {
    plan_batch(orders, &TagOperation::Add(COMMISSION_PAID_TAG.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commission::CommissionAggregator;
    use serde_json::json;

    fn orders() -> Vec<NormalizedOrder> {
        serde_json::from_value(json!([
            {
                "id": "gid://shopify/Order/5001",
                "createdAt": "2024-03-05T10:15:00+09:00",
                "tags": ["b2b", "affiliate"],
                "customer": {"email": "hanako@example.com", "firstName": "花子", "lastName": "山田"},
                "lineItems": [
                    {"title": "化粧水", "quantity": 2, "unitPrice": {"amount": "100", "currencyCode": "JPY"}},
                    {"title": "乳液", "quantity": 1, "unitPrice": {"amount": "200", "currencyCode": "JPY"}}
                ]
            },
            {
                "id": "gid://shopify/Order/5002",
                "lineItems": [
                    {"title": "美容液", "quantity": 1, "unitPrice": {"amount": "50", "currencyCode": "JPY"}}
                ]
            }
        ]))
        .unwrap()
    }

    #[test]
    fn test_report_layout() {
        let orders = orders();
        let summary = CommissionAggregator::default().summarize(&orders, "10").unwrap();
        let rows = settlement_rows(&orders, &summary);

        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].cells(), HEADER);
        assert_eq!(
            rows[1].cells(),
            [
                "2024-03-05",
                "山田花子",
                "hanako@example.com",
                "b2b、affiliate",
                "300.0",
                "化粧水、 価格: ¥100、 数量: 2点、、乳液、 価格: ¥200、 数量: 1点、",
            ]
        );
        assert_eq!(rows[2].cells(), ["", "", "", "", "50.0", "美容液、 価格: ¥50、 数量: 1点、"]);
        assert_eq!(rows[3].cells(), [""]);
        assert_eq!(rows[4].cells(), ["合計金額", "350.0"]);
        assert_eq!(rows[5].cells(), ["お支払い金額(10%)", "35"]);
    }

    #[test]
    fn test_paid_tag_batch() {
        let requests = settlement_tag_batch(&orders()).unwrap();

        assert_eq!(requests.len(), 2);
        assert!(requests[0].tags.contains(COMMISSION_PAID_TAG));
        assert!(requests[0].tags.contains("b2b"));
        assert_eq!(requests[1].tags.len(), 1);
        assert!(settlement_tag_batch(&[]).is_err());
    }
}
