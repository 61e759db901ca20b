use chrono::NaiveDate;
use serde_json::json;
use shipdesk_carrier::{CarrierKind, RowContext, ShipmentType, ShipperProfile};
use shipdesk_export::writer::{CSV_CONTENT_TYPE, UTF8_BOM, XLSX_CONTENT_TYPE};
use shipdesk_export::{export_customers, export_manifest, export_settlement, DelimiterPolicy, ExportError, ExportWriter};
use shipdesk_order::CommissionAggregator;
use shipdesk_shared::{NormalizedCustomer, NormalizedOrder};

fn orders() -> Vec<NormalizedOrder> {
    serde_json::from_value(json!([
        {
            "id": "gid://shopify/Order/5512345678901234567",
            "email": "hanako@example.com",
            "createdAt": "2024-04-28T09:00:00+09:00",
            "tags": ["b2b"],
            "customer": {"email": "hanako@example.com", "firstName": "花子", "lastName": "山田"},
            "customAttributes": [{"key": "shipandco-配達希望日", "value": "2024-05-02"}],
            "shippingAddress": {
                "zip": "150-0001",
                "firstName": "花子",
                "lastName": "山田",
                "phone": "09012345678",
                "province": "Tōkyō",
                "city": "渋谷区",
                "address1": "神宮前1-1-1"
            },
            "lineItems": [
                {"title": "化粧水", "quantity": 1, "unitPrice": {"amount": "1200", "currencyCode": "JPY"}}
            ]
        },
        {"id": "gid://shopify/Order/5512345678901234568"}
    ]))
    .unwrap()
}

fn ctx() -> RowContext {
    RowContext::new(NaiveDate::from_ymd_opt(2024, 4, 30).unwrap(), ShipmentType::Prepaid)
}

fn body(bytes: &[u8]) -> String {
    assert_eq!(&bytes[..3], UTF8_BOM);
    String::from_utf8(bytes[3..].to_vec()).unwrap()
}

#[test]
fn test_yamato_manifest_is_csv_with_header() {
    let payload = export_manifest(
        CarrierKind::Yamato,
        &orders(),
        &ctx(),
        &ShipperProfile::default(),
        &ExportWriter::default(),
    )
    .unwrap();

    assert_eq!(payload.filename, "yamato_orders.csv");
    assert_eq!(payload.content_type, CSV_CONTENT_TYPE);

    let text = body(&payload.bytes);
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("お客様管理番号,"));
    // Legacy layout: cells are never quoted, so the comma count is the width.
    assert!(lines.iter().all(|line| line.matches(',').count() == 94));
    assert!(lines[1].contains(",2024/04/30,2024/05/02,"));
    assert!(lines[1].contains(",090-1234-5678,"));
}

#[test]
fn test_seino_manifest_is_bom_prefixed_workbook() {
    let payload = export_manifest(
        CarrierKind::Seino,
        &orders(),
        &ctx(),
        &ShipperProfile::default(),
        &ExportWriter::default(),
    )
    .unwrap();

    assert_eq!(payload.filename, "seino_orders.xlsx");
    assert_eq!(payload.content_type, XLSX_CONTENT_TYPE);
    assert_eq!(&payload.bytes[..3], UTF8_BOM);
    assert_eq!(&payload.bytes[3..5], b"PK");
}

#[test]
fn test_manifest_row_error_is_reported() {
    let mut orders = orders();
    if let Some(address) = orders[0].shipping_address.as_mut() {
        address.phone = json!(["090"]).into();
    }

    let result = export_manifest(
        CarrierKind::Yamato,
        &orders,
        &ctx(),
        &ShipperProfile::default(),
        &ExportWriter::default(),
    );

    assert!(matches!(result, Err(ExportError::Core(_))));
}

#[test]
fn test_quoted_policy_keeps_columns_aligned() {
    let customers: Vec<NormalizedCustomer> = serde_json::from_value(json!([{
        "id": "gid://shopify/Customer/7001",
        "firstName": "太郎",
        "lastName": "佐藤",
        "addresses": [{"province": "Ōsaka", "city": "大阪市", "address1": "北区1,2"}]
    }]))
    .unwrap();

    let legacy = body(&export_customers(&customers, &ExportWriter::default()).unwrap().bytes);
    let quoted = body(
        &export_customers(&customers, &ExportWriter::new(DelimiterPolicy::Quoted))
            .unwrap()
            .bytes,
    );

    assert!(legacy.ends_with(",大阪府,大阪市,北区1,2,"));
    assert!(quoted.ends_with(",大阪府,大阪市,\"北区1,2\","));
}

#[test]
fn test_customer_export() {
    let customers: Vec<NormalizedCustomer> =
        serde_json::from_value(json!([{"id": "gid://shopify/Customer/42", "tags": "a, b"}])).unwrap();

    let payload = export_customers(&customers, &ExportWriter::default()).unwrap();

    assert_eq!(payload.filename, "customers-data.csv");
    assert_eq!(
        body(&payload.bytes),
        "ID,タグ,お名前,メールアドレス,電話番号,郵便番号,都道府県,市区町村,住所1,住所2\n42,a b,,,,,,,,"
    );
}

#[test]
fn test_settlement_export() {
    let orders = orders();
    let summary = CommissionAggregator::default().summarize(&orders, "10").unwrap();

    let payload = export_settlement(&orders, &summary, &ExportWriter::default()).unwrap();

    assert_eq!(payload.filename, "b2b_affiliate_orders.csv");
    let text = body(&payload.bytes);
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines[0], "注文日,お名前,メールアドレス,注文タグ,合計商品金額,注文商品");
    assert_eq!(
        lines[1],
        "2024-04-28,山田花子,hanako@example.com,b2b,1200.0,化粧水、 価格: ¥1200、 数量: 1点、"
    );
    assert_eq!(lines[2], ",,,,0.0,");
    assert_eq!(&lines[3..], ["", "合計金額,1200.0", "お支払い金額(10%),120"]);
}
