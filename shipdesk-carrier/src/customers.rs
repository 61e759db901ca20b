//! Customer list export (CSV with header).

use serde_json::Value;
use shipdesk_core::normalize::{normalize_phone_or_empty, translate_region};
use shipdesk_core::CoreResult;
use shipdesk_shared::NormalizedCustomer;

use crate::column::ColumnSpec;
use crate::context::RowContext;
use crate::fields::CustomerField;
use crate::profile::{CarrierProfile, ProfileError};

pub const PROFILE_NAME: &str = "customers";
pub const CUSTOMER_WIDTH: usize = 10;

fn short_id(customer: &NormalizedCustomer, _ctx: &RowContext) -> CoreResult<String> {
    Ok(customer.short_id().to_string())
}

fn tags(customer: &NormalizedCustomer, _ctx: &RowContext) -> CoreResult<String> {
    Ok(customer.tags.join(" "))
}

fn name(customer: &NormalizedCustomer, _ctx: &RowContext) -> CoreResult<String> {
    Ok(customer.full_name())
}

/// Unlike the manifests, an empty phone string stays an empty cell here.
fn phone(customer: &NormalizedCustomer, _ctx: &RowContext) -> CoreResult<String> {
    match customer.default_address().map(|address| address.phone.expose()) {
        Some(Value::String(text)) if text.is_empty() => Ok(String::new()),
        Some(raw) => normalize_phone_or_empty(raw),
        None => Ok(String::new()),
    }
}

fn region(customer: &NormalizedCustomer, _ctx: &RowContext) -> CoreResult<String> {
    Ok(customer
        .default_address()
        .and_then(|address| address.province.as_deref())
        .map(translate_region)
        .unwrap_or_default()
        .to_string())
}

pub fn profile() -> Result<CarrierProfile<NormalizedCustomer>, ProfileError> {
    let columns: Vec<ColumnSpec<NormalizedCustomer>> = vec![
        ColumnSpec::derived("ID", short_id),
        ColumnSpec::derived("タグ", tags),
        ColumnSpec::derived("お名前", name),
        ColumnSpec::field("メールアドレス", CustomerField::Email),
        ColumnSpec::derived("電話番号", phone),
        ColumnSpec::field("郵便番号", CustomerField::PostalCode),
        ColumnSpec::derived("都道府県", region),
        ColumnSpec::field("市区町村", CustomerField::City),
        ColumnSpec::field("住所1", CustomerField::Address1),
        ColumnSpec::field("住所2", CustomerField::Address2),
    ];

    CarrierProfile::new(PROFILE_NAME, CUSTOMER_WIDTH, true, columns)
}
