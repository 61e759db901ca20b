//! Seino Transportation manifest (XLSX, 34 columns, no header row).

use shipdesk_core::normalize::strip_whitespace;
use shipdesk_core::CoreResult;
use shipdesk_shared::NormalizedOrder;

use crate::column::ColumnSpec;
use crate::context::RowContext;
use crate::derived::{self, region_kanji};
use crate::fields::OrderField;
use crate::profile::{CarrierProfile, ProfileError};
use crate::shipper::SeinoShipper;

pub const PROFILE_NAME: &str = "seino";
pub const SEINO_WIDTH: usize = 34;
/// Characters of the order number kept in the shipper reference.
const REFERENCE_DIGITS: usize = 17;
const RESERVED: &str = "予備";

fn postal_code(order: &NormalizedOrder, _ctx: &RowContext) -> CoreResult<String> {
    Ok(order
        .shipping_address
        .as_ref()
        .and_then(|address| address.zip.as_deref())
        .map(|zip| zip.replace('-', ""))
        .unwrap_or_default())
}

/// Prefecture, city and both street lines run together with no whitespace.
fn delivery_address(order: &NormalizedOrder, _ctx: &RowContext) -> CoreResult<String> {
    let Some(address) = &order.shipping_address else {
        return Ok(String::new());
    };
    Ok([
        strip_whitespace(Some(region_kanji(order))),
        strip_whitespace(address.city.as_deref()),
        strip_whitespace(address.address1.as_deref()),
        strip_whitespace(address.address2.as_deref()),
    ]
    .concat())
}

pub fn profile(shipper: &SeinoShipper) -> Result<CarrierProfile<NormalizedOrder>, ProfileError> {
    let prefix = shipper.reference_prefix.clone();
    let reference = move |order: &NormalizedOrder, _ctx: &RowContext| -> CoreResult<String> {
        let digits: String = order.numeric_id().chars().take(REFERENCE_DIGITS).collect();
        Ok(format!("{prefix}{digits}"))
    };

    let columns: Vec<ColumnSpec<NormalizedOrder>> = vec![
        ColumnSpec::constant("荷送人電話番号", &shipper.phone),
        ColumnSpec::blank(RESERVED),
        ColumnSpec::blank(RESERVED),
        ColumnSpec::blank(RESERVED),
        ColumnSpec::derived("お客様管理番号", reference),
        ColumnSpec::constant("個数", "1"),
        ColumnSpec::blank(RESERVED),
        ColumnSpec::constant("発行枚数", "1"),
        ColumnSpec::blank(RESERVED),
        ColumnSpec::blank(RESERVED),
        ColumnSpec::blank(RESERVED),
        ColumnSpec::constant("荷送人名称", &shipper.name),
        ColumnSpec::constant("荷送人住所", &shipper.address),
        ColumnSpec::constant("荷送人住所２", &shipper.building),
        ColumnSpec::constant("荷送人連絡先", &shipper.phone),
        ColumnSpec::blank(RESERVED),
        ColumnSpec::blank(RESERVED),
        ColumnSpec::blank(RESERVED),
        ColumnSpec::derived("お届け先郵便番号", postal_code),
        ColumnSpec::derived("お届け先名称", derived::recipient_name),
        ColumnSpec::blank(RESERVED),
        ColumnSpec::derived("お届け先住所", delivery_address),
        ColumnSpec::blank(RESERVED),
        ColumnSpec::derived("お届け先電話番号", derived::recipient_phone),
        ColumnSpec::blank(RESERVED),
        ColumnSpec::blank(RESERVED),
        ColumnSpec::blank(RESERVED),
        ColumnSpec::blank(RESERVED),
        ColumnSpec::blank(RESERVED),
        ColumnSpec::blank(RESERVED),
        ColumnSpec::blank(RESERVED),
        ColumnSpec::blank(RESERVED),
        ColumnSpec::blank(RESERVED),
        ColumnSpec::field("お届け先メールアドレス", OrderField::Email),
    ];

    CarrierProfile::new(PROFILE_NAME, SEINO_WIDTH, false, columns)
}
