//! Derived cell values shared by more than one profile.

use shipdesk_core::normalize::{normalize_phone_or_empty, translate_region};
use shipdesk_core::CoreResult;
use shipdesk_shared::NormalizedOrder;

use crate::context::RowContext;

/// Recipient phone in `XXX-XXXX-XXXX` form, `""` without an address.
pub fn recipient_phone(order: &NormalizedOrder, _ctx: &RowContext) -> CoreResult<String> {
    match &order.shipping_address {
        Some(address) => normalize_phone_or_empty(address.phone.expose()),
        None => Ok(String::new()),
    }
}

pub fn recipient_name(order: &NormalizedOrder, _ctx: &RowContext) -> CoreResult<String> {
    Ok(order
        .shipping_address
        .as_ref()
        .map(|address| address.full_name())
        .unwrap_or_default())
}

/// Prefecture of the shipping address in kanji.
pub fn region_kanji(order: &NormalizedOrder) -> &'static str {
    order
        .shipping_address
        .as_ref()
        .and_then(|address| address.province.as_deref())
        .map(translate_region)
        .unwrap_or_default()
}
