use std::collections::HashMap;
use std::sync::LazyLock;

/// Custom attribute holding the requested delivery date (`YYYY-MM-DD`).
pub const DELIVERY_DATE_ATTRIBUTE: &str = "shipandco-配達希望日";
/// Custom attribute holding the requested delivery time band.
pub const DELIVERY_WINDOW_ATTRIBUTE: &str = "shipandco-配達希望時間帯";

/// Checkout tokens (Japanese and English storefront variants) to carrier
/// time-band codes.
const WINDOWS: [(&str, &str); 6] = [
    ("午前中（12時まで）", "0812"),
    ("before-noon", "0812"),
    ("14-16", "1416"),
    ("16-18", "1618"),
    ("18-20", "1820"),
    ("19-21", "1921"),
];

static WINDOW_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| WINDOWS.into_iter().collect());

/// Map a delivery time band to its 4-digit code, `""` when unrecognized.
pub fn map_delivery_window(free_text: &str) -> &'static str {
    WINDOW_TABLE.get(free_text).copied().unwrap_or_default()
}
