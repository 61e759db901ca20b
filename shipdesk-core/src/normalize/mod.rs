//! Pure conversions from raw record fields to the values written into
//! carrier manifests and exports. Lookups never fail: an unknown key maps to
//! an empty string.

pub mod delivery;
pub mod phone;
pub mod region;
pub mod text;

pub use delivery::{map_delivery_window, DELIVERY_DATE_ATTRIBUTE, DELIVERY_WINDOW_ATTRIBUTE};
pub use phone::{normalize_phone, normalize_phone_or_empty};
pub use region::translate_region;
pub use text::{normalize_date_separators, strip_whitespace};
