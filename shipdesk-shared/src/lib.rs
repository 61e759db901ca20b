pub mod models;
pub mod pii;

pub use models::customer::NormalizedCustomer;
pub use models::order::{CustomAttribute, LineItem, Money, NormalizedOrder, OrderCustomer, ShippingAddress};
pub use models::row::ExportRow;
pub use models::tags::TagSet;
pub use pii::Masked;
