use serde::{Deserialize, Serialize};

use super::order::{join_name, ShippingAddress};
use super::tags::TagSet;
use crate::pii::Masked;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedCustomer {
    pub id: String,
    pub email: Option<Masked<String>>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default)]
    pub tags: TagSet,
    #[serde(default)]
    pub addresses: Vec<ShippingAddress>,
}

impl NormalizedCustomer {
    pub fn full_name(&self) -> String {
        join_name(self.last_name.as_deref(), self.first_name.as_deref())
    }

    /// The first address on file is the customer's default.
    pub fn default_address(&self) -> Option<&ShippingAddress> {
        self.addresses.first()
    }

    /// Id without the `.../Customer/` prefix; empty when the prefix is missing.
    pub fn short_id(&self) -> &str {
        self.id
            .split_once("/Customer/")
            .map_or("", |(_, tail)| tail)
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_ref().map(|email| email.expose().as_str())
    }
}
