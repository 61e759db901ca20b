use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::tags::TagSet;
use crate::pii::Masked;

/// Free-form key/value pair attached to an order at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomAttribute {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// Delivery address as returned by the backend (region in romanized form).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub zip: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Kept raw: the backend may hand back a non-string here.
    #[serde(default)]
    pub phone: Masked<Value>,
    pub province: Option<String>,
    pub city: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
}

impl ShippingAddress {
    /// Family name followed by given name, no separator.
    pub fn full_name(&self) -> String {
        join_name(self.last_name.as_deref(), self.first_name.as_deref())
    }
}

/// A decimal amount tagged with its currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub amount: Decimal,
    #[serde(default)]
    pub currency_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub title: String,
    #[serde(default)]
    pub quantity: u32,
    pub unit_price: Money,
}

/// Purchaser details carried on affiliate orders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCustomer {
    pub email: Option<Masked<String>>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl OrderCustomer {
    pub fn full_name(&self) -> String {
        join_name(self.last_name.as_deref(), self.first_name.as_deref())
    }
}

/// An order as fetched from the commerce backend. Never mutated by the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedOrder {
    pub id: String,
    pub email: Option<Masked<String>>,
    #[serde(default)]
    pub custom_attributes: Vec<CustomAttribute>,
    pub shipping_address: Option<ShippingAddress>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    #[serde(default)]
    pub tags: TagSet,
    pub created_at: Option<DateTime<FixedOffset>>,
    pub customer: Option<OrderCustomer>,
}

impl NormalizedOrder {
    /// Value of the first custom attribute named `key`.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.custom_attributes
            .iter()
            .find(|attr| attr.key == key)
            .and_then(|attr| attr.value.as_deref())
    }

    /// Trailing segment of a global id, e.g. `gid://shop/Order/5512` -> `5512`.
    pub fn numeric_id(&self) -> &str {
        self.id
            .rsplit_once('/')
            .map_or(self.id.as_str(), |(_, tail)| tail)
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_ref().map(|email| email.expose().as_str())
    }
}

pub(crate) fn join_name(last: Option<&str>, first: Option<&str>) -> String {
    format!("{}{}", last.unwrap_or_default(), first.unwrap_or_default())
}
