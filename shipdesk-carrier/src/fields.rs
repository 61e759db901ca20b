use shipdesk_shared::{NormalizedCustomer, NormalizedOrder, ShippingAddress};
use std::fmt;

/// A record whose named fields can be referenced directly by a column.
pub trait FieldSource {
    type Field: Copy + fmt::Debug;

    /// `None` when the field (or the structure holding it) is absent.
    fn field(&self, field: Self::Field) -> Option<&str>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Email,
    PostalCode,
    FirstName,
    LastName,
    Province,
    City,
    Address1,
    Address2,
}

impl FieldSource for NormalizedOrder {
    type Field = OrderField;

    fn field(&self, field: OrderField) -> Option<&str> {
        let address = self.shipping_address.as_ref();
        match field {
            OrderField::Email => self.email(),
            OrderField::PostalCode => address.and_then(|a| a.zip.as_deref()),
            OrderField::FirstName => address.and_then(|a| a.first_name.as_deref()),
            OrderField::LastName => address.and_then(|a| a.last_name.as_deref()),
            OrderField::Province => address.and_then(|a| a.province.as_deref()),
            OrderField::City => address.and_then(|a| a.city.as_deref()),
            OrderField::Address1 => address.and_then(|a| a.address1.as_deref()),
            OrderField::Address2 => address.and_then(|a| a.address2.as_deref()),
        }
    }
}

/// Customer fields; address fields read the default (first) address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerField {
    Email,
    PostalCode,
    City,
    Address1,
    Address2,
}

impl FieldSource for NormalizedCustomer {
    type Field = CustomerField;

    fn field(&self, field: CustomerField) -> Option<&str> {
        let address: Option<&ShippingAddress> = self.default_address();
        match field {
            CustomerField::Email => self.email(),
            CustomerField::PostalCode => address.and_then(|a| a.zip.as_deref()),
            CustomerField::City => address.and_then(|a| a.city.as_deref()),
            CustomerField::Address1 => address.and_then(|a| a.address1.as_deref()),
            CustomerField::Address2 => address.and_then(|a| a.address2.as_deref()),
        }
    }
}
