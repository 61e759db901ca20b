use shipdesk_core::CoreResult;
use std::fmt;

use crate::context::RowContext;
use crate::fields::FieldSource;

type DeriveFn<R> = dyn Fn(&R, &RowContext) -> CoreResult<String> + Send + Sync;

/// Where a cell's content comes from.
pub enum ColumnValue<R: FieldSource> {
    /// Same text on every row (including the empty string).
    Constant(String),
    /// A field read straight off the record; absent fields render as `""`.
    Field(R::Field),
    /// A pure transform of one or more fields.
    Derived(Box<DeriveFn<R>>),
}

impl<R: FieldSource> fmt::Debug for ColumnValue<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnValue::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            ColumnValue::Field(field) => f.debug_tuple("Field").field(field).finish(),
            ColumnValue::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

/// One column of a carrier profile: its header title and its value source.
#[derive(Debug)]
pub struct ColumnSpec<R: FieldSource> {
    header: &'static str,
    value: ColumnValue<R>,
}

impl<R: FieldSource> ColumnSpec<R> {
    pub fn constant(header: &'static str, value: impl Into<String>) -> Self {
        Self {
            header,
            value: ColumnValue::Constant(value.into()),
        }
    }

    /// A column the carrier defines but this shipper never fills.
    pub fn blank(header: &'static str) -> Self {
        Self::constant(header, "")
    }

    pub fn field(header: &'static str, field: R::Field) -> Self {
        Self {
            header,
            value: ColumnValue::Field(field),
        }
    }

    pub fn derived<F>(header: &'static str, derive: F) -> Self
    where
        F: Fn(&R, &RowContext) -> CoreResult<String> + Send + Sync + 'static,
    {
        Self {
            header,
            value: ColumnValue::Derived(Box::new(derive)),
        }
    }

    pub fn header(&self) -> &'static str {
        self.header
    }

    pub fn value(&self) -> &ColumnValue<R> {
        &self.value
    }

    pub fn render(&self, record: &R, ctx: &RowContext) -> CoreResult<String> {
        match &self.value {
            ColumnValue::Constant(value) => Ok(value.clone()),
            ColumnValue::Field(field) => Ok(record.field(*field).unwrap_or_default().to_string()),
            ColumnValue::Derived(derive) => derive(record, ctx),
        }
    }
}
