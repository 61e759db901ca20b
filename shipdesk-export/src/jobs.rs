//! One function per downloadable file: pick the profile, render, encode.

use shipdesk_carrier::{customers, CarrierKind, RowContext, ShipmentType, ShipperProfile};
use shipdesk_order::{settlement_rows, CommissionSummary};
use shipdesk_shared::{NormalizedCustomer, NormalizedOrder};
use tracing::info;

use crate::writer::{ContainerKind, ExportPayload, ExportWriter};
use crate::ExportResult;

pub const YAMATO_FILENAME: &str = "yamato_orders.csv";
pub const SEINO_FILENAME: &str = "seino_orders.xlsx";
pub const SETTLEMENT_FILENAME: &str = "b2b_affiliate_orders.csv";
pub const CUSTOMERS_FILENAME: &str = "customers-data.csv";

/// Container and filename each carrier portal expects.
pub fn manifest_target(carrier: CarrierKind) -> (ContainerKind, &'static str) {
    match carrier {
        CarrierKind::Yamato => (ContainerKind::DelimitedText, YAMATO_FILENAME),
        CarrierKind::Seino => (ContainerKind::Spreadsheet, SEINO_FILENAME),
    }
}

pub fn export_manifest(
    carrier: CarrierKind,
    orders: &[NormalizedOrder],
    ctx: &RowContext,
    shipper: &ShipperProfile,
    writer: &ExportWriter,
) -> ExportResult<ExportPayload> {
    info!(
        carrier = carrier.name(),
        orders = orders.len(),
        shipment_type = ctx.shipment_type.code(),
        "Building shipping manifest"
    );
    let profile = carrier.profile(shipper)?;
    let rows = profile.render(orders, ctx)?;
    let (kind, filename) = manifest_target(carrier);
    writer.write(&rows, kind, filename)
}

pub fn export_customers(customers: &[NormalizedCustomer], writer: &ExportWriter) -> ExportResult<ExportPayload> {
    let profile = customers::profile()?;
    // Customer rows use no per-run values.
    let ctx = RowContext::today(ShipmentType::default());
    let rows = profile.render(customers, &ctx)?;
    writer.write(&rows, ContainerKind::DelimitedText, CUSTOMERS_FILENAME)
}

pub fn export_settlement(
    orders: &[NormalizedOrder],
    summary: &CommissionSummary,
    writer: &ExportWriter,
) -> ExportResult<ExportPayload> {
    let rows = settlement_rows(orders, summary);
    writer.write(&rows, ContainerKind::DelimitedText, SETTLEMENT_FILENAME)
}
