use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use shipdesk_carrier::{CarrierKind, RowContext, ShipmentType};
use shipdesk_core::mutation::TagUpdateRequest;
use shipdesk_export::app_config::Config;
use shipdesk_export::{export_customers, export_manifest, export_settlement, ExportPayload, ExportWriter};
use shipdesk_order::{plan_batch, settlement_tag_batch, CommissionAggregator, TagOperation};
use shipdesk_shared::{NormalizedCustomer, NormalizedOrder};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::args::{TagsArgs, TargetArg};

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse records in {}", path.display()))
}

fn save(payload: &ExportPayload, out_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(out_dir).with_context(|| format!("Failed to create {}", out_dir.display()))?;
    let path = out_dir.join(&payload.filename);
    fs::write(&path, &payload.bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

pub fn manifest(
    config: &Config,
    out_dir: &Path,
    carrier: CarrierKind,
    input: &Path,
    shipment_type: &str,
    ship_date: Option<chrono::NaiveDate>,
) -> Result<PathBuf> {
    let orders: Vec<NormalizedOrder> = read_records(input)?;
    let shipment_type: ShipmentType = shipment_type.parse()?;
    let ctx = match ship_date {
        Some(date) => RowContext::new(date, shipment_type),
        None => RowContext::today(shipment_type),
    };
    let writer = ExportWriter::new(config.export.delimiter_policy);

    let payload = export_manifest(carrier, &orders, &ctx, &config.shipper, &writer)?;
    let event = payload.generated_event(carrier.name(), orders.len());
    info!(?event, "Manifest generated");
    save(&payload, out_dir)
}

pub fn settlement(config: &Config, out_dir: &Path, input: &Path, commission: &str, mark_paid: bool) -> Result<PathBuf> {
    let orders: Vec<NormalizedOrder> = read_records(input)?;
    let aggregator = CommissionAggregator::new(config.commission.basis, config.commission.rounding);
    let summary = aggregator.summarize(&orders, commission)?;
    let writer = ExportWriter::new(config.export.delimiter_policy);

    let payload = export_settlement(&orders, &summary, &writer)?;
    info!(event = ?summary.settled_event(), "Commission settled");
    let path = save(&payload, out_dir)?;

    if mark_paid {
        print_requests(&settlement_tag_batch(&orders)?)?;
    }
    Ok(path)
}

pub fn customers(config: &Config, out_dir: &Path, input: &Path) -> Result<PathBuf> {
    let customers: Vec<NormalizedCustomer> = read_records(input)?;
    let writer = ExportWriter::new(config.export.delimiter_policy);

    let payload = export_customers(&customers, &writer)?;
    let event = payload.generated_event("customers", customers.len());
    info!(?event, "Customer list generated");
    save(&payload, out_dir)
}

/// Plan the requests for a tag operation without sending them.
pub fn plan_tags(args: &TagsArgs) -> Result<Vec<TagUpdateRequest>> {
    let op = tag_operation(args)?;
    let requests = match args.target {
        TargetArg::Customers => plan_batch(&read_records::<NormalizedCustomer>(&args.input)?, &op)?,
        TargetArg::Orders => plan_batch(&read_records::<NormalizedOrder>(&args.input)?, &op)?,
    };
    info!(records = requests.len(), "Tag updates planned");
    Ok(requests)
}

pub fn print_requests(requests: &[TagUpdateRequest]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(requests)?);
    Ok(())
}

fn tag_operation(args: &TagsArgs) -> Result<TagOperation> {
    match (&args.add, &args.remove, &args.replace, &args.with) {
        (Some(tag), None, None, _) => Ok(TagOperation::Add(tag.clone())),
        (None, Some(tag), None, _) => Ok(TagOperation::Remove(tag.clone())),
        (None, None, Some(old), Some(new)) => Ok(TagOperation::Replace {
            old: old.iter().map(String::as_str).collect(),
            new: new.clone(),
        }),
        _ => bail!("Choose one of --add, --remove or --replace with --with"),
    }
}
