pub mod app_config;
pub mod jobs;
pub mod writer;

use shipdesk_carrier::ProfileError;
use shipdesk_core::CoreError;
use thiserror::Error;

pub use jobs::{export_customers, export_manifest, export_settlement};
pub use writer::{ContainerKind, DelimiterPolicy, ExportPayload, ExportWriter};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Spreadsheet encoding failed: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Sheet has more rows or columns than a workbook can hold")]
    SheetTooLarge,
}

pub type ExportResult<T> = Result<T, ExportError>;
