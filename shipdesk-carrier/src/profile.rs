use shipdesk_core::CoreResult;
use shipdesk_shared::ExportRow;
use tracing::debug;

use crate::column::ColumnSpec;
use crate::context::RowContext;
use crate::fields::FieldSource;

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Profile {profile} declares {expected} columns but defines {actual}")]
    WidthMismatch {
        profile: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Fixed column schema required by one manifest-ingestion portal.
///
/// The width is checked once, when the profile is built; every row it
/// serializes afterwards has exactly that many cells, whatever is missing
/// from the source record.
#[derive(Debug)]
pub struct CarrierProfile<R: FieldSource> {
    name: &'static str,
    emits_header: bool,
    columns: Vec<ColumnSpec<R>>,
}

impl<R: FieldSource> CarrierProfile<R> {
    pub fn new(
        name: &'static str,
        width: usize,
        emits_header: bool,
        columns: Vec<ColumnSpec<R>>,
    ) -> Result<Self, ProfileError> {
        if columns.len() != width {
            return Err(ProfileError::WidthMismatch {
                profile: name,
                expected: width,
                actual: columns.len(),
            });
        }

        Ok(Self {
            name,
            emits_header,
            columns,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn emits_header(&self) -> bool {
        self.emits_header
    }

    pub fn columns(&self) -> &[ColumnSpec<R>] {
        &self.columns
    }

    pub fn header(&self) -> ExportRow {
        self.columns.iter().map(ColumnSpec::header).collect()
    }

    /// Serialize one record into a row of `width()` cells.
    pub fn serialize(&self, record: &R, ctx: &RowContext) -> CoreResult<ExportRow> {
        let cells = self
            .columns
            .iter()
            .map(|column| column.render(record, ctx))
            .collect::<CoreResult<Vec<String>>>()?;
        Ok(ExportRow::new(cells))
    }

    /// Full sheet: the header row (if this profile has one) then one row per record.
    pub fn render(&self, records: &[R], ctx: &RowContext) -> CoreResult<Vec<ExportRow>> {
        let mut rows = Vec::with_capacity(records.len() + 1);
        if self.emits_header {
            rows.push(self.header());
        }
        for record in records {
            rows.push(self.serialize(record, ctx)?);
        }

        debug!(profile = self.name, rows = rows.len(), "Rendered profile rows");
        Ok(rows)
    }
}
