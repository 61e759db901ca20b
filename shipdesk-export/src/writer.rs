use chrono::Utc;
use rust_xlsxwriter::Workbook;
use serde::{Deserialize, Serialize};
use shipdesk_shared::models::events::ExportGeneratedEvent;
use shipdesk_shared::ExportRow;
use tracing::info;
use uuid::Uuid;

use crate::{ExportError, ExportResult};

/// Byte-order mark prepended to every payload so spreadsheet tools detect UTF-8.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub const CSV_CONTENT_TYPE: &str = "text/csv;charset=utf-8;";
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet;charset=utf-8;";

const SHEET_NAME: &str = "Orders";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    DelimitedText,
    Spreadsheet,
}

/// Cell escaping for delimited text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelimiterPolicy {
    /// Cells joined with `,` as-is. Portals ingesting these files expect this
    /// exact byte layout, so a cell containing `,` shifts later columns.
    #[default]
    Legacy,
    /// Cells containing `,`, `"` or a newline are quoted.
    Quoted,
}

/// A finished file, ready to be handed to whoever delivers it.
#[derive(Debug, Clone)]
pub struct ExportPayload {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportPayload {
    pub fn generated_event(&self, profile: &str, row_count: usize) -> ExportGeneratedEvent {
        ExportGeneratedEvent {
            export_id: Uuid::new_v4(),
            profile: profile.to_string(),
            filename: self.filename.clone(),
            row_count,
            byte_count: self.bytes.len(),
            timestamp: Utc::now().timestamp(),
        }
    }
}

/// Encodes rows into a downloadable payload. Never touches the file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportWriter {
    policy: DelimiterPolicy,
}

impl ExportWriter {
    pub fn new(policy: DelimiterPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> DelimiterPolicy {
        self.policy
    }

    pub fn write(&self, rows: &[ExportRow], kind: ContainerKind, filename: &str) -> ExportResult<ExportPayload> {
        let (content_type, body) = match kind {
            ContainerKind::DelimitedText => (CSV_CONTENT_TYPE, self.delimited(rows)?),
            ContainerKind::Spreadsheet => (XLSX_CONTENT_TYPE, spreadsheet(rows)?),
        };

        let mut bytes = Vec::with_capacity(UTF8_BOM.len() + body.len());
        bytes.extend_from_slice(UTF8_BOM);
        bytes.extend_from_slice(&body);

        info!(
            filename,
            rows = rows.len(),
            bytes = bytes.len(),
            "Export payload written"
        );
        Ok(ExportPayload {
            filename: filename.to_string(),
            content_type,
            bytes,
        })
    }

    fn delimited(&self, rows: &[ExportRow]) -> ExportResult<Vec<u8>> {
        match self.policy {
            DelimiterPolicy::Legacy => {
                let text = rows
                    .iter()
                    .map(|row| row.cells().join(","))
                    .collect::<Vec<_>>()
                    .join("\n");
                Ok(text.into_bytes())
            }
            DelimiterPolicy::Quoted => quoted(rows),
        }
    }
}

fn quoted(rows: &[ExportRow]) -> ExportResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for row in rows {
        writer.write_record(row.cells())?;
    }

    let mut bytes = writer.into_inner().map_err(|e| e.into_error())?;
    // Rows are separated, not terminated, as in the legacy layout.
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    Ok(bytes)
}

fn spreadsheet(rows: &[ExportRow]) -> ExportResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (r, row) in rows.iter().enumerate() {
        let r = u32::try_from(r).map_err(|_| ExportError::SheetTooLarge)?;
        for (c, cell) in row.cells().iter().enumerate() {
            if cell.is_empty() {
                continue;
            }
            let c = u16::try_from(c).map_err(|_| ExportError::SheetTooLarge)?;
            sheet.write_string(r, c, cell)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(cells: &[&[&str]]) -> Vec<ExportRow> {
        cells.iter().map(|row| row.iter().copied().collect()).collect()
    }

    #[test]
    fn test_legacy_csv_layout() {
        let payload = ExportWriter::default()
            .write(&rows(&[&["a", "b"], &["c", ""]]), ContainerKind::DelimitedText, "x.csv")
            .unwrap();

        assert_eq!(payload.content_type, CSV_CONTENT_TYPE);
        assert_eq!(payload.bytes, b"\xEF\xBB\xBFa,b\nc,".to_vec());
    }

    #[test]
    fn test_legacy_does_not_escape() {
        let payload = ExportWriter::new(DelimiterPolicy::Legacy)
            .write(&rows(&[&["大阪市,北区", "x"]]), ContainerKind::DelimitedText, "x.csv")
            .unwrap();
        assert_eq!(&payload.bytes[3..], "大阪市,北区,x".as_bytes());
    }

    #[test]
    fn test_quoted_escapes_only_when_needed() {
        let payload = ExportWriter::new(DelimiterPolicy::Quoted)
            .write(
                &rows(&[&["大阪市,北区", "say \"hi\"", "plain"], &[""], &["a", "b"]]),
                ContainerKind::DelimitedText,
                "x.csv",
            )
            .unwrap();
        let text = String::from_utf8(payload.bytes[3..].to_vec()).unwrap();
        assert_eq!(text, "\"大阪市,北区\",\"say \"\"hi\"\"\",plain\n\"\"\na,b");
    }

    #[test]
    fn test_spreadsheet_is_bom_prefixed_zip() {
        let payload = ExportWriter::default()
            .write(&rows(&[&["1", "", "x"]]), ContainerKind::Spreadsheet, "x.xlsx")
            .unwrap();

        assert_eq!(payload.content_type, XLSX_CONTENT_TYPE);
        assert_eq!(&payload.bytes[..3], UTF8_BOM);
        assert_eq!(&payload.bytes[3..5], b"PK");
    }

    #[test]
    fn test_generated_event() {
        let payload = ExportWriter::default()
            .write(&rows(&[&["a"]]), ContainerKind::DelimitedText, "x.csv")
            .unwrap();
        let event = payload.generated_event("yamato", 1);
        assert_eq!(event.filename, "x.csv");
        assert_eq!(event.byte_count, 4);
    }
}
