use serde::Serialize;

/// One output line: ordered string cells, consumed once by the writer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExportRow(Vec<String>);

impl ExportRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self(cells)
    }

    pub fn cells(&self) -> &[String] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_cells(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for ExportRow {
    fn from(cells: Vec<String>) -> Self {
        Self(cells)
    }
}

impl<S: Into<String>> FromIterator<S> for ExportRow {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
