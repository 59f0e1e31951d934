//! CSV and TSV text conversion
//!
//! Converts the raw delimited text stored by the host into a cell matrix (for
//! the editable grid) or into header-keyed records (for charting).
//!
//! ## Delimiters
//!
//! A table uses exactly one delimiter: tab when the text contains a tab
//! anywhere, comma otherwise. Editing always writes tab-delimited text back,
//! so a comma table is normalized to tabs on its first edit.

use crate::constants::CATEGORY_KEY;
use crate::data::record::{Record, RecordArray};
use serde::{Deserialize, Serialize};

/// Rows of cells; rows may have different lengths
pub type Matrix = Vec<Vec<String>>;

/// The two recognized delimiters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    /// Tab if the text contains a tab anywhere, comma otherwise
    pub fn detect(raw: &str) -> Self {
        if raw.contains('\t') {
            Delimiter::Tab
        } else {
            Delimiter::Comma
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
        }
    }
}

/// Split raw text into rows (on `\n`) and cells (on the detected delimiter).
///
/// No trimming and no coercion. Empty input yields a single empty cell.
pub fn text_to_matrix(raw: &str) -> Matrix {
    let delimiter = Delimiter::detect(raw).as_char();
    raw.split('\n')
        .map(|row| row.split(delimiter).map(str::to_string).collect())
        .collect()
}

/// Join cells with tabs and rows with newlines
pub fn matrix_to_text(matrix: &[Vec<String>]) -> String {
    matrix
        .iter()
        .map(|row| row.join("\t"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Grid content shown for a field that has no value yet
pub fn default_matrix() -> Matrix {
    vec![vec![CATEGORY_KEY.to_string()], vec![String::new()]]
}

/// Parse raw text into header-keyed records.
///
/// The first line is the header row. In tab-delimited text every comma of a
/// data row is replaced by a period before the row is split, so `1,5` reads
/// as `1.5`. The substitution applies to the whole row, text cells included.
/// Every following line, an empty trailing one included, becomes a record.
pub fn text_to_records(raw: &str) -> RecordArray {
    let delimiter = Delimiter::detect(raw);
    let separator = delimiter.as_char();

    let (header_line, body) = match raw.split_once('\n') {
        Some((header, body)) => (header, Some(body)),
        None => (raw, None),
    };
    let headers: Vec<String> = header_line.split(separator).map(str::to_string).collect();

    let records = body
        .map(|body| {
            body.split('\n')
                .map(|row| {
                    let row = match delimiter {
                        Delimiter::Tab => row.replace(',', "."),
                        Delimiter::Comma => row.to_string(),
                    };
                    let cells: Vec<&str> = row.split(separator).collect();
                    Record::from_cells(&headers, &cells)
                })
                .collect()
        })
        .unwrap_or_default();

    RecordArray::new(headers, records)
}

/// Write records back as delimited text (header row first).
///
/// A repeated header is written once, matching the single value its records
/// keep. Missing values become empty cells.
pub fn records_to_text(records: &RecordArray, delimiter: Delimiter) -> String {
    let separator = delimiter.as_char().to_string();
    let headers = records.distinct_headers();
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(headers.join(&separator));

    for record in records {
        let cells: Vec<&str> = headers
            .iter()
            .map(|header| record.get(header).unwrap_or_default())
            .collect();
        lines.push(cells.join(&separator));
    }

    lines.join("\n")
}
