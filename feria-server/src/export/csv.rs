use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// UTF-8 byte order mark, so spreadsheet apps pick the right encoding
const BOM: char = '\u{FEFF}';
const LINE_END: &str = "\r\n";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No hay datos disponibles para exportar.")]
    Empty,

    #[error("Export rows must be JSON objects")]
    NotAnObject,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Render `rows` as CSV text (BOM included)
///
/// Columns are the keys of the first row, in field order. Keys missing from
/// later rows render as empty values.
pub fn to_csv<T: Serialize>(rows: &[T]) -> Result<String, ExportError> {
    if rows.is_empty() {
        return Err(ExportError::Empty);
    }

    let records = rows
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?;

    let Some(first) = records[0].as_object() else {
        return Err(ExportError::NotAnObject);
    };
    let headers: Vec<&String> = first.keys().collect();

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(
        headers
            .iter()
            .map(|h| h.as_str())
            .collect::<Vec<_>>()
            .join(","),
    );

    for record in &records {
        let object = record.as_object().ok_or(ExportError::NotAnObject)?;
        let row = headers
            .iter()
            .map(|key| quote(&cell_text(object.get(key.as_str()))))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(row);
    }

    let mut out = String::new();
    out.push(BOM);
    out.push_str(&lines.join(LINE_END));
    Ok(out)
}

/// `registro_{prefix}_{d}_{m}_{yyyy}_{h}{min}{s}.csv`, nothing zero-padded
pub fn export_filename(prefix: &str, now: NaiveDateTime) -> String {
    format!(
        "registro_{}_{}_{}_{}_{}{}{}.csv",
        prefix,
        now.day(),
        now.month(),
        now.year(),
        now.hour(),
        now.minute(),
        now.second()
    )
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| cell_text(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
        Some(other) => other.to_string(),
    }
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}
