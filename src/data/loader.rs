use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value as JsonValue;

/// Tokenized rows, each an ordered list of string fields.
pub type RawRows = Vec<Vec<String>>;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load raw rows from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` / `.txt` – delimited text split on `delimiter`
/// * `.tsv`          – tab separated, `delimiter` is ignored
/// * `.json`         – `[["hours", "score"], [2.5, 21], ...]`
///
/// No header interpretation happens here; every row is returned as-is.
pub fn load_file(path: &Path, delimiter: u8) -> Result<RawRows> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let rows = match ext.as_str() {
        "csv" | "txt" => load_delimited(path, delimiter),
        "tsv" => load_delimited(path, b'\t'),
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }?;
    log::info!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Delimited text
// ---------------------------------------------------------------------------

fn load_delimited(path: &Path, delimiter: u8) -> Result<RawRows> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_delimited(file, delimiter)
}

/// Tokenize delimited text. Rows may have differing field counts.
pub fn read_delimited<R: Read>(reader: R, delimiter: u8) -> Result<RawRows> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    reader
        .records()
        .enumerate()
        .map(|(row_no, result)| -> Result<Vec<String>> {
            let record = result.with_context(|| format!("reading row {row_no}"))?;
            Ok(record.iter().map(str::to_string).collect())
        })
        .collect()
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<RawRows> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json_rows(&text)
}

/// Expected JSON layout: a top-level array of row arrays.
///
/// ```json
/// [
///   ["hours", "score"],
///   [2.5, 21],
///   ["5.1", "47"]
/// ]
/// ```
///
/// Numbers and strings become fields verbatim, `null` becomes an empty field.
pub fn parse_json_rows(text: &str) -> Result<RawRows> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let rows = root.as_array().context("Expected top-level JSON array")?;

    rows.iter()
        .enumerate()
        .map(|(i, row)| -> Result<Vec<String>> {
            let fields = row
                .as_array()
                .with_context(|| format!("Row {i} is not a JSON array"))?;
            Ok(fields.iter().map(json_field).collect())
        })
        .collect()
}

fn json_field(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimited_rows_keep_every_line() {
        let text = "Hours,Scores\n2.5,21\n5.1,47\nbroken\n";
        let rows = read_delimited(text.as_bytes(), b',').unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], vec!["Hours", "Scores"]);
        assert_eq!(rows[3], vec!["broken"]);
    }

    #[test]
    fn custom_delimiter() {
        let rows = read_delimited("1;50\n2;60\n".as_bytes(), b';').unwrap();
        assert_eq!(rows, vec![vec!["1", "50"], vec!["2", "60"]]);
    }

    #[test]
    fn json_rows_are_stringified() {
        let rows = parse_json_rows(r#"[["hours","score"],[2.5,21],["x",null]]"#).unwrap();
        assert_eq!(rows[1], vec!["2.5", "21"]);
        assert_eq!(rows[2], vec!["x", ""]);
    }

    #[test]
    fn json_must_be_array_of_arrays() {
        assert!(parse_json_rows(r#"{"hours": 1}"#).is_err());
        assert!(parse_json_rows(r#"[{"hours": 1}]"#).is_err());
    }

    #[test]
    fn load_file_dispatches_on_extension() {
        let dir = std::env::temp_dir();
        let tsv = dir.join(format!("study-score-loader-{}.tsv", std::process::id()));
        std::fs::write(&tsv, "hours\tscore\n3\t55\n").unwrap();
        let rows = load_file(&tsv, b',').unwrap();
        std::fs::remove_file(&tsv).unwrap();
        assert_eq!(rows[1], vec!["3", "55"]);

        let err = load_file(Path::new("scores.xlsx"), b',').unwrap_err();
        assert!(err.to_string().contains(".xlsx"));
    }
}
