use serde::{Deserialize, Serialize};

use super::model::{Sample, SampleSet};

// ---------------------------------------------------------------------------
// Extraction options
// ---------------------------------------------------------------------------

/// How raw rows are turned into samples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Number of leading rows skipped as headers.
    pub header_rows: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self { header_rows: 1 }
    }
}

// ---------------------------------------------------------------------------
// Row → Sample extraction
// ---------------------------------------------------------------------------

/// Turn tokenized rows into a [`SampleSet`].
///
/// Field 0 is read as hours (x) and field 1 as score (y). A row is dropped,
/// not reported as an error, when:
/// * it has fewer than two fields
/// * either field fails to parse as a decimal number
/// * either parsed value is NaN or infinite
///
/// Extra fields beyond the second are ignored.
pub fn extract_samples<R: AsRef<str>>(rows: &[Vec<R>], options: &ExtractOptions) -> SampleSet {
    let samples: SampleSet = rows
        .iter()
        .enumerate()
        .skip(options.header_rows)
        .filter_map(|(row_no, row)| {
            let sample = parse_row(row);
            if sample.is_none() {
                log::debug!("Rejected row {row_no}: {:?}", row_preview(row));
            }
            sample
        })
        .collect();

    log::info!(
        "Extracted {} samples from {} rows ({} rejected)",
        samples.len(),
        rows.len(),
        rejected_count(rows, options, &samples)
    );
    samples
}

/// Number of non-header rows that did not make it into `samples`.
pub fn rejected_count<R>(rows: &[Vec<R>], options: &ExtractOptions, samples: &SampleSet) -> usize {
    rows.len()
        .saturating_sub(options.header_rows)
        .saturating_sub(samples.len())
}

fn parse_row<R: AsRef<str>>(row: &[R]) -> Option<Sample> {
    let [x, y, ..] = row else {
        return None;
    };
    let x = x.as_ref().trim().parse::<f64>().ok()?;
    let y = y.as_ref().trim().parse::<f64>().ok()?;
    Sample::new(x, y)
}

fn row_preview<R: AsRef<str>>(row: &[R]) -> Vec<&str> {
    row.iter().map(|f| f.as_ref()).collect()
}
