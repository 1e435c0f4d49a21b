// Suicide-risk dataset loader
//
// Loads the merged `text,label` CSV used to train the risk classifier,
// dropping stray header rows and checking labels are integers.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::errors::PrepError;

/// Default location of the merged dataset
pub const DEFAULT_DATASET_PATH: &str = "datasets/merged_suicide_dataset.csv";

const SAMPLE_ROWS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledText {
    pub text: String,
    /// 1 = suicidal, 0 = non-suicidal
    pub label: i64,
}

#[derive(Debug, Clone, Default)]
pub struct SuicideDataset {
    pub rows: Vec<LabeledText>,
    /// Rows dropped because the text was a leftover "Title" header
    pub dropped: usize,
}

impl SuicideDataset {
    /// Count rows per label, most frequent first
    pub fn label_distribution(&self) -> Vec<(i64, usize)> {
        let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
        for row in &self.rows {
            *counts.entry(row.label).or_default() += 1;
        }

        let mut distribution: Vec<(i64, usize)> = counts.into_iter().collect();
        distribution.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        distribution
    }

    pub fn summary(&self) -> DatasetSummary<'_> {
        DatasetSummary { dataset: self }
    }
}

/// Printable overview: shape, label distribution and a sample
pub struct DatasetSummary<'a> {
    dataset: &'a SuicideDataset,
}

impl fmt::Display for DatasetSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Shape: ({}, 2)", self.dataset.rows.len())?;
        if self.dataset.dropped > 0 {
            writeln!(f, "Dropped title rows: {}", self.dataset.dropped)?;
        }

        writeln!(f, "Label distribution:")?;
        for (label, count) in self.dataset.label_distribution() {
            writeln!(f, "  {}: {}", label, count)?;
        }

        writeln!(f, "Sample:")?;
        for (idx, row) in self.dataset.rows.iter().take(SAMPLE_ROWS).enumerate() {
            writeln!(f, "  {:>3}  {}  {}", idx, row.label, truncate(&row.text, 60))?;
        }

        Ok(())
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", head)
}

/// Load and clean the dataset at `path`
///
/// Expects `text` and `label` columns. Rows whose text is "title" (any case)
/// are dropped; a label that is not an integer fails the load.
pub fn load_suicide_data(path: &Path) -> Result<SuicideDataset, PrepError> {
    let csv_err = |source| PrepError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(csv_err)?;
    let headers = reader.headers().map_err(csv_err)?.clone();

    let column = |name: &'static str| -> Result<usize, PrepError> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| PrepError::MissingColumn {
                path: path.to_path_buf(),
                column: name,
            })
    };
    let text_idx = column("text")?;
    let label_idx = column("label")?;

    let mut dataset = SuicideDataset::default();

    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(csv_err)?;
        let text = record.get(text_idx).unwrap_or_default();

        if text.to_lowercase() == "title" {
            dataset.dropped += 1;
            continue;
        }

        let raw_label = record.get(label_idx).unwrap_or_default();
        let label = parse_label(raw_label).ok_or_else(|| PrepError::InvalidLabel {
            path: PathBuf::from(path),
            row: idx + 1,
            value: raw_label.to_string(),
        })?;

        dataset.rows.push(LabeledText {
            text: text.to_string(),
            label,
        });
    }

    tracing::info!(
        rows = dataset.rows.len(),
        dropped = dataset.dropped,
        path = %path.display(),
        "Suicide dataset loaded and cleaned"
    );

    Ok(dataset)
}

/// Integer labels, also accepting whole floats such as "1.0"
fn parse_label(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<i64>() {
        return Some(value);
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 => Some(value as i64),
        _ => None,
    }
}
