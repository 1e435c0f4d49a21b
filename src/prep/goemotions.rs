// GoEmotions preparation
//
// Decodes GoEmotions label ids into emotion names, groups them into the
// chat's support buckets and writes cleaned CSV splits for training.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::PrepError;

/// Label assigned when no emotion maps to a bucket
pub const OTHER_BUCKET: &str = "Other";

/// Dataset splits processed by [`prepare_splits`]
pub const SPLITS: [&str; 3] = ["train", "dev", "test"];

const PREVIEW_ROWS: usize = 10;

/// Support buckets and the GoEmotions labels grouped into each
pub const BUCKETS: &[(&str, &[&str])] = &[
    (
        "Sadness/Depression",
        &["sadness", "disappointment", "remorse", "grief", "embarrassment"],
    ),
    (
        "Anxiety/Stress",
        &["nervousness", "fear", "confusion", "realization", "desire"],
    ),
    (
        "Anger/Frustration",
        &["anger", "annoyance", "disgust", "disapproval"],
    ),
    ("Loneliness/Isolation", &["loneliness"]),
    (
        "Positive/Neutral",
        &["joy", "love", "optimism", "admiration", "gratitude", "relief", "neutral"],
    ),
];

/// One processed GoEmotions example
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionRow {
    pub text: String,
    /// Raw comma-separated label ids
    pub labels: String,
    pub emotions: Vec<String>,
    pub buckets: Vec<String>,
}

/// Emotion names indexed by label id
#[derive(Debug, Clone, Default)]
pub struct EmotionTable {
    names: Vec<String>,
}

impl EmotionTable {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self, id: usize) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Read `emotions.txt`: one name per non-blank line, id = line position
pub fn load_emotions(path: &Path) -> Result<EmotionTable, PrepError> {
    let contents = fs::read_to_string(path).map_err(|source| PrepError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let table = EmotionTable::new(
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty()),
    );

    tracing::info!(count = table.len(), "Loaded emotions");
    Ok(table)
}

/// Decode a label string like "0,1,26" into emotion names
///
/// Fields that are not plain digits and ids outside the table are skipped.
pub fn decode_label_ids(labels: &str, table: &EmotionTable) -> Vec<String> {
    labels
        .split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty() && field.chars().all(|c| c.is_ascii_digit()))
        .filter_map(|field| field.parse::<usize>().ok())
        .filter_map(|id| table.name(id))
        .map(str::to_string)
        .collect()
}

/// Map emotions to support buckets, in bucket table order
pub fn map_to_buckets<S: AsRef<str>>(emotions: &[S]) -> Vec<String> {
    let mapped: Vec<String> = BUCKETS
        .iter()
        .filter(|(_, members)| {
            emotions
                .iter()
                .any(|emotion| members.contains(&emotion.as_ref()))
        })
        .map(|(bucket, _)| bucket.to_string())
        .collect();

    if mapped.is_empty() {
        vec![OTHER_BUCKET.to_string()]
    } else {
        mapped
    }
}

/// Process one headerless `text \t labels \t comment_id` file
pub fn process_tsv(path: &Path, table: &EmotionTable) -> Result<Vec<EmotionRow>, PrepError> {
    let csv_err = |source| PrepError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        let text = record.get(0).unwrap_or_default().to_string();
        let labels = record.get(1).unwrap_or_default().trim().to_string();

        let emotions = decode_label_ids(&labels, table);
        let buckets = map_to_buckets(&emotions);

        rows.push(EmotionRow {
            text,
            labels,
            emotions,
            buckets,
        });
    }

    tracing::info!(rows = rows.len(), path = %path.display(), "Processed GoEmotions split");
    Ok(rows)
}

/// Write rows as CSV with `text,labels,emotions,buckets` columns
///
/// List columns are joined with commas inside one quoted field.
pub fn write_clean_csv(rows: &[EmotionRow], path: &Path) -> Result<(), PrepError> {
    let csv_err = |source| PrepError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
    writer
        .write_record(["text", "labels", "emotions", "buckets"])
        .map_err(csv_err)?;

    for row in rows {
        writer
            .write_record([
                row.text.as_str(),
                row.labels.as_str(),
                row.emotions.join(",").as_str(),
                row.buckets.join(",").as_str(),
            ])
            .map_err(csv_err)?;
    }

    writer.flush().map_err(|source| PrepError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Process train/dev/test splits from `input_dir` into `output_dir`
///
/// Returns the written file paths in split order.
pub fn prepare_splits(
    table: &EmotionTable,
    input_dir: &Path,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, PrepError> {
    fs::create_dir_all(output_dir).map_err(|source| PrepError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();
    for split in SPLITS {
        let rows = process_tsv(&input_dir.join(format!("{}.tsv", split)), table)?;
        let out_path = output_dir.join(format!("{}_clean.csv", split));
        write_clean_csv(&rows, &out_path)?;

        if split == "train" {
            println!("{}", preview(&rows));
        }
        written.push(out_path);
    }

    Ok(written)
}

/// First rows of a split, one line each
pub fn preview(rows: &[EmotionRow]) -> String {
    rows.iter()
        .take(PREVIEW_ROWS)
        .enumerate()
        .map(|(idx, row)| {
            format!(
                "{:>3}  {:<40.40}  [{}]  [{}]",
                idx,
                row.text,
                row.emotions.join(", "),
                row.buckets.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
