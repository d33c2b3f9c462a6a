use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{Array, AsArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

/// Required column names, as they appear in the source table.
pub const COL_SITE: &str = "Launch Site";
pub const COL_PAYLOAD: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";
pub const COL_BOOSTER: &str = "Booster Version Category";

// ---------------------------------------------------------------------------
// LoadError – the only failure taxonomy; everything here is fatal at startup
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: {detail}")]
    MalformedRow { row: usize, detail: String },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Parquet(#[from] parquet::errors::ParquetError),
    #[error(transparent)]
    Arrow(#[from] arrow::error::ArrowError),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch-record table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – delimited file with a header row (primary format)
/// * `.json`    – records-oriented array of objects with the same keys
/// * `.parquet` – same columns as scalar Arrow arrays
///
/// All formats require the columns `Launch Site`, `Payload Mass (kg)`,
/// `class` (0 or 1) and `Booster Version Category`.
pub fn load_file(path: &Path) -> Result<LaunchDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(LoadError::UnsupportedFormat(other.to_string())),
    }
}

fn open(path: &Path) -> Result<std::fs::File, LoadError> {
    std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn decode_class(class: i64, row: usize) -> Result<Outcome, LoadError> {
    Outcome::from_class(class).ok_or_else(|| LoadError::MalformedRow {
        row,
        detail: format!("'{COL_CLASS}' must be 0 or 1, got {class}"),
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<LaunchDataset, LoadError> {
    let mut reader = csv::Reader::from_reader(open(path)?);
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let column = |name: &'static str| -> Result<usize, LoadError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))
    };
    let site_idx = column(COL_SITE)?;
    let payload_idx = column(COL_PAYLOAD)?;
    let class_idx = column(COL_CLASS)?;
    let booster_idx = column(COL_BOOSTER)?;

    let mut records = Vec::new();

    for (row, result) in reader.records().enumerate() {
        let record = result?;

        let payload_raw = record.get(payload_idx).unwrap_or("");
        let payload_mass_kg: f64 =
            payload_raw
                .trim()
                .parse()
                .map_err(|_| LoadError::MalformedRow {
                    row,
                    detail: format!("'{COL_PAYLOAD}' value '{payload_raw}' is not a number"),
                })?;

        let class_raw = record.get(class_idx).unwrap_or("");
        let class: i64 = class_raw
            .trim()
            .parse()
            .map_err(|_| LoadError::MalformedRow {
                row,
                detail: format!("'{COL_CLASS}' value '{class_raw}' is not an integer"),
            })?;

        records.push(LaunchRecord {
            site: record.get(site_idx).unwrap_or("").to_string(),
            payload_mass_kg,
            outcome: decode_class(class, row)?,
            booster_category: record.get(booster_idx).unwrap_or("").to_string(),
        });
    }

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// One raw JSON record, keyed like the CSV header
/// (the default `df.to_json(orient='records')` layout).
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: i64,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

fn load_json(path: &Path) -> Result<LaunchDataset, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw: Vec<RawRecord> = serde_json::from_str(&text)?;

    let records = raw
        .into_iter()
        .enumerate()
        .map(|(row, r)| {
            Ok(LaunchRecord {
                site: r.site,
                payload_mass_kg: r.payload_mass_kg,
                outcome: decode_class(r.class, row)?,
                booster_category: r.booster_category,
            })
        })
        .collect::<Result<Vec<_>, LoadError>>()?;

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Works with files written by both Pandas (`df.to_parquet()`) and
/// Polars (`df.write_parquet()`): Utf8/LargeUtf8 site and booster columns,
/// Float or Int payload, Int class.
fn load_parquet(path: &Path) -> Result<LaunchDataset, LoadError> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(open(path)?)?;
    let reader = builder.build()?;

    let mut records = Vec::new();
    let mut row_offset = 0usize;

    for batch_result in reader {
        let batch = batch_result?;
        let schema = batch.schema();

        let column = |name: &'static str| -> Result<usize, LoadError> {
            schema.index_of(name).map_err(|_| LoadError::MissingColumn(name))
        };
        let site_col = batch.column(column(COL_SITE)?);
        let payload_col = batch.column(column(COL_PAYLOAD)?);
        let class_col = batch.column(column(COL_CLASS)?);
        let booster_col = batch.column(column(COL_BOOSTER)?);

        for batch_row in 0..batch.num_rows() {
            let row = row_offset + batch_row;
            records.push(LaunchRecord {
                site: read_string(site_col, batch_row, row, COL_SITE)?,
                payload_mass_kg: read_f64(payload_col, batch_row, row, COL_PAYLOAD)?,
                outcome: decode_class(read_i64(class_col, batch_row, row, COL_CLASS)?, row)?,
                booster_category: read_string(booster_col, batch_row, row, COL_BOOSTER)?,
            });
        }
        row_offset += batch.num_rows();
    }

    Ok(LaunchDataset::from_records(records))
}

// -- Parquet / Arrow helpers --

fn null_check(col: &Arc<dyn Array>, batch_row: usize, row: usize, name: &str) -> Result<(), LoadError> {
    if col.is_null(batch_row) {
        return Err(LoadError::MalformedRow {
            row,
            detail: format!("null value in '{name}'"),
        });
    }
    Ok(())
}

fn read_string(col: &Arc<dyn Array>, batch_row: usize, row: usize, name: &str) -> Result<String, LoadError> {
    null_check(col, batch_row, row, name)?;
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col.as_any().downcast_ref::<StringArray>().unwrap();
            Ok(arr.value(batch_row).to_string())
        }
        DataType::LargeUtf8 => {
            let arr = col.as_string::<i64>();
            Ok(arr.value(batch_row).to_string())
        }
        other => Err(LoadError::MalformedRow {
            row,
            detail: format!("'{name}' has type {other:?}, expected Utf8"),
        }),
    }
}

fn read_f64(col: &Arc<dyn Array>, batch_row: usize, row: usize, name: &str) -> Result<f64, LoadError> {
    null_check(col, batch_row, row, name)?;
    match col.data_type() {
        DataType::Float64 => {
            let arr = col.as_any().downcast_ref::<Float64Array>().unwrap();
            Ok(arr.value(batch_row))
        }
        DataType::Float32 => {
            let arr = col.as_any().downcast_ref::<Float32Array>().unwrap();
            Ok(arr.value(batch_row) as f64)
        }
        DataType::Int64 => {
            let arr = col.as_any().downcast_ref::<Int64Array>().unwrap();
            Ok(arr.value(batch_row) as f64)
        }
        DataType::Int32 => {
            let arr = col.as_any().downcast_ref::<Int32Array>().unwrap();
            Ok(arr.value(batch_row) as f64)
        }
        other => Err(LoadError::MalformedRow {
            row,
            detail: format!("'{name}' has type {other:?}, expected a numeric type"),
        }),
    }
}

fn read_i64(col: &Arc<dyn Array>, batch_row: usize, row: usize, name: &str) -> Result<i64, LoadError> {
    null_check(col, batch_row, row, name)?;
    match col.data_type() {
        DataType::Int64 => {
            let arr = col.as_any().downcast_ref::<Int64Array>().unwrap();
            Ok(arr.value(batch_row))
        }
        DataType::Int32 => {
            let arr = col.as_any().downcast_ref::<Int32Array>().unwrap();
            Ok(arr.value(batch_row) as i64)
        }
        other => Err(LoadError::MalformedRow {
            row,
            detail: format!("'{name}' has type {other:?}, expected an integer type"),
        }),
    }
}
