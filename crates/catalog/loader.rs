use crate::error::{CatalogError, Result};
use log::{debug, info};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

const INFER_SCHEMA_ROWS: usize = 10_000;

/// 读取标题数据集
///
/// Reads the delimited file at `path` (header row, inferred schema) into a
/// `DataFrame`. Columns other than the ones the pipeline needs are kept as-is.
pub fn load_titles<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
    let path = path.as_ref();
    info!("loading dataset: {}", path.display());
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .into_reader_with_file_handle(file)
        .finish()?;
    info!("dataset loaded: {} rows, {} columns", df.height(), df.width());
    debug!("dataset schema: {:?}", df.schema());
    Ok(df)
}

pub fn require_columns(df: &DataFrame, columns: &[&str]) -> Result<()> {
    match columns
        .iter()
        .find(|name| df.get_column_index(name).is_none())
    {
        Some(missing) => Err(CatalogError::Schema {
            column: missing.to_string(),
        }),
        None => Ok(()),
    }
}
