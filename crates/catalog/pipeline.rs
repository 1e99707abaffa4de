use crate::error::{CatalogError, Result};
use crate::loader::require_columns;
use crate::{COUNT, IMDB_SCORE, PERCENTAGE, RELEASE_YEAR, TYPE};
use log::debug;
use polars::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

/// Release counts per year, one `UInt64` column per title type.
#[derive(Debug, Clone)]
pub struct YearlyTypeCounts {
    df: DataFrame,
    types: Vec<String>,
}

impl YearlyTypeCounts {
    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    /// Type names in column order, one chart series each.
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Rows ordered by `release_year` ascending.
    pub fn rows(&self) -> Result<Vec<(i64, BTreeMap<String, u64>)>> {
        let years = self.df.column(RELEASE_YEAR)?.i64()?;
        let columns = self
            .types
            .iter()
            .map(|kind| Ok(self.df.column(kind)?.u64()?))
            .collect::<Result<Vec<_>>>()?;

        let mut rows = Vec::with_capacity(self.df.height());
        for (idx, year) in years.into_iter().enumerate() {
            let Some(year) = year else { continue };
            let counts = self
                .types
                .iter()
                .zip(&columns)
                .map(|(kind, column)| (kind.clone(), column.get(idx).unwrap_or(0)))
                .collect();
            rows.push((year, counts));
        }
        Ok(rows)
    }
}

/// Row count per title type. A normalized table also carries a `percentage` column.
#[derive(Debug, Clone)]
pub struct TypeTotals {
    df: DataFrame,
}

impl TypeTotals {
    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    pub fn total(&self) -> Result<u64> {
        Ok(self.df.column(COUNT)?.u64()?.sum().unwrap_or(0))
    }

    pub fn counts(&self) -> Result<Vec<(String, u64)>> {
        let kinds = self.df.column(TYPE)?.str()?;
        let counts = self.df.column(COUNT)?.u64()?;
        Ok(kinds
            .into_iter()
            .zip(counts)
            .filter_map(|(kind, count)| Some((kind?.to_string(), count.unwrap_or(0))))
            .collect())
    }

    /// Fails with a schema error until the table went through [`normalize_to_percentages`].
    pub fn percentages(&self) -> Result<Vec<(String, f64)>> {
        require_columns(&self.df, &[PERCENTAGE])?;
        let kinds = self.df.column(TYPE)?.str()?;
        let shares = self.df.column(PERCENTAGE)?.f64()?;
        Ok(kinds
            .into_iter()
            .zip(shares)
            .filter_map(|(kind, share)| Some((kind?.to_string(), share.unwrap_or(0.0))))
            .collect())
    }
}

/// Number of titles per integer IMDB score.
#[derive(Debug, Clone)]
pub struct ScoreHistogram {
    df: DataFrame,
}

impl ScoreHistogram {
    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    pub fn bins(&self) -> Result<Vec<(i64, u64)>> {
        let scores = self.df.column(IMDB_SCORE)?.i64()?;
        let counts = self.df.column(COUNT)?.u64()?;
        Ok(scores
            .into_iter()
            .zip(counts)
            .filter_map(|(score, count)| Some((score?, count.unwrap_or(0))))
            .collect())
    }
}

fn distinct_types(records: &DataFrame) -> Result<Vec<String>> {
    let kinds = records.column(TYPE)?.cast(&DataType::String)?;
    let kinds: BTreeSet<String> = kinds
        .str()?
        .into_iter()
        .flatten()
        .map(str::to_owned)
        .collect();
    Ok(kinds.into_iter().collect())
}

pub fn build_yearly_type_counts(records: &DataFrame) -> Result<YearlyTypeCounts> {
    require_columns(records, &[RELEASE_YEAR, TYPE])?;
    let types = distinct_types(records)?;

    // conditional counts keep years without a given type at zero instead of null
    let counts: Vec<Expr> = types
        .iter()
        .map(|kind| {
            col(TYPE)
                .eq(lit(kind.as_str()))
                .sum()
                .cast(DataType::UInt64)
                .alias(kind)
        })
        .collect();

    let df = records
        .clone()
        .lazy()
        .select([
            col(RELEASE_YEAR).cast(DataType::Int64),
            col(TYPE).cast(DataType::String),
        ])
        .filter(col(RELEASE_YEAR).is_not_null())
        .group_by([col(RELEASE_YEAR)])
        .agg(counts)
        .sort([RELEASE_YEAR], SortMultipleOptions::default())
        .collect()?;
    debug!("yearly type counts: {} years, types {:?}", df.height(), types);
    Ok(YearlyTypeCounts { df, types })
}

pub fn build_type_totals(records: &DataFrame) -> Result<TypeTotals> {
    require_columns(records, &[RELEASE_YEAR, TYPE])?;
    let df = records
        .clone()
        .lazy()
        .select([col(TYPE).cast(DataType::String)])
        .filter(col(TYPE).is_not_null())
        .group_by([col(TYPE)])
        .agg([len().cast(DataType::UInt64).alias(COUNT)])
        .sort([TYPE], SortMultipleOptions::default())
        .collect()?;
    debug!("type totals: {} types", df.height());
    Ok(TypeTotals { df })
}

/// Returns a new table with `percentage = 100 * count / total`; `count` is left untouched.
pub fn normalize_to_percentages(totals: &TypeTotals) -> Result<TypeTotals> {
    let total = totals.total()?;
    if total == 0 {
        return Err(CatalogError::Division);
    }
    let df = totals
        .df
        .clone()
        .lazy()
        .with_column(
            (col(COUNT).cast(DataType::Float64) * lit(100.0) / lit(total as f64)).alias(PERCENTAGE),
        )
        .collect()?;
    Ok(TypeTotals { df })
}

pub fn build_score_histogram(records: &DataFrame) -> Result<ScoreHistogram> {
    require_columns(records, &[IMDB_SCORE])?;
    // non-strict casts turn unparseable scores into nulls; nulls and negatives count as 0
    let score = col(IMDB_SCORE)
        .cast(DataType::Float64)
        .fill_null(lit(0.0))
        .cast(DataType::Int64)
        .fill_null(lit(0i64));
    let score = when(score.clone().lt(lit(0i64)))
        .then(lit(0i64))
        .otherwise(score);

    let df = records
        .clone()
        .lazy()
        .select([score.alias(IMDB_SCORE)])
        .group_by([col(IMDB_SCORE)])
        .agg([len().cast(DataType::UInt64).alias(COUNT)])
        .sort([IMDB_SCORE], SortMultipleOptions::default())
        .collect()?;
    debug!("score histogram: {} bins", df.height());
    Ok(ScoreHistogram { df })
}
