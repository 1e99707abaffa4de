pub mod error;
pub mod loader;
pub mod pipeline;

pub use error::{CatalogError, Result};
pub use loader::{load_titles, require_columns};
pub use pipeline::{
    build_score_histogram, build_type_totals, build_yearly_type_counts, normalize_to_percentages,
    ScoreHistogram, TypeTotals, YearlyTypeCounts,
};

pub const RELEASE_YEAR: &str = "release_year";
pub const TYPE: &str = "type";
pub const IMDB_SCORE: &str = "imdb_score";
pub const COUNT: &str = "count";
pub const PERCENTAGE: &str = "percentage";
