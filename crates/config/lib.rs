use log::{debug, info};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = ".title-charts.yml";
pub const DEFAULT_DATASET: &str = "datasets/titles.csv";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub dataset: String,
    pub output_dir: String,
    /// display names for `type` values, e.g. SHOW -> "Tv Show"
    pub labels: HashMap<String, String>,
    pub charts: Charts,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Charts {
    #[serde(default = "Chart::default_line")]
    pub line: Chart,
    #[serde(default = "Chart::default_pie")]
    pub pie: Chart,
    #[serde(default = "Chart::default_bar")]
    pub bar: Chart,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Chart {
    pub file: String,
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for Config {
    fn default() -> Self {
        let labels = HashMap::from([
            ("MOVIE".to_string(), "Movie".to_string()),
            ("SHOW".to_string(), "Tv Show".to_string()),
        ]);
        Config {
            dataset: DEFAULT_DATASET.to_string(),
            output_dir: ".".to_string(),
            labels,
            charts: Charts::default(),
        }
    }
}

impl Default for Charts {
    fn default() -> Self {
        Charts {
            line: Chart::default_line(),
            pie: Chart::default_pie(),
            bar: Chart::default_bar(),
        }
    }
}

impl Chart {
    fn new(file: &str, title: &str, width: u32, height: u32) -> Self {
        Chart {
            file: file.to_string(),
            title: title.to_string(),
            width,
            height,
        }
    }

    pub fn default_line() -> Self {
        Chart::new(
            "linplot.png",
            "No of Movies/shows trend on netflix: 1950-2021.",
            1200,
            1200,
        )
    }

    pub fn default_pie() -> Self {
        Chart::new(
            "pieplot.png",
            "Percentage of Movies/shows on netflix",
            600,
            600,
        )
    }

    pub fn default_bar() -> Self {
        Chart::new(
            "barplot.png",
            "IMDB ratings breakdown on netflix shows/movies.",
            640,
            480,
        )
    }
}

impl Config {
    pub fn new(filename: &str) -> Result<Config, ConfigError> {
        let reader = File::open(filename).map_err(|source| ConfigError::Io {
            path: PathBuf::from(filename),
            source,
        })?;
        let config: Config = serde_yaml::from_reader(reader)?;
        debug!("config loaded from {}: {:?}", filename, config);
        Ok(config)
    }

    /// Reads `filename` if it exists, otherwise falls back to the built-in defaults.
    pub fn load_or_default(filename: &str) -> Result<Config, ConfigError> {
        if Path::new(filename).exists() {
            Config::new(filename)
        } else {
            info!("config file {} not found, using defaults", filename);
            Ok(Config::default())
        }
    }

    /// Display name for a `type` value, the raw value when no label is configured.
    pub fn label<'a>(&'a self, kind: &'a str) -> &'a str {
        self.labels.get(kind).map(String::as_str).unwrap_or(kind)
    }

    pub fn output_path(&self, chart: &Chart) -> PathBuf {
        Path::new(&self.output_dir).join(&chart.file)
    }
}
