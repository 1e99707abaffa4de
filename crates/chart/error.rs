use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("nothing to draw for {chart} chart")]
    NoData { chart: &'static str },
    #[error("failed to draw {path}: {message}")]
    Draw { path: PathBuf, message: String },
}

impl RenderError {
    pub(crate) fn draw(path: &std::path::Path, err: Box<dyn std::error::Error>) -> Self {
        RenderError::Draw {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}
