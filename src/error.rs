use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Could not read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to upload image: {0}")]
    Status(StatusCode),
    #[error("Upload request failed")]
    Request(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("No image selected")]
    NoFileSelected,
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error("Analysis request failed")]
    Request(#[from] reqwest::Error),
    #[error("Analysis endpoint returned {0}")]
    AnalysisStatus(StatusCode),
}
